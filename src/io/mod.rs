pub mod args;
pub mod obj_loader;
