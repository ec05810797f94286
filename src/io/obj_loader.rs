use log::{info, warn};
use nalgebra::Point3;
use std::path::Path;

/// A triangle mesh: vertex positions plus faces of three vertex
/// indices each. Normals and texture coordinates in the source file
/// are ignored; this renderer only shades flat per-face colors.
#[derive(Debug, Clone)]
pub struct Model {
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<[u32; 3]>,
}

impl Model {
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The three vertex indices of face `i`. An out-of-range face
    /// index, or a face referencing a vertex past the vertex list,
    /// is an error for the caller to propagate; it indicates a corrupt
    /// model that later stages cannot safely continue past.
    pub fn face(&self, i: usize) -> Result<[usize; 3], String> {
        let face = self
            .faces
            .get(i)
            .ok_or_else(|| format!("Face index {} out of range ({} faces)", i, self.faces.len()))?;
        Ok([face[0] as usize, face[1] as usize, face[2] as usize])
    }

    /// The position of vertex `i`, with the same out-of-range policy
    /// as `face`.
    pub fn vertex(&self, i: usize) -> Result<Point3<f32>, String> {
        self.vertices.get(i).copied().ok_or_else(|| {
            format!(
                "Vertex index {} out of range ({} vertices)",
                i,
                self.vertices.len()
            )
        })
    }
}

/// Loads an OBJ file into a single merged `Model`.
///
/// Uses the `tobj` crate with triangulation, so polygon faces arrive
/// as triangles. Multiple meshes in the file are merged into one
/// vertex/face list with rebased indices. Materials are ignored.
/// A file with no faces is valid and renders a blank frame.
///
/// Faces referencing vertices past the mesh's vertex list are dropped
/// here with a warning: a file-level inconsistency is recoverable at
/// load time, so models returned by this function never trip the
/// out-of-range errors in [`Model::face`] and [`Model::vertex`]. Those
/// errors remain for models constructed or mutated by other means.
pub fn load_obj<P: AsRef<Path>>(obj_path: P) -> Result<Model, String> {
    let obj_path_ref = obj_path.as_ref();
    info!("Loading OBJ file: {:?}", obj_path_ref);

    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
    };

    // Only positions are needed; the materials result is ignored
    let (meshes, _materials) = tobj::load_obj(obj_path_ref, &load_options)
        .map_err(|e| format!("Failed to load OBJ {:?}: {}", obj_path_ref, e))?;

    let mut vertices: Vec<Point3<f32>> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();

    for mesh in meshes.iter() {
        let m = &mesh.mesh;
        if m.indices.len() % 3 != 0 {
            return Err(format!(
                "Mesh '{}' has a non-triangulated index count ({})",
                mesh.name,
                m.indices.len()
            ));
        }

        let base = vertices.len() as u32;
        let mesh_vertex_count = m.positions.len() / 3;
        for chunk in m.positions.chunks_exact(3) {
            vertices.push(Point3::new(chunk[0], chunk[1], chunk[2]));
        }

        let mut skipped = 0usize;
        for idx in m.indices.chunks_exact(3) {
            if idx.iter().any(|&i| i as usize >= mesh_vertex_count) {
                skipped += 1;
                continue;
            }
            faces.push([base + idx[0], base + idx[1], base + idx[2]]);
        }
        if skipped > 0 {
            warn!(
                "Mesh '{}': skipped {} faces with out-of-range vertex indices",
                mesh.name, skipped
            );
        }

        info!(
            "Processed mesh '{}': {} vertices, {} triangles",
            mesh.name,
            mesh_vertex_count,
            m.indices.len() / 3
        );
    }

    if faces.is_empty() {
        warn!("Model {:?} contains no faces; the frame will be blank", obj_path_ref);
    }

    Ok(Model { vertices, faces })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp_obj(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_triangles_from_an_obj_file() {
        let path = write_temp_obj(
            "meshraster_loader_tri.obj",
            "v 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nf 1 2 3\n",
        );
        let model = load_obj(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(model.face_count(), 1);
        assert_eq!(model.face(0).unwrap(), [0, 1, 2]);
        assert_eq!(model.vertex(1).unwrap(), Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn quads_are_triangulated() {
        let path = write_temp_obj(
            "meshraster_loader_quad.obj",
            "v 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 1.0 1.0 0.0\nv 0.0 1.0 0.0\nf 1 2 3 4\n",
        );
        let model = load_obj(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(model.face_count(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_obj("definitely/not/here.obj").is_err());
    }

    #[test]
    fn out_of_range_lookups_are_errors() {
        let model = Model {
            vertices: vec![Point3::new(0.0, 0.0, 0.0)],
            faces: vec![[0, 0, 0]],
        };
        assert!(model.face(1).is_err());
        assert!(model.vertex(1).is_err());
        assert!(model.face(0).is_ok());
    }
}
