use std::path::Path;

use log::{info, warn};

use crate::{
    error::{Error, Result},
    material::Material,
    math::{Tuple, EPSILON},
};

use super::{SceneGraph, Shape, ShapeId};

/// Flat `[x, y, z, x, y, z, ..]` buffer into points or vectors.
fn gather(flat: &[f32], w: f64) -> Vec<Tuple> {
    flat.chunks_exact(3)
        .map(|c| Tuple::new(c[0] as f64, c[1] as f64, c[2] as f64, w))
        .collect()
}

impl SceneGraph {
    /// Load a Wavefront OBJ file as a group of triangles.
    ///
    /// Polygons are fanned into triangles. Every object or group in the file
    /// becomes a child group of the returned root group. Faces that carry
    /// vertex normals become smooth triangles. Degenerate faces are skipped.
    pub fn load_obj(&mut self, path: impl AsRef<Path>, material: Material) -> Result<ShapeId> {
        let path = path.as_ref();
        let (models, _) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                ..Default::default()
            },
        )?;

        if models.iter().all(|m| m.mesh.indices.is_empty()) {
            return Err(Error::EmptyObj(path.display().to_string()));
        }

        let root = self.insert(Shape::group());
        let mut triangles = 0;
        let mut skipped = 0;

        for model in models {
            let mesh = &model.mesh;
            let verts = gather(&mesh.positions, 1.);
            let normals = gather(&mesh.normals, 0.);
            let smooth = !normals.is_empty() && mesh.normal_indices.len() == mesh.indices.len();

            let group = self.insert(Shape::group());
            let mut faces = 0;

            for (face, tri) in mesh.indices.chunks_exact(3).enumerate() {
                let (p1, p2, p3) = (
                    verts[tri[0] as usize],
                    verts[tri[1] as usize],
                    verts[tri[2] as usize],
                );

                if (p2 - p1).cross(p3 - p1).magnitude() < EPSILON {
                    skipped += 1;
                    continue;
                }

                let shape = if smooth {
                    let n = &mesh.normal_indices[face * 3..face * 3 + 3];
                    Shape::smooth_triangle(
                        p1,
                        p2,
                        p3,
                        normals[n[0] as usize],
                        normals[n[1] as usize],
                        normals[n[2] as usize],
                    )
                } else {
                    Shape::triangle(p1, p2, p3)
                };

                let id = self.insert(shape.with_material(material.clone()));
                self.add_child(group, id)?;
                faces += 1;
            }

            info!("obj model {:?}: {} triangles", model.name, faces);
            triangles += faces;
            self.add_child(root, group)?;
        }

        if skipped > 0 {
            warn!("{}: skipped {} degenerate faces", path.display(), skipped);
        }
        info!("{}: loaded {} triangles", path.display(), triangles);

        Ok(root)
    }
}
