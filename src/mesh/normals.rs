//! Face and vertex normals for indexed polygon meshes

use crate::rasterizer::Vec3;

#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("Polygon {polygon} references vertex {index}, mesh has {vertex_count}")]
    IndexOutOfRange {
        polygon: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("Expected {expected} polygons, got {actual}")]
    FaceCountMismatch { expected: usize, actual: usize },
}

/// Normal storage sized for one mesh: one entry per vertex and per face.
#[derive(Debug, Clone)]
pub struct MeshNormals {
    vertex_normals: Vec<Vec3>,
    face_normals: Vec<Vec3>,
}

impl MeshNormals {
    pub fn new(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertex_normals: vec![Vec3::ZERO; vertex_count],
            face_normals: vec![Vec3::ZERO; face_count],
        }
    }

    pub fn vertex_normals(&self) -> &[Vec3] {
        &self.vertex_normals
    }

    pub fn face_normals(&self) -> &[Vec3] {
        &self.face_normals
    }

    /// Compute one unit normal per polygon from its first three vertices.
    ///
    /// The normal follows the right-hand rule on the polygon's winding.
    /// Polygons with fewer than three vertices, or whose first three are
    /// collinear, get the zero vector.
    pub fn compute_face_normals(
        &mut self,
        polygons: &[Vec<usize>],
        vertices: &[Vec3],
    ) -> Result<(), MeshError> {
        self.check_face_count(polygons)?;

        for (i, polygon) in polygons.iter().enumerate() {
            if polygon.len() < 3 {
                self.face_normals[i] = Vec3::ZERO;
                continue;
            }

            let fetch = |index: usize| {
                vertices.get(index).copied().ok_or(MeshError::IndexOutOfRange {
                    polygon: i,
                    index,
                    vertex_count: vertices.len(),
                })
            };
            let v0 = fetch(polygon[0])?;
            let v1 = fetch(polygon[1])?;
            let v2 = fetch(polygon[2])?;

            let edge1 = v1 - v0;
            let edge2 = v2 - v0;
            self.face_normals[i] = edge1.cross(edge2).normalize();
        }

        Ok(())
    }

    /// Average the face normals around every vertex.
    ///
    /// Uses the face normals from the last [`compute_face_normals`] call.
    /// Vertices not referenced by any polygon keep the zero vector.
    ///
    /// [`compute_face_normals`]: MeshNormals::compute_face_normals
    pub fn compute_vertex_normals(&mut self, polygons: &[Vec<usize>]) -> Result<(), MeshError> {
        self.check_face_count(polygons)?;

        let vertex_count = self.vertex_normals.len();
        for normal in &mut self.vertex_normals {
            *normal = Vec3::ZERO;
        }

        for (i, polygon) in polygons.iter().enumerate() {
            let face_normal = self.face_normals[i];
            for &index in polygon {
                let slot = self.vertex_normals.get_mut(index).ok_or(MeshError::IndexOutOfRange {
                    polygon: i,
                    index,
                    vertex_count,
                })?;
                *slot += face_normal;
            }
        }

        for normal in &mut self.vertex_normals {
            *normal = normal.normalize();
        }

        Ok(())
    }

    fn check_face_count(&self, polygons: &[Vec<usize>]) -> Result<(), MeshError> {
        if polygons.len() != self.face_normals.len() {
            return Err(MeshError::FaceCountMismatch {
                expected: self.face_normals.len(),
                actual: polygons.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_new_is_zeroed() {
        let n = MeshNormals::new(3, 2);
        assert_eq!(n.vertex_normals(), &[Vec3::ZERO; 3]);
        assert_eq!(n.face_normals(), &[Vec3::ZERO; 2]);
    }

    #[test]
    fn test_face_normal_right_hand() {
        let vertices = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let polygons = vec![vec![0, 1, 2]];
        let mut n = MeshNormals::new(3, 1);
        n.compute_face_normals(&polygons, &vertices).unwrap();
        assert!(approx(n.face_normals()[0], Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_short_polygon_gets_zero_normal() {
        let vertices = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];
        let polygons = vec![vec![0, 1]];
        let mut n = MeshNormals::new(2, 1);
        n.compute_face_normals(&polygons, &vertices).unwrap();
        assert_eq!(n.face_normals()[0], Vec3::ZERO);
    }

    #[test]
    fn test_vertex_normals_average_faces() {
        // Two faces folded along the y axis: one facing +z, one facing +x
        let vertices = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        let polygons = vec![vec![0, 2, 1], vec![0, 1, 3]];
        let mut n = MeshNormals::new(4, 2);
        n.compute_face_normals(&polygons, &vertices).unwrap();
        assert!(approx(n.face_normals()[0], Vec3::new(0.0, 0.0, 1.0)));
        assert!(approx(n.face_normals()[1], Vec3::new(1.0, 0.0, 0.0)));

        n.compute_vertex_normals(&polygons).unwrap();
        let shared = Vec3::new(1.0, 0.0, 1.0).normalize();
        assert!(approx(n.vertex_normals()[0], shared));
        assert!(approx(n.vertex_normals()[1], shared));
        assert!(approx(n.vertex_normals()[2], Vec3::new(0.0, 0.0, 1.0)));
        assert!(approx(n.vertex_normals()[3], Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_opposite_faces_cancel_to_zero() {
        let vertices = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let polygons = vec![vec![0, 1, 2], vec![0, 2, 1]];
        let mut n = MeshNormals::new(3, 2);
        n.compute_face_normals(&polygons, &vertices).unwrap();
        n.compute_vertex_normals(&polygons).unwrap();
        assert!(n.vertex_normals().iter().all(|&v| v == Vec3::ZERO));
    }

    #[test]
    fn test_bad_index_is_error() {
        let vertices = [Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)];
        let polygons = vec![vec![0, 1, 5]];
        let mut n = MeshNormals::new(2, 1);
        assert!(matches!(
            n.compute_face_normals(&polygons, &vertices),
            Err(MeshError::IndexOutOfRange { polygon: 0, index: 5, vertex_count: 2 })
        ));
    }

    #[test]
    fn test_face_count_mismatch() {
        let mut n = MeshNormals::new(3, 2);
        let polygons = vec![vec![0, 1, 2]];
        assert!(matches!(
            n.compute_vertex_normals(&polygons),
            Err(MeshError::FaceCountMismatch { expected: 2, actual: 1 })
        ));
    }
}
