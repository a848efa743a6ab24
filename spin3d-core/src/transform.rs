/// Rigid rotation transforms applied to shape vertices each animation step
use nalgebra::{Matrix3, Point3, Rotation3, Vector3};

/// Transform builder for per-step vertex rotations
pub struct Transform;

impl Transform {
    /// Rotation about a single axis by `angle` radians (right-handed)
    pub fn axis_rotation(axis: Vector3<f64>, angle: f64) -> Matrix3<f64> {
        Rotation3::new(axis * angle).into_inner()
    }

    /// Composed per-step rotation: X, then Y, then Z, all by the same angle.
    ///
    /// Vertices are row vectors multiplied on the right (`v' = v·Rx·Ry·Rz`).
    /// The returned matrix is the equivalent column-vector transform, so
    /// callers apply it as `m * v`.
    pub fn rotation_matrix(angle: f64) -> Matrix3<f64> {
        let rx = Self::axis_rotation(Vector3::x(), angle);
        let ry = Self::axis_rotation(Vector3::y(), angle);
        let rz = Self::axis_rotation(Vector3::z(), angle);

        (rx * ry * rz).transpose()
    }

    /// Apply a column-vector transform to every vertex in place
    pub fn apply(matrix: &Matrix3<f64>, vertices: &mut [Point3<f64>]) {
        for vertex in vertices.iter_mut() {
            *vertex = Point3::from(matrix * vertex.coords);
        }
    }

    /// Uniform scale applied to canonical unit meshes so that every shape of
    /// the same `size` spans a comparable volume
    pub fn unit_scale(size: f64) -> f64 {
        size / 3f64.sqrt()
    }
}
