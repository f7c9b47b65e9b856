//! Change of basis between a local axis frame and the ambient plane.
//!
//! A frame is given by an origin and a second point that fixes the direction
//! of the local x-axis. Local coordinates are `(along-axis, orthogonal)`; the
//! orthogonal axis is the x-axis turned a quarter turn clockwise, which is
//! "down" in y-down screen coordinates.

use nalgebra::{Matrix2, Vector2};

use crate::vector::Vector2D;

/// Orthonormal frame anchored at `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis2 {
    pub origin: Vector2D,
    /// Columns: unit x-axis, unit orthogonal axis.
    pub m: Matrix2<f64>,
}

impl Basis2 {
    /// Frame whose x-axis points from `origin` toward `point_on_x_axis`.
    /// None when the two points coincide (or are NaN).
    pub fn new(origin: Vector2D, point_on_x_axis: Vector2D) -> Option<Self> {
        (point_on_x_axis - origin)
            .has_magnitude()
            .then(|| Self::new_unchecked(origin, point_on_x_axis))
    }

    /// Degenerate inputs give a NaN frame.
    fn new_unchecked(origin: Vector2D, point_on_x_axis: Vector2D) -> Self {
        let v = origin - point_on_x_axis;
        let axis = -v.unit();
        let orth = v.orthogonal_unit();
        Self {
            origin,
            m: Matrix2::from_columns(&[Vector2::from(axis), Vector2::from(orth)]),
        }
    }

    #[inline]
    pub fn x_axis(&self) -> Vector2D {
        Vector2D::new(self.m[(0, 0)], self.m[(1, 0)])
    }

    #[inline]
    pub fn orthogonal_axis(&self) -> Vector2D {
        Vector2D::new(self.m[(0, 1)], self.m[(1, 1)])
    }

    /// Local `(along-axis, orthogonal)` coordinates to the ambient plane.
    #[inline]
    pub fn to_ambient(&self, local: Vector2D) -> Vector2D {
        self.origin + Vector2D::from(self.m * Vector2::from(local))
    }

    /// Inverse of `to_ambient`; the frame is orthonormal so the transpose inverts it.
    #[inline]
    pub fn to_local(&self, ambient: Vector2D) -> Vector2D {
        (self.m.transpose() * Vector2::from(ambient - self.origin)).into()
    }
}

/// Re-express `point`, given as `(along-axis, orthogonal)` in the frame at
/// `new_origin` facing `point_on_x_axis`, in ambient coordinates.
pub fn change_of_basis(point: Vector2D, new_origin: Vector2D, point_on_x_axis: Vector2D) -> Vector2D {
    Basis2::new_unchecked(new_origin, point_on_x_axis).to_ambient(point)
}

/// Inverse of `change_of_basis`.
pub fn to_local_basis(point: Vector2D, origin: Vector2D, point_on_x_axis: Vector2D) -> Vector2D {
    Basis2::new_unchecked(origin, point_on_x_axis).to_local(point)
}
