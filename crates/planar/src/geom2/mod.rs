//! 2D geometry helpers on top of `Vector2D` and `Radian`.
//!
//! - `angles`: unsigned, counter-clockwise and clockwise-range angles between
//!   vectors, and orientation classification.
//! - `basis`: change of basis between a local axis frame and the ambient plane.

mod angles;
mod basis;

pub use angles::{angle_between, angle_c, angle_cc, orientation, RotationOrientation};
pub use basis::{change_of_basis, to_local_basis, Basis2};
