//! 2D vector, angle and cumulative rotation primitives.
//!
//! Layout
//! - `vector`: `Vector2D` value type and the `Size2D` extent.
//! - `radian`: raw angles with opt-in canonicalization (`truncated`,
//!   `shortest_angle`) and a tolerant zero test.
//! - `rotation`: direction-tagged cumulative rotation built from angle samples.
//! - `geom2`: angles between vectors, orientation, change of basis.
//!
//! Everything is a pure function over `Copy` values. Degenerate inputs (zero
//! vectors) propagate NaN instead of failing; guard with `has_magnitude` or
//! `is_zero`, or use the `Option`-returning helpers.

pub mod cfg;
pub mod geom2;
mod log;
pub mod radian;
pub mod rotation;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::ZERO_EPS;
pub use geom2::{
    angle_between, angle_c, angle_cc, change_of_basis, orientation, to_local_basis, Basis2,
    RotationOrientation,
};
pub use radian::{Radian, Sign, PI, TWO_PI};
pub use rotation::Rotation;
pub use vector::{Acceleration, Size2D, Vector2D, Velocity};

pub type AngularVelocity = Radian;
pub type AngularAcceleration = Radian;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        angle_between, angle_c, angle_cc, change_of_basis, orientation, to_local_basis, Basis2,
        RotationOrientation,
    };
    pub use crate::radian::{Radian, Sign, PI, TWO_PI};
    pub use crate::rotation::Rotation;
    pub use crate::vector::{Size2D, Vector2D};
}
