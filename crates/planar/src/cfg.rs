//! Tolerance defaults for angle comparisons.
//!
//! Policy
//! - Defaults are fixed constants. Call sites that need a different tolerance
//!   pass it explicitly (`Radian::is_zero_eps`) instead of mutating a global.

/// Raw radian magnitude below which an angle counts as zero (`Radian::is_zero`).
pub const ZERO_EPS: f64 = 1e-4;

/// Tolerance for float comparisons in unit tests.
#[cfg(test)]
pub(crate) const TEST_EPS: f64 = 1e-9;
