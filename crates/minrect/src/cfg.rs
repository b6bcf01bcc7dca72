//! Tolerance defaults (internal).
//!
//! Policy
//! - The hull and the solvers use exact float comparisons with explicit
//!   tie-break rules; tolerances only appear where two independently computed
//!   results are compared.

/// Relative tolerance when comparing rectangle areas from different strategies.
pub(crate) const AREA_REL_TOL: f64 = 1e-9;
/// Relative tolerance for pairs involving angle enumeration. Its angle
/// round trip (`atan2`, rotate, project) drifts by about `1e-6` relative on
/// hulls with aspect ratio near `1e9`.
pub(crate) const ANGLE_ENUM_REL_TOL: f64 = 1e-5;
/// Absolute floor for the area comparison (zero-area hulls).
pub(crate) const AREA_ABS_FLOOR: f64 = 1e-12;

/// True if `a` and `b` agree within `AREA_REL_TOL` (relative to the larger magnitude).
#[inline]
pub(crate) fn areas_agree(a: f64, b: f64) -> bool {
    areas_agree_within(a, b, AREA_REL_TOL)
}

#[inline]
pub(crate) fn areas_agree_within(a: f64, b: f64, rel_tol: f64) -> bool {
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= (rel_tol * scale).max(AREA_ABS_FLOOR)
}
