// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Process-wide numerical tolerance.
//!
//! A single `f64` shared by every equality, zero, identity, and degeneracy
//! check in the crate. The value is stored as raw bits in an [`AtomicU64`] so
//! concurrent readers and writers never observe a torn value; there is no
//! ordering between a `set_tolerance` on one thread and comparisons already in
//! flight on another.
//!
//! Comparisons are non-strict: a difference exactly equal to the tolerance
//! counts as equal. A negative tolerance is accepted and effectively disables
//! fuzzy equality (`|d| <= negative` never holds).

use std::sync::atomic::{AtomicU64, Ordering};

/// Tolerance installed at startup.
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

static TOLERANCE_BITS: AtomicU64 = AtomicU64::new(DEFAULT_TOLERANCE.to_bits());

/// Returns the current tolerance.
#[inline]
pub fn tolerance() -> f64 {
    f64::from_bits(TOLERANCE_BITS.load(Ordering::Relaxed))
}

/// Overwrites the global tolerance and returns the previous value.
///
/// No validation is performed; see the module docs for negative values.
pub fn set_tolerance(value: f64) -> f64 {
    let previous = f64::from_bits(TOLERANCE_BITS.swap(value.to_bits(), Ordering::Relaxed));
    if value < 0.0 {
        tracing::debug!(previous, value, "negative tolerance installed; fuzzy equality disabled");
    } else {
        tracing::debug!(previous, value, "tolerance updated");
    }
    previous
}

/// Restores [`DEFAULT_TOLERANCE`].
pub fn reset_tolerance() -> f64 {
    set_tolerance(DEFAULT_TOLERANCE)
}

/// `true` when `|a - b| <= tolerance()`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= tolerance()
}

/// `true` when `|value| <= tolerance()`.
#[inline]
pub fn is_near_zero(value: f64) -> bool {
    value.abs() <= tolerance()
}

/// Restores the tolerance that was active when it was created.
///
/// Created by [`scoped_tolerance`].
#[derive(Debug)]
#[must_use = "the previous tolerance is restored as soon as the guard is dropped"]
pub struct ToleranceGuard {
    previous: f64,
}

impl ToleranceGuard {
    /// Tolerance that will be restored on drop.
    pub fn previous(&self) -> f64 {
        self.previous
    }
}

impl Drop for ToleranceGuard {
    fn drop(&mut self) {
        set_tolerance(self.previous);
    }
}

/// Installs `value` until the returned guard is dropped.
///
/// The override is still process-wide; callers running in parallel must
/// serialize around it themselves.
pub fn scoped_tolerance(value: f64) -> ToleranceGuard {
    ToleranceGuard {
        previous: set_tolerance(value),
    }
}
