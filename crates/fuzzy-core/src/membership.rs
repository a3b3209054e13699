//! Trapezoidal Membership Functions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors in the static membership tables
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MembershipError {
    /// Breakpoints violate `a <= b <= c <= d` or are not finite
    #[error("malformed trapezoid for {set}: ({a}, {b}, {c}, {d})")]
    MalformedTrapezoid {
        set: &'static str,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    },
}

/// Trapezoidal fuzzy set over one input axis.
///
/// Degenerate shoulders (`a == b`, `c == d`) collapse the ramp into a step
/// that evaluates to full membership.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trapezoid {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Trapezoid {
    /// Construct without validation; `validate` must accept every table entry
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Check the `a <= b <= c <= d` invariant
    pub fn validate(&self, set: &'static str) -> Result<(), MembershipError> {
        let ordered = self.a <= self.b && self.b <= self.c && self.c <= self.d;
        let finite =
            self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite();
        if ordered && finite {
            Ok(())
        } else {
            Err(MembershipError::MalformedTrapezoid {
                set,
                a: self.a,
                b: self.b,
                c: self.c,
                d: self.d,
            })
        }
    }

    /// Degree of membership of `x`, in [0, 1].
    ///
    /// Zero outside `[a, d]`, linear ramps on `[a, b]` and `[c, d]`, full
    /// membership on `[b, c]`. NaN inputs read as outside every set.
    pub fn membership(&self, x: f64) -> f64 {
        if x.is_nan() || x < self.a || x > self.d {
            0.0
        } else if x <= self.b {
            if self.b == self.a {
                1.0
            } else {
                (x - self.a) / (self.b - self.a)
            }
        } else if x < self.c {
            1.0
        } else if self.d == self.c {
            1.0
        } else {
            (self.d - x) / (self.d - self.c)
        }
    }
}
