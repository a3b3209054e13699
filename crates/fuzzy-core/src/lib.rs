//! Fuzzy Potability Core
//!
//! Trapezoidal membership evaluation, fuzzification of the three
//! water-quality dimensions, and centroid defuzzification.

mod defuzz;
mod membership;
mod sets;
mod tier;

pub use defuzz::{defuzzify, defuzzify_at, DEFAULT_RESOLUTION};
pub use membership::{MembershipError, Trapezoid};
pub use sets::{
    fuzzify_ph, fuzzify_tds, fuzzify_turbidity, verify_tables, BandVector, PhBand, PhVector,
    QualityBand,
};
pub use tier::{Potability, TierStrengths};
