//! Water Sensor Telemetry
//!
//! Frame types, plausibility checking, and noise filtering for probe readings.

mod error;
mod filter;
mod frame;
mod plausibility;

pub use error::ValidationError;
pub use filter::{MedianFilter, ProbeFilter};
pub use frame::WaterReading;
pub use plausibility::{PlausibilityConfig, PlausibilityReport, ReadingValidator};
