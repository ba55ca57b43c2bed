//! Nutrition calculation module
//!
//! Scales per-100-gram provider records to actual portion sizes.

pub mod scaler;

pub use scaler::{scale, ScaledPortion};
