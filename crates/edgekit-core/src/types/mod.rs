pub mod float64;
pub mod timestamp;

pub use float64::{Float64, Float64Error};
pub use timestamp::{Timestamp, TimestampError};
