//! Capabilities the monitor depends on but does not implement.
//!
//! A board crate (or a test) supplies concrete types for these; the monitor
//! only ever talks to the traits.

pub mod hal_clock;
pub mod hal_ranging;

pub use hal_clock::Clock;
pub use hal_ranging::{DistanceMode, RangingSource};

/// Distance in millimetres, as reported by the ranging source.
pub type Millimeters = u16;
