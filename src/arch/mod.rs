// Concrete clocks for the targets we run on.

#[cfg(feature = "cortex-m")]
pub mod systick;

#[cfg(feature = "std")]
pub mod std_clock;

#[cfg(feature = "cortex-m")]
pub use systick::SysTickClock;

#[cfg(feature = "std")]
pub use std_clock::StdClock;
