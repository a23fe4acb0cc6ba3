//! Presence zones on top of a time-of-flight ranging sensor.
//!
//! A [`ZoneMonitor`] owns a ranging driver and a list of distance windows
//! ([`Zone`]s). Each tick it reads one sample and feeds it to every zone.
//! A zone reports "entered" or "exited" only after `certainty_factor`
//! consecutive samples fall on the same side of its window.
//!
//! ```ignore
//! use tof_zone_monitor::{EnterCallback, ExitCallback, MonitorConfig, ZoneMonitor};
//!
//! fn on_enter(mm: u16) { /* ... */ }
//! fn on_exit() { /* ... */ }
//!
//! let config = MonitorConfig::new().with_certainty_factor(3);
//! let mut monitor = ZoneMonitor::new(vl53l1x, clock, None, config);
//! monitor.init()?;
//! monitor.add_zone(100, 300, EnterCallback::Fn(on_enter), ExitCallback::Fn(on_exit));
//! loop {
//!     monitor.update();
//! }
//! ```
//!
//! Everything runs on the caller's thread; nothing here is interrupt-safe.
//!
//! # Features
//!
//! - `log` (default): diagnostics through the `log` facade.
//! - `defmt`: diagnostics through `defmt`; takes precedence over `log`.
//! - `std`: [`arch::StdClock`].
//! - `cortex-m`: [`arch::SysTickClock`], which owns the SysTick exception.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod arch;
pub mod callback;
pub mod config;
pub mod error;
pub mod hal;
pub mod monitor;
pub mod zone;

pub use callback::{EnterCallback, ExitCallback};
pub use config::MonitorConfig;
pub use error::MonitorError;
pub use hal::{Clock, DistanceMode, Millimeters, RangingSource};
pub use monitor::{Tick, ZoneMonitor};
pub use zone::{Transition, Zone};
