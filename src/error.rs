use thiserror::Error;

/// Failures reported by [`ZoneMonitor`](crate::ZoneMonitor).
///
/// `E` is the ranging driver's own error type. Tick-time failures never show
/// up here; a failed read just skips the tick.
#[derive(Debug, Error)]
pub enum MonitorError<E: core::fmt::Debug> {
    /// Sensor probe, or the switch to continuous ranging, failed.
    #[error("ranging sensor initialization failed: {0:?}")]
    Init(E),

    /// A configuration pass-through was rejected by the driver.
    #[error("ranging sensor rejected configuration: {0:?}")]
    Sensor(E),
}
