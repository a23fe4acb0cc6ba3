use super::Millimeters;

/// Ranging preset of the sensor: trades maximum range against ambient
/// light immunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DistanceMode {
    Short,
    Medium,
    Long,
}

/// A time-of-flight ranging driver running in continuous mode.
///
/// Everything register-level (I2C transport, calibration, data-ready
/// polling) lives behind this trait. The monitor calls `data_ready` without
/// blocking and only calls `read_mm` after it returned `Ok(true)`.
pub trait RangingSource {
    /// Bus handle the driver talks over, e.g. an I2C peripheral.
    type Bus;
    /// Driver error, usually wrapping the bus error.
    type Error: core::fmt::Debug;

    /// Bind the driver to a bus other than its default one.
    fn set_bus(&mut self, bus: Self::Bus);

    /// Probe and configure the sensor.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Start back-to-back measurements, one every `period_ms`.
    fn start_continuous(&mut self, period_ms: u32) -> Result<(), Self::Error>;

    fn set_distance_mode(&mut self, mode: DistanceMode) -> Result<(), Self::Error>;
    fn distance_mode(&mut self) -> DistanceMode;

    /// Time spent on a single measurement, in microseconds.
    fn set_measurement_timing_budget(&mut self, budget_us: u32) -> Result<(), Self::Error>;
    fn measurement_timing_budget(&mut self) -> u32;

    /// Bus transaction timeout in milliseconds; 0 disables it.
    fn set_timeout(&mut self, timeout_ms: u16);
    fn timeout(&mut self) -> u16;

    /// Whether a fresh sample is waiting. Must not block.
    fn data_ready(&mut self) -> Result<bool, Self::Error>;

    /// Read the pending sample.
    fn read_mm(&mut self) -> Result<Millimeters, Self::Error>;
}
