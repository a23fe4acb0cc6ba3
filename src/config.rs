/// Runtime settings of a [`ZoneMonitor`](crate::ZoneMonitor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Minimum gap between two zone evaluations; also the sensor's
    /// continuous-ranging period.
    pub update_interval_ms: u32,
    /// Consecutive same-side samples needed to flip a zone. 0 behaves as 1.
    pub certainty_factor: u32,
}

impl MonitorConfig {
    pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 50;
    pub const DEFAULT_CERTAINTY_FACTOR: u32 = 1;

    pub const fn new() -> Self {
        Self {
            update_interval_ms: Self::DEFAULT_UPDATE_INTERVAL_MS,
            certainty_factor: Self::DEFAULT_CERTAINTY_FACTOR,
        }
    }

    pub const fn with_update_interval_ms(mut self, interval_ms: u32) -> Self {
        self.update_interval_ms = interval_ms;
        self
    }

    pub const fn with_certainty_factor(mut self, certainty: u32) -> Self {
        self.certainty_factor = certainty;
        self
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new()
    }
}
