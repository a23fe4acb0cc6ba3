//! The zone monitor: owns the ranging source and a list of zones, and feeds
//! every zone from one sample per tick.
//!
//! Intended use is a cooperative main loop:
//!
//! ```ignore
//! let mut monitor = ZoneMonitor::new(sensor, clock, Some(i2c), MonitorConfig::default());
//! monitor.init()?;
//! monitor.add_zone(100, 300, EnterCallback::Fn(door_open), ExitCallback::Fn(door_closed));
//!
//! loop {
//!     monitor.update();
//!     // other work
//! }
//! ```
//!
//! `update` may be called as often as convenient; it reads the sensor at most
//! once per `update_interval_ms`. Callbacks run inline, in zone insertion
//! order, and must not call back into the monitor.

use alloc::vec::Vec;

use crate::callback::{EnterCallback, ExitCallback};
use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::hal::{Clock, DistanceMode, Millimeters, RangingSource};
use crate::zone::{Transition, Zone};

/// Outcome of one call to [`ZoneMonitor::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Called again before `update_interval_ms` elapsed; sensor untouched.
    Throttled,
    /// Interval elapsed but no sample was available (or the read failed).
    NoData,
    /// This sample was fed to every zone.
    Evaluated(Millimeters),
}

pub struct ZoneMonitor<S, C>
where
    S: RangingSource,
    C: Clock,
{
    sensor: S,
    clock: C,
    zones: Vec<Zone>,
    update_interval_ms: u32,
    last_update_time: u32,
    certainty_factor: u32,
    initialized: bool,
}

impl<S, C> ZoneMonitor<S, C>
where
    S: RangingSource,
    C: Clock,
{
    /// Build a monitor around `sensor`. If `bus` is given the sensor is bound
    /// to it; no other I/O happens until [`init`](Self::init).
    pub fn new(mut sensor: S, clock: C, bus: Option<S::Bus>, config: MonitorConfig) -> Self {
        if let Some(bus) = bus {
            sensor.set_bus(bus);
        }
        ZoneMonitor {
            sensor,
            clock,
            zones: Vec::new(),
            update_interval_ms: config.update_interval_ms,
            last_update_time: 0,
            certainty_factor: config.certainty_factor,
            initialized: false,
        }
    }

    /// Default bus, 50 ms interval, certainty 1.
    pub fn with_defaults(sensor: S, clock: C) -> Self {
        Self::new(sensor, clock, None, MonitorConfig::default())
    }

    /// Initialize the sensor and start continuous ranging at the update
    /// interval. Until this succeeds every tick reports [`Tick::NoData`].
    pub fn init(&mut self) -> Result<(), MonitorError<S::Error>> {
        self.initialized = false;
        if let Err(e) = self.sensor.init() {
            warn!("ranging sensor init failed");
            return Err(MonitorError::Init(e));
        }
        if let Err(e) = self.sensor.start_continuous(self.update_interval_ms) {
            warn!("ranging sensor refused continuous mode");
            return Err(MonitorError::Init(e));
        }
        self.initialized = true;
        info!("zone monitor running, period {} ms", self.update_interval_ms);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn set_distance_mode(&mut self, mode: DistanceMode) -> Result<(), MonitorError<S::Error>> {
        self.sensor.set_distance_mode(mode).map_err(MonitorError::Sensor)
    }

    pub fn distance_mode(&mut self) -> DistanceMode {
        self.sensor.distance_mode()
    }

    pub fn set_measurement_timing_budget(
        &mut self,
        budget_us: u32,
    ) -> Result<(), MonitorError<S::Error>> {
        self.sensor
            .set_measurement_timing_budget(budget_us)
            .map_err(MonitorError::Sensor)
    }

    pub fn measurement_timing_budget(&mut self) -> u32 {
        self.sensor.measurement_timing_budget()
    }

    pub fn set_timeout(&mut self, timeout_ms: u16) {
        self.sensor.set_timeout(timeout_ms);
    }

    pub fn timeout(&mut self) -> u16 {
        self.sensor.timeout()
    }

    /// Append a zone in the empty state and return its index. Overlapping
    /// zones are fine; each one fires on its own.
    pub fn add_zone(
        &mut self,
        min_distance: Millimeters,
        max_distance: Millimeters,
        on_enter: EnterCallback,
        on_exit: ExitCallback,
    ) -> usize {
        self.zones
            .push(Zone::with_callbacks(min_distance, max_distance, on_enter, on_exit));
        let index = self.zones.len() - 1;
        trace!("zone {} added: {}..={} mm", index, min_distance, max_distance);
        index
    }

    /// Rewrite the bounds of zone `index`. A bound of 0 means "keep the
    /// current one", so a zero upper bound cannot be set this way.
    ///
    /// Streaks and presence are left alone: an occupied zone whose new window
    /// no longer holds the object still needs a full out-streak (counted from
    /// the next sample) before it exits.
    pub fn update_zone(
        &mut self,
        index: usize,
        min_distance: Millimeters,
        max_distance: Millimeters,
    ) {
        let Some(zone) = self.zones.get_mut(index) else {
            return;
        };
        let min = (min_distance != 0).then_some(min_distance);
        let max = (max_distance != 0).then_some(max_distance);
        zone.set_bounds(min, max);
        trace!(
            "zone {} now {}..={} mm",
            index,
            zone.min_distance(),
            zone.max_distance()
        );
    }

    /// Remove zone `index`; every later zone moves down by one.
    pub fn delete_zone(&mut self, index: usize) {
        if index < self.zones.len() {
            self.zones.remove(index);
            trace!("zone {} deleted, {} left", index, self.zones.len());
        }
    }

    pub fn zone(&self, index: usize) -> Option<&Zone> {
        self.zones.get(index)
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Takes effect on the next sample. Existing streaks are kept, so a lower
    /// value can flip a zone on the very next sample.
    pub fn set_certainty_factor(&mut self, certainty: u32) {
        self.certainty_factor = certainty;
    }

    pub fn certainty_factor(&self) -> u32 {
        self.certainty_factor
    }

    pub fn update_interval_ms(&self) -> u32 {
        self.update_interval_ms
    }

    /// Run one tick if the update interval has elapsed.
    pub fn update(&mut self) -> Tick {
        self.perform_update()
    }

    /// Presence flag of zone `index`, after running a tick. Out-of-range
    /// indices read as `false`. Use [`zone`](Self::zone) for a query without
    /// the tick.
    pub fn is_object_in_zone(&mut self, index: usize) -> bool {
        self.perform_update();
        self.zones.get(index).is_some_and(Zone::is_object_present)
    }

    /// Latest sample if one is ready, else 0. Diagnostic only: the sample is
    /// consumed without being fed to the zones, so they may miss it.
    pub fn read_distance(&mut self) -> Millimeters {
        self.next_sample().unwrap_or(0)
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Tear down the monitor and hand back the sensor and the clock.
    pub fn release(self) -> (S, C) {
        (self.sensor, self.clock)
    }

    fn perform_update(&mut self) -> Tick {
        let now = self.clock.now_ms();
        if now.wrapping_sub(self.last_update_time) < self.update_interval_ms {
            trace!("tick throttled at {} ms", now);
            return Tick::Throttled;
        }
        self.last_update_time = now;

        let Some(distance) = self.next_sample() else {
            return Tick::NoData;
        };

        let certainty = self.certainty_factor;
        for (index, zone) in self.zones.iter_mut().enumerate() {
            match zone.evaluate(distance, certainty) {
                Some(Transition::Entered(d)) => debug!("zone {} entered at {} mm", index, d),
                Some(Transition::Exited) => debug!("zone {} exited", index),
                None => {}
            }
        }
        Tick::Evaluated(distance)
    }

    // Read failures look exactly like "nothing ready".
    fn next_sample(&mut self) -> Option<Millimeters> {
        if !self.initialized {
            return None;
        }
        match self.sensor.data_ready() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(_) => {
                debug!("data-ready poll failed, skipping");
                return None;
            }
        }
        match self.sensor.read_mm() {
            Ok(distance) => Some(distance),
            Err(_) => {
                debug!("sample read failed, skipping");
                None
            }
        }
    }
}

impl<S, C> core::fmt::Debug for ZoneMonitor<S, C>
where
    S: RangingSource,
    C: Clock,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ZoneMonitor")
            .field("zones", &self.zones)
            .field("update_interval_ms", &self.update_interval_ms)
            .field("last_update_time", &self.last_update_time)
            .field("certainty_factor", &self.certainty_factor)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
