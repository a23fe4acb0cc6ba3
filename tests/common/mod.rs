#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use tof_zone_monitor::{
    Clock, DistanceMode, EnterCallback, ExitCallback, Millimeters, MonitorConfig, RangingSource,
    ZoneMonitor,
};

/// Shared, manually advanced millisecond clock.
#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<u32>>);

impl ManualClock {
    pub fn set(&self, ms: u32) {
        self.0.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeError {
    Nack,
    ReadFailed,
}

/// One scripted answer per poll: `Some(mm)` means a sample is ready,
/// `None` means "not ready", and `Err` makes the data-ready poll fail.
pub type Step = Result<Option<Millimeters>, FakeError>;

#[derive(Debug, Default)]
pub struct FakeSensor {
    pub script: VecDeque<Step>,
    pub fail_init: bool,
    pub fail_reads: bool,
    pub continuous_period: Option<u32>,
    pub mode: Option<DistanceMode>,
    pub budget_us: u32,
    pub timeout_ms: u16,
    pub polls: u32,
    pub reads: u32,
}

impl FakeSensor {
    pub fn scripted<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = Step>,
    {
        FakeSensor {
            script: steps.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Every value is a ready sample.
    pub fn with_samples(samples: &[Millimeters]) -> Self {
        Self::scripted(samples.iter().map(|&mm| Ok(Some(mm))))
    }
}

impl RangingSource for FakeSensor {
    type Bus = ();
    type Error = FakeError;

    fn set_bus(&mut self, _bus: ()) {}

    fn init(&mut self) -> Result<(), FakeError> {
        if self.fail_init {
            Err(FakeError::Nack)
        } else {
            Ok(())
        }
    }

    fn start_continuous(&mut self, period_ms: u32) -> Result<(), FakeError> {
        self.continuous_period = Some(period_ms);
        Ok(())
    }

    fn set_distance_mode(&mut self, mode: DistanceMode) -> Result<(), FakeError> {
        self.mode = Some(mode);
        Ok(())
    }

    fn distance_mode(&mut self) -> DistanceMode {
        self.mode.unwrap_or(DistanceMode::Long)
    }

    fn set_measurement_timing_budget(&mut self, budget_us: u32) -> Result<(), FakeError> {
        self.budget_us = budget_us;
        Ok(())
    }

    fn measurement_timing_budget(&mut self) -> u32 {
        self.budget_us
    }

    fn set_timeout(&mut self, timeout_ms: u16) {
        self.timeout_ms = timeout_ms;
    }

    fn timeout(&mut self) -> u16 {
        self.timeout_ms
    }

    fn data_ready(&mut self) -> Result<bool, FakeError> {
        self.polls += 1;
        match self.script.front() {
            Some(Ok(Some(_))) => Ok(true),
            Some(Ok(None)) => {
                self.script.pop_front();
                Ok(false)
            }
            Some(Err(e)) => {
                let e = *e;
                self.script.pop_front();
                Err(e)
            }
            None => Ok(false),
        }
    }

    fn read_mm(&mut self) -> Result<Millimeters, FakeError> {
        self.reads += 1;
        if self.fail_reads {
            self.script.pop_front();
            return Err(FakeError::ReadFailed);
        }
        match self.script.pop_front() {
            Some(Ok(Some(mm))) => Ok(mm),
            _ => Err(FakeError::ReadFailed),
        }
    }
}

/// Callback activity, in firing order, tagged with the zone label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fired {
    Enter(&'static str, Millimeters),
    Exit(&'static str),
}

pub type FireLog = Rc<RefCell<Vec<Fired>>>;

pub fn recorders(label: &'static str, log: &FireLog) -> (EnterCallback, ExitCallback) {
    let enter_log = Rc::clone(log);
    let exit_log = Rc::clone(log);
    (
        EnterCallback::new(move |mm| enter_log.borrow_mut().push(Fired::Enter(label, mm))),
        ExitCallback::new(move || exit_log.borrow_mut().push(Fired::Exit(label))),
    )
}

/// Initialized monitor at t = 0 with the given certainty and a 50 ms interval.
pub fn monitor(sensor: FakeSensor, certainty: u32) -> (ZoneMonitor<FakeSensor, ManualClock>, ManualClock) {
    let clock = ManualClock::default();
    let config = MonitorConfig::new()
        .with_update_interval_ms(50)
        .with_certainty_factor(certainty);
    let mut monitor = ZoneMonitor::new(sensor, clock.clone(), None, config);
    monitor.init().expect("fake sensor init");
    (monitor, clock)
}

/// Advance past the interval and tick, `n` times.
pub fn tick_n(monitor: &mut ZoneMonitor<FakeSensor, ManualClock>, clock: &ManualClock, n: usize) {
    for _ in 0..n {
        clock.advance(50);
        monitor.update();
    }
}
