use core::cell::Cell;
use core::marker::PhantomData;

use cortex_m::interrupt::{self, Mutex};
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use cortex_m_rt::exception;

use crate::hal::Clock;

// Milliseconds since the SysTick counter was started. Written only from the
// SysTick exception; read under a critical section.
static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

pub mod typestate {
    pub struct NotConfigured;
    pub struct Running;
}

use typestate::*;

/// Millisecond clock driven by a 1 kHz SysTick exception.
///
/// This module defines the `SysTick` exception handler, so the application
/// must not define its own.
pub struct SysTickClock<MODE> {
    _marker: PhantomData<MODE>,
}

impl SysTickClock<NotConfigured> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Program SysTick for a 1 ms period from the core clock and start it.
    /// `SYST` is consumed so nothing else can reprogram it.
    pub fn into_running(self, mut syst: SYST, core_hz: u32) -> SysTickClock<Running> {
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload((core_hz / 1_000).saturating_sub(1));
        syst.clear_current();
        interrupt::free(|cs| MILLIS.borrow(cs).set(0));
        syst.enable_interrupt();
        syst.enable_counter();
        SysTickClock {
            _marker: PhantomData,
        }
    }
}

impl Default for SysTickClock<NotConfigured> {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SysTickClock<Running> {
    fn now_ms(&self) -> u32 {
        interrupt::free(|cs| MILLIS.borrow(cs).get())
    }
}

#[exception]
fn SysTick() {
    interrupt::free(|cs| {
        let millis = MILLIS.borrow(cs);
        millis.set(millis.get().wrapping_add(1));
    });
}
