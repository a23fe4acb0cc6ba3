//! Handles to user code run on zone transitions.
//!
//! A handle is either empty, a plain function pointer, or a boxed closure
//! carrying its own context. An empty handle is a normal value, so a zone
//! always holds both handles and simply skips the empty ones.

use alloc::boxed::Box;
use core::fmt;

use crate::hal::Millimeters;

/// Runs when a zone becomes occupied. Receives the distance of the sample
/// that completed the entry streak.
#[derive(Default)]
pub enum EnterCallback {
    #[default]
    None,
    Fn(fn(Millimeters)),
    Closure(Box<dyn FnMut(Millimeters)>),
}

impl EnterCallback {
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(Millimeters) + 'static,
    {
        EnterCallback::Closure(Box::new(f))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EnterCallback::None)
    }

    pub(crate) fn call(&mut self, distance: Millimeters) {
        match self {
            EnterCallback::None => {}
            EnterCallback::Fn(f) => f(distance),
            EnterCallback::Closure(f) => f(distance),
        }
    }
}

impl From<fn(Millimeters)> for EnterCallback {
    fn from(f: fn(Millimeters)) -> Self {
        EnterCallback::Fn(f)
    }
}

impl fmt::Debug for EnterCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnterCallback::None => f.write_str("None"),
            EnterCallback::Fn(_) => f.write_str("Fn"),
            EnterCallback::Closure(_) => f.write_str("Closure"),
        }
    }
}

/// Runs when a zone becomes empty again.
#[derive(Default)]
pub enum ExitCallback {
    #[default]
    None,
    Fn(fn()),
    Closure(Box<dyn FnMut()>),
}

impl ExitCallback {
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        ExitCallback::Closure(Box::new(f))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ExitCallback::None)
    }

    pub(crate) fn call(&mut self) {
        match self {
            ExitCallback::None => {}
            ExitCallback::Fn(f) => f(),
            ExitCallback::Closure(f) => f(),
        }
    }
}

impl From<fn()> for ExitCallback {
    fn from(f: fn()) -> Self {
        ExitCallback::Fn(f)
    }
}

impl fmt::Debug for ExitCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCallback::None => f.write_str("None"),
            ExitCallback::Fn(_) => f.write_str("Fn"),
            ExitCallback::Closure(_) => f.write_str("Closure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use core::sync::atomic::{AtomicU16, AtomicU32, Ordering};

    static LAST_ENTER: AtomicU16 = AtomicU16::new(0);
    static EXITS: AtomicU32 = AtomicU32::new(0);

    fn record_enter(d: Millimeters) {
        LAST_ENTER.store(d, Ordering::Relaxed);
    }

    fn record_exit() {
        EXITS.fetch_add(1, Ordering::Relaxed);
    }

    #[test]
    fn empty_handles_do_nothing() {
        let mut enter = EnterCallback::default();
        let mut exit = ExitCallback::default();
        assert!(enter.is_none());
        assert!(exit.is_none());
        enter.call(120);
        exit.call();
    }

    #[test]
    fn function_pointers_are_invoked() {
        let mut enter = EnterCallback::from(record_enter as fn(Millimeters));
        let mut exit = ExitCallback::from(record_exit as fn());
        let before = EXITS.load(Ordering::Relaxed);

        enter.call(321);
        exit.call();

        assert_eq!(LAST_ENTER.load(Ordering::Relaxed), 321);
        assert_eq!(EXITS.load(Ordering::Relaxed), before + 1);
    }

    #[test]
    fn closures_keep_their_context() {
        let seen = Rc::new(Cell::new(0u16));
        let sink = Rc::clone(&seen);
        let mut enter = EnterCallback::new(move |d| sink.set(d));
        assert!(!enter.is_none());

        enter.call(42);
        assert_eq!(seen.get(), 42);
    }
}
