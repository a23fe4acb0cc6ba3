// Consecutive-sample debouncer for one distance window.
// A zone flips only after `certainty` samples in a row land on the other side.

use crate::callback::{EnterCallback, ExitCallback};
use crate::hal::Millimeters;

/// State change reported by [`Zone::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Zone became occupied on a sample at this distance.
    Entered(Millimeters),
    /// Zone became empty.
    Exited,
}

/// A closed window `[min_distance, max_distance]` with debounced presence.
///
/// `min_distance > max_distance` is accepted; such a zone never classifies a
/// sample as inside and so never becomes occupied.
#[derive(Debug)]
pub struct Zone {
    min_distance: Millimeters,
    max_distance: Millimeters,
    object_present: bool,
    in_streak: u32,
    out_streak: u32,
    on_enter: EnterCallback,
    on_exit: ExitCallback,
}

impl Zone {
    pub fn new(min_distance: Millimeters, max_distance: Millimeters) -> Self {
        Self::with_callbacks(
            min_distance,
            max_distance,
            EnterCallback::None,
            ExitCallback::None,
        )
    }

    pub fn with_callbacks(
        min_distance: Millimeters,
        max_distance: Millimeters,
        on_enter: EnterCallback,
        on_exit: ExitCallback,
    ) -> Self {
        Zone {
            min_distance,
            max_distance,
            object_present: false,
            in_streak: 0,
            out_streak: 0,
            on_enter,
            on_exit,
        }
    }

    /// Feed one sample. Fires at most one callback, synchronously, and
    /// returns the transition it fired for.
    pub fn evaluate(&mut self, distance: Millimeters, certainty: u32) -> Option<Transition> {
        if self.contains(distance) {
            self.in_streak = self.in_streak.saturating_add(1);
            self.out_streak = 0;
            if self.in_streak >= certainty && !self.object_present {
                self.object_present = true;
                self.on_enter.call(distance);
                return Some(Transition::Entered(distance));
            }
        } else {
            self.out_streak = self.out_streak.saturating_add(1);
            self.in_streak = 0;
            if self.out_streak >= certainty && self.object_present {
                self.object_present = false;
                self.on_exit.call();
                return Some(Transition::Exited);
            }
        }
        None
    }

    /// Closed-interval membership test.
    pub fn contains(&self, distance: Millimeters) -> bool {
        distance >= self.min_distance && distance <= self.max_distance
    }

    pub fn is_object_present(&self) -> bool {
        self.object_present
    }

    pub fn min_distance(&self) -> Millimeters {
        self.min_distance
    }

    pub fn max_distance(&self) -> Millimeters {
        self.max_distance
    }

    /// Consecutive in-window samples up to and including the last one.
    pub fn in_streak(&self) -> u32 {
        self.in_streak
    }

    /// Consecutive out-of-window samples up to and including the last one.
    pub fn out_streak(&self) -> u32 {
        self.out_streak
    }

    // Streaks and presence are kept; the next sample reconciles them.
    pub(crate) fn set_bounds(&mut self, min: Option<Millimeters>, max: Option<Millimeters>) {
        if let Some(min) = min {
            self.min_distance = min;
        }
        if let Some(max) = max {
            self.max_distance = max;
        }
    }
}
