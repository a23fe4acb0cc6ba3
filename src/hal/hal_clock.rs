/// Monotonic millisecond counter.
///
/// The value wraps modulo 2^32; callers compare timestamps with
/// `wrapping_sub`, so a wrap is invisible as long as two reads are less than
/// ~49 days apart.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u32;
}

impl<F> Clock for F
where
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        self()
    }
}
