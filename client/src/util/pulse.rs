//! Pulse animation state for the interactive preview widget.
//!
//! Each start gets a new sequence number and the end timer carries the number
//! it was armed with, so a timer left over from an earlier click cannot cut a
//! newer pulse short. The class alternates between two identical animations
//! so a restart while a pulse is running replays it from the beginning.

#[cfg(test)]
#[path = "pulse_test.rs"]
mod pulse_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PulseState {
    seq: u64,
    active: bool,
}

impl PulseState {
    /// Begin a pulse and return the sequence number its end timer must present.
    pub fn start(&mut self) -> u64 {
        self.seq = self.seq.wrapping_add(1);
        self.active = true;
        self.seq
    }

    /// End the pulse started as `seq`. Stale sequence numbers are ignored.
    pub fn finish(&mut self, seq: u64) {
        if self.seq == seq {
            self.active = false;
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Modifier class for the zone, empty when idle.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match (self.active, self.seq % 2) {
            (false, _) => "",
            (true, 0) => "interactive-zone--pulse-a",
            (true, _) => "interactive-zone--pulse-b",
        }
    }
}
