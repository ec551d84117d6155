use alloc::vec::Vec;

use crate::Direction;

/// Work performed when a cooldown timer expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimerKind {
    /// Re-enables scroll interception after the user reached the last slide.
    Unlock,
    /// Strips the animation classes of a finished transition and lifts the freeze.
    ClearTransition {
        incoming: usize,
        outgoing: usize,
        direction: Direction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Timer {
    pub due_ms: u64,
    seq: u64,
    pub kind: TimerKind,
}

/// One-shot timers keyed by deadline.
///
/// Timers are never cancelled or coalesced: a retriggered timer is simply queued again and each
/// entry fires once, at its own deadline.
#[derive(Clone, Debug, Default)]
pub(crate) struct TimerQueue {
    pending: Vec<Timer>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, kind: TimerKind) -> u64 {
        let due_ms = now_ms.saturating_add(delay_ms);
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.pending.push(Timer { due_ms, seq, kind });
        due_ms
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.due_ms).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns the earliest timer due at `now_ms`, ties broken by schedule order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Timer> {
        let (pos, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))?;
        Some(self.pending.remove(pos))
    }
}
