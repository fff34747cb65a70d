//! Deferred actions. A timer only takes effect if no newer timer of the same
//! kind was issued after it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    SectionScroll,
    SubmissionComplete,
    MessageAutoHide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

/// A timer the host must arm; it reports back with `Event::TimerElapsed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub token: TimerToken,
    pub delay: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generations {
    section_scroll: u64,
    submission_complete: u64,
    message_auto_hide: u64,
}

impl Generations {
    fn slot(&mut self, kind: TimerKind) -> &mut u64 {
        match kind {
            TimerKind::SectionScroll => &mut self.section_scroll,
            TimerKind::SubmissionComplete => &mut self.submission_complete,
            TimerKind::MessageAutoHide => &mut self.message_auto_hide,
        }
    }

    pub fn latest(&self, kind: TimerKind) -> u64 {
        match kind {
            TimerKind::SectionScroll => self.section_scroll,
            TimerKind::SubmissionComplete => self.submission_complete,
            TimerKind::MessageAutoHide => self.message_auto_hide,
        }
    }

    pub fn issue(&mut self, kind: TimerKind, delay: Duration) -> Deferred {
        let slot = self.slot(kind);
        *slot += 1;
        Deferred {
            token: TimerToken {
                kind,
                generation: *slot,
            },
            delay,
        }
    }

    /// Invalidates every outstanding timer of `kind` without issuing a new one.
    pub fn supersede(&mut self, kind: TimerKind) {
        *self.slot(kind) += 1;
    }

    pub fn is_current(&self, token: TimerToken) -> bool {
        token.generation != 0 && self.latest(token.kind) == token.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_timer_supersedes_older_of_same_kind() {
        let mut generations = Generations::default();
        let first = generations.issue(TimerKind::SectionScroll, Duration::from_millis(100));
        let second = generations.issue(TimerKind::SectionScroll, Duration::from_millis(100));

        assert!(!generations.is_current(first.token));
        assert!(generations.is_current(second.token));
    }

    #[test]
    fn kinds_are_independent() {
        let mut generations = Generations::default();
        let scroll = generations.issue(TimerKind::SectionScroll, Duration::from_millis(100));
        generations.issue(TimerKind::MessageAutoHide, Duration::from_millis(5000));

        assert!(generations.is_current(scroll.token));
    }

    #[test]
    fn supersede_invalidates_without_issuing() {
        let mut generations = Generations::default();
        let pending = generations.issue(TimerKind::SubmissionComplete, Duration::from_secs(1));
        generations.supersede(TimerKind::SubmissionComplete);

        assert!(!generations.is_current(pending.token));
        assert_eq!(generations.latest(TimerKind::SubmissionComplete), 2);
    }

    #[test]
    fn generation_zero_is_never_current() {
        let generations = Generations::default();
        assert!(!generations.is_current(TimerToken {
            kind: TimerKind::MessageAutoHide,
            generation: 0,
        }));
    }
}
