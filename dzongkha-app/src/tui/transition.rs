//! Delayed commit of card actions, so the view can show a short animation
//! between pressing a key and the card changing.

use dzongkha_core::ReviewSession;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Next,
    Previous,
    Flip,
    Know,
}

impl Move {
    fn apply(self, session: &mut ReviewSession) {
        match self {
            Move::Next => session.next(),
            Move::Previous => session.previous(),
            Move::Flip => session.flip(),
            Move::Know => session.mark_known(),
        }
    }
}

#[derive(Debug)]
pub struct Transition {
    delay: Duration,
    pending: Option<(Move, Instant)>,
}

impl Transition {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Schedules `mv`. A move still pending is committed first, so ordering is preserved.
    pub fn start(&mut self, session: &mut ReviewSession, mv: Move, now: Instant) {
        self.flush(session);
        if matches!(mv, Move::Next | Move::Previous) && session.len() <= 1 {
            return;
        }
        if self.delay.is_zero() {
            mv.apply(session);
        } else {
            self.pending = Some((mv, now + self.delay));
        }
    }

    pub fn tick(&mut self, session: &mut ReviewSession, now: Instant) {
        if let Some((mv, due)) = self.pending {
            if now >= due {
                self.pending = None;
                mv.apply(session);
            }
        }
    }

    pub fn flush(&mut self, session: &mut ReviewSession) {
        if let Some((mv, _)) = self.pending.take() {
            mv.apply(session);
        }
    }

    /// Drops a pending move without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dzongkha_core::sample_flashcards;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn commits_after_delay() {
        let mut s = ReviewSession::new(sample_flashcards());
        let mut t = Transition::new(DELAY);
        let t0 = Instant::now();

        t.start(&mut s, Move::Next, t0);
        assert!(t.is_animating());
        t.tick(&mut s, t0 + Duration::from_millis(100));
        assert_eq!(s.position(), Some(0));

        t.tick(&mut s, t0 + DELAY);
        assert_eq!(s.position(), Some(1));
        assert!(!t.is_animating());
    }

    #[test]
    fn queued_moves_all_land() {
        let mut s = ReviewSession::new(sample_flashcards());
        let mut t = Transition::new(DELAY);
        let t0 = Instant::now();

        t.start(&mut s, Move::Know, t0);
        t.start(&mut s, Move::Know, t0);
        t.start(&mut s, Move::Flip, t0);
        t.flush(&mut s);

        assert_eq!(s.score(), 2);
        assert_eq!(s.position(), Some(2));
        assert!(s.revealed());
    }

    #[test]
    fn zero_delay_is_immediate() {
        let mut s = ReviewSession::new(sample_flashcards());
        let mut t = Transition::new(Duration::ZERO);
        t.start(&mut s, Move::Previous, Instant::now());
        assert_eq!(s.position(), Some(7));
        assert!(!t.is_animating());
    }

    #[test]
    fn single_card_navigation_does_not_animate() {
        let mut s = ReviewSession::new(sample_flashcards());
        s.set_category("Basics");
        let mut t = Transition::new(DELAY);
        t.start(&mut s, Move::Next, Instant::now());
        assert!(!t.is_animating());

        t.start(&mut s, Move::Know, Instant::now());
        t.flush(&mut s);
        assert_eq!(s.score(), 1);
    }
}
