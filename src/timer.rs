use std::time::{Duration, Instant};

/// A single-shot, re-armable timer for game ticks.
///
/// The timer only fires once per arming.  Whoever handles a firing calls
/// [`Ticker::complete()`] afterwards to schedule the next one, so a new tick
/// can never come due while the previous one is still being processed.
///
/// Every call to [`Ticker::arm()`] or [`Ticker::cancel()`] starts a new
/// epoch.  A [`TickToken`] from an older epoch is stale and completing it
/// does nothing, so a pause or restart that happens in between is never
/// undone by a late completion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    deadline: Option<Instant>,
    epoch: u64,
}

/// Proof that the timer fired during a given epoch
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickToken {
    epoch: u64,
}

impl Ticker {
    pub(crate) fn new(period: Duration) -> Ticker {
        Ticker {
            period,
            deadline: None,
            epoch: 0,
        }
    }

    /// Schedule a tick one period after `now`, replacing any tick already
    /// scheduled
    pub(crate) fn arm(&mut self, now: Instant) {
        self.epoch += 1;
        self.deadline = Some(now + self.period);
    }

    /// Unschedule any pending tick and invalidate all outstanding tokens
    pub(crate) fn cancel(&mut self) {
        self.epoch += 1;
        self.deadline = None;
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// If the scheduled tick has come due by `now`, disarm the timer and
    /// return a token for the firing.
    pub(crate) fn fire(&mut self, now: Instant) -> Option<TickToken> {
        let when = self.deadline?;
        if now < when {
            return None;
        }
        self.deadline = None;
        Some(TickToken { epoch: self.epoch })
    }

    /// Finish handling the tick for `token` and schedule the next one.
    /// Returns `false` if the token is stale, in which case nothing is
    /// scheduled.
    pub(crate) fn complete(&mut self, token: TickToken, now: Instant) -> bool {
        if token.epoch != self.epoch {
            return false;
        }
        self.arm(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(150);

    #[test]
    fn fires_once_per_arming() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        assert_eq!(ticker.fire(start + PERIOD), None);
        ticker.arm(start);
        assert_eq!(ticker.deadline(), Some(start + PERIOD));
        assert_eq!(ticker.fire(start + Duration::from_millis(149)), None);
        let token = ticker.fire(start + PERIOD);
        assert!(token.is_some());
        assert_eq!(ticker.deadline(), None);
        assert_eq!(ticker.fire(start + PERIOD * 5), None);
    }

    #[test]
    fn complete_reschedules() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.arm(start);
        let later = start + PERIOD + Duration::from_millis(3);
        let token = ticker.fire(later).unwrap();
        assert!(ticker.complete(token, later));
        assert_eq!(ticker.deadline(), Some(later + PERIOD));
    }

    #[test]
    fn cancel_invalidates_token() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.arm(start);
        let token = ticker.fire(start + PERIOD).unwrap();
        ticker.cancel();
        assert!(!ticker.complete(token, start + PERIOD));
        assert_eq!(ticker.deadline(), None);
    }

    #[test]
    fn rearm_invalidates_token() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.arm(start);
        let token = ticker.fire(start + PERIOD).unwrap();
        let restart = start + PERIOD * 2;
        ticker.arm(restart);
        assert!(!ticker.complete(token, start + PERIOD * 3));
        assert_eq!(ticker.deadline(), Some(restart + PERIOD));
    }
}
