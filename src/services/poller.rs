use crate::config::{Config, WidgetConfig};
use crate::models::{apod::ApodRecord, error::AppError, poll::PollState};
use crate::services::retry::{NextFetch, RetryPolicy};

/// Where the poller is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    /// Timer armed for the given delay
    Waiting { delay_ms: u32 },
    /// One request in flight
    Pending,
    /// No timer will be armed again
    Halted,
}

/// Scheduled-fetch-with-retry state machine.
///
/// The poller performs no I/O itself: the caller waits out the armed delay,
/// calls [`Poller::begin_fetch`], runs the request and reports the result to
/// [`Poller::complete`], which yields the next delay.
#[derive(Debug, Clone)]
pub struct Poller {
    policy: RetryPolicy,
    phase: PollPhase,
    state: PollState,
}

impl Poller {
    /// Creates a poller armed for the configured initial delay.
    ///
    /// Refuses to start without an API key.
    pub fn new(config: &WidgetConfig) -> Result<Self, AppError> {
        if !config.has_appid() {
            return Err(AppError::ConfigError("APPID not set".to_string()));
        }

        Ok(Self {
            policy: RetryPolicy::from_config(config),
            phase: PollPhase::Waiting {
                delay_ms: config.initial_load_delay,
            },
            state: PollState::new(),
        })
    }

    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Delay of the currently armed timer, if any, capped to what a browser
    /// timer can represent.
    pub fn armed_delay(&self) -> Option<u32> {
        match self.phase {
            PollPhase::Waiting { delay_ms } => Some(delay_ms.min(Config::MAX_TIMER_DELAY_MS)),
            _ => None,
        }
    }

    /// Moves from waiting to pending. Returns false if no timer was armed,
    /// which covers both an in-flight request and a halted poller.
    pub fn begin_fetch(&mut self) -> bool {
        match self.phase {
            PollPhase::Waiting { .. } => {
                self.phase = PollPhase::Pending;
                true
            }
            PollPhase::Pending | PollPhase::Halted => false,
        }
    }

    /// Records the outcome of the in-flight request and arms the next timer.
    pub fn complete(&mut self, outcome: Result<ApodRecord, AppError>) -> NextFetch {
        if self.phase != PollPhase::Pending {
            return NextFetch::Never;
        }

        let outcome = outcome.map(|record| self.state.replace(record));
        let next = self.policy.next_fetch(&outcome, self.state.loaded());

        self.phase = match next {
            NextFetch::After(delay_ms) => PollPhase::Waiting { delay_ms },
            NextFetch::Never => PollPhase::Halted,
        };
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::apod::MediaType;

    fn config() -> WidgetConfig {
        WidgetConfig {
            appid: "DEMO_KEY".to_string(),
            initial_load_delay: 100,
            ..WidgetConfig::default()
        }
    }

    fn record(title: &str) -> ApodRecord {
        ApodRecord {
            title: title.to_string(),
            description: "A galaxy.".to_string(),
            copyright: None,
            media_type: MediaType::Image,
            media_url: "https://apod.nasa.gov/apod/image/galaxy.jpg".to_string(),
            embed_url: None,
            date: None,
        }
    }

    #[test]
    fn test_refuses_to_start_without_appid() {
        let err = Poller::new(&WidgetConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_starts_armed_with_initial_delay() {
        let poller = Poller::new(&config()).unwrap();
        assert_eq!(poller.armed_delay(), Some(100));
        assert!(!poller.state().loaded());
    }

    #[test]
    fn test_not_reentrant() {
        let mut poller = Poller::new(&config()).unwrap();
        assert!(poller.begin_fetch());
        assert!(!poller.begin_fetch());
        assert_eq!(poller.phase(), PollPhase::Pending);
    }

    #[test]
    fn test_complete_without_pending_is_ignored() {
        let mut poller = Poller::new(&config()).unwrap();
        assert_eq!(poller.complete(Ok(record("M31"))), NextFetch::Never);
        assert!(!poller.state().loaded());
        assert_eq!(poller.armed_delay(), Some(100));
    }

    #[test]
    fn test_success_replaces_record() {
        let mut poller = Poller::new(&config()).unwrap();
        poller.begin_fetch();
        poller.complete(Ok(record("M31")));
        poller.begin_fetch();
        let next = poller.complete(Ok(record("M42")));

        assert_eq!(next, NextFetch::After(21_600_000));
        assert_eq!(poller.state().record().unwrap().title, "M42");
    }

    #[test]
    fn test_halted_poller_never_fetches_again() {
        let mut poller = Poller::new(&config()).unwrap();
        poller.begin_fetch();
        assert_eq!(poller.complete(Err(AppError::RateLimited)), NextFetch::Never);
        assert_eq!(poller.phase(), PollPhase::Halted);
        assert!(!poller.begin_fetch());
    }

    #[test]
    fn test_oversized_delays_are_capped() {
        let config = WidgetConfig {
            initial_load_delay: u32::MAX,
            update_interval: u32::MAX,
            ..config()
        };
        let mut poller = Poller::new(&config).unwrap();
        assert_eq!(poller.armed_delay(), Some(i32::MAX as u32));

        poller.begin_fetch();
        poller.complete(Ok(record("M31")));
        assert_eq!(poller.armed_delay(), Some(i32::MAX as u32));
    }
}
