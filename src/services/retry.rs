use crate::config::WidgetConfig;
use crate::models::error::AppError;

/// When the poller should issue its next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextFetch {
    /// Arm the timer for this many milliseconds
    After(u32),
    /// Polling is over for the lifetime of the widget
    Never,
}

/// Fixed-interval refresh with a throttled retry during initial acquisition.
///
/// # Behavior
///
/// - Success: wait `update_interval_ms`
/// - Terminal error (403, 429, configuration): never fetch again
/// - Any other error before the first load: wait `retry_delay_ms`
/// - Any other error after a load: fetch again immediately
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub update_interval_ms: u32,
    pub retry_delay_ms: u32,
}

impl RetryPolicy {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            update_interval_ms: config.update_interval,
            retry_delay_ms: config.retry_delay,
        }
    }

    /// Decides the next fetch from the outcome of the one that just finished.
    ///
    /// `loaded` reports whether any fetch has ever succeeded, including this one.
    pub fn next_fetch<T>(&self, outcome: &Result<T, AppError>, loaded: bool) -> NextFetch {
        match outcome {
            Ok(_) => NextFetch::After(self.update_interval_ms),
            Err(e) if e.is_terminal() => NextFetch::Never,
            // Zero delay once a record is on screen; this can spin while the
            // endpoint keeps failing.
            Err(_) if loaded => NextFetch::After(0),
            Err(_) => NextFetch::After(self.retry_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RetryPolicy {
        RetryPolicy {
            update_interval_ms: 60_000,
            retry_delay_ms: 2500,
        }
    }

    #[test]
    fn test_success_waits_update_interval() {
        let outcome: Result<(), AppError> = Ok(());
        assert_eq!(policy().next_fetch(&outcome, true), NextFetch::After(60_000));
    }

    #[test]
    fn test_terminal_errors_stop_polling() {
        for err in [
            AppError::RateLimited,
            AppError::AuthError("403".to_string()),
            AppError::ConfigError("no key".to_string()),
        ] {
            let outcome: Result<(), AppError> = Err(err);
            assert_eq!(policy().next_fetch(&outcome, false), NextFetch::Never);
            assert_eq!(policy().next_fetch(&outcome, true), NextFetch::Never);
        }
    }

    #[test]
    fn test_transient_error_before_first_load_is_throttled() {
        let outcome: Result<(), AppError> = Err(AppError::ApiError("boom".to_string()));
        assert_eq!(policy().next_fetch(&outcome, false), NextFetch::After(2500));
    }

    #[test]
    fn test_transient_error_after_load_retries_immediately() {
        let outcome: Result<(), AppError> = Err(AppError::DataError("bad".to_string()));
        assert_eq!(policy().next_fetch(&outcome, true), NextFetch::After(0));
    }
}
