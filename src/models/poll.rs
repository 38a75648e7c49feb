use std::rc::Rc;

use crate::models::apod::ApodRecord;

/// Snapshot of what the poller has fetched so far.
///
/// A state is loaded exactly when it holds a record; records are only built by
/// the response normalizer, so a present record is always displayable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollState {
    last_record: Option<Rc<ApodRecord>>,
}

impl PollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a record has been fetched successfully
    pub fn loaded(&self) -> bool {
        self.last_record.is_some()
    }

    /// Returns the last record if one has loaded
    pub fn record(&self) -> Option<&Rc<ApodRecord>> {
        self.last_record.as_ref()
    }

    /// Replaces any previous record wholesale.
    pub fn replace(&mut self, record: ApodRecord) {
        self.last_record = Some(Rc::new(record));
    }
}
