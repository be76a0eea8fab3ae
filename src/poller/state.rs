//! In-memory state carried between poll cycles. Nothing here is persisted.

/// Lower bound (Unix seconds) of the next status query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollCursor(i64);

impl PollCursor {
    /// Negative timestamps are clamped to 0
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp.max(0))
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Move forward to `server_time`. Never moves backwards; returns
    /// whether the cursor changed.
    pub fn advance(&mut self, server_time: i64) -> bool {
        if server_time > self.0 {
            self.0 = server_time;
            true
        } else {
            false
        }
    }
}

/// Text of the last notification the recipient actually received.
///
/// Used as the dedup key for both status and failure messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    last_delivered: String,
}

impl NotificationState {
    /// `true` when `text` differs from the last delivered message
    pub fn is_new(&self, text: &str) -> bool {
        self.last_delivered != text
    }

    pub fn record_delivered(&mut self, text: impl Into<String>) {
        self.last_delivered = text.into();
    }

    /// Forget the last message so an identical one is announced again
    pub fn reset(&mut self) {
        self.last_delivered.clear();
    }

    pub fn last_delivered(&self) -> &str {
        &self.last_delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cursor_clamps_negative() {
        assert_eq!(PollCursor::new(-5).value(), 0);
        assert_eq!(PollCursor::default().value(), 0);
    }

    #[test]
    fn test_cursor_advance() {
        let mut cursor = PollCursor::new(100);
        assert!(cursor.advance(1000));
        assert_eq!(cursor.value(), 1000);
        assert!(!cursor.advance(1000));
        assert!(!cursor.advance(10));
        assert_eq!(cursor.value(), 1000);
    }

    #[test]
    fn test_notification_state_dedup_and_reset() {
        let mut state = NotificationState::default();
        assert_eq!(state.last_delivered(), "");
        assert!(state.is_new("approved"));

        state.record_delivered("approved");
        assert!(!state.is_new("approved"));
        assert!(state.is_new("rejected"));

        state.reset();
        assert!(state.is_new("approved"));
    }

    proptest! {
        #[test]
        fn prop_cursor_is_monotonic(start in 0i64..10_000, updates in prop::collection::vec(-100i64..20_000, 0..32)) {
            let mut cursor = PollCursor::new(start);
            let mut previous = cursor.value();
            for update in &updates {
                cursor.advance(*update);
                prop_assert!(cursor.value() >= previous);
                previous = cursor.value();
            }
            let expected = updates.iter().copied().fold(start, i64::max);
            prop_assert_eq!(cursor.value(), expected);
        }
    }
}
