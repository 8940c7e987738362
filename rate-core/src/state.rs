//! The two-screen view-state machine.
//!
//! The whole application surface is a tagged union: either the entry form
//! is showing, or the display screen is showing the most recently submitted
//! record. Transitions go through [`apply`] so they can be tested without
//! any rendering involved.

use crate::models::RateRecord;

/// Which screen is currently active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// The entry form. Initial state; holds no record.
    #[default]
    Entry,
    /// The rate card for the active record.
    Display(RateRecord),
}

/// User actions that move the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// A validated form submission carrying the new record.
    Submit(RateRecord),
    /// Leave the display screen, discarding the active record.
    GoBack,
}

/// The transition function.
///
/// `Submit` always lands on `Display` with the submitted record; the
/// machine holds at most one record, always the latest. `GoBack` always
/// lands on `Entry`; the discarded record is not retained anywhere.
pub fn apply(state: ViewState, event: ViewEvent) -> ViewState {
    match event {
        ViewEvent::Submit(record) => ViewState::Display(record),
        ViewEvent::GoBack => {
            if let ViewState::Display(record) = &state {
                tracing::debug!(date = %record.date, "discarding active rate record");
            }
            ViewState::Entry
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRateFields;
    use pretty_assertions::assert_eq;

    fn record(date: &str, gold: &str, silver: &str) -> RateRecord {
        RateRecord::from_raw(&RawRateFields {
            date: date.into(),
            gold_price: gold.into(),
            silver_price: silver.into(),
        })
    }

    #[test]
    fn submit_from_entry_carries_the_record() {
        let r = record("2024-03-15", "54000", "750");
        let state = apply(ViewState::Entry, ViewEvent::Submit(r.clone()));
        assert_eq!(state, ViewState::Display(r));
    }

    #[test]
    fn submit_replaces_the_active_record() {
        let first = record("2024-03-15", "54000", "750");
        let second = record("2024-03-16", "54500", "760");
        let state = apply(ViewState::Entry, ViewEvent::Submit(first));
        let state = apply(state, ViewEvent::Submit(second.clone()));
        assert_eq!(state, ViewState::Display(second));
    }

    #[test]
    fn go_back_discards_the_record() {
        let state = apply(
            ViewState::Display(record("2024-03-15", "54000", "750")),
            ViewEvent::GoBack,
        );
        assert_eq!(state, ViewState::Entry);
    }

    #[test]
    fn go_back_from_entry_is_a_no_op() {
        assert_eq!(apply(ViewState::Entry, ViewEvent::GoBack), ViewState::Entry);
    }

    #[test]
    fn go_back_then_resubmit_reproduces_an_identical_record() {
        let raw = RawRateFields {
            date: "2024-01-01".into(),
            gold_price: "0".into(),
            silver_price: "0".into(),
        };
        let first = RateRecord::from_raw(&raw);
        let state = apply(ViewState::Entry, ViewEvent::Submit(first.clone()));
        let state = apply(state, ViewEvent::GoBack);
        assert_eq!(state, ViewState::Entry);

        let second = RateRecord::from_raw(&raw);
        assert_eq!(first, second);
        let state = apply(state, ViewEvent::Submit(second.clone()));
        assert_eq!(state, ViewState::Display(second));
    }
}
