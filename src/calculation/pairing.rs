//! Session pairing.
//!
//! Turns a bag of badge events for one employee into work sessions. The
//! matcher is greedy and single-pass: after sorting, an IN is paired with
//! the event immediately after it only if that event is an OUT. Anything
//! that cannot be paired this way is returned as an orphan. It never
//! backtracks to look for a better matching, so `[IN, IN, OUT]` yields one
//! orphan and one session.

use crate::models::{BadgeEvent, Session};

/// The outcome of pairing a sequence of badge events.
///
/// Every input event ends up in exactly one place: as the start or end of a
/// session, or in `orphans`. So `2 * sessions.len() + orphans.len()` always
/// equals the number of input events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingResult {
    /// Paired sessions, in chronological order.
    pub sessions: Vec<Session>,
    /// Events that could not be paired, in chronological order.
    pub orphans: Vec<BadgeEvent>,
}

/// Pairs badge events into sessions.
///
/// The caller's slice is left untouched; a private copy is sorted by
/// timestamp. The sort is stable, so events sharing a timestamp keep the
/// order in which they were supplied. That tie-break is a choice of this
/// engine, not something the badge readers guarantee.
///
/// The sorted events are then scanned left to right:
/// - IN immediately followed by OUT: emit a session, skip both.
/// - anything else (OUT first, IN followed by IN, a trailing event): the
///   current event is an orphan, advance by one.
///
/// Unpaired events are not an error. They are returned in
/// [`PairingResult::orphans`] for the caller to report.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::pair_events;
/// use attendance_engine::models::{BadgeEvent, BadgeType};
/// use chrono::NaiveDateTime;
/// use uuid::Uuid;
///
/// let badge = |time: &str, badge_type| BadgeEvent {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     timestamp: NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M").unwrap(),
///     badge_type,
/// };
///
/// let events = vec![
///     badge("2025-03-03 17:00", BadgeType::Out),
///     badge("2025-03-03 09:00", BadgeType::In),
///     badge("2025-03-03 10:00", BadgeType::In),
/// ];
///
/// let result = pair_events(&events);
/// assert_eq!(result.orphans.len(), 1);
/// assert_eq!(result.orphans[0].timestamp, events[1].timestamp);
/// assert_eq!(result.sessions.len(), 1);
/// assert_eq!(result.sessions[0].duration_minutes, 420);
/// ```
pub fn pair_events(events: &[BadgeEvent]) -> PairingResult {
    let mut sorted: Vec<&BadgeEvent> = events.iter().collect();
    sorted.sort_by_key(|event| event.timestamp);

    let mut result = PairingResult::default();
    let mut i = 0;

    while i < sorted.len() {
        let current = sorted[i];
        match sorted.get(i + 1) {
            Some(next) if current.is_in() && next.is_out() => {
                result.sessions.push(Session::between(current, next));
                i += 2;
            }
            _ => {
                result.orphans.push(current.clone());
                i += 1;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BadgeType;
    use chrono::NaiveDateTime;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn badge(time: &str, badge_type: BadgeType) -> BadgeEvent {
        BadgeEvent {
            id: Uuid::new_v4(),
            employee_id: "emp_001".to_string(),
            timestamp: make_datetime(time),
            badge_type,
        }
    }

    fn clock_in(time: &str) -> BadgeEvent {
        badge(time, BadgeType::In)
    }

    fn clock_out(time: &str) -> BadgeEvent {
        badge(time, BadgeType::Out)
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let result = pair_events(&[]);
        assert!(result.sessions.is_empty());
        assert!(result.orphans.is_empty());
    }

    #[test]
    fn test_single_event_is_orphan() {
        let events = vec![clock_in("2025-03-03 09:00:00")];
        let result = pair_events(&events);
        assert!(result.sessions.is_empty());
        assert_eq!(result.orphans, events);
    }

    #[test]
    fn test_simple_pair() {
        let events = vec![
            clock_in("2025-03-03 09:00:00"),
            clock_out("2025-03-03 17:00:00"),
        ];
        let result = pair_events(&events);

        assert!(result.orphans.is_empty());
        assert_eq!(
            result.sessions,
            vec![Session {
                start: make_datetime("2025-03-03 09:00:00"),
                end: make_datetime("2025-03-03 17:00:00"),
                duration_minutes: 480,
            }]
        );
    }

    #[test]
    fn test_unsorted_input_is_sorted_before_pairing() {
        let events = vec![
            clock_out("2025-03-03 17:00:00"),
            clock_in("2025-03-03 09:00:00"),
        ];
        let result = pair_events(&events);

        assert_eq!(result.sessions.len(), 1);
        assert!(result.orphans.is_empty());
        // input is not reordered in place
        assert!(events[0].is_out());
    }

    #[test]
    fn test_greedy_in_in_out() {
        let events = vec![
            clock_in("2025-03-03 09:00:00"),
            clock_in("2025-03-03 10:00:00"),
            clock_out("2025-03-03 17:00:00"),
        ];
        let result = pair_events(&events);

        assert_eq!(result.orphans, vec![events[0].clone()]);
        assert_eq!(result.sessions.len(), 1);
        assert_eq!(result.sessions[0].start, make_datetime("2025-03-03 10:00:00"));
        assert_eq!(result.sessions[0].duration_minutes, 420);
    }

    #[test]
    fn test_leading_out_is_orphan() {
        let events = vec![
            clock_out("2025-03-03 08:00:00"),
            clock_in("2025-03-03 09:00:00"),
            clock_out("2025-03-03 12:00:00"),
        ];
        let result = pair_events(&events);

        assert_eq!(result.orphans, vec![events[0].clone()]);
        assert_eq!(result.sessions.len(), 1);
        assert_eq!(result.sessions[0].duration_minutes, 180);
    }

    #[test]
    fn test_trailing_in_is_orphan() {
        let events = vec![
            clock_in("2025-03-03 09:00:00"),
            clock_out("2025-03-03 12:00:00"),
            clock_in("2025-03-03 13:00:00"),
        ];
        let result = pair_events(&events);

        assert_eq!(result.sessions.len(), 1);
        assert_eq!(result.orphans, vec![events[2].clone()]);
    }

    #[test]
    fn test_out_out_both_orphans() {
        let events = vec![
            clock_in("2025-03-03 09:00:00"),
            clock_out("2025-03-03 12:00:00"),
            clock_out("2025-03-03 12:05:00"),
        ];
        let result = pair_events(&events);

        assert_eq!(result.sessions.len(), 1);
        assert_eq!(result.orphans, vec![events[2].clone()]);
    }

    #[test]
    fn test_multiple_sessions_in_one_day() {
        let events = vec![
            clock_in("2025-03-03 08:30:00"),
            clock_out("2025-03-03 12:00:00"),
            clock_in("2025-03-03 13:00:00"),
            clock_out("2025-03-03 16:30:00"),
        ];
        let result = pair_events(&events);

        assert!(result.orphans.is_empty());
        let durations: Vec<i64> = result.sessions.iter().map(|s| s.duration_minutes).collect();
        assert_eq!(durations, vec![210, 210]);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        // IN and OUT at the same instant pair into a zero-minute session
        let events = vec![
            clock_in("2025-03-03 09:00:00"),
            clock_out("2025-03-03 09:00:00"),
        ];
        let result = pair_events(&events);
        assert_eq!(result.sessions.len(), 1);
        assert_eq!(result.sessions[0].duration_minutes, 0);

        // Supplied the other way round, OUT sorts first and both are orphans
        let events = vec![
            clock_out("2025-03-03 09:00:00"),
            clock_in("2025-03-03 09:00:00"),
        ];
        let result = pair_events(&events);
        assert!(result.sessions.is_empty());
        assert_eq!(result.orphans.len(), 2);
        assert!(result.orphans[0].is_out());
    }

    #[test]
    fn test_duration_truncates_seconds() {
        let events = vec![
            clock_in("2025-03-03 09:00:30"),
            clock_out("2025-03-03 09:10:29"),
        ];
        let result = pair_events(&events);
        assert_eq!(result.sessions[0].duration_minutes, 9);
    }

    #[test]
    fn test_overnight_session() {
        let events = vec![
            clock_in("2025-03-03 22:00:00"),
            clock_out("2025-03-04 06:00:00"),
        ];
        let result = pair_events(&events);
        assert_eq!(result.sessions[0].duration_minutes, 480);
    }

    fn arb_badge_type() -> impl Strategy<Value = BadgeType> {
        prop_oneof![Just(BadgeType::In), Just(BadgeType::Out)]
    }

    fn arb_events() -> impl Strategy<Value = Vec<BadgeEvent>> {
        prop::collection::vec((0i64..10_000, arb_badge_type()), 0..40).prop_map(|raw| {
            let base = make_datetime("2025-03-01 00:00:00");
            raw.into_iter()
                .map(|(offset, badge_type)| BadgeEvent {
                    id: Uuid::new_v4(),
                    employee_id: "emp_001".to_string(),
                    timestamp: base + chrono::Duration::minutes(offset),
                    badge_type,
                })
                .collect()
        })
    }

    /// Alternating IN/OUT events at strictly increasing timestamps.
    fn arb_well_formed() -> impl Strategy<Value = Vec<BadgeEvent>> {
        prop::collection::vec((1i64..600, 1i64..600), 0..15).prop_map(|gaps| {
            let mut at = make_datetime("2025-03-01 00:00:00");
            let mut events = Vec::new();
            for (before_in, worked) in gaps {
                at += chrono::Duration::minutes(before_in);
                events.push(BadgeEvent {
                    id: Uuid::new_v4(),
                    employee_id: "emp_001".to_string(),
                    timestamp: at,
                    badge_type: BadgeType::In,
                });
                at += chrono::Duration::minutes(worked);
                events.push(BadgeEvent {
                    id: Uuid::new_v4(),
                    employee_id: "emp_001".to_string(),
                    timestamp: at,
                    badge_type: BadgeType::Out,
                });
            }
            events
        })
    }

    proptest! {
        #[test]
        fn prop_every_event_is_accounted_for(events in arb_events()) {
            let result = pair_events(&events);
            prop_assert_eq!(result.sessions.len() * 2 + result.orphans.len(), events.len());
        }

        #[test]
        fn prop_sessions_never_negative(events in arb_events()) {
            let result = pair_events(&events);
            for session in &result.sessions {
                prop_assert!(session.end >= session.start);
                prop_assert!(session.duration_minutes >= 0);
            }
        }

        #[test]
        fn prop_shuffling_well_formed_input_keeps_total(
            (events, shuffled) in arb_well_formed()
                .prop_flat_map(|events| (Just(events.clone()), Just(events).prop_shuffle()))
        ) {
            let ordered: i64 = pair_events(&events).sessions.iter().map(|s| s.duration_minutes).sum();
            let reordered = pair_events(&shuffled);
            let total: i64 = reordered.sessions.iter().map(|s| s.duration_minutes).sum();
            prop_assert_eq!(total, ordered);
            prop_assert!(reordered.orphans.is_empty());
        }
    }
}
