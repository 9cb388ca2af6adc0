use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a mall event or promotion
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Free-form type label, e.g. "Fashion Event"
    pub event_type: String,
    pub location: Option<String>,
    /// Names of the stores taking part
    pub participating_stores: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Criteria for listing events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub event_type: Option<String>,
    pub is_active: Option<bool>,
    /// Keep events starting at or after this instant
    pub start_date: Option<DateTime<Utc>>,
    /// Keep events ending at or before this instant
    pub end_date: Option<DateTime<Utc>>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.event_type.as_ref().is_none_or(|t| event.event_type == *t)
            && self.is_active.is_none_or(|active| event.is_active == active)
            && self.start_date.is_none_or(|from| event.start_date >= from)
            && self.end_date.is_none_or(|until| event.end_date <= until)
    }
}

/// Default listing order: latest start first, then id
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn event(id: i32, start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            description: "Fun for everyone".to_string(),
            image: None,
            start_date: start,
            end_date: end,
            event_type: "Family Event".to_string(),
            location: None,
            participating_stores: vec![],
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let e = event(1, at(2024, 9, 1), at(2024, 9, 7));

        let filter = EventFilter {
            start_date: Some(at(2024, 9, 1)),
            end_date: Some(at(2024, 9, 7)),
            ..Default::default()
        };
        assert!(filter.matches(&e));

        let later_start = EventFilter {
            start_date: Some(at(2024, 9, 2)),
            ..Default::default()
        };
        assert!(!later_start.matches(&e));

        let earlier_end = EventFilter {
            end_date: Some(at(2024, 9, 6)),
            ..Default::default()
        };
        assert!(!earlier_end.matches(&e));
    }

    #[test]
    fn test_type_and_active_flags() {
        let mut e = event(1, at(2024, 8, 15), at(2024, 8, 20));
        e.is_active = false;

        let filter = EventFilter {
            event_type: Some("Family Event".to_string()),
            is_active: Some(false),
            ..Default::default()
        };
        assert!(filter.matches(&e));

        let filter = EventFilter {
            event_type: Some("Sale Event".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&e));
    }

    #[test]
    fn test_sort_latest_start_first() {
        let mut events = vec![
            event(1, at(2024, 8, 15), at(2024, 8, 20)),
            event(2, at(2024, 12, 1), at(2024, 12, 31)),
            event(3, at(2024, 9, 1), at(2024, 9, 7)),
            event(4, at(2024, 12, 1), at(2024, 12, 2)),
        ];
        sort_events(&mut events);
        let order: Vec<i32> = events.iter().map(|e| e.id).collect();
        assert_eq!(order, vec![2, 4, 3, 1]);
    }
}
