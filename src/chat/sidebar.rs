//! Conversation sidebar
//!
//! The sidebar owns no state: it is a pure projection of the conversation
//! list and the current selection, plus the events it can emit.

use crate::types::{Conversation, ConversationId};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const EMPTY_TITLE: &str = "No conversations yet";
pub const EMPTY_HINT: &str = "Start a new chat to begin";

const DAY_MS: i64 = 1000 * 60 * 60 * 24;

/// Events the sidebar sends to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    NewChat,
    Select(ConversationId),
    Logout,
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: ConversationId,
    pub name: String,
    pub date_label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarView {
    /// Placeholder with [`EMPTY_TITLE`] and [`EMPTY_HINT`]
    Empty,
    Items(Vec<SidebarItem>),
}

/// Label for a conversation's creation date relative to `now`
///
/// Elapsed time is rounded *up* to whole days, so anything under 24h is
/// "Today", under 48h "Yesterday", and the "days ago" count is one less than
/// the rounded value. Beyond a week the en-US calendar date (`M/D/YYYY`) in
/// `now`'s time zone is shown.
pub fn format_created_at<Tz>(created: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let diff_ms = now
        .clone()
        .signed_duration_since(created.clone())
        .num_milliseconds()
        .abs();
    let diff_days = (diff_ms + DAY_MS - 1) / DAY_MS;

    match diff_days {
        1 => "Today".to_string(),
        2 => "Yesterday".to_string(),
        d if d <= 7 => format!("{} days ago", d - 1),
        _ => created.format("%-m/%-d/%Y").to_string(),
    }
}

/// Build the sidebar for `conversations` in the order given
pub fn sidebar_view<Tz>(
    conversations: &[Conversation],
    current: Option<ConversationId>,
    now: &DateTime<Tz>,
) -> SidebarView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if conversations.is_empty() {
        return SidebarView::Empty;
    }

    let tz = now.timezone();
    let items = conversations
        .iter()
        .map(|conv| SidebarItem {
            id: conv.id,
            name: conv.name.clone(),
            date_label: format_created_at(&conv.created_at.with_timezone(&tz), now),
            selected: current == Some(conv.id),
        })
        .collect();

    SidebarView::Items(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[rstest]
    #[case(Duration::days(1), "Today")]
    #[case(Duration::hours(3), "Today")]
    #[case(Duration::days(2), "Yesterday")]
    #[case(Duration::hours(25), "Yesterday")]
    #[case(Duration::days(5), "4 days ago")]
    #[case(Duration::days(7), "6 days ago")]
    #[case(Duration::hours(49), "2 days ago")]
    #[case(Duration::days(10), "6/5/2024")]
    #[case(Duration::days(7) + Duration::milliseconds(1), "6/8/2024")]
    fn test_format_created_at(#[case] age: Duration, #[case] expected: &str) {
        let now = now();
        assert_eq!(format_created_at(&(now - age), &now), expected);
    }

    #[test]
    fn test_same_instant_keeps_quirk() {
        // Zero elapsed time rounds to zero days, which falls in the "days ago" bucket
        let now = now();
        assert_eq!(format_created_at(&now, &now), "-1 days ago");
    }

    #[test]
    fn test_future_dates_use_absolute_difference() {
        let now = now();
        assert_eq!(format_created_at(&(now + Duration::hours(30)), &now), "Yesterday");
    }

    #[test]
    fn test_calendar_date_uses_viewer_time_zone() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap().with_timezone(&tz);
        let created = Utc.with_ymd_and_hms(2024, 6, 1, 2, 0, 0).unwrap().with_timezone(&tz);
        // 02:00 UTC is still May 31st at UTC-5
        assert_eq!(format_created_at(&created, &now), "5/31/2024");
    }

    fn conversations() -> Vec<Conversation> {
        let now = now();
        vec![
            Conversation {
                id: ConversationId(3),
                name: "Rust questions".to_string(),
                created_at: now - Duration::hours(2),
            },
            Conversation {
                id: ConversationId(1),
                name: "Recipes".to_string(),
                created_at: now - Duration::days(20),
            },
        ]
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        assert_eq!(sidebar_view(&[], None, &now()), SidebarView::Empty);
    }

    #[test]
    fn test_items_keep_order_and_highlight_current() {
        let view = sidebar_view(&conversations(), Some(ConversationId(1)), &now());
        let SidebarView::Items(items) = view else {
            panic!("Expected items");
        };

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Rust questions");
        assert_eq!(items[0].date_label, "Today");
        assert!(!items[0].selected);
        assert_eq!(items[1].id, ConversationId(1));
        assert_eq!(items[1].date_label, "5/26/2024");
        assert!(items[1].selected);
    }

    #[test]
    fn test_no_selection_highlights_nothing() {
        let SidebarView::Items(items) = sidebar_view(&conversations(), None, &now()) else {
            panic!("Expected items");
        };
        assert!(items.iter().all(|item| !item.selected));
    }
}
