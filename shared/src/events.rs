use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::filter::{contains_term, FilteredCollection, Listing};
use crate::listing::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventCategory {
    Types,
}

/// Hides past events while `upcoming_only` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub upcoming_only: bool,
    pub today: NaiveDate,
}

impl Default for EventWindow {
    fn default() -> Self {
        EventWindow {
            upcoming_only: true,
            today: NaiveDate::MIN,
        }
    }
}

impl Listing for Event {
    type Category = EventCategory;
    type Context = EventWindow;

    fn id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_term(&self.title, term)
            || contains_term(&self.description, term)
            || contains_term(self.event_type.label(), term)
    }

    fn matches_category(&self, category: EventCategory, selected: &BTreeSet<String>) -> bool {
        match category {
            EventCategory::Types => selected.contains(self.event_type.label()),
        }
    }

    fn matches_context(&self, window: &EventWindow) -> bool {
        !window.upcoming_only || self.date >= window.today
    }

    fn reset_context(window: &mut EventWindow) {
        window.upcoming_only = true;
    }
}

pub type EventBoard = FilteredCollection<Event>;

impl FilteredCollection<Event> {
    pub fn set_upcoming_only(&mut self, upcoming_only: bool) {
        self.update_context(|window| window.upcoming_only = upcoming_only);
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.update_context(|window| window.today = today);
    }

    pub fn featured(&self) -> impl Iterator<Item = &Event> + '_ {
        self.items().iter().filter(|event| event.is_featured)
    }

    /// Next `limit` events on or after `today`, soonest first.
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .items()
            .iter()
            .filter(|event| event.date >= today)
            .collect();
        events.sort_by_key(|event| event.date);
        events.truncate(limit);
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_data;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn board_on(today: NaiveDate) -> EventBoard {
        let mut board = EventBoard::new(seed_data::events());
        board.set_today(today);
        board
    }

    fn visible_ids(board: &EventBoard) -> Vec<String> {
        board.visible().map(|event| event.id.clone()).collect()
    }

    #[test]
    fn past_events_hidden_by_default() {
        let board = board_on(day(2026, 12, 1));
        assert_eq!(visible_ids(&board), ["4", "5", "6"]);
    }

    #[test]
    fn window_can_be_switched_off() {
        let mut board = board_on(day(2026, 12, 1));
        board.set_upcoming_only(false);
        assert_eq!(board.visible_len(), 6);
    }

    #[test]
    fn search_matches_type_label() {
        let mut board = board_on(day(2026, 1, 1));
        board.set_search_term("webinar");
        assert_eq!(visible_ids(&board), ["3"]);
    }

    #[test]
    fn type_filter() {
        let mut board = board_on(day(2026, 1, 1));
        board.toggle_filter(EventCategory::Types, "Workshop");
        assert_eq!(visible_ids(&board), ["2", "5"]);
    }

    #[test]
    fn clear_turns_window_back_on() {
        let mut board = board_on(day(2026, 12, 1));
        board.set_upcoming_only(false);
        board.toggle_filter(EventCategory::Types, "Conference");
        board.clear_filters();

        assert!(board.context().upcoming_only);
        assert_eq!(board.context().today, day(2026, 12, 1));
        assert_eq!(visible_ids(&board), ["4", "5", "6"]);
    }

    #[test]
    fn upcoming_sorted_by_date() {
        let board = board_on(day(2026, 1, 1));
        let ids: Vec<&str> = board
            .upcoming(day(2026, 11, 16), 2)
            .iter()
            .map(|event| event.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(board.featured().count(), 3);
    }
}
