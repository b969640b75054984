//! Search-and-filter state over a fixed in-memory collection.
//!
//! Every store in the app (jobs, events, resources, mentors, applications)
//! is a [`FilteredCollection`] over a record type implementing [`Listing`].
//! The derived view is rebuilt from scratch after every mutation; the
//! collections are tens of records, so a linear scan is all it takes.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use tracing::debug;

/// A record that can be searched and filtered.
pub trait Listing {
    /// Filter axes for this record type.
    type Category: Copy + Ord + Debug;
    /// View window applied on top of the filters, e.g. "upcoming only".
    type Context: Default + Debug;

    fn id(&self) -> &str;

    /// `term` is lower-cased and non-empty.
    fn matches_search(&self, term: &str) -> bool;

    /// `selected` is never empty.
    fn matches_category(&self, category: Self::Category, selected: &BTreeSet<String>) -> bool;

    fn matches_context(&self, _context: &Self::Context) -> bool {
        true
    }

    fn reset_context(_context: &mut Self::Context) {}
}

pub trait Bookmarkable: Listing {
    fn is_bookmarked(&self) -> bool;
    fn set_bookmarked(&mut self, bookmarked: bool);
}

/// Case-insensitive substring test. `term` must already be lower-cased.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<C: Ord> {
    search_term: String,
    selections: BTreeMap<C, BTreeSet<String>>,
}

impl<C: Ord> Default for FilterState<C> {
    fn default() -> Self {
        FilterState {
            search_term: String::new(),
            selections: BTreeMap::new(),
        }
    }
}

impl<C: Ord + Copy> FilterState<C> {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Adds `value` to the category if absent, removes it otherwise.
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, category: C, value: &str) -> bool {
        let values = self.selections.entry(category).or_default();
        let selected = if values.remove(value) {
            false
        } else {
            values.insert(value.to_string());
            true
        };
        // empty sets are dropped so a double toggle leaves no trace
        if values.is_empty() {
            self.selections.remove(&category);
        }
        selected
    }

    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selections.clear();
    }

    pub fn selected(&self, category: C) -> Option<&BTreeSet<String>> {
        self.selections.get(&category)
    }

    pub fn is_selected(&self, category: C, value: &str) -> bool {
        self.selected(category)
            .map_or(false, |values| values.contains(value))
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.selections.is_empty()
    }

    pub fn active_categories(&self) -> impl Iterator<Item = (C, &BTreeSet<String>)> + '_ {
        self.selections.iter().map(|(category, values)| (*category, values))
    }

    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Listing<Category = C>,
    {
        if !self.search_term.is_empty() {
            let term = self.search_term.to_lowercase();
            if !record.matches_search(&term) {
                return false;
            }
        }

        self.selections
            .iter()
            .all(|(category, values)| record.matches_category(*category, values))
    }
}

/// A base collection plus the indices of the records passing the current
/// search term, filter selections and view window.
#[derive(Debug, Clone)]
pub struct FilteredCollection<T: Listing> {
    items: Vec<T>,
    filters: FilterState<T::Category>,
    context: T::Context,
    visible: Vec<usize>,
}

impl<T: Listing> FilteredCollection<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut collection = FilteredCollection {
            items,
            filters: FilterState::default(),
            context: T::Context::default(),
            visible: Vec::new(),
        };
        collection.apply_filters();
        collection
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filters.set_search_term(term);
        self.apply_filters();
    }

    pub fn toggle_filter(&mut self, category: T::Category, value: &str) {
        self.filters.toggle(category, value);
        self.apply_filters();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        T::reset_context(&mut self.context);
        self.apply_filters();
    }

    pub fn apply_filters(&mut self) {
        let filters = &self.filters;
        let context = &self.context;
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.matches_context(context) && filters.matches(*item))
            .map(|(index, _)| index)
            .collect();

        debug!(
            total = self.items.len(),
            visible = self.visible.len(),
            "filters applied"
        );
    }

    /// Changes the view window and recomputes.
    pub fn update_context(&mut self, f: impl FnOnce(&mut T::Context)) {
        f(&mut self.context);
        self.apply_filters();
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.apply_filters();
    }

    /// Removes the record with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        self.apply_filters();
        Some(removed)
    }

    /// Runs `f` on the record with `id` and recomputes. Returns false for an
    /// unknown id.
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        match self.position(id) {
            Some(index) => {
                f(&mut self.items[index]);
                self.apply_filters();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn visible(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(move |index| &self.items[*index])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn filters(&self) -> &FilterState<T::Category> {
        &self.filters
    }

    pub fn context(&self) -> &T::Context {
        &self.context
    }

    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<T: Bookmarkable> FilteredCollection<T> {
    /// Flips the bookmark flag on the record with `id` and returns the new
    /// state, or `None` for an unknown id. The view holds indices into the
    /// base collection, so it sees the new flag without a recompute.
    pub fn toggle_bookmark(&mut self, id: &str) -> Option<bool> {
        let index = self.position(id)?;
        let item = &mut self.items[index];
        let bookmarked = !item.is_bookmarked();
        item.set_bookmarked(bookmarked);
        Some(bookmarked)
    }

    pub fn bookmarked(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().filter(|item| item.is_bookmarked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Axis {
        Colour,
        Size,
    }

    #[derive(Debug, Clone)]
    struct Card {
        id: &'static str,
        title: &'static str,
        colour: &'static str,
        size: &'static str,
        starred: bool,
    }

    impl Listing for Card {
        type Category = Axis;
        type Context = ();

        fn id(&self) -> &str {
            self.id
        }

        fn matches_search(&self, term: &str) -> bool {
            contains_term(self.title, term)
        }

        fn matches_category(&self, category: Axis, selected: &BTreeSet<String>) -> bool {
            match category {
                Axis::Colour => selected.contains(self.colour),
                Axis::Size => selected.contains(self.size),
            }
        }
    }

    impl Bookmarkable for Card {
        fn is_bookmarked(&self) -> bool {
            self.starred
        }

        fn set_bookmarked(&mut self, bookmarked: bool) {
            self.starred = bookmarked;
        }
    }

    fn cards() -> FilteredCollection<Card> {
        let card = |id, title, colour, size| Card {
            id,
            title,
            colour,
            size,
            starred: false,
        };
        FilteredCollection::new(vec![
            card("1", "Red Fox", "red", "small"),
            card("2", "Blue Whale", "blue", "large"),
            card("3", "Red Panda", "red", "medium"),
            card("4", "Green Frog", "green", "small"),
        ])
    }

    fn visible_ids(collection: &FilteredCollection<Card>) -> Vec<&str> {
        collection.visible().map(|card| card.id).collect()
    }

    #[test]
    fn new_collection_shows_everything() {
        let collection = cards();
        assert_eq!(visible_ids(&collection), ["1", "2", "3", "4"]);
        assert!(!collection.is_filtered());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut collection = cards();
        collection.set_search_term("RED");
        assert_eq!(visible_ids(&collection), ["1", "3"]);

        collection.set_search_term("pan");
        assert_eq!(visible_ids(&collection), ["3"]);

        collection.set_search_term("");
        assert_eq!(collection.visible_len(), 4);
    }

    #[test]
    fn values_or_within_category_and_across() {
        let mut collection = cards();
        collection.toggle_filter(Axis::Colour, "red");
        collection.toggle_filter(Axis::Colour, "green");
        assert_eq!(visible_ids(&collection), ["1", "3", "4"]);

        collection.toggle_filter(Axis::Size, "small");
        assert_eq!(visible_ids(&collection), ["1", "4"]);

        collection.set_search_term("frog");
        assert_eq!(visible_ids(&collection), ["4"]);
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut collection = cards();
        collection.set_search_term("a");
        let before = collection.filters().clone();

        collection.toggle_filter(Axis::Size, "large");
        assert!(collection.filters().is_selected(Axis::Size, "large"));
        collection.toggle_filter(Axis::Size, "large");

        assert_eq!(collection.filters(), &before);
        assert_eq!(collection.filters().selected(Axis::Size), None);
    }

    #[test]
    fn clear_restores_full_view() {
        let mut collection = cards();
        collection.set_search_term("whale");
        collection.toggle_filter(Axis::Colour, "red");
        assert_eq!(collection.visible_len(), 0);

        collection.clear_filters();
        assert_eq!(visible_ids(&collection), ["1", "2", "3", "4"]);
        assert_eq!(collection.filters().search_term(), "");
    }

    #[test]
    fn bookmark_is_visible_through_view_and_involutive() {
        let mut collection = cards();
        collection.toggle_filter(Axis::Colour, "red");

        assert_eq!(collection.toggle_bookmark("3"), Some(true));
        let starred: Vec<_> = collection.visible().filter(|c| c.starred).collect();
        assert_eq!(starred.len(), 1);
        assert_eq!(collection.bookmarked().count(), 1);

        assert_eq!(collection.toggle_bookmark("3"), Some(false));
        assert_eq!(collection.bookmarked().count(), 0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut collection = cards();
        assert_eq!(collection.toggle_bookmark("nope"), None);
        assert!(collection.remove("nope").is_none());
        assert!(!collection.update("nope", |card| card.title = "x"));
        assert_eq!(collection.items().len(), 4);
    }

    #[test]
    fn mutations_recompute_the_view() {
        let mut collection = cards();
        collection.toggle_filter(Axis::Colour, "blue");
        assert_eq!(visible_ids(&collection), ["2"]);

        collection.push(Card {
            id: "5",
            title: "Blue Jay",
            colour: "blue",
            size: "small",
            starred: false,
        });
        assert_eq!(visible_ids(&collection), ["2", "5"]);

        collection.update("2", |card| card.colour = "grey");
        assert_eq!(visible_ids(&collection), ["5"]);

        collection.remove("5");
        assert_eq!(collection.visible_len(), 0);
    }
}
