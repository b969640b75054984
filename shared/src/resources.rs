use std::collections::BTreeSet;

use crate::filter::{contains_term, Bookmarkable, FilteredCollection, Listing};
use crate::listing::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResourceCategory {
    Types,
    Categories,
    Levels,
    Tags,
}

impl Listing for Resource {
    type Category = ResourceCategory;
    type Context = ();

    fn id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_term(&self.title, term)
            || contains_term(&self.description, term)
            || self.tags.iter().any(|tag| contains_term(tag, term))
    }

    fn matches_category(&self, category: ResourceCategory, selected: &BTreeSet<String>) -> bool {
        match category {
            ResourceCategory::Types => selected.contains(self.resource_type.label()),
            ResourceCategory::Categories => selected.contains(&self.category),
            // a resource without a level only matches an explicit empty selection
            ResourceCategory::Levels => {
                selected.contains(self.level.map_or("", |level| level.label()))
            }
            ResourceCategory::Tags => self.tags.iter().any(|tag| selected.contains(tag)),
        }
    }
}

impl Bookmarkable for Resource {
    fn is_bookmarked(&self) -> bool {
        self.is_bookmarked
    }

    fn set_bookmarked(&mut self, bookmarked: bool) {
        self.is_bookmarked = bookmarked;
    }
}

pub type ResourceLibrary = FilteredCollection<Resource>;

impl FilteredCollection<Resource> {
    /// Distinct categories in first-seen order, for the filter sidebar.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for resource in self.items() {
            if !seen.contains(&resource.category.as_str()) {
                seen.push(&resource.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_data;

    fn visible_ids(library: &ResourceLibrary) -> Vec<String> {
        library.visible().map(|resource| resource.id.clone()).collect()
    }

    #[test]
    fn search_covers_tags() {
        let mut library = ResourceLibrary::new(seed_data::resources());
        library.set_search_term("women in tech");
        assert_eq!(visible_ids(&library), ["1"]);
    }

    #[test]
    fn level_filter_skips_unleveled() {
        let mut library = ResourceLibrary::new(seed_data::resources());
        library.toggle_filter(ResourceCategory::Levels, "All Levels");
        assert_eq!(visible_ids(&library), ["3"]);

        library.toggle_filter(ResourceCategory::Levels, "Beginner");
        assert_eq!(visible_ids(&library), ["2", "3"]);
    }

    #[test]
    fn type_and_tag_filters_combine() {
        let mut library = ResourceLibrary::new(seed_data::resources());
        library.toggle_filter(ResourceCategory::Tags, "Career Growth");
        assert_eq!(visible_ids(&library), ["1", "4"]);

        library.toggle_filter(ResourceCategory::Types, "course");
        assert_eq!(visible_ids(&library), ["4"]);
    }

    #[test]
    fn bookmark_round_trip() {
        let mut library = ResourceLibrary::new(seed_data::resources());
        assert_eq!(library.toggle_bookmark("4"), Some(true));
        assert_eq!(library.bookmarked().count(), 1);
        assert_eq!(library.toggle_bookmark("4"), Some(false));
        assert_eq!(library.bookmarked().count(), 0);
    }

    #[test]
    fn categories_are_distinct() {
        let library = ResourceLibrary::new(seed_data::resources());
        assert_eq!(
            library.categories(),
            [
                "Career Development",
                "Interview Preparation",
                "Resume Writing",
                "Skill Development"
            ]
        );
    }
}
