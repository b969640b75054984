use std::collections::BTreeSet;

use crate::filter::{contains_term, FilteredCollection, Listing};
use crate::listing::Mentor;

/// Industries offered in the mentorship filter sidebar.
pub const INDUSTRIES: [&str; 6] = [
    "Technology",
    "Marketing",
    "Finance",
    "Healthcare",
    "Education",
    "Human Resources",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MentorCategory {
    Industries,
}

/// Mentors carry no industry field, so the industry is read off the role.
fn role_in_industry(role: &str, industry: &str) -> bool {
    let markers: &[&str] = match industry {
        "Technology" => &["Tech", "Engineer", "Data"],
        "Marketing" => &["Market"],
        "Finance" => &["Finance", "Financial"],
        "Human Resources" => &["HR", "Human Resource"],
        _ => &[],
    };
    markers.iter().any(|marker| role.contains(marker))
}

impl Listing for Mentor {
    type Category = MentorCategory;
    type Context = ();

    fn id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_term(&self.name, term)
            || contains_term(&self.role, term)
            || contains_term(&self.company, term)
            || self.skills.iter().any(|skill| contains_term(skill, term))
    }

    fn matches_category(&self, category: MentorCategory, selected: &BTreeSet<String>) -> bool {
        match category {
            MentorCategory::Industries => selected
                .iter()
                .any(|industry| role_in_industry(&self.role, industry)),
        }
    }
}

pub type MentorDirectory = FilteredCollection<Mentor>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_data;

    fn visible_ids(directory: &MentorDirectory) -> Vec<String> {
        directory.visible().map(|mentor| mentor.id.clone()).collect()
    }

    #[test]
    fn technology_matches_role_markers() {
        let mut directory = MentorDirectory::new(seed_data::mentors());
        directory.toggle_filter(MentorCategory::Industries, "Technology");
        // "Chief Technology Officer", "VP of Engineering", "Data Science Director"
        assert_eq!(visible_ids(&directory), ["1", "3", "4"]);
    }

    #[test]
    fn industries_or_together() {
        let mut directory = MentorDirectory::new(seed_data::mentors());
        directory.toggle_filter(MentorCategory::Industries, "Marketing");
        directory.toggle_filter(MentorCategory::Industries, "Human Resources");
        assert_eq!(visible_ids(&directory), ["5", "6"]);
    }

    #[test]
    fn unmapped_industry_matches_nothing() {
        let mut directory = MentorDirectory::new(seed_data::mentors());
        directory.toggle_filter(MentorCategory::Industries, "Healthcare");
        assert_eq!(directory.visible_len(), 0);
    }

    #[test]
    fn search_covers_skills_and_company() {
        let mut directory = MentorDirectory::new(seed_data::mentors());
        directory.set_search_term("machine learning");
        assert_eq!(visible_ids(&directory), ["4"]);

        directory.set_search_term("globaltech");
        assert_eq!(visible_ids(&directory), ["2"]);
    }
}
