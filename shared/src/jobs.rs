use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::filter::{contains_term, Bookmarkable, FilteredCollection, Listing};
use crate::listing::Job;

/// Jobs posted within this many days count as new.
pub const NEW_JOB_WINDOW_DAYS: i64 = 3;
const RECOMMENDED_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JobCategory {
    Types,
    Locations,
    Skills,
    Experience,
    Industries,
}

impl Listing for Job {
    type Category = JobCategory;
    type Context = ();

    fn id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_term(&self.title, term)
            || contains_term(&self.company, term)
            || contains_term(&self.description, term)
            || self.skills.iter().any(|skill| contains_term(skill, term))
    }

    fn matches_category(&self, category: JobCategory, selected: &BTreeSet<String>) -> bool {
        match category {
            JobCategory::Types => selected.contains(self.job_type.label()),
            JobCategory::Locations => selected.contains(&self.location),
            JobCategory::Skills => self.skills.iter().any(|skill| selected.contains(skill)),
            JobCategory::Experience => selected.contains(self.experience_level.label()),
            JobCategory::Industries => self.industry.iter().any(|ind| selected.contains(ind)),
        }
    }
}

impl Bookmarkable for Job {
    fn is_bookmarked(&self) -> bool {
        self.is_bookmarked
    }

    fn set_bookmarked(&mut self, bookmarked: bool) {
        self.is_bookmarked = bookmarked;
    }
}

/// Job listings plus the user's saved list. The saved list is the only part
/// that is persisted.
#[derive(Debug, Clone)]
pub struct JobBoard {
    jobs: FilteredCollection<Job>,
    saved: Vec<Job>,
}

impl JobBoard {
    pub fn new(jobs: Vec<Job>) -> Self {
        JobBoard {
            jobs: FilteredCollection::new(jobs),
            saved: Vec::new(),
        }
    }

    pub fn listings(&self) -> &FilteredCollection<Job> {
        &self.jobs
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.jobs.set_search_term(term);
    }

    pub fn toggle_filter(&mut self, category: JobCategory, value: &str) {
        self.jobs.toggle_filter(category, value);
    }

    pub fn clear_filters(&mut self) {
        self.jobs.clear_filters();
    }

    pub fn apply_filters(&mut self) {
        self.jobs.apply_filters();
    }

    /// Flips the bookmark on the job and mirrors it into or out of the saved
    /// list. Unknown ids are ignored.
    pub fn toggle_bookmark(&mut self, id: &str) -> Option<bool> {
        let bookmarked = self.jobs.toggle_bookmark(id)?;
        if bookmarked {
            if let Some(job) = self.jobs.get(id) {
                self.saved.push(job.clone());
            }
        } else {
            self.saved.retain(|job| job.id != id);
        }
        debug!(job = id, bookmarked, saved = self.saved.len(), "bookmark toggled");
        Some(bookmarked)
    }

    pub fn saved_jobs(&self) -> &[Job] {
        &self.saved
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|job| job.id == id)
    }

    /// Jobs posted on or after `today - 3 days`.
    pub fn new_jobs(&self, today: NaiveDate) -> Vec<&Job> {
        let cutoff = today - Duration::days(NEW_JOB_WINDOW_DAYS);
        self.jobs
            .items()
            .iter()
            .filter(|job| job.posted_date >= cutoff)
            .collect()
    }

    /// Heavily viewed jobs with few applicants, best view/applicant ratio
    /// first.
    pub fn recommended_jobs(&self) -> Vec<&Job> {
        let mut jobs: Vec<&Job> = self
            .jobs
            .items()
            .iter()
            .filter(|job| job.views > 200 && job.applicants < 20)
            .collect();
        jobs.sort_by(|a, b| view_ratio(b).total_cmp(&view_ratio(a)));
        jobs.truncate(RECOMMENDED_LIMIT);
        jobs
    }

    pub fn increment_view(&mut self, id: &str) {
        self.jobs.update(id, |job| job.views += 1);
    }

    pub fn saved_snapshot(&self) -> Vec<Job> {
        self.saved.clone()
    }

    /// Reinstates a persisted saved list. Saved jobs that no longer exist in
    /// the listings are dropped; the rest are marked bookmarked again.
    pub fn restore_saved(&mut self, saved: Vec<Job>) {
        self.saved.clear();
        for mut job in saved {
            if self.jobs.update(&job.id, |listed| listed.is_bookmarked = true) {
                job.is_bookmarked = true;
                self.saved.push(job);
            } else {
                debug!(job = %job.id, "dropping saved job missing from listings");
            }
        }
    }
}

fn view_ratio(job: &Job) -> f64 {
    f64::from(job.views) / f64::from(job.applicants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_data;

    fn board() -> JobBoard {
        JobBoard::new(seed_data::jobs())
    }

    fn visible_ids(board: &JobBoard) -> Vec<String> {
        board.listings().visible().map(|job| job.id.clone()).collect()
    }

    #[test]
    fn search_covers_skills_and_company() {
        let mut board = board();
        board.set_search_term("kubernetes");
        assert_eq!(visible_ids(&board), ["7"]);

        board.set_search_term("analytics hub");
        assert_eq!(visible_ids(&board), ["2"]);
    }

    #[test]
    fn filters_combine_across_categories() {
        let mut board = board();
        board.toggle_filter(JobCategory::Locations, "Bangalore");
        assert_eq!(visible_ids(&board), ["1", "7", "10", "15"]);

        board.toggle_filter(JobCategory::Experience, "Senior");
        assert_eq!(visible_ids(&board), ["1", "10"]);

        board.toggle_filter(JobCategory::Skills, "AWS");
        assert_eq!(visible_ids(&board), ["1"]);
    }

    #[test]
    fn type_filter_uses_display_labels() {
        let mut board = board();
        board.toggle_filter(JobCategory::Types, "Part-time");
        assert_eq!(visible_ids(&board), ["8"]);

        board.toggle_filter(JobCategory::Types, "Contract");
        assert_eq!(visible_ids(&board), ["8", "14"]);
    }

    #[test]
    fn industry_filter_matches_any_industry() {
        let mut board = board();
        board.toggle_filter(JobCategory::Industries, "Consulting");
        assert_eq!(visible_ids(&board), ["6", "10", "13"]);
    }

    #[test]
    fn bookmark_mirrors_saved_list() {
        let mut board = board();
        board.toggle_filter(JobCategory::Locations, "Pune");

        assert_eq!(board.toggle_bookmark("5"), Some(true));
        assert!(board.is_saved("5"));
        assert!(board.saved_jobs()[0].is_bookmarked);
        assert!(board.listings().visible().any(|job| job.id == "5" && job.is_bookmarked));

        assert_eq!(board.toggle_bookmark("5"), Some(false));
        assert!(board.saved_jobs().is_empty());
        assert!(!board.listings().get("5").map_or(true, |job| job.is_bookmarked));
    }

    #[test]
    fn unknown_bookmark_is_a_no_op() {
        let mut board = board();
        assert_eq!(board.toggle_bookmark("404"), None);
        assert!(board.saved_jobs().is_empty());
    }

    #[test]
    fn recommended_orders_by_view_ratio() {
        let board = board();
        let ids: Vec<&str> = board
            .recommended_jobs()
            .iter()
            .map(|job| job.id.as_str())
            .collect();
        assert_eq!(ids, ["2", "4", "9"]);
    }

    #[test]
    fn new_jobs_uses_three_day_window() {
        let board = board();
        let today = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let ids: Vec<&str> = board.new_jobs(today).iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn increment_view_updates_listing() {
        let mut board = board();
        let before = board.listings().get("3").map(|job| job.views);
        board.increment_view("3");
        assert_eq!(board.listings().get("3").map(|job| job.views), before.map(|v| v + 1));
    }

    #[test]
    fn restore_saved_marks_listings() {
        let mut board = board();
        board.toggle_bookmark("2");
        board.toggle_bookmark("9");
        let snapshot = board.saved_snapshot();

        let mut restored = JobBoard::new(seed_data::jobs());
        let mut stale = snapshot[0].clone();
        stale.id = "gone".to_string();
        let mut saved = snapshot.clone();
        saved.push(stale);
        restored.restore_saved(saved);

        assert_eq!(restored.saved_jobs(), snapshot.as_slice());
        assert_eq!(restored.listings().bookmarked().count(), 2);

        assert_eq!(restored.toggle_bookmark("2"), Some(false));
        assert!(!restored.is_saved("2"));
    }
}
