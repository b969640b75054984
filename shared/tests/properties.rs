use chrono::NaiveDate;

use shared::applications::{ApplicationCategory, ApplicationTracker};
use shared::auth::{PersistedSession, Session};
use shared::chatbot::{generate_reply, DEFAULT_MENU};
use shared::events::{EventBoard, EventCategory};
use shared::filter::{FilteredCollection, Listing};
use shared::jobs::{JobBoard, JobCategory};
use shared::listing::Job;
use shared::mentors::{MentorCategory, MentorDirectory};
use shared::resources::{ResourceCategory, ResourceLibrary};
use shared::seed_data;
use shared::storage::{self, MemoryStore, StorageError, AUTH_KEY, JOB_KEY};

fn ids<T: Listing>(collection: &FilteredCollection<T>) -> Vec<String> {
    collection.visible().map(|item| item.id().to_string()).collect()
}

fn all_ids<T: Listing>(collection: &FilteredCollection<T>) -> Vec<String> {
    collection.items().iter().map(|item| item.id().to_string()).collect()
}

/// Every visible record passes the active filters, and every hidden one
/// fails them.
fn assert_view_consistent<T: Listing>(collection: &FilteredCollection<T>) {
    let visible = ids(collection);
    for item in collection.items() {
        let passes = collection.filters().matches(item) && item.matches_context(collection.context());
        assert_eq!(
            passes,
            visible.contains(&item.id().to_string()),
            "record {} misplaced",
            item.id()
        );
    }
}

#[test]
fn job_view_matches_filters() {
    let mut board = JobBoard::new(seed_data::jobs());
    board.set_search_term("E");
    board.toggle_filter(JobCategory::Locations, "Bangalore");
    board.toggle_filter(JobCategory::Locations, "Remote");
    board.toggle_filter(JobCategory::Experience, "Mid");
    assert!(board.listings().visible_len() > 0);
    assert_view_consistent(board.listings());

    board.clear_filters();
    assert_eq!(ids(board.listings()), all_ids(board.listings()));
}

#[test]
fn double_toggle_is_a_no_op() {
    let mut library = ResourceLibrary::new(seed_data::resources());
    library.toggle_filter(ResourceCategory::Types, "article");
    let before = ids(&library);
    let filters = library.filters().clone();

    library.toggle_filter(ResourceCategory::Tags, "Career Growth");
    library.toggle_filter(ResourceCategory::Tags, "Career Growth");
    assert_eq!(ids(&library), before);
    assert_eq!(library.filters(), &filters);
}

#[test]
fn clear_restores_every_collection() {
    let mut mentors = MentorDirectory::new(seed_data::mentors());
    mentors.set_search_term("nobody matches this");
    mentors.toggle_filter(MentorCategory::Industries, "Finance");
    assert_eq!(mentors.visible_len(), 0);
    mentors.clear_filters();
    assert_eq!(ids(&mentors), all_ids(&mentors));

    let mut tracker = ApplicationTracker::new(seed_data::applications());
    tracker.toggle_filter(ApplicationCategory::Status, "rejected");
    assert_view_consistent(tracker.listings());
    tracker.clear_filters();
    assert_eq!(tracker.listings().visible_len(), tracker.listings().items().len());
}

#[test]
fn events_keep_upcoming_window_after_clear() {
    let mut events = EventBoard::new(seed_data::events());
    events.set_today(NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
    events.set_upcoming_only(false);
    events.toggle_filter(EventCategory::Types, "Webinar");
    assert_view_consistent(&events);

    events.clear_filters();
    assert!(events.context().upcoming_only);
    assert_view_consistent(&events);
    assert!(events.visible_len() < events.items().len());
}

#[test]
fn bookmark_twice_restores_state() {
    let mut board = JobBoard::new(seed_data::jobs());
    let before: Vec<bool> = board.listings().items().iter().map(|j| j.is_bookmarked).collect();

    board.toggle_bookmark("6");
    assert!(board.is_saved("6"));
    board.toggle_bookmark("6");
    assert!(!board.is_saved("6"));

    let after: Vec<bool> = board.listings().items().iter().map(|j| j.is_bookmarked).collect();
    assert_eq!(before, after);
    assert!(board.toggle_bookmark("no-such-job").is_none());
}

#[test]
fn login_and_signup_outcomes() {
    let mut session = Session::default();
    assert!(!session.login("jane@example.com", "nope"));
    assert_eq!(session, Session::default());
    assert!(session.login("jane@example.com", "password123"));
    assert!(session.is_authenticated());

    let mut fresh = Session::default();
    assert!(!fresh.signup("Admin Again", "admin@example.com", "longenough"));
    assert!(!fresh.is_authenticated());
    assert!(fresh.signup("New Person", "new@example.com", "longenough"));
    assert!(fresh.is_authenticated());
}

#[test]
fn chat_keywords() {
    for utterance in ["interview", "INTERVIEW", "My Interview tomorrow"] {
        assert!(generate_reply(utterance).starts_with("Here are some interview preparation tips"));
    }
    assert_eq!(generate_reply("what's the weather"), DEFAULT_MENU);
}

#[test]
fn blobs_survive_storage() {
    let mut store = MemoryStore::default();

    let mut session = Session::default();
    session.login("admin@example.com", "admin123");
    storage::save(&mut store, AUTH_KEY, &session.persisted()).unwrap();

    let mut board = JobBoard::new(seed_data::jobs());
    board.toggle_bookmark("3");
    board.toggle_bookmark("11");
    storage::save(&mut store, JOB_KEY, &board.saved_snapshot()).unwrap();

    let restored: PersistedSession = storage::load(&store, AUTH_KEY).unwrap().unwrap();
    assert_eq!(Session::restore(restored), session);

    let saved: Vec<Job> = storage::load(&store, JOB_KEY).unwrap().unwrap();
    let mut reloaded = JobBoard::new(seed_data::jobs());
    reloaded.restore_saved(saved);
    assert!(reloaded.is_saved("3") && reloaded.is_saved("11"));
    assert!(reloaded.listings().get("11").unwrap().is_bookmarked);
}

#[test]
fn foreign_version_rejected() {
    use shared::storage::KeyValueStore;

    let mut store = MemoryStore::default();
    store.set(JOB_KEY, r#"{"version":2,"state":[]}"#).unwrap();
    let loaded: Result<Option<Vec<Job>>, StorageError> = storage::load(&store, JOB_KEY);
    assert!(matches!(loaded, Err(StorageError::Version { found: 2 })));
}

#[test]
fn recommended_ordered_by_ratio() {
    let board = JobBoard::new(seed_data::jobs());
    let recommended = board.recommended_jobs();
    assert!(recommended.len() <= 5);
    for pair in recommended.windows(2) {
        let ratio = |job: &Job| f64::from(job.views) / f64::from(job.applicants);
        assert!(ratio(pair[0]) >= ratio(pair[1]));
    }
    for job in &recommended {
        assert!(job.views > 200 && job.applicants < 20);
    }
}

#[test]
fn new_jobs_window() {
    let board = JobBoard::new(seed_data::jobs());
    let today = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
    let cutoff = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
    for job in board.listings().items() {
        let is_new = board.new_jobs(today).iter().any(|j| j.id == job.id);
        assert_eq!(is_new, job.posted_date >= cutoff);
    }
}
