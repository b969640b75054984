use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::filter::{contains_term, FilteredCollection, Listing};
use crate::listing::{Application, ApplicationStatus, Job};
use crate::validation::{JobApplicationForm, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ApplicationCategory {
    Status,
}

impl Listing for Application {
    type Category = ApplicationCategory;
    type Context = ();

    fn id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_term(&self.job_title, term)
            || contains_term(&self.company, term)
            || contains_term(&self.notes, term)
    }

    fn matches_category(&self, category: ApplicationCategory, selected: &BTreeSet<String>) -> bool {
        match category {
            ApplicationCategory::Status => selected.contains(self.status.label()),
        }
    }
}

/// Everything about an application except the fields the tracker assigns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationDraft {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub status: ApplicationStatus,
    pub notes: String,
    pub next_steps: Option<String>,
    pub interview_date: Option<String>,
    pub location: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub source: String,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
}

impl ApplicationDraft {
    /// A pending application for `job`, with the cover letter as notes.
    pub fn for_job(job: &Job, form: &JobApplicationForm) -> Self {
        ApplicationDraft {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            company: job.company.clone(),
            status: ApplicationStatus::Pending,
            notes: form.cover_letter.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            job_type: job.job_type.label().to_string(),
            source: job.source.clone(),
            ..ApplicationDraft::default()
        }
    }
}

/// Partial update; `None` leaves a field as it is. For the two clearable
/// fields `Some(None)` empties the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationUpdate {
    pub status: Option<ApplicationStatus>,
    pub notes: Option<String>,
    pub next_steps: Option<Option<String>>,
    pub interview_date: Option<Option<String>>,
    pub salary: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
}

impl ApplicationUpdate {
    fn apply(self, application: &mut Application) {
        if let Some(status) = self.status {
            application.status = status;
        }
        if let Some(notes) = self.notes {
            application.notes = notes;
        }
        if let Some(next_steps) = self.next_steps {
            application.next_steps = next_steps;
        }
        if let Some(interview_date) = self.interview_date {
            application.interview_date = interview_date;
        }
        if self.salary.is_some() {
            application.salary = self.salary;
        }
        if self.contact_person.is_some() {
            application.contact_person = self.contact_person;
        }
        if self.contact_email.is_some() {
            application.contact_email = self.contact_email;
        }
        if self.follow_up_date.is_some() {
            application.follow_up_date = self.follow_up_date;
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationTracker {
    applications: FilteredCollection<Application>,
}

impl ApplicationTracker {
    pub fn new(applications: Vec<Application>) -> Self {
        ApplicationTracker {
            applications: FilteredCollection::new(applications),
        }
    }

    pub fn listings(&self) -> &FilteredCollection<Application> {
        &self.applications
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.applications.set_search_term(term);
    }

    pub fn toggle_filter(&mut self, category: ApplicationCategory, value: &str) {
        self.applications.toggle_filter(category, value);
    }

    pub fn clear_filters(&mut self) {
        self.applications.clear_filters();
    }

    /// Records a new application and returns its id. The id is the creation
    /// time in milliseconds, bumped past any id already taken.
    pub fn add(&mut self, draft: ApplicationDraft, now: DateTime<Utc>) -> String {
        let mut stamp = now.timestamp_millis();
        while self.applications.get(&stamp.to_string()).is_some() {
            stamp += 1;
        }
        let id = stamp.to_string();

        self.applications.push(Application {
            id: id.clone(),
            job_id: draft.job_id,
            job_title: draft.job_title,
            company: draft.company,
            status: draft.status,
            applied_date: now,
            last_updated: now,
            notes: draft.notes,
            next_steps: draft.next_steps,
            interview_date: draft.interview_date,
            location: draft.location,
            salary: draft.salary,
            job_type: draft.job_type,
            source: draft.source,
            contact_person: draft.contact_person,
            contact_email: draft.contact_email,
            follow_up_date: draft.follow_up_date,
        });
        info!(application = %id, "application added");
        id
    }

    /// Validates the apply form and records a pending application for `job`.
    pub fn apply_to_job(
        &mut self,
        job: &Job,
        form: &JobApplicationForm,
        now: DateTime<Utc>,
    ) -> Result<String, ValidationError> {
        form.validate()?;
        Ok(self.add(ApplicationDraft::for_job(job, form), now))
    }

    /// Merges `changes` into the application and bumps its last-updated
    /// time. Returns false for an unknown id.
    pub fn update(&mut self, id: &str, changes: ApplicationUpdate, now: DateTime<Utc>) -> bool {
        self.applications.update(id, |application| {
            changes.apply(application);
            application.last_updated = now;
        })
    }

    pub fn delete(&mut self, id: &str) -> Option<Application> {
        let removed = self.applications.remove(id);
        if removed.is_some() {
            info!(application = id, "application deleted");
        }
        removed
    }

    pub fn by_status(&self, status: ApplicationStatus) -> Vec<&Application> {
        self.applications
            .items()
            .iter()
            .filter(|application| application.status == status)
            .collect()
    }

    /// Count per status; every status is present, zero or not.
    pub fn status_counts(&self) -> BTreeMap<ApplicationStatus, usize> {
        let mut counts: BTreeMap<ApplicationStatus, usize> = ApplicationStatus::ALL
            .iter()
            .map(|status| (*status, 0))
            .collect();
        for application in self.applications.items() {
            *counts.entry(application.status).or_default() += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_data;
    use chrono::TimeZone;

    fn tracker() -> ApplicationTracker {
        ApplicationTracker::new(seed_data::applications())
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, hour, 0, 0).unwrap()
    }

    #[test]
    fn add_assigns_id_and_dates() {
        let mut tracker = tracker();
        let draft = ApplicationDraft {
            job_id: "7".into(),
            job_title: "DevOps Engineer".into(),
            company: "CloudTech".into(),
            ..ApplicationDraft::default()
        };

        let id = tracker.add(draft.clone(), at(9));
        let again = tracker.add(draft, at(9));
        assert_ne!(id, again);

        let added = tracker.listings().get(&id).unwrap();
        assert_eq!(added.status, ApplicationStatus::Pending);
        assert_eq!(added.applied_date, at(9));
        assert_eq!(added.last_updated, at(9));
        assert_eq!(tracker.listings().items().len(), 7);
    }

    #[test]
    fn update_merges_and_bumps_timestamp() {
        let mut tracker = tracker();
        let changed = tracker.update(
            "3",
            ApplicationUpdate {
                status: Some(ApplicationStatus::Interview),
                next_steps: Some(Some("Take-home exercise".into())),
                ..ApplicationUpdate::default()
            },
            at(10),
        );
        assert!(changed);

        let application = tracker.listings().get("3").unwrap();
        assert_eq!(application.status, ApplicationStatus::Interview);
        assert_eq!(application.next_steps.as_deref(), Some("Take-home exercise"));
        assert_eq!(application.salary.as_deref(), Some("15-20 LPA"));
        assert_eq!(application.last_updated, at(10));

        assert!(!tracker.update("missing", ApplicationUpdate::default(), at(11)));
    }

    #[test]
    fn emptied_fields_are_stored_as_cleared() {
        let mut tracker = tracker();
        assert!(tracker.update(
            "1",
            ApplicationUpdate {
                notes: Some(String::new()),
                next_steps: Some(None),
                interview_date: Some(None),
                ..ApplicationUpdate::default()
            },
            at(12),
        ));

        let application = tracker.listings().get("1").unwrap();
        assert_eq!(application.notes, "");
        assert_eq!(application.next_steps, None);
        assert_eq!(application.interview_date, None);
        assert_eq!(application.contact_person.as_deref(), Some("Priya Sharma"));

        tracker.update("1", ApplicationUpdate::default(), at(13));
        assert_eq!(tracker.listings().get("1").unwrap().next_steps, None);
    }

    #[test]
    fn delete_removes_by_id() {
        let mut tracker = tracker();
        assert!(tracker.delete("5").is_some());
        assert!(tracker.delete("5").is_none());
        assert!(tracker.by_status(ApplicationStatus::Rejected).is_empty());
    }

    #[test]
    fn counts_cover_every_status() {
        let mut tracker = tracker();
        tracker.delete("4");
        let counts = tracker.status_counts();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[&ApplicationStatus::Offer], 0);
        assert_eq!(counts[&ApplicationStatus::Interview], 1);
    }

    #[test]
    fn status_filter_and_search() {
        let mut tracker = tracker();
        tracker.toggle_filter(ApplicationCategory::Status, "pending");
        tracker.toggle_filter(ApplicationCategory::Status, "offer");
        let ids: Vec<&str> = tracker.listings().visible().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["3", "4"]);

        tracker.set_search_term("negotiating");
        let ids: Vec<&str> = tracker.listings().visible().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["4"]);

        tracker.clear_filters();
        assert_eq!(tracker.listings().visible_len(), 5);
    }

    #[test]
    fn apply_to_job_validates_first() {
        let mut tracker = tracker();
        let job = seed_data::jobs().remove(4);
        let mut form = JobApplicationForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "9876543210".into(),
            cover_letter: "Keen to join the frontend team.".into(),
            ..JobApplicationForm::default()
        };

        assert_eq!(
            tracker.apply_to_job(&job, &form, at(12)),
            Err(ValidationError::MissingRequiredFields)
        );
        assert_eq!(tracker.listings().items().len(), 5);

        form.resume_file = Some("jane.pdf".into());
        let id = tracker.apply_to_job(&job, &form, at(12)).unwrap();
        let application = tracker.listings().get(&id).unwrap();
        assert_eq!(application.job_id, "5");
        assert_eq!(application.job_type, "Full-time");
        assert_eq!(application.notes, "Keen to join the frontend team.");
    }
}
