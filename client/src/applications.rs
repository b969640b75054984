use seed::{prelude::*, *};
use shared::applications::{ApplicationCategory, ApplicationTracker, ApplicationUpdate};
use shared::listing::{Application, ApplicationStatus};
use shared::seed_data;

use crate::widgets::search_box;
use crate::{now, Toast};

pub struct Model {
    pub tracker: ApplicationTracker,
    selected: Option<String>,
    edit: Option<Draft>,
}

/// Edit-mode copy of the fields the detail pane can change.
struct Draft {
    status: ApplicationStatus,
    notes: String,
    next_steps: String,
    interview_date: String,
}

impl Default for Model {
    fn default() -> Self {
        Model {
            tracker: ApplicationTracker::new(seed_data::applications()),
            selected: None,
            edit: None,
        }
    }
}

pub enum Msg {
    SearchChanged(String),
    StatusFilterToggled(ApplicationStatus),
    FiltersCleared,
    Selected(String),
    EditStarted,
    EditCancelled,
    StatusChanged(String),
    NotesChanged(String),
    NextStepsChanged(String),
    InterviewDateChanged(String),
    Saved,
    Deleted(String),
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl Draft {
    /// Every edited field is written back; an emptied box clears the value.
    fn into_update(self) -> ApplicationUpdate {
        ApplicationUpdate {
            status: Some(self.status),
            notes: Some(self.notes),
            next_steps: Some(non_empty(self.next_steps)),
            interview_date: Some(non_empty(self.interview_date)),
            ..ApplicationUpdate::default()
        }
    }
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::SearchChanged(term) => model.tracker.set_search_term(term),
        Msg::StatusFilterToggled(status) => {
            model
                .tracker
                .toggle_filter(ApplicationCategory::Status, status.label());
        }
        Msg::FiltersCleared => model.tracker.clear_filters(),

        Msg::Selected(id) => {
            model.selected = Some(id);
            model.edit = None;
        }

        Msg::EditStarted => {
            model.edit = model
                .selected
                .as_ref()
                .and_then(|id| model.tracker.listings().get(id))
                .map(|application| Draft {
                    status: application.status,
                    notes: application.notes.clone(),
                    next_steps: application.next_steps.clone().unwrap_or_default(),
                    interview_date: application.interview_date.clone().unwrap_or_default(),
                });
        }
        Msg::EditCancelled => model.edit = None,

        Msg::StatusChanged(label) => {
            let status = ApplicationStatus::ALL
                .into_iter()
                .find(|status| status.label() == label);
            if let (Some(draft), Some(status)) = (model.edit.as_mut(), status) {
                draft.status = status;
            }
        }
        Msg::NotesChanged(notes) => {
            if let Some(draft) = model.edit.as_mut() {
                draft.notes = notes;
            }
        }
        Msg::NextStepsChanged(next_steps) => {
            if let Some(draft) = model.edit.as_mut() {
                draft.next_steps = next_steps;
            }
        }
        Msg::InterviewDateChanged(date) => {
            if let Some(draft) = model.edit.as_mut() {
                draft.interview_date = date;
            }
        }

        Msg::Saved => {
            let (Some(id), Some(draft)) = (model.selected.as_ref(), model.edit.take()) else {
                return;
            };
            if model.tracker.update(id, draft.into_update(), now()) {
                orders.notify(Toast::success("Application updated"));
            }
        }

        Msg::Deleted(id) => {
            if !confirm("Are you sure you want to delete this application?") {
                return;
            }
            if model.tracker.delete(&id).is_some() {
                model.selected = None;
                model.edit = None;
                orders.notify(Toast::success("Application deleted"));
            }
        }
    }
}

fn status_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "badge-warning",
        ApplicationStatus::Reviewing => "badge-info",
        ApplicationStatus::Interview => "badge-primary",
        ApplicationStatus::Offer => "badge-success",
        ApplicationStatus::Rejected => "badge-danger",
    }
}

fn status_title(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "Pending",
        ApplicationStatus::Reviewing => "Under Review",
        ApplicationStatus::Interview => "Interview",
        ApplicationStatus::Offer => "Offer",
        ApplicationStatus::Rejected => "Rejected",
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    let listings = model.tracker.listings();
    let filters = listings.filters();
    let counts = model.tracker.status_counts();

    div![
        h2!["My Applications"],
        div![
            C!["mb-3"],
            ApplicationStatus::ALL.iter().map(|status| {
                let status = *status;
                let active = filters.is_selected(ApplicationCategory::Status, status.label());
                button![
                    C!["btn btn-sm mr-2", if active { "btn-dark" } else { "btn-outline-dark" }],
                    ev(Ev::Click, move |_| Msg::StatusFilterToggled(status)),
                    format!("{} ({})", status_title(status), counts.get(&status).copied().unwrap_or(0)),
                ]
            }),
            IF!(listings.is_filtered() => button![
                C!["btn btn-link btn-sm"],
                ev(Ev::Click, |_| Msg::FiltersCleared),
                "Clear"
            ]),
        ],
        search_box("Search applications", filters.search_term(), Msg::SearchChanged),
        div![
            C!["row"],
            ApplicationStatus::ALL.iter().map(|status| {
                let column: Vec<&Application> = listings
                    .visible()
                    .filter(|application| application.status == *status)
                    .collect();
                div![
                    C!["col"],
                    h6![status_title(*status), " ", small![C!["text-muted"], format!("({})", column.len())]],
                    column
                        .into_iter()
                        .map(|application| summary_card(application, model.selected.as_deref())),
                ]
            }),
        ],
        model
            .selected
            .as_ref()
            .and_then(|id| listings.get(id))
            .map(|application| details_view(application, model.edit.as_ref())),
    ]
}

fn summary_card(application: &Application, selected: Option<&str>) -> Node<Msg> {
    let id = application.id.clone();
    let is_selected = selected == Some(application.id.as_str());
    div![
        C!["card mb-2", IF!(is_selected => "border-primary")],
        style! {St::Cursor => "pointer"},
        ev(Ev::Click, move |_| Msg::Selected(id)),
        div![
            C!["card-body p-2"],
            strong![&application.job_title],
            div![C!["small text-muted"], &application.company],
            div![
                C!["small"],
                format!("Applied {}", application.applied_date.format("%B %-d, %Y"))
            ],
        ],
    ]
}

fn details_view(application: &Application, edit: Option<&Draft>) -> Node<Msg> {
    let delete_id = application.id.clone();
    div![
        C!["card mt-4"],
        div![
            C!["card-header d-flex justify-content-between align-items-center"],
            div![
                strong![&application.job_title],
                " at ",
                &application.company,
                span![C!["badge ml-2", status_class(application.status)], application.status.label()],
            ],
            div![
                IF!(edit.is_none() => button![
                    C!["btn btn-sm btn-outline-primary mr-2"],
                    ev(Ev::Click, |_| Msg::EditStarted),
                    "Edit"
                ]),
                button![
                    C!["btn btn-sm btn-outline-danger"],
                    ev(Ev::Click, move |_| Msg::Deleted(delete_id)),
                    "Delete"
                ],
            ],
        ],
        div![
            C!["card-body"],
            p![
                C!["small text-muted"],
                format!(
                    "{} · {} · {} · via {} · last updated {}",
                    application.location,
                    application.job_type,
                    application.salary.as_deref().unwrap_or("salary not listed"),
                    application.source,
                    application.last_updated.format("%B %-d, %Y")
                )
            ],
            match edit {
                Some(draft) => edit_form(draft),
                None => div![
                    h6!["Notes"],
                    p![&application.notes],
                    application.next_steps.as_ref().map(|steps| div![h6!["Next steps"], p![steps]]),
                    application
                        .interview_date
                        .as_ref()
                        .map(|date| div![h6!["Interview"], p![date]]),
                    application.contact_person.as_ref().map(|person| div![
                        h6!["Contact"],
                        p![
                            person,
                            application
                                .contact_email
                                .as_ref()
                                .map(|email| format!(" ({email})")),
                        ]
                    ]),
                    application
                        .follow_up_date
                        .map(|date| p![C!["text-info"], format!("Follow up on {date}")]),
                ],
            },
        ],
    ]
}

fn edit_form(draft: &Draft) -> Node<Msg> {
    div![
        div![
            C!["form-group"],
            label!["Status"],
            select![
                C!["form-control"],
                ApplicationStatus::ALL.iter().map(|status| option![
                    attrs! {
                        At::Value => status.label(),
                        At::Selected => (*status == draft.status).as_at_value()
                    },
                    status_title(*status)
                ]),
                input_ev(Ev::Change, Msg::StatusChanged),
            ],
        ],
        div![
            C!["form-group"],
            label!["Notes"],
            textarea![
                C!["form-control"],
                attrs! {At::Rows => "3", At::Value => &draft.notes},
                input_ev(Ev::Input, Msg::NotesChanged),
            ],
        ],
        div![
            C!["form-group"],
            label!["Next steps"],
            input![
                C!["form-control"],
                attrs! {At::Value => &draft.next_steps},
                input_ev(Ev::Input, Msg::NextStepsChanged),
            ],
        ],
        div![
            C!["form-group"],
            label!["Interview date"],
            input![
                C!["form-control"],
                attrs! {At::Type => "text", At::Value => &draft.interview_date, At::Placeholder => "e.g. 2024-03-25 14:00"},
                input_ev(Ev::Input, Msg::InterviewDateChanged),
            ],
        ],
        button![C!["btn btn-primary mr-2"], ev(Ev::Click, |_| Msg::Saved), "Save"],
        button![C!["btn btn-link"], ev(Ev::Click, |_| Msg::EditCancelled), "Cancel"],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn emptied_boxes_clear_the_application() {
        let mut tracker = ApplicationTracker::new(seed_data::applications());
        let draft = Draft {
            status: ApplicationStatus::Interview,
            notes: String::new(),
            next_steps: "  ".into(),
            interview_date: String::new(),
        };
        let saved_at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();

        assert!(tracker.update("1", draft.into_update(), saved_at));

        let application = tracker.listings().get("1").unwrap();
        assert_eq!(application.notes, "");
        assert_eq!(application.next_steps, None);
        assert_eq!(application.interview_date, None);
        assert_eq!(application.last_updated, saved_at);
    }

    #[test]
    fn filled_boxes_are_written_back() {
        let draft = Draft {
            status: ApplicationStatus::Offer,
            notes: "Offer received".into(),
            next_steps: "Negotiate".into(),
            interview_date: "2026-11-02 10:00".into(),
        };
        let update = draft.into_update();
        assert_eq!(update.status, Some(ApplicationStatus::Offer));
        assert_eq!(update.next_steps, Some(Some("Negotiate".to_string())));
        assert_eq!(update.interview_date, Some(Some("2026-11-02 10:00".to_string())));
    }
}
