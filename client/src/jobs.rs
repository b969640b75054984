use seed::{prelude::*, *};
use shared::applications::ApplicationTracker;
use shared::jobs::{JobBoard, JobCategory};
use shared::listing::{ExperienceLevel, Job, JobType};
use shared::seed_data;
use shared::validation::JobApplicationForm;

use crate::widgets::{clear_button, distinct, empty_state, filter_group, search_box, tags};
use crate::{now, SavedJobsChanged, Toast};

pub struct Model {
    pub board: JobBoard,
    selected: Option<String>,
    application: Option<JobApplicationForm>,
}

impl Default for Model {
    fn default() -> Self {
        Model {
            board: JobBoard::new(seed_data::jobs()),
            selected: None,
            application: None,
        }
    }
}

pub enum Msg {
    SearchChanged(String),
    FilterToggled(JobCategory, String),
    FiltersCleared,
    Selected(String),
    DetailsClosed,
    BookmarkToggled(String),

    ApplyOpened,
    ApplyClosed,
    FormName(String),
    FormEmail(String),
    FormPhone(String),
    FormExperience(String),
    FormCoverLetter(String),
    FormPortfolio(String),
    ResumeChosen(Option<String>),
    ApplySubmitted,
}

pub fn update(
    msg: Msg,
    model: &mut Model,
    tracker: &mut ApplicationTracker,
    orders: &mut impl Orders<Msg>,
) {
    match msg {
        Msg::SearchChanged(term) => model.board.set_search_term(term),
        Msg::FilterToggled(category, value) => model.board.toggle_filter(category, &value),
        Msg::FiltersCleared => model.board.clear_filters(),

        Msg::Selected(id) => {
            model.board.increment_view(&id);
            model.selected = Some(id);
            model.application = None;
        }
        Msg::DetailsClosed => {
            model.selected = None;
            model.application = None;
        }

        Msg::BookmarkToggled(id) => {
            if let Some(saved) = model.board.toggle_bookmark(&id) {
                orders.notify(SavedJobsChanged);
                if saved {
                    orders.notify(Toast::success("Job saved successfully!"));
                }
            }
        }

        Msg::ApplyOpened => model.application = Some(JobApplicationForm::default()),
        Msg::ApplyClosed => model.application = None,

        Msg::ApplySubmitted => {
            let (Some(id), Some(form)) = (&model.selected, &model.application) else {
                return;
            };
            let Some(job) = model.board.listings().get(id) else {
                return;
            };
            match tracker.apply_to_job(job, form, now()) {
                Ok(_) => {
                    model.application = None;
                    orders.notify(Toast::success("Application submitted successfully!"));
                }
                Err(err) => {
                    orders.notify(Toast::error(err.to_string()));
                }
            }
        }

        form_msg => {
            if let Some(form) = model.application.as_mut() {
                match form_msg {
                    Msg::FormName(value) => form.name = value,
                    Msg::FormEmail(value) => form.email = value,
                    Msg::FormPhone(value) => form.phone = value,
                    Msg::FormExperience(value) => form.experience = value,
                    Msg::FormCoverLetter(value) => form.cover_letter = value,
                    Msg::FormPortfolio(value) => form.portfolio = value,
                    Msg::ResumeChosen(file) => form.resume_file = file,
                    _ => {}
                }
            }
        }
    }
}

fn chosen_file_name(event: web_sys::Event) -> Option<String> {
    let input = event
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    let file = input.files()?.get(0)?;
    Some(file.name())
}

pub fn view(model: &Model) -> Node<Msg> {
    let listings = model.board.listings();
    div![
        C!["row"],
        aside![C!["col-md-3"], filters_view(&model.board)],
        section![
            C!["col-md-9"],
            search_box(
                "Search by title, company or skill",
                listings.filters().search_term(),
                Msg::SearchChanged
            ),
            p![C!["text-muted"], format!("{} jobs found", listings.visible_len())],
            if listings.visible_len() == 0 {
                empty_state("No jobs match your filters.")
            } else {
                div![listings.visible().map(|job| job_card(job, model.board.is_saved(&job.id)))]
            },
            model
                .selected
                .as_ref()
                .and_then(|id| listings.get(id))
                .map(|job| details_view(job, model)),
        ],
    ]
}

fn filters_view(board: &JobBoard) -> Node<Msg> {
    let listings = board.listings();
    let jobs = listings.items();
    let filters = listings.filters();

    let types: Vec<String> = JobType::ALL.iter().map(|t| t.label().to_string()).collect();
    let levels: Vec<String> = ExperienceLevel::ALL
        .iter()
        .map(|l| l.label().to_string())
        .collect();
    let locations = distinct(jobs.iter().map(|job| job.location.as_str()));
    let skills = distinct(jobs.iter().flat_map(|job| job.skills.iter().map(String::as_str)));
    let industries = distinct(jobs.iter().flat_map(|job| job.industry.iter().map(String::as_str)));

    div![
        h5!["Filters"],
        clear_button(listings.is_filtered(), || Msg::FiltersCleared),
        filter_group("Job Type", JobCategory::Types, &types, filters, Msg::FilterToggled),
        filter_group("Location", JobCategory::Locations, &locations, filters, Msg::FilterToggled),
        filter_group("Experience", JobCategory::Experience, &levels, filters, Msg::FilterToggled),
        filter_group("Skills", JobCategory::Skills, &skills, filters, Msg::FilterToggled),
        filter_group("Industry", JobCategory::Industries, &industries, filters, Msg::FilterToggled),
    ]
}

fn job_card(job: &Job, saved: bool) -> Node<Msg> {
    let id = job.id.clone();
    let bookmark_id = job.id.clone();
    div![
        C!["card mb-3"],
        div![
            C!["card-body"],
            div![
                C!["d-flex justify-content-between"],
                h5![
                    C!["card-title"],
                    a![
                        attrs! {At::Href => "#"},
                        ev(Ev::Click, move |event| {
                            event.prevent_default();
                            Msg::Selected(id)
                        }),
                        &job.title,
                    ],
                    IF!(job.is_new => span![C!["badge badge-success ml-2"], "New"]),
                ],
                button![
                    C!["btn btn-sm", if saved { "btn-warning" } else { "btn-outline-secondary" }],
                    ev(Ev::Click, move |_| Msg::BookmarkToggled(bookmark_id)),
                    if saved { "Saved" } else { "Save" },
                ],
            ],
            h6![
                C!["card-subtitle text-muted mb-2"],
                format!("{} · {} · {}", job.company, job.location, job.job_type.label())
            ],
            job.salary.as_ref().map(|salary| p![C!["mb-1"], salary]),
            tags(&job.skills),
            small![
                C!["text-muted"],
                format!(
                    "Posted {} · {} views · {} applicants",
                    job.posted_date, job.views, job.applicants
                )
            ],
        ],
    ]
}

fn list_section(title: &str, items: &[String]) -> Node<Msg> {
    div![
        h6![C!["mt-3"], title],
        ul![items.iter().map(|item| li![item])],
    ]
}

fn details_view(job: &Job, model: &Model) -> Node<Msg> {
    let bookmark_id = job.id.clone();
    let saved = model.board.is_saved(&job.id);
    div![
        C!["card border-primary mb-3"],
        div![
            C!["card-header d-flex justify-content-between"],
            strong![&job.title, " at ", &job.company],
            button![C!["close"], ev(Ev::Click, |_| Msg::DetailsClosed), "×"],
        ],
        div![
            C!["card-body"],
            p![&job.description],
            list_section("Requirements", &job.requirements),
            list_section("Responsibilities", &job.responsibilities),
            list_section("Benefits", &job.benefits),
            h6![C!["mt-3"], format!("About {}", job.company)],
            p![&job.company_description],
            job.application_deadline
                .map(|deadline| p![C!["text-danger"], format!("Apply by {deadline}")]),
            match &model.application {
                Some(form) => application_form(job, form),
                None => div![
                    button![
                        C!["btn btn-primary mr-2"],
                        ev(Ev::Click, |_| Msg::ApplyOpened),
                        "Apply Now"
                    ],
                    button![
                        C!["btn btn-outline-secondary"],
                        ev(Ev::Click, move |_| Msg::BookmarkToggled(bookmark_id)),
                        if saved { "Remove from saved" } else { "Save job" },
                    ],
                ],
            },
        ],
    ]
}

fn form_field(
    label: &str,
    input_type: &str,
    value: &str,
    required: bool,
    on_input: impl FnOnce(String) -> Msg + Clone + 'static,
) -> Node<Msg> {
    div![
        C!["form-group"],
        label![label, IF!(required => " *")],
        input![
            C!["form-control"],
            attrs! {At::Type => input_type, At::Value => value},
            input_ev(Ev::Input, on_input),
        ],
    ]
}

fn application_form(job: &Job, form: &JobApplicationForm) -> Node<Msg> {
    form![
        C!["border-top pt-3"],
        ev(Ev::Submit, |event| {
            event.prevent_default();
            Msg::ApplySubmitted
        }),
        h5![format!("Apply for {}", job.title)],
        form_field("Full name", "text", &form.name, true, Msg::FormName),
        form_field("Email", "email", &form.email, true, Msg::FormEmail),
        form_field("Phone", "tel", &form.phone, true, Msg::FormPhone),
        form_field("Years of experience", "text", &form.experience, false, Msg::FormExperience),
        div![
            C!["form-group"],
            label!["Cover letter"],
            textarea![
                C!["form-control"],
                attrs! {At::Rows => "4", At::Value => &form.cover_letter},
                input_ev(Ev::Input, Msg::FormCoverLetter),
            ],
        ],
        div![
            C!["form-group"],
            label!["Resume *"],
            input![
                C!["form-control-file"],
                attrs! {At::Type => "file", At::Accept => ".pdf,.doc,.docx"},
                ev(Ev::Change, |event| Msg::ResumeChosen(chosen_file_name(event))),
            ],
            form.resume_file
                .as_ref()
                .map(|name| small![C!["text-muted"], format!("Selected: {name}")]),
        ],
        form_field("Portfolio URL", "url", &form.portfolio, false, Msg::FormPortfolio),
        button![C!["btn btn-primary mr-2"], attrs! {At::Type => "submit"}, "Submit application"],
        button![
            C!["btn btn-link"],
            attrs! {At::Type => "button"},
            ev(Ev::Click, |_| Msg::ApplyClosed),
            "Cancel"
        ],
    ]
}
