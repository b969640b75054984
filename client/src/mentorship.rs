use seed::{prelude::*, *};
use shared::listing::{Mentor, MentorshipProgram};
use shared::mentors::{MentorCategory, MentorDirectory, INDUSTRIES};
use shared::seed_data;

use crate::widgets::{clear_button, empty_state, filter_group, search_box, tags};
use crate::Toast;

pub struct Model {
    directory: MentorDirectory,
    programs: Vec<MentorshipProgram>,
    selected: Option<String>,
}

impl Default for Model {
    fn default() -> Self {
        Model {
            directory: MentorDirectory::new(seed_data::mentors()),
            programs: seed_data::mentorship_programs(),
            selected: None,
        }
    }
}

pub enum Msg {
    SearchChanged(String),
    IndustryToggled(MentorCategory, String),
    FiltersCleared,
    Selected(String),
    ProfileClosed,
    ConnectRequested(String),
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::SearchChanged(term) => model.directory.set_search_term(term),
        Msg::IndustryToggled(category, value) => model.directory.toggle_filter(category, &value),
        Msg::FiltersCleared => model.directory.clear_filters(),
        Msg::Selected(id) => model.selected = Some(id),
        Msg::ProfileClosed => model.selected = None,
        Msg::ConnectRequested(id) => {
            if let Some(mentor) = model.directory.get(&id) {
                orders.notify(Toast::success(format!(
                    "Connection request sent to {}",
                    mentor.name
                )));
            }
        }
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    let directory = &model.directory;
    let industries: Vec<String> = INDUSTRIES.iter().map(|i| i.to_string()).collect();

    div![
        div![
            C!["row mb-4"],
            model.programs.iter().map(program_card),
        ],
        div![
            C!["row"],
            aside![
                C!["col-md-3"],
                h5!["Filters"],
                clear_button(directory.is_filtered(), || Msg::FiltersCleared),
                filter_group(
                    "Industry",
                    MentorCategory::Industries,
                    &industries,
                    directory.filters(),
                    Msg::IndustryToggled
                ),
            ],
            section![
                C!["col-md-9"],
                search_box(
                    "Search by name, role, company or skill",
                    directory.filters().search_term(),
                    Msg::SearchChanged
                ),
                if directory.visible_len() == 0 {
                    empty_state("No mentors match your search.")
                } else {
                    div![directory.visible().map(mentor_card)]
                },
                model
                    .selected
                    .as_ref()
                    .and_then(|id| directory.get(id))
                    .map(profile_view),
            ],
        ],
    ]
}

fn program_card(program: &MentorshipProgram) -> Node<Msg> {
    div![
        C!["col-md-4"],
        div![
            C!["card h-100"],
            img![C!["card-img-top"], attrs! {At::Src => &program.image_url, At::Alt => &program.title}],
            div![
                C!["card-body"],
                h5![&program.title],
                p![&program.description],
                small![
                    C!["text-muted"],
                    format!("{} · {} · {}", program.duration, program.format, program.requirements)
                ],
            ],
        ],
    ]
}

fn connect_button(mentor: &Mentor, label: &str) -> Node<Msg> {
    let id = mentor.id.clone();
    button![
        C!["btn btn-primary btn-sm mr-2"],
        ev(Ev::Click, move |_| Msg::ConnectRequested(id)),
        label
    ]
}

fn mentor_card(mentor: &Mentor) -> Node<Msg> {
    let id = mentor.id.clone();
    div![
        C!["card mb-3"],
        div![
            C!["card-body d-flex"],
            img![
                C!["rounded mr-3"],
                attrs! {At::Src => &mentor.image_url, At::Alt => &mentor.name, At::Width => "80", At::Height => "80"}
            ],
            div![
                h5![&mentor.name],
                p![
                    C!["text-muted mb-1"],
                    format!("{} at {} · {} years", mentor.role, mentor.company, mentor.experience)
                ],
                tags(&mentor.skills),
                div![
                    C!["mt-2"],
                    connect_button(mentor, "Connect"),
                    button![
                        C!["btn btn-outline-secondary btn-sm"],
                        ev(Ev::Click, move |_| Msg::Selected(id)),
                        "View Profile"
                    ],
                ],
            ],
        ],
    ]
}

fn profile_view(mentor: &Mentor) -> Node<Msg> {
    div![
        C!["card border-primary mb-3"],
        div![
            C!["card-header d-flex justify-content-between"],
            strong![&mentor.name],
            button![C!["close"], ev(Ev::Click, |_| Msg::ProfileClosed), "×"],
        ],
        div![
            C!["card-body"],
            p![&mentor.bio],
            h6!["Mentorship Style"],
            p!["Weekly one-on-one sessions focused on practical career development and personalized guidance."],
            connect_button(mentor, "Connect with Mentor"),
        ],
    ]
}
