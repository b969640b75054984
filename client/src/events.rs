use chrono::NaiveDate;
use seed::{prelude::*, *};
use shared::events::{EventBoard, EventCategory};
use shared::listing::{Event, EventType};
use shared::seed_data;

use crate::widgets::{clear_button, empty_state, filter_group, search_box};

pub struct Model {
    pub board: EventBoard,
    selected: Option<String>,
}

impl Model {
    pub fn new(today: NaiveDate) -> Self {
        let mut board = EventBoard::new(seed_data::events());
        board.set_today(today);
        Model {
            board,
            selected: None,
        }
    }
}

pub enum Msg {
    SearchChanged(String),
    FilterToggled(EventCategory, String),
    FiltersCleared,
    UpcomingOnlyToggled,
    Selected(String),
    DetailsClosed,
}

pub fn update(msg: Msg, model: &mut Model) {
    match msg {
        Msg::SearchChanged(term) => model.board.set_search_term(term),
        Msg::FilterToggled(category, value) => model.board.toggle_filter(category, &value),
        Msg::FiltersCleared => model.board.clear_filters(),
        Msg::UpcomingOnlyToggled => {
            let upcoming_only = !model.board.context().upcoming_only;
            model.board.set_upcoming_only(upcoming_only);
        }
        Msg::Selected(id) => model.selected = Some(id),
        Msg::DetailsClosed => model.selected = None,
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    let board = &model.board;
    let types: Vec<String> = EventType::ALL.iter().map(|t| t.label().to_string()).collect();

    div![
        featured_view(board),
        div![
            C!["row"],
            aside![
                C!["col-md-3"],
                h5!["Filters"],
                clear_button(board.is_filtered(), || Msg::FiltersCleared),
                filter_group("Event Type", EventCategory::Types, &types, board.filters(), Msg::FilterToggled),
                div![
                    C!["form-check"],
                    label![
                        C!["form-check-label"],
                        input![
                            C!["form-check-input"],
                            attrs! {
                                At::Type => "checkbox",
                                At::Checked => board.context().upcoming_only.as_at_value()
                            },
                            ev(Ev::Change, |_| Msg::UpcomingOnlyToggled),
                        ],
                        "Upcoming only",
                    ],
                ],
            ],
            section![
                C!["col-md-9"],
                search_box("Search events", board.filters().search_term(), Msg::SearchChanged),
                if board.visible_len() == 0 {
                    empty_state("No events match your filters.")
                } else {
                    div![board.visible().map(event_card)]
                },
                model
                    .selected
                    .as_ref()
                    .and_then(|id| board.get(id))
                    .map(details_view),
            ],
        ],
    ]
}

fn featured_view(board: &EventBoard) -> Node<Msg> {
    div![
        C!["mb-4"],
        h4!["Featured events"],
        div![
            C!["row"],
            board.featured().map(|event| div![
                C!["col-md-4"],
                div![
                    C!["card h-100"],
                    img![C!["card-img-top"], attrs! {At::Src => &event.image_url, At::Alt => &event.title}],
                    div![
                        C!["card-body"],
                        h6![&event.title],
                        small![C!["text-muted"], format!("{} · {}", event.date, event.time)],
                    ],
                ],
            ]),
        ],
    ]
}

fn event_card(event: &Event) -> Node<Msg> {
    let id = event.id.clone();
    div![
        C!["card mb-3"],
        div![
            C!["card-body"],
            span![C!["badge badge-info mb-2"], event.event_type.label()],
            h5![C!["card-title"], &event.title],
            p![
                C!["text-muted mb-1"],
                format!("{} · {} · {}", event.date.format("%B %-d, %Y"), event.time, event.location)
            ],
            p![&event.description],
            button![
                C!["btn btn-outline-primary btn-sm"],
                ev(Ev::Click, move |_| Msg::Selected(id)),
                "Details"
            ],
        ],
    ]
}

fn details_view(event: &Event) -> Node<Msg> {
    div![
        C!["card border-primary mb-3"],
        div![
            C!["card-header d-flex justify-content-between"],
            strong![&event.title],
            button![C!["close"], ev(Ev::Click, |_| Msg::DetailsClosed), "×"],
        ],
        div![
            C!["card-body"],
            p![&event.description],
            IF!(!event.speakers.is_empty() => div![
                h6!["Speakers"],
                ul![event.speakers.iter().map(|speaker| li![format!(
                    "{}, {} at {}",
                    speaker.name, speaker.role, speaker.company
                )])],
            ]),
            event.registration_url.as_ref().map(|url| a![
                C!["btn btn-primary"],
                attrs! {At::Href => url, At::Target => "_blank"},
                "Register"
            ]),
        ],
    ]
}
