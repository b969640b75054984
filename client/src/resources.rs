use seed::{prelude::*, *};
use shared::listing::{Level, Resource, ResourceType};
use shared::resources::{ResourceCategory, ResourceLibrary};
use shared::seed_data;

use crate::widgets::{clear_button, distinct, empty_state, filter_group, search_box, tags};
use crate::Toast;

pub struct Model {
    library: ResourceLibrary,
}

impl Default for Model {
    fn default() -> Self {
        Model {
            library: ResourceLibrary::new(seed_data::resources()),
        }
    }
}

pub enum Msg {
    SearchChanged(String),
    FilterToggled(ResourceCategory, String),
    FiltersCleared,
    BookmarkToggled(String),
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::SearchChanged(term) => model.library.set_search_term(term),
        Msg::FilterToggled(category, value) => model.library.toggle_filter(category, &value),
        Msg::FiltersCleared => model.library.clear_filters(),
        Msg::BookmarkToggled(id) => {
            if let Some(true) = model.library.toggle_bookmark(&id) {
                orders.notify(Toast::success("Resource bookmarked"));
            }
        }
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    let library = &model.library;
    let filters = library.filters();

    let types: Vec<String> = ResourceType::ALL.iter().map(|t| t.label().to_string()).collect();
    let levels: Vec<String> = Level::ALL.iter().map(|l| l.label().to_string()).collect();
    let categories: Vec<String> = library.categories().into_iter().map(str::to_string).collect();
    let all_tags = distinct(
        library
            .items()
            .iter()
            .flat_map(|resource| resource.tags.iter().map(String::as_str)),
    );

    div![
        C!["row"],
        aside![
            C!["col-md-3"],
            h5!["Filters"],
            clear_button(library.is_filtered(), || Msg::FiltersCleared),
            filter_group("Type", ResourceCategory::Types, &types, filters, Msg::FilterToggled),
            filter_group("Category", ResourceCategory::Categories, &categories, filters, Msg::FilterToggled),
            filter_group("Level", ResourceCategory::Levels, &levels, filters, Msg::FilterToggled),
            filter_group("Tags", ResourceCategory::Tags, &all_tags, filters, Msg::FilterToggled),
            p![
                C!["small text-muted"],
                format!("{} bookmarked", library.bookmarked().count())
            ],
        ],
        section![
            C!["col-md-9"],
            search_box("Search resources", filters.search_term(), Msg::SearchChanged),
            if library.visible_len() == 0 {
                empty_state("No resources match your filters.")
            } else {
                div![C!["row"], library.visible().map(resource_card)]
            },
        ],
    ]
}

fn resource_card(resource: &Resource) -> Node<Msg> {
    let id = resource.id.clone();
    let meta = [
        resource.author.clone(),
        resource.read_time.clone(),
        resource.duration.clone(),
        resource.level.map(|level| level.label().to_string()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    div![
        C!["col-md-6 mb-3"],
        div![
            C!["card h-100"],
            img![C!["card-img-top"], attrs! {At::Src => &resource.image_url, At::Alt => &resource.title}],
            div![
                C!["card-body"],
                span![C!["badge badge-secondary mb-2"], resource.resource_type.label()],
                h5![C!["card-title"], &resource.title],
                p![C!["text-muted small"], meta],
                p![&resource.description],
                tags(&resource.tags),
            ],
            div![
                C!["card-footer d-flex justify-content-between"],
                resource.url.as_ref().map(|url| a![
                    attrs! {At::Href => url, At::Target => "_blank"},
                    "Open"
                ]),
                button![
                    C![
                        "btn btn-sm",
                        if resource.is_bookmarked { "btn-warning" } else { "btn-outline-secondary" }
                    ],
                    ev(Ev::Click, move |_| Msg::BookmarkToggled(id)),
                    if resource.is_bookmarked { "Bookmarked" } else { "Bookmark" },
                ],
            ],
        ],
    ]
}
