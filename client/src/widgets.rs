//! View pieces shared by the listing pages.

use std::collections::BTreeSet;

use seed::{prelude::*, *};
use shared::filter::FilterState;

/// Sorted, de-duplicated values for a filter sidebar.
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn search_box<Ms: 'static>(
    placeholder: &str,
    value: &str,
    on_input: impl FnOnce(String) -> Ms + Clone + 'static,
) -> Node<Ms> {
    input![
        C!["form-control mb-3"],
        attrs! {At::Type => "search", At::Placeholder => placeholder, At::Value => value},
        input_ev(Ev::Input, on_input),
    ]
}

/// A titled group of checkboxes bound to one filter category.
pub fn filter_group<Ms, C>(
    title: &str,
    category: C,
    values: &[String],
    filters: &FilterState<C>,
    on_toggle: fn(C, String) -> Ms,
) -> Node<Ms>
where
    Ms: 'static,
    C: Copy + Ord + 'static,
{
    div![
        C!["mb-3"],
        h6![title],
        values.iter().map(|value| {
            let checked = filters.is_selected(category, value);
            let text = value.clone();
            let value = value.clone();
            div![
                C!["form-check"],
                label![
                    C!["form-check-label"],
                    input![
                        C!["form-check-input"],
                        attrs! {At::Type => "checkbox", At::Checked => checked.as_at_value()},
                        ev(Ev::Change, move |_| on_toggle(category, value.clone())),
                    ],
                    text,
                ],
            ]
        }),
    ]
}

pub fn clear_button<Ms: 'static>(active: bool, msg: impl FnOnce() -> Ms + Clone + 'static) -> Node<Ms> {
    IF!(active => button![
        C!["btn btn-link btn-sm p-0 mb-3"],
        ev(Ev::Click, move |_| msg()),
        "Clear all"
    ])
    .unwrap_or(empty![])
}

pub fn empty_state<Ms: 'static>(text: &str) -> Node<Ms> {
    div![C!["text-center text-muted py-5"], text]
}

pub fn tags<Ms: 'static>(values: &[String]) -> Node<Ms> {
    div![values
        .iter()
        .map(|value| span![C!["badge badge-light mr-1"], value])]
}
