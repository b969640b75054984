//! Landing page for signed-in users. Read-only, so the view is generic over
//! the caller's message type.

use chrono::NaiveDate;
use seed::{prelude::*, *};
use shared::applications::ApplicationTracker;
use shared::auth::Session;
use shared::events::EventBoard;
use shared::jobs::JobBoard;
use shared::listing::{ApplicationStatus, Job};

use crate::Page;

const UPCOMING_EVENTS: usize = 3;

pub fn view<Ms: 'static>(
    session: &Session,
    jobs: &JobBoard,
    events: &EventBoard,
    applications: &ApplicationTracker,
    today: NaiveDate,
) -> Node<Ms> {
    let counts = applications.status_counts();
    let count = |status: ApplicationStatus| counts.get(&status).copied().unwrap_or(0);
    let name = session.user().map(|user| user.name.as_str()).unwrap_or("there");

    div![
        section![
            C!["mb-4"],
            h1![format!("Welcome back, {name}! 👋")],
            p![C!["text-muted"], "Here is what is happening with your job search."],
        ],
        div![
            C!["row mb-4"],
            stat_card("Applications", applications.listings().items().len(), Page::Applications),
            stat_card("Interviews", count(ApplicationStatus::Interview), Page::Applications),
            stat_card("Saved Jobs", jobs.saved_jobs().len(), Page::Jobs),
            stat_card("Offers", count(ApplicationStatus::Offer), Page::Applications),
        ],
        div![
            C!["row"],
            div![
                C!["col-md-8"],
                card(
                    "Application Status",
                    ul![
                        C!["list-unstyled mb-0"],
                        ApplicationStatus::ALL.iter().map(|status| li![
                            C!["d-flex justify-content-between"],
                            span![status.label()],
                            strong![count(*status).to_string()],
                        ]),
                    ]
                ),
                card("New Jobs", job_list(jobs.new_jobs(today), "No new jobs in the last few days.")),
                card(
                    "Recommended for You",
                    job_list(jobs.recommended_jobs(), "No recommendations yet.")
                ),
            ],
            div![
                C!["col-md-4"],
                card(
                    "Upcoming Events",
                    match events.upcoming(today, UPCOMING_EVENTS) {
                        upcoming if upcoming.is_empty() => p![C!["text-muted"], "No upcoming events."],
                        upcoming => ul![
                            C!["list-unstyled mb-0"],
                            upcoming.into_iter().map(|event| li![
                                C!["mb-2"],
                                strong![&event.title],
                                div![
                                    C!["small text-muted"],
                                    format!("{} · {}", event.date.format("%B %-d"), event.time)
                                ],
                            ]),
                        ],
                    }
                ),
                card(
                    "Saved Jobs",
                    job_list(jobs.saved_jobs().iter().collect(), "You haven't saved any jobs yet.")
                ),
            ],
        ],
    ]
}

fn stat_card<Ms: 'static>(title: &str, value: usize, target: Page) -> Node<Ms> {
    div![
        C!["col-md-3"],
        a![
            C!["card text-decoration-none text-reset"],
            attrs! {At::Href => target.href()},
            div![
                C!["card-body"],
                h6![C!["text-muted"], title],
                h3![C!["mb-0"], value.to_string()],
            ],
        ],
    ]
}

fn card<Ms: 'static>(title: &str, body: Node<Ms>) -> Node<Ms> {
    div![
        C!["card mb-4"],
        div![C!["card-header"], strong![title]],
        div![C!["card-body"], body],
    ]
}

fn job_list<Ms: 'static>(jobs: Vec<&Job>, empty: &str) -> Node<Ms> {
    if jobs.is_empty() {
        return p![C!["text-muted mb-0"], empty];
    }
    ul![
        C!["list-unstyled mb-0"],
        jobs.into_iter().map(|job| li![
            C!["mb-2"],
            a![attrs! {At::Href => Page::Jobs.href()}, &job.title],
            div![C!["small text-muted"], format!("{} · {}", job.company, job.location)],
        ]),
    ]
}
