use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use seed::{prelude::*, *};
use shared::auth::Session;
use shared::config::AppConfig;
use tracing::{info, warn};

mod applications;
mod auth;
mod chat;
mod dashboard;
mod events;
mod jobs;
mod mentorship;
mod profile;
mod resources;
mod storage;
mod widgets;

const TOAST_MS: u32 = 3000;

// ------ ------
//     Init
// ------ ------

fn init(url: Url, orders: &mut impl Orders<Msg>) -> Model {
    let config = AppConfig::from_build_env().unwrap_or_else(|err| {
        warn!(%err, "invalid build configuration, using defaults");
        AppConfig::default()
    });
    let today = now().date_naive();
    let session = storage::load_session();

    let mut jobs = jobs::Model::default();
    storage::load_saved_jobs(&mut jobs.board);

    orders
        .subscribe(Msg::UrlChanged)
        .subscribe(|_: SessionChanged| Msg::SessionChanged)
        .subscribe(|_: SavedJobsChanged| Msg::SavedJobsChanged)
        .subscribe(Msg::ShowToast);

    info!(authenticated = session.is_authenticated(), %today, "app started");

    Model {
        page: Page::from_url(url),
        profile: profile::Model::new(session.user()),
        events: events::Model::new(today),
        session,
        config,
        today,
        jobs,
        resources: resources::Model::default(),
        mentorship: mentorship::Model::default(),
        applications: applications::Model::default(),
        auth: auth::Model::default(),
        chat: chat::Model::default(),
        toast: None,
        toast_seq: 0,
    }
}

pub(crate) fn now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(js_sys::Date::now() as i64)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

// ------ ------
//     Urls
// ------ ------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Home,
    About,
    Dashboard,
    Jobs,
    Events,
    Mentorship,
    Resources,
    Applications,
    Profile,
    Login,
    Signup,
    NotFound,
}

impl Page {
    const NAV: [Page; 6] = [
        Page::Dashboard,
        Page::Jobs,
        Page::Events,
        Page::Mentorship,
        Page::Resources,
        Page::Applications,
    ];

    fn from_url(mut url: Url) -> Self {
        match url.next_hash_path_part() {
            None | Some("") => Page::Home,
            Some("about") => Page::About,
            Some("dashboard") => Page::Dashboard,
            Some("jobs") => Page::Jobs,
            Some("events") => Page::Events,
            Some("mentorship") => Page::Mentorship,
            Some("resources") => Page::Resources,
            Some("applications") => Page::Applications,
            Some("profile") => Page::Profile,
            Some("login") => Page::Login,
            Some("signup") => Page::Signup,
            Some(_) => Page::NotFound,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::About => "about",
            Page::Dashboard => "dashboard",
            Page::Jobs => "jobs",
            Page::Events => "events",
            Page::Mentorship => "mentorship",
            Page::Resources => "resources",
            Page::Applications => "applications",
            Page::Profile => "profile",
            Page::Login => "login",
            Page::Signup => "signup",
            Page::NotFound => "404",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Dashboard => "Dashboard",
            Page::Jobs => "Jobs",
            Page::Events => "Events",
            Page::Mentorship => "Mentorship",
            Page::Resources => "Resources",
            Page::Applications => "Applications",
            Page::Profile => "Profile",
            Page::Login => "Login",
            Page::Signup => "Sign Up",
            Page::NotFound => "Not Found",
        }
    }

    pub(crate) fn href(self) -> String {
        format!("#/{}", self.slug())
    }

    pub(crate) fn url(self) -> Url {
        Url::new().set_hash_path([self.slug()])
    }

    fn is_protected(self) -> bool {
        !matches!(
            self,
            Page::Home | Page::About | Page::Login | Page::Signup | Page::NotFound
        )
    }
}

// ------ ------
//  Notifications
// ------ ------

/// Sent by any page that changed the session.
#[derive(Clone, Copy)]
pub(crate) struct SessionChanged;

/// Sent by any page that changed the saved-jobs list.
#[derive(Clone, Copy)]
pub(crate) struct SavedJobsChanged;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    kind: ToastKind,
    text: String,
}

impl Toast {
    pub(crate) fn success(text: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

// ------ ------
//     Model
// ------ ------

struct Model {
    config: AppConfig,
    today: NaiveDate,
    page: Page,
    session: Session,
    jobs: jobs::Model,
    events: events::Model,
    resources: resources::Model,
    mentorship: mentorship::Model,
    applications: applications::Model,
    profile: profile::Model,
    auth: auth::Model,
    chat: chat::Model,
    toast: Option<(u32, Toast)>,
    toast_seq: u32,
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    UrlChanged(subs::UrlChanged),
    SessionChanged,
    SavedJobsChanged,
    ShowToast(Toast),
    HideToast(u32),
    Logout,
    Auth(auth::Msg),
    Jobs(jobs::Msg),
    Events(events::Msg),
    Resources(resources::Msg),
    Mentorship(mentorship::Msg),
    Applications(applications::Msg),
    Profile(profile::Msg),
    Chat(chat::Msg),
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::UrlChanged(subs::UrlChanged(url)) => {
            model.page = Page::from_url(url);
            if model.session.is_authenticated()
                && matches!(model.page, Page::Login | Page::Signup)
            {
                orders.request_url(Page::Dashboard.url());
            }
        }

        Msg::SessionChanged => {
            storage::save_session(&model.session);
            model.profile = profile::Model::new(model.session.user());
            if !model.session.is_authenticated() {
                model.chat = chat::Model::default();
            }
        }

        Msg::SavedJobsChanged => {
            storage::save_saved_jobs(&model.jobs.board);
        }

        Msg::ShowToast(toast) => {
            model.toast_seq = model.toast_seq.wrapping_add(1);
            let id = model.toast_seq;
            model.toast = Some((id, toast));
            orders.perform_cmd(cmds::timeout(TOAST_MS, move || Msg::HideToast(id)));
        }

        Msg::HideToast(id) => {
            if matches!(model.toast, Some((current, _)) if current == id) {
                model.toast = None;
            }
        }

        Msg::Logout => {
            model.session.logout();
            orders
                .notify(SessionChanged)
                .request_url(Page::Home.url());
        }

        Msg::Auth(msg) => {
            auth::update(
                msg,
                &mut model.auth,
                &mut model.session,
                model.config.auth_delay_ms,
                &mut orders.proxy(Msg::Auth),
            );
        }

        Msg::Jobs(msg) => {
            jobs::update(
                msg,
                &mut model.jobs,
                &mut model.applications.tracker,
                &mut orders.proxy(Msg::Jobs),
            );
        }

        Msg::Events(msg) => {
            events::update(msg, &mut model.events);
        }

        Msg::Resources(msg) => {
            resources::update(msg, &mut model.resources, &mut orders.proxy(Msg::Resources));
        }

        Msg::Mentorship(msg) => {
            mentorship::update(msg, &mut model.mentorship, &mut orders.proxy(Msg::Mentorship));
        }

        Msg::Applications(msg) => {
            applications::update(
                msg,
                &mut model.applications,
                &mut orders.proxy(Msg::Applications),
            );
        }

        Msg::Profile(msg) => {
            profile::update(msg, &mut model.profile, &mut orders.proxy(Msg::Profile));
        }

        Msg::Chat(msg) => {
            chat::update(msg, &mut model.chat, &model.config, &mut orders.proxy(Msg::Chat));
        }
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> impl IntoNodes<Msg> {
    let authenticated = model.session.is_authenticated();
    let page = if model.page.is_protected() && !authenticated {
        Page::Login
    } else {
        model.page
    };

    div![
        C!["careerhub"],
        nav_bar(model, page),
        main![
            C!["container py-4"],
            match page {
                Page::Home => home_view(authenticated),
                Page::About => about_view(),
                Page::Dashboard => dashboard::view(
                    &model.session,
                    &model.jobs.board,
                    &model.events.board,
                    &model.applications.tracker,
                    model.today,
                ),
                Page::Jobs => jobs::view(&model.jobs).map_msg(Msg::Jobs),
                Page::Events => events::view(&model.events).map_msg(Msg::Events),
                Page::Resources => resources::view(&model.resources).map_msg(Msg::Resources),
                Page::Mentorship => mentorship::view(&model.mentorship).map_msg(Msg::Mentorship),
                Page::Applications => {
                    applications::view(&model.applications).map_msg(Msg::Applications)
                }
                Page::Profile => profile::view(&model.profile).map_msg(Msg::Profile),
                Page::Login => auth::login_view(&model.auth, &model.session).map_msg(Msg::Auth),
                Page::Signup => auth::signup_view(&model.auth, &model.session).map_msg(Msg::Auth),
                Page::NotFound => not_found_view(),
            }
        ],
        IF!(authenticated => chat::view(&model.chat).map_msg(Msg::Chat)),
        model.toast.as_ref().map(|(_, toast)| toast_view(toast)),
        footer_view(),
    ]
}

fn nav_bar(model: &Model, current: Page) -> Node<Msg> {
    nav![
        C!["navbar navbar-expand navbar-light bg-white border-bottom"],
        a![C!["navbar-brand"], attrs! {At::Href => Page::Home.href()}, "CareerHub"],
        IF!(model.session.is_authenticated() => ul![
            C!["navbar-nav mr-auto"],
            Page::NAV.iter().map(|page| li![
                C!["nav-item", IF!(*page == current => "active")],
                a![C!["nav-link"], attrs! {At::Href => page.href()}, page.label()],
            ]),
        ]),
        a![C!["nav-link"], attrs! {At::Href => Page::About.href()}, "About"],
        match model.session.user() {
            Some(user) => div![
                C!["form-inline"],
                a![
                    C!["nav-link"],
                    attrs! {At::Href => Page::Profile.href()},
                    user.avatar.as_ref().map(|avatar| img![
                        C!["rounded-circle mr-2"],
                        attrs! {At::Src => avatar, At::Alt => &user.name, At::Width => "32", At::Height => "32"},
                    ]),
                    &user.name,
                ],
                button![
                    C!["btn btn-outline-secondary"],
                    ev(Ev::Click, |_| Msg::Logout),
                    "Logout"
                ],
            ],
            None => div![
                C!["form-inline"],
                a![C!["btn btn-link"], attrs! {At::Href => Page::Login.href()}, "Login"],
                a![C!["btn btn-primary"], attrs! {At::Href => Page::Signup.href()}, "Sign Up"],
            ],
        },
    ]
}

fn home_view(authenticated: bool) -> Node<Msg> {
    let (target, cta) = if authenticated {
        (Page::Dashboard, "Go to your dashboard")
    } else {
        (Page::Signup, "Get started")
    };
    section![
        C!["jumbotron"],
        h1!["Empowering women to restart and grow their careers"],
        p![
            C!["lead"],
            "Find jobs, join events, connect with mentors and keep track of every application in one place."
        ],
        a![C!["btn btn-primary btn-lg"], attrs! {At::Href => target.href()}, cta],
    ]
}

fn about_view() -> Node<Msg> {
    section![
        h1!["About CareerHub"],
        p![
            "CareerHub brings job listings, learning resources, mentorship and community events \
             together with a simple assistant that points you at the right part of the site."
        ],
    ]
}

fn not_found_view() -> Node<Msg> {
    section![
        C!["text-center"],
        h1!["404"],
        p!["The page you are looking for does not exist."],
        a![C!["btn btn-secondary"], attrs! {At::Href => Page::Home.href()}, "Back home"],
    ]
}

fn toast_view(toast: &Toast) -> Node<Msg> {
    let class = match toast.kind {
        ToastKind::Success => "alert-success",
        ToastKind::Error => "alert-danger",
    };
    div![
        C!["alert fixed-top mx-auto mt-2", class],
        style! {St::MaxWidth => px(420), St::ZIndex => 1050},
        &toast.text,
    ]
}

fn footer_view() -> Node<Msg> {
    footer![
        C!["border-top text-muted text-center py-3"],
        "© CareerHub"
    ]
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn start() {
    tracing_wasm::set_as_global_default();
    App::start("app", init, update, view);
}
