use seed::{prelude::*, *};
use shared::auth::Session;
use shared::validation::{validate_login, SignupForm, ValidationError};

use crate::{Page, SessionChanged, Toast};

#[derive(Default)]
pub struct Model {
    pub email: String,
    pub password: String,
    pub signup: SignupForm,
}

#[derive(Clone)]
pub enum Msg {
    EmailChanged(String),
    PasswordChanged(String),
    LoginSubmitted,
    LoginResolved { email: String, password: String },

    NameChanged(String),
    SignupEmailChanged(String),
    SignupPasswordChanged(String),
    ConfirmPasswordChanged(String),
    TermsToggled,
    SignupSubmitted,
    SignupResolved(SignupForm),
}

/// The credentials as they were when the form passed validation.
fn login_request(model: &Model) -> Result<Msg, ValidationError> {
    validate_login(&model.email, &model.password)?;
    Ok(Msg::LoginResolved {
        email: model.email.clone(),
        password: model.password.clone(),
    })
}

fn signup_request(model: &Model) -> Result<Msg, ValidationError> {
    model.signup.validate()?;
    Ok(Msg::SignupResolved(model.signup.clone()))
}

pub fn update(
    msg: Msg,
    model: &mut Model,
    session: &mut Session,
    delay_ms: u32,
    orders: &mut impl Orders<Msg>,
) {
    match msg {
        Msg::EmailChanged(email) => model.email = email,
        Msg::PasswordChanged(password) => model.password = password,

        Msg::LoginSubmitted => match login_request(model) {
            Ok(resolved) => {
                session.begin_request();
                orders.perform_cmd(cmds::timeout(delay_ms, move || resolved));
            }
            Err(err) => {
                orders.notify(Toast::error(err.to_string()));
            }
        },

        Msg::LoginResolved { email, password } => {
            if session.login(&email, &password) {
                model.password.clear();
                orders
                    .notify(SessionChanged)
                    .notify(Toast::success("Login successful!"))
                    .request_url(Page::Dashboard.url());
            } else {
                orders.notify(Toast::error("Invalid email or password"));
            }
        }

        Msg::NameChanged(name) => model.signup.name = name,
        Msg::SignupEmailChanged(email) => model.signup.email = email,
        Msg::SignupPasswordChanged(password) => model.signup.password = password,
        Msg::ConfirmPasswordChanged(password) => model.signup.confirm_password = password,
        Msg::TermsToggled => model.signup.agree_terms = !model.signup.agree_terms,

        Msg::SignupSubmitted => match signup_request(model) {
            Ok(resolved) => {
                session.begin_request();
                orders.perform_cmd(cmds::timeout(delay_ms, move || resolved));
            }
            Err(err) => {
                orders.notify(Toast::error(err.to_string()));
            }
        },

        Msg::SignupResolved(form) => {
            if session.signup(&form.name, &form.email, &form.password) {
                model.signup = SignupForm::default();
                orders
                    .notify(SessionChanged)
                    .notify(Toast::success("Account created successfully!"))
                    .request_url(Page::Dashboard.url());
            } else {
                orders.notify(Toast::error(
                    "Email already exists. Please use a different email or login.",
                ));
            }
        }
    }
}

fn submit_button(label: &str, busy_label: &str, busy: bool) -> Node<Msg> {
    button![
        C!["btn btn-primary btn-block"],
        attrs! {At::Type => "submit", At::Disabled => busy.as_at_value()},
        if busy { busy_label } else { label },
    ]
}

fn field(
    label: &str,
    input_type: &str,
    value: &str,
    on_input: impl FnOnce(String) -> Msg + Clone + 'static,
) -> Node<Msg> {
    div![
        C!["form-group"],
        label![label],
        input![
            C!["form-control"],
            attrs! {At::Type => input_type, At::Value => value},
            input_ev(Ev::Input, on_input),
        ],
    ]
}

pub fn login_view(model: &Model, session: &Session) -> Node<Msg> {
    div![
        C!["card mx-auto"],
        style! {St::MaxWidth => px(420)},
        div![
            C!["card-body"],
            h2![C!["card-title"], "Welcome back"],
            form![
                ev(Ev::Submit, |event| {
                    event.prevent_default();
                    Msg::LoginSubmitted
                }),
                field("Email address", "email", &model.email, Msg::EmailChanged),
                field("Password", "password", &model.password, Msg::PasswordChanged),
                submit_button("Sign in", "Signing in...", session.is_loading()),
            ],
            p![
                C!["small text-muted mt-3"],
                "Demo account: jane@example.com / password123"
            ],
            p![
                "Don't have an account? ",
                a![attrs! {At::Href => Page::Signup.href()}, "Sign up"]
            ],
        ],
    ]
}

pub fn signup_view(model: &Model, session: &Session) -> Node<Msg> {
    let form = &model.signup;
    div![
        C!["card mx-auto"],
        style! {St::MaxWidth => px(480)},
        div![
            C!["card-body"],
            h2![C!["card-title"], "Create your account"],
            form![
                ev(Ev::Submit, |event| {
                    event.prevent_default();
                    Msg::SignupSubmitted
                }),
                field("Full name", "text", &form.name, Msg::NameChanged),
                field("Email address", "email", &form.email, Msg::SignupEmailChanged),
                field("Password", "password", &form.password, Msg::SignupPasswordChanged),
                field(
                    "Confirm password",
                    "password",
                    &form.confirm_password,
                    Msg::ConfirmPasswordChanged
                ),
                div![
                    C!["form-check mb-3"],
                    input![
                        C!["form-check-input"],
                        id!("agree-terms"),
                        attrs! {At::Type => "checkbox", At::Checked => form.agree_terms.as_at_value()},
                        ev(Ev::Change, |_| Msg::TermsToggled),
                    ],
                    label![
                        C!["form-check-label"],
                        attrs! {At::For => "agree-terms"},
                        "I agree to the terms and conditions"
                    ],
                ],
                submit_button("Create account", "Creating account...", session.is_loading()),
            ],
            p![
                "Already have an account? ",
                a![attrs! {At::Href => Page::Login.href()}, "Sign in"]
            ],
        ],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupForm {
        SignupForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            password: "longenough".into(),
            confirm_password: "longenough".into(),
            agree_terms: true,
        }
    }

    #[test]
    fn login_resolves_with_submitted_credentials() {
        let mut model = Model {
            email: "jane@example.com".into(),
            password: "password123".into(),
            ..Model::default()
        };
        let resolved = login_request(&model).unwrap();

        model.email = "admin@example.com".into();
        model.password.clear();

        let Msg::LoginResolved { email, password } = resolved else {
            panic!("expected a login resolution");
        };
        assert_eq!(email, "jane@example.com");
        assert_eq!(password, "password123");

        let mut session = Session::default();
        assert!(session.login(&email, &password));
        assert_eq!(session.user().unwrap().name, "Jane Doe");
    }

    #[test]
    fn invalid_login_is_not_scheduled() {
        let model = Model {
            email: "jane@example.com".into(),
            ..Model::default()
        };
        assert!(matches!(login_request(&model), Err(ValidationError::MissingFields)));
    }

    #[test]
    fn signup_edits_after_submit_do_not_leak_into_resolution() {
        let mut model = Model {
            signup: valid_signup(),
            ..Model::default()
        };
        let resolved = signup_request(&model).unwrap();

        model.signup.password = "abc".into();
        model.signup.agree_terms = false;

        let Msg::SignupResolved(form) = resolved else {
            panic!("expected a signup resolution");
        };
        assert_eq!(form, valid_signup());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn invalid_signup_is_not_scheduled() {
        let model = Model {
            signup: SignupForm {
                agree_terms: false,
                ..valid_signup()
            },
            ..Model::default()
        };
        assert!(matches!(
            signup_request(&model),
            Err(ValidationError::TermsNotAccepted)
        ));
    }
}
