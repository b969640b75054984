use seed::{prelude::*, *};
use shared::chatbot::{self, ChatSession, Message, MessageType, ReplySource};
use shared::config::AppConfig;
use shared::{ChatRequest, ChatResponse};
use tracing::debug;

use crate::now;

#[derive(Default)]
pub struct Model {
    session: ChatSession,
    input: String,
}

pub enum Msg {
    Toggled,
    Welcomed,
    InputChanged(String),
    Sent,
    Replied(String),
    Cleared,
}

fn timestamp() -> i64 {
    now().timestamp_millis()
}

async fn ask(endpoint: String, message: String) -> Result<ChatResponse, String> {
    let request = Request::new(endpoint)
        .method(Method::Post)
        .json(&ChatRequest { message })
        .map_err(|err| format!("{err:?}"))?;
    let response = request
        .fetch()
        .await
        .and_then(|response| response.check_status())
        .map_err(|err| format!("{err:?}"))?;
    response.json().await.map_err(|err| format!("{err:?}"))
}

pub fn update(msg: Msg, model: &mut Model, config: &AppConfig, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Toggled => {
            if model.session.toggle() {
                orders.perform_cmd(cmds::timeout(config.welcome_delay_ms, || Msg::Welcomed));
            }
        }
        Msg::Welcomed => {
            if model.session.messages().is_empty() {
                model.session.push_bot(chatbot::WELCOME, timestamp());
            }
        }
        Msg::InputChanged(input) => model.input = input,
        Msg::Sent => {
            let text = model.input.trim().to_string();
            if text.is_empty() {
                return;
            }
            model.input.clear();
            model.session.push_user(text.clone(), timestamp());

            match &config.reply_source {
                ReplySource::Canned => {
                    let reply = chatbot::generate_reply(&text);
                    orders.perform_cmd(cmds::timeout(config.typing_delay_ms, move || {
                        Msg::Replied(reply.to_string())
                    }));
                }
                ReplySource::Remote { endpoint } => {
                    debug!(%endpoint, "forwarding chat message");
                    let endpoint = endpoint.clone();
                    orders.perform_cmd(async move {
                        Msg::Replied(chatbot::remote_reply(ask(endpoint, text).await))
                    });
                }
            }
        }
        Msg::Replied(reply) => model.session.push_bot(reply, timestamp()),
        Msg::Cleared => model.session.clear(),
    }
}

fn message_view(message: &Message) -> Node<Msg> {
    let (align, bubble) = match message.kind {
        MessageType::User => ("justify-content-end", "bg-primary text-white"),
        MessageType::Bot => ("justify-content-start", "bg-light"),
    };
    div![
        C!["d-flex mb-2", align],
        div![
            C!["rounded p-2", bubble],
            style! {St::MaxWidth => "80%", St::WhiteSpace => "pre-line"},
            &message.text,
        ],
    ]
}

pub fn view(model: &Model) -> Node<Msg> {
    let session = &model.session;
    div![
        style! {St::Position => "fixed", St::Bottom => px(20), St::Right => px(20), St::ZIndex => 1040},
        IF!(session.is_open() => div![
            C!["card shadow mb-2"],
            style! {St::Width => px(340)},
            div![
                C!["card-header d-flex justify-content-between align-items-center"],
                strong!["Asha"],
                div![
                    button![
                        C!["btn btn-sm btn-link"],
                        ev(Ev::Click, |_| Msg::Cleared),
                        "Clear"
                    ],
                    button![C!["close"], ev(Ev::Click, |_| Msg::Toggled), "×"],
                ],
            ],
            div![
                C!["card-body"],
                style! {St::Height => px(320), St::OverflowY => "auto"},
                session.messages().iter().map(message_view),
                IF!(session.is_typing() => div![C!["text-muted small"], "Asha is typing…"]),
            ],
            div![
                C!["card-footer input-group"],
                input![
                    C!["form-control"],
                    attrs! {At::Value => &model.input, At::Placeholder => "Type your message…"},
                    input_ev(Ev::Input, Msg::InputChanged),
                    keyboard_ev(Ev::KeyDown, |event| IF!(event.key() == "Enter" => Msg::Sent)),
                ],
                div![
                    C!["input-group-append"],
                    button![
                        C!["btn btn-primary"],
                        attrs! {At::Disabled => model.input.trim().is_empty().as_at_value()},
                        ev(Ev::Click, |_| Msg::Sent),
                        "Send"
                    ],
                ],
            ],
        ]),
        button![
            C!["btn btn-primary rounded-circle shadow float-right"],
            style! {St::Width => px(56), St::Height => px(56)},
            ev(Ev::Click, |_| Msg::Toggled),
            if session.is_open() { "×" } else { "💬" },
        ],
    ]
}
