//! Keyword-driven assistant replies and the chat widget's message log.

use std::fmt::Display;

use tracing::warn;

use crate::ChatResponse;

pub const WELCOME: &str = "Hi there! 👋 I'm Asha, your AI career assistant from JobsForHer Foundation. I can help you with job searches, career advice, resume tips, and more!";

/// Shown in place of a remote reply whenever the endpoint can't be reached
/// or answers with anything but a success.
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";

const GREETINGS: [&str; 3] = [
    "Hello! I'm here to support your career journey. How can I assist you today?",
    "Hi! I'm your JobsForHer Foundation assistant. What would you like help with?",
    "Welcome! I'm here to help you achieve your career goals. What can I do for you?",
];

const JOBS: &str = "I can help you find the perfect job opportunity! Would you like to:
1. Search for specific roles
2. Get job application tips
3. Track your applications
4. Receive personalized job recommendations
Just let me know what interests you!";

const APPLICATIONS: &str = "I can help you manage your job applications effectively. Here's what I can do:
1. Track application status
2. Set reminders for follow-ups
3. Prepare for interviews
4. Organize application materials
What would you like to know more about?";

const INTERVIEW: &str = "Here are some interview preparation tips:
1. Research the company thoroughly
2. Practice common interview questions
3. Prepare relevant examples of your work
4. Have questions ready for the interviewer
Would you like specific tips for any of these areas?";

const RESUME: &str = "I can help you optimize your resume! Here's what we can focus on:
1. ATS optimization
2. Highlighting key achievements
3. Professional formatting
4. Industry-specific keywords
Which aspect would you like to improve?";

const SKILLS: &str = "Based on current market trends, these skills are in high demand:
1. Data Analysis & AI
2. Digital Marketing
3. Project Management
4. UX/UI Design
Would you like resources to develop any of these skills?";

const MENTORSHIP: &str = "Our mentorship program offers:
1. One-on-one guidance from industry experts
2. Career development workshops
3. Networking opportunities
4. Skill-building sessions
Would you like to connect with a mentor?";

const EVENTS: &str = "Stay updated with our upcoming events:
1. Career workshops
2. Industry networking sessions
3. Skill development webinars
4. Leadership seminars
Would you like to register for any events?";

pub const DEFAULT_MENU: &str = "I'm here to help! Would you like to know about:
1. Job opportunities
2. Application tracking
3. Career development
4. Upcoming events
Just let me know what interests you!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Jobs,
    Applications,
    Interview,
    Resume,
    Skills,
    Mentorship,
    Events,
}

impl Topic {
    /// Checked in this order; the first topic with a matching keyword wins.
    pub const ORDER: [Topic; 8] = [
        Topic::Greeting,
        Topic::Jobs,
        Topic::Applications,
        Topic::Interview,
        Topic::Resume,
        Topic::Skills,
        Topic::Mentorship,
        Topic::Events,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Greeting => &["hello", "hi ", "hey"],
            Topic::Jobs => &["job", "work", "career"],
            Topic::Applications => &["application", "apply", "status"],
            Topic::Interview => &["interview", "prepare"],
            Topic::Resume => &["resume", "cv"],
            Topic::Skills => &["skill", "learn", "improve"],
            Topic::Mentorship => &["mentor", "guidance", "advice"],
            Topic::Events => &["event", "workshop", "webinar"],
        }
    }
}

pub fn classify(utterance: &str) -> Option<Topic> {
    let lower = utterance.to_lowercase();
    Topic::ORDER.into_iter().find(|topic| {
        topic
            .keywords()
            .iter()
            .any(|keyword| lower.contains(keyword))
    })
}

/// Picks a greeting from the utterance bytes so the same input always
/// gets the same reply.
fn greeting_for(utterance: &str) -> &'static str {
    let seed = utterance
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_add(byte as usize));
    GREETINGS[seed % GREETINGS.len()]
}

pub fn generate_reply(utterance: &str) -> &'static str {
    match classify(utterance) {
        Some(Topic::Greeting) => greeting_for(utterance),
        Some(Topic::Jobs) => JOBS,
        Some(Topic::Applications) => APPLICATIONS,
        Some(Topic::Interview) => INTERVIEW,
        Some(Topic::Resume) => RESUME,
        Some(Topic::Skills) => SKILLS,
        Some(Topic::Mentorship) => MENTORSHIP,
        Some(Topic::Events) => EVENTS,
        None => DEFAULT_MENU,
    }
}

/// Where bot turns come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource {
    Canned,
    Remote { endpoint: String },
}

/// Collapses the outcome of a remote call into the text to show.
pub fn remote_reply<E: Display>(result: Result<ChatResponse, E>) -> String {
    match result {
        Ok(reply) => reply.response,
        Err(err) => {
            warn!(%err, "chat endpoint failed, using fallback reply");
            FALLBACK_REPLY.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub kind: MessageType,
    pub text: String,
    /// Milliseconds since the epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    is_open: bool,
    is_typing: bool,
    messages: Vec<Message>,
    next_id: u64,
}

impl ChatSession {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Opens or closes the widget. Returns true when it was just opened on
    /// an empty log, i.e. when the welcome message should be scheduled.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open && self.messages.is_empty()
    }

    pub fn push_user(&mut self, text: impl Into<String>, now: i64) {
        self.push(MessageType::User, text.into(), now);
        self.is_typing = true;
    }

    pub fn push_bot(&mut self, text: impl Into<String>, now: i64) {
        self.push(MessageType::Bot, text.into(), now);
        self.is_typing = false;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    fn push(&mut self, kind: MessageType, text: String, timestamp: i64) {
        self.next_id += 1;
        self.messages.push(Message {
            id: self.next_id,
            kind,
            text,
            timestamp,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interview_in_any_casing() {
        assert_eq!(generate_reply("INTERVIEW tips please"), INTERVIEW);
        assert_eq!(generate_reply("Interview"), INTERVIEW);
    }

    #[test]
    fn no_keyword_gives_menu() {
        assert_eq!(generate_reply("tell me a joke"), DEFAULT_MENU);
        assert_eq!(generate_reply(""), DEFAULT_MENU);
    }

    #[test]
    fn earlier_topic_wins() {
        // "job" comes before "interview"
        assert_eq!(classify("job interview"), Some(Topic::Jobs));
        // "hey" comes before everything
        assert_eq!(classify("hey, any events?"), Some(Topic::Greeting));
        assert_eq!(classify("upload my cv"), Some(Topic::Resume));
    }

    #[test]
    fn bare_hi_needs_trailing_space() {
        assert_eq!(classify("hi"), None);
        assert_eq!(classify("hi there"), Some(Topic::Greeting));
    }

    #[test]
    fn greeting_is_stable() {
        let first = generate_reply("hello there");
        assert_eq!(generate_reply("hello there"), first);
        assert!(GREETINGS.contains(&first));
    }

    #[test]
    fn remote_reply_falls_back() {
        let ok: Result<ChatResponse, String> = Ok(ChatResponse {
            response: "From the server".into(),
        });
        assert_eq!(remote_reply(ok), "From the server");

        let failed: Result<ChatResponse, String> = Err("status 500".into());
        assert_eq!(remote_reply(failed), FALLBACK_REPLY);
    }

    #[test]
    fn session_flow() {
        let mut chat = ChatSession::default();
        assert!(chat.toggle());
        chat.push_bot(WELCOME, 1);

        chat.push_user("any webinars soon?", 2);
        assert!(chat.is_typing());
        chat.push_bot(generate_reply("any webinars soon?"), 3);
        assert!(!chat.is_typing());

        let ids: Vec<u64> = chat.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(chat.messages()[2].text, EVENTS);

        // closing and reopening a non-empty log schedules nothing
        assert!(!chat.toggle());
        assert!(!chat.toggle());
        assert!(chat.is_open());

        chat.clear();
        assert!(chat.messages().is_empty());
    }
}
