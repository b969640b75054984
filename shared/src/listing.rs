use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Remote,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Remote => "Remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Lead => "Lead",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: Option<String>,
    pub skills: Vec<String>,
    pub description: String,
    pub posted_date: NaiveDate,
    pub logo_url: Option<String>,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub company_description: String,
    pub experience_level: ExperienceLevel,
    pub industry: Vec<String>,
    pub application_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub is_new: bool,
    pub views: u32,
    pub applicants: u32,
    pub last_updated: NaiveDate,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Workshop,
    Webinar,
    Conference,
    Networking,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Workshop,
        EventType::Webinar,
        EventType::Conference,
        EventType::Networking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventType::Workshop => "Workshop",
            EventType::Webinar => "Webinar",
            EventType::Conference => "Conference",
            EventType::Networking => "Networking",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub name: String,
    pub role: String,
    pub company: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub location: String,
    pub image_url: String,
    pub registration_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Video,
    Template,
    Course,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Article,
        ResourceType::Video,
        ResourceType::Template,
        ResourceType::Course,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResourceType::Article => "article",
            ResourceType::Video => "video",
            ResourceType::Template => "template",
            ResourceType::Course => "course",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(rename = "All Levels")]
    AllLevels,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
        Level::AllLevels,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::AllLevels => "All Levels",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub author: Option<String>,
    pub date: NaiveDate,
    pub read_time: Option<String>,
    pub duration: Option<String>,
    pub level: Option<Level>,
    pub tags: Vec<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub is_bookmarked: bool,
    pub downloads: Option<u32>,
    pub views: Option<u32>,
    pub rating: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub experience: u32,
    pub skills: Vec<String>,
    pub bio: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipProgram {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub format: String,
    pub requirements: String,
    pub image_url: String,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewing,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewing,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub notes: String,
    pub next_steps: Option<String>,
    pub interview_date: Option<String>,
    pub location: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub source: String,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
}
