use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::Identity;
use crate::seed_data::pexels;
use crate::validation::is_valid_email;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub headline: String,
    pub bio: String,
    pub birth_date: String,
    pub profile_image: String,
    pub website: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub title: String,
    pub location: String,
    /// `YYYY-MM`
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub expires: Option<String>,
    pub credential_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Technical,
    Soft,
}

impl Skills {
    fn list_mut(&mut self, kind: SkillKind) -> &mut Vec<String> {
        match kind {
            SkillKind::Technical => &mut self.technical,
            SkillKind::Soft => &mut self.soft,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub basic: BasicInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub certifications: Vec<Certification>,
    /// File name of the uploaded resume, if any.
    pub resume: Option<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Profile {
    /// A filled-in sample profile carrying the signed-in user's name,
    /// e-mail and avatar.
    pub fn for_identity(identity: Option<&Identity>) -> Self {
        let basic = BasicInfo {
            name: identity.map(|i| i.name.clone()).unwrap_or_default(),
            email: identity.map(|i| i.email.clone()).unwrap_or_default(),
            phone: "9876543210".into(),
            location: "Bangalore, India".into(),
            headline: "Senior Software Developer".into(),
            bio: "Experienced software developer with a passion for building user-friendly applications.".into(),
            birth_date: "1990-01-15".into(),
            profile_image: identity
                .and_then(|i| i.avatar.clone())
                .unwrap_or_else(|| pexels(1036623, 150)),
            website: "https://example.com".into(),
            github: "https://github.com/username".into(),
            linkedin: "https://linkedin.com/in/username".into(),
        };

        Profile {
            basic,
            experience: vec![
                Experience {
                    id: "1".into(),
                    company: "TechCorp Solutions".into(),
                    title: "Senior Software Developer".into(),
                    location: "Bangalore".into(),
                    start_date: "2018-06".into(),
                    end_date: String::new(),
                    current: true,
                    description: "Leading development of web applications using React and Node.js. Mentoring junior developers and implementing best practices.".into(),
                    achievements: strings(&[
                        "Increased team productivity by 30% through process improvements",
                        "Led successful migration of legacy system to modern tech stack",
                        "Mentored 5 junior developers who were promoted to mid-level roles",
                    ]),
                    technologies: strings(&["React", "Node.js", "TypeScript", "AWS"]),
                },
                Experience {
                    id: "2".into(),
                    company: "Digital Innovations".into(),
                    title: "Web Developer".into(),
                    location: "Hyderabad".into(),
                    start_date: "2016-03".into(),
                    end_date: "2018-05".into(),
                    current: false,
                    description: "Developed responsive websites and e-commerce applications for clients across various industries.".into(),
                    achievements: strings(&[
                        "Delivered 15+ successful client projects",
                        "Reduced page load time by 40% through optimization",
                        "Implemented automated testing reducing bugs by 60%",
                    ]),
                    technologies: strings(&["JavaScript", "PHP", "MySQL", "AWS"]),
                },
            ],
            education: vec![Education {
                id: "1".into(),
                institution: "University of Technology".into(),
                degree: "B.Tech in Computer Science".into(),
                location: "Mumbai".into(),
                start_date: "2012-08".into(),
                end_date: "2016-05".into(),
                description: "Graduated with honors. Specialized in software engineering and database systems.".into(),
                achievements: strings(&[
                    "First Class with Distinction",
                    "Best Project Award",
                    "Technical Club President",
                ]),
                courses: strings(&[
                    "Data Structures & Algorithms",
                    "Database Management Systems",
                    "Software Engineering",
                    "Web Technologies",
                ]),
            }],
            skills: Skills {
                technical: strings(&[
                    "JavaScript",
                    "React",
                    "Node.js",
                    "TypeScript",
                    "HTML/CSS",
                    "SQL",
                    "Git",
                    "AWS",
                ]),
                soft: strings(&[
                    "Leadership",
                    "Problem Solving",
                    "Communication",
                    "Team Management",
                    "Agile Methodologies",
                ]),
            },
            certifications: vec![
                Certification {
                    id: "1".into(),
                    name: "AWS Certified Developer".into(),
                    issuer: "Amazon Web Services".into(),
                    date: "2022-06".into(),
                    expires: Some("2025-06".into()),
                    credential_id: "AWS-123456".into(),
                    url: "https://aws.amazon.com/certification".into(),
                },
                Certification {
                    id: "2".into(),
                    name: "Professional Scrum Master".into(),
                    issuer: "Scrum.org".into(),
                    date: "2021-08".into(),
                    expires: None,
                    credential_id: "PSM-789012".into(),
                    url: "https://www.scrum.org/certificates".into(),
                },
            ],
            resume: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Basic,
    Experience,
    Education,
    Skills,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Basic,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Certifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Basic => "Basic Info",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Certifications => "Certifications",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format")]
    InvalidEmail,
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

/// A name of only whitespace counts as missing. An empty e-mail is reported
/// as required, a non-empty one failing the pattern as invalid.
pub fn validate_basic(basic: &BasicInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if basic.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }
    if basic.email.is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !is_valid_email(&basic.email) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }
    errors
}

/// The profile page: data plus which sections are being edited.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    profile: Profile,
    editing: BTreeSet<Section>,
    errors: FieldErrors,
}

impl ProfileEditor {
    pub fn new(profile: Profile) -> Self {
        ProfileEditor {
            profile,
            editing: BTreeSet::new(),
            errors: FieldErrors::new(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Only meaningful while the section is in edit mode.
    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    pub fn is_editing(&self, section: Section) -> bool {
        self.editing.contains(&section)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn toggle_edit(&mut self, section: Section) {
        if !self.editing.remove(&section) {
            self.editing.insert(section);
        }
    }

    /// Validates the section. On success the errors are cleared and the
    /// section leaves edit mode; on failure both stay as they are and the
    /// new errors are returned.
    pub fn save(&mut self, section: Section) -> Result<(), FieldErrors> {
        let errors = match section {
            Section::Basic => validate_basic(&self.profile.basic),
            _ => FieldErrors::new(),
        };
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors.clear();
        self.editing.remove(&section);
        Ok(())
    }

    /// Returns false for a blank or already listed skill.
    pub fn add_skill(&mut self, kind: SkillKind, skill: &str) -> bool {
        let skill = skill.trim();
        let list = self.profile.skills.list_mut(kind);
        if skill.is_empty() || list.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            return false;
        }
        list.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, kind: SkillKind, skill: &str) {
        self.profile.skills.list_mut(kind).retain(|s| s != skill);
    }

    pub fn remove_experience(&mut self, id: &str) {
        self.profile.experience.retain(|entry| entry.id != id);
    }

    pub fn remove_education(&mut self, id: &str) {
        self.profile.education.retain(|entry| entry.id != id);
    }

    pub fn set_resume(&mut self, file_name: Option<String>) {
        self.profile.resume = file_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Identity {
        Identity {
            id: "1".into(),
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            avatar: None,
        }
    }

    #[test]
    fn seeded_from_identity() {
        let profile = Profile::for_identity(Some(&jane()));
        assert_eq!(profile.basic.name, "Jane Doe");
        assert_eq!(profile.basic.email, "jane@example.com");
        assert!(profile.basic.profile_image.contains("1036623"));

        let anonymous = Profile::for_identity(None);
        assert!(anonymous.basic.name.is_empty());
    }

    #[test]
    fn save_keeps_edit_mode_on_errors() {
        let mut editor = ProfileEditor::new(Profile::for_identity(Some(&jane())));
        editor.toggle_edit(Section::Basic);
        editor.profile_mut().basic.name.clear();
        editor.profile_mut().basic.email = "jane.example.com".into();

        let errors = editor.save(Section::Basic).unwrap_err();
        assert_eq!(errors[&Field::Name], FieldError::NameRequired);
        assert_eq!(errors[&Field::Email], FieldError::InvalidEmail);
        assert!(editor.is_editing(Section::Basic));
        assert_eq!(editor.errors(), &errors);

        editor.profile_mut().basic.name = "Jane D.".into();
        editor.profile_mut().basic.email = "jane@example.com".into();
        assert_eq!(editor.save(Section::Basic), Ok(()));
        assert!(!editor.is_editing(Section::Basic));
        assert!(editor.errors().is_empty());
    }

    #[test]
    fn empty_email_is_required_not_invalid() {
        let mut basic = Profile::for_identity(Some(&jane())).basic;
        basic.email.clear();
        assert_eq!(
            validate_basic(&basic).get(&Field::Email),
            Some(&FieldError::EmailRequired)
        );
    }

    #[test]
    fn blank_name_is_required() {
        let mut basic = Profile::for_identity(Some(&jane())).basic;
        basic.name = "   ".into();
        let errors = validate_basic(&basic);
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::NameRequired));
        assert_eq!(errors.get(&Field::Email), None);

        basic.name = " Jane ".into();
        assert!(validate_basic(&basic).is_empty());
    }

    #[test]
    fn other_sections_always_save() {
        let mut editor = ProfileEditor::new(Profile::for_identity(None));
        editor.toggle_edit(Section::Skills);
        assert_eq!(editor.save(Section::Skills), Ok(()));
        assert!(!editor.is_editing(Section::Skills));
    }

    #[test]
    fn skills_are_deduplicated() {
        let mut editor = ProfileEditor::new(Profile::for_identity(None));
        assert!(editor.add_skill(SkillKind::Technical, " Rust "));
        assert!(!editor.add_skill(SkillKind::Technical, "rust"));
        assert!(!editor.add_skill(SkillKind::Soft, "  "));

        editor.remove_skill(SkillKind::Technical, "Rust");
        assert!(!editor
            .profile()
            .skills
            .technical
            .contains(&"Rust".to_string()));
    }
}
