use seed::{prelude::*, *};
use shared::auth::Identity;
use shared::profile::{
    BasicInfo, Certification, Education, Experience, Field, Profile, ProfileEditor, Section,
    SkillKind,
};

use crate::widgets::tags;
use crate::Toast;

pub struct Model {
    editor: ProfileEditor,
    technical_input: String,
    soft_input: String,
}

impl Model {
    pub fn new(identity: Option<&Identity>) -> Self {
        Model {
            editor: ProfileEditor::new(Profile::for_identity(identity)),
            technical_input: String::new(),
            soft_input: String::new(),
        }
    }
}

#[derive(Clone, Copy)]
pub enum BasicField {
    Name,
    Email,
    Phone,
    Location,
    Headline,
    Bio,
    Website,
    Github,
    Linkedin,
}

impl BasicField {
    const ALL: [BasicField; 9] = [
        BasicField::Name,
        BasicField::Email,
        BasicField::Phone,
        BasicField::Location,
        BasicField::Headline,
        BasicField::Bio,
        BasicField::Website,
        BasicField::Github,
        BasicField::Linkedin,
    ];

    fn label(self) -> &'static str {
        match self {
            BasicField::Name => "Full name",
            BasicField::Email => "Email",
            BasicField::Phone => "Phone",
            BasicField::Location => "Location",
            BasicField::Headline => "Headline",
            BasicField::Bio => "Bio",
            BasicField::Website => "Website",
            BasicField::Github => "GitHub",
            BasicField::Linkedin => "LinkedIn",
        }
    }

    fn value(self, basic: &BasicInfo) -> &str {
        match self {
            BasicField::Name => &basic.name,
            BasicField::Email => &basic.email,
            BasicField::Phone => &basic.phone,
            BasicField::Location => &basic.location,
            BasicField::Headline => &basic.headline,
            BasicField::Bio => &basic.bio,
            BasicField::Website => &basic.website,
            BasicField::Github => &basic.github,
            BasicField::Linkedin => &basic.linkedin,
        }
    }

    fn value_mut(self, basic: &mut BasicInfo) -> &mut String {
        match self {
            BasicField::Name => &mut basic.name,
            BasicField::Email => &mut basic.email,
            BasicField::Phone => &mut basic.phone,
            BasicField::Location => &mut basic.location,
            BasicField::Headline => &mut basic.headline,
            BasicField::Bio => &mut basic.bio,
            BasicField::Website => &mut basic.website,
            BasicField::Github => &mut basic.github,
            BasicField::Linkedin => &mut basic.linkedin,
        }
    }

    fn validated(self) -> Option<Field> {
        match self {
            BasicField::Name => Some(Field::Name),
            BasicField::Email => Some(Field::Email),
            _ => None,
        }
    }
}

pub enum Msg {
    EditToggled(Section),
    Saved(Section),
    BasicChanged(BasicField, String),
    SkillInputChanged(SkillKind, String),
    SkillAdded(SkillKind),
    SkillRemoved(SkillKind, String),
    ExperienceRemoved(String),
    EducationRemoved(String),
    ResumeChosen(Option<String>),
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    let editor = &mut model.editor;
    match msg {
        Msg::EditToggled(section) => editor.toggle_edit(section),
        Msg::Saved(section) => {
            if editor.save(section).is_ok() {
                orders.notify(Toast::success("Changes saved successfully!"));
            }
        }
        Msg::BasicChanged(field, value) => {
            *field.value_mut(&mut editor.profile_mut().basic) = value;
        }
        Msg::SkillInputChanged(SkillKind::Technical, value) => model.technical_input = value,
        Msg::SkillInputChanged(SkillKind::Soft, value) => model.soft_input = value,
        Msg::SkillAdded(kind) => {
            let input = match kind {
                SkillKind::Technical => &mut model.technical_input,
                SkillKind::Soft => &mut model.soft_input,
            };
            if editor.add_skill(kind, input) {
                input.clear();
            }
        }
        Msg::SkillRemoved(kind, skill) => editor.remove_skill(kind, &skill),
        Msg::ExperienceRemoved(id) => editor.remove_experience(&id),
        Msg::EducationRemoved(id) => editor.remove_education(&id),
        Msg::ResumeChosen(file) => {
            let uploaded = file.is_some();
            editor.set_resume(file);
            if uploaded {
                orders.notify(Toast::success("Resume uploaded successfully!"));
            }
        }
    }
}

fn chosen_file_name(event: web_sys::Event) -> Option<String> {
    let input = event
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    let file = input.files()?.get(0)?;
    Some(file.name())
}

pub fn view(model: &Model) -> Node<Msg> {
    let editor = &model.editor;
    let profile = editor.profile();
    div![
        C!["row"],
        aside![C!["col-md-4"], summary_view(profile)],
        section![
            C!["col-md-8"],
            Section::ALL.iter().map(|section| {
                let section = *section;
                let editing = editor.is_editing(section);
                div![
                    C!["card mb-4"],
                    div![
                        C!["card-header d-flex justify-content-between align-items-center"],
                        strong![section.label()],
                        if editing {
                            div![
                                button![
                                    C!["btn btn-sm btn-primary mr-2"],
                                    ev(Ev::Click, move |_| Msg::Saved(section)),
                                    "Save"
                                ],
                                button![
                                    C!["btn btn-sm btn-link"],
                                    ev(Ev::Click, move |_| Msg::EditToggled(section)),
                                    "Cancel"
                                ],
                            ]
                        } else {
                            button![
                                C!["btn btn-sm btn-outline-primary"],
                                ev(Ev::Click, move |_| Msg::EditToggled(section)),
                                "Edit"
                            ]
                        },
                    ],
                    div![C!["card-body"], section_body(model, section, editing)],
                ]
            }),
        ],
    ]
}

fn summary_view(profile: &Profile) -> Node<Msg> {
    let basic = &profile.basic;
    div![
        C!["card text-center"],
        div![
            C!["card-body"],
            img![
                C!["rounded-circle mb-3"],
                attrs! {At::Src => &basic.profile_image, At::Alt => &basic.name, At::Width => "120", At::Height => "120"},
            ],
            h4![&basic.name],
            p![C!["text-muted"], &basic.headline],
            p![C!["small"], &basic.location],
            hr![],
            h6!["Resume"],
            match &profile.resume {
                Some(name) => p![C!["small"], name],
                None => p![C!["small text-muted"], "No resume uploaded"],
            },
            input![
                C!["form-control-file"],
                attrs! {At::Type => "file", At::Accept => ".pdf,.doc,.docx"},
                ev(Ev::Change, |event| Msg::ResumeChosen(chosen_file_name(event))),
            ],
        ],
    ]
}

fn section_body(model: &Model, section: Section, editing: bool) -> Node<Msg> {
    let profile = model.editor.profile();
    match section {
        Section::Basic if editing => basic_form(model),
        Section::Basic => basic_view(&profile.basic),
        Section::Experience => div![profile
            .experience
            .iter()
            .map(|entry| experience_view(entry, editing))],
        Section::Education => div![profile
            .education
            .iter()
            .map(|entry| education_view(entry, editing))],
        Section::Skills => div![
            skills_view(model, SkillKind::Technical, "Technical", &profile.skills.technical, editing),
            skills_view(model, SkillKind::Soft, "Soft skills", &profile.skills.soft, editing),
        ],
        Section::Certifications => div![profile.certifications.iter().map(certification_view)],
    }
}

fn basic_view(basic: &BasicInfo) -> Node<Msg> {
    dl![
        C!["row mb-0"],
        BasicField::ALL
            .iter()
            .flat_map(|field| [
                dt![C!["col-sm-3"], field.label()],
                dd![C!["col-sm-9"], field.value(basic)],
            ])
            .collect::<Vec<_>>(),
        dt![C!["col-sm-3"], "Birth date"],
        dd![C!["col-sm-9"], &basic.birth_date],
    ]
}

fn basic_form(model: &Model) -> Node<Msg> {
    let basic = &model.editor.profile().basic;
    let errors = model.editor.errors();
    div![BasicField::ALL.iter().map(|field| {
        let field = *field;
        let error = field.validated().and_then(|key| errors.get(&key));
        div![
            C!["form-group"],
            label![field.label()],
            match field {
                BasicField::Bio => textarea![
                    C!["form-control"],
                    attrs! {At::Rows => "3", At::Value => field.value(basic)},
                    input_ev(Ev::Input, move |value| Msg::BasicChanged(field, value)),
                ],
                _ => input![
                    C!["form-control", IF!(error.is_some() => "is-invalid")],
                    attrs! {At::Value => field.value(basic)},
                    input_ev(Ev::Input, move |value| Msg::BasicChanged(field, value)),
                ],
            },
            error.map(|error| div![C!["invalid-feedback"], error.to_string()]),
        ]
    })]
}

fn experience_view(entry: &Experience, editing: bool) -> Node<Msg> {
    let id = entry.id.clone();
    let end = if entry.current { "Present" } else { entry.end_date.as_str() };
    div![
        C!["mb-3"],
        div![
            C!["d-flex justify-content-between"],
            h6![&entry.title, " · ", &entry.company],
            IF!(editing => button![
                C!["btn btn-sm btn-outline-danger"],
                ev(Ev::Click, move |_| Msg::ExperienceRemoved(id)),
                "Remove"
            ]),
        ],
        small![C!["text-muted"], format!("{} – {} · {}", entry.start_date, end, entry.location)],
        p![&entry.description],
        ul![entry.achievements.iter().map(|item| li![item])],
        tags(&entry.technologies),
    ]
}

fn education_view(entry: &Education, editing: bool) -> Node<Msg> {
    let id = entry.id.clone();
    div![
        C!["mb-3"],
        div![
            C!["d-flex justify-content-between"],
            h6![&entry.degree, " · ", &entry.institution],
            IF!(editing => button![
                C!["btn btn-sm btn-outline-danger"],
                ev(Ev::Click, move |_| Msg::EducationRemoved(id)),
                "Remove"
            ]),
        ],
        small![
            C!["text-muted"],
            format!("{} – {} · {}", entry.start_date, entry.end_date, entry.location)
        ],
        p![&entry.description],
        tags(&entry.courses),
    ]
}

fn skills_view(model: &Model, kind: SkillKind, title: &str, skills: &[String], editing: bool) -> Node<Msg> {
    let input = match kind {
        SkillKind::Technical => &model.technical_input,
        SkillKind::Soft => &model.soft_input,
    };
    div![
        C!["mb-3"],
        h6![title],
        skills.iter().map(|skill| {
            let removed = skill.clone();
            span![
                C!["badge badge-light mr-1"],
                skill,
                IF!(editing => a![
                    C!["ml-1"],
                    attrs! {At::Href => "#"},
                    ev(Ev::Click, move |event| {
                        event.prevent_default();
                        Msg::SkillRemoved(kind, removed)
                    }),
                    "×"
                ]),
            ]
        }),
        IF!(editing => div![
            C!["input-group input-group-sm mt-2"],
            input![
                C!["form-control"],
                attrs! {At::Value => input, At::Placeholder => "Add a skill"},
                input_ev(Ev::Input, move |value| Msg::SkillInputChanged(kind, value)),
                keyboard_ev(Ev::KeyDown, move |event| {
                    IF!(event.key() == "Enter" => Msg::SkillAdded(kind))
                }),
            ],
            div![
                C!["input-group-append"],
                button![
                    C!["btn btn-outline-secondary"],
                    ev(Ev::Click, move |_| Msg::SkillAdded(kind)),
                    "Add"
                ],
            ],
        ]),
    ]
}

fn certification_view(certification: &Certification) -> Node<Msg> {
    div![
        C!["mb-2"],
        strong![&certification.name],
        div![
            C!["small text-muted"],
            format!(
                "{} · issued {}{} · ID {}",
                certification.issuer,
                certification.date,
                certification
                    .expires
                    .as_ref()
                    .map(|date| format!(", expires {date}"))
                    .unwrap_or_default(),
                certification.credential_id
            ),
        ],
        a![attrs! {At::Href => &certification.url, At::Target => "_blank"}, "View credential"],
    ]
}
