use super::payload::FormKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Email,
    Tel,
    TextArea,
    /// An empty option list accepts any value.
    Select(&'static [&'static str]),
    /// Submitted as `on` when checked, omitted otherwise.
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingDef {
    pub category: &'static str,
    pub label: &'static str,
}

pub const CHECKBOX_ON: &str = "on";

const REFERRAL_OPTIONS: &[&str] = &[
    "Social Media",
    "Friend or Colleague",
    "University Announcement",
    "Online Search",
    "Other",
];

const fn field(
    name: &'static str,
    label: &'static str,
    field_type: FieldType,
    required: bool,
) -> FieldDef {
    FieldDef {
        name,
        label,
        field_type,
        required,
    }
}

const REGISTRATION_FIELDS: &[FieldDef] = &[
    field("name", "Full Name", FieldType::Text, true),
    field("email", "Email Address", FieldType::Email, true),
    field("phone", "Phone Number (Optional)", FieldType::Tel, false),
    field("organization", "Organization / University", FieldType::Text, true),
    field(
        "referral",
        "How did you hear about us?",
        FieldType::Select(REFERRAL_OPTIONS),
        false,
    ),
    field(
        "newsletter",
        "Subscribe to our newsletter for future events",
        FieldType::Checkbox,
        false,
    ),
];

const CONTACT_FIELDS: &[FieldDef] = &[
    field("name", "Full Name", FieldType::Text, true),
    field("email", "Email Address", FieldType::Email, true),
    field("message", "Your Message", FieldType::TextArea, true),
];

const FEEDBACK_FIELDS: &[FieldDef] = &[
    field("name", "Full Name (Optional)", FieldType::Text, false),
    field(
        "favoriteSpeaker",
        "Who was your favorite speaker? (Optional)",
        FieldType::Select(&[]),
        false,
    ),
    field("likes", "What did you like most?", FieldType::TextArea, true),
    field(
        "improvements",
        "Suggestions for improvement",
        FieldType::TextArea,
        true,
    ),
];

const FEEDBACK_RATINGS: &[RatingDef] = &[
    RatingDef { category: "overall", label: "Overall Experience" },
    RatingDef { category: "speakers", label: "Speakers & Content" },
    RatingDef { category: "venue", label: "Venue & Organization" },
];

pub fn fields_for(kind: FormKind) -> &'static [FieldDef] {
    match kind {
        FormKind::Registration => REGISTRATION_FIELDS,
        FormKind::Contact => CONTACT_FIELDS,
        FormKind::Feedback => FEEDBACK_FIELDS,
    }
}

pub fn ratings_for(kind: FormKind) -> &'static [RatingDef] {
    match kind {
        FormKind::Feedback => FEEDBACK_RATINGS,
        _ => &[],
    }
}

pub fn find_field(kind: FormKind, name: &str) -> Option<&'static FieldDef> {
    fields_for(kind).iter().find(|f| f.name == name)
}

/// Initial values a freshly opened form starts with.
pub fn defaults_for(kind: FormKind) -> Vec<(&'static str, &'static str)> {
    fields_for(kind)
        .iter()
        .filter_map(|f| match f.field_type {
            FieldType::Select(options) if !options.is_empty() => Some((f.name, options[0])),
            FieldType::Checkbox => Some((f.name, CHECKBOX_ON)),
            _ => None,
        })
        .collect()
}

/// Check values against a form's definitions. Returns one message per problem.
pub fn validate_fields<'a, F>(kind: FormKind, value_of: F) -> Vec<String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut problems = Vec::new();

    for def in fields_for(kind) {
        let value = value_of(def.name).map(str::trim).unwrap_or("");

        if value.is_empty() {
            if def.required {
                problems.push(format!("{} is required", def.label));
            }
            continue;
        }

        match def.field_type {
            FieldType::Email if !value.contains('@') => {
                problems.push(format!("{} must be a valid email address", def.label));
            }
            FieldType::Select(options) if !options.is_empty() && !options.contains(&value) => {
                problems.push(format!("{} has an unknown option: {value}", def.label));
            }
            FieldType::Checkbox if value != CHECKBOX_ON => {
                problems.push(format!("{} must be checked or left empty", def.label));
            }
            _ => {}
        }
    }

    problems
}
