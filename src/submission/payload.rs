use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which of the three site forms a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    #[serde(rename = "REGISTER")]
    Registration,
    #[serde(rename = "CONTACT")]
    Contact,
    #[serde(rename = "FEEDBACK")]
    Feedback,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Registration, FormKind::Contact, FormKind::Feedback];

    /// Value written to the `formType` column of the spreadsheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Registration => "REGISTER",
            FormKind::Contact => "CONTACT",
            FormKind::Feedback => "FEEDBACK",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Registration => "Attendee Registration",
            FormKind::Contact => "Contact Us",
            FormKind::Feedback => "Event Feedback",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Star ratings keyed by category, each in `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ratings(BTreeMap<String, u8>);

impl Ratings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a category's rating. Re-rating a category replaces the previous value.
    pub fn rate(&mut self, category: &str, value: u8) -> Result<(), String> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(format!(
                "Rating for {category} must be between {MIN_RATING} and {MAX_RATING}, got {value}"
            ));
        }
        self.0.insert(category.to_string(), value);
        Ok(())
    }

    pub fn get(&self, category: &str) -> Option<u8> {
        self.0.get(category).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact JSON blob, e.g. `{"overall":5}`. Empty ratings give `{}`.
    pub fn to_blob(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Flat, insertion-ordered field map posted to the collection endpoint.
/// Every value is a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionPayload(Map<String, Value>);

impl SubmissionPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the payload for a form: its fields in order, then `formType` and `ratings`.
    pub fn for_form<I, K, V>(kind: FormKind, fields: I, ratings: &Ratings) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut payload: Self = fields.into_iter().collect();
        payload.insert("formType", kind.as_str());
        payload.insert("ratings", ratings.to_blob());
        payload
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Value::String(value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl<K, V> FromIterator<(K, V)> for SubmissionPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut payload = SubmissionPayload::new();
        for (k, v) in iter {
            payload.insert(k, v);
        }
        payload
    }
}
