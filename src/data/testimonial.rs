use serde::{Deserialize, Serialize};

use crate::data::Row;

const TEXT_HEADERS: [&str; 4] = ["text", "testimonial", "quote", "comment"];
const GENDER_HEADERS: [&str; 1] = ["gender"];
const AGE_HEADERS: [&str; 2] = ["age", "age group"];

/// One survey quote shown in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub gender: String,
    pub age: String,
}

impl Testimonial {
    #[must_use]
    pub fn new(text: impl Into<String>, gender: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gender: gender.into(),
            age: age.into(),
        }
    }

    /// Best-effort mapping; headers match case-insensitively and missing
    /// columns stay empty.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        Self {
            text: column(row, &TEXT_HEADERS),
            gender: column(row, &GENDER_HEADERS),
            age: column(row, &AGE_HEADERS),
        }
    }

    /// `"Female, 24"`, skipping empty parts.
    #[must_use]
    pub fn attribution(&self) -> String {
        [self.gender.as_str(), self.age.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn column(row: &Row, names: &[&str]) -> String {
    row.iter()
        .find(|(header, _)| {
            let header = header.trim();
            names.iter().any(|name| header.eq_ignore_ascii_case(name))
        })
        .map(|(_, value)| value.trim().to_owned())
        .unwrap_or_default()
}
