//! The life-situation category chosen on the welcome screen.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// User-chosen life-situation tag driving personalization.
///
/// Serialized as the display string (`"Working Professional"`, not
/// `"working_professional"`) because the value is embedded verbatim in the
/// analysis prompt and echoed back by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Student,
    #[serde(rename = "Working Professional")]
    WorkingProfessional,
    Entrepreneur,
    Couple,
    Single,
    Farmer,
    Homemaker,
    #[serde(rename = "Content Creator")]
    ContentCreator,
    Other,
}

impl Category {
    /// All categories in welcome-screen order.
    pub const ALL: [Self; 9] = [
        Self::Student,
        Self::WorkingProfessional,
        Self::Entrepreneur,
        Self::Couple,
        Self::Single,
        Self::Farmer,
        Self::Homemaker,
        Self::ContentCreator,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::WorkingProfessional => "Working Professional",
            Self::Entrepreneur => "Entrepreneur",
            Self::Couple => "Couple",
            Self::Single => "Single",
            Self::Farmer => "Farmer",
            Self::Homemaker => "Homemaker",
            Self::ContentCreator => "Content Creator",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::Validation(format!("unknown category: {wanted}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&Category::WorkingProfessional).unwrap();
        assert_eq!(json, "\"Working Professional\"");
        let json = serde_json::to_string(&Category::ContentCreator).unwrap();
        assert_eq!(json, "\"Content Creator\"");
    }

    #[test]
    fn serde_names_match_as_str() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.as_str());
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("student".parse::<Category>().unwrap(), Category::Student);
        assert_eq!(
            " working professional ".parse::<Category>().unwrap(),
            Category::WorkingProfessional
        );
        assert!("astronaut".parse::<Category>().is_err());
    }
}
