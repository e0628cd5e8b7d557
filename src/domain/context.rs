use serde::{Deserialize, Serialize};

/// Optional situational details about a pitch. Every field is free text and
/// may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub audience: Option<String>,
    pub goal: Option<String>,
    pub duration: Option<String>,
    pub scenario: Option<String>,
    pub english_level: Option<String>,
    pub tone_style: Option<String>,
    pub constraints: Option<String>,
    pub notes_from_user: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextField {
    Audience,
    Goal,
    Duration,
    Scenario,
    EnglishLevel,
    ToneStyle,
    Constraints,
    NotesFromUser,
}

impl ContextField {
    /// Fixed rendering order of context lines.
    pub const ALL: [ContextField; 8] = [
        ContextField::Audience,
        ContextField::Goal,
        ContextField::Duration,
        ContextField::Scenario,
        ContextField::EnglishLevel,
        ContextField::ToneStyle,
        ContextField::Constraints,
        ContextField::NotesFromUser,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContextField::Audience => "Audience",
            ContextField::Goal => "Goal",
            ContextField::Duration => "Duration",
            ContextField::Scenario => "Scenario",
            ContextField::EnglishLevel => "English Level",
            ContextField::ToneStyle => "Tone/Style",
            ContextField::Constraints => "Constraints",
            ContextField::NotesFromUser => "Notes from User",
        }
    }
}

impl Context {
    /// Returns the value of `field`, treating an empty string as absent.
    pub fn get(&self, field: ContextField) -> Option<&str> {
        let value = match field {
            ContextField::Audience => &self.audience,
            ContextField::Goal => &self.goal,
            ContextField::Duration => &self.duration,
            ContextField::Scenario => &self.scenario,
            ContextField::EnglishLevel => &self.english_level,
            ContextField::ToneStyle => &self.tone_style,
            ContextField::Constraints => &self.constraints,
            ContextField::NotesFromUser => &self.notes_from_user,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    pub fn present_fields(&self) -> impl Iterator<Item = (ContextField, &str)> {
        ContextField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }
}
