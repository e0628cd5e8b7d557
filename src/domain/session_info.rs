use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PracticeAttempt(u32);

impl PracticeAttempt {
    pub const FIRST: PracticeAttempt = PracticeAttempt(1);

    pub fn new(attempt: i64) -> Result<Self, DomainError> {
        u32::try_from(attempt)
            .ok()
            .filter(|a| *a >= 1)
            .map(Self)
            .ok_or(DomainError::InvalidPracticeAttempt(attempt))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for PracticeAttempt {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<i64> for PracticeAttempt {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PracticeAttempt> for u32 {
    fn from(attempt: PracticeAttempt) -> Self {
        attempt.0
    }
}

impl fmt::Display for PracticeAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// `None` only when the client explicitly sends `null`.
    #[serde(default = "first_attempt")]
    pub practice_attempt: Option<PracticeAttempt>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub wants_deploy_suggestions: bool,
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self {
            practice_attempt: first_attempt(),
            wants_deploy_suggestions: false,
        }
    }
}

fn first_attempt() -> Option<PracticeAttempt> {
    Some(PracticeAttempt::FIRST)
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
