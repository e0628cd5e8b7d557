use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 10;

/// A single 0-10 rating with a one-sentence justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScore")]
pub struct Score {
    value: u8,
    reason: String,
}

#[derive(Deserialize)]
struct RawScore {
    value: i64,
    reason: String,
}

impl Score {
    pub fn new(value: i64, reason: impl Into<String>) -> Result<Self, DomainError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(DomainError::ScoreOutOfRange(value));
        }
        Ok(Self {
            value: value as u8,
            reason: reason.into(),
        })
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl TryFrom<RawScore> for Score {
    type Error = DomainError;

    fn try_from(raw: RawScore) -> Result<Self, Self::Error> {
        Score::new(raw.value, raw.reason)
    }
}

/// The seven rated dimensions of a pitch, in the order they are presented to
/// the model and serialized in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreDimension {
    Clarity,
    StructureFlow,
    Persuasiveness,
    StorytellingExamples,
    ConcisenessVsDuration,
    FitForAudienceGoal,
    DeliveryEnergy,
}

impl ScoreDimension {
    pub const ALL: [ScoreDimension; 7] = [
        ScoreDimension::Clarity,
        ScoreDimension::StructureFlow,
        ScoreDimension::Persuasiveness,
        ScoreDimension::StorytellingExamples,
        ScoreDimension::ConcisenessVsDuration,
        ScoreDimension::FitForAudienceGoal,
        ScoreDimension::DeliveryEnergy,
    ];

    /// JSON key used both in the output schema shown to the model and in
    /// [`Scores`] serialization.
    pub fn key(&self) -> &'static str {
        match self {
            ScoreDimension::Clarity => "clarity",
            ScoreDimension::StructureFlow => "structure_flow",
            ScoreDimension::Persuasiveness => "persuasiveness",
            ScoreDimension::StorytellingExamples => "storytelling_examples",
            ScoreDimension::ConcisenessVsDuration => "conciseness_vs_duration",
            ScoreDimension::FitForAudienceGoal => "fit_for_audience_goal",
            ScoreDimension::DeliveryEnergy => "delivery_energy",
        }
    }

    /// Authoring rule for the `reason` sentence.
    pub fn reason_hint(&self) -> &'static str {
        match self {
            ScoreDimension::DeliveryEnergy => {
                "one sentence (estimate from word choice and style only)"
            }
            _ => "one sentence",
        }
    }
}

impl fmt::Display for ScoreDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub clarity: Score,
    pub structure_flow: Score,
    pub persuasiveness: Score,
    pub storytelling_examples: Score,
    pub conciseness_vs_duration: Score,
    pub fit_for_audience_goal: Score,
    pub delivery_energy: Score,
}

impl Scores {
    pub fn get(&self, dimension: ScoreDimension) -> &Score {
        match dimension {
            ScoreDimension::Clarity => &self.clarity,
            ScoreDimension::StructureFlow => &self.structure_flow,
            ScoreDimension::Persuasiveness => &self.persuasiveness,
            ScoreDimension::StorytellingExamples => &self.storytelling_examples,
            ScoreDimension::ConcisenessVsDuration => &self.conciseness_vs_duration,
            ScoreDimension::FitForAudienceGoal => &self.fit_for_audience_goal,
            ScoreDimension::DeliveryEnergy => &self.delivery_energy,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreDimension, &Score)> {
        ScoreDimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}
