use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Form fields holding a 1–4 self-rating, one per skill.
pub const SKILL_FIELDS: [&str; 4] = [
    "self_reading",
    "self_listening",
    "self_writing",
    "self_speaking",
];

/// Textual skill level a respondent picks for each skill on the form.
///
/// The form posts the level as its numeric score (1 to 4). The stored row
/// carries the label instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Superior,
}

impl ProficiencyLevel {
    pub fn from_score(score: i64) -> Option<Self> {
        match score {
            1 => Some(Self::Beginner),
            2 => Some(Self::Intermediate),
            3 => Some(Self::Advanced),
            4 => Some(Self::Superior),
            _ => None,
        }
    }

    pub fn score(self) -> i64 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Superior => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Superior => "Superior",
        }
    }

    /// Maps a raw form value onto a level.
    ///
    /// Returns `None` when the value is not an integer score or the score is
    /// outside the table; callers keep the raw value in that case.
    pub fn from_value(value: &Value) -> Option<Self> {
        coerce_score(value).and_then(Self::from_score)
    }
}

/// Integer coercion applied to self-ratings before the table lookup.
///
/// - integers as-is, finite floats truncated toward zero
/// - strings trimmed, then parsed as a signed decimal integer
/// - booleans as 1 / 0
fn coerce_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
