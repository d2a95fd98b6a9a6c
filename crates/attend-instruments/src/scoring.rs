use attend_core::models::question::ResponseScale;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Inclusive range of valid response levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<ResponseScale> for ScoreRange {
    fn from(scale: ResponseScale) -> Self {
        ScoreRange {
            min: scale.min(),
            max: scale.max(),
        }
    }
}

/// A response outside its questionnaire's declared scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub value: u32,
    pub expected_range: ScoreRange,
    pub scale: ResponseScale,
    pub message: String,
}

/// Parse the item number out of `<prefix><n>`.
///
/// Only canonical ids are recognised: `n` must be a positive integer written
/// without leading zeros, so `asrs_01` and `asrs_0` are not items.
pub(crate) fn item_number(id: &str, prefix: &str) -> Option<u32> {
    let suffix = id.strip_prefix(prefix)?;
    let number: u32 = suffix.parse().ok()?;
    (number >= 1 && number.to_string() == suffix).then_some(number)
}
