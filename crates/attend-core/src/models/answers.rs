use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Raw response level for one item. Each scorer interprets it on its own scale.
pub type ResponseLevel = u32;

/// An immutable snapshot of the answers given so far, keyed by question id.
///
/// Unanswered questions are simply absent. The map is ordered so that every
/// iteration over it is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerMap(BTreeMap<String, ResponseLevel>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<ResponseLevel> {
        self.0.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ResponseLevel)> {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }

    /// Entries whose id starts with `prefix`, in id order.
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, ResponseLevel)> + 'a {
        self.iter().filter(move |(id, _)| id.starts_with(prefix))
    }

    /// Return a new snapshot with `step` layered over this one.
    ///
    /// Answers accrete across questionnaire pages: a later step overrides an
    /// earlier value for the same id and never removes anything.
    pub fn accrete(&self, step: &AnswerMap) -> AnswerMap {
        let mut merged = self.0.clone();
        merged.extend(step.0.iter().map(|(id, value)| (id.clone(), *value)));
        AnswerMap(merged)
    }

    /// Parse a flat JSON object of id to response level.
    ///
    /// Values may be JSON integers or integer strings (HTML forms submit
    /// strings); anything else is rejected.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value
            .as_object()
            .ok_or_else(|| CoreError::InvalidAnswers(value.to_string()))?;

        let mut answers = BTreeMap::new();
        for (id, raw) in object {
            let level = match raw {
                serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
                serde_json::Value::String(s) => s.trim().parse::<u32>().ok(),
                _ => None,
            }
            .ok_or_else(|| CoreError::InvalidAnswers(format!("{id}: {raw}")))?;
            answers.insert(id.clone(), level);
        }
        Ok(AnswerMap(answers))
    }
}

impl<S: Into<String>> FromIterator<(S, ResponseLevel)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (S, ResponseLevel)>>(iter: I) -> Self {
        AnswerMap(iter.into_iter().map(|(id, value)| (id.into(), value)).collect())
    }
}

impl From<BTreeMap<String, ResponseLevel>> for AnswerMap {
    fn from(map: BTreeMap<String, ResponseLevel>) -> Self {
        AnswerMap(map)
    }
}
