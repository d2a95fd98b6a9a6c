//! attend-instruments
//!
//! Questionnaire definitions and scoring for adult ADHD screening. Pure
//! functions over an [`AnswerMap`] snapshot and a read-only [`Catalog`]: no
//! I/O, no shared mutable state, safe to call concurrently.

pub mod catalog;
pub mod error;
pub mod instruments;
pub mod scoring;
pub mod synthesis;

use attend_core::models::answers::AnswerMap;
use attend_core::models::question::{Question, ResponseScale};
use scoring::{ScoreRange, ValidationError};

pub use catalog::Catalog;
pub use instruments::asrs::score_primary_screener;
pub use instruments::criteria::score_structured_criteria;
pub use instruments::executive::score_executive_clusters;
pub use synthesis::synthesize;

/// Trait implemented by each self-report questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "asrs").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "ASRS v1.1").
    fn name(&self) -> &str;

    /// The response scale every item of this questionnaire is answered on.
    fn scale(&self) -> ResponseScale;

    /// Items in presentation order.
    fn questions(&self) -> &[Question];

    /// Report answers to this instrument's items that fall outside its scale.
    ///
    /// Ids that do not belong to the instrument are ignored. The scorers
    /// never call this; it is offered to the layer that collects answers.
    fn validate_answers(&self, answers: &AnswerMap) -> Vec<ValidationError> {
        let scale = self.scale();
        let mut errors = Vec::new();
        for question in self.questions() {
            if let Some(value) = answers.get(&question.id)
                && !scale.contains(value)
            {
                errors.push(ValidationError {
                    question_id: question.id.clone(),
                    value,
                    expected_range: ScoreRange::from(scale),
                    scale,
                    message: format!(
                        "{}: {} answer {} is outside range [{}, {}]",
                        self.name(),
                        question.id,
                        value,
                        scale.min(),
                        scale.max(),
                    ),
                });
            }
        }
        errors
    }

    /// Format the answered items as structured text, grouped by category.
    fn to_structured_input(&self, answers: &AnswerMap) -> String {
        let scale = self.scale();
        let mut output = format!("## {}\n\n", self.name());
        let mut current = None;
        for question in self.questions() {
            let Some(value) = answers.get(&question.id) else {
                continue;
            };
            if current != Some(question.category) {
                if current.is_some() {
                    output.push('\n');
                }
                output.push_str(&format!("### {}\n", question.category.label()));
                current = Some(question.category);
            }
            let label = scale.option_label(value).unwrap_or("?");
            match question.subcategory {
                Some(sub) => output.push_str(&format!(
                    "- [{}] {}: {} ({})\n",
                    sub.label(),
                    question.text,
                    label,
                    value
                )),
                None => output.push_str(&format!("- {}: {} ({})\n", question.text, label, value)),
            }
        }
        if current.is_some() {
            output.push('\n');
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::asrs::Asrs),
        Box::new(instruments::criteria::StructuredCriteria),
        Box::new(instruments::executive::ExecutiveFunctions),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
