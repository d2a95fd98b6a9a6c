use attend_core::models::answers::AnswerMap;
use attend_core::models::asrs::{AsrsInterpretation, AsrsResult};
use attend_core::models::question::{Category, Question, ResponseScale, Subcategory};
use attend_core::models::recommendation::Recommendation;
use tracing::debug;

use crate::catalog::AsrsCatalog;
use crate::scoring::item_number;
use crate::Instrument;

/// Items 1 through 6 form the Part-A screener.
const PART_A_ITEMS: u32 = 6;

/// Shaded Part-A answers needed for a positive screen.
const POSITIVE_SHADED_COUNT: u32 = 4;

/// Half of the 72-point maximum.
const BORDERLINE_TOTAL: u32 = 36;

/// Item numbers summed into the inattention sub-score. Every other item goes
/// to hyperactivity/impulsivity. This partition is fixed and does not follow
/// the catalog's category field.
const INATTENTION_ITEMS: [u32; 9] = [1, 2, 3, 4, 7, 8, 9, 10, 11];

/// ASRS v1.1: WHO Adult ADHD Self-Report Scale.
/// 18 frequency items; Part A (items 1-6) is the validated screener.
pub struct Asrs;

impl Instrument for Asrs {
    fn id(&self) -> &str {
        "asrs"
    }

    fn name(&self) -> &str {
        "ASRS v1.1"
    }

    fn scale(&self) -> ResponseScale {
        ResponseScale::Frequency
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            use Category::{Hyperactivity, Impulsivity, Inattention};
            use Subcategory::{PartA, PartB};

            vec![
                item("asrs_1", "How often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?", Inattention, PartA),
                item("asrs_2", "How often do you have difficulty getting things in order when you have to do a task that requires organization?", Inattention, PartA),
                item("asrs_3", "How often do you have problems remembering appointments or obligations?", Inattention, PartA),
                item("asrs_4", "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?", Inattention, PartA),
                item("asrs_5", "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?", Hyperactivity, PartA),
                item("asrs_6", "How often do you feel overly active and compelled to do things, like you were driven by a motor?", Hyperactivity, PartA),
                item("asrs_7", "How often do you make careless mistakes when you have to work on a boring or difficult project?", Inattention, PartB),
                item("asrs_8", "How often do you have difficulty keeping your attention when you are doing boring or repetitive work?", Inattention, PartB),
                item("asrs_9", "How often do you have difficulty concentrating on what people say to you, even when they are speaking to you directly?", Inattention, PartB),
                item("asrs_10", "How often do you misplace or have difficulty finding things at home or at work?", Inattention, PartB),
                item("asrs_11", "How often are you distracted by activity or noise around you?", Inattention, PartB),
                item("asrs_12", "How often do you leave your seat in meetings or other situations in which you are expected to remain seated?", Hyperactivity, PartB),
                item("asrs_13", "How often do you feel restless or fidgety?", Hyperactivity, PartB),
                item("asrs_14", "How often do you have difficulty unwinding and relaxing when you have time to yourself?", Hyperactivity, PartB),
                item("asrs_15", "How often do you find yourself talking too much when you are in social situations?", Impulsivity, PartB),
                item("asrs_16", "When you're in a conversation, how often do you find yourself finishing the sentences of the people you are talking to, before they can finish them themselves?", Impulsivity, PartB),
                item("asrs_17", "How often do you have difficulty waiting your turn in situations when turn taking is required?", Impulsivity, PartB),
                item("asrs_18", "How often do you interrupt others when they are busy?", Impulsivity, PartB),
            ]
        });
        &QUESTIONS
    }
}

fn item(id: &str, text: &str, category: Category, part: Subcategory) -> Question {
    Question::new(id, text, category).with_subcategory(part)
}

/// Score the ASRS screener.
///
/// Answers outside the catalog's `asrs_` prefix are ignored, and absent items
/// contribute nothing. Part membership and the sub-dimension split are
/// decided by item number, so the result does not depend on the order in
/// which answers were given.
pub fn score_primary_screener(answers: &AnswerMap, catalog: &AsrsCatalog) -> AsrsResult {
    let mut part_a_score = 0u32;
    let mut part_a_shaded_count = 0u32;
    let mut part_b_score = 0u32;
    let mut inattention_score = 0u32;
    let mut hyperactivity_score = 0u32;

    for (id, value) in answers.with_prefix(&catalog.prefix) {
        let Some(number) = item_number(id, &catalog.prefix) else {
            debug!(id, "ignoring unrecognised ASRS id");
            continue;
        };

        if number <= PART_A_ITEMS {
            part_a_score = part_a_score.saturating_add(value);
            if value >= catalog.shading_threshold(id) {
                part_a_shaded_count += 1;
            }
        } else {
            part_b_score = part_b_score.saturating_add(value);
        }

        if INATTENTION_ITEMS.contains(&number) {
            inattention_score = inattention_score.saturating_add(value);
        } else {
            hyperactivity_score = hyperactivity_score.saturating_add(value);
        }
    }

    let total_score = part_a_score.saturating_add(part_b_score);
    let screening_positive = part_a_shaded_count >= POSITIVE_SHADED_COUNT;

    let (interpretation, recommendation) = if screening_positive {
        (
            AsrsInterpretation::Positive {
                shaded_count: part_a_shaded_count,
            },
            Recommendation::SpecialistEvaluation,
        )
    } else if total_score >= BORDERLINE_TOTAL {
        (
            AsrsInterpretation::Borderline { total_score },
            Recommendation::ConsultIfImpairing,
        )
    } else {
        (
            AsrsInterpretation::Negative { total_score },
            Recommendation::DiscussIfConcerned,
        )
    };

    debug!(
        part_a_score,
        part_a_shaded_count, total_score, screening_positive, "scored ASRS"
    );

    AsrsResult {
        part_a_score,
        part_a_shaded_count,
        part_b_score,
        total_score,
        inattention_score,
        hyperactivity_score,
        screening_positive,
        interpretation,
        recommendation,
    }
}
