use attend_core::models::answers::AnswerMap;
use attend_core::models::executive::{ClusterScore, ExecInterpretation, ExecResult, Severity};
use attend_core::models::question::{Category, Question, ResponseScale};
use tracing::debug;

use crate::catalog::ExecCatalog;
use crate::scoring::item_number;
use crate::Instrument;

const HIGH_PERCENTAGE: f64 = 66.0;
const MODERATE_PERCENTAGE: f64 = 40.0;

/// Executive-function questionnaire after Brown's six-cluster model.
/// Four items per cluster, rated 0 (not a problem) to 3 (often a problem).
pub struct ExecutiveFunctions;

impl Instrument for ExecutiveFunctions {
    fn id(&self) -> &str {
        "executive_functions"
    }

    fn name(&self) -> &str {
        "Executive Functions"
    }

    fn scale(&self) -> ResponseScale {
        ResponseScale::ProblemSeverity
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            use Category::{Action, Activation, Effort, Emotion, Focus, Memory};

            vec![
                Question::new("ef_act_1", "Difficulty organizing and planning tasks or projects", Activation),
                Question::new("ef_act_2", "Difficulty prioritizing between tasks", Activation),
                Question::new("ef_act_3", "Difficulty getting started on a task, even an important one", Activation),
                Question::new("ef_act_4", "Tendency to procrastinate, putting tasks off until tomorrow", Activation),
                Question::new("ef_foc_1", "Difficulty keeping attention on a task until it is finished", Focus),
                Question::new("ef_foc_2", "Easily distracted by irrelevant thoughts or stimuli", Focus),
                Question::new("ef_foc_3", "Difficulty listening to and retaining what is said in conversations", Focus),
                Question::new("ef_foc_4", "Moving from one activity to the next without finishing any", Focus),
                Question::new("ef_eff_1", "Drowsiness or mental fatigue during unstimulating tasks", Effort),
                Question::new("ef_eff_2", "Difficulty keeping a steady energy level throughout the day", Effort),
                Question::new("ef_eff_3", "Excessive slowness in completing routine tasks", Effort),
                Question::new("ef_eff_4", "Needing intense stimulation to stay motivated", Effort),
                Question::new("ef_emo_1", "Excessive or disproportionate emotional reactions", Emotion),
                Question::new("ef_emo_2", "Difficulty managing frustration and irritability", Emotion),
                Question::new("ef_emo_3", "Excessive sensitivity to criticism or negative comments", Emotion),
                Question::new("ef_emo_4", "Frequent mood swings over the course of the day", Emotion),
                Question::new("ef_mem_1", "Forgetting what you just read and having to reread it several times", Memory),
                Question::new("ef_mem_2", "Difficulty remembering instructions given verbally", Memory),
                Question::new("ef_mem_3", "Frequently forgetting appointments or planned tasks", Memory),
                Question::new("ef_mem_4", "Losing your train of thought mid-sentence or mid-action", Memory),
                Question::new("ef_act2_1", "Acting or speaking impulsively without thinking about the consequences", Action),
                Question::new("ef_act2_2", "Difficulty staying seated or keeping still", Action),
                Question::new("ef_act2_3", "Interrupting others or intruding in conversations", Action),
                Question::new("ef_act2_4", "Difficulty controlling impulses (spending, eating, etc.)", Action),
            ]
        });
        &QUESTIONS
    }
}

/// Score the six executive-function clusters.
///
/// A cluster's maximum is three points per *answered* item, so partially
/// answered clusters are judged against a proportionally lower ceiling and an
/// unanswered cluster has a maximum of zero and is never impaired. Only
/// canonical `<prefix><n>` ids are counted.
pub fn score_executive_clusters(answers: &AnswerMap, catalog: &ExecCatalog) -> ExecResult {
    let per_item_max = ResponseScale::ProblemSeverity.max();

    let cluster_scores: Vec<ClusterScore> = catalog
        .clusters
        .iter()
        .map(|entry| {
            let (score, count) = answers
                .with_prefix(&entry.prefix)
                .filter(|(id, _)| item_number(id, &entry.prefix).is_some())
                .fold((0u32, 0u32), |(score, count), (_, value)| {
                    (score.saturating_add(value), count + 1)
                });
            ClusterScore {
                cluster: entry.cluster,
                score,
                max_score: count.saturating_mul(per_item_max),
            }
        })
        .collect();

    let total_score = cluster_scores
        .iter()
        .fold(0u32, |acc, c| acc.saturating_add(c.score));
    let max_score = cluster_scores
        .iter()
        .fold(0u32, |acc, c| acc.saturating_add(c.max_score));

    let most_impaired_clusters: Vec<_> = cluster_scores
        .iter()
        .filter(|c| c.is_impaired())
        .map(|c| c.cluster)
        .collect();

    let percentage = if max_score > 0 {
        f64::from(total_score) / f64::from(max_score) * 100.0
    } else {
        0.0
    };
    let severity = severity_for(percentage);

    debug!(
        total_score,
        max_score,
        percentage,
        severity = severity.label(),
        impaired = most_impaired_clusters.len(),
        "scored executive clusters"
    );

    ExecResult {
        cluster_scores,
        total_score,
        max_score,
        percentage,
        interpretation: ExecInterpretation {
            severity,
            impaired: most_impaired_clusters.clone(),
        },
        most_impaired_clusters,
        severity,
    }
}

fn severity_for(percentage: f64) -> Severity {
    if percentage >= HIGH_PERCENTAGE {
        Severity::High
    } else if percentage >= MODERATE_PERCENTAGE {
        Severity::Moderate
    } else {
        Severity::Low
    }
}
