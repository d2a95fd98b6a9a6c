use serde::Serialize;
use tera::{Context, Tera};

use attend_core::models::answers::AnswerMap;
use attend_core::models::synthesis::GlobalAssessment;
use attend_instruments::all_instruments;

use crate::error::ExportError;
use crate::prose;

/// Built-in Markdown report.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.md.tera");
pub const DEFAULT_TEMPLATE_NAME: &str = "report.md";

/// Everything a report template can address, already phrased.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub generated_at: String,
    pub disclaimer: &'static str,
    pub summary: String,
    pub recommendation: &'static str,
    pub confidence: &'static str,
    pub positive_indicator_count: u32,
    pub asrs: AsrsSection,
    pub criteria: CriteriaSection,
    pub executive: ExecSection,
    pub annex: Vec<AnnexSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AsrsSection {
    pub headline: String,
    pub part_a_score: u32,
    pub part_a_shaded_count: u32,
    pub part_b_score: u32,
    pub total_score: u32,
    pub inattention_score: u32,
    pub hyperactivity_score: u32,
    pub screening_positive: bool,
    pub interpretation: String,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriteriaSection {
    pub inattention_count: u32,
    pub hyperactivity_count: u32,
    pub childhood_count: u32,
    pub childhood_positive: bool,
    pub impairment_domains: Vec<&'static str>,
    pub presentation: &'static str,
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecSection {
    pub clusters: Vec<ClusterRow>,
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: String,
    pub severity: &'static str,
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClusterRow {
    pub name: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub impaired: bool,
}

/// Answers to one questionnaire, in question order. Unanswered items are
/// listed with an empty answer.
#[derive(Debug, Clone, Serialize)]
pub struct AnnexSection {
    pub instrument: String,
    pub rows: Vec<AnnexRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnexRow {
    pub id: String,
    pub text: String,
    pub answer: String,
}

impl ReportContext {
    /// Assemble a report context. `generated_at` is supplied by the caller so
    /// that building the context stays deterministic.
    pub fn build(
        assessment: &GlobalAssessment,
        answers: &AnswerMap,
        generated_at: jiff::Timestamp,
    ) -> Self {
        let asrs = &assessment.asrs;
        let structured = &assessment.structured;
        let executive = &assessment.executive;

        ReportContext {
            generated_at: generated_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
            disclaimer: prose::DISCLAIMER,
            summary: prose::synthesis_summary(&assessment.summary),
            recommendation: prose::recommendation(assessment.recommendation),
            confidence: assessment.confidence.label(),
            positive_indicator_count: assessment.positive_indicator_count,
            asrs: AsrsSection {
                headline: prose::asrs_headline(asrs),
                part_a_score: asrs.part_a_score,
                part_a_shaded_count: asrs.part_a_shaded_count,
                part_b_score: asrs.part_b_score,
                total_score: asrs.total_score,
                inattention_score: asrs.inattention_score,
                hyperactivity_score: asrs.hyperactivity_score,
                screening_positive: asrs.screening_positive,
                interpretation: prose::asrs_interpretation(&asrs.interpretation),
                recommendation: prose::recommendation(asrs.recommendation),
            },
            criteria: CriteriaSection {
                inattention_count: structured.inattention_count,
                hyperactivity_count: structured.hyperactivity_count,
                childhood_count: structured.childhood_count,
                childhood_positive: structured.childhood_positive,
                impairment_domains: structured
                    .impairment_domains
                    .iter()
                    .map(|d| d.label())
                    .collect(),
                presentation: structured.presentation_type.label(),
                interpretation: prose::criteria_interpretation(&structured.interpretation),
            },
            executive: ExecSection {
                clusters: executive
                    .cluster_scores
                    .iter()
                    .map(|c| ClusterRow {
                        name: c.display_name(),
                        score: c.score,
                        max_score: c.max_score,
                        impaired: c.is_impaired(),
                    })
                    .collect(),
                total_score: executive.total_score,
                max_score: executive.max_score,
                percentage: format!("{:.1}", executive.percentage),
                severity: executive.severity.label(),
                interpretation: prose::exec_interpretation(&executive.interpretation),
            },
            annex: build_annex(answers),
        }
    }
}

fn build_annex(answers: &AnswerMap) -> Vec<AnnexSection> {
    all_instruments()
        .iter()
        .map(|instrument| {
            let scale = instrument.scale();
            let rows = instrument
                .questions()
                .iter()
                .map(|q| AnnexRow {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    answer: answers
                        .get(&q.id)
                        .map(|v| scale.option_label(v).unwrap_or("?").to_string())
                        .unwrap_or_default(),
                })
                .collect();
            AnnexSection {
                instrument: instrument.name().to_string(),
                rows,
            }
        })
        .collect()
}

/// Render a Tera template with a [`ReportContext`].
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// context fields become the template variables.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Render the built-in Markdown report.
pub fn render_default(context: &ReportContext) -> Result<String, ExportError> {
    render_report(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, context)
}
