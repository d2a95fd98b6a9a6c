use std::path::Path;

use attend_core::models::answers::AnswerMap;
use attend_core::models::synthesis::GlobalAssessment;
use attend_export::prose;
use attend_export::report::{self, ReportContext};
use attend_instruments::catalog::Catalog;
use attend_instruments::error::InstrumentError;
use attend_instruments::scoring::ValidationError;
use attend_instruments::{
    all_instruments, get_instrument, score_executive_clusters, score_primary_screener,
    score_structured_criteria, synthesize,
};
use tracing::info;

use crate::config::{AttendConfig, OutputFormat};

pub fn read_answers(path: &Path) -> eyre::Result<AnswerMap> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
    let answers = AnswerMap::from_json(&contents)?;
    info!(path = %path.display(), count = answers.len(), "answers loaded");
    Ok(answers)
}

/// Run all three scorers over one snapshot and synthesize the result.
pub fn assess(answers: &AnswerMap, catalog: &Catalog) -> GlobalAssessment {
    synthesize(
        score_primary_screener(answers, &catalog.asrs),
        score_structured_criteria(answers, &catalog.criteria),
        score_executive_clusters(answers, &catalog.executive),
    )
}

/// Every out-of-scale answer, across all questionnaires.
pub fn validate(answers: &AnswerMap) -> Vec<ValidationError> {
    all_instruments()
        .iter()
        .flat_map(|instrument| instrument.validate_answers(answers))
        .collect()
}

/// Score `answers` and format the assessment.
pub fn score(
    answers: &AnswerMap,
    config: &AttendConfig,
    format: OutputFormat,
    generated_at: jiff::Timestamp,
) -> eyre::Result<String> {
    let catalog = config.catalog()?;
    let assessment = assess(answers, &catalog);
    info!(
        positive = assessment.positive_indicator_count,
        confidence = assessment.confidence.label(),
        "assessment complete"
    );

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&assessment)?),
        OutputFormat::Text => Ok(render_text(&assessment)),
        OutputFormat::Report => {
            let ctx = ReportContext::build(&assessment, answers, generated_at);
            let rendered = match &config.template_path {
                Some(path) => {
                    let content = std::fs::read_to_string(path).map_err(|e| {
                        eyre::eyre!("failed to read template at {}: {e}", path.display())
                    })?;
                    let name = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("custom");
                    report::render_report(name, &content, &ctx)?
                }
                None => report::render_default(&ctx)?,
            };
            Ok(rendered)
        }
    }
}

fn render_text(assessment: &GlobalAssessment) -> String {
    let asrs = &assessment.asrs;
    let structured = &assessment.structured;
    let executive = &assessment.executive;

    let mut sections = vec![
        prose::synthesis_summary(&assessment.summary).trim_end().to_string(),
        format!(
            "Confidence: {}\n{}",
            assessment.confidence.label(),
            prose::recommendation(assessment.recommendation)
        ),
        format!(
            "ASRS v1.1\n{}\n{}\n{}",
            prose::asrs_headline(asrs),
            prose::asrs_interpretation(&asrs.interpretation),
            prose::recommendation(asrs.recommendation)
        ),
        format!(
            "DSM-5 criteria: {}\n{}",
            structured.presentation_type.label(),
            prose::criteria_interpretation(&structured.interpretation)
        ),
    ];

    let clusters: Vec<_> = executive
        .cluster_scores
        .iter()
        .map(|c| format!("  {}: {}/{}", c.display_name(), c.score, c.max_score))
        .collect();
    sections.push(format!(
        "Executive functions: {} ({:.1}%)\n{}\n{}",
        executive.severity.label(),
        executive.percentage,
        clusters.join("\n"),
        prose::exec_interpretation(&executive.interpretation)
    ));

    sections.push(prose::DISCLAIMER.to_string());
    let mut text = sections.join("\n\n");
    text.push('\n');
    text
}

/// List questionnaire items, for one instrument or all of them.
pub fn questions(instrument: Option<&str>) -> eyre::Result<String> {
    let instruments = match instrument {
        Some(id) => vec![
            get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))?,
        ],
        None => all_instruments(),
    };

    let mut output = String::new();
    for instrument in instruments {
        let scale = instrument.scale();
        let options: Vec<_> = scale
            .options()
            .iter()
            .enumerate()
            .map(|(value, label)| format!("{value}={label}"))
            .collect();
        output.push_str(&format!(
            "{} ({})\nScale: {}\n",
            instrument.name(),
            instrument.id(),
            options.join(", ")
        ));
        for question in instrument.questions() {
            output.push_str(&format!("  {:<12} {}\n", question.id, question.text));
        }
        output.push('\n');
    }
    Ok(output)
}
