use attend_core::models::answers::AnswerMap;
use attend_core::models::criteria::{
    CriteriaInterpretation, Criterion, CriterionStatus, ImpairmentDomain, PresentationType,
    StructuredResult,
};
use attend_core::models::question::{Category, Question, ResponseScale, Subcategory};
use tracing::debug;

use crate::catalog::CriteriaCatalog;
use crate::scoring::item_number;
use crate::Instrument;

/// Symptoms asked per DSM-5 criterion list (A1 and A2).
const SYMPTOM_ITEMS: u32 = 9;
/// DSM-5 adult threshold (17 and older).
const REQUIRED_SYMPTOMS: u32 = 5;
const CHILDHOOD_ITEMS: u32 = 5;
const REQUIRED_CHILDHOOD: u32 = 2;
const REQUIRED_DOMAINS: u32 = 2;

/// Only a "Yes" counts as endorsed.
const ENDORSED: u32 = 1;

/// DIVA-style structured interview over the DSM-5 criteria for adult ADHD:
/// nine inattention symptoms, nine hyperactivity/impulsivity symptoms,
/// childhood onset and functional impairment. Yes/No answers.
pub struct StructuredCriteria;

impl Instrument for StructuredCriteria {
    fn id(&self) -> &str {
        "structured_criteria"
    }

    fn name(&self) -> &str {
        "DSM-5 Structured Criteria"
    }

    fn scale(&self) -> ResponseScale {
        ResponseScale::YesNo
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            use Category::{Childhood, Hyperactivity, Impairment, Impulsivity, Inattention};

            vec![
                // A1: inattention
                Question::new("diva_ia_1", "Do you often fail to pay close attention to details, or make careless mistakes at work or in other activities? (e.g. overlooking details, inaccurate work, errors in forms or reports)", Inattention),
                Question::new("diva_ia_2", "Do you often have difficulty sustaining attention on tasks or activities? (e.g. staying focused during meetings, reading, long conversations)", Inattention),
                Question::new("diva_ia_3", "Do you often seem not to listen when spoken to directly? (e.g. mind elsewhere, even without an obvious distraction)", Inattention),
                Question::new("diva_ia_4", "Do you often fail to follow through on instructions and finish work tasks or duties? (e.g. starting tasks but quickly losing focus)", Inattention),
                Question::new("diva_ia_5", "Do you often have difficulty organizing tasks and activities? (e.g. managing sequential tasks, keeping things in order, meeting deadlines, managing time)", Inattention),
                Question::new("diva_ia_6", "Do you often avoid, or are you reluctant to engage in, tasks that require sustained mental effort? (e.g. preparing reports, completing forms, reviewing long documents)", Inattention),
                Question::new("diva_ia_7", "Do you often lose things necessary for your activities? (e.g. keys, wallet, phone, paperwork, glasses)", Inattention),
                Question::new("diva_ia_8", "Are you often easily distracted by external stimuli or unrelated thoughts?", Inattention),
                Question::new("diva_ia_9", "Are you often forgetful in daily activities? (e.g. returning calls, paying bills, keeping appointments)", Inattention),
                // A2: hyperactivity / impulsivity
                Question::new("diva_hi_1", "Do you often fidget with or tap your hands or feet, or squirm in your seat?", Hyperactivity),
                Question::new("diva_hi_2", "Do you often leave your seat in situations when remaining seated is expected? (e.g. leaving your place at the office or in meetings)", Hyperactivity),
                Question::new("diva_hi_3", "Do you often feel restless, or find it hard to stay put? (e.g. impatience, discomfort when staying still for long)", Hyperactivity),
                Question::new("diva_hi_4", "Are you often unable to engage in leisure activities quietly?", Hyperactivity),
                Question::new("diva_hi_5", "Are you often \"on the go\", acting as if \"driven by a motor\"? (e.g. uncomfortable being still for long, seen as restless by others)", Hyperactivity),
                Question::new("diva_hi_6", "Do you often talk excessively?", Impulsivity),
                Question::new("diva_hi_7", "Do you often blurt out an answer before a question has been completed? (e.g. completing people's sentences, not waiting your turn in conversation)", Impulsivity),
                Question::new("diva_hi_8", "Do you often have difficulty waiting your turn? (e.g. waiting in line)", Impulsivity),
                Question::new("diva_hi_9", "Do you often interrupt or intrude on others? (e.g. butting into conversations or activities, using other people's things without asking)", Impulsivity),
                // B: before age 12
                Question::new("diva_child_1", "Before age 12, did you have difficulty staying attentive at school or during homework?", Childhood),
                Question::new("diva_child_2", "Before age 12, were you considered a dreamy child, \"head in the clouds\"?", Childhood),
                Question::new("diva_child_3", "Before age 12, did you have trouble staying seated, or were you restless at school?", Childhood),
                Question::new("diva_child_4", "Before age 12, did your school reports often comment on your attention or behaviour?", Childhood),
                Question::new("diva_child_5", "Before age 12, did you often lose school things or forget to do your homework?", Childhood),
                // C/D: impairment
                Question::new("diva_imp_1", "Do these difficulties have a negative impact on your work or studies?", Impairment).with_subcategory(Subcategory::Work),
                Question::new("diva_imp_2", "Do these difficulties have a negative impact on your family or romantic relationships?", Impairment).with_subcategory(Subcategory::Family),
                Question::new("diva_imp_3", "Do these difficulties have a negative impact on your social life and friendships?", Impairment).with_subcategory(Subcategory::Social),
                Question::new("diva_imp_4", "Do these difficulties have a negative impact on your leisure and free-time activities?", Impairment).with_subcategory(Subcategory::Leisure),
                Question::new("diva_imp_5", "Do these difficulties have a negative impact on your self-esteem or self-confidence?", Impairment).with_subcategory(Subcategory::SelfEsteem),
            ]
        });
        &QUESTIONS
    }
}

/// Evaluate the DSM-5 criteria.
///
/// Each family is counted independently over its own id prefix. The four
/// criteria are all evaluated; childhood onset and impairment are reported
/// alongside the presentation type but never change it.
pub fn score_structured_criteria(
    answers: &AnswerMap,
    catalog: &CriteriaCatalog,
) -> StructuredResult {
    let inattention_count = count_endorsed(answers, &catalog.inattention_prefix);
    let hyperactivity_count = count_endorsed(answers, &catalog.hyperactivity_prefix);
    let childhood_count = count_endorsed(answers, &catalog.childhood_prefix);
    let impairment_domains = endorsed_domains(answers, catalog);

    let meets_inattention_criteria = inattention_count >= REQUIRED_SYMPTOMS;
    let meets_hyperactivity_criteria = hyperactivity_count >= REQUIRED_SYMPTOMS;
    let childhood_positive = childhood_count >= REQUIRED_CHILDHOOD;
    let domain_count = impairment_domains.len() as u32;
    let meets_impairment_criteria = domain_count >= REQUIRED_DOMAINS;

    let presentation_type = match (meets_inattention_criteria, meets_hyperactivity_criteria) {
        (true, true) => PresentationType::Combined,
        (true, false) => PresentationType::PredominantlyInattentive,
        (false, true) => PresentationType::PredominantlyHyperactiveImpulsive,
        (false, false) => PresentationType::BelowThreshold,
    };

    let statuses = [
        CriterionStatus {
            criterion: Criterion::Inattention,
            observed: inattention_count,
            possible: Some(SYMPTOM_ITEMS),
            required: REQUIRED_SYMPTOMS,
            met: meets_inattention_criteria,
        },
        CriterionStatus {
            criterion: Criterion::HyperactivityImpulsivity,
            observed: hyperactivity_count,
            possible: Some(SYMPTOM_ITEMS),
            required: REQUIRED_SYMPTOMS,
            met: meets_hyperactivity_criteria,
        },
        CriterionStatus {
            criterion: Criterion::ChildhoodOnset,
            observed: childhood_count,
            possible: Some(CHILDHOOD_ITEMS),
            required: REQUIRED_CHILDHOOD,
            met: childhood_positive,
        },
        CriterionStatus {
            criterion: Criterion::Impairment,
            observed: domain_count,
            possible: None,
            required: REQUIRED_DOMAINS,
            met: meets_impairment_criteria,
        },
    ];

    let mut interpretation = CriteriaInterpretation::default();
    for status in statuses {
        if status.met {
            interpretation.met.push(status);
        } else {
            interpretation.not_met.push(status);
        }
    }

    debug!(
        inattention_count,
        hyperactivity_count,
        childhood_count,
        domain_count,
        presentation = presentation_type.label(),
        "scored structured criteria"
    );

    StructuredResult {
        inattention_count,
        hyperactivity_count,
        childhood_count,
        childhood_positive,
        impairment_domains,
        meets_inattention_criteria,
        meets_hyperactivity_criteria,
        meets_impairment_criteria,
        presentation_type,
        interpretation,
    }
}

/// Endorsed canonical items of one family. `diva_ia_01` or `diva_ia_x` are
/// not items, so a count never exceeds the family's real item ids.
fn count_endorsed(answers: &AnswerMap, prefix: &str) -> u32 {
    answers
        .with_prefix(prefix)
        .filter(|(id, value)| *value == ENDORSED && item_number(id, prefix).is_some())
        .count() as u32
}

/// Distinct endorsed domains in catalog order. Endorsed ids missing from the
/// domain table are skipped.
fn endorsed_domains(answers: &AnswerMap, catalog: &CriteriaCatalog) -> Vec<ImpairmentDomain> {
    for (id, value) in answers.with_prefix(&catalog.impairment_prefix) {
        if value == ENDORSED && catalog.domain_for(id).is_none() {
            debug!(id, "endorsed impairment item has no domain label");
        }
    }

    let mut domains = Vec::new();
    for item in &catalog.impairment_domains {
        if item.id.starts_with(&catalog.impairment_prefix)
            && answers.get(&item.id) == Some(ENDORSED)
            && !domains.contains(&item.domain)
        {
            domains.push(item.domain);
        }
    }
    domains
}
