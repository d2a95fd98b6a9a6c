use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Result of the DSM-5 structured-criteria interview (DIVA-style).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StructuredResult {
    pub inattention_count: u32,
    pub hyperactivity_count: u32,
    pub childhood_count: u32,
    pub childhood_positive: bool,
    /// Distinct affected life domains, in catalog order.
    pub impairment_domains: Vec<ImpairmentDomain>,
    pub meets_inattention_criteria: bool,
    pub meets_hyperactivity_criteria: bool,
    pub meets_impairment_criteria: bool,
    pub presentation_type: PresentationType,
    pub interpretation: CriteriaInterpretation,
}

impl StructuredResult {
    /// Either symptom criterion (A1 or A2) is met.
    pub fn meets_symptom_criteria(&self) -> bool {
        self.meets_inattention_criteria || self.meets_hyperactivity_criteria
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImpairmentDomain {
    WorkOrStudy,
    FamilyRelationships,
    SocialRelationships,
    Leisure,
    SelfEsteem,
}

impl ImpairmentDomain {
    pub fn label(&self) -> &'static str {
        match self {
            ImpairmentDomain::WorkOrStudy => "Work/Studies",
            ImpairmentDomain::FamilyRelationships => "Family relationships",
            ImpairmentDomain::SocialRelationships => "Social relationships",
            ImpairmentDomain::Leisure => "Leisure",
            ImpairmentDomain::SelfEsteem => "Self-esteem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PresentationType {
    Combined,
    PredominantlyInattentive,
    PredominantlyHyperactiveImpulsive,
    BelowThreshold,
}

impl PresentationType {
    pub fn label(&self) -> &'static str {
        match self {
            PresentationType::Combined => "Combined",
            PresentationType::PredominantlyInattentive => "Predominantly Inattentive",
            PresentationType::PredominantlyHyperactiveImpulsive => {
                "Predominantly Hyperactive/Impulsive"
            }
            PresentationType::BelowThreshold => "Below diagnostic threshold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Criterion {
    /// A1
    Inattention,
    /// A2
    HyperactivityImpulsivity,
    /// B: symptoms present before age 12.
    ChildhoodOnset,
    /// C/D: impairment in two or more settings.
    Impairment,
}

/// How one criterion was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionStatus {
    pub criterion: Criterion,
    pub observed: u32,
    /// Number of items asked, when the criterion is a count over a fixed list.
    pub possible: Option<u32>,
    pub required: u32,
    pub met: bool,
}

/// Criteria split into met / not met, each in A1, A2, B, C/D order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriteriaInterpretation {
    pub met: Vec<CriterionStatus>,
    pub not_met: Vec<CriterionStatus>,
}
