use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Brown-model executive-function cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Cluster {
    Activation,
    Focus,
    Effort,
    Emotion,
    Memory,
    Action,
}

impl Cluster {
    pub fn display_name(&self) -> &'static str {
        match self {
            Cluster::Activation => "Activation",
            Cluster::Focus => "Attention/Focus",
            Cluster::Effort => "Effort/Energy",
            Cluster::Emotion => "Emotional regulation",
            Cluster::Memory => "Working memory",
            Cluster::Action => "Inhibition/Action",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        }
    }

    /// Moderate or High.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Severity::Moderate | Severity::High)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterScore {
    pub cluster: Cluster,
    pub score: u32,
    /// Answered items × 3. Zero when nothing in the cluster was answered.
    pub max_score: u32,
}

impl ClusterScore {
    pub fn display_name(&self) -> &'static str {
        self.cluster.display_name()
    }

    pub fn is_impaired(&self) -> bool {
        self.max_score > 0 && f64::from(self.score) / f64::from(self.max_score) >= 0.5
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecResult {
    /// One entry per cluster, in cluster-definition order.
    pub cluster_scores: Vec<ClusterScore>,
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub most_impaired_clusters: Vec<Cluster>,
    pub severity: Severity,
    pub interpretation: ExecInterpretation,
}

impl ExecResult {
    pub fn cluster(&self, cluster: Cluster) -> Option<&ClusterScore> {
        self.cluster_scores.iter().find(|c| c.cluster == cluster)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecInterpretation {
    pub severity: Severity,
    pub impaired: Vec<Cluster>,
}
