//! Static reference data the scorers close over: id prefixes, ASRS shading
//! thresholds, the impairment-domain table and the cluster-to-prefix mapping.
//!
//! A [`Catalog`] is plain data. Build it once (usually [`Catalog::default`],
//! optionally with [`CatalogOverrides`] from configuration) and share it
//! read-only across as many concurrent scorer calls as needed.

use std::collections::{BTreeMap, HashSet};

use attend_core::models::criteria::ImpairmentDomain;
use attend_core::models::executive::Cluster;
use serde::{Deserialize, Serialize};

use crate::error::InstrumentError;

/// Shading threshold for any Part-A item without an explicit entry.
pub const DEFAULT_SHADING_THRESHOLD: u32 = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub asrs: AsrsCatalog,
    pub criteria: CriteriaCatalog,
    pub executive: ExecCatalog,
}

impl Catalog {
    /// Layer configuration overrides on top of this catalog.
    pub fn with_overrides(mut self, overrides: &CatalogOverrides) -> Self {
        self.asrs.shading_thresholds.extend(
            overrides
                .shading_thresholds
                .iter()
                .map(|(id, threshold)| (id.clone(), *threshold)),
        );
        if let Some(default) = overrides.default_shading_threshold {
            self.asrs.default_shading_threshold = default;
        }
        self
    }

    /// Check that every prefix family is disjoint from the others.
    ///
    /// Overlapping prefixes would let one answer count toward two families.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        let mut prefixes = vec![
            self.asrs.prefix.as_str(),
            self.criteria.inattention_prefix.as_str(),
            self.criteria.hyperactivity_prefix.as_str(),
            self.criteria.childhood_prefix.as_str(),
            self.criteria.impairment_prefix.as_str(),
        ];
        prefixes.extend(self.executive.clusters.iter().map(|c| c.prefix.as_str()));

        for (i, &a) in prefixes.iter().enumerate() {
            if a.is_empty() {
                return Err(InstrumentError::InvalidCatalog("empty id prefix".to_string()));
            }
            for &b in &prefixes[i + 1..] {
                if a.starts_with(b) || b.starts_with(a) {
                    return Err(InstrumentError::InvalidCatalog(format!(
                        "prefixes '{a}' and '{b}' overlap"
                    )));
                }
            }
        }

        let mut seen = HashSet::new();
        for entry in &self.executive.clusters {
            if !seen.insert(entry.cluster) {
                return Err(InstrumentError::InvalidCatalog(format!(
                    "cluster '{}' is mapped more than once",
                    entry.cluster.display_name()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsrsCatalog {
    pub prefix: String,
    /// Minimum response level counted as shaded, keyed by item id.
    pub shading_thresholds: BTreeMap<String, u32>,
    #[serde(default = "default_shading_threshold")]
    pub default_shading_threshold: u32,
}

impl AsrsCatalog {
    pub fn shading_threshold(&self, id: &str) -> u32 {
        self.shading_thresholds
            .get(id)
            .copied()
            .unwrap_or(self.default_shading_threshold)
    }
}

impl Default for AsrsCatalog {
    fn default() -> Self {
        // Shaded boxes of the published screener: "Sometimes" and up for
        // items 1-3, "Often" and up for items 4-6.
        let shading_thresholds = [
            ("asrs_1", 2),
            ("asrs_2", 2),
            ("asrs_3", 2),
            ("asrs_4", 3),
            ("asrs_5", 3),
            ("asrs_6", 3),
        ]
        .into_iter()
        .map(|(id, threshold)| (id.to_string(), threshold))
        .collect();

        Self {
            prefix: "asrs_".to_string(),
            shading_thresholds,
            default_shading_threshold: DEFAULT_SHADING_THRESHOLD,
        }
    }
}

fn default_shading_threshold() -> u32 {
    DEFAULT_SHADING_THRESHOLD
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaCatalog {
    pub inattention_prefix: String,
    pub hyperactivity_prefix: String,
    pub childhood_prefix: String,
    pub impairment_prefix: String,
    /// Impairment item id to life domain, in report order.
    pub impairment_domains: Vec<DomainItem>,
}

impl CriteriaCatalog {
    pub fn domain_for(&self, id: &str) -> Option<ImpairmentDomain> {
        self.impairment_domains
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.domain)
    }
}

impl Default for CriteriaCatalog {
    fn default() -> Self {
        let impairment_domains = [
            ("diva_imp_1", ImpairmentDomain::WorkOrStudy),
            ("diva_imp_2", ImpairmentDomain::FamilyRelationships),
            ("diva_imp_3", ImpairmentDomain::SocialRelationships),
            ("diva_imp_4", ImpairmentDomain::Leisure),
            ("diva_imp_5", ImpairmentDomain::SelfEsteem),
        ]
        .into_iter()
        .map(|(id, domain)| DomainItem {
            id: id.to_string(),
            domain,
        })
        .collect();

        Self {
            inattention_prefix: "diva_ia_".to_string(),
            hyperactivity_prefix: "diva_hi_".to_string(),
            childhood_prefix: "diva_child_".to_string(),
            impairment_prefix: "diva_imp_".to_string(),
            impairment_domains,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainItem {
    pub id: String,
    pub domain: ImpairmentDomain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecCatalog {
    /// Clusters in definition order. Reports list clusters in this order.
    pub clusters: Vec<ClusterPrefix>,
}

impl Default for ExecCatalog {
    fn default() -> Self {
        let clusters = [
            (Cluster::Activation, "ef_act_"),
            (Cluster::Focus, "ef_foc_"),
            (Cluster::Effort, "ef_eff_"),
            (Cluster::Emotion, "ef_emo_"),
            (Cluster::Memory, "ef_mem_"),
            (Cluster::Action, "ef_act2_"),
        ]
        .into_iter()
        .map(|(cluster, prefix)| ClusterPrefix {
            cluster,
            prefix: prefix.to_string(),
        })
        .collect();

        Self { clusters }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterPrefix {
    pub cluster: Cluster,
    pub prefix: String,
}

/// Catalog adjustments a deployment may supply through configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOverrides {
    #[serde(default)]
    pub shading_thresholds: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_shading_threshold: Option<u32>,
}
