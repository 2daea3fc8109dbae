//! Analysis configuration loaded from YAML.
//!
//! One YAML file drives a whole analysis pass: the figure approval status
//! stamped on plots, the jet matching distance, whether to reuse a previous
//! preliminary result, and — for Pb-Pb runs — the constituent-subtraction
//! distances. Everything else in the file is a per-observable block whose
//! shape varies between analyses; those blocks are carried through as raw
//! YAML and converted to [`AttrBag`]s on demand.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::attrs::{AttrBag, AttrValue};
use crate::error::{JetkitError, Result};

/// Constituent-subtraction settings. Present only in Pb-Pb configurations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConstituentSubtractor {
    /// Subtraction distances R_max to run, one output set per entry.
    pub max_distance: Vec<f64>,

    /// The distance used for the headline result, when one is singled out.
    #[serde(default)]
    pub main_r_max: Option<f64>,
}

/// Parsed analysis configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Approval status stamped on figures ("Work in progress",
    /// "Preliminary", ...).
    pub figure_approval_status: String,

    /// Maximum deltaR for matching detector-level to truth-level jets.
    pub jet_matching_distance: f64,

    /// Reuse the previous preliminary result in final comparisons.
    pub use_prev_prelim: bool,

    #[serde(default)]
    pub constituent_subtractor: Option<ConstituentSubtractor>,

    /// Reference pp results file, for Pb-Pb runs that overlay one.
    #[serde(default)]
    pub results_pp: Option<PathBuf>,

    /// Remaining top-level blocks, keyed by observable. Convert with
    /// [`AnalysisConfig::observable`].
    #[serde(flatten)]
    pub observables: BTreeMap<String, serde_yaml::Value>,
}

impl AnalysisConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Whether this is a pp configuration. Pb-Pb runs declare a constituent
    /// subtractor; pp runs do not.
    pub fn is_pp(&self) -> bool {
        self.constituent_subtractor.is_none()
    }

    /// The configured subtraction distances; empty for pp.
    pub fn max_distances(&self) -> &[f64] {
        self.constituent_subtractor
            .as_ref()
            .map(|cs| cs.max_distance.as_slice())
            .unwrap_or(&[])
    }

    /// Convert the named observable block into an attribute bag labeled
    /// with `key`. Returns `None` when no such block exists.
    pub fn observable(&self, key: &str) -> Option<Result<AttrBag>> {
        let block = self.observables.get(key)?;
        Some(block_to_bag(key, block))
    }

    /// The plot-overlay grouping lists declared under the observable's
    /// `common_settings` block; empty when absent.
    pub fn overlay_groups(&self, observable: &str) -> Vec<Vec<String>> {
        let groups = self
            .observables
            .get(observable)
            .and_then(|block| block.get("common_settings"))
            .and_then(|settings| settings.get("plot_overlay_list"))
            .and_then(|value| value.as_sequence());
        let Some(groups) = groups else {
            return Vec::new();
        };
        groups
            .iter()
            .filter_map(|group| group.as_sequence())
            .map(|group| {
                group
                    .iter()
                    .filter_map(|entry| entry.as_str().map(String::from))
                    .collect()
            })
            .collect()
    }

    /// One output subdirectory per subtraction distance, as
    /// `base/Rmax{distance}`. Path composition only; nothing is created.
    pub fn r_max_dirs(&self, base: impl AsRef<Path>) -> Vec<PathBuf> {
        self.max_distances()
            .iter()
            .map(|distance| base.as_ref().join(format!("Rmax{distance}")))
            .collect()
    }
}

fn block_to_bag(key: &str, block: &serde_yaml::Value) -> Result<AttrBag> {
    let mut builder = AttrBag::builder(key);
    match block {
        serde_yaml::Value::Mapping(map) => {
            for (attr_key, value) in map {
                let attr_key = attr_key.as_str().ok_or_else(|| {
                    JetkitError::Attr(format!("non-string key in observable block '{key}'"))
                })?;
                builder = builder.attr(attr_key, AttrValue::try_from(value.clone())?);
            }
        }
        // Scalar blocks become a single-attribute bag.
        other => {
            builder = builder.attr("value", AttrValue::try_from(other.clone())?);
        }
    }
    Ok(builder.build())
}
