//! Permitted-name sets and the per-model configuration they are built from.
//!
//! A `RansackConfig` is assembled once, when a model type is first asked for
//! its whitelist, and never changes afterwards. The effective attribute set
//! (baseline plus configured) is computed at build time, so every read is a
//! plain borrow.

use serde::Serialize;
use std::collections::BTreeSet;
use std::collections::btree_set;

/// Attributes every ransackable model may be filtered and sorted by.
pub const DEFAULT_ATTRIBUTES: [&str; 3] = ["id", "updated_at", "created_at"];

/// An allow-list of names. Order is insignificant and duplicates collapse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Whitelist(BTreeSet<String>);

impl Whitelist {
    pub fn new() -> Self {
        Whitelist(BTreeSet::new())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Set union; entries present in both sides appear once.
    pub fn union(&self, other: &Whitelist) -> Whitelist {
        Whitelist(self.0.union(&other.0).cloned().collect())
    }

    pub fn is_subset(&self, other: &Whitelist) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl<S: Into<String>> FromIterator<S> for Whitelist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Whitelist(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Whitelist {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Whitelist {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Type-level ransack configuration of a single model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RansackConfig {
    associations: Whitelist,
    configured_attributes: Whitelist,
    default_attributes: Whitelist,
    scopes: Whitelist,
    effective_attributes: Whitelist,
}

impl Default for RansackConfig {
    fn default() -> Self {
        RansackConfig::builder().build()
    }
}

impl RansackConfig {
    pub fn builder() -> RansackConfigBuilder {
        RansackConfigBuilder::default()
    }

    /// Configured associations, empty when none were declared.
    pub fn associations(&self) -> &Whitelist {
        &self.associations
    }

    /// Baseline attributes united with the configured ones.
    pub fn attributes(&self) -> &Whitelist {
        &self.effective_attributes
    }

    /// Configured scopes, empty when none were declared.
    pub fn scopes(&self) -> &Whitelist {
        &self.scopes
    }

    pub fn configured_attributes(&self) -> &Whitelist {
        &self.configured_attributes
    }

    pub fn default_attributes(&self) -> &Whitelist {
        &self.default_attributes
    }
}

/// Builder for `RansackConfig`. Unset fields stay empty, except the baseline
/// which starts as `DEFAULT_ATTRIBUTES`.
#[derive(Clone, Debug)]
pub struct RansackConfigBuilder {
    associations: Whitelist,
    attributes: Whitelist,
    default_attributes: Whitelist,
    scopes: Whitelist,
}

impl Default for RansackConfigBuilder {
    fn default() -> Self {
        RansackConfigBuilder {
            associations: Whitelist::new(),
            attributes: Whitelist::new(),
            default_attributes: DEFAULT_ATTRIBUTES.into_iter().collect(),
            scopes: Whitelist::new(),
        }
    }
}

impl RansackConfigBuilder {
    pub fn associations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.associations = names.into_iter().collect();
        self
    }

    pub fn attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = names.into_iter().collect();
        self
    }

    /// Replace the baseline. Models normally keep `DEFAULT_ATTRIBUTES`.
    pub fn default_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_attributes = names.into_iter().collect();
        self
    }

    pub fn scopes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = names.into_iter().collect();
        self
    }

    pub fn build(self) -> RansackConfig {
        let effective_attributes = self.default_attributes.union(&self.attributes);
        RansackConfig {
            associations: self.associations,
            configured_attributes: self.attributes,
            default_attributes: self.default_attributes,
            scopes: self.scopes,
            effective_attributes,
        }
    }
}
