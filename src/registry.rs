//! Lookup of ransack configuration by model name.
//!
//! Models declared with `ransackable!` submit a `Registration` through
//! `inventory`; `Registry::from_inventory` gathers them the same way
//! migrations are gathered for auto-migration. Callers that only know a model
//! by name (an HTTP filter form, for instance) go through the registry.

use crate::capability::Ransackable;
use crate::whitelist::RansackConfig;
use log::{debug, error, info, warn};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// A model's entry in the process-wide inventory.
pub struct Registration {
    pub model: &'static str,
    /// Module the declaring type lives in.
    pub module: &'static str,
    pub config: fn() -> &'static RansackConfig,
}

impl Registration {
    pub const fn new(
        model: &'static str,
        module: &'static str,
        config: fn() -> &'static RansackConfig,
    ) -> Self {
        Registration {
            model,
            module,
            config,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown ransackable model: {0}")]
    UnknownModel(String),

    #[error("Ransackable model already registered: {0}")]
    DuplicateModel(String),
}

static GLOBAL: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::from_inventory()));

/// Name-indexed view over model configurations.
///
/// Each entry is its own `Arc`, replaced whole on reconfiguration, so a
/// reader holding a config never observes a partial update.
#[derive(Default)]
pub struct Registry {
    entries: RwLock<HashMap<&'static str, Arc<RansackConfig>>>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Build a registry from every `ransackable!` declaration linked into the binary.
    ///
    /// A name declared by more than one type is left out entirely: inventory
    /// order is unspecified, so no declaration can be preferred.
    pub fn from_inventory() -> Self {
        let mut by_name: BTreeMap<&'static str, Vec<&'static Registration>> = BTreeMap::new();
        for registration in inventory::iter::<Registration> {
            by_name.entry(registration.model).or_default().push(registration);
        }

        let registry = Registry::new();
        for (model, registrations) in by_name {
            if let [registration] = registrations.as_slice() {
                registry.insert(model, (registration.config)());
                continue;
            }
            let mut modules: Vec<&str> = registrations.iter().map(|r| r.module).collect();
            modules.sort_unstable();
            error!(
                "Model name `{}` is declared in {}; none of them is registered.",
                model,
                modules.join(", ")
            );
        }
        info!("Ransack registry seeded with {} models.", registry.models().len());
        registry
    }

    /// Shared registry, seeded from the inventory on first use.
    pub fn global() -> Arc<Registry> {
        GLOBAL.clone()
    }

    /// Register one type explicitly. A name that is already taken is
    /// rejected and the existing entry stays.
    pub fn register<T: Ransackable>(&self) -> Result<(), RegistryError> {
        let model = T::model_name();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.contains_key(model) {
            warn!("Model `{}` is already registered; keeping the existing entry.", model);
            return Err(RegistryError::DuplicateModel(model.to_string()));
        }
        debug!("Registered ransackable model `{}`", model);
        entries.insert(model, Arc::new(T::ransack_config().clone()));
        Ok(())
    }

    fn insert(&self, model: &'static str, config: &RansackConfig) {
        debug!("Registered ransackable model `{}`", model);
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(model, Arc::new(config.clone()));
    }

    pub fn lookup(&self, model: &str) -> Option<Arc<RansackConfig>> {
        debug!("Looking up ransack config for `{}`", model);
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(model).cloned()
    }

    /// Registered model names, sorted.
    pub fn models(&self) -> Vec<&'static str> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let mut models: Vec<&'static str> = entries.keys().copied().collect();
        models.sort_unstable();
        models
    }

    /// Swap a model's configuration for name-based lookups. The `Ransackable`
    /// trait keeps answering from the type's static configuration.
    pub fn reconfigure(&self, model: &str, config: RansackConfig) -> Result<(), RegistryError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        match entries.get_mut(model) {
            Some(entry) => {
                *entry = Arc::new(config);
                info!("Reconfigured ransack whitelist for `{}`.", model);
                Ok(())
            }
            None => {
                warn!("Cannot reconfigure unknown model `{}`.", model);
                Err(RegistryError::UnknownModel(model.to_string()))
            }
        }
    }
}
