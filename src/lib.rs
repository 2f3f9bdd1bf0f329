pub mod capability;
pub mod registry;
pub mod server;
pub mod settings;
pub mod whitelist;
pub use capability::Ransackable;
pub use whitelist::{DEFAULT_ATTRIBUTES, RansackConfig, Whitelist};

inventory::collect!(crate::registry::Registration);
