//! The opt-in capability a model type adopts to expose ransack whitelists.
//!
//! Usage:
//! struct Order;
//! ransackable!(Order, attributes = ["total", "status"], scopes = ["recent"]);
//! assert!(Order::is_ransackable_attribute("total"));
//!
//! Types that never adopt the capability simply have none of these methods.

use crate::whitelist::{RansackConfig, Whitelist};

pub trait Ransackable {
    /// Name the model is registered under.
    fn model_name() -> &'static str;

    /// Per-type configuration. Implementations hand out a `'static` that is
    /// written once, before the first read.
    fn ransack_config() -> &'static RansackConfig;

    fn ransackable_associations() -> &'static Whitelist {
        Self::ransack_config().associations()
    }

    /// Always a superset of the model's baseline attributes.
    fn ransackable_attributes() -> &'static Whitelist {
        Self::ransack_config().attributes()
    }

    fn ransackable_scopes() -> &'static Whitelist {
        Self::ransack_config().scopes()
    }

    fn is_ransackable_association(name: &str) -> bool {
        Self::ransackable_associations().contains(name)
    }

    fn is_ransackable_attribute(name: &str) -> bool {
        Self::ransackable_attributes().contains(name)
    }

    fn is_ransackable_scope(name: &str) -> bool {
        Self::ransackable_scopes().contains(name)
    }
}

#[doc(hidden)]
pub mod __private {
    pub use inventory;
    pub use once_cell::sync::Lazy;

    pub fn names(names: &[&'static str]) -> Vec<&'static str> {
        names.to_vec()
    }
}

/// Implements `Ransackable` for a type and registers it by name.
///
/// The registry name defaults to the type's identifier; `Type as "Name"`
/// overrides it when two modules declare types with the same identifier.
/// Keys are `attributes`, `associations`, `scopes` and `default_attributes`;
/// each is optional and takes a list of string literals.
#[macro_export]
macro_rules! ransackable {
    (@impl $model:ident, $registered:expr $(, $key:ident = [$($value:expr),* $(,)?])*) => {
        impl $crate::Ransackable for $model {
            fn model_name() -> &'static str {
                $registered
            }

            fn ransack_config() -> &'static $crate::RansackConfig {
                static CONFIG: $crate::capability::__private::Lazy<$crate::RansackConfig> =
                    $crate::capability::__private::Lazy::new(|| {
                        $crate::RansackConfig::builder()
                            $(.$key($crate::capability::__private::names(&[$($value),*])))*
                            .build()
                    });
                &CONFIG
            }
        }

        $crate::capability::__private::inventory::submit! {
            $crate::registry::Registration::new(
                $registered,
                module_path!(),
                <$model as $crate::Ransackable>::ransack_config,
            )
        }
    };
    ($model:ident as $registered:literal $(, $key:ident = [$($value:expr),* $(,)?])* $(,)?) => {
        $crate::ransackable!(@impl $model, $registered $(, $key = [$($value),*])*);
    };
    ($model:ident $(, $key:ident = [$($value:expr),* $(,)?])* $(,)?) => {
        $crate::ransackable!(@impl $model, stringify!($model) $(, $key = [$($value),*])*);
    };
}
