//! Builtin example record kinds and their bootstrap registration.
//!
//! These double as the fixture shapes for tests and the demo binary. Real
//! deployments define their own kinds the same way: a struct with a flattened
//! [`TypeMeta`], an [`Object`] impl, and a registration call during bootstrap.

use serde::{Deserialize, Serialize};

use crate::object::{Object, TypeMeta};
use crate::registry::ObjectRegistry;

/// Type name of an [`Apple`] object.
pub const APPLE_TYPE_NAME: &str = "Apple";
/// Type name of a [`Banana`] object.
pub const BANANA_TYPE_NAME: &str = "Banana";

/// Type tag for an [`Apple`] object.
pub fn apple_meta() -> TypeMeta {
    TypeMeta::new(APPLE_TYPE_NAME)
}

/// Type tag for a [`Banana`] object.
pub fn banana_meta() -> TypeMeta {
    TypeMeta::new(BANANA_TYPE_NAME)
}

/// An example object.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Apple {
    #[serde(flatten)]
    pub meta: TypeMeta,
    #[serde(default)]
    pub color: String,
}

impl Object for Apple {
    fn type_meta(&self) -> TypeMeta {
        self.meta.clone()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// An example object.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Banana {
    #[serde(flatten)]
    pub meta: TypeMeta,
    #[serde(default)]
    pub ripe: bool,
}

impl Object for Banana {
    fn type_meta(&self) -> TypeMeta {
        self.meta.clone()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Register all builtin record kinds.
///
/// Bootstrap wiring: call once before any decode that should recognize the
/// builtin kinds. Panics on conflicting registration, which cannot happen
/// unless the caller registered a different shape under these names first.
pub fn register_builtin_objects(registry: &mut ObjectRegistry) {
    registry.must_register::<Apple>(apple_meta());
    registry.must_register::<Banana>(banana_meta());
}
