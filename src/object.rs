//! Type tags and the capability contract every decodable object fulfills.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Document key that carries the type name in every serialized object.
pub const TYPE_NAME_KEY: &str = "type_name";

/// Metadata required to identify the type of an object.
///
/// `TypeMeta` is embedded (flattened) into every decodable record so the tag
/// round-trips through decode, and doubles as the registry key. Equality and
/// hashing are structural over the type name. The name is an opaque string;
/// no naming convention is enforced at this layer.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeMeta {
    /// The name of an object's type. Deserializes to the empty string when
    /// the field is absent from a document.
    #[serde(default)]
    pub type_name: String,
}

impl TypeMeta {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

/// The contract that all decodable types must fulfill.
///
/// An object's reported [`TypeMeta`] must agree with the tag it was
/// registered under; implementations return the embedded meta so the two
/// cannot diverge after a full decode.
pub trait Object: fmt::Debug + Send + Sync {
    /// Returns the type tag embedded in this instance.
    fn type_meta(&self) -> TypeMeta;

    /// Upcast for concrete-shape recovery, see [`dyn Object::downcast_ref`].
    fn as_any(&self) -> &dyn Any;
}

impl dyn Object {
    /// Borrow the concrete shape behind a decoded object, if it is a `T`.
    pub fn downcast_ref<T: Object + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
