//! The object registry: maps type tags to constructors for concrete shapes.
//!
//! The registry is an explicit value with a stated lifecycle: the top-level
//! caller creates it, populates it once during bootstrap, and treats it as
//! read-only for the remainder of decode activity. There is no process-wide
//! global and no load-time side effects.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{LookupError, RegistryError, RegistryResult};
use crate::object::{Object, TypeMeta};

/// Constructor descriptor for one registered concrete shape.
///
/// Holds the shape's identity for conflict detection and diagnostics, and a
/// deserialize function that allocates and fully populates one instance from
/// a canonical JSON document.
pub struct ObjectFactory {
    shape_id: TypeId,
    type_path: &'static str,
    deserialize_fn: fn(Value) -> Result<Box<dyn Object>, serde_json::Error>,
}

impl ObjectFactory {
    /// Full Rust path of the concrete shape, for diagnostics.
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Construct a fresh instance and populate all of its fields from
    /// `document`, including the embedded type tag.
    pub fn deserialize(&self, document: Value) -> Result<Box<dyn Object>, serde_json::Error> {
        (self.deserialize_fn)(document)
    }
}

impl fmt::Debug for ObjectFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectFactory")
            .field("type_path", &self.type_path)
            .finish()
    }
}

fn deserialize_into<T>(document: Value) -> Result<Box<dyn Object>, serde_json::Error>
where
    T: Object + DeserializeOwned + 'static,
{
    serde_json::from_value::<T>(document).map(|obj| Box::new(obj) as Box<dyn Object>)
}

/// Mapping from [`TypeMeta`] to the factory for the corresponding shape.
///
/// Keys are unique: a tag maps to at most one concrete shape. Re-registering
/// the same tag with the same shape is a no-op; with a different shape it is
/// a conflict.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    factories: HashMap<TypeMeta, ObjectFactory>,
}

impl ObjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register `T` under `meta`, panicking on failure.
    ///
    /// Registration failures stem from inconsistent static wiring of known
    /// types, so bootstrap code that registers all supported kinds up front
    /// should not proceed with a broken registry. Callers that want to
    /// inspect the failure use [`register_checked`](Self::register_checked).
    pub fn must_register<T>(&mut self, meta: TypeMeta)
    where
        T: Object + Default + Serialize + DeserializeOwned + 'static,
    {
        if let Err(err) = self.register_checked::<T>(meta) {
            panic!("unable to register object type: {err}");
        }
    }

    /// Register `T` under `meta`.
    ///
    /// `meta` must carry a non-empty type name and `T` must encode as a
    /// mapping (checked against its `Default` value) so that a document can
    /// be decoded into it in place. Registering the same tag twice with the
    /// same shape succeeds silently; with a different shape it fails with
    /// [`RegistryError::ConflictingRegistration`] naming both shapes.
    pub fn register_checked<T>(&mut self, meta: TypeMeta) -> RegistryResult<()>
    where
        T: Object + Default + Serialize + DeserializeOwned + 'static,
    {
        if meta.type_name.is_empty() {
            return Err(RegistryError::MissingTypeName);
        }

        let type_path = std::any::type_name::<T>();
        match serde_json::to_value(T::default()) {
            Ok(Value::Object(_)) => {}
            _ => return Err(RegistryError::InvalidShape { type_path }),
        }

        if let Some(existing) = self.factories.get(&meta) {
            if existing.shape_id == TypeId::of::<T>() {
                return Ok(());
            }
            return Err(RegistryError::ConflictingRegistration {
                type_name: meta.type_name.clone(),
                existing: existing.type_path,
                attempted: type_path,
            });
        }

        tracing::debug!(type_name = %meta.type_name, type_path, "registered object type");
        self.factories.insert(
            meta,
            ObjectFactory {
                shape_id: TypeId::of::<T>(),
                type_path,
                deserialize_fn: deserialize_into::<T>,
            },
        );
        Ok(())
    }

    /// Look up the factory registered for `meta`.
    pub fn resolve(&self, meta: &TypeMeta) -> Result<&ObjectFactory, LookupError> {
        self.factories.get(meta).ok_or_else(|| LookupError::UnknownType {
            type_name: meta.type_name.clone(),
        })
    }

    /// Whether a factory is registered for `meta`.
    pub fn contains(&self, meta: &TypeMeta) -> bool {
        self.factories.contains_key(meta)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// All registered type names, sorted for stable diagnostics.
    pub fn registered_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .factories
            .keys()
            .map(|meta| meta.type_name.clone())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{apple_meta, banana_meta, Apple, Banana};
    use serde::Deserialize;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Bare(u32);

    impl Object for Bare {
        fn type_meta(&self) -> TypeMeta {
            TypeMeta::new("Bare")
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ObjectRegistry::new();
        registry.register_checked::<Apple>(apple_meta()).unwrap();

        assert!(registry.contains(&apple_meta()));
        assert_eq!(registry.len(), 1);
        let factory = registry.resolve(&apple_meta()).unwrap();
        assert!(factory.type_path().ends_with("Apple"));
    }

    #[test]
    fn test_resolve_unknown_tag() {
        let registry = ObjectRegistry::new();
        let err = registry.resolve(&TypeMeta::new("Cherry")).unwrap_err();
        assert_eq!(
            err,
            LookupError::UnknownType {
                type_name: "Cherry".to_string()
            }
        );
    }

    #[test]
    fn test_register_empty_type_name_rejected() {
        let mut registry = ObjectRegistry::new();
        let err = registry
            .register_checked::<Apple>(TypeMeta::new(""))
            .unwrap_err();
        assert_eq!(err, RegistryError::MissingTypeName);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_non_mapping_shape_rejected() {
        let mut registry = ObjectRegistry::new();
        let err = registry
            .register_checked::<Bare>(TypeMeta::new("Bare"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidShape { .. }));
    }

    #[test]
    fn test_reregistration_same_shape_is_idempotent() {
        let mut registry = ObjectRegistry::new();
        registry.register_checked::<Apple>(apple_meta()).unwrap();
        registry.register_checked::<Apple>(apple_meta()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reregistration_different_shape_conflicts() {
        let mut registry = ObjectRegistry::new();
        let tag = TypeMeta::new("Fruit");
        registry.register_checked::<Apple>(tag.clone()).unwrap();

        let err = registry.register_checked::<Banana>(tag).unwrap_err();
        match err {
            RegistryError::ConflictingRegistration {
                type_name,
                existing,
                attempted,
            } => {
                assert_eq!(type_name, "Fruit");
                assert!(existing.ends_with("Apple"));
                assert!(attempted.ends_with("Banana"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "unable to register object type")]
    fn test_must_register_panics_on_missing_type_name() {
        let mut registry = ObjectRegistry::new();
        registry.must_register::<Apple>(TypeMeta::new(""));
    }

    #[test]
    fn test_registered_types_sorted() {
        let mut registry = ObjectRegistry::new();
        registry.register_checked::<Banana>(banana_meta()).unwrap();
        registry.register_checked::<Apple>(apple_meta()).unwrap();
        assert_eq!(registry.registered_types(), vec!["Apple", "Banana"]);
    }
}
