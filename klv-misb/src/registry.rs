//! Item registry
//!
//! The registry is the read-only lookup structure the decoders resolve
//! keys against. It is populated once at startup through
//! [`RegistryBuilder`] and then frozen; the decode path sees only the
//! immutable [`Registry`] with no mutation API.

use crate::item::ItemDefinition;
use klv_core::{KlvError, KlvResult, UniversalKey};
use std::collections::HashMap;

/// Accumulates item definitions and produces a sealed [`Registry`]
///
/// Duplicate names, local tags, or universal keys are configuration bugs
/// and fail at registration time, never silently.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    items: Vec<ItemDefinition>,
    by_name: HashMap<&'static str, usize>,
    by_local_tag: HashMap<u8, usize>,
    by_universal_key: HashMap<UniversalKey, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one item definition
    ///
    /// # Error Handling
    /// Returns `InvalidData` if the definition carries neither a local tag
    /// nor a universal key, and `DuplicateKey` if its name, local tag, or
    /// universal key is already registered.
    pub fn register(&mut self, definition: ItemDefinition) -> KlvResult<()> {
        if definition.local_tag.is_none() && definition.universal_key.is_none() {
            return Err(KlvError::InvalidData(format!(
                "Item '{}' has neither a local tag nor a universal key",
                definition.name
            )));
        }
        if self.by_name.contains_key(definition.name) {
            return Err(KlvError::DuplicateKey(format!(
                "Item name '{}' already registered",
                definition.name
            )));
        }
        if let Some(tag) = definition.local_tag {
            if self.by_local_tag.contains_key(&tag) {
                return Err(KlvError::DuplicateKey(format!(
                    "Local tag {} already registered ('{}')",
                    tag, definition.name
                )));
            }
        }
        if let Some(key) = definition.universal_key {
            if self.by_universal_key.contains_key(&key) {
                return Err(KlvError::DuplicateKey(format!(
                    "Universal key [{}] already registered ('{}')",
                    key, definition.name
                )));
            }
        }

        let index = self.items.len();
        self.by_name.insert(definition.name, index);
        if let Some(tag) = definition.local_tag {
            self.by_local_tag.insert(tag, index);
        }
        if let Some(key) = definition.universal_key {
            self.by_universal_key.insert(key, index);
        }
        self.items.push(definition);
        Ok(())
    }

    /// Seal the builder into an immutable registry
    pub fn build(self) -> Registry {
        Registry {
            items: self.items,
            by_name: self.by_name,
            by_local_tag: self.by_local_tag,
            by_universal_key: self.by_universal_key,
        }
    }
}

/// Immutable item lookup structure
///
/// Three indexes built together over one item list: by name, by local-set
/// tag number, and by 16-byte universal key (compared by content).
/// Lookups borrow; the registry itself never changes after construction,
/// so independent decode calls may share it across threads freely.
#[derive(Debug)]
pub struct Registry {
    items: Vec<ItemDefinition>,
    by_name: HashMap<&'static str, usize>,
    by_local_tag: HashMap<u8, usize>,
    by_universal_key: HashMap<UniversalKey, usize>,
}

impl Registry {
    /// Look up an item by its local-set tag number
    pub fn lookup_by_local_tag(&self, tag: u8) -> Option<&ItemDefinition> {
        self.by_local_tag.get(&tag).map(|&i| &self.items[i])
    }

    /// Look up an item by its 16-byte universal key
    pub fn lookup_by_universal_key(&self, key: &UniversalKey) -> Option<&ItemDefinition> {
        self.by_universal_key.get(key).map(|&i| &self.items[i])
    }

    /// Look up an item by name
    pub fn lookup_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.by_name.get(name).map(|&i| &self.items[i])
    }

    /// Number of registered items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Build a sealed registry from a configuration table
///
/// # Arguments
/// * `items` - The item catalog, typically static configuration data
///
/// # Error Handling
/// Returns `DuplicateKey` on the first conflicting definition; a conflict
/// is a build-time configuration bug and is meant to halt the caller.
pub fn build_registry(items: Vec<ItemDefinition>) -> KlvResult<Registry> {
    let mut builder = RegistryBuilder::new();
    for item in items {
        builder.register(item)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemCodec, ItemDefinition};
    use klv_codec::{PrimitiveType, ScalarCodec};

    fn heading() -> ItemDefinition {
        ItemDefinition::local(
            5,
            "platform-heading",
            Some(ItemCodec::Primitive(ScalarCodec::new(
                PrimitiveType::Unsigned16,
            ))),
        )
    }

    #[test]
    fn test_lookup_by_local_tag_and_name() {
        let registry = build_registry(vec![heading()]).unwrap();
        assert_eq!(
            registry.lookup_by_local_tag(5).unwrap().name,
            "platform-heading"
        );
        assert_eq!(
            registry.lookup_by_name("platform-heading").unwrap().local_tag,
            Some(5)
        );
        assert!(registry.lookup_by_local_tag(6).is_none());
    }

    #[test]
    fn test_lookup_by_universal_key_content() {
        let key = UniversalKey::new([0x06; 16]);
        let registry =
            build_registry(vec![ItemDefinition::universal(key, "episode-number", None)]).unwrap();
        // A freshly built key with the same bytes must resolve
        let probe = UniversalKey::from_slice(&[0x06; 16]).unwrap();
        assert_eq!(
            registry.lookup_by_universal_key(&probe).unwrap().name,
            "episode-number"
        );
    }

    #[test]
    fn test_duplicate_local_tag_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.register(heading()).unwrap();
        let duplicate = ItemDefinition::local(5, "platform-heading-bis", None);
        assert!(matches!(
            builder.register(duplicate),
            Err(KlvError::DuplicateKey(_))
        ));
    }

    #[test]
    fn test_duplicate_universal_key_rejected() {
        let key = UniversalKey::new([0x0E; 16]);
        let mut builder = RegistryBuilder::new();
        builder
            .register(ItemDefinition::universal(key, "first", None))
            .unwrap();
        assert!(matches!(
            builder.register(ItemDefinition::universal(key, "second", None)),
            Err(KlvError::DuplicateKey(_))
        ));
    }

    #[test]
    fn test_item_without_any_key_rejected() {
        let mut builder = RegistryBuilder::new();
        let keyless = ItemDefinition {
            name: "nowhere",
            local_tag: None,
            universal_key: None,
            codec: None,
        };
        assert!(matches!(
            builder.register(keyless),
            Err(KlvError::InvalidData(_))
        ));
    }
}
