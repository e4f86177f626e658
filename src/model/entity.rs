//! Entities referenced from block text: images and links.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    Image,
    Link,
}

/// How the editor treats text covered by an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mutability {
    /// Text in the range may be edited freely; every converted entity is mutable.
    #[default]
    Mutable,
}

/// Data carried by an `<img>` entity.
///
/// Sizes are CSS values: `"<n>px"` or `"initial"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageData {
    pub alt: String,
    pub src: String,
    pub height: String,
    pub width: String,
}

/// Data carried by an `<a>` entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkData {
    pub url: String,
}

/// Type-specific entity payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntityData {
    Image(ImageData),
    Link(LinkData),
}

impl EntityData {
    pub fn entity_type(&self) -> EntityType {
        match self {
            EntityData::Image(_) => EntityType::Image,
            EntityData::Link(_) => EntityType::Link,
        }
    }

    pub fn link(url: impl Into<String>) -> Self {
        EntityData::Link(LinkData { url: url.into() })
    }
}

/// An entry of the entity map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub mutability: Mutability,
    pub data: EntityData,
}

impl Entity {
    /// A mutable entity whose type follows its payload.
    pub fn new(data: EntityData) -> Self {
        Self {
            entity_type: data.entity_type(),
            mutability: Mutability::Mutable,
            data,
        }
    }
}

/// Entities indexed by their dense integer key.
///
/// Serializes as an object keyed `"0"`, `"1"`, ... in key order, which is
/// also the order entities were registered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityMap {
    entities: Vec<Entity>,
}

impl EntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_vec(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn get(&self, key: u32) -> Option<&Entity> {
        self.entities.get(key as usize)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entries with their keys, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(key, entity)| (key as u32, entity))
    }
}

impl Serialize for EntityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entities.len()))?;
        for (key, entity) in self.iter() {
            map.serialize_entry(&key.to_string(), entity)?;
        }
        map.end()
    }
}
