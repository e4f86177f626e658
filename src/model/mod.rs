//! Output data model: the editor's raw content format.
//!
//! This module contains:
//! - Content blocks with inline style and entity ranges
//! - Entities (images, links) and the document-wide entity map
//! - The [`Document`] tying both together

mod block;
mod entity;

pub use block::{BlockType, ContentBlock, EntityRange, InlineStyle, InlineStyleRange};
pub use entity::{
    Entity, EntityData, EntityMap, EntityType, ImageData, LinkData, Mutability,
};

use serde::Serialize;

use crate::error::Result;

/// A converted document: ordered blocks plus the entities they reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub blocks: Vec<ContentBlock>,
    pub entity_map: EntityMap,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.entity_map.is_empty()
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
