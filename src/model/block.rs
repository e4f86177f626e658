//! Content blocks and their inline annotations.

use std::collections::BTreeMap;

use serde::Serialize;

/// Block kind, serialized with Draft.js names (`header-one`, `unordered-list-item`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    #[default]
    Unstyled,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    Blockquote,
    UnorderedListItem,
    OrderedListItem,
    CodeBlock,
}

impl BlockType {
    /// Heading type for levels 1-6.
    pub fn heading(level: u8) -> Option<BlockType> {
        match level {
            1 => Some(BlockType::HeaderOne),
            2 => Some(BlockType::HeaderTwo),
            3 => Some(BlockType::HeaderThree),
            4 => Some(BlockType::HeaderFour),
            5 => Some(BlockType::HeaderFive),
            6 => Some(BlockType::HeaderSix),
            _ => None,
        }
    }

    /// Draft.js name of the block type.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Unstyled => "unstyled",
            BlockType::HeaderOne => "header-one",
            BlockType::HeaderTwo => "header-two",
            BlockType::HeaderThree => "header-three",
            BlockType::HeaderFour => "header-four",
            BlockType::HeaderFive => "header-five",
            BlockType::HeaderSix => "header-six",
            BlockType::Blockquote => "blockquote",
            BlockType::UnorderedListItem => "unordered-list-item",
            BlockType::OrderedListItem => "ordered-list-item",
            BlockType::CodeBlock => "code-block",
        }
    }
}

/// Inline style names understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

/// A style applied to `length` characters starting at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InlineStyleRange {
    pub offset: u32,
    pub length: u32,
    pub style: InlineStyle,
}

/// A span of block text bound to an entity in the document's entity map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityRange {
    pub offset: u32,
    pub length: u32,
    pub key: u32,
}

/// One block of the document.
///
/// Offsets in both range lists count characters of this block's own text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    /// Placeholder; the editor assigns real keys on load.
    pub key: String,
    pub text: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub depth: u32,
    pub inline_style_ranges: Vec<InlineStyleRange>,
    pub entity_ranges: Vec<EntityRange>,
    pub data: BTreeMap<String, String>,
}

impl ContentBlock {
    pub fn new(block_type: BlockType, text: impl Into<String>) -> Self {
        Self {
            block_type,
            text: text.into(),
            ..Default::default()
        }
    }

    /// Length of the text in characters, the unit range offsets use.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_type_names() {
        for ty in [
            BlockType::Unstyled,
            BlockType::HeaderThree,
            BlockType::Blockquote,
            BlockType::OrderedListItem,
            BlockType::CodeBlock,
        ] {
            let json = serde_json::to_value(ty).unwrap();
            assert_eq!(json, ty.as_str());
        }
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(BlockType::heading(1), Some(BlockType::HeaderOne));
        assert_eq!(BlockType::heading(6), Some(BlockType::HeaderSix));
        assert_eq!(BlockType::heading(7), None);
    }

    #[test]
    fn test_empty_block_shape() {
        let block = ContentBlock::new(BlockType::Unstyled, "");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "key": "",
                "text": "",
                "type": "unstyled",
                "depth": 0,
                "inlineStyleRanges": [],
                "entityRanges": [],
                "data": {}
            })
        );
    }

    #[test]
    fn test_style_names() {
        let range = InlineStyleRange {
            offset: 1,
            length: 2,
            style: InlineStyle::Strikethrough,
        };
        assert_eq!(
            serde_json::to_value(range).unwrap(),
            serde_json::json!({"offset": 1, "length": 2, "style": "STRIKETHROUGH"})
        );
    }
}
