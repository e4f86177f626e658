//! Tag dispatch tables.
//!
//! Two closed lookups keyed by local tag name: one for the block scan, one
//! for inline reduction inside a block. Each ends in an explicit fallback.

use crate::model::{BlockType, InlineStyle};

/// How the block scan treats an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockTag {
    /// Starts a block of the given type.
    Block(BlockType),
    /// `<li>`; type and depth come from its list ancestors.
    ListItem,
    /// `<ul>` / `<ol>`: scanned for items.
    List,
    /// Structural wrapper whose children are scanned.
    Container,
    /// Joins the current implicit block.
    Inline,
    /// Skipped with its subtree.
    Ignored,
    /// Outside the supported set.
    Unknown,
}

/// How inline reduction treats an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InlineTag {
    LineBreak,
    Style(InlineStyle),
    Anchor,
    Image,
    /// A list nested in a block; its items become blocks of their own.
    NestedList,
    /// Block-level element inside a block: content inlined on its own line.
    Flatten,
    Ignored,
    /// Fallback: reduce the children.
    Transparent,
}

/// Elements that never contribute content.
fn is_ignored(tag: &str) -> bool {
    matches!(
        tag,
        "head" | "title" | "script" | "style" | "template" | "noscript" | "meta" | "link"
    )
}

fn inline_style(tag: &str) -> Option<InlineStyle> {
    match tag {
        "strong" | "b" => Some(InlineStyle::Bold),
        "em" | "i" | "cite" | "var" | "dfn" => Some(InlineStyle::Italic),
        "u" | "ins" => Some(InlineStyle::Underline),
        "s" | "strike" | "del" => Some(InlineStyle::Strikethrough),
        "code" | "kbd" | "samp" | "tt" => Some(InlineStyle::Code),
        _ => None,
    }
}

fn block_type(tag: &str) -> Option<BlockType> {
    if let Some(level) = tag.strip_prefix('h').and_then(|l| l.parse::<u8>().ok()) {
        return BlockType::heading(level);
    }
    match tag {
        "p" => Some(BlockType::Unstyled),
        "blockquote" => Some(BlockType::Blockquote),
        "pre" => Some(BlockType::CodeBlock),
        _ => None,
    }
}

fn is_container(tag: &str) -> bool {
    matches!(
        tag,
        "html"
            | "body"
            | "div"
            | "section"
            | "article"
            | "main"
            | "header"
            | "footer"
            | "nav"
            | "aside"
            | "figure"
            | "form"
            | "center"
    )
}

fn is_inline(tag: &str) -> bool {
    inline_style(tag).is_some()
        || matches!(
            tag,
            "a" | "img"
                | "br"
                | "span"
                | "font"
                | "small"
                | "big"
                | "sub"
                | "sup"
                | "abbr"
                | "mark"
                | "q"
                | "time"
                | "label"
                | "data"
                | "bdi"
                | "bdo"
                | "wbr"
        )
}

/// Classify an element met at block-scan level.
pub(crate) fn block_tag(tag: &str) -> BlockTag {
    if let Some(ty) = block_type(tag) {
        return BlockTag::Block(ty);
    }
    match tag {
        "li" => BlockTag::ListItem,
        "ul" | "ol" => BlockTag::List,
        _ if is_container(tag) => BlockTag::Container,
        _ if is_inline(tag) => BlockTag::Inline,
        _ if is_ignored(tag) => BlockTag::Ignored,
        _ => BlockTag::Unknown,
    }
}

/// Classify an element met while reducing a block.
pub(crate) fn inline_tag(tag: &str) -> InlineTag {
    if let Some(style) = inline_style(tag) {
        return InlineTag::Style(style);
    }
    match tag {
        "br" => InlineTag::LineBreak,
        "a" => InlineTag::Anchor,
        "img" => InlineTag::Image,
        "ul" | "ol" => InlineTag::NestedList,
        "li" => InlineTag::Flatten,
        _ if block_type(tag).is_some() || is_container(tag) => InlineTag::Flatten,
        _ if is_ignored(tag) => InlineTag::Ignored,
        _ => InlineTag::Transparent,
    }
}
