//! Reduce a block's subtree to text plus style and entity ranges.

use super::entities::{EntityRegistry, image_data};
use super::tags::{InlineTag, inline_tag};
use crate::dom::{ArenaDom, NodeData, NodeId};
use crate::model::{EntityData, EntityRange, InlineStyleRange};

/// Whitespace owed to the text, emitted only if more content follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
enum Separator {
    #[default]
    None,
    /// Whitespace-only text between inline content.
    Space,
    /// Boundary of a block element flattened into this block.
    Newline,
}

/// Result of reducing one block.
#[derive(Debug, Default)]
pub(crate) struct ReducedBlock {
    pub text: String,
    pub inline_style_ranges: Vec<InlineStyleRange>,
    pub entity_ranges: Vec<EntityRange>,
    /// Lists nested in the block, in document order, to be emitted after it.
    pub hoisted: Vec<NodeId>,
}

/// Per-block accumulator.
///
/// Lives for a single block; the registry is the only state shared across
/// blocks.
pub(crate) struct InlineReducer<'a> {
    dom: &'a ArenaDom,
    entities: &'a mut EntityRegistry,
    /// Keep whitespace verbatim (code blocks).
    preserve_whitespace: bool,
    out: ReducedBlock,
    /// Text length in chars.
    cursor: u32,
    /// Indices into `out.inline_style_ranges` of styles still open.
    open_styles: Vec<usize>,
    pending: Separator,
}

impl<'a> InlineReducer<'a> {
    pub fn new(dom: &'a ArenaDom, entities: &'a mut EntityRegistry) -> Self {
        Self {
            dom,
            entities,
            preserve_whitespace: false,
            out: ReducedBlock::default(),
            cursor: 0,
            open_styles: Vec::new(),
            pending: Separator::None,
        }
    }

    pub fn preserve_whitespace(mut self, preserve: bool) -> Self {
        self.preserve_whitespace = preserve;
        self
    }

    /// Reduce a sequence of sibling nodes into one block.
    pub fn reduce(mut self, nodes: impl IntoIterator<Item = NodeId>) -> ReducedBlock {
        for id in nodes {
            self.reduce_node(id);
        }
        debug_assert!(self.open_styles.is_empty());
        self.out
    }

    fn reduce_children(&mut self, parent: NodeId) {
        let dom = self.dom;
        for child in dom.children(parent) {
            self.reduce_node(child);
        }
    }

    fn reduce_node(&mut self, id: NodeId) {
        let dom = self.dom;
        let Some(node) = dom.get(id) else {
            return;
        };

        match &node.data {
            NodeData::Text(text) => self.push_text(text),
            NodeData::Element { name, .. } => self.reduce_element(id, name.local.as_ref()),
            NodeData::Document | NodeData::Comment => {}
        }
    }

    fn reduce_element(&mut self, id: NodeId, tag: &str) {
        match inline_tag(tag) {
            InlineTag::LineBreak => {
                self.pending = Separator::None;
                self.push_char('\n');
            }
            InlineTag::Style(style) => {
                self.flush_pending();
                let slot = self.out.inline_style_ranges.len();
                self.out.inline_style_ranges.push(InlineStyleRange {
                    offset: self.cursor,
                    length: 0,
                    style,
                });
                self.open_styles.push(slot);

                self.reduce_children(id);

                if let Some(slot) = self.open_styles.pop() {
                    let range = &mut self.out.inline_style_ranges[slot];
                    range.length = self.cursor - range.offset;
                }
            }
            InlineTag::Anchor => {
                self.flush_pending();
                let start = self.cursor;
                self.reduce_children(id);

                let dom = self.dom;
                let url = dom.attr_or(id, "href", "");
                let key = self.entities.assign(EntityData::link(url));
                self.out.entity_ranges.push(EntityRange {
                    offset: start,
                    length: self.cursor - start,
                    key,
                });
            }
            InlineTag::Image => {
                self.flush_pending();
                let dom = self.dom;
                let data = image_data(
                    dom.attr_or(id, "src", ""),
                    dom.attr_or(id, "alt", ""),
                    dom.attr(id, "height"),
                    dom.attr(id, "width"),
                );
                let key = self.entities.assign(data);
                self.out.entity_ranges.push(EntityRange {
                    offset: self.cursor,
                    length: 0,
                    key,
                });
                // Text that malformed markup nested inside the image still counts.
                self.reduce_children(id);
            }
            InlineTag::NestedList => {
                log::debug!("hoisting nested <{tag}> out of block");
                self.out.hoisted.push(id);
            }
            InlineTag::Flatten => {
                self.separate(Separator::Newline);
                self.reduce_children(id);
                self.separate(Separator::Newline);
            }
            InlineTag::Ignored => {}
            InlineTag::Transparent => self.reduce_children(id),
        }
    }

    /// Request a separator; the strongest pending one wins.
    fn separate(&mut self, separator: Separator) {
        self.pending = self.pending.max(separator);
    }

    fn flush_pending(&mut self) {
        let ch = match std::mem::take(&mut self.pending) {
            Separator::None => return,
            Separator::Space => ' ',
            Separator::Newline => '\n',
        };
        let last = self.out.text.chars().next_back();
        match last {
            None | Some('\n') => {}
            Some(' ') if ch == ' ' => {}
            Some(_) => self.push_char(ch),
        }
    }

    fn push_char(&mut self, ch: char) {
        self.out.text.push(ch);
        self.cursor += 1;
    }

    /// Append a text node.
    ///
    /// Whitespace-only nodes are source formatting: a line-spanning one is
    /// dropped, any other becomes a pending space.
    fn push_text(&mut self, text: &str) {
        if !self.preserve_whitespace && text.trim().is_empty() {
            if !text.is_empty() && !text.contains('\n') {
                self.separate(Separator::Space);
            }
            return;
        }
        self.flush_pending();
        self.push_str(text);
    }

    fn push_str(&mut self, s: &str) {
        self.out.text.push_str(s);
        self.cursor += s.chars().count() as u32;
    }
}
