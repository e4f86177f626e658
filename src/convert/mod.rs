//! HTML to Draft.js block-model conversion.
//!
//! The assembler scans the parsed DOM top-down. Block elements start blocks,
//! runs of loose inline content form implicit `unstyled` blocks, and each
//! block's subtree is reduced to text plus ranges by [`InlineReducer`].
//! Entities are registered in one document-wide [`EntityRegistry`].
//!
//! # Example
//!
//! ```
//! use html2draft::{convert, BlockType, ConvertOptions};
//!
//! let doc = convert("<h1>Title</h1><p>Body</p>", &ConvertOptions::default()).unwrap();
//! assert_eq!(doc.blocks.len(), 2);
//! assert_eq!(doc.blocks[0].block_type, BlockType::HeaderOne);
//! ```

mod depth;
mod entities;
mod inline;
mod tags;

pub use depth::{list_depth, list_item_type};
pub use entities::{EntityRegistry, css_size};

use std::path::Path;

use crate::dom::{self, ArenaDom, NodeData, NodeId};
use crate::error::{Error, Result};
use crate::model::{BlockType, ContentBlock, Document};
use inline::InlineReducer;
use tags::{BlockTag, block_tag};

/// Conversion settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Fail on block-level tags outside the supported set instead of
    /// descending into them.
    pub strict: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Convert markup into a [`Document`].
///
/// Either the whole document is returned or, in strict mode, an error naming
/// the first unsupported tag; no partial result is produced.
pub fn convert(markup: &str, options: &ConvertOptions) -> Result<Document> {
    let dom = dom::parse(markup);
    convert_dom(&dom, options)
}

/// Convert raw bytes, detecting their character encoding first.
pub fn convert_bytes(bytes: &[u8], options: &ConvertOptions) -> Result<Document> {
    let markup = crate::util::decode_markup(bytes);
    convert(&markup, options)
}

/// Read and convert a file.
pub fn convert_file(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<Document> {
    let bytes = std::fs::read(path.as_ref())?;
    log::info!(
        "converting {} ({} bytes)",
        path.as_ref().display(),
        bytes.len()
    );
    convert_bytes(&bytes, options)
}

/// Convert an already-built DOM, starting at its `<body>`.
pub fn convert_dom(dom: &ArenaDom, options: &ConvertOptions) -> Result<Document> {
    let mut assembler = Assembler {
        dom,
        options,
        entities: EntityRegistry::new(),
        blocks: Vec::new(),
    };
    assembler.scan(dom.body())?;

    log::debug!(
        "assembled {} blocks, {} entities",
        assembler.blocks.len(),
        assembler.entities.len()
    );
    Ok(Document {
        blocks: assembler.blocks,
        entity_map: assembler.entities.finalize(),
    })
}

/// Per-call conversion state.
struct Assembler<'a> {
    dom: &'a ArenaDom,
    options: &'a ConvertOptions,
    entities: EntityRegistry,
    blocks: Vec<ContentBlock>,
}

impl<'a> Assembler<'a> {
    /// Scan the children of `parent` for blocks.
    fn scan(&mut self, parent: NodeId) -> Result<()> {
        let dom = self.dom;
        // Loose inline siblings waiting to become an implicit block.
        let mut run = Vec::new();

        for child in dom.children(parent) {
            let Some(node) = dom.get(child) else {
                continue;
            };
            let tag = match &node.data {
                NodeData::Text(text) => {
                    if !run.is_empty() || !text.trim().is_empty() {
                        run.push(child);
                    }
                    continue;
                }
                NodeData::Element { name, .. } => name.local.as_ref(),
                NodeData::Document | NodeData::Comment => continue,
            };

            match block_tag(tag) {
                BlockTag::Inline => run.push(child),
                BlockTag::Ignored => {}
                BlockTag::Block(block_type) => {
                    self.flush_run(&mut run)?;
                    self.emit(dom.children(child), block_type, 0)?;
                }
                BlockTag::ListItem => {
                    self.flush_run(&mut run)?;
                    let block_type = list_item_type(dom, child);
                    let depth = list_depth(dom, child);
                    self.emit(dom.children(child), block_type, depth)?;
                }
                BlockTag::List | BlockTag::Container => {
                    self.flush_run(&mut run)?;
                    self.scan(child)?;
                }
                BlockTag::Unknown => {
                    if self.options.strict {
                        return Err(Error::UnsupportedTag {
                            tag: tag.to_string(),
                        });
                    }
                    log::warn!("unsupported tag <{tag}>, converting its content");
                    self.flush_run(&mut run)?;
                    self.scan(child)?;
                }
            }
        }

        self.flush_run(&mut run)
    }

    fn flush_run(&mut self, run: &mut Vec<NodeId>) -> Result<()> {
        if run.is_empty() {
            return Ok(());
        }
        let nodes = std::mem::take(run);
        self.emit(nodes, BlockType::Unstyled, 0)
    }

    /// Reduce `nodes` into one block, then emit any lists nested in it.
    fn emit(
        &mut self,
        nodes: impl IntoIterator<Item = NodeId>,
        block_type: BlockType,
        depth: u32,
    ) -> Result<()> {
        let reduced = InlineReducer::new(self.dom, &mut self.entities)
            .preserve_whitespace(block_type == BlockType::CodeBlock)
            .reduce(nodes);

        log::debug!(
            "block {}: {} depth {depth}, {} chars",
            self.blocks.len(),
            block_type.as_str(),
            reduced.text.chars().count()
        );
        self.blocks.push(ContentBlock {
            text: reduced.text,
            block_type,
            depth,
            inline_style_ranges: reduced.inline_style_ranges,
            entity_ranges: reduced.entity_ranges,
            ..Default::default()
        });

        for list in reduced.hoisted {
            self.scan(list)?;
        }
        Ok(())
    }
}
