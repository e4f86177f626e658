//! # html2draft
//!
//! Convert HTML markup into the raw content model of the Draft.js rich-text
//! editor: an ordered list of blocks carrying plain text with inline style
//! and entity ranges, plus a side table of entities (links, images).
//!
//! ## Quick Start
//!
//! ```
//! use html2draft::{convert, ConvertOptions};
//!
//! let doc = convert(
//!     "<p>My content has <strong>some <em>content</em></strong></p>",
//!     &ConvertOptions::default(),
//! )
//! .unwrap();
//!
//! let block = &doc.blocks[0];
//! assert_eq!(block.text, "My content has some content");
//! assert_eq!(block.inline_style_ranges.len(), 2);
//! ```
//!
//! ## Supported markup
//!
//! - Blocks: `p`, `h1`-`h6`, `blockquote`, `pre`, `li` inside `ul`/`ol`
//! - Inline styles: `strong`/`b`, `em`/`i`, `u`, `s`/`del`, `code`
//! - Entities: `a` (LINK), `img` (IMAGE)
//! - Line breaks: `br`
//!
//! Containers such as `div` are transparent. Other block-level tags are
//! descended into, or rejected when [`ConvertOptions::strict`] is set.
//!
//! ## JSON output
//!
//! ```
//! use html2draft::{convert, ConvertOptions};
//!
//! let doc = convert("<br><br/>", &ConvertOptions::new().with_strict(true)).unwrap();
//! assert_eq!(
//!     doc.to_json().unwrap(),
//!     r#"{"blocks":[{"key":"","text":"\n\n","type":"unstyled","depth":0,"inlineStyleRanges":[],"entityRanges":[],"data":{}}],"entityMap":{}}"#
//! );
//! ```

pub mod convert;
pub mod dom;
pub mod error;
pub mod model;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use convert::{ConvertOptions, convert, convert_bytes, convert_dom, convert_file};
pub use error::{Error, Result};
pub use model::{
    BlockType, ContentBlock, Document, Entity, EntityData, EntityMap, EntityRange, EntityType,
    ImageData, InlineStyle, InlineStyleRange, LinkData, Mutability,
};
