//! Read-only DOM the converter walks.
//!
//! Markup is parsed by html5ever straight into an index-addressed arena:
//!
//! ```
//! use html2draft::dom::parse;
//!
//! let dom = parse("<ul><li>a</li></ul>");
//! let li = dom.find_by_tag("li").unwrap();
//! assert_eq!(dom.ancestors(li).filter(|&a| dom.tag(a) == Some("ul")).count(), 1);
//! ```

mod arena;
mod tree_sink;

pub use arena::{Ancestors, ArenaDom, Attribute, Children, Node, NodeData, NodeId};
pub use tree_sink::{ArenaSink, NodeHandle};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// Parse markup into an [`ArenaDom`].
///
/// Fragments are accepted; the parser wraps them in `html`/`head`/`body`.
pub fn parse(markup: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(markup.as_bytes())
        .into_dom()
}
