//! Property tests for document-wide conversion invariants.

use html2draft::{ContentBlock, ConvertOptions, Document, convert};
use proptest::prelude::*;

/// Inline content item inside a generated block.
#[derive(Debug, Clone)]
enum Piece {
    Word(String),
    /// Word on a fresh, indented source line.
    Indented(String),
    Bold(String),
    Link(String),
    Image,
    Break,
}

impl Piece {
    fn markup(&self) -> String {
        match self {
            Piece::Word(w) => format!("{w} "),
            Piece::Indented(w) => format!("\n    {w}"),
            Piece::Bold(w) => format!("<b>{w}</b>"),
            Piece::Link(w) => format!("<a href='#{w}'>{w}</a>"),
            Piece::Image => "<img src='x.png'>".to_string(),
            Piece::Break => "<br>".to_string(),
        }
    }

    /// Characters this piece contributes to block text.
    fn width(&self) -> usize {
        match self {
            Piece::Word(w) => w.chars().count() + 1,
            Piece::Indented(w) => w.chars().count() + 5,
            Piece::Bold(w) | Piece::Link(w) => w.chars().count(),
            Piece::Image => 0,
            Piece::Break => 1,
        }
    }

    fn entities(&self) -> usize {
        matches!(self, Piece::Link(_) | Piece::Image) as usize
    }
}

fn word() -> impl Strategy<Value = String> {
    "[a-zé]{1,8}"
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        word().prop_map(Piece::Word),
        word().prop_map(Piece::Indented),
        word().prop_map(Piece::Bold),
        word().prop_map(Piece::Link),
        Just(Piece::Image),
        Just(Piece::Break),
    ]
}

/// A self-contained block-level fragment.
#[derive(Debug, Clone)]
struct Fragment {
    tag: &'static str,
    pieces: Vec<Piece>,
}

impl Fragment {
    fn markup(&self) -> String {
        let inner: String = self.pieces.iter().map(Piece::markup).collect();
        match self.tag {
            "li" => format!("<ul><li>{inner}</li></ul>"),
            tag => format!("<{tag}>{inner}</{tag}>"),
        }
    }
}

fn fragment() -> impl Strategy<Value = Fragment> {
    (
        prop::sample::select(vec!["p", "h2", "blockquote", "li"]),
        prop::collection::vec(piece(), 0..8),
    )
        .prop_map(|(tag, pieces)| Fragment { tag, pieces })
}

fn run(markup: &str) -> Document {
    convert(markup, &ConvertOptions::default()).expect("lenient conversion never fails")
}

/// Blocks with entity keys shifted down by `offset`.
fn rebase(blocks: &[ContentBlock], offset: u32) -> Vec<ContentBlock> {
    blocks
        .iter()
        .cloned()
        .map(|mut b| {
            for range in &mut b.entity_ranges {
                range.key -= offset;
            }
            b
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_entity_keys_are_dense(fragments in prop::collection::vec(fragment(), 0..6)) {
        let markup: String = fragments.iter().map(Fragment::markup).collect();
        let doc = run(&markup);

        let expected: usize = fragments.iter().flat_map(|f| &f.pieces).map(Piece::entities).sum();
        prop_assert_eq!(doc.entity_map.len(), expected);

        let keys: Vec<u32> = doc
            .blocks
            .iter()
            .flat_map(|b| b.entity_ranges.iter().map(|r| r.key))
            .collect();
        let dense: Vec<u32> = (0..expected as u32).collect();
        prop_assert_eq!(keys, dense);
    }

    #[test]
    fn prop_block_text_length(fragment in fragment()) {
        let doc = run(&fragment.markup());
        prop_assert_eq!(doc.blocks.len(), 1);

        let expected: usize = fragment.pieces.iter().map(Piece::width).sum();
        prop_assert_eq!(doc.blocks[0].char_len(), expected);

        for range in &doc.blocks[0].inline_style_ranges {
            prop_assert!((range.offset + range.length) as usize <= expected);
        }
    }

    #[test]
    fn prop_list_depth(depth in 1usize..8) {
        let markup = format!("{}x{}", "<ul><li>".repeat(depth), "</li></ul>".repeat(depth));
        let doc = run(&markup);

        // Each level but the innermost yields an empty block before its nested list.
        prop_assert_eq!(doc.blocks.len(), depth);
        for (level, block) in doc.blocks.iter().enumerate() {
            prop_assert_eq!(block.depth as usize, level);
        }
    }

    #[test]
    fn prop_fragments_concatenate(a in fragment(), b in fragment()) {
        let left = run(&a.markup());
        let right = run(&b.markup());
        let both = run(&(a.markup() + &b.markup()));

        let split = left.blocks.len();
        prop_assert_eq!(&both.blocks[..split], &left.blocks[..]);
        prop_assert_eq!(
            rebase(&both.blocks[split..], left.entity_map.len() as u32),
            right.blocks
        );
    }
}
