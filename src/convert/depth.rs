//! List nesting resolution for `<li>` blocks.

use crate::dom::{ArenaDom, NodeId};
use crate::model::BlockType;

fn is_list(dom: &ArenaDom, id: NodeId) -> bool {
    matches!(dom.tag(id), Some("ul" | "ol"))
}

/// Nesting depth of a list item: list ancestors minus one, never below zero.
pub fn list_depth(dom: &ArenaDom, item: NodeId) -> u32 {
    let lists = dom.ancestors(item).filter(|&a| is_list(dom, a)).count() as u32;
    lists.saturating_sub(1)
}

/// Block type of a list item, decided by its nearest list ancestor.
///
/// An `<li>` outside any list is treated as unordered.
pub fn list_item_type(dom: &ArenaDom, item: NodeId) -> BlockType {
    match dom.ancestors(item).find_map(|a| dom.tag(a).filter(|_| is_list(dom, a))) {
        Some("ol") => BlockType::OrderedListItem,
        _ => BlockType::UnorderedListItem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    fn item_by_id(dom: &ArenaDom, id: &str) -> NodeId {
        let mut stack = vec![dom.document()];
        while let Some(node) = stack.pop() {
            if dom.attr(node, "id") == Some(id) {
                return node;
            }
            stack.extend(dom.children(node));
        }
        panic!("no element with id {id}");
    }

    #[test]
    fn test_top_level_item() {
        let dom = parse(
            r#"<body><ul>
                <li>a</li>
                <li id='123'>c</li>
            </ul></body>"#,
        );
        assert_eq!(list_depth(&dom, item_by_id(&dom, "123")), 0);
    }

    #[test]
    fn test_nested_item() {
        let dom = parse(
            r#"<body><ul>
                <li>a
                    <ul><li id='123'>b</li></ul>
                </li>
                <li>c</li>
            </ul></body>"#,
        );
        assert_eq!(list_depth(&dom, item_by_id(&dom, "123")), 1);
    }

    #[test]
    fn test_doubly_nested_item() {
        let dom = parse(
            r#"<body><ul>
                <li>a
                    <ul><li>b
                        <ul><li id='123'>c</li></ul>
                    </li></ul>
                </li>
                <li>c</li>
            </ul></body>"#,
        );
        assert_eq!(list_depth(&dom, item_by_id(&dom, "123")), 2);
    }

    #[test]
    fn test_orphan_item_is_depth_zero() {
        let mut dom = ArenaDom::new();
        let li = dom.create_html_element("li", vec![]);
        dom.append(dom.document(), li);

        assert_eq!(list_depth(&dom, li), 0);
        assert_eq!(list_item_type(&dom, li), BlockType::UnorderedListItem);
    }

    #[test]
    fn test_nearest_list_decides_type() {
        let dom = parse("<ul><li>a<ol><li id='inner'>b</li></ol></li></ul>");
        let inner = item_by_id(&dom, "inner");

        assert_eq!(list_item_type(&dom, inner), BlockType::OrderedListItem);
        assert_eq!(list_depth(&dom, inner), 1);
    }
}
