//! Cascading extraction of subtrees to the top level.

use super::node::{Cascade, Node, cascade_opt};

/// Flatten `node` into a sequence where every descendant accepted by
/// `should_extract(parent, child)` is lifted out to sit between copies of
/// its ancestors.
///
/// Extraction resolves innermost first: children are extracted against
/// their own parents before `node` decides which of the results to lift
/// further. The output starts with a childless copy of `node` (a wrapper)
/// that collects the non-extracted children; after an extracted child a
/// fresh wrapper is opened only if the next element stays, so two adjacent
/// extracted siblings are not separated by an empty wrapper and no wrapper
/// trails the last one.
///
/// Wrappers keep `node`'s authored state. Extracted nodes get the state
/// cascaded from `inherited` through `node` onto their own state.
///
/// A leaf is returned unchanged.
pub fn extract_to_top_level<D, S, P>(
    node: &Node<D, S>,
    should_extract: &P,
    inherited: Option<&S>,
) -> Vec<Node<D, S>>
where
    D: Clone,
    S: Cascade,
    P: Fn(&Node<D, S>, &Node<D, S>) -> bool,
{
    if node.is_leaf() {
        return vec![node.clone()];
    }

    let current_state = cascade_opt(inherited, node.state.as_ref());

    let children_extracted: Vec<Node<D, S>> = node
        .children
        .iter()
        .flat_map(|child| {
            let cascaded = cascade_opt(current_state.as_ref(), child.state.as_ref());
            extract_to_top_level(child, should_extract, cascaded.as_ref())
        })
        .collect();

    let mut top_level = vec![node.shallow_copy()];
    let mut current = 0;

    let mut iter = children_extracted.into_iter().peekable();
    while let Some(child) = iter.next() {
        if !should_extract(node, &child) {
            top_level[current].children.push(child);
            continue;
        }

        let state = cascade_opt(current_state.as_ref(), child.state.as_ref());
        let reopen = iter.peek().is_some_and(|next| !should_extract(node, next));
        top_level.push(Node { state, ..child });

        if reopen {
            top_level.push(node.shallow_copy());
            current = top_level.len() - 1;
        }
    }

    top_level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextStyle;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Kind {
        Block,
        Inline,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Data {
        kind: Kind,
        label: &'static str,
    }

    type TestNode = Node<Data, TextStyle>;

    fn block(label: &'static str) -> TestNode {
        Node::new(Data {
            kind: Kind::Block,
            label,
        })
    }

    fn inline(label: &'static str) -> TestNode {
        Node::new(Data {
            kind: Kind::Inline,
            label,
        })
    }

    fn is_block(_parent: &TestNode, child: &TestNode) -> bool {
        child.data.kind == Kind::Block
    }

    fn extract(node: &TestNode) -> Vec<TestNode> {
        extract_to_top_level(node, &is_block, None)
    }

    #[test]
    fn test_leaf_is_returned_unchanged() {
        let node = block("1").with_state(TextStyle::bold());
        assert_eq!(extract(&node), vec![node]);
    }

    #[test]
    fn test_only_inline_children_is_identity() {
        let node = inline("1").with_children(vec![inline("2")]);
        assert_eq!(extract(&node), vec![node]);
    }

    #[test]
    fn test_only_inline_children_with_state_is_identity() {
        let node = inline("1").with_children(vec![inline("2").with_state(TextStyle::bold())]);
        assert_eq!(extract(&node), vec![node]);
    }

    #[test]
    fn test_deeply_nested_inline_is_identity() {
        let node = inline("1").with_children(vec![
            inline("2").with_children(vec![inline("3")]),
        ]);
        assert_eq!(extract(&node), vec![node]);
    }

    #[test]
    fn test_nested_block_moves_to_top_level() {
        let child = block("2");
        let node = block("1").with_children(vec![child.clone()]);

        assert_eq!(extract(&node), vec![block("1"), child]);
    }

    #[test]
    fn test_wrapper_repeats_after_block_when_inline_follows() {
        let child1 = block("2");
        let child2 = inline("3");
        let node = block("1").with_children(vec![child1.clone(), child2.clone()]);

        assert_eq!(
            extract(&node),
            vec![
                block("1"),
                child1,
                block("1").with_children(vec![child2]),
            ]
        );
    }

    #[test]
    fn test_wrapper_repeats_between_blocks_separated_by_inline() {
        let block1 = block("2");
        let block2 = block("3");
        let inline_elem = inline("4");
        let node = block("1").with_children(vec![
            block1.clone(),
            inline_elem.clone(),
            block2.clone(),
        ]);

        assert_eq!(
            extract(&node),
            vec![
                block("1"),
                block1,
                block("1").with_children(vec![inline_elem]),
                block2,
            ]
        );
    }

    #[test]
    fn test_no_empty_wrapper_between_adjacent_blocks() {
        let block1 = block("2");
        let block2 = block("3");
        let node = block("1").with_children(vec![block1.clone(), block2.clone()]);

        assert_eq!(extract(&node), vec![block("1"), block1, block2]);
    }

    #[test]
    fn test_blocks_deeply_nested_in_inlines_are_extracted() {
        let node = block("root").with_children(vec![
            inline("a"),
            inline("outer").with_children(vec![
                inline("inner").with_children(vec![inline("b"), block("deep")]),
            ]),
        ]);

        assert_eq!(
            extract(&node),
            vec![
                block("root").with_children(vec![
                    inline("a"),
                    inline("outer").with_children(vec![
                        inline("inner").with_children(vec![inline("b")]),
                    ]),
                ]),
                block("deep"),
            ]
        );
    }

    #[test]
    fn test_nesting_is_repeated_after_deeply_nested_block() {
        let node = block("root").with_children(vec![
            inline("a"),
            inline("outer").with_children(vec![
                inline("inner").with_children(vec![inline("b"), block("deep"), inline("c")]),
            ]),
        ]);

        assert_eq!(
            extract(&node),
            vec![
                block("root").with_children(vec![
                    inline("a"),
                    inline("outer").with_children(vec![
                        inline("inner").with_children(vec![inline("b")]),
                    ]),
                ]),
                block("deep"),
                block("root").with_children(vec![
                    inline("outer").with_children(vec![
                        inline("inner").with_children(vec![inline("c")]),
                    ]),
                ]),
            ]
        );
    }

    #[test]
    fn test_state_cascades_to_deeply_nested_block() {
        let node = block("1")
            .with_state(TextStyle::bold())
            .with_children(vec![inline("i").with_children(vec![block("deep")])]);

        assert_eq!(
            extract(&node),
            vec![
                block("1")
                    .with_state(TextStyle::bold())
                    .with_children(vec![inline("i")]),
                block("deep").with_state(TextStyle::bold()),
            ]
        );
    }

    #[test]
    fn test_state_merges_with_block_state() {
        let node = block("1")
            .with_state(TextStyle::bold())
            .with_children(vec![inline("i").with_children(vec![
                block("deep").with_state(TextStyle::italics()),
            ])]);

        let result = extract(&node);
        assert_eq!(
            result[1],
            block("deep").with_state(TextStyle::bold().with_italics(true))
        );
    }

    #[test]
    fn test_state_merges_through_intermediate_inline() {
        let node = block("1")
            .with_state(TextStyle::bold())
            .with_children(vec![
                inline("i")
                    .with_state(TextStyle::italics())
                    .with_children(vec![block("deep")]),
            ]);

        assert_eq!(
            extract(&node),
            vec![
                block("1").with_state(TextStyle::bold()).with_children(vec![
                    inline("i").with_state(TextStyle::italics()),
                ]),
                block("deep").with_state(TextStyle::bold().with_italics(true)),
            ]
        );
    }

    #[test]
    fn test_deepest_state_wins() {
        let node = block("1")
            .with_state(TextStyle::bold())
            .with_children(vec![inline("i").with_children(vec![
                block("deep").with_state(TextStyle::new().with_bold(false)),
            ])]);
        assert_eq!(
            extract(&node)[1].state,
            Some(TextStyle::new().with_bold(false))
        );

        let node = block("1")
            .with_state(TextStyle::bold())
            .with_children(vec![
                inline("i")
                    .with_state(TextStyle::new().with_bold(false))
                    .with_children(vec![block("deep")]),
            ]);
        assert_eq!(
            extract(&node)[1].state,
            Some(TextStyle::new().with_bold(false))
        );
    }

    #[test]
    fn test_wrapper_keeps_authored_state_under_inherited_state() {
        let node = block("1")
            .with_state(TextStyle::italics())
            .with_children(vec![block("2")]);

        let result = extract_to_top_level(&node, &is_block, Some(&TextStyle::bold()));
        assert_eq!(result[0].state, Some(TextStyle::italics()));
        assert_eq!(
            result[1].state,
            Some(TextStyle::bold().with_italics(true))
        );
    }

    #[test]
    fn test_predicate_sees_the_extracting_parent() {
        // Only the root may lift blocks; the intermediate block keeps its child.
        let node = block("root").with_children(vec![
            block("mid").with_children(vec![block("leaf")]),
        ]);
        let only_root = |parent: &TestNode, child: &TestNode| {
            parent.data.label == "root" && child.data.kind == Kind::Block
        };

        let result = extract_to_top_level(&node, &only_root, None);
        assert_eq!(
            result,
            vec![
                block("root"),
                block("mid").with_children(vec![block("leaf")]),
            ]
        );
    }
}
