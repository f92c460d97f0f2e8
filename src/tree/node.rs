//! Immutable state/data tree.

/// Merge rule for per-node state.
///
/// `ancestor.cascade(descendant)` produces the state visible below
/// `descendant`: anything the descendant sets wins, anything it leaves unset
/// is inherited from the ancestor.
pub trait Cascade: Clone {
    fn cascade(&self, descendant: &Self) -> Self;
}

/// Cascade two optional states. `None` only when both are `None`.
pub fn cascade_opt<S: Cascade>(ancestor: Option<&S>, descendant: Option<&S>) -> Option<S> {
    match (ancestor, descendant) {
        (None, None) => None,
        (Some(a), None) => Some(a.clone()),
        (None, Some(d)) => Some(d.clone()),
        (Some(a), Some(d)) => Some(a.cascade(d)),
    }
}

/// A tree node carrying payload `data`, authored `state` and ordered children.
///
/// Nodes are values: every pass builds new nodes instead of mutating
/// existing ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<D, S> {
    pub data: D,
    pub state: Option<S>,
    pub children: Vec<Node<D, S>>,
}

impl<D, S> Node<D, S> {
    pub fn new(data: D) -> Self {
        Self {
            data,
            state: None,
            children: Vec::new(),
        }
    }

    pub fn with_state(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_children(mut self, children: Vec<Node<D, S>>) -> Self {
        self.children = children;
        self
    }

    /// A node without children. Leaves are terminal to extraction.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }

    /// Leaves of this subtree in document order.
    pub fn leaves(&self) -> Vec<&Node<D, S>> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                out.push(node);
            } else {
                stack.extend(node.children.iter().rev());
            }
        }
        out
    }
}

impl<D: Clone, S: Clone> Node<D, S> {
    /// Structural copy: same data and authored state, no children.
    pub fn shallow_copy(&self) -> Self {
        Self {
            data: self.data.clone(),
            state: self.state.clone(),
            children: Vec::new(),
        }
    }
}
