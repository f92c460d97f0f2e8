//! Context-sensitive extraction predicate.

use crate::model::{DocNode, Role};

/// Decide whether `child` is lifted out of `parent` during extraction.
///
/// Table structure is preserved: cells keep everything, rows keep cells,
/// row groups keep rows, tables keep rows and row groups. Anywhere else only
/// block-level nodes are lifted.
pub fn should_extract(parent: &DocNode, child: &DocNode) -> bool {
    let child_role = child.role();
    match parent.role() {
        Role::TableCell => false,
        Role::TableRow => child_role != Role::TableCell,
        Role::TableChild => child_role != Role::TableRow,
        Role::Table => !matches!(child_role, Role::TableRow | Role::TableChild),
        Role::Block | Role::Inline => child_role.is_block_level(),
    }
}

/// Check if a role is a table container whose text children can only be
/// formatting whitespace.
pub fn is_structural_container(role: Role) -> bool {
    matches!(role, Role::Table | Role::TableChild | Role::TableRow)
}
