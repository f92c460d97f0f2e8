//! Tree passes between classification and serialization.
//!
//! All passes take and return owned node values; nothing is mutated in place.
//!
//! ## Pipeline Order
//!
//! 1. **Extract** - Lift block-level subtrees to the top level, cascading state
//! 2. **Vacuum** - Drop inline runs that carry only whitespace
//! 3. **Wrap** - Put remaining inline runs into anonymous blocks

mod extract;
mod node;
mod pass;
mod predicates;
mod ranges;
mod vacuum;
mod wrap;

pub use extract::extract_to_top_level;
pub use node::{Cascade, Node, cascade_opt};
pub use pass::map_scopes;
pub use predicates::{is_structural_container, should_extract};
pub use ranges::{Range, find_runs, replace_runs};
pub use vacuum::{is_blank, vacuum};
pub use wrap::{ensure_no_top_level_inline, wrap_inline_runs, wrap_top_level};
