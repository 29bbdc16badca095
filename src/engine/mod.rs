//! Node side of the engine.
//!
//! - LayoutNode: attribute holder, owned child list, resolved frame
//! - IntrinsicSize: natural size supplier for leaves
//! - LayoutHost: capability interface for presentational objects
//!
//! # Ownership
//!
//! Children are owned by value, so a tree can never share a node or form a
//! cycle:
//!
//! ```text
//! root ─┬─ child 0 ─── grandchild 0
//!       └─ child 1
//! ```

mod host;
mod layout_node;

pub use host::*;
pub use layout_node::*;
