//! Layout Module
//!
//! Flex layout computation over a [`LayoutNode`](crate::engine::LayoutNode) tree.
//!
//! # Architecture
//!
//! One pass runs in two directions:
//!
//! 1. **Measure** (bottom-up): every participating node resolves the size it
//!    wants from explicit sizes, aspect ratio, or content
//! 2. **Place** (top-down): each container splits its children into lines,
//!    grows or shrinks them, then justifies and aligns them inside its
//!    content box
//!
//! Frames are written in place; nothing else is retained between passes.
//!
//! # Example
//!
//! ```
//! use flexframe::{apply_layout, Direction, LayoutNode};
//!
//! let mut root = LayoutNode::new()
//!     .with_direction(Direction::Column)
//!     .with_size(100.0, 100.0)
//!     .with_child(LayoutNode::new().with_height(30.0))
//!     .with_child(LayoutNode::new().with_height(30.0).with_flex_grow(1.0));
//!
//! apply_layout(&mut root, false);
//! assert_eq!(root.children()[1].frame().height(), 70.0);
//! ```

mod arrange;
mod axis;
mod compute;
mod flex;
mod measure;
mod options;

pub use compute::{apply_layout, apply_layout_with, measure};
pub use options::LayoutOptions;
