//! # flexframe
//!
//! A small flex layout engine for trees of rectangular nodes.
//!
//! Each [`LayoutNode`] carries layout attributes (direction, wrap, justify,
//! align, explicit sizes, padding, margin, flex factors) and an ordered list
//! of children. [`apply_layout`] resolves a frame for every participating
//! node in one measure-then-place pass; frames are relative to the parent.
//!
//! ```text
//! attributes → measure (bottom-up) → lines → grow/shrink → justify/align → frames
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Enums, node flags, and [`Frame`]
//! - [`engine`] - [`LayoutNode`] and the host traits ([`LayoutHost`], [`IntrinsicSize`])
//! - [`layout`] - The layout pass and [`LayoutOptions`]
//!
//! ## Example
//!
//! ```
//! use flexframe::{apply_layout, Justify, LayoutNode};
//!
//! let mut toolbar = LayoutNode::new()
//!     .with_size(120.0, 20.0)
//!     .with_justify(Justify::Center)
//!     .with_child(LayoutNode::new().with_size(20.0, 20.0))
//!     .with_child(LayoutNode::new().with_size(20.0, 20.0));
//!
//! apply_layout(&mut toolbar, false);
//! assert_eq!(toolbar.children()[0].frame().x(), 40.0);
//! ```

pub mod engine;
pub mod layout;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{uniform_edges, IntrinsicSize, LayoutHost, LayoutNode};

pub use layout::{apply_layout, apply_layout_with, measure, LayoutOptions};
