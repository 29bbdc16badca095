//! Host capabilities - The seams between the engine and presentational objects.
//!
//! The engine never sees a widget class. A host object that wants layout
//! owns a [`LayoutNode`] and exposes it through [`LayoutHost`]; a node that
//! needs a natural size from outside the engine (text, images, native
//! controls) gets an [`IntrinsicSize`] supplier attached.

use std::fmt;

use taffy::geometry::Size;

use super::layout_node::LayoutNode;
use crate::layout::{apply_layout, apply_layout_with, LayoutOptions};

/// Supplies a leaf's natural size.
///
/// Queried during the measurement pass for nodes that size themselves from
/// content and have no participating children. The engine treats the answer
/// as opaque; non-finite or negative components are clamped to zero.
pub trait IntrinsicSize: Send + Sync {
    /// The natural size of the node, padding included.
    fn intrinsic_size(&self) -> Size<f32>;
}

impl<F> IntrinsicSize for F
where
    F: Fn() -> Size<f32> + Send + Sync,
{
    fn intrinsic_size(&self) -> Size<f32> {
        self()
    }
}

/// Opaque; formatting never queries the supplier.
impl fmt::Debug for dyn IntrinsicSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IntrinsicSize(..)")
    }
}

/// A presentational object that carries layout attributes and a child list.
///
/// Implementors keep their [`LayoutNode`] in sync with user configuration and
/// copy resolved frames back onto themselves after a pass.
pub trait LayoutHost {
    /// The layout node owned by this object.
    fn layout_node(&self) -> &LayoutNode;

    /// Mutable access to the layout node owned by this object.
    fn layout_node_mut(&mut self) -> &mut LayoutNode;

    /// Set attributes in one scoped call.
    fn configure_layout<F>(&mut self, configure: F)
    where
        F: FnOnce(&mut LayoutNode),
    {
        self.layout_node_mut().configure(configure);
    }

    /// Run a layout pass rooted at this object's node.
    fn apply_layout(&mut self, preserve_origin: bool) {
        apply_layout(self.layout_node_mut(), preserve_origin);
    }

    /// Run a layout pass rooted at this object's node with explicit options.
    fn apply_layout_with(&mut self, options: &LayoutOptions) {
        apply_layout_with(self.layout_node_mut(), options);
    }
}

impl LayoutHost for LayoutNode {
    fn layout_node(&self) -> &LayoutNode {
        self
    }

    fn layout_node_mut(&mut self) -> &mut LayoutNode {
        self
    }
}
