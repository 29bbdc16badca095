//! LayoutNode - One box in the layout tree.
//!
//! A node holds plain layout attributes, an ordered list of exclusively owned
//! children, and the frame the last layout pass resolved for it. Attributes
//! are mutated freely between passes; the engine only ever writes the frame.

use std::sync::Arc;

use taffy::geometry::{Rect, Size};

use super::host::IntrinsicSize;
use crate::layout::apply_layout;
use crate::types::{Align, Direction, Frame, Justify, NodeFlags, Wrap};

/// Build an edge set with the same value on all four sides.
pub fn uniform_edges(value: f32) -> Rect<f32> {
    Rect {
        left: value,
        right: value,
        top: value,
        bottom: value,
    }
}

/// A box in the layout tree.
///
/// # Property Categories
///
/// - **Container**: direction, wrap, justify, align, flex_count, flex_number_of_line
/// - **Item**: flex_grow, flex_shrink
/// - **Frame inputs**: left, top, right, bottom, width, height, aspect_ratio
/// - **Spacing**: padding (4), margin (4)
/// - **Flags**: included in layout, enabled, hidden, fit size self
///
/// # Example
///
/// ```
/// use flexframe::{apply_layout, Direction, LayoutNode};
///
/// let mut root = LayoutNode::new().with_direction(Direction::Row).with_width(300.0);
/// root.add_child(LayoutNode::new().with_size(100.0, 20.0).with_flex_grow(1.0));
/// root.add_child(LayoutNode::new().with_size(100.0, 20.0).with_flex_grow(1.0));
///
/// apply_layout(&mut root, false);
/// assert_eq!(root.children()[1].frame().x(), 150.0);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutNode {
    // =========================================================================
    // CONTAINER PROPERTIES
    // =========================================================================

    /// Main axis of this node's children.
    pub direction: Direction,

    pub wrap: Wrap,

    pub justify: Justify,

    pub align: Align,

    /// Children per line when wrapping. 0 packs by available space.
    pub flex_count: usize,

    /// Maximum number of lines laid out. 0 means unlimited.
    pub flex_number_of_line: usize,

    // =========================================================================
    // ITEM PROPERTIES
    // =========================================================================

    /// Share of positive leftover space on the parent's main axis.
    pub flex_grow: f32,

    /// Share of the deficit absorbed when the parent's line overflows.
    pub flex_shrink: f32,

    // =========================================================================
    // FRAME INPUTS (None = compute)
    // =========================================================================

    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,

    /// width / height, used when exactly one of width or height is known.
    pub aspect_ratio: Option<f32>,

    // =========================================================================
    // SPACING
    // =========================================================================

    pub padding: Rect<f32>,
    pub margin: Rect<f32>,

    pub flags: NodeFlags,

    intrinsic: Option<Arc<dyn IntrinsicSize>>,
    children: Vec<LayoutNode>,
    frame: Frame,
}

impl Default for LayoutNode {
    fn default() -> Self {
        Self {
            direction: Direction::Row,
            wrap: Wrap::NoWrap,
            justify: Justify::Start,
            align: Align::Default,
            flex_count: 0,
            flex_number_of_line: 0,

            flex_grow: 0.0,
            flex_shrink: 0.0,

            left: None,
            top: None,
            right: None,
            bottom: None,
            width: None,
            height: None,
            aspect_ratio: None,

            padding: uniform_edges(0.0),
            margin: uniform_edges(0.0),

            flags: NodeFlags::default(),

            intrinsic: None,
            children: Vec::new(),
            frame: Frame::ZERO,
        }
    }
}

impl LayoutNode {
    /// Create a node with default attributes.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Flags
    // =========================================================================

    pub fn is_included_in_layout(&self) -> bool {
        self.flags.contains(NodeFlags::INCLUDED_IN_LAYOUT)
    }

    pub fn set_included_in_layout(&mut self, included: bool) {
        self.flags.set(NodeFlags::INCLUDED_IN_LAYOUT, included);
    }

    pub fn is_enabled(&self) -> bool {
        self.flags.contains(NodeFlags::ENABLED)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.set(NodeFlags::ENABLED, enabled);
    }

    pub fn is_hidden(&self) -> bool {
        self.flags.contains(NodeFlags::HIDDEN)
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.flags.set(NodeFlags::HIDDEN, hidden);
    }

    pub fn fit_size_self(&self) -> bool {
        self.flags.contains(NodeFlags::FIT_SIZE_SELF)
    }

    pub fn set_fit_size_self(&mut self, fit: bool) {
        self.flags.set(NodeFlags::FIT_SIZE_SELF, fit);
    }

    /// Whether this node takes part in its parent's layout.
    ///
    /// Excluded, disabled, and hidden nodes are skipped and reserve no space.
    pub fn participates(&self) -> bool {
        self.is_included_in_layout() && self.is_enabled() && !self.is_hidden()
    }

    // =========================================================================
    // Spacing shorthands
    // =========================================================================

    /// Set all four padding edges.
    pub fn set_padding(&mut self, all: f32) {
        self.padding = uniform_edges(all);
    }

    /// Set all four margin edges.
    pub fn set_margin(&mut self, all: f32) {
        self.margin = uniform_edges(all);
    }

    // =========================================================================
    // Intrinsic size
    // =========================================================================

    /// Attach a fixed natural size.
    pub fn set_intrinsic_size(&mut self, size: Size<f32>) {
        self.intrinsic = Some(Arc::new(move || size));
    }

    /// Attach a supplier queried for the natural size on every pass.
    pub fn set_intrinsic_source<S>(&mut self, source: S)
    where
        S: IntrinsicSize + 'static,
    {
        self.intrinsic = Some(Arc::new(source));
    }

    pub fn clear_intrinsic_size(&mut self) {
        self.intrinsic = None;
    }

    /// Ask the attached supplier for the natural size, if there is one.
    pub fn intrinsic_size(&self) -> Option<Size<f32>> {
        self.intrinsic.as_ref().map(|source| source.intrinsic_size())
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [LayoutNode] {
        &mut self.children
    }

    pub fn child(&self, index: usize) -> Option<&LayoutNode> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut LayoutNode> {
        self.children.get_mut(index)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Append a child, returning its index.
    pub fn add_child(&mut self, child: LayoutNode) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    /// Insert a child at `index`, clamped to the end of the list.
    pub fn insert_child(&mut self, index: usize, child: LayoutNode) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    /// Detach and return the child at `index`.
    pub fn remove_child(&mut self, index: usize) -> Option<LayoutNode> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    // =========================================================================
    // Resolved geometry
    // =========================================================================

    /// The frame written by the last layout pass.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Seed the frame, e.g. with the host's current bounds before a pass.
    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    /// Frames of this node and every descendant, in pre-order.
    pub fn collect_frames(&self) -> Vec<Frame> {
        let mut frames = Vec::new();
        self.collect_frames_into(&mut frames);
        frames
    }

    fn collect_frames_into(&self, frames: &mut Vec<Frame>) {
        frames.push(self.frame);
        for child in &self.children {
            child.collect_frames_into(frames);
        }
    }

    /// Number of nodes in this subtree, this node included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::subtree_len).sum::<usize>()
    }

    /// Run a layout pass rooted at this node.
    pub fn apply_layout(&mut self, preserve_origin: bool) {
        apply_layout(self, preserve_origin);
    }

    // =========================================================================
    // Configuration surface
    // =========================================================================

    /// Mutate attributes in one scoped call.
    pub fn configure<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut LayoutNode),
    {
        configure(self);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    pub fn with_padding(mut self, all: f32) -> Self {
        self.set_padding(all);
        self
    }

    pub fn with_margin(mut self, all: f32) -> Self {
        self.set_margin(all);
        self
    }

    pub fn with_flex_grow(mut self, grow: f32) -> Self {
        self.flex_grow = grow;
        self
    }

    pub fn with_flex_shrink(mut self, shrink: f32) -> Self {
        self.flex_shrink = shrink;
        self
    }

    pub fn with_flex_count(mut self, count: usize) -> Self {
        self.flex_count = count;
        self
    }

    pub fn with_flex_number_of_line(mut self, lines: usize) -> Self {
        self.flex_number_of_line = lines;
        self
    }

    pub fn with_intrinsic_size(mut self, width: f32, height: f32) -> Self {
        self.set_intrinsic_size(Size { width, height });
        self
    }

    pub fn with_child(mut self, child: LayoutNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = LayoutNode>,
    {
        self.children.extend(children);
        self
    }
}
