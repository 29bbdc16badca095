//! Layout pass - Top-down resolution and placement.
//!
//! # Algorithm
//!
//! 1. **Root**: measure the root, place it at its origin (plus insets)
//! 2. **Per container, top-down**:
//!    - content box = frame size − padding
//!    - measure participating children (bottom-up, see `measure`)
//!    - partition into lines, resolve grow/shrink per line
//!    - arrange each line along the main axis (`justify`)
//!    - stack lines along the cross axis, align items in their line (`align`)
//!    - recurse into each placed child with its freshly resolved size
//!
//! Frames are relative to the parent's frame origin. Nothing is cached
//! between passes: the same attributes always produce the same frames.

use log::{debug, trace};
use taffy::geometry::{Point, Size};

use super::arrange::arrange;
use super::axis::{
    cross_edges, cross_of, deflate, inset_offset, main_edges, main_of, point_from_axes,
    sanitize_edges, size_from_axes,
};
use super::flex::{partition_lines, FlexItem};
use super::measure::{collect_items, measure_node, settle_line, Role};
use super::options::LayoutOptions;
use crate::engine::LayoutNode;
use crate::types::{Align, Frame, Wrap};

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Resolve frames for `root` and every participating descendant.
///
/// With `preserve_origin` the root's computed origin is added to its current
/// origin; otherwise the root starts at (0, 0) shifted by its own insets.
/// Excluded, disabled, and hidden nodes keep their previous frames; when the
/// root itself is one of them the pass does nothing.
///
/// ```
/// use flexframe::{apply_layout, LayoutNode};
///
/// let mut root = LayoutNode::new().with_size(200.0, 50.0);
/// root.add_child(LayoutNode::new().with_size(120.0, 20.0).with_flex_shrink(1.0));
/// root.add_child(LayoutNode::new().with_size(120.0, 20.0).with_flex_shrink(1.0));
///
/// apply_layout(&mut root, false);
/// assert_eq!(root.children()[0].frame().width(), 100.0);
/// ```
pub fn apply_layout(root: &mut LayoutNode, preserve_origin: bool) {
    let options = LayoutOptions::new().with_preserve_origin(preserve_origin);
    apply_layout_with(root, &options);
}

/// [`apply_layout`] with explicit options.
pub fn apply_layout_with(root: &mut LayoutNode, options: &LayoutOptions) {
    if !root.participates() {
        debug!("layout skipped: root is excluded, disabled, or hidden");
        return;
    }

    let measured = measure_node(root, Role::Root);

    let base = if options.preserve_origin {
        let current = root.frame().origin;
        Point {
            x: if current.x.is_finite() { current.x } else { 0.0 },
            y: if current.y.is_finite() { current.y } else { 0.0 },
        }
    } else {
        Point { x: 0.0, y: 0.0 }
    };
    let shift = inset_offset(root.left, root.top, root.right, root.bottom);
    let frame = Frame {
        origin: Point {
            x: base.x + shift.x,
            y: base.y + shift.y,
        },
        size: measured.size,
    };
    root.set_frame(finish_frame(frame, options));

    layout_children(root, options);

    debug!(
        "layout applied: {} nodes, root frame {:?}",
        root.subtree_len(),
        root.frame()
    );
}

/// The size `node` resolves to as the root of a pass, without laying it out.
pub fn measure(node: &LayoutNode) -> Size<f32> {
    measure_node(node, Role::Root).size
}

// =============================================================================
// Per-container layout
// =============================================================================

fn layout_children(node: &mut LayoutNode, options: &LayoutOptions) {
    let direction = node.direction;
    let wrap = node.wrap;
    let justify = node.justify;
    let align = node.align;

    let padding = sanitize_edges(node.padding);
    let content = deflate(node.frame().size, padding);
    let content_main = main_of(content, direction);
    let content_cross = cross_of(content, direction);
    let (pad_main, _) = main_edges(padding, direction);
    let (pad_cross, _) = cross_edges(padding, direction);

    let mut items = collect_items(node.children(), direction);
    if items.is_empty() {
        return;
    }

    let outer_mains: Vec<f32> = items.iter().map(FlexItem::outer_base_main).collect();
    let lines = partition_lines(&outer_mains, content_main, wrap, node.flex_count);
    let line_limit = match node.flex_number_of_line {
        0 => lines.len(),
        limit => limit.min(lines.len()),
    };

    trace!(
        "container {:?}: {} items in {} lines ({} laid out), content {}x{}",
        direction,
        items.len(),
        lines.len(),
        line_limit,
        content.width,
        content.height
    );

    let scale = options.scale();
    let children = node.children_mut();
    let mut cross_cursor = pad_cross;
    let mut positions: Vec<f32> = Vec::new();

    for line in &lines[..line_limit] {
        let line_items = &mut items[line.clone()];
        settle_line(line_items, children, content_main, direction);

        // ---------------------------------------------------------------------
        // Main axis
        // ---------------------------------------------------------------------
        let sizes: Vec<f32> = line_items.iter().map(FlexItem::outer_main).collect();
        positions.clear();
        positions.resize(sizes.len(), 0.0);
        arrange(justify, content_main, &sizes, scale, &mut positions);

        // ---------------------------------------------------------------------
        // Cross axis
        // ---------------------------------------------------------------------
        let thickness = match wrap {
            Wrap::NoWrap => content_cross,
            Wrap::Wrap => line_items.iter().map(FlexItem::outer_cross).fold(0.0, f32::max),
        };

        for (item, &position) in line_items.iter().zip(positions.iter()) {
            let free_cross = (thickness - item.outer_cross()).max(0.0);
            let align_offset = match align {
                Align::Center => free_cross / 2.0,
                Align::End => free_cross,
                Align::Default | Align::Start => 0.0,
            };

            let main_pos = pad_main + position + item.margin_main.0;
            let cross_pos = cross_cursor + align_offset + item.margin_cross.0;
            let origin = point_from_axes(main_pos, cross_pos, direction);

            let child = &mut children[item.index];
            let shift = inset_offset(child.left, child.top, child.right, child.bottom);
            let frame = Frame {
                origin: Point {
                    x: origin.x + shift.x,
                    y: origin.y + shift.y,
                },
                size: size_from_axes(item.main, item.cross, direction),
            };
            child.set_frame(finish_frame(frame, options));
        }

        cross_cursor += thickness;
    }

    // Lines past the cap are clipped.
    let clipped_origin = point_from_axes(pad_main, pad_cross, direction);
    for line in &lines[line_limit..] {
        for item in &items[line.clone()] {
            children[item.index].set_frame(Frame {
                origin: clipped_origin,
                size: Size {
                    width: 0.0,
                    height: 0.0,
                },
            });
        }
    }

    for line in &lines[..line_limit] {
        for item in &items[line.clone()] {
            layout_children(&mut children[item.index], options);
        }
    }
}

fn finish_frame(frame: Frame, options: &LayoutOptions) -> Frame {
    let frame = if options.round_to_pixels {
        frame.snapped(options.scale())
    } else {
        frame
    };
    debug_assert!(frame.width() >= 0.0 && frame.height() >= 0.0);
    frame
}
