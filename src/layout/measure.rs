//! Measurement pass (bottom-up).
//!
//! Resolves the size a node would like before its parent distributes space.
//! Each axis comes from exactly one source, in precedence order:
//!
//! 1. explicit `width` / `height`
//! 2. `aspect_ratio` applied to the other, explicit axis
//! 3. content: children's bounding box plus padding, or the leaf's supplied
//!    natural size
//!
//! Nodes that opt out of content sizing (`fit_size_self == false`) measure
//! as zero, except the root, which keeps the size it was seeded with.
//!
//! When the main size is known, content lines are flexed before their
//! bounding box is taken, and a child whose cross size comes from content is
//! measured again against its flexed main size.
//!
//! # Cost
//!
//! Nothing is cached. Every container measures its child subtrees afresh, so
//! a pass is O(n · depth) and a leaf's [`IntrinsicSize`] is queried once per
//! ancestor level (more where a flexed child is measured again). Suppliers
//! should be cheap or cache on their side.
//!
//! [`IntrinsicSize`]: crate::engine::IntrinsicSize

use taffy::geometry::Size;

use super::axis::{
    cross_edges, cross_of, deflate, explicit, factor, inflate, length, main_edges, main_of, ratio,
    sanitize_edges, size_from_axes,
};
use super::flex::{partition_lines, resolve_flexible_lengths, Distribution, FlexItem, EPSILON};
use crate::engine::LayoutNode;
use crate::types::Direction;

/// Where an axis' size came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SizeSource {
    Explicit,
    Aspect,
    Content,
}

/// A node's measured size and where each axis came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Measured {
    pub size: Size<f32>,
    pub width_source: SizeSource,
    pub height_source: SizeSource,
}

/// Whether the node is the root of the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Root,
    Child,
}

/// Measure a node as its parent sees it, margins excluded.
pub(crate) fn measure_node(node: &LayoutNode, role: Role) -> Measured {
    let width = explicit(node.width);
    let height = explicit(node.height);
    let aspect = ratio(node.aspect_ratio);

    let (width, width_source, height, height_source) = match (width, height, aspect) {
        (Some(w), Some(h), _) => (Some(w), SizeSource::Explicit, Some(h), SizeSource::Explicit),
        (Some(w), None, Some(r)) => (Some(w), SizeSource::Explicit, Some(w / r), SizeSource::Aspect),
        (None, Some(h), Some(r)) => (Some(h * r), SizeSource::Aspect, Some(h), SizeSource::Explicit),
        (Some(w), None, None) => (Some(w), SizeSource::Explicit, None, SizeSource::Content),
        (None, Some(h), None) => (None, SizeSource::Content, Some(h), SizeSource::Explicit),
        (None, None, _) => (None, SizeSource::Content, None, SizeSource::Content),
    };

    let size = match (width, height) {
        (Some(width), Some(height)) => Size {
            width: length(width),
            height: length(height),
        },
        _ => {
            let fallback = fallback_size(node, role, Size { width, height });
            Size {
                width: width.map_or(fallback.width, length),
                height: height.map_or(fallback.height, length),
            }
        }
    };

    Measured {
        size,
        width_source,
        height_source,
    }
}

/// Size for the axes no explicit input settles.
fn fallback_size(node: &LayoutNode, role: Role, known: Size<Option<f32>>) -> Size<f32> {
    if node.fit_size_self() {
        return content_size(node, known);
    }
    match role {
        Role::Root => {
            let current = node.frame().size;
            Size {
                width: length(current.width),
                height: length(current.height),
            }
        }
        Role::Child => Size {
            width: 0.0,
            height: 0.0,
        },
    }
}

/// Padding plus the bounding box of the participating children laid out
/// with no extra space; a leaf falls back to its supplied natural size.
pub(crate) fn content_size(node: &LayoutNode, known: Size<Option<f32>>) -> Size<f32> {
    let padding = sanitize_edges(node.padding);
    let direction = node.direction;

    let mut items = collect_items(node.children(), direction);
    if items.is_empty() {
        return match node.intrinsic_size() {
            Some(natural) => Size {
                width: length(natural.width),
                height: length(natural.height),
            },
            None => inflate(
                Size {
                    width: 0.0,
                    height: 0.0,
                },
                padding,
            ),
        };
    }

    // Wrap and flex need a definite main extent; an unknown one packs a
    // single rigid line.
    let known_main = if direction.is_row() { known.width } else { known.height };
    let available = known_main
        .map(|main| {
            let inner = deflate(size_from_axes(main, 0.0, direction), padding);
            main_of(inner, direction)
        })
        .unwrap_or(f32::INFINITY);

    let outer_mains: Vec<f32> = items.iter().map(FlexItem::outer_base_main).collect();
    let lines = partition_lines(&outer_mains, available, node.wrap, node.flex_count);
    let line_limit = match node.flex_number_of_line {
        0 => lines.len(),
        limit => limit.min(lines.len()),
    };

    let mut content_main: f32 = 0.0;
    let mut content_cross: f32 = 0.0;
    for line in &lines[..line_limit] {
        let line_items = &mut items[line.clone()];
        if available.is_finite() {
            settle_line(line_items, node.children(), available, direction);
        }
        let line_main: f32 = line_items.iter().map(FlexItem::outer_main).sum();
        let thickness = line_items.iter().map(FlexItem::outer_cross).fold(0.0, f32::max);
        content_main = content_main.max(line_main);
        content_cross += thickness;
    }

    inflate(size_from_axes(content_main, content_cross, direction), padding)
}

// =============================================================================
// Flex items
// =============================================================================

/// Flex items for the participating `children`, in order.
pub(crate) fn collect_items(children: &[LayoutNode], direction: Direction) -> Vec<FlexItem> {
    children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.participates())
        .map(|(index, child)| {
            let measured = measure_node(child, Role::Child);
            let margin = sanitize_edges(child.margin);
            let cross_source = if direction.is_row() {
                measured.height_source
            } else {
                measured.width_source
            };

            let mut item = FlexItem::new(
                index,
                main_of(measured.size, direction),
                cross_of(measured.size, direction),
            );
            item.margin_main = main_edges(margin, direction);
            item.margin_cross = cross_edges(margin, direction);
            item.grow = factor(child.flex_grow);
            item.shrink = factor(child.flex_shrink);
            item.cross_per_main = match (cross_source, ratio(child.aspect_ratio)) {
                // aspect = width / height
                (SizeSource::Aspect, Some(aspect)) if direction.is_row() => Some(1.0 / aspect),
                (SizeSource::Aspect, Some(aspect)) => Some(aspect),
                _ => None,
            };
            item.content_cross = cross_source == SizeSource::Content && child.fit_size_self();
            item
        })
        .collect()
}

/// Flex one line, then measure content-sized cross axes again against the
/// flexed main sizes.
pub(crate) fn settle_line(
    items: &mut [FlexItem],
    children: &[LayoutNode],
    available: f32,
    direction: Direction,
) -> Distribution {
    let distribution = resolve_flexible_lengths(items, available);

    for item in items.iter_mut() {
        if !item.content_cross || (item.main - item.base_main).abs() <= EPSILON {
            continue;
        }
        let known = if direction.is_row() {
            Size {
                width: Some(item.main),
                height: None,
            }
        } else {
            Size {
                width: None,
                height: Some(item.main),
            }
        };
        item.cross = cross_of(content_size(&children[item.index], known), direction);
    }

    distribution
}
