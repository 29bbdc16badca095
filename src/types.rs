//! Core types for flexframe.
//!
//! The closed attribute enums a [`LayoutNode`](crate::engine::LayoutNode)
//! carries, its flag set, and the resolved [`Frame`] the engine writes back.

use taffy::geometry::{Point, Size};

// =============================================================================
// Flex Enums - For layout
// =============================================================================

/// Main axis direction of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Direction {
    /// Children flow left to right.
    #[default]
    Row = 0,
    /// Children flow top to bottom.
    Column = 1,
}

impl Direction {
    /// Check if the main axis is horizontal.
    pub const fn is_row(&self) -> bool {
        matches!(self, Self::Row)
    }

    /// The direction whose main axis is this direction's cross axis.
    pub const fn cross(&self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Row,
            1 => Self::Column,
            _ => Self::Row,
        }
    }
}

/// Whether children that overflow the main axis start a new line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Wrap {
    #[default]
    NoWrap = 0,
    Wrap = 1,
}

impl From<u8> for Wrap {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::NoWrap,
            1 => Self::Wrap,
            _ => Self::NoWrap,
        }
    }
}

/// Main-axis distribution of the children of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Justify {
    /// Flush at main-start, separated by margins only.
    #[default]
    Start = 0,
    /// Equal gaps around every child, odd remainder goes to the first gap.
    StartAround = 1,
    /// The packed group is centered.
    Center = 2,
    /// Flush at main-end.
    End = 3,
    /// Equal gaps around every child, odd remainder goes to the last gap.
    EndAround = 4,
}

impl Justify {
    /// Check if this mode spreads leftover space as gaps around children.
    pub const fn is_around(&self) -> bool {
        matches!(self, Self::StartAround | Self::EndAround)
    }
}

impl From<u8> for Justify {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Start,
            1 => Self::StartAround,
            2 => Self::Center,
            3 => Self::End,
            4 => Self::EndAround,
            _ => Self::Start,
        }
    }
}

/// Cross-axis alignment of children within their line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Align {
    /// Same as [`Align::Start`].
    #[default]
    Default = 0,
    Start = 1,
    Center = 2,
    End = 3,
}

impl From<u8> for Align {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Default,
            1 => Self::Start,
            2 => Self::Center,
            3 => Self::End,
            _ => Self::Default,
        }
    }
}

// =============================================================================
// Node Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Participation flags of a layout node.
    ///
    /// Combine with bitwise OR: `NodeFlags::ENABLED | NodeFlags::HIDDEN`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Unset removes the node and its subtree from layout entirely.
        const INCLUDED_IN_LAYOUT = 1 << 0;
        /// Unset freezes the node: no measurement, no placement.
        const ENABLED = 1 << 1;
        /// Hidden nodes reserve no space.
        const HIDDEN = 1 << 2;
        /// Size an unspecified axis from content.
        const FIT_SIZE_SELF = 1 << 3;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::INCLUDED_IN_LAYOUT | Self::ENABLED | Self::FIT_SIZE_SELF
    }
}

// =============================================================================
// Frame - Resolved geometry
// =============================================================================

/// Resolved geometry of a node: origin in the parent's coordinate space
/// plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: Point<f32>,
    pub size: Size<f32>,
}

impl Frame {
    /// A zero-sized frame at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new frame.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Right edge.
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Snap origin and size onto a grid of `1 / scale` units.
    ///
    /// Edges are rounded rather than the size, so adjacent frames stay
    /// adjacent after snapping.
    pub fn snapped(&self, scale: f32) -> Self {
        if !(scale.is_finite() && scale > 0.0) {
            return *self;
        }
        let snap = |v: f32| (v * scale).round() / scale;
        let x = snap(self.origin.x);
        let y = snap(self.origin.y);
        Self::new(
            x,
            y,
            (snap(self.max_x()) - x).max(0.0),
            (snap(self.max_y()) - y).max(0.0),
        )
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::ZERO
    }
}
