//! Flex lines and flexible length resolution.
//!
//! # Algorithm
//!
//! 1. **Partition**: split items into lines. No-wrap keeps one line; wrap
//!    either breaks every `flex_count` items or packs greedily by
//!    margin-box main size.
//! 2. **Resolve**: per line, leftover = available main − Σ margin-box main.
//!    Positive leftover grows items by `flex_grow` share, negative leftover
//!    shrinks them by `flex_shrink` share. Items that hit zero freeze and
//!    the rest of the deficit is redistributed among the others.

use std::ops::Range;

use log::trace;

use super::axis::factor;
use crate::types::Wrap;

/// Tolerance for float comparisons of accumulated lengths.
pub(crate) const EPSILON: f32 = 1e-4;

/// Per-child data collected for one container pass.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FlexItem {
    /// Index into the container's children.
    pub index: usize,
    /// Main size before grow/shrink.
    pub base_main: f32,
    /// Main size after grow/shrink.
    pub main: f32,
    pub cross: f32,
    pub margin_main: (f32, f32),
    pub margin_cross: (f32, f32),
    pub grow: f32,
    pub shrink: f32,
    /// Set when the cross size follows the main size through an aspect ratio.
    pub cross_per_main: Option<f32>,
    /// Cross size came from content, so a new main size can change it.
    pub content_cross: bool,
    /// Clamped at zero during shrink; absorbs no further deficit.
    pub frozen: bool,
}

impl FlexItem {
    pub fn new(index: usize, main: f32, cross: f32) -> Self {
        Self {
            index,
            base_main: main,
            main,
            cross,
            margin_main: (0.0, 0.0),
            margin_cross: (0.0, 0.0),
            grow: 0.0,
            shrink: 0.0,
            cross_per_main: None,
            content_cross: false,
            frozen: false,
        }
    }

    /// Margin-box main size before flexing.
    #[inline]
    pub fn outer_base_main(&self) -> f32 {
        self.base_main + self.margin_main.0 + self.margin_main.1
    }

    /// Margin-box main size after flexing.
    #[inline]
    pub fn outer_main(&self) -> f32 {
        self.main + self.margin_main.0 + self.margin_main.1
    }

    #[inline]
    pub fn outer_cross(&self) -> f32 {
        self.cross + self.margin_cross.0 + self.margin_cross.1
    }
}

/// How a line's leftover was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Distribution {
    /// Leftover was zero, or no item had a matching factor.
    None,
    Grow,
    Shrink,
}

// =============================================================================
// Step 1: Collect items into flex lines
// =============================================================================

/// Split `outer_mains` into lines.
///
/// Every line holds at least one item, so an item larger than `available`
/// gets a line of its own instead of producing an empty line.
pub(crate) fn partition_lines(
    outer_mains: &[f32],
    available: f32,
    wrap: Wrap,
    flex_count: usize,
) -> Vec<Range<usize>> {
    let count = outer_mains.len();
    if count == 0 {
        return Vec::new();
    }

    match wrap {
        Wrap::NoWrap => vec![0..count],
        Wrap::Wrap if flex_count > 0 => (0..count)
            .step_by(flex_count)
            .map(|start| start..(start + flex_count).min(count))
            .collect(),
        Wrap::Wrap => {
            let mut lines = Vec::new();
            let mut line_start = 0;
            let mut used = 0.0;

            for (i, &outer) in outer_mains.iter().enumerate() {
                if i > line_start && used + outer > available + EPSILON {
                    lines.push(line_start..i);
                    line_start = i;
                    used = 0.0;
                }
                used += outer;
            }

            lines.push(line_start..count);
            lines
        }
    }
}

// =============================================================================
// Step 2: Resolve flex grow/shrink per line
// =============================================================================

/// Distribute a line's leftover space. Returns how it was consumed.
pub(crate) fn resolve_flexible_lengths(items: &mut [FlexItem], available: f32) -> Distribution {
    for item in items.iter_mut() {
        item.main = item.base_main;
        item.frozen = false;
    }

    let used: f32 = items.iter().map(FlexItem::outer_base_main).sum();
    let leftover = available - used;

    let distribution = if leftover > EPSILON {
        grow(items, leftover)
    } else if leftover < -EPSILON {
        shrink(items, -leftover)
    } else {
        Distribution::None
    };

    for item in items.iter_mut() {
        if let Some(cross_per_main) = item.cross_per_main {
            item.cross = item.main * cross_per_main;
        }
    }

    trace!(
        "flex line: {} items, leftover {:.3}, {:?}",
        items.len(),
        leftover,
        distribution
    );
    distribution
}

fn grow(items: &mut [FlexItem], leftover: f32) -> Distribution {
    let total_grow: f32 = items.iter().map(|item| factor(item.grow)).sum();
    if total_grow <= 0.0 {
        return Distribution::None;
    }

    for item in items.iter_mut() {
        item.main += leftover * factor(item.grow) / total_grow;
    }
    Distribution::Grow
}

fn shrink(items: &mut [FlexItem], deficit: f32) -> Distribution {
    let mut remaining = deficit;
    let mut shrunk = false;

    // Each round either settles the deficit or freezes at least one item,
    // so this runs at most items.len() rounds.
    loop {
        let total_shrink: f32 = items
            .iter()
            .filter(|item| !item.frozen)
            .map(|item| factor(item.shrink))
            .sum();
        if total_shrink <= 0.0 || remaining <= EPSILON {
            break;
        }

        let mut absorbed = 0.0;
        let mut froze_any = false;

        for item in items.iter_mut().filter(|item| !item.frozen) {
            let share = factor(item.shrink);
            if share <= 0.0 {
                continue;
            }
            let wanted = remaining * share / total_shrink;
            let taken = wanted.min(item.main);
            item.main -= taken;
            absorbed += taken;
            shrunk = true;
            if item.main <= EPSILON {
                item.main = 0.0;
                item.frozen = true;
                froze_any = true;
            }
        }

        remaining -= absorbed;
        if !froze_any {
            break;
        }
    }

    if shrunk {
        Distribution::Shrink
    } else {
        Distribution::None
    }
}
