//! Main-axis arrangement of one line.
//!
//! Positions are computed for margin boxes; the caller adds the leading
//! margin to get the item's own origin.

use crate::types::Justify;

/// Free space split into `slots` gaps on a grid of `1 / scale` units.
///
/// Every gap gets the same whole number of grid units. The leftover units go
/// one per gap starting from the biased edge, so no two gaps differ by more
/// than one unit. The sub-grid fraction lands in the biased edge gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AroundGaps {
    base: f32,
    unit: f32,
    extra: usize,
    fraction: f32,
    slots: usize,
    from_end: bool,
}

impl AroundGaps {
    pub fn new(free: f32, slots: usize, scale: f32, from_end: bool) -> Self {
        let unit = 1.0 / scale;
        if slots == 0 || !(free > 0.0) {
            return Self {
                base: 0.0,
                unit,
                extra: 0,
                fraction: 0.0,
                slots,
                from_end,
            };
        }

        // Nudge up so an exact multiple of the unit is not lost to float error.
        let units = (free * scale + 1e-4).floor() as usize;
        let base_units = units / slots;
        Self {
            base: base_units as f32 * unit,
            unit,
            extra: units % slots,
            fraction: (free - units as f32 * unit).max(0.0),
            slots,
            from_end,
        }
    }

    /// Size of gap `index`; gap 0 precedes the first item, gap `slots - 1`
    /// follows the last.
    pub fn gap(&self, index: usize) -> f32 {
        if index >= self.slots {
            return 0.0;
        }
        let rank = if self.from_end {
            self.slots - 1 - index
        } else {
            index
        };

        let mut gap = self.base;
        if rank < self.extra {
            gap += self.unit;
        }
        if rank == 0 {
            gap += self.fraction;
        }
        gap
    }
}

/// Compute the main-axis start of each margin box in `sizes`.
///
/// Negative free space pins the line to main-start; overflowing items extend
/// past main-end.
pub(crate) fn arrange(
    justify: Justify,
    available: f32,
    sizes: &[f32],
    scale: f32,
    out_positions: &mut [f32],
) {
    debug_assert_eq!(sizes.len(), out_positions.len());
    if sizes.is_empty() {
        return;
    }

    let total: f32 = sizes.iter().sum();
    let free = (available - total).max(0.0);

    match justify {
        Justify::Start => fill_positions(0.0, |_| 0.0, sizes, out_positions),
        Justify::Center => fill_positions(free / 2.0, |_| 0.0, sizes, out_positions),
        Justify::End => fill_positions(free, |_| 0.0, sizes, out_positions),
        Justify::StartAround | Justify::EndAround => {
            let from_end = justify == Justify::EndAround;
            let gaps = AroundGaps::new(free, sizes.len() + 1, scale, from_end);
            fill_positions(gaps.gap(0), |i| gaps.gap(i), sizes, out_positions);
        }
    }
}

/// Lay out `sizes` from `start`; `gap(i)` is the space before item `i`.
fn fill_positions<G>(start: f32, gap: G, sizes: &[f32], out_positions: &mut [f32])
where
    G: Fn(usize) -> f32,
{
    let mut cursor = start;
    for (i, (size, position)) in sizes.iter().zip(out_positions.iter_mut()).enumerate() {
        if i > 0 {
            cursor += gap(i);
        }
        *position = cursor;
        cursor += size;
    }
}
