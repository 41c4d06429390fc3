use crate::error::{LayoutError, Result};
use crate::geometry::Frame;
use crate::layout::blocks::{Group, Shape};

/// A fixed height for every row of one shape.
///
/// Position in the lock list is priority: when every row ends up pinned and
/// nothing can stretch, locks are dropped from the end of the list (lowest
/// priority first) until a row comes free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lock {
    pub shape: Shape,
    pub height: f64,
}

impl Lock {
    pub fn new(shape: Shape, height: f64) -> Self {
        Self { shape, height }
    }
}

/// Divide the frame height into one row height per group.
///
/// Rows matching a lock are pinned to the locked height; the remaining
/// height is split across unpinned rows in proportion to their budget units.
/// Locks apply strictly in list order, each stamping every matching row, so
/// a later same-shape lock re-stamps an earlier one.
///
/// The default locks (used when `locks` is `None`) square off a sliver pair
/// (`SliverPair` → frame width, two half-width slices stacked into a square)
/// and give a lone sliver half that height.
///
/// The returned heights always sum to `frame.height`.
pub fn divvy_heights(frame: &Frame, groups: &[Group], locks: Option<&[Lock]>) -> Result<Vec<f64>> {
    if groups.is_empty() {
        return Err(LayoutError::InvalidInput("no groups to divvy".into()));
    }

    let default_locks = [
        Lock::new(Shape::SliverPair, frame.width),
        Lock::new(Shape::Sliver, frame.width / 2.0),
    ];
    let locks = locks.unwrap_or(&default_locks);

    let mut active = locks.len();
    let heights: Vec<Option<f64>> = loop {
        let mut heights = vec![None; groups.len()];
        for lock in &locks[..active] {
            for (height, group) in heights.iter_mut().zip(groups) {
                if group.shape() == lock.shape {
                    *height = Some(lock.height);
                }
            }
        }
        if heights.iter().any(Option::is_none) {
            break heights;
        }
        if active == 0 {
            return Err(LayoutError::Unallocatable);
        }
        active -= 1;
        tracing::debug!(
            "every row pinned, dropping lowest-priority lock ({} still apply)",
            active
        );
    };

    let pinned: f64 = heights.iter().flatten().sum();
    let free_height = frame.height - pinned;
    let free_units: u32 = heights
        .iter()
        .zip(groups)
        .filter(|(height, _)| height.is_none())
        .map(|(_, group)| group.unit_sum())
        .sum();
    let scale = free_height / f64::from(free_units);

    Ok(heights
        .iter()
        .zip(groups)
        .map(|(height, group)| height.unwrap_or(f64::from(group.unit_sum()) * scale))
        .collect())
}
