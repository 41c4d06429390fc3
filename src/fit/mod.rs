//! Fit a discrete slice partition to a continuous weight distribution.
//!
//! A palette card has some flexibility to show the relative weights of its
//! colors: the block column is divided into slices and each color is assigned
//! a number of them (minimum 1). The fitters below pick the assignment whose
//! chi-squared error against the continuous weights is smallest.

mod compositions;

use crate::error::{LayoutError, Result};
use compositions::ascending_compositions;

/// Chi-squared error between a hypothesis distribution and an observation.
///
/// Both sequences arrive sorted ascending so weight rank pairs with slice
/// rank. The hypothesis need not sum to the observation total: every
/// candidate partition sums to the same budget, so this ranking is invariant
/// to uniform scaling of the hypothesis.
fn chi_squared(hypothesis: &[f64], observation: &[u32]) -> f64 {
    debug_assert_eq!(hypothesis.len(), observation.len());
    hypothesis
        .iter()
        .zip(observation)
        .map(|(&hyp, &obs)| {
            let diff = f64::from(obs) - hyp;
            diff * diff / hyp
        })
        .sum()
}

/// Sort values ascending, keeping the map back to the original order.
///
/// Returns `(sorted, unsort)` where `sorted[unsort[i]] == values[i]`. The
/// sort is stable, so equal weights keep their relative positions.
fn sort_retain_order(values: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let mut by_value: Vec<usize> = (0..values.len()).collect();
    by_value.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut unsort = vec![0usize; values.len()];
    for (rank, &original) in by_value.iter().enumerate() {
        unsort[original] = rank;
    }
    let sorted = by_value.iter().map(|&i| values[i]).collect();
    (sorted, unsort)
}

fn validate(items: u32, goal_dist: &[f64]) -> Result<()> {
    if goal_dist.is_empty() {
        return Err(LayoutError::InvalidInput("empty distribution".into()));
    }
    if let Some(&w) = goal_dist.iter().find(|w| !w.is_finite() || **w <= 0.0) {
        return Err(LayoutError::InvalidInput(format!(
            "distribution weight {w} is not a positive finite number"
        )));
    }
    if items == 0 {
        return Err(LayoutError::InvalidInput("slice budget is zero".into()));
    }
    Ok(())
}

struct Scored {
    score: f64,
    partition: Vec<u32>,
    slivers: usize,
}

/// Scan every ascending candidate once, keeping the best fit overall and the
/// best fit with at most `max_slivers` width-1 entries.
///
/// Comparisons are strict, so ties resolve to the candidate generated first,
/// i.e. the lexicographically smallest ascending encoding.
fn scan_candidates(
    items: u32,
    sorted_dist: &[f64],
    max_slivers: usize,
) -> (Option<Scored>, Option<Scored>) {
    let mut best: Option<Scored> = None;
    let mut best_capped: Option<Scored> = None;

    for candidate in ascending_compositions(items, sorted_dist.len()) {
        let score = chi_squared(sorted_dist, &candidate);
        let slivers = candidate.iter().filter(|&&v| v == 1).count();

        if best.as_ref().map_or(true, |b| score < b.score) {
            best = Some(Scored {
                score,
                partition: candidate.clone(),
                slivers,
            });
        }
        if slivers <= max_slivers && best_capped.as_ref().map_or(true, |b| score < b.score) {
            best_capped = Some(Scored {
                score,
                partition: candidate,
                slivers,
            });
        }
    }

    (best, best_capped)
}

fn unsort_partition(scored: &Scored, unsort: &[usize]) -> Vec<u32> {
    unsort.iter().map(|&rank| scored.partition[rank]).collect()
}

/// Split `items` slices across `goal_dist.len()` entries, portioned as
/// closely as possible to the relative weights in `goal_dist`.
///
/// `goal_dist` need not sum to 1 (or to `items`); only relative weight
/// matters. Every entry of the result is at least 1. Ties in fit quality
/// resolve to the candidate whose ascending encoding is lexicographically
/// smallest.
///
/// ```
/// use palette_layout::fit::fit_partition_to_distribution;
///
/// let split = fit_partition_to_distribution(10, &[2.0 / 3.0, 1.0 / 3.0]).unwrap();
/// assert_eq!(split, [7, 3]);
/// ```
pub fn fit_partition_to_distribution(items: u32, goal_dist: &[f64]) -> Result<Vec<u32>> {
    validate(items, goal_dist)?;
    if (items as usize) < goal_dist.len() {
        return Err(LayoutError::Infeasible {
            items,
            parts: goal_dist.len(),
        });
    }

    let (sorted_dist, unsort) = sort_retain_order(goal_dist);
    let (best, _) = scan_candidates(items, &sorted_dist, usize::MAX);
    let best = best.ok_or(LayoutError::Infeasible {
        items,
        parts: goal_dist.len(),
    })?;

    tracing::debug!(
        "fit {} slices to {} weights: {:?} (chi-squared {:.4})",
        items,
        goal_dist.len(),
        best.partition,
        best.score
    );
    Ok(unsort_partition(&best, &unsort))
}

/// Like [`fit_partition_to_distribution`], but capped to the number of
/// width-1 slivers the arrangement step can keep separated, and coarsened
/// when the best fit has no slivers at all.
///
/// Dense budgets (24 slices) render 1s as thin strips, and later code moves
/// those off the ends of the column and apart from each other. That shuffle
/// only works while slivers stay in the minority, so the result here carries
/// at most `ceil(n / 2) - 1` of them. Budgets too small for any zero-free
/// partition to honor the cap fall back to the unconstrained fit. When the
/// best fit has no slivers and half the budget still covers every entry, the
/// budget is halved so the column reads as blocks rather than a smooth
/// gradient.
pub fn fit_partition_with_slivers(items: u32, goal_dist: &[f64]) -> Result<Vec<u32>> {
    validate(items, goal_dist)?;
    let parts = goal_dist.len();
    let max_slivers = parts.div_ceil(2) - 1;
    let (sorted_dist, unsort) = sort_retain_order(goal_dist);

    let mut budget = items;
    loop {
        // A zero-free partition of `budget` has at least 2*parts - budget
        // slivers, so small budgets cannot honor the cap at all.
        let fewest_slivers = (2 * parts).saturating_sub(budget as usize);
        if fewest_slivers > max_slivers {
            tracing::debug!(
                "sliver cap unreachable with {} slices over {} entries, fitting unconstrained",
                budget,
                parts
            );
            return fit_partition_to_distribution(budget, goal_dist);
        }

        let (best, best_capped) = scan_candidates(budget, &sorted_dist, max_slivers);
        let best = best.ok_or(LayoutError::Infeasible {
            items: budget,
            parts,
        })?;

        if best.slivers == 0 && budget / 2 >= parts as u32 {
            budget /= 2;
            tracing::debug!("best fit has no slivers, coarsening to {} slices", budget);
            continue;
        }

        let best_capped = best_capped.ok_or(LayoutError::Infeasible {
            items: budget,
            parts,
        })?;
        tracing::debug!(
            "fit {} slices to {} weights under sliver cap {}: {:?} (chi-squared {:.4})",
            budget,
            parts,
            max_slivers,
            best_capped.partition,
            best_capped.score
        );
        return Ok(unsort_partition(&best_capped, &unsort));
    }
}
