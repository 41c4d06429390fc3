use crate::error::{LayoutError, Result};

/// True when no width-1 sliver touches an end of the column or another
/// sliver.
fn is_settled(partition: &[u32]) -> bool {
    partition.first() != Some(&1)
        && partition.last() != Some(&1)
        && !partition.windows(2).any(|pair| pair[0] == 1 && pair[1] == 1)
}

/// Every way to choose `take` distinct slot indices out of `0..slots`, in
/// lexicographic order.
fn slot_choices(slots: usize, take: usize) -> Vec<Vec<usize>> {
    fn extend(start: usize, slots: usize, left: usize, prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if left == 0 {
            out.push(prefix.clone());
            return;
        }
        for slot in start..=slots - left {
            prefix.push(slot);
            extend(slot + 1, slots, left - 1, prefix, out);
            prefix.pop();
        }
    }

    let mut out = Vec::new();
    if take <= slots {
        let mut prefix = Vec::with_capacity(take);
        extend(0, slots, take, &mut prefix, &mut out);
    }
    out
}

/// Interleave large and small indices: larges keep their order, and each
/// chosen slot `s` places the next small index right after `large[s]`.
fn weave(large: &[usize], small: &[usize], choice: &[usize]) -> Vec<usize> {
    let mut order = Vec::with_capacity(large.len() + small.len());
    let mut next_small = 0;
    for (position, &index) in large.iter().enumerate() {
        order.push(index);
        if choice.get(next_small) == Some(&position) {
            order.push(small[next_small]);
            next_small += 1;
        }
    }
    order
}

/// Reorder a partition so slivers never sit at either end of the column or
/// next to each other.
///
/// Returns an index order: position `i` of the settled column shows entry
/// `order[i]` of the input, so the same order applies to any parallel array
/// (the caller's colors). An input that already satisfies the constraints
/// comes back as the identity order.
///
/// Slivers only ever land in the gaps strictly between larger entries, which
/// keeps them off both ends; larger entries keep their relative order, and so
/// do the slivers among themselves. Among valid arrangements, the one whose
/// largest adjacent-pair sum is smallest wins, so no two neighboring rows
/// read as one oversized block. Ties resolve to the earliest slot choice in
/// lexicographic order.
pub fn redistribute_slivers(partition: &[u32]) -> Result<Vec<usize>> {
    if partition.is_empty() {
        return Err(LayoutError::InvalidInput("empty partition".into()));
    }
    if is_settled(partition) {
        return Ok((0..partition.len()).collect());
    }

    let small: Vec<usize> = (0..partition.len()).filter(|&i| partition[i] == 1).collect();
    let large: Vec<usize> = (0..partition.len()).filter(|&i| partition[i] > 1).collect();
    if small.len() >= large.len() {
        return Err(LayoutError::Overconstrained {
            slivers: small.len(),
            blocks: large.len(),
        });
    }

    let mut best: Option<(u32, Vec<usize>)> = None;
    for choice in slot_choices(large.len() - 1, small.len()) {
        let order = weave(&large, &small, &choice);
        let widest = order
            .windows(2)
            .map(|pair| partition[pair[0]] + partition[pair[1]])
            .max()
            .unwrap_or(0);
        if best.as_ref().map_or(true, |(score, _)| widest < *score) {
            best = Some((widest, order));
        }
    }

    let (widest, order) = best.ok_or(LayoutError::Overconstrained {
        slivers: small.len(),
        blocks: large.len(),
    })?;
    tracing::debug!(
        "settled {} slivers among {} blocks (widest adjacent pair {})",
        small.len(),
        large.len(),
        widest
    );
    Ok(order)
}

/// Apply an order from [`redistribute_slivers`] to any parallel sequence.
pub fn apply_order<T: Clone>(order: &[usize], items: &[T]) -> Vec<T> {
    order.iter().map(|&i| items[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_input_returns_identity() {
        assert_eq!(redistribute_slivers(&[5, 1, 5]).unwrap(), [0, 1, 2]);
        assert_eq!(redistribute_slivers(&[3, 4, 5]).unwrap(), [0, 1, 2]);
        assert_eq!(redistribute_slivers(&[7]).unwrap(), [0]);
    }

    #[test]
    fn moves_a_leading_sliver_inside() {
        let order = redistribute_slivers(&[1, 5, 5]).unwrap();
        assert_eq!(order, [1, 0, 2]);
        assert_eq!(apply_order(&order, &[1, 5, 5]), [5, 1, 5]);
    }

    #[test]
    fn minimizes_the_widest_adjacent_pair() {
        // Three placements exist for the two slivers; spreading them as
        // [5, 5, 1, 6, 1, 6] keeps every adjacent pair at 10 or less.
        let partition = [1, 1, 5, 5, 6, 6];
        let order = redistribute_slivers(&partition).unwrap();
        assert_eq!(apply_order(&order, &partition), [5, 5, 1, 6, 1, 6]);
    }

    #[test]
    fn output_is_always_settled() {
        for partition in [
            vec![1, 1, 5, 5, 6, 6],
            vec![1, 2, 2, 3],
            vec![1, 5, 1, 5, 2],
            vec![2, 1, 1, 2, 8],
        ] {
            let order = redistribute_slivers(&partition).unwrap();
            let settled = apply_order(&order, &partition);
            assert!(is_settled(&settled), "{settled:?} is not settled");

            let mut seen = order.clone();
            seen.sort_unstable();
            let identity: Vec<usize> = (0..partition.len()).collect();
            assert_eq!(seen, identity, "{order:?} is not a permutation");
        }
    }

    #[test]
    fn relative_orders_are_preserved() {
        let partition = [1, 9, 1, 3, 4];
        let order = redistribute_slivers(&partition).unwrap();
        let larges: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&i| partition[i] > 1)
            .collect();
        let smalls: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&i| partition[i] == 1)
            .collect();
        assert_eq!(larges, [1, 3, 4]);
        assert_eq!(smalls, [0, 2]);
    }

    #[test]
    fn too_many_slivers_is_overconstrained() {
        assert_eq!(
            redistribute_slivers(&[1, 1, 5]),
            Err(LayoutError::Overconstrained { slivers: 2, blocks: 1 })
        );
        assert_eq!(
            redistribute_slivers(&[1]),
            Err(LayoutError::Overconstrained { slivers: 1, blocks: 0 })
        );
        assert_eq!(
            redistribute_slivers(&[1, 2]),
            Err(LayoutError::Overconstrained { slivers: 1, blocks: 1 })
        );
    }

    #[test]
    fn settles_fitted_palettes_from_any_weight_order() {
        use crate::fit::fit_partition_with_slivers;
        use crate::layout::blocks::{group_slices, Group};

        fn permutations(values: &[f64]) -> Vec<Vec<f64>> {
            if values.len() <= 1 {
                return vec![values.to_vec()];
            }
            let mut out = Vec::new();
            for i in 0..values.len() {
                let mut rest = values.to_vec();
                let first = rest.remove(i);
                for mut tail in permutations(&rest) {
                    tail.insert(0, first);
                    out.push(tail);
                }
            }
            out
        }

        for weights in permutations(&[2.0, 2.0, 11.0, 11.0, 11.0, 11.0]) {
            let partition = fit_partition_with_slivers(24, &weights).unwrap();
            let order = redistribute_slivers(&partition).unwrap();
            let settled = apply_order(&order, &partition);
            let groups = group_slices(&settled);

            assert_ne!(groups.first(), Some(&Group::Sliver), "weights {weights:?}");
            assert_ne!(groups.last(), Some(&Group::Sliver), "weights {weights:?}");
            assert!(
                !groups
                    .windows(2)
                    .any(|pair| pair[0] == Group::Sliver && pair[1] == Group::Sliver),
                "adjacent slivers for weights {weights:?}"
            );
        }
    }

    #[test]
    fn empty_partition_is_rejected() {
        assert!(matches!(
            redistribute_slivers(&[]),
            Err(LayoutError::InvalidInput(_))
        ));
    }

    #[test]
    fn slot_choices_are_lexicographic() {
        assert_eq!(
            slot_choices(3, 2),
            vec![vec![0, 1], vec![0, 2], vec![1, 2]]
        );
        assert_eq!(slot_choices(2, 0), vec![Vec::<usize>::new()]);
        assert!(slot_choices(1, 2).is_empty());
    }
}
