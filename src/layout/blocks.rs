/// One vertical row of the block column: a lone slice, or two width-1 slices
/// sharing a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// A lone width-1 slice.
    Sliver,
    /// Two consecutive width-1 slices placed side by side in one row.
    SliverPair,
    /// A lone slice spanning more than one unit of the budget.
    Block(u32),
}

/// Payload-free tag of a [`Group`], the key height locks match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Sliver,
    SliverPair,
    Block,
}

impl Group {
    pub fn shape(self) -> Shape {
        match self {
            Group::Sliver => Shape::Sliver,
            Group::SliverPair => Shape::SliverPair,
            Group::Block(_) => Shape::Block,
        }
    }

    /// Number of side-by-side slices in this row (1 or 2).
    pub fn slice_count(self) -> usize {
        match self {
            Group::SliverPair => 2,
            _ => 1,
        }
    }

    /// Budget units covered by the row, the weight used when stretching
    /// unpinned rows to fill leftover height.
    pub fn unit_sum(self) -> u32 {
        match self {
            Group::Sliver => 1,
            Group::SliverPair => 2,
            Group::Block(units) => units,
        }
    }

    /// The partition entries this row was built from.
    pub fn values(self) -> Vec<u32> {
        match self {
            Group::Sliver => vec![1],
            Group::SliverPair => vec![1, 1],
            Group::Block(units) => vec![units],
        }
    }
}

/// Collapse a partition into rows, pairing the first run of two consecutive
/// 1s found while scanning from the end.
///
/// At most one pair is ever built: once it exists, earlier 1s stay
/// singletons even when adjacent. The earliest cards in the collection only
/// ever shared the bottom-most thin row, and that look is kept as-is.
///
/// `group_slices(&[1, 2, 3, 4, 1, 1])` yields `[Sliver, Block(2), Block(3),
/// Block(4), SliverPair]`; flattening the rows' values always reproduces the
/// input exactly.
pub fn group_slices(partition: &[u32]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::with_capacity(partition.len());
    let mut paired = false;

    for &value in partition.iter().rev() {
        if !paired && value == 1 && matches!(groups.last(), Some(Group::Sliver)) {
            let last = groups.len() - 1;
            groups[last] = Group::SliverPair;
            paired = true;
        } else if value == 1 {
            groups.push(Group::Sliver);
        } else {
            groups.push(Group::Block(value));
        }
    }

    groups.reverse();
    groups
}
