use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, in first-occurrence order.
///
/// Example: `8 9 8 9 T` groups as [(Eight, 2), (Nine, 2), (Ten, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Group ranks, keeping each distinct rank at the position it first appears.
    pub fn from_ranks(ranks: &[Rank; 5]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Vec::with_capacity(5);

        for &rank in ranks.iter() {
            match groups.iter_mut().find(|(r, _)| *r == rank) {
                Some((_, count)) => *count += 1,
                None => groups.push((rank, 1)),
            }
        }

        Self { groups }
    }

    /// Number of distinct ranks.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Rank of the first group encountered.
    pub fn lead_rank(&self) -> Option<Rank> {
        self.groups.first().map(|(rank, _)| *rank)
    }

    /// Size of the largest group.
    pub fn largest(&self) -> u8 {
        self.groups.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    pub fn has_group_of(&self, size: u8) -> bool {
        self.groups.iter().any(|(_, count)| *count == size)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
