//! Multi-key ordering of ranked candidates by repeated stable sorts.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::rank::Rank;

/// Feature bookkeeping over a batch of ranks, plus the sorts that use it.
///
/// Every sort here is a sequence of stable single-key sorts: the key sorted
/// last dominates, earlier keys survive only as tie-breakers.
///
/// # Example
///
/// ```
/// use ridgewave_rank::{Rank, RankSorter};
///
/// let mut ranks = vec![
///     Rank::new('x').with_rank("A", 2.0).with_rank("B", 0.0),
///     Rank::new('y').with_rank("A", 1.0).with_rank("B", 5.0),
///     Rank::new('z').with_rank("A", 1.0).with_rank("B", 3.0),
/// ];
/// RankSorter::sort_to_order(&["A", "B"], &mut ranks);
/// let order: Vec<char> = ranks.iter().map(|r| *r.item()).collect();
/// assert_eq!(order, vec!['z', 'y', 'x']);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RankSorter {
    all_features: BTreeSet<String>,
    legacy_intersection: BTreeSet<String>,
    common_features: Vec<String>,
}

impl RankSorter {
    /// Collects feature names across `ranks`.
    pub fn new<T>(ranks: &[Rank<T>]) -> Self {
        let all_features: BTreeSet<String> = ranks
            .iter()
            .flat_map(|r| r.features().map(str::to_string))
            .collect();

        // Seeded empty, so retaining against each rank keeps it empty. Kept
        // as the feature set behind `sort`.
        let mut legacy_intersection = BTreeSet::new();
        for r in ranks {
            legacy_intersection.retain(|name: &String| r.contains(name));
        }

        // Seeded from the first rank, in its insertion order.
        let common_features: Vec<String> = match ranks.split_first() {
            Some((first, rest)) => first
                .features()
                .filter(|name| rest.iter().all(|r| r.contains(name)))
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        debug!(
            n_ranks = ranks.len(),
            n_features = all_features.len(),
            n_common = common_features.len(),
            "rank sorter built"
        );

        Self {
            all_features,
            legacy_intersection,
            common_features,
        }
    }

    /// Union of feature names over all ranks.
    pub fn all_features(&self) -> &BTreeSet<String> {
        &self.all_features
    }

    /// Intersection as computed by the legacy accumulator. Always empty.
    pub fn legacy_intersection(&self) -> &BTreeSet<String> {
        &self.legacy_intersection
    }

    /// Names present in every rank, in the first rank's insertion order.
    pub fn common_features(&self) -> &[String] {
        &self.common_features
    }

    /// Legacy sort: one stable single-key sort per name in
    /// [`RankSorter::legacy_intersection`].
    ///
    /// That set is always empty, so `ranks` is left in its input order. Use
    /// [`RankSorter::sort_by_common_features`] or
    /// [`RankSorter::sort_to_order`] to actually order candidates.
    pub fn sort<T>(&self, ranks: &mut [Rank<T>]) {
        if self.legacy_intersection.is_empty() {
            warn!(
                n_ranks = ranks.len(),
                "legacy feature intersection is empty; ranks left unsorted"
            );
        }
        for name in &self.legacy_intersection {
            sort_by_feature(ranks, name);
        }
    }

    /// Sorts by every feature shared by all ranks.
    ///
    /// Keys are applied in the first rank's insertion order, so the most
    /// recently added shared feature is the primary key, matching
    /// [`Rank::compare_to`].
    pub fn sort_by_common_features<T>(&self, ranks: &mut [Rank<T>]) {
        for name in &self.common_features {
            sort_by_feature(ranks, name);
        }
    }

    /// Sorts ascending by `priority`, most important feature first.
    ///
    /// Applies one stable sort per feature from the least to the most
    /// important, so `priority[0]` decides and later entries break ties.
    pub fn sort_to_order<T, S: AsRef<str>>(priority: &[S], ranks: &mut [Rank<T>]) {
        for name in priority.iter().rev() {
            sort_by_feature(ranks, name.as_ref());
        }
    }
}

/// Stable ascending sort on one feature. Ranks lacking it go last.
fn sort_by_feature<T>(ranks: &mut [Rank<T>], name: &str) {
    ranks.sort_by(|a, b| compare_optional(a.get(name), b.get(name)));
}

fn compare_optional(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
