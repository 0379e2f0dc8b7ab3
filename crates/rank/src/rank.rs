//! Per-candidate named scores.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::error::RankError;

/// A candidate paired with named feature scores.
///
/// Features keep their insertion order. Re-adding a name overwrites its score
/// in place; it does not move to the end. Order matters: the primary key of
/// [`Rank::compare_to`] is the feature appended last, since overwrites keep
/// their position.
///
/// # Example
///
/// ```
/// use ridgewave_rank::Rank;
///
/// let mut rank = Rank::new("candidate");
/// rank.add_rank("a", 1.0);
/// rank.add_rank("b", 2.0);
/// rank.add_rank("a", 3.0);
/// assert_eq!(rank.features().collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(rank.score("a").unwrap(), 3.0);
/// ```
#[derive(Clone, Debug)]
pub struct Rank<T> {
    item: T,
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl<T> Rank<T> {
    /// Wraps `item` with no features.
    pub fn new(item: T) -> Self {
        Self {
            item,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts or updates the score of `name`.
    ///
    /// A new name is appended to the insertion order; an existing name keeps
    /// its position and only its value changes.
    pub fn add_rank(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Builder form of [`Rank::add_rank`].
    pub fn with_rank(mut self, name: impl Into<String>, value: f64) -> Self {
        self.add_rank(name, value);
        self
    }

    /// Returns the score of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::UnknownFeature`] if `name` was never added.
    pub fn score(&self, name: &str) -> Result<f64, RankError> {
        self.get(name)
            .ok_or_else(|| RankError::UnknownFeature(name.to_string()))
    }

    /// Returns the score of `name`, or `None` if it was never added.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    /// Returns `true` if `name` has a score.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Feature names in insertion order.
    pub fn features(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, score)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(name, v)| (name.as_str(), *v))
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no feature has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the wrapped candidate.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Consumes the rank and returns the wrapped candidate.
    pub fn into_item(self) -> T {
        self.item
    }

    /// Replaces the wrapped candidate, keeping every score and its order.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Rank<U> {
        Rank {
            item: f(self.item),
            entries: self.entries,
            index: self.index,
        }
    }

    /// Names present in both ranks. Unordered.
    pub fn common_features<'a, U>(&'a self, other: &Rank<U>) -> HashSet<&'a str> {
        self.features().filter(|name| other.contains(name)).collect()
    }

    fn shares_feature_with<U>(&self, other: &Rank<U>) -> bool {
        self.features().any(|name| other.contains(name))
    }

    /// Compares the score of `name` in `self` against `other`.
    ///
    /// Scores compare with [`f64::total_cmp`]: `-0.0 < 0.0` and NaN sorts
    /// above every number.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`RankError::NoCommonFeatures`] | the ranks share no feature at all |
    /// | [`RankError::UnknownFeature`] | `name` is missing from either rank |
    pub fn try_compare_feature<U>(&self, name: &str, other: &Rank<U>) -> Result<Ordering, RankError> {
        if !self.shares_feature_with(other) {
            return Err(RankError::NoCommonFeatures);
        }
        Ok(self.score(name)?.total_cmp(&other.score(name)?))
    }

    /// Legacy integer comparison of one feature: `-1`, `0` or `1`.
    ///
    /// Returns `-1` whenever the ranks share no feature, whatever `name` is
    /// and whichever side calls it, so `a.compare_ranks(n, b)` and
    /// `b.compare_ranks(n, a)` are both `-1` for disjoint ranks. A `name`
    /// missing from one side of otherwise comparable ranks is a tie.
    /// Prefer [`Rank::try_compare_feature`] in new code.
    pub fn compare_ranks<U>(&self, name: &str, other: &Rank<U>) -> i32 {
        match self.try_compare_feature(name, other) {
            Ok(Ordering::Less) => -1,
            Ok(Ordering::Equal) => 0,
            Ok(Ordering::Greater) => 1,
            Err(RankError::NoCommonFeatures) => -1,
            Err(RankError::UnknownFeature(_)) => 0,
        }
    }

    /// Legacy natural order.
    ///
    /// Walks `self`'s features from most to least recently added and returns
    /// the first non-zero [`Rank::compare_ranks`]. Ties on every feature, or
    /// no features on `self`, are `Equal`. Disjoint ranks compare `Less` in
    /// both directions, so this is not a total order and must not back an
    /// `Ord` impl or a sort.
    pub fn compare_to<U>(&self, other: &Rank<U>) -> Ordering {
        self.features()
            .rev()
            .map(|name| self.compare_ranks(name, other))
            .find(|&c| c != 0)
            .map_or(Ordering::Equal, |c| c.cmp(&0))
    }

    /// Comparison over shared features only.
    ///
    /// Walks `self`'s features from most to least recently added, skipping
    /// names `other` lacks, and returns the first non-equal ordering.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::NoCommonFeatures`] if the ranks share no feature.
    pub fn try_cmp<U>(&self, other: &Rank<U>) -> Result<Ordering, RankError> {
        if !self.shares_feature_with(other) {
            return Err(RankError::NoCommonFeatures);
        }
        let ordering = self
            .entries
            .iter()
            .rev()
            .filter_map(|(name, v)| other.get(name).map(|o| v.total_cmp(&o)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal);
        Ok(ordering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(features: &[(&str, f64)]) -> Rank<()> {
        features
            .iter()
            .fold(Rank::new(()), |r, &(name, v)| r.with_rank(name, v))
    }

    #[test]
    fn add_appends_new_names() {
        let r = rank(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        assert_eq!(r.features().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
    }

    #[test]
    fn re_add_overwrites_in_place() {
        let mut r = rank(&[("a", 1.0), ("b", 2.0)]);
        r.add_rank("a", 9.0);
        assert_eq!(
            r.entries().collect::<Vec<_>>(),
            vec![("a", 9.0), ("b", 2.0)]
        );
    }

    #[test]
    fn unknown_feature() {
        let r = rank(&[("a", 1.0)]);
        assert_eq!(
            r.score("z").unwrap_err(),
            RankError::UnknownFeature("z".into())
        );
        assert_eq!(r.get("z"), None);
        assert!(!r.contains("z"));
    }

    #[test]
    fn common_features_intersect() {
        let a = rank(&[("x", 1.0), ("y", 2.0), ("z", 3.0)]);
        let b = rank(&[("z", 0.0), ("x", 0.0), ("w", 0.0)]);
        let common = a.common_features(&b);
        assert_eq!(common, HashSet::from(["x", "z"]));
    }

    #[test]
    fn compare_ranks_sign() {
        let a = rank(&[("A", 1.0)]);
        let b = rank(&[("A", 2.0)]);
        assert_eq!(a.compare_ranks("A", &b), -1);
        assert_eq!(b.compare_ranks("A", &a), 1);
        assert_eq!(a.compare_ranks("A", &a), 0);
    }

    #[test]
    fn compare_ranks_disjoint_is_minus_one_both_ways() {
        let a = rank(&[("A", 5.0)]);
        let b = rank(&[("B", 1.0)]);
        assert_eq!(a.compare_ranks("A", &b), -1);
        assert_eq!(b.compare_ranks("A", &a), -1);
        assert_eq!(a.compare_ranks("anything", &b), -1);
    }

    #[test]
    fn compare_ranks_missing_name_is_tie() {
        let a = rank(&[("A", 1.0), ("B", 1.0)]);
        let b = rank(&[("A", 2.0)]);
        assert_eq!(a.compare_ranks("B", &b), 0);
        assert_eq!(
            a.try_compare_feature("B", &b).unwrap_err(),
            RankError::UnknownFeature("B".into())
        );
    }

    #[test]
    fn compare_to_single_shared_feature() {
        let a = rank(&[("A", 1.0)]);
        let b = rank(&[("A", 2.0)]);
        assert_eq!(a.compare_to(&b), Ordering::Less);
        assert_eq!(b.compare_to(&a), Ordering::Greater);
    }

    #[test]
    fn compare_to_latest_feature_dominates() {
        let a = rank(&[("first", 1.0), ("latest", 5.0)]);
        let b = rank(&[("first", 9.0), ("latest", 2.0)]);
        assert_eq!(a.compare_to(&b), Ordering::Greater);
    }

    #[test]
    fn compare_to_falls_back_on_tie() {
        let a = rank(&[("first", 1.0), ("latest", 2.0)]);
        let b = rank(&[("first", 9.0), ("latest", 2.0)]);
        assert_eq!(a.compare_to(&b), Ordering::Less);
    }

    #[test]
    fn compare_to_overwrite_keeps_priority() {
        let mut a = rank(&[("first", 1.0), ("latest", 2.0)]);
        let b = rank(&[("first", 0.0), ("latest", 3.0)]);
        a.add_rank("first", 100.0);
        // "latest" still dominates.
        assert_eq!(a.compare_to(&b), Ordering::Less);
    }

    #[test]
    fn compare_to_disjoint_is_less_both_ways() {
        let a = rank(&[("A", 1.0)]);
        let b = rank(&[("B", 1.0)]);
        assert_eq!(a.compare_to(&b), Ordering::Less);
        assert_eq!(b.compare_to(&a), Ordering::Less);
    }

    #[test]
    fn compare_to_equal_and_empty() {
        let a = rank(&[("A", 1.0), ("B", 2.0)]);
        let b = rank(&[("A", 1.0), ("B", 2.0)]);
        assert_eq!(a.compare_to(&b), Ordering::Equal);
        assert_eq!(rank(&[]).compare_to(&a), Ordering::Equal);
    }

    #[test]
    fn try_cmp_disjoint_is_error() {
        let a = rank(&[("A", 1.0)]);
        let b = rank(&[("B", 1.0)]);
        assert_eq!(a.try_cmp(&b).unwrap_err(), RankError::NoCommonFeatures);
        assert_eq!(b.try_cmp(&a).unwrap_err(), RankError::NoCommonFeatures);
    }

    #[test]
    fn try_cmp_is_antisymmetric_on_shared_features() {
        let a = rank(&[("A", 1.0), ("only_a", 7.0), ("B", 3.0)]);
        let b = rank(&[("B", 3.0), ("A", 4.0)]);
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(b.try_cmp(&a).unwrap(), Ordering::Greater);
    }

    #[test]
    fn scores_use_total_order() {
        let a = rank(&[("A", -0.0)]);
        let b = rank(&[("A", 0.0)]);
        assert_eq!(a.compare_ranks("A", &b), -1);
        let nan = rank(&[("A", f64::NAN)]);
        assert_eq!(nan.compare_ranks("A", &b), 1);
    }

    #[test]
    fn item_access() {
        let r = Rank::new(String::from("ridge-7")).with_rank("a", 1.0);
        assert_eq!(r.item(), "ridge-7");
        assert_eq!(r.into_item(), "ridge-7");
    }

    #[test]
    fn map_keeps_scores() {
        let r = rank(&[("b", 2.0), ("a", 1.0)]).map(|()| 42_u8);
        assert_eq!(*r.item(), 42);
        assert_eq!(r.features().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(r.score("a"), Ok(1.0));
    }

    #[test]
    fn rank_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Rank<Vec<f64>>>();
    }
}
