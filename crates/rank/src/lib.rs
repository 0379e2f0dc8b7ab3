//! Named-score ranking of peak candidates.
//!
//! A [`Rank`] wraps one candidate (typically a ridge) with an insertion-ordered
//! set of named scores. [`RankSorter`] orders batches of ranks with repeated
//! stable single-key sorts.
//!
//! | Operation | Result on disjoint ranks |
//! |-----------|--------------------------|
//! | [`Rank::compare_ranks`] | `-1` from either side |
//! | [`Rank::compare_to`] | `Ordering::Less` from either side |
//! | [`Rank::try_cmp`] | `Err(RankError::NoCommonFeatures)` |
//!
//! # Quick start
//!
//! ```
//! use ridgewave_rank::{Rank, RankSorter};
//!
//! let mut ranks: Vec<Rank<&str>> = vec![
//!     Rank::new("late").with_rank("cost", 4.0),
//!     Rank::new("early").with_rank("cost", 1.0),
//! ];
//! RankSorter::sort_to_order(&["cost"], &mut ranks);
//! assert_eq!(*ranks[0].item(), "early");
//! ```

pub mod error;
pub mod rank;
pub mod sorter;

pub use error::RankError;
pub use rank::Rank;
pub use sorter::RankSorter;
