//! Scale-space ridges and the cost functions that judge them.
//!
//! A [`Ridge`] is the path of a coefficient extremum across scales. The
//! [`RidgeCost`] implementors turn a ridge into a scalar, and
//! [`score_ridge`] attaches those scalars to a [`ridgewave_rank::Rank`] so
//! candidates can be ordered.
//!
//! ```
//! use ridgewave_ridge::{AnchoredPathIntegral, DirectionalStability, Ridge, score_ridge};
//!
//! let ridge: Ridge = [(20.0, 4.0), (20.0, 5.0), (21.0, 5.5)].into_iter().collect();
//! let rank = score_ridge(ridge, &[&DirectionalStability, &AnchoredPathIntegral]);
//! assert_eq!(rank.score("directional_stability").unwrap(), 1.0);
//! ```

mod cost;
mod ridge;

pub use cost::{AnchoredPathIntegral, DirectionalStability, RidgeCost, score_ridge};
pub use ridge::{Ridge, RidgePoint};
