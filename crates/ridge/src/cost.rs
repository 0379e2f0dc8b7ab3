//! Ridge-quality cost functions.
//!
//! | Cost | Name | Better when |
//! |------|------|-------------|
//! | [`DirectionalStability`] | `directional_stability` | lower |
//! | [`AnchoredPathIntegral`] | `anchored_path_integral` | higher |
//!
//! Both are pure; NaN or infinite ridge values propagate into the result.

use ridgewave_rank::Rank;

use crate::ridge::Ridge;

/// A scalar quality score over a ridge, attachable to a [`Rank`] by name.
pub trait RidgeCost {
    /// Feature name the score is stored under.
    fn name(&self) -> &'static str;

    /// Scores `ridge`.
    fn cost(&self, ridge: &Ridge) -> f64;
}

/// Penalizes direction reversals of a ridge across scales.
///
/// Each step between consecutive points has direction `-1`, `0` or `+1`
/// (sign of the position change). The cost sums the squared change of
/// direction between consecutive steps; the first step only sets the
/// reference direction. A ridge drifting one way, or standing still, costs
/// 0; each full reversal costs 4.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionalStability;

impl RidgeCost for DirectionalStability {
    fn name(&self) -> &'static str {
        "directional_stability"
    }

    fn cost(&self, ridge: &Ridge) -> f64 {
        let mut directions = ridge
            .points()
            .windows(2)
            .map(|w| step_direction(w[1].position - w[0].position));
        let Some(mut previous) = directions.next() else {
            return 0.0;
        };
        let mut cost = 0.0;
        for current in directions {
            let change = current - previous;
            cost += change * change;
            previous = current;
        }
        cost
    }
}

/// Sign of a position delta as `-1.0`, `0.0` or `1.0`. NaN stays NaN.
fn step_direction(delta: f64) -> f64 {
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else if delta == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Sums `response^2 / (1 + (position - x0)^2)` along the ridge, where `x0`
/// is the first point's position.
///
/// Not a cost to minimize: a larger value means a persistent, well-localized
/// ridge. Points displaced from `x0` are discounted unless their response
/// makes up for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnchoredPathIntegral;

impl RidgeCost for AnchoredPathIntegral {
    fn name(&self) -> &'static str {
        "anchored_path_integral"
    }

    fn cost(&self, ridge: &Ridge) -> f64 {
        let Some(x0) = ridge.start().map(|p| p.position) else {
            return 0.0;
        };
        ridge
            .points()
            .iter()
            .map(|p| {
                let d = p.position - x0;
                p.response * p.response / (1.0 + d * d)
            })
            .sum()
    }
}

/// Wraps `ridge` in a [`Rank`] carrying every cost in `costs`, in order.
pub fn score_ridge(ridge: Ridge, costs: &[&dyn RidgeCost]) -> Rank<Ridge> {
    let scores: Vec<(&'static str, f64)> = costs.iter().map(|c| (c.name(), c.cost(&ridge))).collect();
    let mut rank = Rank::new(ridge);
    for (name, value) in scores {
        rank.add_rank(name, value);
    }
    rank
}
