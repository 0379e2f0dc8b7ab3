//! Scale-space ridges.

/// One point of a ridge: where the tracked extremum sits at one scale and
/// how strong the wavelet response is there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RidgePoint {
    /// Position along the signal (e.g. scan number, may be fractional).
    pub position: f64,
    /// Wavelet coefficient at that position and scale.
    pub response: f64,
}

impl RidgePoint {
    /// Creates a ridge point.
    pub fn new(position: f64, response: f64) -> Self {
        Self { position, response }
    }
}

impl From<(f64, f64)> for RidgePoint {
    fn from((position, response): (f64, f64)) -> Self {
        Self::new(position, response)
    }
}

/// Trajectory of a coefficient-surface extremum across adjacent scales.
///
/// Holds one point per scale traversed, starting at the initiating local
/// maximum. Ridges are built by a tracker upstream; this type only stores
/// and exposes them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ridge {
    points: Vec<RidgePoint>,
}

impl Ridge {
    /// Creates a ridge from points ordered by scale.
    pub fn new(points: Vec<RidgePoint>) -> Self {
        Self { points }
    }

    /// Appends the point found at the next scale.
    pub fn push(&mut self, point: RidgePoint) {
        self.points.push(point);
    }

    /// Returns the points in scale order.
    pub fn points(&self) -> &[RidgePoint] {
        &self.points
    }

    /// Number of scales the ridge spans.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ridge has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The initiating point, if any.
    pub fn start(&self) -> Option<&RidgePoint> {
        self.points.first()
    }

    /// Largest response along the ridge. `None` for an empty ridge.
    pub fn peak_response(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.response)
            .reduce(f64::max)
    }
}

impl FromIterator<RidgePoint> for Ridge {
    fn from_iter<I: IntoIterator<Item = RidgePoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<(f64, f64)> for Ridge {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        iter.into_iter().map(RidgePoint::from).collect()
    }
}
