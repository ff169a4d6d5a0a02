//! Catmull-Rom interpolation of a sparse control polygon into a dense path.

use crate::Vec3;

/// Fewest control points that bracket a Catmull-Rom span.
pub const MIN_CONTROL_POINTS: usize = 4;

/// One interpolated point. `tangent` is the unnormalized first derivative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplineSample {
    pub position: Vec3,
    pub tangent: Vec3,
}

impl SplineSample {
    pub fn new(position: Vec3, tangent: Vec3) -> Self {
        Self { position, tangent }
    }
}

/// Dense centerline in traversal order. Never reordered after interpolation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplinePath {
    samples: Vec<SplineSample>,
}

impl SplinePath {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[SplineSample] {
        &self.samples
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&SplineSample> {
        self.samples.get(index)
    }

    /// Number of buildable segments (consecutive sample pairs).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.samples.iter().map(|s| s.position)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl From<Vec<SplineSample>> for SplinePath {
    fn from(samples: Vec<SplineSample>) -> Self {
        Self { samples }
    }
}

/// Four-point bracket for the span between `p1` and `p2`.
#[derive(Clone, Copy, Debug)]
struct CatmullRomSpan {
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
}

impl CatmullRomSpan {
    /// Bracket for span `i`; the outer points are mirrored at both ends of the polygon.
    fn bracket(points: &[Vec3], i: usize) -> Self {
        let p1 = points[i];
        let p2 = points[i + 1];
        let p0 = if i == 0 { 2.0 * p1 - p2 } else { points[i - 1] };
        let p3 = if i + 2 == points.len() {
            2.0 * p2 - p1
        } else {
            points[i + 2]
        };
        Self { p0, p1, p2, p3 }
    }

    #[inline]
    fn coefficients(&self) -> (Vec3, Vec3, Vec3) {
        let Self { p0, p1, p2, p3 } = *self;
        let a = -p0 + p2;
        let b = 2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3;
        let c = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
        (a, b, c)
    }

    fn position(&self, t: f32) -> Vec3 {
        let (a, b, c) = self.coefficients();
        let t2 = t * t;
        let t3 = t2 * t;
        0.5 * (2.0 * self.p1 + a * t + b * t2 + c * t3)
    }

    fn tangent(&self, t: f32) -> Vec3 {
        let (a, b, c) = self.coefficients();
        0.5 * (a + b * 2.0 * t + c * 3.0 * t * t)
    }
}

/// Interpolate `control_points` into `(len - 1) * segments_per_point` samples.
///
/// Fewer than [`MIN_CONTROL_POINTS`] points yield an empty path. Each span is
/// sampled on `t = j / segments_per_point` for `j` in `0..segments_per_point`, so
/// `t = 1` is never emitted and joins are not duplicated.
pub fn interpolate(control_points: &[Vec3], segments_per_point: usize) -> SplinePath {
    if control_points.len() < MIN_CONTROL_POINTS {
        return SplinePath::new();
    }

    let spans = control_points.len() - 1;
    let mut samples = Vec::with_capacity(spans * segments_per_point);
    for i in 0..spans {
        let span = CatmullRomSpan::bracket(control_points, i);
        for j in 0..segments_per_point {
            let t = j as f32 / segments_per_point as f32;
            samples.push(SplineSample::new(span.position(t), span.tangent(t)));
        }
    }

    SplinePath::from(samples)
}
