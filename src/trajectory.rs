//! Trajectory point sequences for the cast.
//!
//! Pure functions that produce fixed-length point sequences between two
//! endpoints:
//!
//! - [`arc_points`] – a rising-then-falling flight arc through an apex height
//! - [`sag_points`] – a line at rest, drooping between its endpoints
//! - [`blend`] – index-aligned interpolation between two sequences, with an
//!   optional reveal limit for "growing" lines
//!
//! Sequences for one cast are always computed with the same `count` so that
//! blending between them is well defined.

use glam::Vec3;

/// Fraction of the straight-line span used as the depth of a resting sag.
pub const SAG_RATIO: f32 = 0.12;

/// Normalised parameter of sample `i` out of `count`.
#[inline]
fn sample_t(i: usize, count: usize) -> f32 {
    i as f32 / (count - 1).max(1) as f32
}

/// Unit direction perpendicular to `start -> end`, lying in the vertical
/// plane that contains the segment and pointing up.
///
/// Falls back to +X when the segment is vertical (or degenerate).
fn lift_direction(start: Vec3, end: Vec3) -> Vec3 {
    let along = (end - start).normalize_or_zero();
    let lift = Vec3::Y - along * Vec3::Y.dot(along);
    if lift.length_squared() < 1e-8 {
        Vec3::X
    } else {
        lift.normalize()
    }
}

/// Point at parameter `t` in `[0, 1]` along the flight arc.
///
/// The offset from the straight segment is `apex_height * 4t(1-t)`, so it is
/// zero at both ends and exactly `apex_height` at `t = 0.5`.
pub fn arc_point_at(start: Vec3, end: Vec3, apex_height: f32, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let bulge = 4.0 * t * (1.0 - t);
    start.lerp(end, t) + lift_direction(start, end) * (apex_height * bulge)
}

/// `count` points along the flight arc from `start` to `end`.
///
/// The first point is exactly `start` and the last exactly `end`.
pub fn arc_points(start: Vec3, end: Vec3, apex_height: f32, count: usize) -> Vec<Vec3> {
    assert!(count >= 2, "arc needs at least two points, got {count}");
    let lift = lift_direction(start, end);
    (0..count)
        .map(|i| {
            if i == 0 {
                return start;
            }
            if i == count - 1 {
                return end;
            }
            let t = sample_t(i, count);
            start.lerp(end, t) + lift * (apex_height * 4.0 * t * (1.0 - t))
        })
        .collect()
}

/// `count` points of a line hanging between `start` and `end`.
///
/// The droop is a downward parabola whose depth scales with the span, so a
/// short line barely sags and no point rises above the straight segment.
pub fn sag_points(start: Vec3, end: Vec3, count: usize) -> Vec<Vec3> {
    assert!(count >= 2, "sag needs at least two points, got {count}");
    let depth = start.distance(end) * SAG_RATIO;
    (0..count)
        .map(|i| {
            if i == 0 {
                return start;
            }
            if i == count - 1 {
                return end;
            }
            let t = sample_t(i, count);
            start.lerp(end, t) - Vec3::Y * (depth * 4.0 * t * (1.0 - t))
        })
        .collect()
}

/// Write `lerp(a[i], b[i], alpha)` into `out[i]` for every index below
/// `reveal_limit` (or all indices when `None`).
///
/// Indices at or beyond the limit are left untouched. `alpha` is clamped to
/// `[0, 1]`.
///
/// # Panics
///
/// When the three sequences do not share the same length. That is a wiring
/// bug, not a runtime condition.
pub fn blend(a: &[Vec3], b: &[Vec3], out: &mut [Vec3], alpha: f32, reveal_limit: Option<usize>) {
    assert!(
        a.len() == b.len() && b.len() == out.len(),
        "blend length mismatch: {} / {} / {}",
        a.len(),
        b.len(),
        out.len()
    );
    let alpha = alpha.clamp(0.0, 1.0);
    let limit = reveal_limit.map_or(out.len(), |l| l.min(out.len()));
    // exact at alpha 0 and 1
    for ((o, pa), pb) in out.iter_mut().zip(a).zip(b).take(limit) {
        *o = *pa * (1.0 - alpha) + *pb * alpha;
    }
}

/// Index of the time step reached after `elapsed_ms` when `count` samples
/// are spread evenly over `duration_ms`.
///
/// Not clamped: callers decide whether to stop at `count - 1` (a position)
/// or `count` (a reveal length).
pub fn timestep(elapsed_ms: f64, duration_ms: f64, count: usize) -> usize {
    if count == 0 || duration_ms <= 0.0 || elapsed_ms <= 0.0 {
        return 0;
    }
    let step = duration_ms / count as f64;
    (elapsed_ms / step).floor() as usize
}
