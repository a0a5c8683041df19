//! Pure distance and motion-step helpers shared by every system.

use glam::{DVec2, IVec2};

use crate::constants::ADVANCE_EPSILON;

/// Euclidean distance between two grid points.
pub fn distance(a: IVec2, b: IVec2) -> f64 {
    (a.as_dvec2() - b.as_dvec2()).length()
}

/// Point on a circle around `center`, truncated toward zero and wrapped
/// onto a `map_size` torus on each axis.
pub fn orbit_position(center: IVec2, radius: f64, angle: f64, map_size: i32) -> IVec2 {
    let raw = center.as_dvec2() + DVec2::new(angle.cos(), angle.sin()) * radius;
    IVec2::new(
        (raw.x as i32).rem_euclid(map_size),
        (raw.y as i32).rem_euclid(map_size),
    )
}

/// One step of length `speed` from `point` toward `target`, rounded per
/// axis (ties to even). A point already on its target stays put.
pub fn advance_toward(point: IVec2, target: IVec2, speed: f64) -> IVec2 {
    let direction = target.as_dvec2() - point.as_dvec2();
    let step = direction / (direction.length() + ADVANCE_EPSILON) * speed;
    point + IVec2::new(step.x.round_ties_even() as i32, step.y.round_ties_even() as i32)
}

/// Number of steps a unit-speed walker needs before it is within `radius`
/// of `target`. `None` if it stalls without getting there.
pub fn steps_to_reach(mut point: IVec2, target: IVec2, radius: f64) -> Option<u64> {
    let mut steps = 0;
    while distance(point, target) > radius {
        let next = advance_toward(point, target, 1.0);
        if next == point {
            return None;
        }
        point = next;
        steps += 1;
    }
    Some(steps)
}
