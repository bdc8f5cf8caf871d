//! Absorption: the bigger of two overlapping actors eats the smaller one

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use crate::consts::GROWTH_FACTOR;

/// Record of one actor eating another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Absorption {
    pub eater: u32,
    pub prey: u32,
    /// Radius gained by the eater
    pub gained: f32,
}

/// Radius gained from eating a circle of `prey_radius`
///
/// Computed in f64 so integral radii floor exactly as integer arithmetic would.
#[inline]
pub fn growth_for(prey_radius: f32) -> f32 {
    (prey_radius as f64 * GROWTH_FACTOR).floor() as f32
}

/// Whether two circles overlap (touching does not count)
#[inline]
pub fn overlaps(a: &Actor, b: &Actor) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// Let `eater` try to eat `prey`
///
/// Fires only when both are alive, they are distinct actors, the circles
/// overlap and the eater is strictly bigger.
pub fn absorb(eater: &mut Actor, prey: &mut Actor) -> Option<Absorption> {
    if !eater.alive || !prey.alive || eater.id == prey.id {
        return None;
    }
    if !overlaps(eater, prey) || eater.radius <= prey.radius {
        return None;
    }

    prey.alive = false;
    let gained = growth_for(prey.radius);
    eater.radius += gained;

    Some(Absorption {
        eater: eater.id,
        prey: prey.id,
        gained,
    })
}

/// Mutable references to two distinct elements
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Apply `absorb` to every ordered pair, in collection order
pub fn resolve_absorptions(actors: &mut [Actor]) -> Vec<Absorption> {
    let mut events = Vec::new();
    let n = actors.len();

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (eater, prey) = pair_mut(actors, i, j);
            if let Some(event) = absorb(eater, prey) {
                events.push(event);
            }
        }
    }

    events
}
