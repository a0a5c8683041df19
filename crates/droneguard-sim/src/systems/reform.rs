//! Reform system: enforcement agents turn malicious drones back.
//!
//! A malicious drone is reformed when an agent is within detection radius of
//! it while the drone itself is within detection radius of a live enemy.
//! Decisions are taken against the malicious set as it stood when the pass
//! began and committed only after every agent has looked, so removing a
//! drone from the set never hides another candidate.

use std::collections::BTreeMap;

use hecs::{Entity, World};
use tracing::debug;

use droneguard_core::components::Malicious;
use droneguard_core::events::SimEvent;
use droneguard_core::geometry::distance;

use crate::roster;

/// A pending reform: which drone, and the agent that caught it.
#[derive(Debug, Clone, Copy)]
struct Verdict {
    entity: Entity,
    agent: usize,
}

/// Run the reform pass. Returns how many drones were reformed.
pub fn run(world: &mut World, detection_radius: f64, events: &mut Vec<SimEvent>) -> u32 {
    let suspects: Vec<_> = roster::drones(world)
        .into_iter()
        .filter(|d| d.malicious)
        .collect();
    if suspects.is_empty() {
        return 0;
    }
    let agents = roster::agents(world);
    if agents.is_empty() {
        return 0;
    }
    let enemies = roster::enemies(world);

    // Keyed by drone index; the first agent (by index) to witness a drone
    // gets the credit.
    let mut verdicts: BTreeMap<usize, Verdict> = BTreeMap::new();
    for agent in &agents {
        for suspect in &suspects {
            if verdicts.contains_key(&suspect.index) {
                continue;
            }
            if distance(agent.position, suspect.position) > detection_radius {
                continue;
            }
            let engaged = enemies
                .iter()
                .any(|e| distance(suspect.position, e.position) <= detection_radius);
            if engaged {
                verdicts.insert(
                    suspect.index,
                    Verdict {
                        entity: suspect.entity,
                        agent: agent.index,
                    },
                );
            }
        }
    }

    for (&drone, verdict) in &verdicts {
        let _ = world.remove_one::<Malicious>(verdict.entity);
        debug!(drone, agent = verdict.agent, "drone reformed");
        events.push(SimEvent::DroneReformed {
            drone,
            agent: verdict.agent,
        });
    }
    verdicts.len() as u32
}
