//! Per-drone action codes supplied by the caller each step.
//!
//! Drone motion is orbital and ignores these; the codes exist so external
//! policies can drive the engine through the usual step interface. They are
//! still validated so a malformed action vector is reported, not swallowed.

use serde::{Deserialize, Serialize};

use crate::constants::ACTION_COUNT;
use crate::error::SimError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum DroneAction {
    #[default]
    Hold = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

impl DroneAction {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DroneAction {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(DroneAction::Hold),
            1 => Ok(DroneAction::Up),
            2 => Ok(DroneAction::Down),
            3 => Ok(DroneAction::Left),
            4 => Ok(DroneAction::Right),
            other => Err(other),
        }
    }
}

/// A no-op action vector for `num_drones` drones.
pub fn hold_all(num_drones: usize) -> Vec<u8> {
    vec![DroneAction::Hold.code(); num_drones]
}

/// Parse a raw action vector, checking its length and every code.
pub fn parse_actions(
    codes: &[u8],
    num_drones: usize,
) -> Result<Vec<DroneAction>, SimError> {
    if codes.len() != num_drones {
        return Err(SimError::ActionCount {
            expected: num_drones,
            actual: codes.len(),
        });
    }
    codes
        .iter()
        .enumerate()
        .map(|(index, &code)| {
            DroneAction::try_from(code).map_err(|code| SimError::ActionCode {
                index,
                code,
                limit: ACTION_COUNT,
            })
        })
        .collect()
}
