// Typed keys for host state read by string name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateKey {
    /// Non-zero while the view is an outside/orbit view the arbiter leaves alone.
    ViewIsExternal,
    LocalVx,
    LocalVy,
    LocalVz,
    LocalAx,
    LocalAy,
    LocalAz,
    /// Roll rate, degrees per second.
    RollRate,
    /// Pitch rate, degrees per second.
    PitchRate,
    /// Yaw rate, degrees per second.
    YawRate,
    /// Duration of the last frame, seconds.
    FramePeriod,
}

impl StateKey {
    pub const KINEMATICS: [StateKey; 10] = [
        StateKey::LocalVx,
        StateKey::LocalVy,
        StateKey::LocalVz,
        StateKey::LocalAx,
        StateKey::LocalAy,
        StateKey::LocalAz,
        StateKey::RollRate,
        StateKey::PitchRate,
        StateKey::YawRate,
        StateKey::FramePeriod,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StateKey::ViewIsExternal => "sim/graphics/view/view_is_external",
            StateKey::LocalVx => "sim/flightmodel/position/local_vx",
            StateKey::LocalVy => "sim/flightmodel/position/local_vy",
            StateKey::LocalVz => "sim/flightmodel/position/local_vz",
            StateKey::LocalAx => "sim/flightmodel/position/local_ax",
            StateKey::LocalAy => "sim/flightmodel/position/local_ay",
            StateKey::LocalAz => "sim/flightmodel/position/local_az",
            StateKey::RollRate => "sim/flightmodel/position/P",
            StateKey::PitchRate => "sim/flightmodel/position/Q",
            StateKey::YawRate => "sim/flightmodel/position/R",
            StateKey::FramePeriod => "sim/operation/misc/frame_rate_period",
        }
    }

    /// Keys that must resolve at enable time for the given mode.
    pub fn required(extrapolate_motion: bool) -> Vec<StateKey> {
        let mut keys = vec![StateKey::ViewIsExternal];
        if extrapolate_motion {
            keys.extend(StateKey::KINEMATICS);
        }
        keys
    }
}
