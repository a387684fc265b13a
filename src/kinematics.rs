// One-frame kinematic extrapolation, so holding zoom does not also freeze the camera.
// Constant-acceleration integration per axis.

use serde::{Deserialize, Serialize};

use crate::state::StateKey;
use crate::types::CameraPose;

/// Aircraft motion snapshot read from the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Kinematics {
    /// Linear velocity, m/s.
    pub velocity: [f64; 3],
    /// Linear acceleration, m/s².
    pub acceleration: [f64; 3],
    /// Roll, pitch and yaw rates, deg/s.
    pub angular_rate: [f64; 3],
    /// Frame duration, seconds.
    pub dt: f64,
}

impl Kinematics {
    /// Build a snapshot from any keyed reader (normally the host).
    pub fn read(mut value: impl FnMut(StateKey) -> f64) -> Self {
        Kinematics {
            velocity: [
                value(StateKey::LocalVx),
                value(StateKey::LocalVy),
                value(StateKey::LocalVz),
            ],
            acceleration: [
                value(StateKey::LocalAx),
                value(StateKey::LocalAy),
                value(StateKey::LocalAz),
            ],
            angular_rate: [
                value(StateKey::RollRate),
                value(StateKey::PitchRate),
                value(StateKey::YawRate),
            ],
            dt: value(StateKey::FramePeriod),
        }
    }

    /// Move `pose` forward by one frame. Zoom is not touched.
    pub fn extrapolate(&self, pose: &mut CameraPose) {
        let dt = self.dt;
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let step = |v: f64, a: f64| v * dt + 0.5 * a * dt * dt;

        pose.x += step(self.velocity[0], self.acceleration[0]);
        pose.y += step(self.velocity[1], self.acceleration[1]);
        pose.z += step(self.velocity[2], self.acceleration[2]);

        pose.roll += self.angular_rate[0] * dt;
        pose.pitch += self.angular_rate[1] * dt;
        pose.heading += self.angular_rate[2] * dt;
    }
}
