// Per-frame camera arbitration: frame gate, camera override callback, command sink.
// Rule: hold authority only while there is a zoom change to reject. Holding it any
// longer would also kill quick-look, hat-switch and drag-to-look.

use log::{debug, trace};

use crate::clock::{Clock, MonotonicClock};
use crate::commands::Command;
use crate::kinematics::Kinematics;
use crate::types::*;
use crate::window::{Grace, SuppressionWindow};

/// The arbitration engine. Single-threaded: every entry point runs on the host's sim thread.
pub struct ZoomArbiter<C: Clock = MonotonicClock> {
    clock: C,
    grace: Grace,
    extrapolate_motion: bool,
    authority_held: bool,
    zoom_target: f64,
    window: SuppressionWindow,
}

impl ZoomArbiter<MonotonicClock> {
    pub fn new(config: &ArbiterConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> ZoomArbiter<C> {
    pub fn with_clock(config: &ArbiterConfig, clock: C) -> Self {
        ZoomArbiter {
            clock,
            grace: Grace::from(config),
            extrapolate_motion: config.extrapolate_motion,
            authority_held: false,
            zoom_target: config.initial_zoom,
            window: SuppressionWindow::new(),
        }
    }

    pub fn authority_held(&self) -> bool {
        self.authority_held
    }

    pub fn zoom_target(&self) -> f64 {
        self.zoom_target
    }

    pub fn window(&self) -> &SuppressionWindow {
        &self.window
    }

    pub fn extrapolates_motion(&self) -> bool {
        self.extrapolate_motion
    }

    /// Frame gate. Returns true when the caller must install the camera callback
    /// (until the next view change); authority is then considered held.
    pub fn on_frame(&mut self, view_is_external: bool) -> bool {
        if view_is_external || self.authority_held {
            return false;
        }
        self.authority_held = true;
        trace!("acquiring camera authority");
        true
    }

    /// Camera override callback without motion extrapolation.
    pub fn on_camera_pose(&mut self, pose: &mut CameraPose, losing_authority: bool) -> CameraControl {
        self.on_camera_pose_with(pose, losing_authority, || None)
    }

    /// Camera override callback. `kinematics` is only consulted when an override
    /// is applied and extrapolation is enabled.
    pub fn on_camera_pose_with(
        &mut self,
        pose: &mut CameraPose,
        losing_authority: bool,
        kinematics: impl FnOnce() -> Option<Kinematics>,
    ) -> CameraControl {
        if losing_authority {
            self.authority_held = false;
            return CameraControl::Release;
        }

        let proposed = pose.zoom;
        if self.window.permits(self.clock.now()) {
            if proposed != self.zoom_target {
                debug!("learning zoom {} -> {}", self.zoom_target, proposed);
            }
            self.zoom_target = proposed;
        } else if proposed != self.zoom_target {
            debug!("rejecting zoom {}, holding {}", proposed, self.zoom_target);
            pose.zoom = self.zoom_target;
            if self.extrapolate_motion {
                if let Some(k) = kinematics() {
                    k.extrapolate(pose);
                }
            }
            self.window.clear_deadline();
            return CameraControl::Retain;
        }

        self.authority_held = false;
        CameraControl::Release
    }

    /// Command sink. Every phase of every bound command lands here.
    pub fn on_command(&mut self, command: Command, phase: CommandPhase) {
        let now = self.clock.now();
        self.window.apply(command, phase, now, &self.grace);
        trace!(
            "{} {:?}: hold={} deadline={:?}",
            command.name(),
            phase,
            self.window.hold_active(),
            self.window.deadline()
        );
    }
}
