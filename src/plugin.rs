// Plugin lifecycle and host dispatch. Owns the arbiter between enable and disable
// and remembers every registration so disable can undo exactly that, in reverse.

use log::{debug, error, info, warn};

use crate::arbiter::ZoomArbiter;
use crate::clock::{Clock, MonotonicClock};
use crate::commands::Command;
use crate::error::{ArbiterError, Result};
use crate::host::{CommandHandle, Host};
use crate::kinematics::Kinematics;
use crate::state::StateKey;
use crate::types::*;

pub const PLUGIN_NAME: &str = "StopZoomingDammit";
pub const PLUGIN_SIGNATURE: &str = "skiselkov.stopzoomingdammit";
pub const PLUGIN_DESCRIPTION: &str = "StopZoomingDammit";

/// Identity reported to the host at start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Default)]
struct Registrations {
    draw_hook: bool,
    bound: Vec<Command>,
    created: Vec<(Command, CommandHandle)>,
}

pub struct Plugin<H: Host, C: Clock + Clone = MonotonicClock> {
    host: H,
    config: ArbiterConfig,
    clock: C,
    arbiter: Option<ZoomArbiter<C>>,
    registrations: Registrations,
}

impl<H: Host> Plugin<H, MonotonicClock> {
    pub fn new(host: H, config: ArbiterConfig) -> Self {
        Self::with_clock(host, config, MonotonicClock::new())
    }
}

impl<H: Host, C: Clock + Clone> Plugin<H, C> {
    pub fn with_clock(host: H, config: ArbiterConfig, clock: C) -> Self {
        Plugin {
            host,
            config,
            clock,
            arbiter: None,
            registrations: Registrations::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn arbiter(&self) -> Option<&ZoomArbiter<C>> {
        self.arbiter.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.arbiter.is_some()
    }

    /// Handle of a command this plugin created, while enabled.
    pub fn command_handle(&self, command: Command) -> Option<CommandHandle> {
        self.registrations
            .created
            .iter()
            .find(|(created, _)| *created == command)
            .map(|(_, handle)| *handle)
    }

    pub fn start(&self) -> PluginInfo {
        info!("This is {}", PLUGIN_NAME);
        PluginInfo {
            name: PLUGIN_NAME,
            signature: PLUGIN_SIGNATURE,
            description: PLUGIN_DESCRIPTION,
        }
    }

    pub fn stop(&mut self) {
        debug!("stop");
    }

    /// Register hooks and commands, then build the arbiter. On failure every
    /// registration already made is undone and the camera is left alone.
    pub fn enable(&mut self) -> Result<()> {
        if self.is_enabled() {
            warn!("enable called while already enabled");
            return Ok(());
        }
        if let Err(err) = self.register_all() {
            error!("enable failed: {}", err);
            self.teardown();
            return Err(err);
        }
        self.arbiter = Some(ZoomArbiter::with_clock(&self.config, self.clock.clone()));
        info!(
            "enabled (extrapolate_motion={})",
            self.config.extrapolate_motion
        );
        Ok(())
    }

    /// Undo everything enable registered. Safe to call repeatedly or after a failed enable.
    pub fn disable(&mut self) {
        let was_enabled = self.is_enabled();
        self.teardown();
        if was_enabled {
            info!("disabled");
        }
    }

    fn register_all(&mut self) -> Result<()> {
        self.config.validate()?;

        self.host.register_draw_hook();
        self.registrations.draw_hook = true;

        for key in StateKey::required(self.config.extrapolate_motion) {
            if !self.host.resolve_state(key) {
                return Err(ArbiterError::StateNotFound(key.name().to_string()));
            }
        }

        for command in Command::all_consumed() {
            self.host.bind_command(command);
            self.registrations.bound.push(command);
        }

        for command in Command::all_owned() {
            let name = command.name();
            let description = command.description().unwrap_or_default();
            let handle = self
                .host
                .create_command(&name, description)
                .ok_or(ArbiterError::CommandCreation(name))?;
            self.registrations.created.push((command, handle));
            self.host.bind_command(command);
            self.registrations.bound.push(command);
        }
        Ok(())
    }

    fn teardown(&mut self) {
        if let Some(arbiter) = self.arbiter.take() {
            if arbiter.authority_held() {
                self.host.release_camera_control();
            }
        }
        while let Some(command) = self.registrations.bound.pop() {
            self.host.unbind_command(command);
        }
        // Host commands cannot be destroyed; forgetting the handles is enough.
        self.registrations.created.clear();
        if self.registrations.draw_hook {
            self.host.unregister_draw_hook();
            self.registrations.draw_hook = false;
        }
    }

    /// Draw hook. The return value is what the host expects from a draw callback.
    pub fn on_draw(&mut self) -> bool {
        let Some(arbiter) = self.arbiter.as_mut() else {
            return true;
        };
        let view_is_external = self.host.read_state(StateKey::ViewIsExternal) != 0.0;
        if arbiter.on_frame(view_is_external) {
            self.host.take_camera_control();
        }
        true
    }

    /// Camera callback. Returns true to keep control next frame.
    pub fn on_camera(&mut self, pose: &mut CameraPose, losing_authority: bool) -> bool {
        let Some(arbiter) = self.arbiter.as_mut() else {
            return false;
        };
        let host = &self.host;
        arbiter
            .on_camera_pose_with(pose, losing_authority, || {
                Some(Kinematics::read(|key| host.read_state(key)))
            })
            .is_retained()
    }

    /// Command handler. Always lets the command through to other handlers.
    pub fn on_command(&mut self, command: Command, phase: CommandPhase) -> bool {
        if let Some(arbiter) = self.arbiter.as_mut() {
            arbiter.on_command(command, phase);
        }
        true
    }

    /// Command handler for adapters that only know the host command name.
    pub fn on_command_name(&mut self, name: &str, phase: CommandPhase) -> bool {
        match Command::from_name(name) {
            Some(command) => self.on_command(command, phase),
            None => {
                warn!("ignoring unknown command {}", name);
                true
            }
        }
    }
}
