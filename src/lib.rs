// stopzooming: camera arbitration for a flight-sim host.
// Blocks accidental mouse-wheel zoom frame by frame and hands the camera back the
// moment there is nothing to block. Host APIs live behind the `Host` adapter.

mod arbiter;
mod clock;
mod commands;
mod error;
mod host;
mod kinematics;
pub mod logging;
mod plugin;
mod state;
mod types;
mod window;

pub use arbiter::ZoomArbiter;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use commands::{Command, Grant, ZoomCommand, QUICK_LOOK_SLOTS};
pub use error::{ArbiterError, Result};
pub use host::{CommandHandle, Host};
pub use kinematics::Kinematics;
pub use plugin::{Plugin, PluginInfo, PLUGIN_DESCRIPTION, PLUGIN_NAME, PLUGIN_SIGNATURE};
pub use state::StateKey;
pub use types::*;
pub use window::{Grace, SuppressionWindow};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_from_json_config() {
        struct NullHost;

        impl Host for NullHost {
            fn register_draw_hook(&mut self) {}
            fn unregister_draw_hook(&mut self) {}
            fn resolve_state(&mut self, _key: StateKey) -> bool {
                true
            }
            fn read_state(&self, _key: StateKey) -> f64 {
                0.0
            }
            fn bind_command(&mut self, _command: Command) {}
            fn unbind_command(&mut self, _command: Command) {}
            fn create_command(&mut self, _name: &str, _description: &str) -> Option<CommandHandle> {
                Some(CommandHandle(1))
            }
            fn take_camera_control(&mut self) {}
            fn release_camera_control(&mut self) {}
        }

        let config = ArbiterConfig::from_json(r#"{"initial_zoom":1.5}"#).unwrap();
        let mut plugin = Plugin::new(NullHost, config);
        assert!(plugin.enable().is_ok());
        assert_eq!(plugin.arbiter().map(|a| a.zoom_target()), Some(1.5));
        plugin.disable();
        assert!(!plugin.is_enabled());
    }
}
