// Boundary with the host simulator. A thin adapter implements this over the
// host's draw, camera, command and state APIs; the arbiter never sees them.

use crate::commands::Command;
use crate::state::StateKey;

/// Opaque handle of a command created through the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandHandle(pub u64);

pub trait Host {
    /// Register the once-per-frame draw hook (before scene composition).
    fn register_draw_hook(&mut self);
    fn unregister_draw_hook(&mut self);

    /// Look up a state key. `false` means the host does not expose it.
    fn resolve_state(&mut self, key: StateKey) -> bool;
    /// Read a resolved key. Booleans are reported as 0.0 / 1.0.
    fn read_state(&self, key: StateKey) -> f64;

    /// Route every phase of `command` to the plugin, after other handlers.
    fn bind_command(&mut self, command: Command);
    fn unbind_command(&mut self, command: Command);
    /// Create a new host command. `None` when the host hands back an invalid handle.
    fn create_command(&mut self, name: &str, description: &str) -> Option<CommandHandle>;

    /// Install the camera callback until the next view change.
    fn take_camera_control(&mut self);
    /// Drop the camera callback if it is still installed.
    fn release_camera_control(&mut self);
}
