// Typed command table. Host command names are resolved here once instead of
// being string-dispatched at runtime.

use serde::{Deserialize, Serialize};

/// Number of quick-look slots the host exposes.
pub const QUICK_LOOK_SLOTS: u8 = 20;

/// Native zoom commands that legitimately change zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoomCommand {
    In,
    Out,
    InFast,
    OutFast,
    InSlow,
    OutSlow,
}

impl ZoomCommand {
    pub const ALL: [ZoomCommand; 6] = [
        ZoomCommand::In,
        ZoomCommand::Out,
        ZoomCommand::InFast,
        ZoomCommand::OutFast,
        ZoomCommand::InSlow,
        ZoomCommand::OutSlow,
    ];

    fn suffix(self) -> &'static str {
        match self {
            ZoomCommand::In => "zoom_in",
            ZoomCommand::Out => "zoom_out",
            ZoomCommand::InFast => "zoom_in_fast",
            ZoomCommand::OutFast => "zoom_out_fast",
            ZoomCommand::InSlow => "zoom_in_slow",
            ZoomCommand::OutSlow => "zoom_out_slow",
        }
    }
}

/// Every command the arbiter reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Pre-existing host zoom command.
    Zoom(ZoomCommand),
    /// Pre-existing host quick-look slot, `0..QUICK_LOOK_SLOTS`.
    QuickLook(u8),
    /// Created by the plugin: allow zoom while held.
    AllowZoomHold,
    /// Created by the plugin: flip the allow-zoom hold.
    AllowZoomToggle,
}

/// How a command affects the suppression window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// Phase-sensitive hold; release opens a key grace.
    Hold,
    /// Begin-only toggle of the hold.
    Toggle,
    /// Extend the deadline by the zoom-command grace.
    ZoomGrace,
    /// Extend the deadline by the quick-look grace.
    QuickLookGrace,
}

impl Command {
    /// Host name of the command.
    pub fn name(&self) -> String {
        match self {
            Command::Zoom(zoom) => format!("sim/general/{}", zoom.suffix()),
            Command::QuickLook(slot) => format!("sim/view/quick_look_{}", slot),
            Command::AllowZoomHold => "stopzooming/allow_zoom_hold".to_string(),
            Command::AllowZoomToggle => "stopzooming/allow_zoom_toggle".to_string(),
        }
    }

    /// Description for commands this plugin creates.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            Command::AllowZoomHold => Some("Allow zooming while key/button is held"),
            Command::AllowZoomToggle => Some("Toggle allow zooming"),
            _ => None,
        }
    }

    /// True for commands the plugin creates rather than binds to.
    pub fn is_owned(&self) -> bool {
        self.description().is_some()
    }

    pub fn grant(&self) -> Grant {
        match self {
            Command::Zoom(_) => Grant::ZoomGrace,
            Command::QuickLook(_) => Grant::QuickLookGrace,
            Command::AllowZoomHold => Grant::Hold,
            Command::AllowZoomToggle => Grant::Toggle,
        }
    }

    /// Pre-existing host commands, in binding order.
    pub fn all_consumed() -> Vec<Command> {
        (0..QUICK_LOOK_SLOTS)
            .map(Command::QuickLook)
            .chain(ZoomCommand::ALL.into_iter().map(Command::Zoom))
            .collect()
    }

    /// Commands created by the plugin, in creation order.
    pub fn all_owned() -> [Command; 2] {
        [Command::AllowZoomHold, Command::AllowZoomToggle]
    }

    /// Reverse lookup from a host command name.
    pub fn from_name(name: &str) -> Option<Command> {
        if let Some(suffix) = name.strip_prefix("sim/general/") {
            return ZoomCommand::ALL
                .into_iter()
                .find(|zoom| zoom.suffix() == suffix)
                .map(Command::Zoom);
        }
        if let Some(slot) = name.strip_prefix("sim/view/quick_look_") {
            // Reject "+1", "01" and friends that `parse` would accept.
            if slot.is_empty() || !slot.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            if slot.len() > 1 && slot.starts_with('0') {
                return None;
            }
            return slot
                .parse::<u8>()
                .ok()
                .filter(|slot| *slot < QUICK_LOOK_SLOTS)
                .map(Command::QuickLook);
        }
        Command::all_owned()
            .into_iter()
            .find(|command| command.name() == name)
    }
}
