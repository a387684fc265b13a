// Suppression window: an explicit hold plus a single expiring deadline.
// Either one turns the arbiter from blocking into learning.

use crate::commands::{Command, Grant};
use crate::types::{ArbiterConfig, CommandPhase, Timestamp};

/// Grace durations applied after trigger commands (microseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grace {
    pub hold_release_us: u64,
    pub zoom_command_us: u64,
    pub quick_look_us: u64,
}

impl From<&ArbiterConfig> for Grace {
    fn from(config: &ArbiterConfig) -> Self {
        Grace {
            hold_release_us: config.hold_release_grace_us,
            zoom_command_us: config.zoom_command_grace_us,
            quick_look_us: config.quick_look_grace_us,
        }
    }
}

impl Default for Grace {
    fn default() -> Self {
        Grace::from(&ArbiterConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuppressionWindow {
    hold_active: bool,
    deadline: Option<Timestamp>,
}

impl SuppressionWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold_active(&self) -> bool {
        self.hold_active
    }

    pub fn deadline(&self) -> Option<Timestamp> {
        self.deadline
    }

    /// Hold wins unconditionally; otherwise zoom is allowed strictly before the deadline.
    pub fn permits(&self, now: Timestamp) -> bool {
        self.hold_active || self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Overwrite the deadline with `now + grace_us`. Never accumulates.
    pub fn extend(&mut self, now: Timestamp, grace_us: u64) {
        self.deadline = Some(now.after_micros(grace_us));
    }

    /// Drop any pending timed grace. The hold flag is untouched.
    pub fn clear_deadline(&mut self) {
        self.deadline = None;
    }

    /// Apply one command event.
    pub fn apply(&mut self, command: Command, phase: CommandPhase, now: Timestamp, grace: &Grace) {
        match command.grant() {
            Grant::Hold => match phase {
                CommandPhase::Begin | CommandPhase::Continue => self.hold_active = true,
                CommandPhase::End => {
                    self.hold_active = false;
                    self.extend(now, grace.hold_release_us);
                }
            },
            Grant::Toggle => {
                if phase == CommandPhase::Begin {
                    self.hold_active = !self.hold_active;
                    if !self.hold_active {
                        self.extend(now, grace.hold_release_us);
                    }
                }
            }
            Grant::ZoomGrace => self.extend(now, grace.zoom_command_us),
            Grant::QuickLookGrace => self.extend(now, grace.quick_look_us),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ZoomCommand;
    use proptest::prelude::*;

    fn ms(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn empty_window_denies() {
        let window = SuppressionWindow::new();
        assert!(!window.permits(ms(0)));
        assert!(!window.permits(ms(10_000)));
    }

    #[test]
    fn deadline_is_exclusive() {
        let mut window = SuppressionWindow::new();
        window.extend(ms(100), 500_000);
        assert!(window.permits(ms(599)));
        assert!(!window.permits(ms(600)));
    }

    #[test]
    fn hold_lifecycle() {
        let grace = Grace::default();
        let mut window = SuppressionWindow::new();

        window.apply(Command::AllowZoomHold, CommandPhase::Begin, ms(0), &grace);
        assert!(window.hold_active());
        window.apply(Command::AllowZoomHold, CommandPhase::Continue, ms(50), &grace);
        assert!(window.hold_active());
        assert_eq!(window.deadline(), None);

        window.apply(Command::AllowZoomHold, CommandPhase::End, ms(1000), &grace);
        assert!(!window.hold_active());
        assert_eq!(window.deadline(), Some(ms(1500)));
        assert!(window.permits(ms(1499)));
        assert!(!window.permits(ms(1500)));
    }

    #[test]
    fn toggle_on_leaves_deadline_alone() {
        let grace = Grace::default();
        let mut window = SuppressionWindow::new();
        window.extend(ms(0), 100_000);

        window.apply(Command::AllowZoomToggle, CommandPhase::Begin, ms(10), &grace);
        assert!(window.hold_active());
        assert_eq!(window.deadline(), Some(ms(100)));
    }

    #[test]
    fn toggle_off_sets_key_grace() {
        let grace = Grace::default();
        let mut window = SuppressionWindow::new();
        window.apply(Command::AllowZoomToggle, CommandPhase::Begin, ms(0), &grace);
        window.apply(Command::AllowZoomToggle, CommandPhase::Begin, ms(2000), &grace);
        assert!(!window.hold_active());
        assert_eq!(window.deadline(), Some(ms(2500)));
    }

    #[test]
    fn toggle_ignores_continue_and_end() {
        let grace = Grace::default();
        let mut window = SuppressionWindow::new();
        window.apply(Command::AllowZoomToggle, CommandPhase::Continue, ms(0), &grace);
        window.apply(Command::AllowZoomToggle, CommandPhase::End, ms(0), &grace);
        assert_eq!(window, SuppressionWindow::new());
    }

    #[test]
    fn passive_commands_keep_hold() {
        let grace = Grace::default();
        let mut window = SuppressionWindow::new();
        window.apply(Command::AllowZoomToggle, CommandPhase::Begin, ms(0), &grace);

        window.apply(Command::Zoom(ZoomCommand::In), CommandPhase::End, ms(100), &grace);
        assert!(window.hold_active());
        assert_eq!(window.deadline(), Some(ms(650)));

        window.apply(Command::QuickLook(4), CommandPhase::Begin, ms(200), &grace);
        assert!(window.hold_active());
        assert_eq!(window.deadline(), Some(ms(1450)));
    }

    #[test]
    fn later_short_grace_overwrites_longer_one() {
        let grace = Grace::default();
        let mut window = SuppressionWindow::new();
        window.apply(Command::QuickLook(0), CommandPhase::Begin, ms(0), &grace);
        window.apply(Command::Zoom(ZoomCommand::Out), CommandPhase::Begin, ms(100), &grace);
        assert_eq!(window.deadline(), Some(ms(650)));
    }

    proptest! {
        #[test]
        fn zoom_grace_overwrites_not_accumulates(t1 in 0u64..1_000_000_000, gap in 1u64..550_000) {
            let grace = Grace::default();
            let mut window = SuppressionWindow::new();
            let first = Timestamp::from_micros(t1);
            let second = Timestamp::from_micros(t1 + gap);

            window.apply(Command::Zoom(ZoomCommand::InFast), CommandPhase::Begin, first, &grace);
            prop_assert!(window.permits(second));
            window.apply(Command::Zoom(ZoomCommand::InFast), CommandPhase::Begin, second, &grace);

            prop_assert_eq!(window.deadline(), Some(second.after_micros(550_000)));
        }

        #[test]
        fn hold_takes_precedence(deadline in proptest::option::of(0u64..1_000_000), now in 0u64..10_000_000) {
            let grace = Grace::default();
            let mut window = SuppressionWindow::new();
            if let Some(deadline) = deadline {
                window.extend(Timestamp::from_micros(0), deadline);
            }
            window.apply(Command::AllowZoomHold, CommandPhase::Begin, Timestamp::from_micros(0), &grace);
            prop_assert!(window.permits(Timestamp::from_micros(now)));
        }
    }
}
