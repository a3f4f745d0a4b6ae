//! Action enum - All app-level operations
//!
//! Components emit Actions in response to events, and the App processes them
//! to drive mode transitions and overlays. Widget-local state changes
//! (sliders, cursors, typed input) never leave their component.

use crate::model::view::Trainer;
use std::fmt;

/// All app-level actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations and background-job polling
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to the launcher
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Mode Transitions
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter a trainer; it is constructed fresh so its state resets
    LaunchTrainer(Trainer),
    /// Leave the current trainer and return to the launcher
    OpenLauncher,

    // ─────────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the keyboard shortcut help overlay
    OpenHelp,
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Close the current overlay
    CloseOverlay,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::LaunchTrainer(t) => write!(f, "LaunchTrainer({})", t.title()),
            Action::OpenLauncher => write!(f, "OpenLauncher"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseOverlay => write!(f, "CloseOverlay"),
        }
    }
}
