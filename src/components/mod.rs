//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. The two trainers are self-contained component trees constructed
//! fresh on entry.

pub mod foundry;
pub mod help_dialog;
pub mod launcher;
pub mod layout;
pub mod ml;
pub mod quit_dialog;
pub mod splash;

/// Spinner frames for loading states, advanced on the UI tick
pub const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub use foundry::FoundryComponent;
pub use help_dialog::HelpDialog;
pub use launcher::LauncherComponent;
pub use layout::centered_popup;
pub use ml::MlComponent;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
