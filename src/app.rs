//! Root application component
//!
//! The App struct implements the Component trait, acting as the root that
//! delegates event handling and rendering to the active trainer. App is
//! intentionally lean: it routes modes and overlays but contains no widget
//! logic itself. Trainers are constructed fresh on entry and dropped on
//! exit, which also abandons their in-flight generation requests.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    FoundryComponent, HelpDialog, LauncherComponent, MlComponent, QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::view::{AppMode, Trainer};
use crate::services::{GenAiClient, SpeechService};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Overlays drawn on top of whichever mode is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    Help,
    QuitConfirm,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Active overlay, if any
    overlay: Option<Overlay>,

    /// Endpoint configuration
    config: Config,

    /// Shared generative-endpoint client, cloned into worker threads
    client: GenAiClient,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub launcher: LauncherComponent,
    foundry: Option<FoundryComponent>,
    ml: Option<MlComponent>,
    help_dialog: HelpDialog,
    quit_dialog: QuitDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    pub fn new() -> Result<App> {
        let config = match Config::load() {
            Some(config) => config,
            None => {
                // First run: write a template so the API key has a place to live
                let config = Config::default();
                let _ = config.save();
                config
            }
        };
        let client = GenAiClient::new(&config)?;

        Ok(App {
            mode: AppMode::Splash,
            should_quit: false,
            overlay: None,
            config,
            client,
            splash: SplashComponent::new(),
            launcher: LauncherComponent::new(),
            foundry: None,
            ml: None,
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog,
        })
    }

    fn launch_trainer(&mut self, trainer: Trainer) {
        match trainer {
            Trainer::Foundry => {
                let speech = SpeechService::detect(self.config.stt_command());
                self.foundry = Some(FoundryComponent::new(self.client.clone(), speech));
                self.mode = AppMode::Foundry;
            }
            Trainer::MlStrategies => {
                self.ml = Some(MlComponent::new(self.client.clone()));
                self.mode = AppMode::Ml;
            }
        }
    }

    /// Drop the active trainer and return to the launcher. Dropping cancels
    /// its background generation runners.
    fn close_trainer(&mut self) {
        self.foundry = None;
        self.ml = None;
        self.mode = AppMode::Launcher;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(overlay) = self.overlay {
            return match overlay {
                Overlay::Help => self.help_dialog.handle_key_event(key),
                Overlay::QuitConfirm => self.quit_dialog.handle_key_event(key),
            };
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Launcher => self.launcher.handle_key_event(key),
            AppMode::Foundry => match self.foundry.as_mut() {
                Some(foundry) => foundry.handle_key_event(key),
                None => Ok(Some(Action::OpenLauncher)),
            },
            AppMode::Ml => match self.ml.as_mut() {
                Some(ml) => ml.handle_key_event(key),
                None => Ok(Some(Action::OpenLauncher)),
            },
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
                // Tick the active trainer so it can animate and poll its
                // background generation jobs
                if let Some(foundry) = self.foundry.as_mut() {
                    foundry.update(Action::Tick)?;
                }
                if let Some(ml) = self.ml.as_mut() {
                    ml.update(Action::Tick)?;
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Launcher;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            Action::LaunchTrainer(trainer) => self.launch_trainer(trainer),
            Action::OpenLauncher => self.close_trainer(),

            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.overlay = Some(Overlay::Help);
            }
            Action::OpenQuitDialog => {
                self.overlay = Some(Overlay::QuitConfirm);
            }
            Action::CloseOverlay => {
                self.overlay = None;
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Launcher => self.launcher.draw(frame, area)?,
            AppMode::Foundry => {
                if let Some(foundry) = self.foundry.as_mut() {
                    foundry.draw(frame, area)?;
                }
            }
            AppMode::Ml => {
                if let Some(ml) = self.ml.as_mut() {
                    ml.draw(frame, area)?;
                }
            }
        }

        match self.overlay {
            Some(Overlay::Help) => self.help_dialog.draw(frame, area)?,
            Some(Overlay::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            None => {}
        }
        Ok(())
    }
}
