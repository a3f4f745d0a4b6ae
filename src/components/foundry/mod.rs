//! V-Process Foundry trainer
//!
//! One component tree per the trainer, owning all of its widget state. The
//! trainer is constructed fresh each time it is entered, so every view
//! starts from its initial state.

pub mod assistant;
pub mod physics_lab;
pub mod process_map;
pub mod qc_detail;
pub mod qc_toolkit;
pub mod step_detail;
pub mod ut_sim;
pub mod visual;

use crate::action::Action;
use crate::component::Component;
use crate::model::catalog::{FOUNDRY_HERO_PROMPT, PROCESS_STEPS, QC_TOOLS};
use crate::model::chat::ChatMessage;
use crate::model::foundry_sim::{MouldSim, UtScan, UtVerdict};
use crate::model::gen::VisualState;
use crate::model::view::FoundryView;
use crate::services::genai::CONNECTION_FAILURE_NOTICE;
use crate::services::{GenAiClient, GenReply, GenRunner, GenTask, SpeechService};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::{layout::Rect, Frame};
use std::sync::mpsc::{Receiver, TryRecvError};
use tracing::debug;

pub struct FoundryComponent {
    pub view: FoundryView,

    // ─────────────────────────────────────────────────────────────────────────
    // Widget state
    // ─────────────────────────────────────────────────────────────────────────
    pub selected_step: usize,
    pub selected_tool: usize,
    pub mould: MouldSim,
    pub scan: UtScan,
    pub verdict: Option<UtVerdict>,
    /// Decorative sand scatter for the physics lab pane
    pub sand: Vec<(f64, f64)>,

    // ─────────────────────────────────────────────────────────────────────────
    // Generated content
    // ─────────────────────────────────────────────────────────────────────────
    pub visual: VisualState,
    pub transcript: Vec<ChatMessage>,
    pub input: String,
    pub is_typing: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Voice
    // ─────────────────────────────────────────────────────────────────────────
    speech: SpeechService,
    pub speech_notice: Option<String>,
    notice_shown: bool,
    pub listening: bool,
    stt_rx: Option<Receiver<String>>,

    client: GenAiClient,
    image_runner: GenRunner,
    chat_runner: GenRunner,
    /// Bumped on every view change; replies spawned under an older value are
    /// stale and discarded on arrival
    generation: u64,
    pub tick: u64,
}

impl FoundryComponent {
    pub fn new(client: GenAiClient, speech: SpeechService) -> Self {
        let mut rng = rand::thread_rng();
        let sand = (0..40)
            .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
            .collect();

        let mut component = Self {
            view: FoundryView::ProcessMap,
            selected_step: 0,
            selected_tool: 0,
            mould: MouldSim::default(),
            scan: UtScan::default(),
            verdict: None,
            sand,
            visual: VisualState::Idle,
            transcript: Vec::new(),
            input: String::new(),
            is_typing: false,
            speech,
            speech_notice: None,
            notice_shown: false,
            listening: false,
            stt_rx: None,
            client,
            image_runner: GenRunner::new(),
            chat_runner: GenRunner::new(),
            generation: 0,
            tick: 0,
        };
        component.request_visual(FOUNDRY_HERO_PROMPT);
        component
    }

    /// Prompt for the visual shown by the current view, if it has one
    fn visual_prompt(&self) -> Option<&'static str> {
        match self.view {
            FoundryView::ProcessMap => Some(FOUNDRY_HERO_PROMPT),
            FoundryView::StepDetail => Some(PROCESS_STEPS[self.selected_step].visual_prompt),
            FoundryView::QcDetail => Some(QC_TOOLS[self.selected_tool].visual_prompt),
            _ => None,
        }
    }

    fn request_visual(&mut self, prompt: &str) {
        self.visual = VisualState::Loading;
        self.image_runner.spawn(
            self.client.clone(),
            GenTask::Image {
                prompt: prompt.to_string(),
            },
            self.generation,
        );
    }

    /// Switch views. Cancels in-flight generation for the old view, resets
    /// the state scoped to the target view, and kicks off the new view's
    /// visual, if it has one.
    fn goto(&mut self, view: FoundryView) {
        self.generation += 1;
        self.image_runner.cancel();
        self.chat_runner.cancel();
        self.is_typing = false;
        self.view = view;

        match view {
            FoundryView::PhysicsLab => self.mould = MouldSim::default(),
            FoundryView::UtSim => {
                self.scan = UtScan::default();
                self.verdict = None;
            }
            _ => {}
        }

        match self.visual_prompt() {
            Some(prompt) => self.request_visual(prompt),
            None => self.visual = VisualState::Idle,
        }
    }

    fn send_question(&mut self) {
        let question = self.input.trim().to_string();
        if question.is_empty() || self.is_typing {
            return;
        }
        self.transcript.push(ChatMessage::user(question.clone()));
        self.input.clear();
        self.is_typing = true;
        self.chat_runner.spawn(
            self.client.clone(),
            GenTask::Chat { prompt: question },
            self.generation,
        );
    }

    fn speak_last_reply(&mut self) {
        let Some(message) = self
            .transcript
            .iter()
            .rev()
            .find(|m| m.role == crate::model::chat::ChatRole::Assistant)
        else {
            return;
        };
        if let Err(err) = self.speech.speak(&message.text) {
            self.capability_notice(err.to_string());
        }
    }

    fn start_voice_input(&mut self) {
        match self.speech.start_recognition() {
            Ok(rx) => {
                self.stt_rx = Some(rx);
                self.listening = true;
            }
            Err(err) => self.capability_notice(err.to_string()),
        }
    }

    /// Unavailable capabilities are reported once; typed interaction is
    /// never blocked
    fn capability_notice(&mut self, notice: String) {
        if !self.notice_shown {
            self.speech_notice = Some(notice);
            self.notice_shown = true;
        }
    }

    fn apply_gen_replies(&mut self) {
        if let Some((generation, reply)) = self.image_runner.poll() {
            if generation == self.generation {
                self.visual = match reply {
                    GenReply::Image(image) => VisualState::Ready(image),
                    GenReply::Failed(message) => VisualState::Failed(message),
                    _ => VisualState::Failed("unexpected reply kind".to_string()),
                };
            } else {
                debug!(generation, "discarding stale visual reply");
            }
        }

        if let Some((generation, reply)) = self.chat_runner.poll() {
            if generation == self.generation {
                self.is_typing = false;
                let text = match reply {
                    GenReply::Chat(text) => text,
                    GenReply::Failed(_) => CONNECTION_FAILURE_NOTICE.to_string(),
                    _ => CONNECTION_FAILURE_NOTICE.to_string(),
                };
                self.transcript.push(ChatMessage::assistant(text));
            } else {
                debug!(generation, "discarding stale chat reply");
            }
        }

        if let Some(rx) = &self.stt_rx {
            match rx.try_recv() {
                Ok(transcript) => {
                    self.input = transcript;
                    self.listening = false;
                    self.stt_rx = None;
                }
                Err(TryRecvError::Disconnected) => {
                    // Recognizer produced nothing; stop listening quietly
                    self.listening = false;
                    self.stt_rx = None;
                }
                Err(TryRecvError::Empty) => {}
            }
        }
    }

    fn handle_assistant_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.speak_last_reply(),
                KeyCode::Char('r') => self.start_voice_input(),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => return self.back(),
            KeyCode::Enter => self.send_question(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        None
    }

    fn back(&mut self) -> Option<Action> {
        match self.view.parent() {
            Some(parent) => {
                self.goto(parent);
                None
            }
            None => Some(Action::OpenLauncher),
        }
    }
}

impl Component for FoundryComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // The assistant input captures plain characters
        if self.view == FoundryView::Assistant {
            return Ok(self.handle_assistant_key(key));
        }

        let action = match (self.view, key.code) {
            // Global within the trainer
            (_, KeyCode::Esc) => self.back(),
            (_, KeyCode::Char('?')) => Some(Action::OpenHelp),
            (FoundryView::ProcessMap, KeyCode::Char('q')) => Some(Action::OpenQuitDialog),

            // Process map
            (FoundryView::ProcessMap, KeyCode::Char('j') | KeyCode::Down) => {
                self.selected_step = (self.selected_step + 1) % PROCESS_STEPS.len();
                None
            }
            (FoundryView::ProcessMap, KeyCode::Char('k') | KeyCode::Up) => {
                self.selected_step =
                    (self.selected_step + PROCESS_STEPS.len() - 1) % PROCESS_STEPS.len();
                None
            }
            (FoundryView::ProcessMap, KeyCode::Enter) => {
                self.goto(FoundryView::StepDetail);
                None
            }
            (FoundryView::ProcessMap, KeyCode::Char('t')) => {
                self.goto(FoundryView::QcToolkit);
                None
            }
            (FoundryView::ProcessMap, KeyCode::Char('p')) => {
                self.goto(FoundryView::PhysicsLab);
                None
            }
            (FoundryView::ProcessMap, KeyCode::Char('a')) => {
                self.goto(FoundryView::Assistant);
                None
            }

            // Step detail
            (FoundryView::StepDetail, KeyCode::Char('l') | KeyCode::Right) => {
                self.selected_step = (self.selected_step + 1) % PROCESS_STEPS.len();
                self.goto(FoundryView::StepDetail);
                None
            }
            (FoundryView::StepDetail, KeyCode::Char('h') | KeyCode::Left) => {
                self.selected_step =
                    (self.selected_step + PROCESS_STEPS.len() - 1) % PROCESS_STEPS.len();
                self.goto(FoundryView::StepDetail);
                None
            }
            (FoundryView::StepDetail, KeyCode::Char('g')) => {
                let prompt = PROCESS_STEPS[self.selected_step].visual_prompt;
                self.request_visual(prompt);
                None
            }

            // QC toolkit
            (FoundryView::QcToolkit, KeyCode::Char('j') | KeyCode::Down) => {
                self.selected_tool = (self.selected_tool + 1) % QC_TOOLS.len();
                None
            }
            (FoundryView::QcToolkit, KeyCode::Char('k') | KeyCode::Up) => {
                self.selected_tool = (self.selected_tool + QC_TOOLS.len() - 1) % QC_TOOLS.len();
                None
            }
            (FoundryView::QcToolkit, KeyCode::Enter) => {
                self.goto(FoundryView::QcDetail);
                None
            }
            (FoundryView::QcToolkit, KeyCode::Char('s')) => {
                self.goto(FoundryView::UtSim);
                None
            }

            // UT simulator
            (FoundryView::UtSim, KeyCode::Left) => {
                self.scan.adjust_frequency(-0.25);
                self.verdict = None;
                None
            }
            (FoundryView::UtSim, KeyCode::Right) => {
                self.scan.adjust_frequency(0.25);
                self.verdict = None;
                None
            }
            (FoundryView::UtSim, KeyCode::Up) => {
                self.scan.adjust_gain(5);
                None
            }
            (FoundryView::UtSim, KeyCode::Down) => {
                self.scan.adjust_gain(-5);
                None
            }
            (FoundryView::UtSim, KeyCode::Char('a')) => {
                self.verdict = Some(self.scan.verdict(true));
                None
            }
            (FoundryView::UtSim, KeyCode::Char('r')) => {
                self.verdict = Some(self.scan.verdict(false));
                None
            }

            // Physics lab
            (FoundryView::PhysicsLab, KeyCode::Left) => {
                self.mould.adjust_pressure(-0.5);
                None
            }
            (FoundryView::PhysicsLab, KeyCode::Right) => {
                self.mould.adjust_pressure(0.5);
                None
            }
            (FoundryView::PhysicsLab, KeyCode::Up) => {
                self.mould.adjust_temperature(5);
                None
            }
            (FoundryView::PhysicsLab, KeyCode::Down) => {
                self.mould.adjust_temperature(-5);
                None
            }
            (FoundryView::PhysicsLab, KeyCode::Char('v')) => {
                self.mould.toggle_vibration();
                None
            }

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            self.tick = self.tick.wrapping_add(1);
            self.apply_gen_replies();
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.view {
            FoundryView::ProcessMap => process_map::draw(frame, area, self),
            FoundryView::StepDetail => step_detail::draw(frame, area, self),
            FoundryView::QcToolkit => qc_toolkit::draw(frame, area, self),
            FoundryView::QcDetail => qc_detail::draw(frame, area, self),
            FoundryView::UtSim => ut_sim::draw(frame, area, self),
            FoundryView::PhysicsLab => physics_lab::draw(frame, area, self),
            FoundryView::Assistant => assistant::draw(frame, area, self),
        }
        Ok(())
    }
}
