//! ML Strategies trainer
//!
//! Algorithm catalog plus five interactive widgets. Widget state is scoped
//! to its view: entering a widget resets it, and returning to the overview
//! resets the advisor panel.

pub mod basket;
pub mod classifier;
pub mod clusters;
pub mod decision_tree;
pub mod overview;
pub mod regression;

use crate::action::Action;
use crate::component::Component;
use crate::model::catalog::ALGORITHM_CARDS;
use crate::model::gen::AdvisorReply;
use crate::model::ml_sim::{BasketSim, ClassifierSim, ClusterSim, RegressionSim};
use crate::model::tree::TreeSim;
use crate::model::view::MlView;
use crate::services::{GenAiClient, GenReply, GenRunner, GenTask};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use tracing::debug;

pub struct MlComponent {
    pub view: MlView,
    pub selected_card: usize,

    // ─────────────────────────────────────────────────────────────────────────
    // Widget state, reset on entry
    // ─────────────────────────────────────────────────────────────────────────
    pub regression: RegressionSim,
    pub classifier: ClassifierSim,
    pub tree: TreeSim,
    pub basket: BasketSim,
    pub clusters: ClusterSim,

    // ─────────────────────────────────────────────────────────────────────────
    // Advisor panel
    // ─────────────────────────────────────────────────────────────────────────
    pub advisor_input: String,
    pub advisor_active: bool,
    pub advisor_loading: bool,
    pub advisor_reply: Option<AdvisorReply>,
    pub advisor_error: Option<String>,

    client: GenAiClient,
    advice_runner: GenRunner,
    /// Bumped on every view change to fence off stale advisor replies
    generation: u64,
    pub tick: u64,
}

impl MlComponent {
    pub fn new(client: GenAiClient) -> Self {
        Self {
            view: MlView::Overview,
            selected_card: 0,
            regression: RegressionSim::default(),
            classifier: ClassifierSim::default(),
            tree: TreeSim::default(),
            basket: BasketSim::default(),
            clusters: ClusterSim::default(),
            advisor_input: String::new(),
            advisor_active: false,
            advisor_loading: false,
            advisor_reply: None,
            advisor_error: None,
            client,
            advice_runner: GenRunner::new(),
            generation: 0,
            tick: 0,
        }
    }

    /// Switch views, resetting the state scoped to the target view
    fn goto(&mut self, view: MlView) {
        self.generation += 1;
        self.advice_runner.cancel();
        self.advisor_loading = false;
        self.view = view;

        match view {
            MlView::Overview => {
                self.advisor_input.clear();
                self.advisor_active = false;
                self.advisor_reply = None;
                self.advisor_error = None;
            }
            MlView::Regression => self.regression = RegressionSim::default(),
            MlView::Classifier => self.classifier = ClassifierSim::default(),
            MlView::DecisionTree => self.tree.reset(),
            MlView::Basket => self.basket = BasketSim::default(),
            MlView::Clusters => self.clusters = ClusterSim::default(),
        }
    }

    fn ask_advisor(&mut self) {
        let question = self.advisor_input.trim().to_string();
        if question.is_empty() || self.advisor_loading {
            return;
        }
        self.advisor_input.clear();
        self.advisor_active = false;
        self.advisor_loading = true;
        self.advisor_reply = None;
        self.advisor_error = None;
        self.advice_runner.spawn(
            self.client.clone(),
            GenTask::Advice { question },
            self.generation,
        );
    }

    fn handle_overview_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.advisor_active {
            match key.code {
                KeyCode::Esc => self.advisor_active = false,
                KeyCode::Enter => self.ask_advisor(),
                KeyCode::Backspace => {
                    self.advisor_input.pop();
                }
                KeyCode::Char(c) => self.advisor_input.push(c),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected_card = (self.selected_card + 1) % ALGORITHM_CARDS.len();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_card =
                    (self.selected_card + ALGORITHM_CARDS.len() - 1) % ALGORITHM_CARDS.len();
            }
            KeyCode::Enter => {
                let view = ALGORITHM_CARDS[self.selected_card].view;
                self.goto(view);
            }
            KeyCode::Char('/') => self.advisor_active = true,
            KeyCode::Char('?') => return Some(Action::OpenHelp),
            KeyCode::Char('q') => return Some(Action::OpenQuitDialog),
            KeyCode::Esc => return Some(Action::OpenLauncher),
            _ => {}
        }
        None
    }

    fn handle_widget_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.goto(MlView::Overview);
                return None;
            }
            KeyCode::Char('?') => return Some(Action::OpenHelp),
            _ => {}
        }

        match self.view {
            MlView::Regression => match key.code {
                KeyCode::Left => self.regression.adjust_slope(-0.1),
                KeyCode::Right => self.regression.adjust_slope(0.1),
                KeyCode::Up => self.regression.adjust_intercept(5.0),
                KeyCode::Down => self.regression.adjust_intercept(-5.0),
                KeyCode::Char('r') => self.regression = RegressionSim::default(),
                _ => {}
            },
            MlView::Classifier => match key.code {
                KeyCode::Left => self.classifier.adjust_score(-10.0),
                KeyCode::Right => self.classifier.adjust_score(10.0),
                KeyCode::Char('r') => self.classifier = ClassifierSim::default(),
                _ => {}
            },
            MlView::DecisionTree => match key.code {
                KeyCode::Char('y') => self.tree.answer(true),
                KeyCode::Char('n') => self.tree.answer(false),
                KeyCode::Char('r') => self.tree.reset(),
                _ => {}
            },
            MlView::Basket => match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.basket.move_cursor(1),
                KeyCode::Char('k') | KeyCode::Up => self.basket.move_cursor(-1),
                KeyCode::Char(' ') | KeyCode::Enter => self.basket.toggle_current(),
                _ => {}
            },
            MlView::Clusters => match key.code {
                KeyCode::Left => self.clusters.move_cursor(-2.5, 0.0),
                KeyCode::Right => self.clusters.move_cursor(2.5, 0.0),
                KeyCode::Up => self.clusters.move_cursor(0.0, 2.5),
                KeyCode::Down => self.clusters.move_cursor(0.0, -2.5),
                KeyCode::Char(' ') | KeyCode::Enter => self.clusters.place_point(),
                KeyCode::Char('c') => self.clusters.clear(),
                _ => {}
            },
            MlView::Overview => {}
        }
        None
    }

    fn apply_advice_replies(&mut self) {
        if let Some((generation, reply)) = self.advice_runner.poll() {
            if generation != self.generation {
                debug!(generation, "discarding stale advisor reply");
                return;
            }
            self.advisor_loading = false;
            match reply {
                GenReply::Advice(advice) => self.advisor_reply = Some(advice),
                GenReply::Failed(message) => self.advisor_error = Some(message),
                _ => self.advisor_error = Some("unexpected reply kind".to_string()),
            }
        }
    }
}

impl Component for MlComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match self.view {
            MlView::Overview => self.handle_overview_key(key),
            _ => self.handle_widget_key(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            self.tick = self.tick.wrapping_add(1);
            self.apply_advice_replies();
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.view {
            MlView::Overview => overview::draw(frame, area, self),
            MlView::Regression => regression::draw(frame, area, self),
            MlView::Classifier => classifier::draw(frame, area, self),
            MlView::DecisionTree => decision_tree::draw(frame, area, self),
            MlView::Basket => basket::draw(frame, area, self),
            MlView::Clusters => clusters::draw(frame, area, self),
        }
        Ok(())
    }
}
