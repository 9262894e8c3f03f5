use std::time::{Duration, Instant};

use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::SessionRng;
use common::games::tictactoe::{
    GameMode, Position, SearchAlgorithm, TicTacToeGameState, TicTacToeSessionSettings,
};
use common::{log, log_warn};
use eframe::egui;

use super::board_view::render_board;
use crate::config::Config;

type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub struct TicTacToeApp {
    state: TicTacToeGameState,
    rng: SessionRng,
    selected: TicTacToeSessionSettings,
    computer_move_delay: Duration,
    computer_turn_due: Option<Instant>,
    config: Config,
    config_manager: ClientConfigManager,
}

impl TicTacToeApp {
    pub fn new(config: Config, config_manager: ClientConfigManager, rng: SessionRng) -> Self {
        let settings = config.game.session_settings();
        log!("Session seed {}", rng.seed());

        Self {
            state: TicTacToeGameState::new(settings),
            rng,
            selected: settings,
            computer_move_delay: Duration::from_millis(config.game.computer_move_delay_ms),
            computer_turn_due: None,
            config,
            config_manager,
        }
    }

    fn handle_click(&mut self, position: Position) {
        if let Err(e) = self.state.place_mark(position) {
            log_warn!("Rejected click at {}: {}", position, e);
        }
    }

    fn handle_selection_changed(&mut self) {
        self.state.set_settings(self.selected);
        self.config.game.mode = self.selected.mode;
        self.config.game.algorithm = self.selected.algorithm;
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log_warn!("Failed to save config: {}", e);
        }
    }

    fn handle_reset(&mut self) {
        self.state.reset();
        self.computer_turn_due = None;
    }

    /// Plays the computer's move once the pacing delay has elapsed. Returns
    /// how long to wait before the next check while a move is pending.
    fn tick(&mut self, now: Instant) -> Option<Duration> {
        if !self.state.is_computer_turn() {
            self.computer_turn_due = None;
            return None;
        }

        let due = *self
            .computer_turn_due
            .get_or_insert(now + self.computer_move_delay);
        if now < due {
            return Some(due - now);
        }

        self.computer_turn_due = None;
        if let Err(e) = self.state.play_computer_turn(&mut self.rng) {
            log_warn!("Computer move failed: {}", e);
        }
        None
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let text = match self.state.result_message() {
            Some(message) => egui::RichText::new(message).size(22.0).strong(),
            None if self.state.is_computer_turn() => {
                egui::RichText::new("Computer is thinking...").size(18.0)
            }
            None => egui::RichText::new(format!("Player {} to move", self.state.current_player())).size(18.0),
        };
        ui.label(text);
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Choose Mode:");
            for mode in [GameMode::OnePlayer, GameMode::TwoPlayer] {
                if ui.radio_value(&mut self.selected.mode, mode, mode.label()).clicked() {
                    changed = true;
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Choose Algorithm:");
            for algorithm in SearchAlgorithm::ALL {
                if ui
                    .radio_value(&mut self.selected.algorithm, algorithm, algorithm.short_name())
                    .clicked()
                {
                    changed = true;
                }
            }
        });

        if self.state.pending_settings().is_some() {
            ui.label(egui::RichText::new("New settings apply after Reset").italics().color(egui::Color32::GRAY));
        }

        changed
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(wait) = self.tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Tic-Tac-Toe");
                ui.add_space(10.0);

                let accepts_input = !self.state.is_computer_turn();
                if let Some(position) = render_board(ui, &self.state, accepts_input) {
                    self.handle_click(position);
                }

                ui.add_space(10.0);
                self.render_status(ui);
                ui.add_space(10.0);

                if self.render_controls(ui) {
                    self.handle_selection_changed();
                }

                ui.add_space(10.0);
                if ui.button("Reset").clicked() {
                    self.handle_reset();
                }
            });
        });

        if self.state.is_computer_turn() && self.computer_turn_due.is_none() {
            ctx.request_repaint();
        }
    }
}
