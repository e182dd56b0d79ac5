use eframe::egui;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{GameOutcome, Mark, Strategy, TicTacToeGameState};
use tictactoe_common::log;

use super::board::BoardUi;
use super::palette::{Palette, visuals};
use crate::bot_scheduler::BotScheduler;
use crate::config::Theme;

pub struct TicTacToeApp {
    state: TicTacToeGameState,
    rng: SessionRng,
    scheduler: BotScheduler,
    board_ui: BoardUi,
    theme: Theme,
    selected_strategy: Strategy,
}

impl TicTacToeApp {
    pub fn new(
        state: TicTacToeGameState,
        rng: SessionRng,
        scheduler: BotScheduler,
        theme: Theme,
    ) -> Self {
        let selected_strategy = state.strategy();
        Self {
            state,
            rng,
            scheduler,
            board_ui: BoardUi::new(),
            theme,
            selected_strategy,
        }
    }

    fn handle_cell_click(&mut self, ctx: &egui::Context, index: usize) {
        match self.state.place_human_mark(index) {
            Ok(outcome) => {
                log!("Round {}: X placed at {}", self.state.round(), index);
                self.after_move(ctx, outcome);
            }
            Err(e) => log!("Ignoring click: {}", e),
        }
    }

    fn after_move(&mut self, ctx: &egui::Context, outcome: GameOutcome) {
        if outcome.is_decided() {
            let scores = self.state.scores();
            log!(
                "Round {} finished: {} (X {} - O {})",
                self.state.round(),
                self.state.status_message(),
                scores.x_wins,
                scores.o_wins
            );
            return;
        }

        if self.state.is_bot_turn() {
            let ctx = ctx.clone();
            self.scheduler.schedule(move || ctx.request_repaint());
        }
    }

    fn drive_bot(&mut self, ctx: &egui::Context) {
        if !self.scheduler.poll_ready() {
            return;
        }

        match self.state.play_bot_move(&mut self.rng) {
            Ok(index) => {
                log!(
                    "Round {}: O ({}) placed at {}",
                    self.state.round(),
                    self.state.strategy(),
                    index
                );
                let outcome = self.state.outcome();
                self.after_move(ctx, outcome);
            }
            Err(e) => log!("Bot move failed: {}", e),
        }
    }

    fn restart(&mut self) {
        self.scheduler.cancel();
        self.state.set_strategy(self.selected_strategy);
        self.state.restart();
        log!("Round {} started with {} strategy", self.state.round(), self.state.strategy());
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let previous = self.selected_strategy;
            egui::ComboBox::from_label("AI level")
                .selected_text(self.selected_strategy.label())
                .show_ui(ui, |ui| {
                    for strategy in Strategy::ALL {
                        ui.selectable_value(&mut self.selected_strategy, strategy, strategy.label());
                    }
                });
            if self.selected_strategy != previous {
                self.state.set_strategy(self.selected_strategy);
                log!("AI level changed to {}", self.selected_strategy);
            }

            if ui.button("Restart").clicked() {
                self.restart();
            }

            if ui.button(self.theme.toggle_label()).clicked() {
                self.theme = self.theme.toggled();
            }
        });
    }

    fn render_scoreboard(&self, ui: &mut egui::Ui, palette: &Palette) {
        let scores = self.state.scores();
        ui.horizontal(|ui| {
            ui.colored_label(palette.x_mark, format!("Player X: {}", scores.wins(Mark::X)));
            ui.separator();
            ui.colored_label(palette.o_mark, format!("AI O: {}", scores.wins(Mark::O)));
        });
    }

    fn render_status(&self, ui: &mut egui::Ui, palette: &Palette) {
        let message = self.state.status_message();
        if self.state.is_active() {
            ui.heading(message);
        } else {
            ui.heading(egui::RichText::new(message).color(palette.status_done));
        }
    }
}

/// Clicks count only on the human's turn, and never while a computer turn is
/// still waiting on its delay.
fn accepts_human_move(state: &TicTacToeGameState, bot_pending: bool) -> bool {
    state.is_active() && !state.is_bot_turn() && !bot_pending
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(visuals(self.theme));
        let palette = Palette::for_theme(self.theme);

        self.drive_bot(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Tic-Tac-Toe");
                ui.add_space(5.0);
                self.render_controls(ui);
                ui.separator();
                self.render_scoreboard(ui, &palette);
                self.render_status(ui, &palette);
                ui.add_space(10.0);

                let interactive = accepts_human_move(&self.state, self.scheduler.is_pending());
                let winning_cells = self.state.winning_cells();
                let clicked = self.board_ui.render(
                    ui,
                    self.state.board(),
                    &winning_cells,
                    interactive,
                    &palette,
                );

                if let Some(index) = clicked {
                    self.handle_cell_click(ctx, index);
                }
            });
        });
    }
}
