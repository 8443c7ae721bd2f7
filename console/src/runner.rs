use std::time::Duration;
use tokio::sync::mpsc;
use tictactoe_common::SessionRng;
use tictactoe_common::log;

use crate::commands::Command;
use crate::config::{Config, SettingsManager};
use crate::game_session::GameSession;
use crate::saved_session::SessionStore;
use crate::ui;

pub struct ConsoleContext {
    pub settings: SettingsManager,
    pub session_store: SessionStore,
    pub rng: SessionRng,
    pub opponent_delay: Duration,
}

impl ConsoleContext {
    fn persist_settings(&self, session: &GameSession) {
        let config = Config {
            difficulty: session.difficulty(),
            scores: session.scores(),
            human_starts_next: session.human_starts_next(),
            opponent_delay_ms: self.opponent_delay.as_millis() as u64,
        };
        if let Err(e) = self.settings.store(&config) {
            log!("Failed to save settings: {}", e);
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn persist_session(&self, session: &GameSession) {
        let result = if session.is_game_over() {
            self.session_store.clear()
        } else {
            self.session_store.store(&session.to_saved())
        };
        match result {
            Ok(()) => log!("Session saved (game over: {})", session.is_game_over()),
            Err(e) => {
                log!("Failed to save session: {}", e);
                eprintln!("Failed to save session: {}", e);
            }
        }
    }
}

/// Reads commands until `Quit` or the input closes, then saves everything.
pub async fn run_console(
    mut session: GameSession,
    mut context: ConsoleContext,
    mut command_rx: mpsc::UnboundedReceiver<Command>,
) {
    println!("{}", ui::render_board(&session));
    println!("{}", ui::render_status(&session));
    play_opponent_turn(&mut session, &mut context).await;

    loop {
        let Some(command) = command_rx.recv().await else {
            break;
        };

        match command {
            Command::Play(index) => match session.play_human(index) {
                Ok(outcome) => {
                    log!("Human played cell {}", index);
                    println!("{}", ui::render_board(&session));
                    if outcome.is_terminal() {
                        finish_game(&session, &context);
                    } else {
                        println!("{}", ui::render_status(&session));
                        play_opponent_turn(&mut session, &mut context).await;
                    }
                }
                Err(e) => println!("{}", e),
            },

            Command::NewGame => {
                session.start_new_game();
                log!("New game, human starts: {}", session.is_human_turn());
                println!("{}", ui::render_board(&session));
                println!("{}", ui::render_status(&session));
                play_opponent_turn(&mut session, &mut context).await;
            }

            Command::SetDifficulty(difficulty) => {
                session.set_difficulty(difficulty);
                log!("Difficulty set to {}", difficulty);
                println!("Difficulty: {}", difficulty);
                context.persist_settings(&session);
            }

            Command::ResetScores => {
                session.reset_scores();
                log!("Scores reset");
                println!("{}", ui::render_scores(&session.scores()));
                context.persist_settings(&session);
            }

            Command::ShowScores => println!("{}", ui::render_scores(&session.scores())),

            Command::Help => println!("{}", ui::help_text()),

            Command::Quit => break,

            Command::Invalid(message) => println!("{}", message),
        }
    }

    context.persist_settings(&session);
    context.persist_session(&session);
    log!("Console closed");
}

async fn play_opponent_turn(session: &mut GameSession, context: &mut ConsoleContext) {
    if !session.awaiting_opponent() {
        return;
    }

    tokio::time::sleep(context.opponent_delay).await;

    match session.play_opponent(&mut context.rng) {
        Ok((index, outcome)) => {
            println!("Computer is moving to {}", index + 1);
            println!("{}", ui::render_board(session));
            if outcome.is_terminal() {
                finish_game(session, context);
            } else {
                println!("{}", ui::render_status(session));
            }
        }
        Err(e) => {
            log!("Opponent could not move: {}", e);
            eprintln!("Opponent could not move: {}", e);
        }
    }
}

fn finish_game(session: &GameSession, context: &ConsoleContext) {
    log!("Game over: {:?}", session.outcome());
    println!("{}", ui::outcome_message(session.outcome()));
    println!("{}", ui::render_scores(&session.scores()));
    context.persist_settings(session);
}
