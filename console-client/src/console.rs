use std::time::Duration;

use common::games::GameBroadcaster;
use common::games::gomoku::{
    BOARD_SIZE_PRESETS, BoardLayout, GameHost, GameMode, GameSettings, MoveError,
};
use common::log;

use crate::input::{HELP_TEXT, InputCommand, parse_command};
use crate::renderer::{render_game_over, render_update};
use crate::state::SharedState;

pub enum Reply {
    Message(String),
    Silent,
    Quit,
}

/// Input side of the game boundary. Holds the pending settings that the next
/// `new` command snapshots into a game.
pub struct Console<B: GameBroadcaster> {
    host: GameHost<B>,
    shared_state: SharedState,
    pending_settings: GameSettings,
    layout: BoardLayout,
}

impl<B: GameBroadcaster> Console<B> {
    pub fn new(
        broadcaster: B,
        shared_state: SharedState,
        settings: GameSettings,
        bot_delay: Duration,
    ) -> Self {
        Self {
            host: GameHost::new(broadcaster, bot_delay),
            shared_state,
            pending_settings: settings,
            layout: BoardLayout::default(),
        }
    }

    #[cfg(test)]
    pub fn pending_settings(&self) -> &GameSettings {
        &self.pending_settings
    }

    #[cfg(test)]
    pub fn host(&self) -> &GameHost<B> {
        &self.host
    }

    pub fn start_game(&mut self) -> Reply {
        match self.host.start(self.pending_settings) {
            Ok(session_id) => {
                self.shared_state.begin_session(session_id.clone());
                self.shared_state
                    .add_event(format!("New game: {}", describe_settings(&self.pending_settings)));
                log!("[session:{}] Started from console", session_id);
                Reply::Silent
            }
            Err(e) => Reply::Message(format!("Cannot start game: {}", e)),
        }
    }

    pub async fn handle_line(&mut self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::Silent;
        }
        match parse_command(line) {
            Ok(command) => self.handle_command(command).await,
            Err(e) => Reply::Message(format!("{} (type 'help' for commands)", e)),
        }
    }

    pub async fn handle_command(&mut self, command: InputCommand) -> Reply {
        match command {
            InputCommand::Place { row, col } => self.place(row, col).await,
            InputCommand::Click { x, y } => {
                let Some(snapshot) = self.host.snapshot().await else {
                    return Reply::Message(MoveError::NoActiveGame.to_string());
                };
                match self.layout.cell_at(x, y, snapshot.board().size()) {
                    Some(pos) => self.place(pos.row as i64, pos.col as i64).await,
                    None => Reply::Message(format!("({}, {}) is not on the board", x, y)),
                }
            }
            InputCommand::NewGame => self.start_game(),
            InputCommand::SetBoardSize(size) => {
                let candidate = GameSettings {
                    board_size: size,
                    ..self.pending_settings
                };
                if !candidate.is_preset_size() {
                    return Reply::Message(format!(
                        "Board size must be one of {:?}",
                        BOARD_SIZE_PRESETS
                    ));
                }
                self.pending_settings = candidate;
                self.settings_changed()
            }
            InputCommand::SetMode(mode) => {
                self.pending_settings.mode = mode;
                self.settings_changed()
            }
            InputCommand::SetHumanSide(side) => {
                self.pending_settings.human_side = side;
                self.settings_changed()
            }
            InputCommand::ShowSettings => Reply::Message(format!(
                "Next game: {}",
                describe_settings(&self.pending_settings)
            )),
            InputCommand::ShowBoard => {
                let view = self.shared_state.get_state();
                match (view.game_over, view.last_update) {
                    (Some(notification), _) => Reply::Message(render_game_over(&notification)),
                    (None, Some(update)) => Reply::Message(render_update(&update)),
                    (None, None) => Reply::Message(MoveError::NoActiveGame.to_string()),
                }
            }
            InputCommand::History => {
                let events = self.shared_state.events();
                if events.is_empty() {
                    Reply::Message("No events yet".to_string())
                } else {
                    Reply::Message(events.join("\n"))
                }
            }
            InputCommand::Help => Reply::Message(HELP_TEXT.to_string()),
            InputCommand::Quit => {
                self.host.stop();
                Reply::Quit
            }
        }
    }

    async fn place(&mut self, row: i64, col: i64) -> Reply {
        if self.shared_state.is_game_over() {
            return Reply::Message("The game is over. Type 'new' to play again.".to_string());
        }
        match self.host.submit_move(row, col).await {
            Ok(_) => Reply::Silent,
            Err(MoveError::OutOfTurn { expected, .. }) => {
                Reply::Message(format!("Wait for {} to move", expected))
            }
            Err(e) => Reply::Message(e.to_string()),
        }
    }

    fn settings_changed(&self) -> Reply {
        let mut message = format!(
            "Next game: {}",
            describe_settings(&self.pending_settings)
        );
        if self.host.is_running() {
            message.push_str(". Type 'new' to apply.");
        }
        Reply::Message(message)
    }
}

pub fn describe_settings(settings: &GameSettings) -> String {
    let size = format!("{}x{}", settings.board_size, settings.board_size);
    match settings.mode {
        GameMode::TwoPlayer => format!("{}, two players", size),
        GameMode::PlayerVsBot => format!(
            "{}, you play {} against the {:?} bot",
            size, settings.human_side, settings.bot
        ),
    }
}
