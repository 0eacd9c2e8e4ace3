use common::config::Validate;
use common::games::gomoku::{
    BOARD_SIZE_PRESETS, BotType, DEFAULT_BOARD_SIZE, GameMode, GameSettings, Player,
};
use serde::{Deserialize, Serialize};

/// Settings the first game starts with. In-game edits are not written back.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board_size: usize,
    pub mode: GameMode,
    pub human_side: Player,
    pub bot: BotType,
    pub bot_delay_ms: u64,
}

impl GameConfig {
    pub fn to_settings(&self) -> GameSettings {
        GameSettings {
            board_size: self.board_size,
            mode: self.mode,
            human_side: self.human_side,
            bot: self.bot,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.to_settings().is_preset_size() {
            return Err(format!(
                "board_size must be one of {:?}, got {}",
                BOARD_SIZE_PRESETS, self.board_size
            ));
        }
        if self.bot_delay_ms > 10_000 {
            return Err("bot_delay_ms must not exceed 10000".to_string());
        }
        self.to_settings().validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            mode: GameMode::TwoPlayer,
            human_side: Player::First,
            bot: BotType::FirstEmpty,
            bot_delay_ms: 500,
        }
    }
}
