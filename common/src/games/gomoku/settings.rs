use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::bot_controller::{BotType, MoveSource};
use super::types::{GameMode, MIN_BOARD_SIZE, Player};

pub const BOARD_SIZE_PRESETS: [usize; 3] = [10, 15, 20];
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Immutable snapshot handed to a new game. Editing settings afterwards never
/// touches a game that is already running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_size: usize,
    pub mode: GameMode,
    pub human_side: Player,
    #[serde(default)]
    pub bot: BotType,
}

impl GameSettings {
    pub fn two_player(board_size: usize) -> Self {
        Self {
            board_size,
            mode: GameMode::TwoPlayer,
            human_side: Player::First,
            bot: BotType::default(),
        }
    }

    pub fn against_bot(board_size: usize, human_side: Player, bot: BotType) -> Self {
        Self {
            board_size,
            mode: GameMode::PlayerVsBot,
            human_side,
            bot,
        }
    }

    pub fn move_source(&self, player: Player) -> MoveSource {
        match self.mode {
            GameMode::TwoPlayer => MoveSource::Human,
            GameMode::PlayerVsBot if player == self.human_side => MoveSource::Human,
            GameMode::PlayerVsBot => MoveSource::Bot(self.bot),
        }
    }

    pub fn is_preset_size(&self) -> bool {
        BOARD_SIZE_PRESETS.contains(&self.board_size)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::two_player(DEFAULT_BOARD_SIZE)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(format!(
                "Board size must be at least {}, got {}",
                MIN_BOARD_SIZE, self.board_size
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_player_sources_are_human() {
        let settings = GameSettings::two_player(15);
        assert_eq!(settings.move_source(Player::First), MoveSource::Human);
        assert_eq!(settings.move_source(Player::Second), MoveSource::Human);
    }

    #[test]
    fn test_bot_controls_the_other_side() {
        let settings = GameSettings::against_bot(15, Player::Second, BotType::Blocker);
        assert_eq!(
            settings.move_source(Player::First),
            MoveSource::Bot(BotType::Blocker)
        );
        assert_eq!(settings.move_source(Player::Second), MoveSource::Human);
    }

    #[test]
    fn test_validate_board_size() {
        assert!(GameSettings::two_player(4).validate().is_err());
        assert!(GameSettings::two_player(5).validate().is_ok());
        assert!(GameSettings::two_player(100).validate().is_ok());
        assert!(GameSettings::default().validate().is_ok());
        assert!(GameSettings::default().is_preset_size());
        assert!(!GameSettings::two_player(7).is_preset_size());
    }
}
