use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Local;
use common::SessionId;
use common::games::gomoku::{GameOverNotification, GameStateUpdate};
use ringbuffer::{AllocRingBuffer, RingBuffer};

use crate::constants::EVENT_LOG_SIZE;

#[derive(Debug, Clone)]
pub struct ViewState {
    pub active_session: Option<SessionId>,
    pub last_update: Option<GameStateUpdate>,
    pub game_over: Option<GameOverNotification>,
    pub event_log: AllocRingBuffer<String>,
}

/// What the renderer last saw. Only updates from the active session are kept.
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<ViewState>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ViewState {
                active_session: None,
                last_update: None,
                game_over: None,
                event_log: AllocRingBuffer::new(EVENT_LOG_SIZE),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_state(&self) -> ViewState {
        self.lock().clone()
    }

    pub fn begin_session(&self, session_id: SessionId) {
        let mut state = self.lock();
        state.active_session = Some(session_id);
        state.last_update = None;
        state.game_over = None;
    }

    pub fn is_active(&self, session_id: &SessionId) -> bool {
        self.lock().active_session.as_ref() == Some(session_id)
    }

    /// Returns `false` when the update belongs to a session that was replaced.
    pub fn update_game_state(&self, update: GameStateUpdate) -> bool {
        let mut state = self.lock();
        if state.active_session.as_ref() != Some(&update.session_id) {
            return false;
        }
        state.last_update = Some(update);
        true
    }

    pub fn set_game_over(&self, notification: GameOverNotification) -> bool {
        let mut state = self.lock();
        if state.active_session.as_ref() != Some(&notification.session_id) {
            return false;
        }
        state.game_over = Some(notification);
        true
    }

    pub fn is_game_over(&self) -> bool {
        self.lock().game_over.is_some()
    }

    pub fn add_event(&self, event: String) {
        let timestamp = Local::now().format("%H:%M:%S");
        self.lock()
            .event_log
            .enqueue(format!("[{}] {}", timestamp, event));
    }

    pub fn events(&self) -> Vec<String> {
        self.lock().event_log.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::gomoku::{GameSettings, GomokuGameState};

    fn update_for(session: &str) -> GameStateUpdate {
        let state = GomokuGameState::new(GameSettings::default()).unwrap();
        GameStateUpdate::from_game_state(&SessionId::new(session.to_string()), &state)
    }

    #[test]
    fn test_updates_from_replaced_session_are_ignored() {
        let shared = SharedState::new();
        shared.begin_session(SessionId::new("game-2".to_string()));

        assert!(!shared.update_game_state(update_for("game-1")));
        assert!(shared.get_state().last_update.is_none());

        assert!(shared.update_game_state(update_for("game-2")));
        assert!(shared.get_state().last_update.is_some());
        assert!(shared.is_active(&SessionId::new("game-2".to_string())));
        assert!(!shared.is_active(&SessionId::new("game-1".to_string())));
    }

    #[test]
    fn test_event_log_keeps_latest_entries() {
        let shared = SharedState::new();
        for i in 0..EVENT_LOG_SIZE + 3 {
            shared.add_event(format!("event {}", i));
        }
        let events = shared.events();
        assert_eq!(events.len(), EVENT_LOG_SIZE);
        assert!(events[0].ends_with("event 3"));
        assert!(events[EVENT_LOG_SIZE - 1].ends_with(&format!("event {}", EVENT_LOG_SIZE + 2)));
    }
}
