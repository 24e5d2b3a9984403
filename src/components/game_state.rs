// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// ゲーム全体の状態だよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中
    Playing,
    /// 52 枚全部が組札に乗った！
    Won,
}

/// ゲーム状態を保持するコンポーネント。
///
/// World の中に 1 個だけ、専用のエンティティに付けておく (シングルトン的な使い方)。
/// `WinConditionSystem` が `Won` に書き換えるよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
}

impl Component for GameState {}

impl Default for GameState {
    fn default() -> Self {
        Self { status: GameStatus::Playing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_game_state_component() {
        let state = GameState::default();
        assert_eq!(state.status, GameStatus::Playing);

        let won = GameState { status: GameStatus::Won };
        assert_ne!(state, won);

        fn needs_component<T: Component>(_: T) {}
        needs_component(won);
        println!("GameState コンポーネント作成テスト、成功！🎉");
    }
}
