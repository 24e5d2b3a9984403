// src/systems/win_condition_system.rs
use log::{debug, info, warn};

use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::ecs::{entity::Entity, system::System, world::World};
use crate::logic::pile::{pile_size, piles_matching};
use crate::logic::rules::check_win_condition;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 4 つの組札の合計枚数を数えて、52 枚なら GameState を `Won` にする。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }
}

/// 組札に乗ってるカードの合計枚数。
pub fn foundation_card_count(world: &World) -> usize {
    piles_matching(world, StackType::is_foundation)
        .into_iter()
        .map(|pile| pile_size(world, pile))
        .sum()
}

/// 今の盤面がクリア状態か (いつ呼んでも OK、副作用なし)。
pub fn is_game_won(world: &World) -> bool {
    let count = foundation_card_count(world);
    debug!("CardsOn-F-Pile = {}", count);
    check_win_condition(count)
}

/// GameState を持ってるエンティティ。
pub fn game_state_entity(world: &World) -> Option<Entity> {
    world.find_entity::<GameState, _>(|_| true)
}

impl System for WinConditionSystem {
    /// 勝利条件をチェックして、必要ならゲーム状態を更新するよ！
    fn run(&mut self, world: &mut World) {
        let Some(state_entity) = game_state_entity(world) else {
            warn!("WinConditionSystem: GameState が見つかりません！");
            return;
        };
        let status = world.get_component::<GameState>(state_entity).map(|gs| gs.status);
        if status != Some(GameStatus::Playing) {
            return;
        }

        if is_game_won(world) {
            info!("WinConditionSystem: 勝利条件達成！🏆 Congratulations, you won!");
            if let Some(game_state) = world.get_component_mut::<GameState>(state_entity) {
                game_state.status = GameStatus::Won;
            }
        }
    }
}
