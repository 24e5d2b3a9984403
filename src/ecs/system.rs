// src/ecs/system.rs

use crate::ecs::world::World;

/// System（システム）トレイトだよ！
///
/// システムは World のデータを読んだり書いたりしてゲームのロジックを進める役。
/// 今のところ勝利判定 (`WinConditionSystem`) がこれを実装してて、
/// ドラッグが終わるたびに `GameApp` から呼ばれるよ。
pub trait System {
    /// このシステムを実行するよ！
    fn run(&mut self, world: &mut World);
}
