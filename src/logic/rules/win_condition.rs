//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::logic::deck::DECK_SIZE;

/// 4 つの組札の合計枚数が 52 ならクリア。
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == DECK_SIZE
}
