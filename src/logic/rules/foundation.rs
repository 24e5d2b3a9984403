//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};

use super::common::is_next_rank_of;

/// カードを組札に置けるかチェックする。
///
/// - 一度に動かせるのは 1 枚だけ (`dragged_count == 1`)。
/// - 空の組札には A だけ。
/// - カードがあるなら、一番上と同じスートで、ランクがちょうど 1 つ上。
pub fn can_move_to_foundation(card: &Card, foundation_top: Option<&Card>, dragged_count: usize) -> bool {
    if dragged_count != 1 {
        trace!("[Foundation Rule] {} cards dragged, only single cards may go up", dragged_count);
        return false;
    }

    let result = match foundation_top {
        None => card.rank == Rank::Ace,
        Some(top) => card.is_same_suit(top) && is_next_rank_of(card, top),
    };
    trace!(
        "[Foundation Rule] {} onto {:?}: {}",
        card,
        foundation_top.map(Card::short_name),
        result
    );
    result
}
