//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};

use super::common::is_previous_rank_of;

/// カードを場札に置けるかチェックする。
///
/// - 空の列には K だけ。
/// - カードがあるなら、一番上と色が逆で、ランクがちょうど 1 つ下。
///
/// ドラッグしてる束の 2 枚目以降は見ないよ (束の先頭だけで判定)。
pub fn can_move_to_tableau(card: &Card, tableau_top: Option<&Card>) -> bool {
    let result = match tableau_top {
        None => card.rank == Rank::King,
        Some(top) => card.is_opposite_color(top) && is_previous_rank_of(card, top),
    };
    trace!(
        "[Tableau Rule] {} onto {:?}: {}",
        card,
        tableau_top.map(Card::short_name),
        result
    );
    result
}
