//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::Card;

/// `card` のランクが `below` のちょうど 1 つ上か (組札に積むときの条件)。
pub fn is_next_rank_of(card: &Card, below: &Card) -> bool {
    below.rank.next() == Some(card.rank)
}

/// `card` のランクが `below` のちょうど 1 つ下か (場札に積むときの条件)。
pub fn is_previous_rank_of(card: &Card, below: &Card) -> bool {
    below.rank.previous() == Some(card.rank)
}
