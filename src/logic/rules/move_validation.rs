//! カード移動の全体的な妥当性チェックと、ドロップ先の選び方。

use log::{debug, trace};

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::pile::{stack_type_of, top_card_component};

use super::{foundation, tableau};

/// `card` (とその上に乗ってる `dragged_count - 1` 枚) を `dest_pile` に置けるか。
///
/// 副作用なし。組札と場札以外への移動は常に不可。
pub fn is_move_valid(world: &World, card: Entity, dest_pile: Entity, dragged_count: usize) -> bool {
    let Some(card_comp) = world.get_component::<Card>(card) else {
        debug!("[Rules Validation] {:?} is not a card", card);
        return false;
    };
    let Some(dest_type) = stack_type_of(world, dest_pile) else {
        debug!("[Rules Validation] {:?} is not a pile", dest_pile);
        return false;
    };
    let dest_top = top_card_component(world, dest_pile);

    match dest_type {
        StackType::Foundation(_) => foundation::can_move_to_foundation(card_comp, dest_top, dragged_count),
        StackType::Tableau(_) => tableau::can_move_to_tableau(card_comp, dest_top),
        StackType::Stock | StackType::Waste => {
            trace!("[Rules Validation] moving onto {} is not allowed", dest_type);
            false
        }
    }
}

/// ドロップ候補の中から、実際に置く山を 1 つ選ぶよ。
///
/// - 元の山は候補から外す。
/// - 場札の候補を先に見て、有効なもののうち **最後** のものを採用。
/// - 場札が一つも有効でなければ、組札の候補で同じく最後の有効なもの。
/// - どれもダメなら None (移動は却下)。
pub fn select_destination(
    world: &World,
    lead_card: Entity,
    source_pile: Entity,
    candidates: &[Entity],
    dragged_count: usize,
) -> Option<Entity> {
    let last_valid = |wanted: fn(StackType) -> bool| {
        candidates
            .iter()
            .copied()
            .filter(|&pile| pile != source_pile)
            .filter(|&pile| stack_type_of(world, pile).map_or(false, wanted))
            .filter(|&pile| is_move_valid(world, lead_card, pile, dragged_count))
            .last()
    };

    let chosen = last_valid(StackType::is_tableau).or_else(|| last_valid(StackType::is_foundation));
    debug!(
        "[Rules Validation] {} candidate(s) for {:?}, chose {:?}",
        candidates.len(),
        lead_card,
        chosen
    );
    chosen
}
