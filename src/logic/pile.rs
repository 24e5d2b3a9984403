// src/logic/pile.rs
//! 山 (Pile) の操作だよ。
//!
//! `Pile` コンポーネントの並びと、カード側の `StackInfo` (逆参照) を
//! いつも一緒に更新するのがここの仕事。他のモジュールは並びを直接いじらないでね！

use log::{debug, warn};

use crate::components::card::Card;
use crate::components::pile::Pile;
use crate::components::stack::{StackInfo, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{EngineError, EngineResult};

/// 種類から山エンティティを探す。
pub fn find_pile(world: &World, stack_type: StackType) -> Option<Entity> {
    world.find_entity::<Pile, _>(|pile| pile.stack_type() == stack_type)
}

/// `find_pile` の、見つからなかったらエラー版。
pub fn require_pile(world: &World, stack_type: StackType) -> EngineResult<Entity> {
    find_pile(world, stack_type).ok_or(EngineError::PileNotFound { stack_type })
}

/// 全部の山を作成順 (エンティティ ID 順) で。
pub fn all_piles(world: &World) -> Vec<Entity> {
    world.get_all_entities_with_component::<Pile>()
}

/// 指定した種類に当てはまる山を列挙順で。
pub fn piles_matching<F>(world: &World, mut predicate: F) -> Vec<Entity>
where
    F: FnMut(StackType) -> bool,
{
    all_piles(world)
        .into_iter()
        .filter(|&pile| stack_type_of(world, pile).map_or(false, &mut predicate))
        .collect()
}

pub fn stack_type_of(world: &World, pile: Entity) -> Option<StackType> {
    world.get_component::<Pile>(pile).map(Pile::stack_type)
}

/// カードが今入ってる山 (逆参照を引くだけ)。
pub fn pile_of(world: &World, card: Entity) -> Option<Entity> {
    world.get_component::<StackInfo>(card).map(|info| info.pile)
}

fn pile_component(world: &World, pile: Entity) -> EngineResult<&Pile> {
    world
        .get_component::<Pile>(pile)
        .ok_or(EngineError::UnknownEntity { entity: pile })
}

/// カードを山の一番上に積む。O(1)。
///
/// カードの `StackInfo` もここで書き換えるよ。まだ別の山に入ってたら、先にそっちから外す。
pub fn add_card(world: &mut World, pile: Entity, card: Entity) -> EngineResult<()> {
    if world.get_component::<Card>(card).is_none() {
        return Err(EngineError::UnknownEntity { entity: card });
    }
    let stack_type = pile_component(world, pile)?.stack_type();

    if let Some(previous) = pile_of(world, card) {
        let still_there = world.get_component::<Pile>(previous).map_or(false, |p| p.contains(card));
        if still_there {
            debug!("Pile: detaching {:?} from {:?} before adding to {}", card, previous, stack_type);
            remove_card(world, previous, card)?;
        }
    }

    let position = {
        let pile_comp = world
            .get_component_mut::<Pile>(pile)
            .ok_or(EngineError::UnknownEntity { entity: pile })?;
        pile_comp.push(card);
        pile_comp.len() - 1
    };
    world.add_component(card, StackInfo::new(pile, stack_type, position as u8));
    Ok(())
}

/// カードを山から外す (どこにあっても OK)。
///
/// 外したカードの `StackInfo` は取り除かれて、上にあったカードの位置は詰められる。
/// 入ってないカードなら `EngineError::CardNotInPile`。
pub fn remove_card(world: &mut World, pile: Entity, card: Entity) -> EngineResult<()> {
    let (stack_type, removed_at, shifted) = {
        let pile_comp = world
            .get_component_mut::<Pile>(pile)
            .ok_or(EngineError::UnknownEntity { entity: pile })?;
        let stack_type = pile_comp.stack_type();
        let removed_at = pile_comp
            .remove(card)
            .ok_or(EngineError::CardNotInPile { card, stack_type })?;
        let shifted: Vec<Entity> = pile_comp.cards()[removed_at..].to_vec();
        (stack_type, removed_at, shifted)
    };

    world.remove_component::<StackInfo>(card);
    for (offset, above) in shifted.into_iter().enumerate() {
        match world.get_component_mut::<StackInfo>(above) {
            Some(info) => info.position_in_stack = (removed_at + offset) as u8,
            None => warn!("Pile: {:?} in {} has no StackInfo", above, stack_type),
        }
    }
    Ok(())
}

/// 一番上のカード。空の山なら `EngineError::EmptyPile`。
pub fn top_card(world: &World, pile: Entity) -> EngineResult<Entity> {
    let pile_comp = pile_component(world, pile)?;
    pile_comp
        .top()
        .ok_or(EngineError::EmptyPile { stack_type: pile_comp.stack_type() })
}

/// 一番上のカードの中身 (空なら None)。ルール判定用。
pub fn top_card_component(world: &World, pile: Entity) -> Option<&Card> {
    world
        .get_component::<Pile>(pile)
        .and_then(Pile::top)
        .and_then(|top| world.get_component::<Card>(top))
}

pub fn pile_size(world: &World, pile: Entity) -> usize {
    world.get_component::<Pile>(pile).map_or(0, Pile::len)
}

pub fn is_pile_empty(world: &World, pile: Entity) -> bool {
    pile_size(world, pile) == 0
}

/// 山のカードを下から順に (コピーして) 返す。
pub fn pile_cards(world: &World, pile: Entity) -> Vec<Entity> {
    world
        .get_component::<Pile>(pile)
        .map(|p| p.cards().to_vec())
        .unwrap_or_default()
}

/// 指定カードから一番上までのカード列。カードが入ってなければ None。
pub fn cards_from(world: &World, pile: Entity, card: Entity) -> Option<Vec<Entity>> {
    let pile_comp = world.get_component::<Pile>(pile)?;
    let index = pile_comp.index_of(card)?;
    Some(pile_comp.cards()[index..].to_vec())
}

/// カードの向きを指定した向きにする。
pub fn set_face_up(world: &mut World, card: Entity, face_up: bool) -> EngineResult<()> {
    let card_comp = world
        .get_component_mut::<Card>(card)
        .ok_or(EngineError::UnknownEntity { entity: card })?;
    card_comp.is_face_up = face_up;
    Ok(())
}
