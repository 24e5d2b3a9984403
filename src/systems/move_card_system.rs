// src/systems/move_card_system.rs

use log::{debug, info};

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{EngineError, EngineResult};
use crate::logic::pile::{add_card, remove_card, stack_type_of, top_card_component};

/// 検証済みのカード移動を World に反映するシステムだよ！🖱️💨
///
/// ルールチェックはしない (それは `logic::rules` のお仕事)。
/// ここでは「元の山から外して、同じ順番で移動先に積む」だけ。向きは変えない。
#[derive(Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// `cards` (下から上の順) を `source` から `dest` へ移す。
    ///
    /// 途中で失敗するのは山とカードの対応が壊れてるときだけ。
    pub fn commit(&self, world: &mut World, cards: &[Entity], source: Entity, dest: Entity) -> EngineResult<()> {
        let Some(&lead) = cards.first() else {
            return Ok(());
        };
        let dest_type = stack_type_of(world, dest).ok_or(EngineError::UnknownEntity { entity: dest })?;
        let message = placement_message(world, lead, dest, dest_type)?;

        for &card in cards {
            remove_card(world, source, card)?;
            add_card(world, dest, card)?;
        }

        info!("{}", message);
        debug!("MoveCardSystem: moved {} card(s) {:?} -> {:?}", cards.len(), source, dest);
        Ok(())
    }
}

/// 「どこに置いたか」のログメッセージ。移動先の一番上のカードは移動前に見る。
fn placement_message(world: &World, lead: Entity, dest: Entity, dest_type: StackType) -> EngineResult<String> {
    let card = world
        .get_component::<Card>(lead)
        .ok_or(EngineError::UnknownEntity { entity: lead })?;
    let message = match (top_card_component(world, dest), dest_type) {
        (Some(top), _) => format!("Placed {} to {}.", card, top),
        (None, StackType::Foundation(_)) => format!("Placed {} to the foundation.", card),
        (None, StackType::Tableau(_)) => format!("Placed {} to a new pile.", card),
        (None, other) => format!("Placed {} to {}.", card, other),
    };
    Ok(message)
}
