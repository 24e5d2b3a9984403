// src/app/state_getter.rs
//! Builds the full-board snapshot the UI re-renders from, and its JSON form.

use itertools::Itertools;
use log::{debug, warn};

use crate::components::{Card, GameState, GameStatus, Pile};
use crate::ecs::world::World;
use crate::logic::pile::all_piles;
use crate::protocol::{CardData, GameStateData, PileData};
use crate::systems::win_condition_system::game_state_entity;

/// Snapshot of every pile, in creation order, with cards bottom to top.
pub fn get_game_state_data(world: &World) -> GameStateData {
    let status = game_state_entity(world)
        .and_then(|e| world.get_component::<GameState>(e))
        .map_or(GameStatus::Playing, |state| state.status);

    let piles = all_piles(world)
        .into_iter()
        .filter_map(|pile_entity| {
            let pile = world.get_component::<Pile>(pile_entity)?;
            let cards = pile
                .cards()
                .iter()
                .enumerate()
                .filter_map(|(index, &entity)| match world.get_component::<Card>(entity) {
                    Some(card) => Some(CardData {
                        entity,
                        suit: card.suit,
                        rank: card.rank,
                        is_face_up: card.is_face_up,
                        face_key: card.face_key(),
                        position_in_stack: index as u8,
                    }),
                    None => {
                        warn!("Entity {:?} in {} has no Card component. Skipping.", entity, pile.label());
                        None
                    }
                })
                .collect_vec();
            Some(PileData {
                pile_id: pile_entity,
                stack_type: pile.stack_type(),
                label: pile.label().to_string(),
                stacking_gap: pile.stacking_gap(),
                cards,
            })
        })
        .collect_vec();

    debug!("Snapshot: {} piles, status {:?}", piles.len(), status);
    GameStateData { status, piles }
}

/// `get_game_state_data` serialized to JSON.
pub fn get_game_state_json(world: &World) -> Result<String, serde_json::Error> {
    serde_json::to_string(&get_game_state_data(world))
}
