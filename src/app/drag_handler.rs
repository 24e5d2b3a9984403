// src/app/drag_handler.rs
//! Handles card dragging logic (start, update, end).

use itertools::Itertools;
use log::{debug, info, warn};

use crate::components::{Card, StackType};
use crate::ecs::{entity::Entity, world::World};
use crate::error::{EngineError, EngineResult};
use crate::logic::pile::{cards_from, find_pile, pile_of, stack_type_of, top_card};
use crate::logic::rules;
use crate::systems::win_condition_system::is_game_won;

use super::drag_apply_handler;

/// One drag gesture, from pointer-down on a card to release.
///
/// Owned by `GameApp` between `on_drag_start` and `on_drag_end`.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// The card the pointer grabbed (bottom of the dragged unit).
    pub lead_card: Entity,
    /// The dragged unit, bottom to top.
    pub dragged_cards: Vec<Entity>,
    /// Pile the unit came from.
    pub source_pile: Entity,
    pub start_x: f64,
    pub start_y: f64,
    /// Pointer travel since the start; the UI translates every dragged card by this much.
    pub offset_x: f64,
    pub offset_y: f64,
}

impl DragSession {
    /// Tracks pointer movement.
    pub fn update(&mut self, x: f64, y: f64) {
        self.offset_x = x - self.start_x;
        self.offset_y = y - self.start_y;
    }

    pub fn dragged_count(&self) -> usize {
        self.dragged_cards.len()
    }
}

/// What happened to the dragged unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The unit now sits on `destination`.
    Committed { destination: Entity },
    /// No pile mutation; the UI slides the unit back.
    Rejected,
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    pub result: MoveResult,
    /// Win check taken on release, before the move is applied.
    pub game_won: bool,
}

/// Starts a drag on `card`.
///
/// Returns `None` when the card cannot be dragged: stock cards, and anything
/// but the top card of the waste or a foundation. From a tableau the unit is
/// the card and everything above it.
pub fn handle_drag_start(world: &World, card: Entity, start_x: f64, start_y: f64) -> EngineResult<Option<DragSession>> {
    if world.get_component::<Card>(card).is_none() {
        return Err(EngineError::UnknownEntity { entity: card });
    }
    let source_pile = pile_of(world, card).ok_or(EngineError::UnknownEntity { entity: card })?;
    let source_type = stack_type_of(world, source_pile).ok_or(EngineError::UnknownEntity { entity: source_pile })?;

    let dragged_cards = match source_type {
        StackType::Stock => {
            debug!("Drag start on {:?} ignored: stock cards are drawn, not dragged", card);
            return Ok(None);
        }
        StackType::Waste | StackType::Foundation(_) => {
            if top_card(world, source_pile)? != card {
                debug!("Drag start on {:?} ignored: only the top of {} can move", card, source_type);
                return Ok(None);
            }
            vec![card]
        }
        StackType::Tableau(_) => cards_from(world, source_pile, card)
            .ok_or(EngineError::CardNotInPile { card, stack_type: source_type })?,
    };

    info!("Drag started: {} card(s) from {} led by {:?}", dragged_cards.len(), source_type, card);
    Ok(Some(DragSession {
        lead_card: card,
        dragged_cards,
        source_pile,
        start_x,
        start_y,
        offset_x: 0.0,
        offset_y: 0.0,
    }))
}

/// Maps the UI's drop candidates to pile entities, keeping their order.
pub fn resolve_candidates(world: &World, candidates: &[StackType]) -> Vec<Entity> {
    candidates
        .iter()
        .filter_map(|&stack_type| {
            if !stack_type.is_valid() {
                warn!("Drop candidate {} is out of range; skipping", stack_type);
                return None;
            }
            let pile = find_pile(world, stack_type);
            if pile.is_none() {
                warn!("Drop candidate {} does not exist; skipping", stack_type);
            }
            pile
        })
        .collect_vec()
}

/// Ends a drag: checks for a win, picks a destination among `candidates`, and
/// commits or rejects the move.
pub fn handle_drag_end(world: &mut World, session: &DragSession, candidates: &[Entity]) -> EngineResult<DragOutcome> {
    let game_won = is_game_won(world);

    // The board may have changed since the drag began.
    let still_there = cards_from(world, session.source_pile, session.lead_card)
        .map_or(false, |cards| cards == session.dragged_cards);
    if !still_there {
        warn!("Drag of {:?} is stale; rejecting", session.lead_card);
        return Ok(DragOutcome { result: MoveResult::Rejected, game_won });
    }

    let destination = rules::select_destination(
        world,
        session.lead_card,
        session.source_pile,
        candidates,
        session.dragged_count(),
    );

    let result = match destination {
        Some(destination) => {
            drag_apply_handler::apply_move(world, session, destination)?;
            MoveResult::Committed { destination }
        }
        None => {
            debug!("No valid destination for {:?}; sliding back", session.lead_card);
            MoveResult::Rejected
        }
    };
    Ok(DragOutcome { result, game_won })
}
