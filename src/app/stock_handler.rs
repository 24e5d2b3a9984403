// src/app/stock_handler.rs
//! Handles clicks on stock cards (dealing to the waste) and on the empty stock pile (recycling the waste).

use log::{debug, info};

use crate::components::{Card, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::EngineResult;
use crate::logic::pile::{
    add_card, is_pile_empty, pile_of, pile_size, remove_card, require_pile, set_face_up, stack_type_of, top_card,
};
use crate::logic::rules::stock_waste;

/// Result of a click on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The stock's top card moved to the waste, face up.
    Drawn { card: Entity },
    /// The stock had no cards.
    StockEmpty,
    /// The clicked card is not in the stock.
    Ignored,
}

/// Result of a click on the stock pile itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecycleOutcome {
    /// Every waste card went back to the stock, face down.
    Recycled { count: usize },
    /// The stock still has cards, so nothing happens.
    StockNotEmpty,
    /// Both the stock and the waste are empty.
    NothingToRecycle,
}

/// Deals one card from the Stock pile to the Waste pile and turns it face up.
pub fn deal_one_card_from_stock(world: &mut World) -> EngineResult<DrawOutcome> {
    let stock = require_pile(world, StackType::Stock)?;
    if !stock_waste::can_deal_from_stock(is_pile_empty(world, stock)) {
        info!("Stock is empty. Cannot deal.");
        return Ok(DrawOutcome::StockEmpty);
    }
    let waste = require_pile(world, StackType::Waste)?;

    let card = top_card(world, stock)?;
    remove_card(world, stock, card)?;
    add_card(world, waste, card)?;
    set_face_up(world, card, true)?;

    if let Some(card_comp) = world.get_component::<Card>(card) {
        info!("Placed {} to the waste.", card_comp);
    }
    Ok(DrawOutcome::Drawn { card })
}

/// Moves every Waste card back to the Stock, one top card at a time, turning each face down.
///
/// Only allowed while the Stock is empty. The stock ends up in reverse waste order,
/// so the first card drawn next round is the one drawn first this round.
pub fn reset_waste_to_stock(world: &mut World) -> EngineResult<RecycleOutcome> {
    let stock = require_pile(world, StackType::Stock)?;
    let waste = require_pile(world, StackType::Waste)?;
    let stock_is_empty = is_pile_empty(world, stock);
    let waste_is_empty = is_pile_empty(world, waste);

    if !stock_waste::can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
        debug!("Cannot reset Waste to Stock (stock empty: {}, waste empty: {})", stock_is_empty, waste_is_empty);
        return Ok(if stock_is_empty {
            RecycleOutcome::NothingToRecycle
        } else {
            RecycleOutcome::StockNotEmpty
        });
    }

    let count = pile_size(world, waste);
    for _ in 0..count {
        let card = top_card(world, waste)?;
        remove_card(world, waste, card)?;
        add_card(world, stock, card)?;
        set_face_up(world, card, false)?;
    }

    info!("Stock refilled from discard pile.");
    Ok(RecycleOutcome::Recycled { count })
}

/// Click on any card: only stock cards react, and they always deal the stock's top card.
pub fn handle_card_click(world: &mut World, card: Entity) -> EngineResult<DrawOutcome> {
    let in_stock = pile_of(world, card)
        .and_then(|pile| stack_type_of(world, pile))
        .map_or(false, |stack_type| stack_type == StackType::Stock);
    if !in_stock {
        debug!("Click on {:?} ignored (not in the stock)", card);
        return Ok(DrawOutcome::Ignored);
    }
    deal_one_card_from_stock(world)
}
