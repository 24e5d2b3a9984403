// src/app/init_handler.rs
//! World setup and the start-of-game deal.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::components::{Card, GameState, Pile, StackInfo, StackType};
use crate::config::GameConfig;
use crate::ecs::world::World;
use crate::logic::deck::{create_deck, create_seeded_deck};
use crate::systems::deal_system::DealInitialCardsSystem;

/// Creates a World with every component registered, the 13 empty piles and
/// the game-state entity. No cards yet.
pub fn initialize_world() -> World {
    let mut world = World::new();
    world.register_component::<Card>();
    world.register_component::<StackInfo>();
    world.register_component::<Pile>();
    world.register_component::<GameState>();

    for stack_type in StackType::all() {
        let pile = world.create_entity();
        world.add_component(pile, Pile::new(stack_type));
        debug!("App::Init: created pile {} as {:?}", stack_type, pile);
    }

    let state = world.create_entity();
    world.add_component(state, GameState::default());
    world
}

/// Builds a fresh World and deals a new game into it.
///
/// Fails only when the randomness source or the deck itself is broken.
pub fn start_new_game(config: &GameConfig) -> Result<World> {
    let deck = match config.seed {
        Some(seed) => create_seeded_deck(seed),
        None => create_deck().context("failed to build a shuffled deck")?,
    };

    let mut world = initialize_world();
    DealInitialCardsSystem::default()
        .execute(&mut world, deck)
        .context("failed to deal the initial layout")?;

    info!("App::Init: new game ready (seed: {:?})", config.seed);
    Ok(world)
}
