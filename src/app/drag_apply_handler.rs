// src/app/drag_apply_handler.rs
//! Applies a validated drag-and-drop move to the World.

use log::info;

use crate::ecs::{entity::Entity, system::System, world::World};
use crate::error::EngineResult;
use crate::systems::move_card_system::MoveCardSystem;
use crate::systems::win_condition_system::WinConditionSystem;

use super::drag_handler::DragSession;

/// Moves the dragged unit onto `destination` and refreshes the game status.
///
/// Cards keep their orientation; a face-down card left on top of the source
/// tableau stays face down.
pub fn apply_move(world: &mut World, session: &DragSession, destination: Entity) -> EngineResult<()> {
    MoveCardSystem::new().commit(world, &session.dragged_cards, session.source_pile, destination)?;
    WinConditionSystem::new().run(world);
    info!(
        "Move applied: {} card(s) {:?} -> {:?}",
        session.dragged_count(),
        session.source_pile,
        destination
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::init_handler::initialize_world;
    use crate::components::{Card, GameState, GameStatus, Rank, StackType, Suit};
    use crate::logic::deck::create_standard_deck;
    use crate::logic::pile::{add_card, find_pile, pile_cards};
    use crate::systems::win_condition_system::game_state_entity;

    #[test]
    fn source_top_stays_face_down() {
        let mut world = initialize_world();
        let t0 = find_pile(&world, StackType::Tableau(0)).unwrap();
        let t1 = find_pile(&world, StackType::Tableau(1)).unwrap();

        let hidden = world.create_entity();
        world.add_component(hidden, Card::new(Suit::Clubs, Rank::Three));
        add_card(&mut world, t0, hidden).unwrap();
        let king = world.create_entity();
        world.add_component(king, Card::face_up(Suit::Hearts, Rank::King));
        add_card(&mut world, t0, king).unwrap();

        let session = DragSession {
            lead_card: king,
            dragged_cards: vec![king],
            source_pile: t0,
            start_x: 0.0,
            start_y: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        };
        apply_move(&mut world, &session, t1).unwrap();

        assert_eq!(pile_cards(&world, t1), vec![king]);
        assert!(!world.get_component::<Card>(hidden).unwrap().is_face_up);
    }

    #[test]
    fn last_foundation_card_marks_the_game_won() {
        let mut world = initialize_world();
        let waste = find_pile(&world, StackType::Waste).unwrap();
        let mut last = None;
        for (i, mut card) in create_standard_deck().into_iter().enumerate() {
            card.is_face_up = true;
            let e = world.create_entity();
            world.add_component(e, card);
            // 最後のクラブの K だけ waste に
            let pile = if i == 51 { waste } else { find_pile(&world, StackType::Foundation((i / 13) as u8)).unwrap() };
            add_card(&mut world, pile, e).unwrap();
            last = Some(e);
        }
        let king = last.unwrap();
        let f3 = find_pile(&world, StackType::Foundation(3)).unwrap();

        let session = DragSession {
            lead_card: king,
            dragged_cards: vec![king],
            source_pile: waste,
            start_x: 0.0,
            start_y: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        };
        apply_move(&mut world, &session, f3).unwrap();

        let state = game_state_entity(&world).unwrap();
        assert_eq!(world.get_component::<GameState>(state).unwrap().status, GameStatus::Won);
    }
}
