// src/systems/deal_system.rs

use log::{debug, info};

use crate::components::card::Card;
use crate::components::stack::{StackType, TABLEAU_COUNT};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{EngineError, EngineResult};
use crate::logic::deck::verify_deck_integrity;
use crate::logic::pile::{add_card, require_pile};

/// 初期カード配置システム！🃏
///
/// シャッフル済みのデッキを受け取って、クロンダイクの形に並べるよ。
/// - 場札 (Tableau) i 列目に i+1 枚。一番上だけ表向き。
/// - 残りの 24 枚は全部裏向きで山札 (Stock) へ。
/// - 捨て札 (Waste) と組札 (Foundation) は空のまま。
///
/// 山エンティティは先に作ってある前提 (`app::init_handler` がやってくれる)。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// デッキを配って、作ったカードエンティティを作成順で返すよ。
    ///
    /// デッキの先頭から順に使う。配り方は列ごと (0 列目に 1 枚、1 列目に 2 枚…)。
    pub fn execute(&self, world: &mut World, deck: Vec<Card>) -> EngineResult<Vec<Entity>> {
        verify_deck_integrity(&deck)?;

        let mut cards = deck.into_iter();
        let mut created = Vec::with_capacity(cards.len());

        for column in 0..TABLEAU_COUNT {
            let pile = require_pile(world, StackType::Tableau(column))?;
            for row in 0..=column {
                let mut card = cards.next().ok_or_else(|| EngineError::DeckIntegrity {
                    reason: format!("deck ran out while dealing tableau {}", column),
                })?;
                // 一番上だけ表向き
                card.is_face_up = row == column;
                let entity = world.create_entity();
                world.add_component(entity, card);
                add_card(world, pile, entity)?;
                created.push(entity);
            }
            debug!("Deal: tableau {} gets {} card(s)", column, column + 1);
        }

        let stock = require_pile(world, StackType::Stock)?;
        let mut stock_count = 0;
        for mut card in cards {
            card.is_face_up = false;
            let entity = world.create_entity();
            world.add_component(entity, card);
            add_card(world, stock, entity)?;
            created.push(entity);
            stock_count += 1;
        }

        info!("Deal: {} cards dealt ({} left in the stock)", created.len(), stock_count);
        Ok(created)
    }
}
