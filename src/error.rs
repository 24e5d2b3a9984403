// src/error.rs
//! Engine error taxonomy.
//!
//! A rejected move is not an error: the validators return `false` and the
//! handlers report a `Rejected` outcome. These variants are contract or
//! integrity violations.

use std::fmt;

use crate::components::stack::StackType;
use crate::ecs::entity::Entity;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Top card requested from an empty pile. Callers must check emptiness first.
    EmptyPile { stack_type: StackType },
    /// The deck is not exactly 52 distinct cards. Fatal.
    DeckIntegrity { reason: String },
    /// The OS randomness source failed while seeding the shuffle. Fatal.
    Randomness { reason: String },
    /// `remove_card` on a pile that does not hold the card.
    CardNotInPile { card: Entity, stack_type: StackType },
    /// The entity is not a card (or pile) in this world.
    UnknownEntity { entity: Entity },
    /// No pile entity exists for the stack type.
    PileNotFound { stack_type: StackType },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptyPile { stack_type } => {
                write!(f, "cannot take the top card of empty pile {}", stack_type)
            }
            EngineError::DeckIntegrity { reason } => write!(f, "deck integrity violation: {}", reason),
            EngineError::Randomness { reason } => write!(f, "randomness source failed: {}", reason),
            EngineError::CardNotInPile { card, stack_type } => {
                write!(f, "card {} is not in pile {}", card, stack_type)
            }
            EngineError::UnknownEntity { entity } => write!(f, "unknown entity {}", entity),
            EngineError::PileNotFound { stack_type } => write!(f, "no pile for {}", stack_type),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_pile() {
        let err = EngineError::EmptyPile { stack_type: StackType::Foundation(2) };
        assert_eq!(err.to_string(), "cannot take the top card of empty pile Foundation 2");

        let err = EngineError::CardNotInPile { card: Entity(8), stack_type: StackType::Waste };
        assert_eq!(err.to_string(), "card #8 is not in pile Discard");
    }

    #[test]
    fn converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(EngineError::DeckIntegrity { reason: "51 cards".into() })?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(err.to_string().contains("51 cards"));
    }
}
