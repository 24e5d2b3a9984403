// src/components/mod.rs

// World に入れるデータ部品たち！
pub mod card;
pub mod game_state;
pub mod pile;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit};
pub use game_state::{GameState, GameStatus};
pub use pile::Pile;
pub use stack::{StackInfo, StackType};
