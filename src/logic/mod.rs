// src/logic/mod.rs
//! ゲームのルールや山の操作みたいな「純粋な」ロジックを置く場所。

pub mod deck;
pub mod pile;
pub mod rules;
