// src/components/pile.rs

use crate::components::stack::StackType;
use crate::config::layout;
use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// 山（カードの置き場）そのものを表すコンポーネントだよ！🗂️
///
/// 山エンティティに 1 個ずつ付いてて、カードエンティティの並び (`cards`) を
/// **所有** してる。最後の要素が一番上のカード。
///
/// 並びを書き換えられるのは `logic::pile` の `add_card` / `remove_card` だけ
/// (カード側の `StackInfo` も一緒に直さないといけないからね)。
#[derive(Debug, Clone, PartialEq)]
pub struct Pile {
    stack_type: StackType,
    label: String,
    /// 描画用の重ね間隔。ルールには関係ない。
    stacking_gap: f32,
    cards: Vec<Entity>,
}

impl Component for Pile {}

impl Pile {
    /// 空の山を作る。ラベルと重ね間隔は種類から決まるよ。
    pub fn new(stack_type: StackType) -> Self {
        Self {
            stack_type,
            label: stack_type.label(),
            stacking_gap: layout::stacking_gap(stack_type),
            cards: Vec::new(),
        }
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn stacking_gap(&self) -> f32 {
        self.stacking_gap
    }

    /// 下から上の順のカード。
    pub fn cards(&self) -> &[Entity] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード (空なら None)。
    pub fn top(&self) -> Option<Entity> {
        self.cards.last().copied()
    }

    pub fn contains(&self, card: Entity) -> bool {
        self.cards.contains(&card)
    }

    /// 山の中での位置 (0 が一番下)。
    pub fn index_of(&self, card: Entity) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    pub(crate) fn push(&mut self, card: Entity) {
        self.cards.push(card);
    }

    pub(crate) fn remove(&mut self, card: Entity) -> Option<usize> {
        let index = self.index_of(card)?;
        self.cards.remove(index);
        Some(index)
    }
}
