// src/components/stack.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// 場札の列の数。
pub const TABLEAU_COUNT: u8 = 7;
/// 組札の数。
pub const FOUNDATION_COUNT: u8 = 4;

/// カードが置かれる場所（山）の種類だよ。
///
/// JSON にすると `"Stock"`, `"Waste"`, `{"Foundation":2}`, `{"Tableau":5}` になる。
/// UI はドロップ候補をこの形で送ってくるよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackType {
    /// 山札 (Stock)。全部裏向き。
    Stock,
    /// 捨て札 (Discard / Waste)。山札からめくったカードが表向きで積まれる。
    Waste,
    /// 組札 (Foundation)。4 つあるので番号 (0-3) を持つ。
    Foundation(u8),
    /// 場札 (Tableau)。7 列あるので列番号 (0-6) を持つ。
    Tableau(u8),
}

impl StackType {
    /// 全 13 山を作成順 (Stock, Waste, Foundation 0-3, Tableau 0-6) で返すよ。
    pub fn all() -> Vec<StackType> {
        let mut all = vec![StackType::Stock, StackType::Waste];
        all.extend((0..FOUNDATION_COUNT).map(StackType::Foundation));
        all.extend((0..TABLEAU_COUNT).map(StackType::Tableau));
        all
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }

    /// 番号の範囲内か (Foundation は 0-3、Tableau は 0-6)。
    pub fn is_valid(self) -> bool {
        match self {
            StackType::Stock | StackType::Waste => true,
            StackType::Foundation(i) => i < FOUNDATION_COUNT,
            StackType::Tableau(i) => i < TABLEAU_COUNT,
        }
    }

    /// 山のラベル。`"Stock"`, `"Discard"`, `"Foundation 0"`, `"Tableau 6"` みたいな感じ。
    pub fn label(self) -> String {
        match self {
            StackType::Stock => "Stock".to_string(),
            StackType::Waste => "Discard".to_string(),
            StackType::Foundation(i) => format!("Foundation {}", i),
            StackType::Tableau(i) => format!("Tableau {}", i),
        }
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// カードが今どこにいるかを表すコンポーネントだよ。
///
/// `pile` は山エンティティへの逆参照。持ち主はあくまで `Pile` の方で、
/// こっちは「引くためだけ」の情報。`logic::pile` の関数だけが書き換えるよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackInfo {
    /// カードが入ってる山のエンティティ。
    pub pile: Entity,
    /// その山の種類。
    pub stack_type: StackType,
    /// 山の中で下から何番目か (0 が一番下)。
    pub position_in_stack: u8,
}

impl StackInfo {
    pub fn new(pile: Entity, stack_type: StackType, position_in_stack: u8) -> Self {
        Self { pile, stack_type, position_in_stack }
    }
}

impl Component for StackInfo {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_info_creation() {
        let info = StackInfo::new(Entity(3), StackType::Tableau(2), 5);
        assert_eq!(info.pile, Entity(3));
        assert_eq!(info.stack_type, StackType::Tableau(2));
        assert_eq!(info.position_in_stack, 5);
        println!("StackInfo 作成テスト、成功！👍");
    }

    #[test]
    fn all_stacks_in_creation_order() {
        let all = StackType::all();
        assert_eq!(all.len(), 13);
        assert_eq!(all[0], StackType::Stock);
        assert_eq!(all[1], StackType::Waste);
        assert_eq!(all[2], StackType::Foundation(0));
        assert_eq!(all[12], StackType::Tableau(6));
        assert!(all.iter().all(|s| s.is_valid()));
        assert!(!StackType::Tableau(7).is_valid());
        assert!(!StackType::Foundation(4).is_valid());
    }

    #[test]
    fn labels_and_json() {
        assert_eq!(StackType::Waste.label(), "Discard");
        assert_eq!(StackType::Foundation(1).label(), "Foundation 1");
        assert_eq!(serde_json::to_string(&StackType::Tableau(3)).unwrap(), r#"{"Tableau":3}"#);
        let parsed: Vec<StackType> = serde_json::from_str(r#"["Stock", {"Foundation": 0}]"#).unwrap();
        assert_eq!(parsed, vec![StackType::Stock, StackType::Foundation(0)]);
    }
}
