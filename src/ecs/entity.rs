// src/ecs/entity.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity（エンティティ）は、ゲームに登場する「モノ」を表すただの ID だよ！
///
/// このエンジンでは、52 枚のカード 1 枚 1 枚、13 個の山 (Stock, Discard,
/// Foundation×4, Tableau×7)、それとゲーム状態を持つ特別な 1 個がエンティティになる。
/// ID そのものには意味がなくて、コンポーネントと組み合わせて初めて
/// 「ID 5 はハートの A で、Tableau 3 に置かれてる」みたいな意味を持つんだ。
///
/// UI 側はこの数値をカード ID / 山 ID としてそのまま使う (スプライトとの対応表のキー)。
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Entity(pub usize);

impl Entity {
    /// 中の数値を取り出すよ。
    pub fn id(self) -> usize {
        self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
