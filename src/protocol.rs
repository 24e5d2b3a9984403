// src/protocol.rs

// UI (JavaScript) とやり取りするデータの形を定義するよ！💌
// エンジンは変化のたびに「全部の山の中身」を渡して、UI はそれを丸ごと描き直す。
// 差分は送らないよ。
use serde::{Deserialize, Serialize};

pub use crate::components::card::{Rank, Suit};
pub use crate::components::game_state::GameStatus;
pub use crate::components::stack::StackType;
use crate::ecs::entity::Entity;

/// カード 1 枚分の情報。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    /// カードのエンティティ ID。クリックやドラッグのときはこれを送り返してね。
    pub entity: Entity,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    /// 画像キー (`hearts1` など)。裏向きでも入ってるので、表示するかは UI 次第。
    pub face_key: String,
    /// 山の中で下から何番目か。
    pub position_in_stack: u8,
}

/// 山 1 つ分の情報。`cards` は下から上の順。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PileData {
    pub pile_id: Entity,
    pub stack_type: StackType,
    pub label: String,
    /// 重ねて描くときのずらし幅 (描画専用)。
    pub stacking_gap: f32,
    pub cards: Vec<CardData>,
}

/// ゲーム全体のスナップショット。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    pub status: GameStatus,
    /// 作成順 (Stock, Waste, Foundation 0-3, Tableau 0-6)。
    pub piles: Vec<PileData>,
}

impl GameStateData {
    /// 種類から山を引く。
    pub fn pile(&self, stack_type: StackType) -> Option<&PileData> {
        self.piles.iter().find(|pile| pile.stack_type == stack_type)
    }

    /// 全部の山のカード枚数の合計 (ずっと 52 のはず)。
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(|pile| pile.cards.len()).sum()
    }
}

/// ドラッグを離したときの結果。UI はこれを見てカードを滑らせる先を決めるよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DragResultData {
    /// 移動が確定したか。false なら元の場所に戻す。
    pub committed: bool,
    /// 確定した移動先。
    pub destination: Option<StackType>,
    /// 離した時点 (移動前) の勝利判定。true なら勝利ダイアログを出してね。
    pub game_won: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pile_data_json_shape() {
        let data = PileData {
            pile_id: Entity(6),
            stack_type: StackType::Tableau(0),
            label: "Tableau 0".to_string(),
            stacking_gap: 30.0,
            cards: vec![CardData {
                entity: Entity(20),
                suit: Suit::Spades,
                rank: Rank::King,
                is_face_up: true,
                face_key: "spades13".to_string(),
                position_in_stack: 0,
            }],
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["pile_id"], 6);
        assert_eq!(json["stack_type"]["Tableau"], 0);
        assert_eq!(json["cards"][0]["rank"], "king");
        assert_eq!(json["cards"][0]["face_key"], "spades13");

        let back: PileData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
        println!("PileData JSON テスト、成功！🎉");
    }
}
