// src/components/card.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ecs::component::Component;

/// カードのスート（マーク）だよ！❤️♦️♠️♣️
///
/// 並び順はデッキを作るときの順番 (hearts, diamonds, spades, clubs) と同じ。
/// JSON では小文字の名前 (`"hearts"` とか) になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

/// カードのランク（数字）だよ！ A, 2, 3, ..., K
///
/// `Ace = 0` から `King = 12` までの序数を持つ。
/// Ord を derive してるから `Rank::Ace < Rank::Two` みたいに比べられる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// 全スートの配列。デッキ生成のループで使うよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

/// 全ランクの配列 (A → K)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードの色（赤か黒か）だよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を決める。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Spades | Suit::Clubs => CardColor::Black,
        }
    }
}

impl Suit {
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }

    /// 小文字の名前。
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
            Suit::Clubs => "clubs",
        }
    }
}

impl Rank {
    /// A = 0 ... K = 12 の序数。
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// 序数からランクに戻す。範囲外なら None。
    pub fn from_ordinal(ordinal: u8) -> Option<Rank> {
        ALL_RANKS.get(ordinal as usize).copied()
    }

    /// ひとつ上のランク (K の上は無い)。
    pub fn next(self) -> Option<Rank> {
        Rank::from_ordinal(self.ordinal() + 1)
    }

    /// ひとつ下のランク (A の下は無い)。
    pub fn previous(self) -> Option<Rank> {
        self.ordinal().checked_sub(1).and_then(Rank::from_ordinal)
    }

    /// 小文字の名前。
    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "two",
            Rank::Three => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// カードそのものを表すコンポーネントだよ！🃏
///
/// - `suit` / `rank`: カードの正体。配った後は絶対に変わらない。
/// - `is_face_up`: 表向きなら true。めくる・戻すで変わるのはここだけ。
///
/// 描画は持たないただのデータ。UI は `face_key()` を自分のスプライト表と突き合わせる。
/// どの山にいるかは `StackInfo` コンポーネントの方が持ってるよ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Component for Card {}

impl Card {
    /// 裏向きのカードを作るよ。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表向きのカードを作る (主にテスト用)。
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    pub fn is_face_down(&self) -> bool {
        !self.is_face_up
    }

    /// 裏表をひっくり返す。
    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// 赤と黒で色が違うか。
    pub fn is_opposite_color(&self, other: &Card) -> bool {
        self.color() != other.color()
    }

    pub fn is_same_suit(&self, other: &Card) -> bool {
        self.suit == other.suit
    }

    /// `"ace of hearts"` みたいな短い名前。
    pub fn short_name(&self) -> String {
        format!("{} of {}", self.rank, self.suit)
    }

    /// 表面の画像キー。`hearts1` (A) ～ `clubs13` (K)。
    pub fn face_key(&self) -> String {
        format!("{}{}", self.suit, self.rank.ordinal() + 1)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The {} of {}", self.rank, self.suit)
    }
}
