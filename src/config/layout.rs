// src/config/layout.rs
//! 山ごとの描画パラメータだよ。ルールには一切関係なくて、
//! UI がカードを重ねて並べるときの間隔 (px) として snapshot に載せるだけ。

use crate::components::stack::StackType;

pub const STOCK_GAP: f32 = 1.0; // 山札 (と捨て札) はほぼぴったり重ねる
pub const FOUNDATION_GAP: f32 = 0.0; // 組札は完全に重ねる
pub const TABLEAU_GAP: f32 = 30.0; // 場札は縦にずらして全部見えるように

/// 山の種類から重ね間隔を決める。
pub fn stacking_gap(stack_type: StackType) -> f32 {
    match stack_type {
        StackType::Stock | StackType::Waste => STOCK_GAP,
        StackType::Foundation(_) => FOUNDATION_GAP,
        StackType::Tableau(_) => TABLEAU_GAP,
    }
}
