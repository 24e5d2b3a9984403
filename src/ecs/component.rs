// src/ecs/component.rs

/// Component（コンポーネント）トレイトだよ！
///
/// 構造体が World に格納できるデータ部品であることを示すマーカー。
/// カード (`Card`)、カードの居場所 (`StackInfo`)、山そのもの (`Pile`)、
/// ゲーム状態 (`GameState`) がこれを実装するよ。
/// `Debug` は World のログ出力で中身を見たいから要求してる。
pub trait Component: std::fmt::Debug + 'static {}
