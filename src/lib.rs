// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod systems;

pub use app::drag_handler::{DragOutcome, DragSession, MoveResult};
pub use app::game_app::GameApp;
pub use app::stock_handler::{DrawOutcome, RecycleOutcome};
pub use config::GameConfig;
pub use error::{EngineError, EngineResult};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックしたときにブラウザのコンソールへメッセージが出るようにしておく。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
