// src/app/game_app.rs

use std::fmt::Display;

use js_sys::Error;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;

use crate::components::StackType;
use crate::config::GameConfig;
use crate::ecs::{entity::Entity, world::World};
use crate::error::EngineResult;
use crate::logic::pile::stack_type_of;
use crate::protocol::{DragResultData, GameStateData};
use crate::systems::win_condition_system;

use super::drag_handler::{self, DragOutcome, DragSession, MoveResult};
use super::init_handler;
use super::state_getter;
use super::stock_handler::{self, DrawOutcome, RecycleOutcome};

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
/// The game controller: the single entry point the UI calls.
///
/// Owns the whole engine state. Every call runs to completion before the next one.
#[wasm_bindgen]
pub struct GameApp {
    world: World,
    drag: Option<DragSession>,
}

#[wasm_bindgen]
impl GameApp {
    /// Creates an app with empty piles. Call `start_game` to deal.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: Initializing...");
        Self { world: init_handler::initialize_world(), drag: None }
    }

    /// Deals a new game. A seed makes the deal reproducible.
    pub fn start_game(&mut self, seed: Option<u32>) -> Result<(), JsValue> {
        let config = GameConfig { seed: seed.map(u64::from) };
        self.start(&config).map_err(|e| to_js_error(format!("{:#}", e)))
    }

    /// Deals a new game from a JSON config such as `{"seed": 42}`.
    /// An empty string deals with defaults.
    pub fn start_game_with_config(&mut self, config_json: &str) -> Result<(), JsValue> {
        let config = GameConfig::from_json(config_json).map_err(|e| {
            error!("GameApp: Failed to parse game config {}: {}", config_json, e);
            to_js_error(e)
        })?;
        self.start(&config).map_err(|e| to_js_error(format!("{:#}", e)))
    }

    /// Click on a card. Stock cards deal the stock's top card to the waste.
    /// Returns true when a card moved.
    pub fn on_card_clicked(&mut self, card_id: usize) -> Result<bool, JsValue> {
        let outcome = self.click_card(Entity(card_id)).map_err(to_js_error)?;
        Ok(matches!(outcome, DrawOutcome::Drawn { .. }))
    }

    /// Click on the stock pile. Recycles the waste when the stock is empty.
    /// Returns true when cards moved.
    pub fn on_stock_pile_clicked(&mut self) -> Result<bool, JsValue> {
        let outcome = self.click_stock_pile().map_err(to_js_error)?;
        Ok(matches!(outcome, RecycleOutcome::Recycled { .. }))
    }

    /// Pointer down on a card. Returns true when a drag began.
    pub fn on_drag_start(&mut self, card_id: usize, x: f64, y: f64) -> Result<bool, JsValue> {
        self.begin_drag(Entity(card_id), x, y).map_err(to_js_error)
    }

    /// Pointer moved. Returns the `[dx, dy]` translation for every dragged card,
    /// or an empty array when nothing is being dragged.
    pub fn on_drag_move(&mut self, x: f64, y: f64) -> Vec<f64> {
        match self.drag_to(x, y) {
            Some(session) => vec![session.offset_x, session.offset_y],
            None => Vec::new(),
        }
    }

    /// Pointer released. `candidates_json` is a JSON array of the stack types the
    /// dragged card overlaps, e.g. `[{"Tableau":3},{"Foundation":0}]`.
    /// Returns a JSON `DragResultData`.
    pub fn on_drag_end(&mut self, candidates_json: &str) -> Result<String, JsValue> {
        let candidates: Vec<StackType> = serde_json::from_str(candidates_json).map_err(|e| {
            error!("GameApp: Failed to parse drop candidates {}: {}", candidates_json, e);
            to_js_error(e)
        })?;
        let outcome = self.end_drag(&candidates).map_err(to_js_error)?;
        let data = match outcome {
            Some(outcome) => self.drag_result_data(outcome),
            None => DragResultData { committed: false, destination: None, game_won: false },
        };
        serde_json::to_string(&data).map_err(to_js_error)
    }

    /// Whether all 52 cards are on the foundations right now.
    pub fn is_game_won(&self) -> bool {
        win_condition_system::is_game_won(&self.world)
    }

    /// Every pile's cards and orientation as JSON, for a full re-render.
    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_game_state_json(&self.world).map_err(to_js_error)
    }
}

impl GameApp {
    /// Replaces the board with a freshly dealt one. Any drag in progress is dropped.
    pub fn start(&mut self, config: &GameConfig) -> anyhow::Result<()> {
        self.world = init_handler::start_new_game(config)?;
        self.drag = None;
        Ok(())
    }

    pub fn click_card(&mut self, card: Entity) -> EngineResult<DrawOutcome> {
        stock_handler::handle_card_click(&mut self.world, card)
    }

    pub fn click_stock_pile(&mut self) -> EngineResult<RecycleOutcome> {
        stock_handler::reset_waste_to_stock(&mut self.world)
    }

    /// Starts a drag; returns false when the card cannot be dragged.
    pub fn begin_drag(&mut self, card: Entity, x: f64, y: f64) -> EngineResult<bool> {
        if self.drag.is_some() {
            warn!("GameApp: drag start while another drag is active; replacing it");
        }
        self.drag = drag_handler::handle_drag_start(&self.world, card, x, y)?;
        Ok(self.drag.is_some())
    }

    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<&DragSession> {
        let session = self.drag.as_mut()?;
        session.update(x, y);
        Some(&*session)
    }

    /// Releases the current drag over `candidates`. `None` when no drag was active.
    pub fn end_drag(&mut self, candidates: &[StackType]) -> EngineResult<Option<DragOutcome>> {
        let Some(session) = self.drag.take() else {
            return Ok(None);
        };
        let piles = drag_handler::resolve_candidates(&self.world, candidates);
        drag_handler::handle_drag_end(&mut self.world, &session, &piles).map(Some)
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn state(&self) -> GameStateData {
        state_getter::get_game_state_data(&self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn drag_result_data(&self, outcome: DragOutcome) -> DragResultData {
        match outcome.result {
            MoveResult::Committed { destination } => DragResultData {
                committed: true,
                destination: stack_type_of(&self.world, destination),
                game_won: outcome.game_won,
            },
            MoveResult::Rejected => DragResultData { committed: false, destination: None, game_won: outcome.game_won },
        }
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(err: impl Display) -> JsValue {
    JsValue::from(Error::new(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::GameStatus;
    use crate::logic::pile::{find_pile, pile_cards};

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    fn started(seed: u32) -> GameApp {
        let mut app = GameApp::new();
        app.start_game(Some(seed)).expect("start works");
        app
    }

    fn tableau_top(app: &GameApp, column: u8) -> Entity {
        let pile = find_pile(app.world(), StackType::Tableau(column)).unwrap();
        *pile_cards(app.world(), pile).last().unwrap()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn new_app_has_empty_board() {
        let app = GameApp::new();
        let state = app.state();
        assert_eq!(state.piles.len(), 13);
        assert_eq!(state.total_cards(), 0);
        assert!(!app.is_game_won());
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn start_game_deals_and_serializes() {
        let app = started(42);
        let json = app.get_state_json().unwrap();
        let state: GameStateData = serde_json::from_str(&json).unwrap();
        assert_eq!(state.total_cards(), 52);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.pile(StackType::Stock).unwrap().cards.len(), 24);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn stock_clicks_draw_then_recycle() {
        let mut app = started(3);
        let stock_top = app.state().pile(StackType::Stock).unwrap().cards.last().unwrap().entity;

        assert!(!app.on_stock_pile_clicked().unwrap(), "山札が残ってるうちは何もしない");
        assert!(app.on_card_clicked(stock_top.id()).unwrap());
        assert!(!app.on_card_clicked(stock_top.id()).unwrap(), "waste のカードはクリックしても何もしない");

        for _ in 0..23 {
            let top = app.state().pile(StackType::Stock).unwrap().cards[0].entity;
            assert!(app.on_card_clicked(top.id()).unwrap());
        }
        assert_eq!(app.state().pile(StackType::Waste).unwrap().cards.len(), 24);
        assert!(app.on_stock_pile_clicked().unwrap());
        let state = app.state();
        assert_eq!(state.pile(StackType::Stock).unwrap().cards.len(), 24);
        assert!(state.pile(StackType::Waste).unwrap().cards.is_empty());
        assert_eq!(state.total_cards(), 52);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn rejected_drag_leaves_board_untouched() {
        let mut app = started(11);
        let before = app.state();
        let card = tableau_top(&app, 6);

        assert!(app.on_drag_start(card.id(), 5.0, 5.0).unwrap());
        assert_eq!(app.on_drag_move(25.0, 0.0), vec![20.0, -5.0]);
        // Stock と Waste は絶対に置けない
        let result: DragResultData = serde_json::from_str(&app.on_drag_end(r#"["Stock","Waste"]"#).unwrap()).unwrap();
        assert_eq!(result, DragResultData { committed: false, destination: None, game_won: false });
        assert_eq!(app.state(), before);
        assert!(app.drag_session().is_none());
        assert!(app.on_drag_move(1.0, 1.0).is_empty());
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn drag_end_without_drag_is_a_no_op() {
        let mut app = started(1);
        let result: DragResultData = serde_json::from_str(&app.on_drag_end("[]").unwrap()).unwrap();
        assert_eq!(result, DragResultData { committed: false, destination: None, game_won: false });
        assert_eq!(app.end_drag(&[]).unwrap(), None);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn json_config_deals_like_the_seed() {
        let mut from_json = GameApp::new();
        from_json.start_game_with_config(r#"{"seed": 42}"#).unwrap();
        assert_eq!(from_json.state(), started(42).state());

        let mut defaults = GameApp::new();
        defaults.start_game_with_config("").unwrap();
        assert_eq!(defaults.state().total_cards(), 52);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn any_legal_drag_conserves_cards() {
        let mut app = started(8);
        // 場札の一番上を、置ける場所があればどこかに動かす
        let all_targets = StackType::all();
        for column in 0..7 {
            let card = tableau_top(&app, column);
            assert!(app.begin_drag(card, 0.0, 0.0).unwrap());
            let outcome = app.end_drag(&all_targets).unwrap().unwrap();
            if let MoveResult::Committed { destination } = outcome.result {
                assert_eq!(pile_cards(app.world(), destination).last(), Some(&card));
            }
            assert_eq!(app.state().total_cards(), 52);
        }
    }
}
