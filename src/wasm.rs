//! JS-facing exports. Values cross the boundary as plain JSON-shaped objects.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::card::TilePool;
use crate::error::BingoError;
use crate::game::BingoSession;
use crate::settings::Settings;
use crate::win::{check_h_pattern, detect_wins, h_pattern_tiles};

/// `None` must reach JS as `null`, not `undefined`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Settings arrive as an object, as JSON text, or not at all.
fn settings_from_js(value: JsValue) -> Result<Settings, BingoError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Settings::default());
    }
    if let Some(json) = value.as_string() {
        return Settings::from_json(&json);
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| BingoError::InvalidSettings(e.to_string()))
}

#[wasm_bindgen(js_name = detectWins)]
pub fn detect_wins_js(revealed: Vec<String>, grid_size: usize) -> Result<JsValue, JsError> {
    to_js(&detect_wins(&revealed, grid_size))
}

#[wasm_bindgen(js_name = checkHPattern)]
pub fn check_h_pattern_js(revealed: Vec<String>, grid_size: usize) -> bool {
    check_h_pattern(&revealed, grid_size)
}

#[wasm_bindgen(js_name = getHPatternTiles)]
pub fn h_pattern_tiles_js(grid_size: usize) -> Vec<String> {
    h_pattern_tiles(grid_size)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Card page state for the JS UI.
#[wasm_bindgen]
pub struct BingoGame {
    session: BingoSession,
}

#[wasm_bindgen]
impl BingoGame {
    /// `items_text` holds one tile item per line. `settings` may be an object,
    /// a JSON string, or omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(items_text: &str, settings: JsValue) -> Result<BingoGame, JsError> {
        let settings = settings_from_js(settings)?;
        let session = BingoSession::new(
            TilePool::from_text(items_text),
            settings,
            &mut rand::thread_rng(),
        )?;
        Ok(Self { session })
    }

    /// Returns `{ revealed, result, celebration }`.
    pub fn toggle(&mut self, tile_id: &str) -> Result<JsValue, JsError> {
        let outcome = self.session.toggle(tile_id)?;
        to_js(&outcome)
    }

    pub fn randomize(&mut self) -> Result<(), JsError> {
        Ok(self.session.randomize(&mut rand::thread_rng())?)
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    #[wasm_bindgen(js_name = applySettings)]
    pub fn apply_settings(&mut self, settings: JsValue) -> Result<(), JsError> {
        let settings = settings_from_js(settings)?;
        Ok(self.session.apply_settings(settings, &mut rand::thread_rng())?)
    }

    #[wasm_bindgen(js_name = gridSize)]
    pub fn grid_size(&self) -> usize {
        self.session.grid_size()
    }

    /// The card as `{ gridSize, tiles: [{ id, text, isFree }] }`.
    pub fn card(&self) -> Result<JsValue, JsError> {
        to_js(self.session.card())
    }

    pub fn revealed(&self) -> Vec<String> {
        self.session.revealed().map(|tile| tile.to_string()).collect()
    }

    pub fn highlighted(&self) -> Vec<String> {
        self.session
            .highlighted()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[wasm_bindgen(js_name = winState)]
    pub fn win_state(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.detect())
    }
}
