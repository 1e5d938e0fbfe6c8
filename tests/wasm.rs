#![cfg(target_arch = "wasm32")]

use bingo::wasm::{BingoGame, check_h_pattern_js, detect_wins_js, h_pattern_tiles_js};
use js_sys::{Array, Reflect};
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

fn field(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

fn ok<T>(result: Result<T, JsError>) -> T {
    result.map_err(JsValue::from).unwrap()
}

fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[wasm_bindgen_test]
fn ready_probe() {
    assert!(bingo::wasm_ready());
}

#[wasm_bindgen_test]
fn no_win_has_null_win_type() {
    let result = ok(detect_wins_js(strings(&["0-0"]), 5));

    assert!(field(&result, "winType").is_null());
    assert_eq!(field(&result, "lineCount").as_f64(), Some(0.0));
    assert_eq!(field(&result, "isHPattern").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn row_win_uses_js_shapes() {
    let result = ok(detect_wins_js(strings(&["1-0", "1-1", "1-2"]), 3));

    assert_eq!(field(&result, "winType").as_string().as_deref(), Some("single"));
    let lines = Array::from(&field(&result, "winningLines"));
    assert_eq!(lines.length(), 1);
    let line = lines.get(0);
    assert_eq!(field(&line, "type").as_string().as_deref(), Some("row"));
    assert_eq!(field(&line, "index").as_f64(), Some(1.0));
    let tiles = Array::from(&field(&result, "winningTiles"));
    assert_eq!(tiles.get(2).as_string().as_deref(), Some("1-2"));
}

#[wasm_bindgen_test]
fn h_pattern_exports() {
    let tiles = h_pattern_tiles_js(5);
    assert_eq!(tiles.len(), 13);
    assert!(check_h_pattern_js(tiles, 5));
    assert!(!check_h_pattern_js(h_pattern_tiles_js(4), 4));
}

#[wasm_bindgen_test]
fn game_toggles_and_celebrates() {
    let items: String = (0..30).map(|i| format!("item {i}\n")).collect();
    let mut game = ok(BingoGame::new(&items, JsValue::UNDEFINED));
    assert_eq!(game.grid_size(), 5);

    for col in 0..4 {
        let outcome = ok(game.toggle(&format!("0-{col}")));
        assert!(field(&outcome, "celebration").is_null());
    }
    let outcome = ok(game.toggle("0-4"));
    let celebration = field(&outcome, "celebration");
    assert_eq!(
        field(&celebration, "message").as_string().as_deref(),
        Some("BINGO!")
    );
    assert_eq!(game.highlighted().len(), 5);

    ok(game.randomize());
    assert!(game.revealed().is_empty());
}

#[wasm_bindgen_test]
fn bad_tile_id_throws() {
    let items: String = (0..30).map(|i| format!("item {i}\n")).collect();
    let mut game = ok(BingoGame::new(&items, JsValue::NULL));

    assert!(game.toggle("nope").is_err());
}

#[wasm_bindgen_test]
fn settings_accept_json_text() {
    let items: String = (0..30).map(|i| format!("item {i}\n")).collect();
    let settings = JsValue::from_str(r#"{"grid_size": "3x3", "free_center": false}"#);
    let mut game = ok(BingoGame::new(&items, settings));
    assert_eq!(game.grid_size(), 3);

    ok(game.apply_settings(JsValue::from_str(r#"{"grid_size": "7x7"}"#)));
    assert_eq!(game.grid_size(), 7);

    assert!(BingoGame::new(&items, JsValue::from_str(r#"{"grid_size": "4x4"}"#)).is_err());
}
