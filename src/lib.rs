use wasm_bindgen::prelude::*;

pub mod card;
pub mod error;
pub mod game;
pub mod settings;
pub mod types;
pub mod wasm;
pub mod win;

pub use error::BingoError;
pub use types::{LineKind, TileId, WinLine, WinResult, WinType};
pub use win::{check_h_pattern, detect_wins, h_pattern_tiles};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
