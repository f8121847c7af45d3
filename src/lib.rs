//! WebAssembly crossword grid engine for the crossword authoring UI.
//!
//! Exports high-level functions callable from JavaScript via wasm-bindgen.
//! Puzzle documents cross the boundary as structured values through
//! serde-wasm-bindgen; every mutating export returns a complete new document
//! with the across/down slot lists re-derived and clue text carried over, so
//! the UI never holds stale word structure.

pub mod codec;
pub mod error;
pub mod grid;
pub mod solver;
pub mod types;
pub mod words;

pub use error::{PuzzleError, PuzzleResult};
pub use types::{Cell, Direction, Grid, PuzzleDocument, WordSlot};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use crate::solver::{self, SolveMode, DICTIONARY_CATALOG, STRATEGY_NAMES};
    use crate::types::{Grid, PuzzleDocument};
    use crate::{codec, error::PuzzleError};
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn init() {
        console_error_panic_hook::set_once();
    }

    fn to_js(doc: &PuzzleDocument) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(doc)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    fn from_js(doc: JsValue) -> Result<PuzzleDocument, JsValue> {
        serde_wasm_bindgen::from_value(doc)
            .map_err(|e| JsValue::from_str(&format!("Invalid document: {e}")))
    }

    fn err_js(e: PuzzleError) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Create a fresh all-open puzzle document.
    #[wasm_bindgen(js_name = "newPuzzle")]
    pub fn wasm_new_puzzle(size: usize) -> Result<JsValue, JsValue> {
        let grid = Grid::new(size).map_err(err_js)?;
        to_js(&PuzzleDocument::from_grid(grid))
    }

    /// Resize the grid, keeping the overlap and re-deriving slots.
    #[wasm_bindgen(js_name = "resizePuzzle")]
    pub fn wasm_resize_puzzle(doc: JsValue, new_size: usize) -> Result<JsValue, JsValue> {
        let doc = from_js(doc)?;
        let grid = doc.grid.resized(new_size).map_err(err_js)?;
        to_js(&doc.with_grid(grid))
    }

    /// Write a letter into a cell (empty string clears it).
    #[wasm_bindgen(js_name = "setCell")]
    pub fn wasm_set_cell(
        doc: JsValue,
        row: usize,
        col: usize,
        value: &str,
    ) -> Result<JsValue, JsValue> {
        let doc = from_js(doc)?;
        let mut grid = doc.grid.clone();
        grid.set_value(row, col, value).map_err(err_js)?;
        to_js(&doc.with_grid(grid))
    }

    /// Toggle a cell between open and blocked, optionally mirroring the
    /// toggle through the grid's center.
    #[wasm_bindgen(js_name = "toggleCell")]
    pub fn wasm_toggle_cell(
        doc: JsValue,
        row: usize,
        col: usize,
        symmetry: bool,
    ) -> Result<JsValue, JsValue> {
        let doc = from_js(doc)?;
        let mut grid = doc.grid.clone();
        if symmetry {
            grid.toggle_symmetric(row, col);
        } else {
            grid.toggle_enabled(row, col);
        }
        to_js(&doc.with_grid(grid))
    }

    /// Serialize a document to the text interchange format.
    #[wasm_bindgen(js_name = "exportText")]
    pub fn wasm_export_text(doc: JsValue) -> Result<String, JsValue> {
        Ok(codec::serialize(&from_js(doc)?))
    }

    /// Parse the text interchange format into a document.
    #[wasm_bindgen(js_name = "importText")]
    pub fn wasm_import_text(text: &str) -> Result<JsValue, JsValue> {
        let doc = codec::deserialize(text).map_err(err_js)?;
        to_js(&doc)
    }

    /// Encode the document's grid as a solver request payload.
    #[wasm_bindgen(js_name = "encodeSolverGrid")]
    pub fn wasm_encode_solver_grid(doc: JsValue) -> Result<String, JsValue> {
        Ok(solver::encode_grid(&from_js(doc)?.grid))
    }

    /// Merge a solver response back into the document. `full` selects the
    /// solve-fully mode; otherwise the response is treated as one step.
    #[wasm_bindgen(js_name = "applySolverGrid")]
    pub fn wasm_apply_solver_grid(
        doc: JsValue,
        response: &str,
        full: bool,
    ) -> Result<JsValue, JsValue> {
        let doc = from_js(doc)?;
        let mode = if full { SolveMode::Full } else { SolveMode::Step };
        let grid = solver::apply_solution(&doc.grid, response, mode).map_err(err_js)?;
        to_js(&doc.with_grid(grid))
    }

    /// Names of the solver's strategies, for display.
    #[wasm_bindgen(js_name = "strategyNames")]
    pub fn wasm_strategy_names() -> js_sys::Array {
        STRATEGY_NAMES.iter().map(|n| JsValue::from_str(n)).collect()
    }

    /// Names of the selectable word dictionaries.
    #[wasm_bindgen(js_name = "dictionaryNames")]
    pub fn wasm_dictionary_names() -> js_sys::Array {
        DICTIONARY_CATALOG
            .iter()
            .map(|(n, _)| JsValue::from_str(n))
            .collect()
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM crossword engine ready".to_string()
    }
}
