use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
	/// Submits the current answer. Defined by the practice page's own script.
	#[wasm_bindgen(catch, js_name = submitAnswer)]
	pub fn submit_answer() -> Result<(), JsValue>;
}
