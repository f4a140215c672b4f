// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors that can occur while binding behavior to the page
#[derive(Debug)]
pub enum PageError {
	NoWindow,
	NoDocument,
	Dom(String),
}

impl From<JsValue> for PageError {
	fn from(error: JsValue) -> Self {
		let description = error.as_string().unwrap_or_else(|| format!("{:?}", error));
		Self::Dom(description)
	}
}

impl fmt::Display for PageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => write!(f, "No browser window is available"),
			Self::NoDocument => write!(f, "The browser window has no document"),
			Self::Dom(error) => write!(f, "A page operation failed: {}", error),
		}
	}
}
