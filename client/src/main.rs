// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::Document;

mod auth_form;
mod availability;
mod config;
mod dom;
mod editor;
mod error;
mod field;
mod js_def;
mod page;
mod password_toggle;
mod practice_start;
mod strength;
mod task;
mod validation;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let document = match page::document() {
		Ok(document) => document,
		Err(error) => {
			log::error!("Unable to load page behavior: {}", error);
			return;
		}
	};

	if document.ready_state() == "loading" {
		let loaded_document = document.clone();
		if let Err(error) = dom::listen(&document, "DOMContentLoaded", move |_| init(&loaded_document)) {
			log::error!("Unable to wait for the page to load: {:?}", error);
		}
	} else {
		init(&document);
	}
}

fn init(document: &Document) {
	if let Err(error) = page::init_page(document) {
		log::error!("Failed to bind page behavior: {}", error);
	}
}
