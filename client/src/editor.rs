// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::{elements_of, listen};
use crate::error::PageError;
use crate::js_def::submit_answer;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlTextAreaElement, KeyboardEvent};

pub const INDENT: &str = "    ";

const ALERT_DISMISS_DELAY_MS: u32 = 5000;
const ALERT_FADE_MS: u32 = 500;
const PROGRESS_RESTORE_DELAY_MS: u32 = 100;
const SUBMIT_ANSWER_BUTTON: &str = "button[onclick=\"submitAnswer()\"]";

/// Replaces the selection `start..end` of `value` with an indent. Offsets are UTF-16 code units, as the browser
/// reports them. Returns the new text and where the caret goes.
pub fn indent_selection(value: &str, start: u32, end: u32) -> (String, u32) {
	let start_byte = utf16_to_byte_offset(value, start);
	let end_byte = utf16_to_byte_offset(value, end.max(start));

	let mut indented = String::with_capacity(value.len() + INDENT.len());
	indented.push_str(&value[..start_byte]);
	indented.push_str(INDENT);
	indented.push_str(&value[end_byte..]);

	let caret = value[..start_byte].encode_utf16().count() + INDENT.len();
	(indented, u32::try_from(caret).unwrap_or(u32::MAX))
}

fn utf16_to_byte_offset(value: &str, offset: u32) -> usize {
	let mut units = 0;
	for (index, c) in value.char_indices() {
		if units >= offset {
			return index;
		}
		units += c.len_utf16() as u32;
	}
	value.len()
}

/// Wraps each line of a code block's markup with its line number.
pub fn number_lines(html: &str) -> String {
	html.split('\n')
		.enumerate()
		.map(|(index, line)| {
			format!(
				"<span class=\"code-line\"><span class=\"line-number\">{}</span>{}</span>",
				index + 1,
				line
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

pub fn is_submit_shortcut(ctrl: bool, meta: bool, key: &str) -> bool {
	(ctrl || meta) && key == "Enter"
}

/// Binds the code editor, code listing and notification behaviors present on the page.
pub fn bind_editor_page(document: &Document) -> Result<(), PageError> {
	for textarea in elements_of::<HtmlTextAreaElement>(document.query_selector_all("textarea")?) {
		let resized = textarea.clone();
		listen(&textarea, "input", move |_| auto_resize(&resized))?;
	}

	let code_editor = document
		.get_element_by_id("code-editor")
		.and_then(|element| element.dyn_into::<HtmlTextAreaElement>().ok());
	if let Some(code_editor) = code_editor {
		let indented = code_editor.clone();
		listen(&code_editor, "keydown", move |event: Event| {
			let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
				return;
			};
			if event.key() != "Tab" {
				return;
			}
			event.prevent_default();
			if let Err(error) = indent_editor(&indented) {
				log::error!("Failed to indent the code editor: {:?}", error);
			}
		})?;
	}

	for container in elements_of::<Element>(document.query_selector_all("[data-line-numbers]")?) {
		let target = container.query_selector("code")?.unwrap_or(container);
		target.set_inner_html(&number_lines(&target.inner_html()));
	}

	for alert in elements_of::<HtmlElement>(document.query_selector_all(".alert")?) {
		schedule_dismissal(alert);
	}

	for fill in elements_of::<HtmlElement>(document.query_selector_all(".progress-fill")?) {
		animate_progress(&fill)?;
	}

	bind_submit_shortcut(document)?;
	Ok(())
}

fn auto_resize(textarea: &HtmlTextAreaElement) {
	let style = textarea.style();
	let result = style
		.set_property("height", "auto")
		.and_then(|()| style.set_property("height", &format!("{}px", textarea.scroll_height())));
	if let Err(error) = result {
		log::error!("Failed to resize text area: {:?}", error);
	}
}

fn indent_editor(editor: &HtmlTextAreaElement) -> Result<(), JsValue> {
	let start = editor.selection_start()?.unwrap_or(0);
	let end = editor.selection_end()?.unwrap_or(start);
	let (indented, caret) = indent_selection(&editor.value(), start, end);
	editor.set_value(&indented);
	editor.set_selection_start(Some(caret))?;
	editor.set_selection_end(Some(caret))
}

fn schedule_dismissal(alert: HtmlElement) {
	Timeout::new(ALERT_DISMISS_DELAY_MS, move || {
		let style = alert.style();
		let result = style
			.set_property("opacity", "0")
			.and_then(|()| style.set_property("transition", "opacity 0.5s"));
		if let Err(error) = result {
			log::error!("Failed to fade out alert: {:?}", error);
		}
		Timeout::new(ALERT_FADE_MS, move || alert.remove()).forget();
	})
	.forget();
}

fn animate_progress(fill: &HtmlElement) -> Result<(), JsValue> {
	let style = fill.style();
	let width = style.get_property_value("width")?;
	style.set_property("width", "0%")?;
	Timeout::new(PROGRESS_RESTORE_DELAY_MS, move || {
		if let Err(error) = style.set_property("width", &width) {
			log::error!("Failed to restore progress width: {:?}", error);
		}
	})
	.forget();
	Ok(())
}

fn bind_submit_shortcut(document: &Document) -> Result<(), JsValue> {
	let shortcut_document = document.clone();
	listen(document, "keydown", move |event: Event| {
		let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
			return;
		};
		if !is_submit_shortcut(event.ctrl_key(), event.meta_key(), &event.key()) {
			return;
		}
		match shortcut_document.query_selector(SUBMIT_ANSWER_BUTTON) {
			Ok(Some(_)) => (),
			Ok(None) => return,
			Err(error) => {
				log::error!("Failed to look for the answer submission button: {:?}", error);
				return;
			}
		}
		event.prevent_default();
		if let Err(error) = submit_answer() {
			log::error!("Failed to submit answer: {:?}", error);
		}
	})
}
