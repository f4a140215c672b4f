// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::field::{Field, MaskableInput, StrengthMeter, ToggleControl};
use crate::validation::FieldState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement, NodeList};

/// Attaches `handler` to `target` for the rest of the page's lifetime.
pub fn listen(target: &EventTarget, event_type: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
	let closure = Closure::<dyn FnMut(Event)>::new(handler);
	target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Collects the nodes of a query result that are of type `T`
pub fn elements_of<T: JsCast>(nodes: NodeList) -> Vec<T> {
	(0..nodes.length())
		.filter_map(|index| nodes.get(index))
		.filter_map(|node| node.dyn_into::<T>().ok())
		.collect()
}

/// Finds the first element under `root` matching `selector` that is of type `T`
pub fn query_as<T: JsCast>(root: &Element, selector: &str) -> Result<Option<T>, JsValue> {
	Ok(root.query_selector(selector)?.and_then(|element| element.dyn_into::<T>().ok()))
}

/// Finds the element in `form` where messages for the field keyed by `key` are shown
pub fn message_slot(form: &Element, key: &str) -> Result<Option<Element>, JsValue> {
	form.query_selector(&format!("[data-message-for=\"{}\"]", key))
}

fn set_class(element: &Element, class: &str, present: bool) {
	if let Err(error) = element.class_list().toggle_with_force(class, present) {
		log::error!("Failed to update class {}: {:?}", class, error);
	}
}

pub enum FieldElement {
	Input(HtmlInputElement),
	Select(HtmlSelectElement),
}

impl FieldElement {
	fn html(&self) -> &HtmlElement {
		match self {
			Self::Input(input) => input,
			Self::Select(select) => select,
		}
	}

	fn value(&self) -> String {
		match self {
			Self::Input(input) => input.value(),
			Self::Select(select) => select.value(),
		}
	}
}

/// A form control on the page along with its message slot
pub struct DomField {
	element: FieldElement,
	message: Option<Element>,
	marks_input: bool,
}

impl DomField {
	/// Binds an input of `form`, showing its messages in the slot keyed by the input's ID. The input itself is marked
	/// valid or invalid along with the message.
	pub fn input(form: &Element, input: HtmlInputElement) -> Result<Self, JsValue> {
		let message = message_slot(form, &input.id())?;
		Ok(Self {
			element: FieldElement::Input(input),
			message,
			marks_input: true,
		})
	}

	/// Binds a select whose messages go to `message`. Only the message is styled.
	pub fn select(select: HtmlSelectElement, message: Option<Element>) -> Self {
		Self {
			element: FieldElement::Select(select),
			message,
			marks_input: false,
		}
	}
}

impl Field for DomField {
	fn id(&self) -> String {
		self.element.html().id()
	}

	fn value(&self) -> String {
		self.element.value()
	}

	fn show(&self, message: &str, state: FieldState) {
		let Some(slot) = self.message.as_ref() else {
			return;
		};
		slot.set_text_content(Some(message));
		set_class(slot, "is-error", state == FieldState::Error);
		set_class(slot, "is-success", state == FieldState::Success);
		if self.marks_input {
			let element = self.element.html();
			set_class(element, "input-invalid", state == FieldState::Error);
			set_class(element, "input-valid", state == FieldState::Success);
		}
	}

	fn focus(&self) {
		if let Err(error) = self.element.html().focus() {
			log::error!("Failed to focus {}: {:?}", self.id(), error);
		}
	}
}

impl StrengthMeter for Element {
	fn set_level(&self, level: u8) {
		if let Err(error) = self.set_attribute("data-strength", &level.to_string()) {
			log::error!("Failed to update strength meter: {:?}", error);
		}
	}
}

impl MaskableInput for HtmlInputElement {
	fn is_masked(&self) -> bool {
		self.type_() == "password"
	}

	fn set_masked(&self, masked: bool) {
		self.set_type(if masked { "password" } else { "text" });
	}
}

impl ToggleControl for Element {
	fn set_label(&self, label: &str) {
		self.set_text_content(Some(label));
	}

	fn set_pressed(&self, pressed: bool) {
		if let Err(error) = self.set_attribute("aria-pressed", if pressed { "true" } else { "false" }) {
			log::error!("Failed to update toggle state: {:?}", error);
		}
	}
}
