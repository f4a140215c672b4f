// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::auth_form::{AuthFields, AuthFormController, FieldKind};
use crate::availability::{AvailabilityCheck, HttpAvailabilityLookup};
use crate::config::FormConfig;
use crate::dom::{elements_of, listen, message_slot, query_as, DomField};
use crate::editor::bind_editor_page;
use crate::error::PageError;
use crate::field::{Field, StrengthMeter};
use crate::password_toggle::toggle_visibility;
use crate::practice_start::PracticeStartGate;
use crate::task::{BrowserScheduler, BrowserSpawner};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

const AUTH_INPUTS: [(FieldKind, &str); 4] = [
	(FieldKind::Email, "input[type=\"email\"]"),
	(FieldKind::Password, "input[name=\"password\"]"),
	(FieldKind::Confirm, "input[name=\"confirm_password\"]"),
	(FieldKind::Name, "input[name=\"name\"]"),
];

/// Gets the document of the current browser window.
pub fn document() -> Result<Document, PageError> {
	window().ok_or(PageError::NoWindow)?.document().ok_or(PageError::NoDocument)
}

/// Binds every behavior the page has elements for. Run once per page load.
///
/// # Errors
///
/// Fails when a DOM operation fails. Behaviors bound before the failure stay bound.
pub fn init_page(document: &Document) -> Result<(), PageError> {
	if let Some(form) = document.query_selector(".auth-form")? {
		bind_auth_form(&form)?;
	}
	bind_password_toggles(document)?;
	if let Some(form) = document.query_selector(".practice-form")? {
		bind_practice_form(&form)?;
	}
	bind_editor_page(document)?;
	Ok(())
}

fn form_config(form: &Element) -> FormConfig {
	let mut config = FormConfig::default();
	let overrides = config.apply_overrides(
		form.get_attribute("data-check-email-url"),
		form.get_attribute("data-check-delay-ms"),
	);
	if let Err(error) = overrides {
		log::warn!("Ignoring account form setting: {}", error);
	}
	config
}

fn bind_auth_form(form: &Element) -> Result<(), PageError> {
	let mut fields = AuthFields::default();
	let mut inputs: Vec<(FieldKind, HtmlInputElement)> = Vec::new();
	for (kind, selector) in AUTH_INPUTS {
		let Some(input) = query_as::<HtmlInputElement>(form, selector)? else {
			continue;
		};
		let field: Rc<dyn Field> = Rc::new(DomField::input(form, input.clone())?);
		let slot = match kind {
			FieldKind::Email => &mut fields.email,
			FieldKind::Password => &mut fields.password,
			FieldKind::Confirm => &mut fields.confirm,
			FieldKind::Name => &mut fields.name,
		};
		*slot = Some(field);
		inputs.push((kind, input));
	}

	let strength_meter = form
		.query_selector(".strength-meter")?
		.map(|meter| Rc::new(meter) as Rc<dyn StrengthMeter>);

	let config = form_config(form);
	let action = form
		.dyn_ref::<HtmlFormElement>()
		.map(|form| form.action())
		.unwrap_or_default();
	let availability = config.is_registration_target(&action).then(|| {
		AvailabilityCheck::new(
			config.availability_delay,
			Rc::new(BrowserScheduler),
			Rc::new(BrowserSpawner),
			Rc::new(HttpAvailabilityLookup::new(config.check_email_endpoint.clone())),
		)
	});
	let registration = availability.is_some();
	let controller = Rc::new(AuthFormController::new(fields, strength_meter, availability));

	for (kind, input) in inputs.iter() {
		let kind = *kind;
		let blur_controller = Rc::clone(&controller);
		listen(input, "blur", move |_| blur_controller.on_blur(kind))?;
		let input_controller = Rc::clone(&controller);
		listen(input, "input", move |_| input_controller.on_input(kind))?;
	}
	listen(form, "submit", move |event: Event| {
		if !controller.on_submit() {
			event.prevent_default();
		}
	})?;

	log::debug!(
		"Bound account form with {} fields (registration: {})",
		inputs.len(),
		registration
	);
	Ok(())
}

fn bind_password_toggles(document: &Document) -> Result<(), PageError> {
	for toggle in elements_of::<Element>(document.query_selector_all(".password-toggle")?) {
		let control = toggle.clone();
		let toggle_document = document.clone();
		listen(&toggle, "click", move |_| {
			let target = control
				.get_attribute("data-target")
				.and_then(|target_id| toggle_document.get_element_by_id(&target_id))
				.and_then(|target| target.dyn_into::<HtmlInputElement>().ok());
			if let Some(target) = target {
				toggle_visibility(&target, &control);
			}
		})?;
	}
	Ok(())
}

fn bind_practice_form(form: &Element) -> Result<(), PageError> {
	let select = query_as::<HtmlSelectElement>(form, "select[name=\"category\"]")?;
	let message = message_slot(form, "category")?;
	let category = select
		.clone()
		.map(|select| Rc::new(DomField::select(select, message)) as Rc<dyn Field>);
	let gate = Rc::new(PracticeStartGate::new(category));

	if let Some(select) = select {
		let change_gate = Rc::clone(&gate);
		listen(&select, "change", move |_| change_gate.on_change())?;
	}
	listen(form, "submit", move |event: Event| {
		if !gate.on_submit() {
			event.prevent_default();
		}
	})?;
	Ok(())
}
