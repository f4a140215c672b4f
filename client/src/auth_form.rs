// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::availability::AvailabilityCheck;
use crate::field::{Field, StrengthMeter};
use crate::strength::assess_strength;
use crate::validation::{validate_confirmation, validate_email, validate_name, validate_password};
use std::rc::Rc;

/// The inputs of an account form the controller knows how to validate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
	Email,
	Password,
	Confirm,
	Name,
}

/// The fields found on a particular account form. Login forms, for instance, have no name or confirmation field.
#[derive(Default)]
pub struct AuthFields {
	pub email: Option<Rc<dyn Field>>,
	pub password: Option<Rc<dyn Field>>,
	pub confirm: Option<Rc<dyn Field>>,
	pub name: Option<Rc<dyn Field>>,
}

impl AuthFields {
	pub fn get(&self, kind: FieldKind) -> Option<&Rc<dyn Field>> {
		match kind {
			FieldKind::Email => self.email.as_ref(),
			FieldKind::Password => self.password.as_ref(),
			FieldKind::Confirm => self.confirm.as_ref(),
			FieldKind::Name => self.name.as_ref(),
		}
	}
}

/// Inline validation for the registration and login forms
pub struct AuthFormController {
	fields: AuthFields,
	strength_meter: Option<Rc<dyn StrengthMeter>>,
	availability: Option<AvailabilityCheck>,
}

impl AuthFormController {
	/// Creates a controller over the given fields. `availability` should only be provided for the registration form.
	pub fn new(
		fields: AuthFields,
		strength_meter: Option<Rc<dyn StrengthMeter>>,
		availability: Option<AvailabilityCheck>,
	) -> Self {
		Self {
			fields,
			strength_meter,
			availability,
		}
	}

	pub fn on_blur(&self, kind: FieldKind) {
		if kind == FieldKind::Email {
			self.check_email_availability();
		} else {
			self.validate(kind);
		}
	}

	pub fn on_input(&self, kind: FieldKind) {
		match kind {
			FieldKind::Password => {
				self.refresh_strength();
				let confirm_filled = self.fields.confirm.as_ref().is_some_and(|confirm| !confirm.value().is_empty());
				if confirm_filled {
					self.validate(FieldKind::Confirm);
				}
			}
			FieldKind::Email => {
				if !self.validate(FieldKind::Email) {
					if let Some(availability) = self.availability.as_ref() {
						availability.cancel_pending();
					}
				}
			}
			kind => {
				self.validate(kind);
			}
		}
	}

	/// Validates every field and reports whether the form may be submitted.
	pub fn on_submit(&self) -> bool {
		let results = [
			self.validate(FieldKind::Name),
			self.validate(FieldKind::Email),
			self.validate(FieldKind::Password),
			self.validate(FieldKind::Confirm),
		];
		results.into_iter().all(|valid| valid)
	}

	/// Validates one field and shows the result on it. Fields missing from the form are always valid.
	pub fn validate(&self, kind: FieldKind) -> bool {
		let Some(field) = self.fields.get(kind) else {
			return true;
		};
		let value = field.value();
		let validation = match kind {
			FieldKind::Email => validate_email(&value),
			FieldKind::Name => validate_name(&value),
			FieldKind::Password => validate_password(&value),
			FieldKind::Confirm => {
				let password = self.fields.password.as_ref().map(|password| password.value()).unwrap_or_default();
				validate_confirmation(&value, &password)
			}
		};

		if kind == FieldKind::Password && validation.valid {
			self.refresh_strength();
		} else {
			field.show(&validation.message, validation.state);
		}
		validation.valid
	}

	/// Shows the strength of the current password on the password field and the meter.
	pub fn refresh_strength(&self) {
		let Some(password) = self.fields.password.as_ref() else {
			return;
		};
		let assessment = assess_strength(&password.value());
		if let Some(meter) = self.strength_meter.as_ref() {
			meter.set_level(assessment.meter);
		}
		password.show(assessment.label, assessment.state);
	}

	/// Validates the email format and, on the registration form, schedules an availability check for a well-formed
	/// address.
	pub fn check_email_availability(&self) {
		if !self.validate(FieldKind::Email) {
			return;
		}
		let (Some(availability), Some(email)) = (self.availability.as_ref(), self.fields.email.as_ref()) else {
			return;
		};
		availability.request(Rc::clone(email));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::availability::testing::ScriptedLookup;
	use crate::field::testing::{MockField, MockMeter};
	use crate::task::testing::ManualScheduler;
	use crate::validation::FieldState;
	use futures::executor::LocalPool;
	use practice_forms_shared::messages::user_register::EmailCheckResponse;
	use std::time::Duration;

	struct Form {
		email: Rc<MockField>,
		password: Rc<MockField>,
		confirm: Rc<MockField>,
		name: Rc<MockField>,
		meter: Rc<MockMeter>,
		scheduler: ManualScheduler,
		lookup: Rc<ScriptedLookup>,
		pool: LocalPool,
		controller: AuthFormController,
	}

	fn form(registration: bool) -> Form {
		let email = Rc::new(MockField::new("register_email", ""));
		let password = Rc::new(MockField::new("register_password", ""));
		let confirm = Rc::new(MockField::new("register_confirm", ""));
		let name = Rc::new(MockField::new("register_name", ""));
		let meter = Rc::new(MockMeter::default());
		let scheduler = ManualScheduler::default();
		let lookup = Rc::new(ScriptedLookup::default());
		let pool = LocalPool::new();

		let availability = registration.then(|| {
			AvailabilityCheck::new(
				Duration::from_millis(300),
				Rc::new(scheduler.clone()),
				Rc::new(pool.spawner()),
				lookup.clone(),
			)
		});
		let fields = AuthFields {
			email: Some(email.clone()),
			password: Some(password.clone()),
			confirm: Some(confirm.clone()),
			name: Some(name.clone()),
		};
		let controller = AuthFormController::new(fields, Some(meter.clone()), availability);

		Form {
			email,
			password,
			confirm,
			name,
			meter,
			scheduler,
			lookup,
			pool,
			controller,
		}
	}

	fn shown(message: &str, state: FieldState) -> Option<(String, FieldState)> {
		Some((String::from(message), state))
	}

	#[test]
	fn invalid_email_blur_skips_availability() {
		let form = form(true);
		form.email.set_value("not-an-email");
		form.controller.on_blur(FieldKind::Email);

		assert_eq!(form.email.last_shown(), shown("Enter a valid email address", FieldState::Error));
		assert_eq!(form.scheduler.pending(), 0);
	}

	#[test]
	fn valid_email_blur_checks_availability_on_registration() {
		let mut form = form(true);
		form.email.set_value("learner@example.com");
		form.controller.on_blur(FieldKind::Email);
		assert_eq!(form.email.last_shown(), shown("", FieldState::Success));
		assert_eq!(form.scheduler.pending(), 1);

		form.scheduler.fire_all();
		form.lookup.respond(Ok(EmailCheckResponse { available: false }));
		form.pool.run_until_stalled();
		assert_eq!(form.email.last_shown(), shown("Email already registered", FieldState::Error));
	}

	#[test]
	fn login_form_never_checks_availability() {
		let form = form(false);
		form.email.set_value("learner@example.com");
		form.controller.on_blur(FieldKind::Email);
		form.controller.on_blur(FieldKind::Email);
		assert_eq!(form.scheduler.pending(), 0);
		assert!(form.lookup.requests().is_empty());
	}

	#[test]
	fn repeated_blurs_fire_one_check() {
		let form = form(true);
		form.email.set_value("learner@example.com");
		for _ in 0..3 {
			form.controller.on_blur(FieldKind::Email);
		}
		assert_eq!(form.scheduler.pending(), 1);
		form.scheduler.fire_all();
		assert_eq!(form.lookup.requests().len(), 1);
	}

	#[test]
	fn password_typing_updates_strength() {
		let form = form(false);
		form.password.set_value("abc");
		form.controller.on_input(FieldKind::Password);
		assert_eq!(form.password.last_shown(), shown("Weak password", FieldState::Error));
		assert_eq!(form.meter.level.get(), Some(0));

		form.password.set_value("Abcdef1!");
		form.controller.on_input(FieldKind::Password);
		assert_eq!(form.password.last_shown(), shown("Strong password", FieldState::Success));
		assert_eq!(form.meter.level.get(), Some(4));
	}

	#[test]
	fn clearing_password_resets_without_error() {
		let form = form(false);
		form.password.set_value("Abcdef1!");
		form.controller.on_input(FieldKind::Password);
		form.password.set_value("");
		form.controller.on_input(FieldKind::Password);
		assert_eq!(form.password.last_shown(), shown("", FieldState::Neutral));
		assert_eq!(form.meter.level.get(), Some(0));
	}

	#[test]
	fn password_blur_reports_length_before_strength() {
		let form = form(false);
		form.password.set_value("abc");
		form.controller.on_blur(FieldKind::Password);
		assert_eq!(form.password.last_shown(), shown("Use at least 6 characters", FieldState::Error));

		form.password.set_value("abcdef1");
		form.controller.on_blur(FieldKind::Password);
		assert_eq!(form.password.last_shown(), shown("Fair password", FieldState::Success));
	}

	#[test]
	fn confirmation_follows_password_edits() {
		let form = form(false);
		form.password.set_value("pass12");
		form.confirm.set_value("pass1");
		form.controller.on_input(FieldKind::Confirm);
		assert_eq!(form.confirm.last_shown(), shown("Passwords do not match", FieldState::Error));

		form.password.set_value("pass1");
		form.controller.on_input(FieldKind::Password);
		assert_eq!(form.confirm.last_shown(), shown("Passwords match", FieldState::Success));

		form.password.set_value("pass1x");
		form.controller.on_input(FieldKind::Password);
		assert_eq!(form.confirm.last_shown(), shown("Passwords do not match", FieldState::Error));
	}

	#[test]
	fn empty_confirmation_untouched_by_password_typing() {
		let form = form(false);
		form.password.set_value("pass12");
		form.controller.on_input(FieldKind::Password);
		assert_eq!(form.confirm.shown_count(), 0);
	}

	#[test]
	fn submit_blocked_and_all_fields_marked() {
		let form = form(false);
		form.email.set_value("learner@example.com");
		assert!(!form.controller.on_submit());

		assert_eq!(form.name.last_shown(), shown("Full name is required", FieldState::Error));
		assert_eq!(form.email.last_shown(), shown("", FieldState::Success));
		assert_eq!(form.password.last_shown(), shown("Password is required", FieldState::Error));
		assert_eq!(form.confirm.last_shown(), shown("Confirm your password", FieldState::Error));
	}

	#[test]
	fn submit_allowed_when_everything_is_valid() {
		let form = form(true);
		form.name.set_value("Ada Lovelace");
		form.email.set_value("ada@example.com");
		form.password.set_value("abcdef");
		form.confirm.set_value("abcdef");
		assert!(form.controller.on_submit());
		// Weak but long enough passwords don't block submission
		assert_eq!(form.password.last_shown(), shown("Weak password", FieldState::Error));
		assert_eq!(form.scheduler.pending(), 0);
	}

	#[test]
	fn missing_fields_are_skipped() {
		let email = Rc::new(MockField::new("login_email", "ada@example.com"));
		let password = Rc::new(MockField::new("login_password", "secret"));
		let fields = AuthFields {
			email: Some(email.clone()),
			password: Some(password.clone()),
			..AuthFields::default()
		};
		let controller = AuthFormController::new(fields, None, None);
		assert!(controller.on_submit());
		assert!(controller.validate(FieldKind::Name));
		assert!(controller.validate(FieldKind::Confirm));
		assert_eq!(password.last_shown(), shown("Weak password", FieldState::Error));
	}

	#[test]
	fn editing_to_invalid_email_drops_pending_check() {
		let mut form = form(true);
		form.email.set_value("ok@example.com");
		form.controller.on_blur(FieldKind::Email);
		assert_eq!(form.scheduler.pending(), 1);

		form.email.set_value("not-an-email");
		form.controller.on_input(FieldKind::Email);
		assert_eq!(form.scheduler.pending(), 0);

		form.scheduler.fire_all();
		form.pool.run_until_stalled();
		assert!(form.lookup.requests().is_empty());
		assert_eq!(form.email.last_shown(), shown("Enter a valid email address", FieldState::Error));
	}

	#[test]
	fn valid_email_typing_keeps_pending_check() {
		let form = form(true);
		form.email.set_value("ok@example.com");
		form.controller.on_blur(FieldKind::Email);
		form.email.set_value("ok@example.org");
		form.controller.on_input(FieldKind::Email);
		assert_eq!(form.scheduler.pending(), 1);
		form.scheduler.fire_all();
		assert_eq!(form.lookup.requests(), vec![String::from("ok@example.org")]);
	}

	#[test]
	fn confirmation_without_password_field_never_matches() {
		let confirm = Rc::new(MockField::new("register_confirm", "secret1"));
		let fields = AuthFields {
			confirm: Some(confirm.clone()),
			..AuthFields::default()
		};
		let controller = AuthFormController::new(fields, None, None);
		assert!(!controller.on_submit());
		assert_eq!(confirm.last_shown(), shown("Passwords do not match", FieldState::Error));
	}
}
