// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use practice_forms_shared::messages::user_register::PASSWORD_MIN_LENGTH;
use std::borrow::Cow;

/// The display state of a field and its message slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
	Neutral,
	Error,
	Success,
}

/// The outcome of running one validator against a field's current value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
	pub valid: bool,
	pub message: Cow<'static, str>,
	pub state: FieldState,
}

impl Validation {
	pub fn error(message: impl Into<Cow<'static, str>>) -> Self {
		Self {
			valid: false,
			message: message.into(),
			state: FieldState::Error,
		}
	}

	pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
		Self {
			valid: true,
			message: message.into(),
			state: FieldState::Success,
		}
	}
}

pub fn validate_email(value: &str) -> Validation {
	if value.trim().is_empty() {
		return Validation::error("Email is required");
	}
	if !is_email_shape(value) {
		return Validation::error("Enter a valid email address");
	}
	Validation::success("")
}

pub fn validate_name(value: &str) -> Validation {
	if value.trim().is_empty() {
		return Validation::error("Full name is required");
	}
	Validation::success("")
}

/// Checks presence and minimum length. A passing password gets its visible message from the strength assessment.
pub fn validate_password(value: &str) -> Validation {
	if value.trim().is_empty() {
		return Validation::error("Password is required");
	}
	if value.chars().count() < PASSWORD_MIN_LENGTH {
		return Validation::error(format!("Use at least {} characters", PASSWORD_MIN_LENGTH));
	}
	Validation::success("")
}

pub fn validate_confirmation(confirmation: &str, password: &str) -> Validation {
	if confirmation.trim().is_empty() {
		return Validation::error("Confirm your password");
	}
	if confirmation != password {
		return Validation::error("Passwords do not match");
	}
	Validation::success("Passwords match")
}

/// Checks a single address the way a browser checks an `<input type="email">` value.
pub fn is_email_shape(value: &str) -> bool {
	let Some((local, domain)) = value.trim().split_once('@') else {
		return false;
	};
	if local.is_empty() || !local.chars().all(is_local_part_char) {
		return false;
	}
	!domain.is_empty() && domain.split('.').all(is_domain_label)
}

fn is_local_part_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
	if label.is_empty() || label.len() > 63 {
		return false;
	}
	if label.starts_with('-') || label.ends_with('-') {
		return false;
	}
	label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
