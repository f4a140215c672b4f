// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use practice_forms_shared::messages::user_register::EMAIL_CHECK_PATH;
use std::fmt;
use std::num::ParseIntError;
use std::time::Duration;

/// Quiet period after an email blur before availability is checked
pub const DEFAULT_AVAILABILITY_DELAY: Duration = Duration::from_millis(300);

/// Form action suffix identifying the registration form
pub const REGISTRATION_SUFFIX: &str = "/register";

#[derive(Debug)]
pub enum ConfigError {
	InvalidDelay(ParseIntError),
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidDelay(error) => write!(f, "availability check delay is not a number of milliseconds: {}", error),
		}
	}
}

impl From<ParseIntError> for ConfigError {
	fn from(error: ParseIntError) -> Self {
		Self::InvalidDelay(error)
	}
}

/// Settings for an account form controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
	pub check_email_endpoint: String,
	pub registration_suffix: String,
	pub availability_delay: Duration,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			check_email_endpoint: String::from(EMAIL_CHECK_PATH),
			registration_suffix: String::from(REGISTRATION_SUFFIX),
			availability_delay: DEFAULT_AVAILABILITY_DELAY,
		}
	}
}

impl FormConfig {
	/// Applies the overrides a form carries in its `data-check-email-url` and `data-check-delay-ms` attributes.
	///
	/// # Errors
	///
	/// Fails when the delay isn't a whole number of milliseconds. The endpoint override is still applied in that case.
	pub fn apply_overrides(&mut self, endpoint: Option<String>, delay_ms: Option<String>) -> Result<(), ConfigError> {
		if let Some(endpoint) = endpoint.filter(|endpoint| !endpoint.trim().is_empty()) {
			self.check_email_endpoint = endpoint;
		}
		if let Some(delay_ms) = delay_ms {
			let millis: u64 = delay_ms.trim().parse()?;
			self.availability_delay = Duration::from_millis(millis);
		}
		Ok(())
	}

	/// Whether a form submitting to `action` is the registration form
	pub fn is_registration_target(&self, action: &str) -> bool {
		action.ends_with(&self.registration_suffix)
	}
}
