// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Shortest password the server accepts at registration
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Path of the endpoint answering whether an email address can still be registered
pub const EMAIL_CHECK_PATH: &str = "/auth/check-email";

/// Name of the query parameter carrying the email address for [`EMAIL_CHECK_PATH`]
pub const EMAIL_CHECK_QUERY_KEY: &str = "email";

/// Response data from the server for an email availability check
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct EmailCheckResponse {
	pub available: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_server_json() {
		let response: EmailCheckResponse = serde_json::from_str(r#"{"available": false}"#).unwrap();
		assert_eq!(response, EmailCheckResponse { available: false });
	}

	#[test]
	fn missing_availability_is_rejected() {
		assert!(serde_json::from_str::<EmailCheckResponse>("{}").is_err());
	}

	#[test]
	fn writes_server_json() {
		let json = serde_json::to_string(&EmailCheckResponse { available: true }).unwrap();
		assert_eq!(json, r#"{"available":true}"#);
	}
}
