// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::field::Field;
use crate::task::{PendingTimer, Scheduler};
use crate::validation::{validate_email, FieldState};
use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::{LocalSpawn, LocalSpawnExt};
use gloo_net::http::Request;
use practice_forms_shared::messages::user_register::{EmailCheckResponse, EMAIL_CHECK_QUERY_KEY};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Errors that can occur when asking the server whether an email address is available
#[derive(Debug)]
pub enum LookupError {
	Request(gloo_net::Error),
	Status(u16),
}

impl fmt::Display for LookupError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Request(error) => write!(f, "{}", error),
			Self::Status(status) => write!(f, "The server responded with status {}", status),
		}
	}
}

impl From<gloo_net::Error> for LookupError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

/// Dispatches availability requests for email addresses
pub trait AvailabilityLookup {
	fn lookup(&self, email: String) -> LocalBoxFuture<'static, Result<EmailCheckResponse, LookupError>>;
}

/// Looks up availability with a GET request to the check endpoint
pub struct HttpAvailabilityLookup {
	endpoint: String,
}

impl HttpAvailabilityLookup {
	pub fn new(endpoint: String) -> Self {
		Self { endpoint }
	}
}

impl AvailabilityLookup for HttpAvailabilityLookup {
	/// # Errors
	///
	/// The returned future fails when the request can't be sent, when the server doesn't answer with a success status,
	/// and when the body isn't the expected JSON.
	fn lookup(&self, email: String) -> LocalBoxFuture<'static, Result<EmailCheckResponse, LookupError>> {
		let endpoint = self.endpoint.clone();
		async move {
			let response = Request::get(&endpoint)
				.query([(EMAIL_CHECK_QUERY_KEY, email)])
				.send()
				.await?;
			if !response.ok() {
				return Err(LookupError::Status(response.status()));
			}
			Ok(response.json().await?)
		}
		.boxed_local()
	}
}

/// Debounced availability checking for one email field.
///
/// Each request replaces whatever check is still waiting on its timer. Once a timer fires, the lookup runs to
/// completion and its result is shown even if a newer check has been requested since.
pub struct AvailabilityCheck {
	delay: Duration,
	scheduler: Rc<dyn Scheduler>,
	spawner: Rc<dyn LocalSpawn>,
	lookup: Rc<dyn AvailabilityLookup>,
	pending: RefCell<Option<Box<dyn PendingTimer>>>,
}

impl AvailabilityCheck {
	pub fn new(
		delay: Duration,
		scheduler: Rc<dyn Scheduler>,
		spawner: Rc<dyn LocalSpawn>,
		lookup: Rc<dyn AvailabilityLookup>,
	) -> Self {
		Self {
			delay,
			scheduler,
			spawner,
			lookup,
			pending: RefCell::new(None),
		}
	}

	/// Schedules a check of the address in `field`, read when the timer fires. Addresses that aren't well formed by
	/// then are not looked up.
	pub fn request(&self, field: Rc<dyn Field>) {
		self.cancel_pending();

		let spawner = Rc::clone(&self.spawner);
		let lookup = Rc::clone(&self.lookup);
		let timer = self.scheduler.schedule(
			self.delay,
			Box::new(move || {
				let email = field.value();
				if !validate_email(&email).valid {
					return;
				}
				log::debug!("Checking email availability for field {}", field.id());
				let request = lookup.lookup(email);
				let check = async move {
					let outcome = request.await;
					show_outcome(&*field, outcome);
				};
				if let Err(error) = spawner.spawn_local(check) {
					log::error!("Failed to start email availability check: {}", error);
				}
			}),
		);
		*self.pending.borrow_mut() = Some(timer);
	}

	/// Drops the check waiting on its timer, if any. A lookup already sent is unaffected.
	pub fn cancel_pending(&self) {
		let previous = self.pending.borrow_mut().take();
		if let Some(previous) = previous {
			previous.cancel();
		}
	}
}

fn show_outcome(field: &dyn Field, outcome: Result<EmailCheckResponse, LookupError>) {
	match outcome {
		Ok(EmailCheckResponse { available: true }) => field.show("Email available", FieldState::Success),
		Ok(EmailCheckResponse { available: false }) => field.show("Email already registered", FieldState::Error),
		Err(error) => {
			// Failing to check shouldn't keep anyone from registering
			log::warn!("Email availability check failed: {}", error);
			field.show("", FieldState::Success);
		}
	}
}
