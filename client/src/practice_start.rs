// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::field::Field;
use crate::validation::FieldState;
use std::rc::Rc;

pub const CATEGORY_REQUIRED: &str = "Please select a category before starting.";

/// Keeps a practice session from starting until a category is chosen
pub struct PracticeStartGate {
	category: Option<Rc<dyn Field>>,
}

impl PracticeStartGate {
	pub fn new(category: Option<Rc<dyn Field>>) -> Self {
		Self { category }
	}

	pub fn on_change(&self) {
		if let Some(category) = self.category.as_ref() {
			if !category.value().is_empty() {
				category.show("", FieldState::Neutral);
			}
		}
	}

	/// Reports whether the form may be submitted, pointing the user at the category selection if not.
	pub fn on_submit(&self) -> bool {
		let Some(category) = self.category.as_ref() else {
			return true;
		};
		if !category.value().is_empty() {
			return true;
		}
		category.show(CATEGORY_REQUIRED, FieldState::Error);
		category.focus();
		false
	}
}
