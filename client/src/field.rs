// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::validation::FieldState;

/// A form input bound to a controller along with the slot its messages are shown in
pub trait Field {
	/// Identifier the field's message slot is keyed by
	fn id(&self) -> String;

	fn value(&self) -> String;

	/// Replaces the message shown for this field and marks the field with the given state.
	fn show(&self, message: &str, state: FieldState);

	fn focus(&self) {}
}

/// The meter displaying password strength as a level from 0 to 4
pub trait StrengthMeter {
	fn set_level(&self, level: u8);
}

/// An input whose contents can be masked
pub trait MaskableInput {
	fn is_masked(&self) -> bool;
	fn set_masked(&self, masked: bool);
}

/// The control that switches a [`MaskableInput`] between masked and plain text
pub trait ToggleControl {
	fn set_label(&self, label: &str);
	fn set_pressed(&self, pressed: bool);
}
