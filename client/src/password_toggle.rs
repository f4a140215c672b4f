// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::field::{MaskableInput, ToggleControl};

/// Flips `target` between masked and plain text and updates the control to match. Returns whether the input is now
/// revealed.
pub fn toggle_visibility(target: &dyn MaskableInput, control: &dyn ToggleControl) -> bool {
	let reveal = target.is_masked();
	target.set_masked(!reveal);
	control.set_label(if reveal { "Hide" } else { "Show" });
	control.set_pressed(reveal);
	reveal
}
