// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::validation::FieldState;
use practice_forms_shared::messages::user_register::PASSWORD_MIN_LENGTH;

/// Length at which a password earns its second length point
pub const LONG_PASSWORD_LENGTH: usize = 10;

/// The highest level the strength meter can show
pub const METER_MAX: u8 = 4;

/// What the password field and strength meter should show for a password
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrengthAssessment {
	pub score: u8,
	pub meter: u8,
	pub label: &'static str,
	pub state: FieldState,
}

/// Scores a password from 0 to 5, one point per satisfied condition.
pub fn strength_score(password: &str) -> u8 {
	let length = password.chars().count();
	let conditions = [
		length >= PASSWORD_MIN_LENGTH,
		length >= LONG_PASSWORD_LENGTH,
		password.chars().any(|c| c.is_ascii_uppercase()),
		password.chars().any(|c| c.is_ascii_digit()),
		password.chars().any(|c| !c.is_ascii_alphanumeric()),
	];
	conditions.into_iter().filter(|met| *met).count() as u8
}

pub fn assess_strength(password: &str) -> StrengthAssessment {
	let score = strength_score(password);
	let meter = score.min(METER_MAX);
	if password.is_empty() {
		return StrengthAssessment {
			score,
			meter,
			label: "",
			state: FieldState::Neutral,
		};
	}

	let (label, state) = match score {
		0 | 1 => ("Weak password", FieldState::Error),
		2 => ("Fair password", FieldState::Success),
		3 => ("Good password", FieldState::Success),
		_ => ("Strong password", FieldState::Success),
	};
	StrengthAssessment {
		score,
		meter,
		label,
		state,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn weak_short_password() {
		let assessment = assess_strength("abc");
		assert_eq!(assessment.score, 0);
		assert_eq!(assessment.label, "Weak password");
		assert_eq!(assessment.state, FieldState::Error);
	}

	#[test]
	fn strong_mixed_password() {
		let assessment = assess_strength("Abcdef1!");
		assert_eq!(assessment.score, 4);
		assert_eq!(assessment.meter, 4);
		assert_eq!(assessment.label, "Strong password");
		assert_eq!(assessment.state, FieldState::Success);
	}

	#[test]
	fn length_points_follow_thresholds() {
		assert_eq!(strength_score(&"a".repeat(PASSWORD_MIN_LENGTH - 1)), 0);
		assert_eq!(strength_score(&"a".repeat(PASSWORD_MIN_LENGTH)), 1);
		assert_eq!(strength_score(&"a".repeat(LONG_PASSWORD_LENGTH - 1)), 1);
		assert_eq!(strength_score(&"a".repeat(LONG_PASSWORD_LENGTH)), 2);
	}

	#[test]
	fn meter_is_clamped() {
		let assessment = assess_strength("Abcdefghij1!");
		assert_eq!(assessment.score, 5);
		assert_eq!(assessment.meter, METER_MAX);
	}

	#[test]
	fn labels_by_score() {
		assert_eq!(assess_strength("abcdef").label, "Weak password");
		assert_eq!(assess_strength("abcdef1").label, "Fair password");
		assert_eq!(assess_strength("Abcdef1").label, "Good password");
	}

	#[test]
	fn empty_password_resets() {
		let assessment = assess_strength("");
		assert_eq!(assessment.meter, 0);
		assert_eq!(assessment.label, "");
		assert_eq!(assessment.state, FieldState::Neutral);
	}

	proptest! {
		#[test]
		fn score_stays_in_range(password in any::<String>()) {
			prop_assert!(strength_score(&password) <= 5);
		}

		#[test]
		fn adding_a_category_never_lowers_the_score(password in "[ -~]{0,12}", extra in prop::sample::select(vec!['A', '7', '#', 'q'])) {
			let mut extended = password.clone();
			extended.push(extra);
			prop_assert!(strength_score(&extended) >= strength_score(&password));
		}
	}
}
