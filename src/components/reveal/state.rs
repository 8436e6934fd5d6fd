/// Intersection ratios are reported as floats at the threshold crossing; allow
/// for the browser rounding them just under the requested amount.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-shot visibility flag for a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
	#[default]
	Pending,
	Shown,
}

impl Visibility {
	/// Advances on an intersection report. `Shown` is terminal.
	pub fn observe(self, ratio: f64, amount: f64) -> Self {
		match self {
			Visibility::Shown => Visibility::Shown,
			Visibility::Pending if ratio > 0.0 && ratio + RATIO_TOLERANCE >= amount => {
				Visibility::Shown
			}
			Visibility::Pending => Visibility::Pending,
		}
	}

	pub fn is_shown(self) -> bool {
		self == Visibility::Shown
	}
}

/// Appearance parameters for a section's children: each child fades in over
/// `duration` seconds, rising `offset` pixels, `stagger` seconds after the
/// previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
	pub duration: f64,
	pub stagger: f64,
	pub offset: f64,
}

impl Transition {
	pub const ITEM: Transition = Transition {
		duration: 0.6,
		stagger: 0.1,
		offset: 30.0,
	};
	pub const CARD: Transition = Transition {
		duration: 0.8,
		stagger: 0.1,
		offset: 50.0,
	};
	pub const HERO: Transition = Transition {
		duration: 0.6,
		stagger: 0.2,
		offset: 30.0,
	};
	pub const TITLE: Transition = Transition {
		duration: 1.0,
		stagger: 0.2,
		offset: 50.0,
	};
	pub const SHOWCASE: Transition = Transition {
		duration: 0.8,
		stagger: 0.2,
		offset: 50.0,
	};
	pub const NODE: Transition = Transition {
		duration: 0.8,
		stagger: 0.1,
		offset: 0.0,
	};

	pub fn delay(&self, index: usize) -> f64 {
		index as f64 * self.stagger
	}

	/// Inline custom properties consumed by `.reveal-item` in the stylesheet.
	pub fn style(&self, index: usize) -> String {
		format!(
			"--reveal-delay: {:.2}s; --reveal-duration: {:.2}s; --reveal-offset: {}px;",
			self.delay(index),
			self.duration,
			self.offset
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shown_is_terminal() {
		let v = Visibility::Pending.observe(0.5, 0.3);
		assert!(v.is_shown());
		assert!(v.observe(0.0, 0.3).is_shown());
	}

	#[test]
	fn below_threshold_stays_pending() {
		assert_eq!(Visibility::Pending.observe(0.05, 0.1), Visibility::Pending);
		assert_eq!(Visibility::Pending.observe(0.0, 0.0), Visibility::Pending);
		assert_eq!(Visibility::Pending.observe(0.0999, 0.1), Visibility::Shown);
	}

	#[test]
	fn stagger_grows_linearly() {
		let t = Transition::HERO;
		assert_eq!(t.delay(0), 0.0);
		assert!((t.delay(3) - 0.6).abs() < 1e-9);
		assert_eq!(
			Transition::ITEM.style(2),
			"--reveal-delay: 0.20s; --reveal-duration: 0.60s; --reveal-offset: 30px;"
		);
	}
}
