//! Timed spawners for falling messages and meteors.
//!
//! Each spawner runs on its own fixed interval and passes an independent
//! Bernoulli gate before creating anything. Probabilities and intervals are
//! named constants so the spawn behavior stays statistically testable.

use std::f64::consts::FRAC_PI_4;

use super::state::{FallingText, Meteor, SceneState};

/// Milliseconds between falling-text spawn attempts.
pub const TEXT_SPAWN_INTERVAL_MS: i32 = 2000;
/// Probability that a text spawn attempt produces a message.
pub const TEXT_SPAWN_CHANCE: f64 = 0.8;
/// Milliseconds between meteor spawn attempts.
pub const METEOR_SPAWN_INTERVAL_MS: i32 = 5000;
/// Probability that a meteor spawn attempt produces a meteor.
pub const METEOR_SPAWN_CHANCE: f64 = 0.5;

impl SceneState {
	/// One falling-text spawn attempt.
	///
	/// `measure` reports the rendered width of a message at a given font
	/// size (canvas `measureText` in production, a stub under test) so the
	/// text can be placed fully inside the viewport. When the text is wider
	/// than the viewport it is pinned to the left edge.
	pub fn try_spawn_text(&mut self, measure: impl FnOnce(&str, f64) -> f64) {
		if self.messages.is_empty() || !self.rng.chance(TEXT_SPAWN_CHANCE) {
			return;
		}
		let text = self.messages[self.rng.index(self.messages.len())].clone();
		let font_size = self.rng.range(15.0, 30.0);
		let span = (self.width - measure(&text, font_size)).max(0.0);
		let x = self.rng.range(0.0, span);
		let hue = self.rng.range(0.0, 360.0);
		let speed = self.rng.range(2.0, 4.0);
		self.falling_texts.push(FallingText {
			text,
			x,
			y: -10.0,
			speed,
			alpha: 1.0,
			font_size,
			hue,
		});
	}

	/// One meteor spawn attempt. Meteors start above the visible area on a
	/// near-diagonal course.
	pub fn try_spawn_meteor(&mut self) {
		if !self.rng.chance(METEOR_SPAWN_CHANCE) {
			return;
		}
		let x = self.rng.range(0.0, self.width);
		let length = self.rng.range(50.0, 130.0);
		let speed = self.rng.range(6.0, 12.0);
		let angle = FRAC_PI_4 + self.rng.range(-0.1, 0.1);
		self.meteors.push(Meteor {
			x,
			y: -50.0,
			length,
			speed,
			angle,
			alpha: 1.0,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::SceneConfig;
	use super::*;

	fn scene(messages: Vec<String>) -> SceneState {
		let config = SceneConfig {
			messages,
			star_count: 0,
			heart_star_count: 0,
		};
		SceneState::new(&config, 800.0, 600.0, 21)
	}

	fn catalog() -> Vec<String> {
		vec!["brillas".to_string(), "mi cielo".to_string()]
	}

	#[test]
	fn spawned_text_fields_stay_in_range() {
		let mut scene = scene(catalog());
		for _ in 0..200 {
			scene.try_spawn_text(|_, _| 200.0);
		}
		assert!(!scene.falling_texts.is_empty());
		for t in &scene.falling_texts {
			assert!(catalog().contains(&t.text));
			assert!((0.0..=600.0).contains(&t.x), "x {} outside span", t.x);
			assert_eq!(t.y, -10.0);
			assert!((15.0..30.0).contains(&t.font_size));
			assert!((2.0..4.0).contains(&t.speed));
			assert!((0.0..360.0).contains(&t.hue));
			assert_eq!(t.alpha, 1.0);
		}
	}

	#[test]
	fn oversized_text_pins_to_left_edge() {
		let mut scene = scene(catalog());
		for _ in 0..20 {
			scene.try_spawn_text(|_, _| 10_000.0);
		}
		assert!(!scene.falling_texts.is_empty());
		for t in &scene.falling_texts {
			assert_eq!(t.x, 0.0);
		}
	}

	#[test]
	fn empty_catalog_never_spawns() {
		let mut scene = scene(Vec::new());
		for _ in 0..100 {
			scene.try_spawn_text(|_, _| 100.0);
		}
		assert!(scene.falling_texts.is_empty());
	}

	#[test]
	fn measure_sees_the_chosen_message_and_size() {
		let mut scene = scene(vec!["solo".to_string()]);
		// Drive attempts until the gate passes once.
		let mut seen = None;
		while seen.is_none() {
			scene.try_spawn_text(|text, size| {
				seen = Some((text.to_string(), size));
				0.0
			});
		}
		let spawned = scene.falling_texts.last().unwrap();
		let (text, size) = seen.unwrap();
		assert_eq!(text, spawned.text);
		assert_eq!(size, spawned.font_size);
	}

	#[test]
	fn spawned_meteor_fields_stay_in_range() {
		let mut scene = scene(catalog());
		for _ in 0..200 {
			scene.try_spawn_meteor();
		}
		assert!(!scene.meteors.is_empty());
		for m in &scene.meteors {
			assert!((0.0..800.0).contains(&m.x));
			assert_eq!(m.y, -50.0);
			assert!((50.0..130.0).contains(&m.length));
			assert!((6.0..12.0).contains(&m.speed));
			assert!((FRAC_PI_4 - 0.1..FRAC_PI_4 + 0.1).contains(&m.angle));
			assert_eq!(m.alpha, 1.0);
		}
	}

	#[test]
	fn spawn_gates_match_documented_probabilities() {
		let mut texts = scene(catalog());
		for _ in 0..10_000 {
			texts.try_spawn_text(|_, _| 100.0);
		}
		let text_rate = texts.falling_texts.len() as f64 / 10_000.0;
		assert!((text_rate - TEXT_SPAWN_CHANCE).abs() < 0.03, "text rate {text_rate}");

		let mut meteors = scene(catalog());
		for _ in 0..10_000 {
			meteors.try_spawn_meteor();
		}
		let meteor_rate = meteors.meteors.len() as f64 / 10_000.0;
		assert!(
			(meteor_rate - METEOR_SPAWN_CHANCE).abs() < 0.03,
			"meteor rate {meteor_rate}"
		);
	}

	#[test]
	fn collections_stay_bounded_under_sustained_spawning() {
		let mut scene = scene(catalog());
		// 60 ticks/s: text attempts every 120 ticks, meteors every 300.
		for tick in 0..40_000u32 {
			if tick % 120 == 0 {
				scene.try_spawn_text(|_, _| 150.0);
			}
			if tick % 300 == 0 {
				scene.try_spawn_meteor();
			}
			scene.tick();
			assert!(scene.falling_texts.len() <= 16, "texts grew unboundedly");
			assert!(scene.meteors.len() <= 8, "meteors grew unboundedly");
		}
		// Expiry, not capacity, is the only limit; spawning clearly happened.
		assert!(scene.pulse > 0.0);
	}
}
