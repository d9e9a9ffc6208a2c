//! Simulation state and per-tick update rules for the animated sky.
//!
//! Owns the four particle collections and advances every live element exactly
//! once per tick. Nothing here touches the web platform, so the whole update
//! model runs natively under test; the render module reads this state once
//! per frame after the tick.

use std::f64::consts::TAU;

use super::heart::heart_offset;
use super::rng::Rng;
use super::types::SceneConfig;

/// Pulse phase advance per tick; drives the synchronized heart beat.
const PULSE_STEP: f64 = 0.1;
/// Fraction of the remaining distance a flying star covers per tick.
const APPROACH_RATE: f64 = 0.07;
/// Distance at which a flying star counts as arrived.
const ARRIVE_DISTANCE: f64 = 1.0;
/// Relative amplitude of the settled breathing scale.
const BREATH_AMPLITUDE: f64 = 0.05;
/// Radius of the pointer repulsion field.
const REPULSION_RADIUS: f64 = 100.0;
/// Maximum repulsion displacement, reached at distance zero.
const REPULSION_STRENGTH: f64 = 10.0;
/// Per-tick chance of a one-tick brightness spike on a background star.
const FLICKER_CHANCE: f64 = 0.005;
/// Meteor alpha fade per tick.
const METEOR_FADE: f64 = 0.005;
/// Falling-text alpha fade per tick.
const TEXT_FADE: f64 = 0.002;
/// Extra distance below the viewport before falling text is culled.
const TEXT_BOTTOM_MARGIN: f64 = 30.0;
/// Total random scatter applied to each heart-star target, per axis.
const TARGET_JITTER: f64 = 15.0;
/// Vertical offset of the heart center from the viewport center.
const HEART_CENTER_DROP: f64 = 20.0;
/// Heart scale as a fraction of the smaller viewport dimension.
const HEART_SCALE_FACTOR: f64 = 0.015;

/// A permanent background star.
#[derive(Clone, Debug)]
pub struct BackgroundStar {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	/// Per-star oscillator phase controlling brightness flicker.
	pub twinkle: f64,
	pub twinkle_speed: f64,
	/// Base brightness the twinkle modulates.
	pub brightness: f64,
	/// One-tick brightness spike, redrawn every tick.
	pub flicker: bool,
}

impl BackgroundStar {
	/// Rendered opacity for the current twinkle phase, clamped to `[0, 1]`.
	pub fn opacity(&self) -> f64 {
		let base = self.brightness * (0.4 + 0.6 * self.twinkle.sin());
		let spike = if self.flicker { 1.0 } else { 0.0 };
		(base + spike).clamp(0.0, 1.0)
	}
}

/// Lifecycle phase of a heart star.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeartMode {
	/// Approaching its target position.
	Flying,
	/// Holding a breathing position at rest.
	Settled,
}

/// A star that forms part of the heart shape.
#[derive(Clone, Debug)]
pub struct HeartStar {
	pub x: f64,
	pub y: f64,
	/// Position a flying star steers toward.
	pub target_x: f64,
	pub target_y: f64,
	/// Rest position the breathing scale is applied around. Never touched by
	/// pointer repulsion.
	pub original_x: f64,
	pub original_y: f64,
	pub radius: f64,
	pub twinkle: f64,
	pub twinkle_speed: f64,
	pub brightness: f64,
	/// Color hue in degrees, pinks through purples.
	pub hue: f64,
	pub mode: HeartMode,
}

impl HeartStar {
	/// Rendered opacity for the current twinkle phase, clamped to `[0, 1]`.
	pub fn opacity(&self) -> f64 {
		(self.brightness * (0.3 + 0.7 * self.twinkle.sin())).clamp(0.0, 1.0)
	}
}

/// A shooting star streaking across the sky.
#[derive(Clone, Debug)]
pub struct Meteor {
	/// Head position; the trail extends backward along `angle`.
	pub x: f64,
	pub y: f64,
	pub length: f64,
	pub speed: f64,
	/// Travel direction in radians.
	pub angle: f64,
	pub alpha: f64,
}

/// A message falling down the screen.
#[derive(Clone, Debug)]
pub struct FallingText {
	pub text: String,
	pub x: f64,
	pub y: f64,
	/// Vertical fall speed per tick.
	pub speed: f64,
	pub alpha: f64,
	pub font_size: f64,
	pub hue: f64,
}

/// Complete simulation state.
///
/// Created once when the component mounts, then mutated in place by the
/// animation loop, the spawner timers and the input handlers. All of those
/// run on the single browser thread, so mutation never interleaves within a
/// tick.
pub struct SceneState {
	/// Background starfield, created at startup, never removed.
	pub stars: Vec<BackgroundStar>,
	/// Stars forming the heart, created at startup, never removed.
	pub heart_stars: Vec<HeartStar>,
	/// Live meteors, spawned and expired continuously.
	pub meteors: Vec<Meteor>,
	/// Live falling messages, spawned and expired continuously.
	pub falling_texts: Vec<FallingText>,
	/// Viewport width in canvas pixels.
	pub width: f64,
	/// Viewport height in canvas pixels.
	pub height: f64,
	/// Pointer position in canvas coordinates.
	pub pointer_x: f64,
	pub pointer_y: f64,
	/// Shared animation clock driving the synchronized heart beat.
	pub pulse: f64,
	/// Current heart scale, derived from the viewport.
	pub heart_scale: f64,
	heart_center_x: f64,
	heart_center_y: f64,
	pub(super) messages: Vec<String>,
	pub(super) rng: Rng,
}

impl SceneState {
	/// Build the initial scene: background stars scattered over the viewport
	/// and heart stars at random positions, each already assigned a jittered
	/// target on the heart curve at evenly spaced parameter values.
	pub fn new(config: &SceneConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = Rng::new(seed);
		let heart_scale = width.min(height) * HEART_SCALE_FACTOR;
		let heart_center_x = width / 2.0;
		let heart_center_y = height / 2.0 + HEART_CENTER_DROP;

		let stars = (0..config.star_count)
			.map(|_| BackgroundStar {
				x: rng.range(0.0, width),
				y: rng.range(0.0, height),
				radius: rng.range(0.5, 2.5),
				twinkle: rng.range(0.0, TAU),
				twinkle_speed: rng.range(0.005, 0.015),
				brightness: rng.range(0.2, 0.5),
				flicker: false,
			})
			.collect();

		let count = config.heart_star_count;
		let heart_stars = (0..count)
			.map(|i| {
				let t = i as f64 / count as f64 * TAU;
				let (hx, hy) = heart_offset(t, heart_scale);
				let jitter = TARGET_JITTER / 2.0;
				let target_x = heart_center_x + hx + rng.range(-jitter, jitter);
				let target_y = heart_center_y + hy + rng.range(-jitter, jitter);
				HeartStar {
					x: rng.range(0.0, width),
					y: rng.range(0.0, height),
					target_x,
					target_y,
					original_x: target_x,
					original_y: target_y,
					radius: rng.range(1.0, 4.0),
					twinkle: rng.range(0.0, TAU),
					twinkle_speed: rng.range(0.01, 0.03),
					brightness: rng.range(0.5, 1.0),
					hue: rng.range(300.0, 360.0),
					mode: HeartMode::Flying,
				}
			})
			.collect();

		Self {
			stars,
			heart_stars,
			meteors: Vec::new(),
			falling_texts: Vec::new(),
			width,
			height,
			pointer_x: width / 2.0,
			pointer_y: height / 2.0,
			pulse: 0.0,
			heart_scale,
			heart_center_x,
			heart_center_y,
			messages: config.messages.clone(),
			rng,
		}
	}

	/// Advance one frame: every live element is processed exactly once, and
	/// expired meteors and messages are dropped before the next render pass
	/// can see them.
	pub fn tick(&mut self) {
		self.pulse += PULSE_STEP;
		self.tick_stars();
		self.tick_meteors();
		self.tick_texts();
		self.tick_heart_stars();
	}

	fn tick_stars(&mut self) {
		for star in &mut self.stars {
			star.twinkle += star.twinkle_speed;
			star.flicker = self.rng.chance(FLICKER_CHANCE);
		}
	}

	fn tick_meteors(&mut self) {
		self.meteors.retain_mut(|m| {
			m.x += m.angle.cos() * m.speed;
			m.y += m.angle.sin() * m.speed;
			m.alpha -= METEOR_FADE;
			m.alpha > 0.0
		});
	}

	fn tick_texts(&mut self) {
		let floor = self.height + TEXT_BOTTOM_MARGIN;
		self.falling_texts.retain_mut(|t| {
			t.y += t.speed;
			t.alpha -= TEXT_FADE;
			t.alpha > 0.0 && t.y <= floor
		});
	}

	fn tick_heart_stars(&mut self) {
		let beat = 1.0 + self.pulse.sin() * BREATH_AMPLITUDE;
		let (px, py) = (self.pointer_x, self.pointer_y);
		let (cx, cy) = (self.heart_center_x, self.heart_center_y);
		for star in &mut self.heart_stars {
			star.twinkle += star.twinkle_speed;
			match star.mode {
				HeartMode::Flying => {
					let dx = star.target_x - star.x;
					let dy = star.target_y - star.y;
					if dx.hypot(dy) > ARRIVE_DISTANCE {
						star.x += dx * APPROACH_RATE;
						star.y += dy * APPROACH_RATE;
					} else {
						star.mode = HeartMode::Settled;
					}
				}
				HeartMode::Settled => {
					star.x = cx + (star.original_x - cx) * beat;
					star.y = cy + (star.original_y - cy) * beat;
				}
			}
			repel_from_pointer(star, px, py);
		}
	}

	/// Resample the heart shape at the current viewport-derived center and
	/// scale. Settled stars get fresh jittered rest and target positions at
	/// their evenly spaced parameter values; stars still flying keep their
	/// course.
	pub fn reshuffle_heart(&mut self) {
		self.heart_scale = self.width.min(self.height) * HEART_SCALE_FACTOR;
		self.heart_center_x = self.width / 2.0;
		self.heart_center_y = self.height / 2.0 + HEART_CENTER_DROP;
		let count = self.heart_stars.len();
		let (cx, cy, scale) = (self.heart_center_x, self.heart_center_y, self.heart_scale);
		for (i, star) in self.heart_stars.iter_mut().enumerate() {
			if star.mode != HeartMode::Settled {
				continue;
			}
			let t = i as f64 / count as f64 * TAU;
			let (hx, hy) = heart_offset(t, scale);
			let jitter = TARGET_JITTER / 2.0;
			star.original_x = cx + hx + self.rng.range(-jitter, jitter);
			star.original_y = cy + hy + self.rng.range(-jitter, jitter);
			star.target_x = star.original_x;
			star.target_y = star.original_y;
		}
	}

	/// Record new viewport dimensions and the matching heart scale. Affects
	/// future spawns and the next reshuffle; existing stars hold position.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.heart_scale = width.min(height) * HEART_SCALE_FACTOR;
	}

	/// Record the pointer position in canvas coordinates.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer_x = x;
		self.pointer_y = y;
	}
}

/// Transient displacement directly away from the pointer, up to
/// [`REPULSION_STRENGTH`] units at distance zero, fading to nothing at
/// [`REPULSION_RADIUS`]. The direction is undefined at exactly zero
/// distance; the +x axis is the stable fallback.
fn repel_from_pointer(star: &mut HeartStar, px: f64, py: f64) {
	let dist = (star.x - px).hypot(star.y - py);
	if dist >= REPULSION_RADIUS {
		return;
	}
	let strength = (REPULSION_RADIUS - dist) / REPULSION_RADIUS;
	let angle = if dist > 0.0 {
		(star.y - py).atan2(star.x - px)
	} else {
		0.0
	};
	star.x += angle.cos() * strength * REPULSION_STRENGTH;
	star.y += angle.sin() * strength * REPULSION_STRENGTH;
}
