//! Canvas rendering for the animated sky.
//!
//! Draw order, back to front: background fill, background stars, meteor
//! streaks, falling messages, heart stars. All canvas access lives here so
//! the simulation modules stay web-free.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::SceneState;
use super::theme::{Theme, hsl, hsla};

/// Renders the complete scene to the canvas.
pub fn render(state: &SceneState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(state, ctx, theme);
	draw_stars(state, ctx, theme);
	draw_meteors(state, ctx, theme);
	draw_texts(state, ctx, theme);
	draw_heart_stars(state, ctx, theme);
}

fn draw_background(state: &SceneState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				state.width.max(state.height) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_stars(state: &SceneState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let color = theme.star.color.to_css();
	for star in &state.stars {
		ctx.save();
		ctx.set_global_alpha(star.opacity());
		ctx.set_fill_style_str(&color);
		if star.flicker {
			ctx.set_shadow_blur(theme.star.flicker_blur);
			ctx.set_shadow_color(&color);
		}
		ctx.begin_path();
		let _ = ctx.arc(star.x, star.y, star.radius, 0.0, PI * 2.0);
		ctx.fill();
		ctx.restore();
	}
}

fn draw_meteors(state: &SceneState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.save();
	ctx.set_stroke_style_str(&theme.meteor.color.to_css());
	ctx.set_line_width(theme.meteor.line_width);
	for m in &state.meteors {
		ctx.set_global_alpha(m.alpha.clamp(0.0, 1.0));
		ctx.begin_path();
		ctx.move_to(m.x, m.y);
		ctx.line_to(
			m.x - m.angle.cos() * m.length,
			m.y - m.angle.sin() * m.length,
		);
		ctx.stroke();
	}
	ctx.restore();
}

fn draw_texts(state: &SceneState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	for t in &state.falling_texts {
		ctx.save();
		ctx.set_font(&theme.text.font(t.font_size));
		ctx.set_fill_style_str(&hsla(
			t.hue,
			theme.text.saturation,
			theme.text.lightness,
			t.alpha,
		));
		ctx.set_shadow_blur(theme.text.glow_blur);
		ctx.set_shadow_color(&hsla(
			t.hue,
			theme.text.saturation,
			theme.text.glow_lightness,
			t.alpha,
		));
		let _ = ctx.fill_text(&t.text, t.x, t.y);
		ctx.restore();
	}
}

fn draw_heart_stars(state: &SceneState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	for star in &state.heart_stars {
		ctx.save();
		ctx.set_global_alpha(star.opacity());
		ctx.set_fill_style_str(&hsl(star.hue, theme.heart.saturation, theme.heart.lightness));
		ctx.set_shadow_blur(theme.heart.glow_blur);
		ctx.set_shadow_color(&hsl(
			star.hue,
			theme.heart.saturation,
			theme.heart.glow_lightness,
		));
		ctx.begin_path();
		let _ = ctx.arc(star.x, star.y, star.radius, 0.0, PI * 2.0);
		ctx.fill();
		ctx.restore();
	}
}
