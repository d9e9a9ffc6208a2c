//! Visual theming for the starfield.
//!
//! Fixed colors use [`Color`]; hue-driven elements (heart stars, falling
//! messages) carry their hue in simulation state and get their css strings
//! from [`hsl`]/[`hsla`].

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Format an `hsl()` css color. Saturation and lightness are percentages.
pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> String {
	format!("hsl({hue}, {saturation}%, {lightness}%)")
}

/// Format an `hsla()` css color. Saturation and lightness are percentages.
pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> String {
	format!("hsla({hue}, {saturation}%, {lightness}%, {alpha})")
}

/// Background fill style.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary (outer) background color.
	pub color: Color,
	/// Secondary (center) color for the radial gradient.
	pub color_secondary: Color,
	/// Whether to use a radial gradient instead of a flat fill.
	pub use_gradient: bool,
}

/// Background star style.
#[derive(Clone, Debug)]
pub struct StarStyle {
	pub color: Color,
	/// Shadow blur radius applied on flicker ticks only.
	pub flicker_blur: f64,
}

/// Meteor streak style.
#[derive(Clone, Debug)]
pub struct MeteorStyle {
	pub color: Color,
	pub line_width: f64,
}

/// Falling message style. Hue and alpha come from each message's own state.
#[derive(Clone, Debug)]
pub struct TextStyle {
	/// Font family for the falling messages.
	pub font_family: &'static str,
	/// Saturation percentage of the fill and glow.
	pub saturation: f64,
	/// Lightness percentage of the fill.
	pub lightness: f64,
	/// Lightness percentage of the glow.
	pub glow_lightness: f64,
	/// Glow blur radius.
	pub glow_blur: f64,
}

impl TextStyle {
	/// Canvas font string for a message at the given size.
	pub fn font(&self, size: f64) -> String {
		format!("bold {}px {}", size, self.font_family)
	}
}

/// Heart star style. Hue comes from each star's own state.
#[derive(Clone, Debug)]
pub struct HeartStyle {
	/// Saturation percentage of the fill and glow.
	pub saturation: f64,
	/// Lightness percentage of the fill.
	pub lightness: f64,
	/// Lightness percentage of the glow.
	pub glow_lightness: f64,
	/// Glow blur radius.
	pub glow_blur: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub star: StarStyle,
	pub meteor: MeteorStyle,
	pub text: TextStyle,
	pub heart: HeartStyle,
}

impl Theme {
	/// Deep night sky with rose-tinted heart glow (default).
	pub fn night() -> Self {
		Self {
			name: "night",
			background: BackgroundStyle {
				color: Color::rgb(2, 2, 8),
				color_secondary: Color::rgb(12, 8, 24),
				use_gradient: true,
			},
			star: StarStyle {
				color: Color::rgb(255, 255, 255),
				flicker_blur: 20.0,
			},
			meteor: MeteorStyle {
				color: Color::rgba(255, 255, 255, 0.8),
				line_width: 2.0,
			},
			text: TextStyle {
				font_family: "Pacifico",
				saturation: 100.0,
				lightness: 30.0,
				glow_lightness: 40.0,
				glow_blur: 5.0,
			},
			heart: HeartStyle {
				saturation: 70.0,
				lightness: 80.0,
				glow_lightness: 60.0,
				glow_blur: 10.0,
			},
		}
	}

	/// Flat black sky, brighter message fills. For dimly lit projectors.
	pub fn velvet() -> Self {
		Self {
			name: "velvet",
			background: BackgroundStyle {
				color: Color::rgb(0, 0, 0),
				color_secondary: Color::rgb(0, 0, 0),
				use_gradient: false,
			},
			star: StarStyle {
				color: Color::rgb(245, 245, 255),
				flicker_blur: 24.0,
			},
			meteor: MeteorStyle {
				color: Color::rgba(255, 255, 255, 0.9),
				line_width: 2.0,
			},
			text: TextStyle {
				font_family: "Pacifico",
				saturation: 90.0,
				lightness: 45.0,
				glow_lightness: 55.0,
				glow_blur: 8.0,
			},
			heart: HeartStyle {
				saturation: 75.0,
				lightness: 85.0,
				glow_lightness: 65.0,
				glow_blur: 12.0,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::night()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_color_formats_as_hex() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
	}

	#[test]
	fn translucent_color_formats_as_rgba() {
		assert_eq!(Color::rgba(255, 255, 255, 0.8).to_css(), "rgba(255, 255, 255, 0.8)");
	}

	#[test]
	fn hsla_formats_hue_and_alpha() {
		assert_eq!(hsla(320.0, 100.0, 30.0, 0.5), "hsla(320, 100%, 30%, 0.5)");
		assert_eq!(hsl(320.0, 70.0, 80.0), "hsl(320, 70%, 80%)");
	}

	#[test]
	fn text_font_includes_family() {
		let theme = Theme::default();
		assert_eq!(theme.text.font(22.0), "bold 22px Pacifico");
	}
}
