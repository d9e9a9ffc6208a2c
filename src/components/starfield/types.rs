//! Scene configuration supplied by the host page.

use serde::Deserialize;

fn default_messages() -> Vec<String> {
	[
		"Eres mi universo",
		"Amor infinito entre las estrellas",
		"Eres la estrella más brillante",
		"Brillo gracias a ti",
		"Realmente brillas en mi cielo",
	]
	.into_iter()
	.map(str::to_string)
	.collect()
}

fn default_star_count() -> usize {
	200
}

fn default_heart_star_count() -> usize {
	1600
}

/// Scene configuration: the falling-message catalog and particle populations.
///
/// Loaded from a `<script id="scene-config">` JSON block when present; every
/// field falls back to its built-in default when omitted.
#[derive(Clone, Debug, Deserialize)]
pub struct SceneConfig {
	/// Messages shown as falling text. Content, not logic.
	#[serde(default = "default_messages")]
	pub messages: Vec<String>,
	/// Number of background stars created at startup.
	#[serde(default = "default_star_count")]
	pub star_count: usize,
	/// Number of stars forming the heart.
	#[serde(default = "default_heart_star_count")]
	pub heart_star_count: usize,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			messages: default_messages(),
			star_count: default_star_count(),
			heart_star_count: default_heart_star_count(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_catalog_is_populated() {
		let cfg = SceneConfig::default();
		assert_eq!(cfg.messages.len(), 5);
		assert_eq!(cfg.star_count, 200);
		assert_eq!(cfg.heart_star_count, 1600);
	}

	#[test]
	fn partial_json_fills_defaults() {
		let cfg: SceneConfig = serde_json::from_str(r#"{"messages": ["hola"]}"#).unwrap();
		assert_eq!(cfg.messages, vec!["hola".to_string()]);
		assert_eq!(cfg.star_count, 200);
		assert_eq!(cfg.heart_star_count, 1600);
	}

	#[test]
	fn full_json_overrides_everything() {
		let cfg: SceneConfig = serde_json::from_str(
			r#"{"messages": ["a", "b"], "star_count": 10, "heart_star_count": 40}"#,
		)
		.unwrap();
		assert_eq!(cfg.messages.len(), 2);
		assert_eq!(cfg.star_count, 10);
		assert_eq!(cfg.heart_star_count, 40);
	}
}
