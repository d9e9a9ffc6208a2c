//! Parametric heart curve.

/// Offset from the heart center for parameter `t`, tracing one full curve
/// over `[0, 2π]`.
///
/// Horizontal extent follows sin³(t); vertical extent is a weighted sum of
/// cosines of t, 2t, 3t and 4t, negated so the tip points down in canvas
/// coordinates. Output scales linearly with `scale`.
pub fn heart_offset(t: f64, scale: f64) -> (f64, f64) {
	let x = 16.0 * t.sin().powi(3);
	let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
	(x * scale, y * scale)
}

#[cfg(test)]
mod tests {
	use std::f64::consts::{PI, TAU};

	use super::*;

	#[test]
	fn curve_is_closed() {
		let (x0, y0) = heart_offset(0.0, 3.0);
		let (x1, y1) = heart_offset(TAU, 3.0);
		assert!((x0 - x1).abs() < 1e-9);
		assert!((y0 - y1).abs() < 1e-9);
	}

	#[test]
	fn scales_linearly() {
		let t = 1.3;
		let (x1, y1) = heart_offset(t, 1.0);
		let (x3, y3) = heart_offset(t, 3.0);
		assert!((x3 - x1 * 3.0).abs() < 1e-9);
		assert!((y3 - y1 * 3.0).abs() < 1e-9);
	}

	#[test]
	fn horizontally_symmetric() {
		for i in 1..16 {
			let t = i as f64 / 16.0 * TAU;
			let (xa, ya) = heart_offset(t, 2.0);
			let (xb, yb) = heart_offset(TAU - t, 2.0);
			assert!((xa + xb).abs() < 1e-9, "x mirror broken at t={t}");
			assert!((ya - yb).abs() < 1e-9, "y mirror broken at t={t}");
		}
	}

	#[test]
	fn tip_below_lobes() {
		// Canvas y grows downward, so the tip at t=π sits below the lobes.
		let (_, tip) = heart_offset(PI, 1.0);
		let (_, lobe) = heart_offset(PI / 2.0, 1.0);
		assert!(tip > lobe);
	}
}
