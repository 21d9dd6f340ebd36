//! Geometry for the similarity/popularity scatter plot.
//!
//! Points sit at `(similarity, log10(weekly_downloads))`. Each point also gets
//! a colour that blends from blue towards red, and a radius. Both grow with
//! the point's normalized similarity and normalized log-downloads, so
//! relevant and popular packages stand out. The terminal renderer consumes
//! these values; nothing here depends on ratatui.

use crate::search::Match;

/// Colour of the least relevant, least popular points.
pub const BASE_COLOR: Rgb = Rgb(54, 162, 235);
/// Colour that points blend towards as their weight approaches one.
pub const HIGHLIGHT_COLOR: Rgb = Rgb(255, 99, 132);

const WEIGHT_GAIN: f64 = 1.5;
const MIN_RADIUS: f64 = 2.0;
const MAX_RADIUS: f64 = 25.0;
const RADIUS_GAIN: f64 = 10.0;
/// Normalized value used when every point shares the same coordinate.
const DEGENERATE_NORM: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	/// Linear blend from `self` (weight 0) to `other` (weight 1).
	#[must_use]
	pub fn blend(self, other: Rgb, weight: f64) -> Rgb {
		let weight = clamp_unit(weight);
		let channel = |from: u8, to: u8| {
			let value = f64::from(from) + weight * (f64::from(to) - f64::from(from));
			value.round().clamp(0.0, 255.0) as u8
		};
		Rgb(
			channel(self.0, other.0),
			channel(self.1, other.1),
			channel(self.2, other.2),
		)
	}
}

/// A result positioned on the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
	pub name: String,
	/// Position in the list the points were built from.
	pub index: usize,
	pub x: f64,
	pub y: f64,
	/// Colour blend weight in `[0, 1]`.
	pub weight: f64,
	/// Marker radius in `[2, 25]`.
	pub radius: f64,
	pub color: Rgb,
}

impl PlotPoint {
	/// Coarse marker size in `0..=2` for renderers with few glyph sizes.
	#[must_use]
	pub fn size_class(&self) -> u8 {
		let span = MAX_RADIUS - MIN_RADIUS;
		let relative = (self.radius - MIN_RADIUS) / span;
		if relative < 1.0 / 3.0 {
			0
		} else if relative < 2.0 / 3.0 {
			1
		} else {
			2
		}
	}
}

/// Points plus the axis bounds that contain them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGeometry {
	pub points: Vec<PlotPoint>,
	pub x_bounds: [f64; 2],
	pub y_bounds: [f64; 2],
}

impl ScatterGeometry {
	#[must_use]
	pub fn from_matches(matches: &[Match]) -> Self {
		let coords: Vec<(f64, f64)> = matches
			.iter()
			.map(|m| (finite_or_zero(m.similarity), log_downloads(m.weekly_downloads)))
			.collect();

		let x_range = Range::of(coords.iter().map(|(x, _)| *x));
		let y_range = Range::of(coords.iter().map(|(_, y)| *y));

		let points = matches
			.iter()
			.zip(&coords)
			.enumerate()
			.map(|(index, (m, &(x, y)))| {
				let norm_x = x_range.normalize(x);
				let norm_y = y_range.normalize(y);
				let weight = (((norm_x + norm_y) / 2.0) * WEIGHT_GAIN).min(1.0);
				let radius = ((norm_x + norm_y) * RADIUS_GAIN + MIN_RADIUS).min(MAX_RADIUS);
				PlotPoint {
					name: m.name.clone(),
					index,
					x,
					y,
					weight,
					radius,
					color: BASE_COLOR.blend(HIGHLIGHT_COLOR, weight),
				}
			})
			.collect();

		Self {
			points,
			x_bounds: x_range.padded_bounds(),
			y_bounds: y_range.padded_bounds(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

/// `log10` of the download count. Counts below one are treated as one so
/// packages without downloads sit on the axis instead of at `-inf`.
#[must_use]
pub fn log_downloads(downloads: u64) -> f64 {
	(downloads.max(1) as f64).log10()
}

#[derive(Debug, Clone, Copy)]
struct Range {
	min: f64,
	max: f64,
}

impl Range {
	fn of(values: impl Iterator<Item = f64>) -> Self {
		values.fold(
			Range {
				min: f64::INFINITY,
				max: f64::NEG_INFINITY,
			},
			|range, value| Range {
				min: range.min.min(value),
				max: range.max.max(value),
			},
		)
	}

	fn span(self) -> f64 {
		self.max - self.min
	}

	fn normalize(self, value: f64) -> f64 {
		let span = self.span();
		if !span.is_finite() || span <= f64::EPSILON {
			return DEGENERATE_NORM;
		}
		clamp_unit((value - self.min) / span)
	}

	/// Bounds with a little margin so edge points are not drawn on the
	/// frame. Empty and single-valued ranges get a unit window.
	fn padded_bounds(self) -> [f64; 2] {
		if !self.min.is_finite() || !self.max.is_finite() {
			return [0.0, 1.0];
		}
		let span = self.span();
		if span <= f64::EPSILON {
			return [self.min - 0.5, self.max + 0.5];
		}
		let pad = span * 0.05;
		[self.min - pad, self.max + pad]
	}
}

fn finite_or_zero(value: f64) -> f64 {
	if value.is_finite() { value } else { 0.0 }
}

fn clamp_unit(value: f64) -> f64 {
	if value.is_nan() {
		0.0
	} else {
		value.clamp(0.0, 1.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Vec<Match> {
		vec![
			Match::new("low", 0.2, 100, ""),
			Match::new("mid", 0.5, 10_000, ""),
			Match::new("high", 0.8, 1_000_000, ""),
		]
	}

	#[test]
	fn extremes_map_to_base_and_highlight_colours() {
		let geometry = ScatterGeometry::from_matches(&sample());
		let low = &geometry.points[0];
		let high = &geometry.points[2];

		assert_eq!(low.weight, 0.0);
		assert_eq!(low.color, BASE_COLOR);
		assert_eq!(low.radius, MIN_RADIUS);

		assert_eq!(high.weight, 1.0);
		assert_eq!(high.color, HIGHLIGHT_COLOR);
		assert_eq!(high.radius, 22.0);
	}

	#[test]
	fn weight_is_amplified_then_capped() {
		let geometry = ScatterGeometry::from_matches(&sample());
		let mid = &geometry.points[1];
		// Both axes normalize to 0.5, so the weight is 0.5 * 1.5.
		assert!((mid.weight - 0.75).abs() < 1e-9);
		assert!((mid.radius - 12.0).abs() < 1e-9);
	}

	#[test]
	fn single_result_does_not_produce_nan() {
		let geometry = ScatterGeometry::from_matches(&[Match::new("only", 0.7, 42, "")]);
		let point = &geometry.points[0];
		assert!(point.weight.is_finite());
		assert!(point.radius.is_finite());
		assert!(geometry.x_bounds[0] < geometry.x_bounds[1]);
		assert!(geometry.y_bounds[0] < geometry.y_bounds[1]);
	}

	#[test]
	fn zero_downloads_stay_finite() {
		let geometry = ScatterGeometry::from_matches(&[
			Match::new("unused", 0.1, 0, ""),
			Match::new("used", 0.9, 1_000, ""),
		]);
		assert_eq!(geometry.points[0].y, 0.0);
		assert!(geometry.points.iter().all(|p| p.y.is_finite()));
		assert!((0.0..=1.0).contains(&geometry.points[0].weight));
	}

	#[test]
	fn values_stay_in_range() {
		let geometry = ScatterGeometry::from_matches(&sample());
		for point in &geometry.points {
			assert!((0.0..=1.0).contains(&point.weight), "{point:?}");
			assert!((MIN_RADIUS..=MAX_RADIUS).contains(&point.radius), "{point:?}");
			assert!(point.size_class() <= 2);
		}
	}

	#[test]
	fn empty_input_has_default_bounds() {
		let geometry = ScatterGeometry::from_matches(&[]);
		assert!(geometry.is_empty());
		assert_eq!(geometry.x_bounds, [0.0, 1.0]);
	}

	#[test]
	fn blend_rounds_each_channel() {
		assert_eq!(BASE_COLOR.blend(HIGHLIGHT_COLOR, 0.5), Rgb(155, 131, 184));
	}
}
