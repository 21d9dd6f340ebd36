use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::types::Match;

/// Columns a result list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
	Name,
	Similarity,
	WeeklyDownloads,
}

impl SortField {
	pub const ALL: [SortField; 3] = [Self::Name, Self::Similarity, Self::WeeklyDownloads];

	/// Identifier used in configuration files and JSON output.
	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Similarity => "similarity",
			Self::WeeklyDownloads => "weekly_downloads",
		}
	}

	/// Column heading shown in the results table.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Name => "Name",
			Self::Similarity => "Similarity",
			Self::WeeklyDownloads => "Weekly Downloads",
		}
	}

	fn compare(self, a: &Match, b: &Match) -> Ordering {
		match self {
			Self::Name => a.name.cmp(&b.name),
			Self::Similarity => a.similarity.total_cmp(&b.similarity),
			Self::WeeklyDownloads => a.weekly_downloads.cmp(&b.weekly_downloads),
		}
	}
}

impl fmt::Display for SortField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort field `{0}` (expected name, similarity or weekly_downloads)")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
	type Err = UnknownSortField;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"name" => Ok(Self::Name),
			"similarity" => Ok(Self::Similarity),
			"weekly_downloads" | "weekly-downloads" | "downloads" => Ok(Self::WeeklyDownloads),
			_ => Err(UnknownSortField(value.to_string())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
	Asc,
	Desc,
}

impl SortDirection {
	#[must_use]
	pub fn flipped(self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::Desc => Self::Asc,
		}
	}

	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
		}
	}

	/// Arrow appended to the active column heading.
	#[must_use]
	pub fn indicator(self) -> &'static str {
		match self {
			Self::Asc => "▲",
			Self::Desc => "▼",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort direction `{0}` (expected asc or desc)")]
pub struct UnknownSortDirection(pub String);

impl FromStr for SortDirection {
	type Err = UnknownSortDirection;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Self::Asc),
			"desc" | "descending" => Ok(Self::Desc),
			_ => Err(UnknownSortDirection(value.to_string())),
		}
	}
}

/// The active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
	pub field: SortField,
	pub direction: SortDirection,
}

impl Default for SortOrder {
	fn default() -> Self {
		Self::new(SortField::WeeklyDownloads, SortDirection::Desc)
	}
}

impl SortOrder {
	#[must_use]
	pub const fn new(field: SortField, direction: SortDirection) -> Self {
		Self { field, direction }
	}

	/// Order after the user selects `field`: the active field flips its
	/// direction, any other field starts ascending.
	#[must_use]
	pub fn toggle(self, field: SortField) -> Self {
		if self.field == field {
			Self::new(field, self.direction.flipped())
		} else {
			Self::new(field, SortDirection::Asc)
		}
	}

	/// Arrow to show next to `field`'s heading, if it is the active column.
	#[must_use]
	pub fn indicator_for(self, field: SortField) -> Option<&'static str> {
		(self.field == field).then(|| self.direction.indicator())
	}
}

/// Return an ordered copy of `matches`.
///
/// The sort is stable and uses no secondary key, so entries that compare
/// equal keep their relative input order.
#[must_use]
pub fn sort_matches(matches: &[Match], order: SortOrder) -> Vec<Match> {
	let mut sorted = matches.to_vec();
	sorted.sort_by(|a, b| {
		let ordering = order.field.compare(a, b);
		match order.direction {
			SortDirection::Asc => ordering,
			SortDirection::Desc => ordering.reverse(),
		}
	});
	sorted
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Vec<Match> {
		vec![
			Match::new("pandas", 0.71, 9_000_000, "data frames"),
			Match::new("altair", 0.88, 120_000, "declarative plots"),
			Match::new("matplotlib", 0.93, 5_000_000, "plotting"),
			Match::new("seaborn", 0.88, 1_500_000, "statistical plots"),
		]
	}

	fn names(matches: &[Match]) -> Vec<&str> {
		matches.iter().map(|m| m.name.as_str()).collect()
	}

	#[test]
	fn similarity_desc_and_asc_scenario() {
		let matches = vec![Match::new("a", 0.9, 1, ""), Match::new("b", 0.5, 1, "")];
		let desc = sort_matches(
			&matches,
			SortOrder::new(SortField::Similarity, SortDirection::Desc),
		);
		assert_eq!(names(&desc), ["a", "b"]);
		let asc = sort_matches(
			&matches,
			SortOrder::new(SortField::Similarity, SortDirection::Asc),
		);
		assert_eq!(names(&asc), ["b", "a"]);
	}

	#[test]
	fn sorting_is_a_permutation() {
		let input = sample();
		for field in SortField::ALL {
			for direction in [SortDirection::Asc, SortDirection::Desc] {
				let sorted = sort_matches(&input, SortOrder::new(field, direction));
				let mut expected = names(&input);
				let mut actual = names(&sorted);
				expected.sort_unstable();
				actual.sort_unstable();
				assert_eq!(actual, expected, "{field} {direction}");
			}
		}
	}

	#[test]
	fn sorting_does_not_touch_the_input() {
		let input = sample();
		let before = input.clone();
		let _ = sort_matches(&input, SortOrder::new(SortField::Name, SortDirection::Asc));
		assert_eq!(input, before);
	}

	#[test]
	fn desc_after_asc_reverses_distinct_values() {
		let input = sample();
		let asc = sort_matches(&input, SortOrder::new(SortField::Name, SortDirection::Asc));
		let desc = sort_matches(&asc, SortOrder::new(SortField::Name, SortDirection::Desc));
		let mut reversed = names(&asc);
		reversed.reverse();
		assert_eq!(names(&desc), reversed);
	}

	#[test]
	fn numeric_fields_are_monotonic() {
		let input = sample();
		let by_downloads = sort_matches(
			&input,
			SortOrder::new(SortField::WeeklyDownloads, SortDirection::Desc),
		);
		assert!(
			by_downloads
				.windows(2)
				.all(|pair| pair[0].weekly_downloads >= pair[1].weekly_downloads)
		);
		let by_similarity = sort_matches(
			&input,
			SortOrder::new(SortField::Similarity, SortDirection::Asc),
		);
		assert!(
			by_similarity
				.windows(2)
				.all(|pair| pair[0].similarity <= pair[1].similarity)
		);
	}

	#[test]
	fn equal_values_keep_every_element() {
		let input = vec![
			Match::new("one", 0.5, 10, ""),
			Match::new("two", 0.5, 10, ""),
			Match::new("three", 0.5, 10, ""),
		];
		let sorted = sort_matches(
			&input,
			SortOrder::new(SortField::Similarity, SortDirection::Desc),
		);
		assert_eq!(sorted.len(), 3);
		for name in ["one", "two", "three"] {
			assert!(sorted.iter().any(|m| m.name == name));
		}
	}

	#[test]
	fn toggle_flips_active_field_and_resets_others() {
		let order = SortOrder::default();
		assert_eq!(order.field, SortField::WeeklyDownloads);
		assert_eq!(order.direction, SortDirection::Desc);

		let flipped = order.toggle(SortField::WeeklyDownloads);
		assert_eq!(flipped.direction, SortDirection::Asc);

		let other = flipped.toggle(SortField::Name);
		assert_eq!(other, SortOrder::new(SortField::Name, SortDirection::Asc));

		let again = other.toggle(SortField::Name);
		assert_eq!(again.direction, SortDirection::Desc);
	}

	#[test]
	fn unknown_fields_are_rejected() {
		assert_eq!(
			"similarity".parse::<SortField>(),
			Ok(SortField::Similarity)
		);
		assert_eq!(
			" Weekly_Downloads ".parse::<SortField>(),
			Ok(SortField::WeeklyDownloads)
		);
		assert_eq!(
			"downloads".parse::<SortField>(),
			Ok(SortField::WeeklyDownloads)
		);
		let err = "summary".parse::<SortField>().unwrap_err();
		assert_eq!(err, UnknownSortField("summary".into()));
		assert!("sideways".parse::<SortDirection>().is_err());
	}

	#[test]
	fn indicator_marks_only_the_active_field() {
		let order = SortOrder::new(SortField::Name, SortDirection::Asc);
		assert_eq!(order.indicator_for(SortField::Name), Some("▲"));
		assert_eq!(order.indicator_for(SortField::Similarity), None);
	}
}
