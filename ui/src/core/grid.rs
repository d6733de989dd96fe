//! Density grid construction for the activity surface widgets.
//!
//! Turns an irregular collection of `(day, hour, value)` samples into the
//! sorted axis labels and the dense matrix a surface renderer expects. All
//! three dashboard widgets build their grids here so axis derivation and the
//! missing-cell policy cannot drift between call sites.

use std::collections::HashMap;

use super::axis::sorted_distinct;
use super::sample::ActivitySample;

/// Hour rows are fixed regardless of which hours appear in the data, so the
/// rendered surface is always rectangular even for sparse input.
pub const HOURS_PER_DAY: usize = 24;

/// Axis labels plus the dense value matrix, indexed `matrix[hour][day]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGrid {
    /// Distinct days present in the input, sorted ascending.
    pub day_axis: Vec<String>,
    /// Always `0..=23`.
    pub hour_axis: Vec<u8>,
    /// `24 × |day_axis|`, zero-filled where no sample exists.
    pub matrix: Vec<Vec<f64>>,
}

impl DensityGrid {
    /// A zero-width grid has no day columns. Renderers tend to reject an
    /// empty axis, so callers should show a placeholder instead of plotting.
    pub fn is_empty(&self) -> bool {
        self.day_axis.is_empty()
    }
}

/// Build the dense grid for a sample collection.
///
/// Duplicate `(day, hour)` coordinates resolve first-match in input order;
/// sources that want last-wins semantics dedupe before calling (see
/// [`super::sample::dedup_last_wins`]). Absent cells are `0`. The input is
/// only borrowed; the returned grid owns all of its data.
pub fn build_grid(samples: &[ActivitySample]) -> DensityGrid {
    let day_axis = sorted_distinct(samples.iter().map(|s| s.day.clone()));
    let hour_axis: Vec<u8> = (0..HOURS_PER_DAY as u8).collect();

    let mut lookup: HashMap<(&str, u8), f64> = HashMap::with_capacity(samples.len());
    for sample in samples {
        lookup
            .entry((sample.day.as_str(), sample.hour))
            .or_insert(sample.value);
    }

    let matrix = hour_axis
        .iter()
        .map(|&hour| {
            day_axis
                .iter()
                .map(|day| {
                    lookup
                        .get(&(day.as_str(), hour))
                        .copied()
                        .unwrap_or(0.0)
                })
                .collect()
        })
        .collect();

    DensityGrid {
        day_axis,
        hour_axis,
        matrix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(day: &str, hour: u8, value: f64) -> ActivitySample {
        ActivitySample {
            day: day.to_string(),
            hour,
            value,
        }
    }

    #[test]
    fn single_sample_lands_in_its_cell() {
        let grid = build_grid(&[sample("2024-01-01", 9, 3.0)]);

        assert_eq!(grid.day_axis, vec!["2024-01-01"]);
        assert_eq!(grid.hour_axis, (0..24).collect::<Vec<u8>>());
        assert_eq!(grid.matrix[9][0], 3.0);

        let filled: usize = grid
            .matrix
            .iter()
            .flatten()
            .filter(|&&cell| cell != 0.0)
            .count();
        assert_eq!(filled, 1);
    }

    #[test]
    fn hour_axis_is_fixed_even_for_sparse_hours() {
        let grid = build_grid(&[sample("2024-01-01", 23, 1.0)]);
        assert_eq!(grid.hour_axis.len(), HOURS_PER_DAY);
        assert_eq!(grid.matrix.len(), HOURS_PER_DAY);
        assert!(grid.matrix.iter().all(|row| row.len() == 1));
    }

    #[test]
    fn duplicate_coordinates_resolve_first_match() {
        let grid = build_grid(&[
            sample("2024-01-02", 5, 2.0),
            sample("2024-01-02", 5, 7.0),
        ]);
        assert_eq!(grid.matrix[5][0], 2.0);
    }

    #[test]
    fn day_axis_sorts_out_of_order_fetches() {
        let grid = build_grid(&[
            sample("2024-03-05", 1, 1.0),
            sample("2024-03-01", 2, 1.0),
            sample("2024-03-03", 3, 1.0),
        ]);
        assert_eq!(
            grid.day_axis,
            vec!["2024-03-01", "2024-03-03", "2024-03-05"]
        );
    }

    #[test]
    fn day_axis_holds_each_day_once() {
        let grid = build_grid(&[
            sample("2024-01-01", 0, 1.0),
            sample("2024-01-01", 5, 2.0),
            sample("2024-01-02", 0, 3.0),
        ]);
        assert_eq!(grid.day_axis.len(), 2);
        assert_eq!(grid.matrix[0].len(), 2);
    }

    #[test]
    fn missing_cells_are_zero_not_absent() {
        let grid = build_grid(&[sample("2024-01-01", 9, 3.0)]);
        assert_eq!(grid.matrix[0][0], 0.0);
        assert_eq!(grid.matrix[23][0], 0.0);
    }

    #[test]
    fn empty_input_yields_degenerate_grid() {
        let grid = build_grid(&[]);
        assert!(grid.is_empty());
        assert!(grid.day_axis.is_empty());
        assert_eq!(grid.matrix.len(), HOURS_PER_DAY);
        assert!(grid.matrix.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn rebuilding_from_unchanged_input_is_identical() {
        let samples = vec![
            sample("2024-01-02", 5, 2.0),
            sample("2024-01-01", 9, 3.0),
            sample("2024-01-02", 5, 7.0),
        ];
        assert_eq!(build_grid(&samples), build_grid(&samples));
    }
}
