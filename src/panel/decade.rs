use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const ROWS: usize = 4;
pub const COLS: usize = 3;

/// Ten contiguous years `[start_year, start_year + 9]` where `start_year` is a
/// multiple of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecadeRange {
    pub start_year: i32,
    pub end_year: i32,
}

impl DecadeRange {
    /// The decade containing `year`. Negative years floor away from zero, so
    /// -5 belongs to `-10..=-1`.
    pub fn containing(year: i32) -> Self {
        let start_year = year.div_euclid(10) * 10;
        DecadeRange {
            start_year,
            end_year: start_year + 9,
        }
    }

    /// The boundary year shown before the decade.
    pub fn previous_year(&self) -> i32 {
        self.start_year - 1
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}

impl fmt::Display for DecadeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_year, self.end_year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCell {
    pub year: i32,
    pub label: String,
    pub is_current_decade: bool,
    pub is_selected: bool,
    pub is_past_decade: bool,
    pub is_future_decade: bool,
}

impl YearCell {
    fn classify(year: i32, current_year: i32, range: &DecadeRange) -> Self {
        YearCell {
            year,
            label: year.to_string(),
            is_current_decade: range.contains(year),
            is_selected: year == current_year,
            is_past_decade: year < range.start_year,
            is_future_decade: year > range.end_year,
        }
    }
}

pub type YearGrid = [[YearCell; COLS]; ROWS];

/// Lays out the twelve years `start_year - 1 ..= start_year + 10` row-major.
pub fn compute_grid(value: NaiveDate) -> YearGrid {
    let current_year = value.year();
    let range = DecadeRange::containing(current_year);
    let first = range.previous_year();
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let year = first + (row * COLS + col) as i32;
            YearCell::classify(year, current_year, &range)
        })
    })
}

/// What activating a grid cell does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PreviousDecade,
    NextDecade,
    SelectYear(i32),
}

/// Boundary cells navigate; cells inside the decade select their year.
pub fn dispatch_for(cell: &YearCell, range: &DecadeRange) -> Action {
    if cell.year < range.start_year {
        Action::PreviousDecade
    } else if cell.year > range.end_year {
        Action::NextDecade
    } else {
        Action::SelectYear(cell.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn flat(grid: &YearGrid) -> Vec<&YearCell> {
        grid.iter().flatten().collect()
    }

    #[test]
    fn test_decade_range_containing() {
        assert_eq!(
            DecadeRange::containing(2023),
            DecadeRange { start_year: 2020, end_year: 2029 }
        );
        assert_eq!(DecadeRange::containing(2020).start_year, 2020);
        assert_eq!(DecadeRange::containing(2029).start_year, 2020);
        assert_eq!(DecadeRange::containing(0).start_year, 0);
    }

    #[test]
    fn test_decade_range_negative_years_floor() {
        assert_eq!(
            DecadeRange::containing(-5),
            DecadeRange { start_year: -10, end_year: -1 }
        );
        assert_eq!(DecadeRange::containing(-10).start_year, -10);
        assert_eq!(DecadeRange::containing(-11).start_year, -20);
    }

    #[test]
    fn test_decade_range_label() {
        assert_eq!(DecadeRange::containing(2023).to_string(), "2020-2029");
        assert_eq!(DecadeRange::containing(-3).to_string(), "-10--1");
    }

    #[test]
    fn test_decade_range_boundaries() {
        let r = DecadeRange::containing(1999);
        assert_eq!(r.previous_year(), 1989);
        assert!(r.contains(1990));
        assert!(r.contains(1999));
        assert!(!r.contains(2000));
    }

    #[test]
    fn test_grid_covers_decade_plus_boundaries_row_major() {
        for year in [2023, 2020, 2029, 1, 0, -7, 9999] {
            let grid = compute_grid(d(year, 3, 14));
            let start = DecadeRange::containing(year).start_year;
            let years: Vec<i32> = flat(&grid).iter().map(|c| c.year).collect();
            let expected: Vec<i32> = (start - 1..=start + 10).collect();
            assert_eq!(years, expected, "grid for {year}");
        }
    }

    #[test]
    fn test_grid_cell_positions() {
        let grid = compute_grid(d(2023, 1, 1));
        assert_eq!(grid[0][0].year, 2019);
        assert_eq!(grid[0][2].year, 2021);
        assert_eq!(grid[1][0].year, 2022);
        assert_eq!(grid[3][2].year, 2030);
    }

    #[test]
    fn test_grid_exactly_one_selected() {
        let grid = compute_grid(d(2023, 6, 1));
        let selected: Vec<_> = flat(&grid).into_iter().filter(|c| c.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].year, 2023);
    }

    #[test]
    fn test_grid_boundary_classification() {
        let grid = compute_grid(d(2023, 6, 1));
        let cells = flat(&grid);

        let past: Vec<_> = cells.iter().filter(|c| c.is_past_decade).collect();
        let future: Vec<_> = cells.iter().filter(|c| c.is_future_decade).collect();
        let current = cells.iter().filter(|c| c.is_current_decade).count();

        assert_eq!(past.len(), 1);
        assert_eq!(past[0].year, 2019);
        assert_eq!(future.len(), 1);
        assert_eq!(future[0].year, 2030);
        assert_eq!(current, 10);
    }

    #[test]
    fn test_grid_selected_year_on_decade_edge() {
        let grid = compute_grid(d(2030, 1, 1));
        assert!(grid[0][1].is_selected);
        assert!(grid[0][1].is_current_decade);
        assert_eq!(grid[0][0].year, 2029);
        assert!(!grid[0][0].is_selected);
    }

    #[test]
    fn test_grid_labels_are_plain_decimal() {
        let grid = compute_grid(d(12345, 1, 1));
        assert_eq!(grid[1][1].label, "12343");
        let grid = compute_grid(d(-3, 1, 1));
        assert_eq!(grid[0][0].label, "-11");
    }

    #[test]
    fn test_grid_is_pure() {
        let value = d(2023, 6, 1);
        assert_eq!(compute_grid(value), compute_grid(value));
        assert_eq!(compute_grid(value), compute_grid(d(2023, 12, 31)));
    }

    #[test]
    fn test_dispatch_for_each_cell_kind() {
        let range = DecadeRange::containing(2023);
        let grid = compute_grid(d(2023, 6, 1));
        assert_eq!(dispatch_for(&grid[0][0], &range), Action::PreviousDecade);
        assert_eq!(dispatch_for(&grid[3][2], &range), Action::NextDecade);
        assert_eq!(dispatch_for(&grid[0][1], &range), Action::SelectYear(2020));
        assert_eq!(dispatch_for(&grid[3][1], &range), Action::SelectYear(2029));
    }
}
