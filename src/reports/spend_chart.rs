//! Spend chart
//!
//! Renders the share of total withdrawals attributable to each category as a
//! vertical text bar chart:
//!
//! ```text
//! Percentage spent by category
//! 100|
//!  90|
//!  ...
//!  50| o
//!  40| o  o
//!  ...
//!   0| o  o
//!     -------
//!      F  C
//!      o  l
//!      ...
//! ```
//!
//! The chart is laid out in a [`ChartGrid`] first and then serialized row by
//! row. Rows carry their full width (bars and labels are padded with
//! spaces) and there is no trailing newline.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Category;

/// Title line printed above the chart
pub const CHART_TITLE: &str = "Percentage spent by category";

/// Number of axis rows (100 down to 0 in steps of 10)
const AXIS_ROWS: usize = 11;

/// Row holding the dashed rule under the bars
const RULE_ROW: usize = AXIS_ROWS;

/// Columns in front of the first category: label, axis, spacer
const LEADING_COLUMNS: usize = 3;

/// Columns per category: bar plus two spacers
const COLUMNS_PER_CATEGORY: usize = 3;

/// Width of the right-aligned axis label field
const LABEL_WIDTH: usize = 3;

/// Anything that can be drawn as a bar in the spend chart
pub trait Spending {
    /// Name shown under the bar
    fn name(&self) -> &str;

    /// Total withdrawn, used for the bar height
    fn amount_withdrawn(&self) -> f64;
}

impl Spending for Category {
    fn name(&self) -> &str {
        Category::name(self)
    }

    fn amount_withdrawn(&self) -> f64 {
        Category::amount_withdrawn(self)
    }
}

impl<T: Spending + ?Sized> Spending for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn amount_withdrawn(&self) -> f64 {
        (**self).amount_withdrawn()
    }
}

/// Percentage of the total spent, rounded down to a multiple of ten
///
/// The result is always within `0..=100`.
pub fn spend_bucket(amount_withdrawn: f64, total_withdrawn: f64) -> u32 {
    let percent = (amount_withdrawn / total_withdrawn * 100.0).floor();
    let percent = percent.clamp(0.0, 100.0) as u32;
    percent / 10 * 10
}

/// Capitalize the first letter and lowercase the rest
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// One cell of the chart layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCell {
    Blank,
    /// Axis percentage label
    Label(u32),
    /// Vertical axis separator
    Axis,
    /// Horizontal rule under the bars
    Rule,
    /// Bar marker
    Marker,
    /// One character of a rotated category name
    Letter(char),
}

impl ChartCell {
    fn glyph(self) -> char {
        match self {
            ChartCell::Blank | ChartCell::Label(_) => ' ',
            ChartCell::Axis => '|',
            ChartCell::Rule => '-',
            ChartCell::Marker => 'o',
            ChartCell::Letter(c) => c,
        }
    }
}

/// Two-dimensional layout of the spend chart, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartGrid {
    rows: usize,
    cols: usize,
    cells: Vec<ChartCell>,
}

impl ChartGrid {
    fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![ChartCell::Blank; rows * cols],
        }
    }

    /// Lay out the chart for the given categories
    ///
    /// `total_withdrawn` must be positive; [`create_spend_chart`] checks
    /// this before building.
    pub fn build<C: Spending>(categories: &[C], total_withdrawn: f64) -> Self {
        let labels: Vec<Vec<char>> = categories
            .iter()
            .map(|c| capitalize(c.name()).chars().collect())
            .collect();
        let label_height = labels.iter().map(Vec::len).max().unwrap_or(0);

        let rows = AXIS_ROWS + 1 + label_height;
        let cols = LEADING_COLUMNS + COLUMNS_PER_CATEGORY * categories.len();
        let mut grid = Self::blank(rows, cols);

        for row in 0..AXIS_ROWS {
            grid.set(row, 0, ChartCell::Label(axis_value(row)));
            grid.set(row, 1, ChartCell::Axis);
        }
        for col in 2..cols {
            grid.set(RULE_ROW, col, ChartCell::Rule);
        }

        for (i, (category, label)) in categories.iter().zip(&labels).enumerate() {
            let col = LEADING_COLUMNS + COLUMNS_PER_CATEGORY * i;
            let bucket = spend_bucket(category.amount_withdrawn(), total_withdrawn);

            for row in (0..AXIS_ROWS).filter(|&row| axis_value(row) <= bucket) {
                grid.set(row, col, ChartCell::Marker);
            }
            for (offset, &letter) in label.iter().enumerate() {
                grid.set(RULE_ROW + 1 + offset, col, ChartCell::Letter(letter));
            }
        }

        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`, if inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<ChartCell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    fn set(&mut self, row: usize, col: usize, cell: ChartCell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Serialize the grid row-major, one line per row
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(render_row)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_row(row: &[ChartCell]) -> String {
    let mut line = String::with_capacity(LABEL_WIDTH + row.len());
    for (col, cell) in row.iter().enumerate() {
        match (col, cell) {
            (0, ChartCell::Label(value)) => {
                line.push_str(&format!("{:>width$}", value, width = LABEL_WIDTH))
            }
            (0, cell) => line.push_str(&format!("{:>width$}", cell.glyph(), width = LABEL_WIDTH)),
            (_, cell) => line.push(cell.glyph()),
        }
    }
    line
}

/// Percentage shown on an axis row, where row 0 is the top (100)
fn axis_value(row: usize) -> u32 {
    100 - 10 * row as u32
}

/// Render the spend chart for the given categories
///
/// Categories appear in the order given. `total_withdrawn` is the shared
/// total every bar is measured against.
///
/// # Errors
///
/// Returns [`LedgerError::EmptyChart`] when `categories` is empty and
/// [`LedgerError::NoWithdrawals`] when `total_withdrawn` is not a positive
/// number (no withdrawal has happened yet).
pub fn create_spend_chart<C: Spending>(
    categories: &[C],
    total_withdrawn: f64,
) -> LedgerResult<String> {
    if categories.is_empty() {
        return Err(LedgerError::EmptyChart);
    }
    if !(total_withdrawn.is_finite() && total_withdrawn > 0.0) {
        return Err(LedgerError::NoWithdrawals);
    }

    let grid = ChartGrid::build(categories, total_withdrawn);
    log::debug!(
        "spend chart laid out as {}x{} grid for {} categories",
        grid.rows(),
        grid.cols(),
        categories.len()
    );

    Ok(format!("{}\n{}", CHART_TITLE, grid.render()))
}
