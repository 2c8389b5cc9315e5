use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("too many metrics for configured grid size: {count} metrics do not fit a {rows}x{cols} grid")]
    TooManyMetrics {
        count: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("invalid grid '{0}', expected ROWSxCOLS (e.g. 2x3) or 'square'")]
    InvalidGrid(String),
}

// ---------------------------------------------------------------------------
// Grid policy
// ---------------------------------------------------------------------------

/// How the subplot grid is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPolicy {
    /// Fixed shape; loading more metrics than cells is an error.
    Fixed { rows: usize, cols: usize },
    /// Smallest near-square grid: `ceil(sqrt(n))` columns.
    Square,
}

impl Default for GridPolicy {
    fn default() -> Self {
        GridPolicy::Fixed { rows: 2, cols: 3 }
    }
}

impl GridPolicy {
    /// Resolve the grid for `count` metrics.
    pub fn layout(&self, count: usize) -> Result<GridLayout, LayoutError> {
        match *self {
            GridPolicy::Fixed { rows, cols } => {
                if rows == 0 || cols == 0 {
                    return Err(LayoutError::EmptyGrid { rows, cols });
                }
                let capacity = rows
                    .checked_mul(cols)
                    .ok_or_else(|| LayoutError::InvalidGrid(self.to_string()))?;
                if count > capacity {
                    return Err(LayoutError::TooManyMetrics { count, rows, cols });
                }
                Ok(GridLayout { rows, cols })
            }
            GridPolicy::Square => {
                let count = count.max(1);
                let cols = (count as f64).sqrt().ceil() as usize;
                let rows = count.div_ceil(cols);
                Ok(GridLayout { rows, cols })
            }
        }
    }
}

impl fmt::Display for GridPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridPolicy::Fixed { rows, cols } => write!(f, "{rows}x{cols}"),
            GridPolicy::Square => write!(f, "square"),
        }
    }
}

impl FromStr for GridPolicy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("square") {
            return Ok(GridPolicy::Square);
        }
        let invalid = || LayoutError::InvalidGrid(s.to_string());
        let (rows, cols) = s
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let rows: usize = rows.trim().parse().map_err(|_| invalid())?;
        let cols: usize = cols.trim().parse().map_err(|_| invalid())?;
        if rows == 0 || cols == 0 {
            return Err(LayoutError::EmptyGrid { rows, cols });
        }
        rows.checked_mul(cols).ok_or_else(invalid)?;
        Ok(GridPolicy::Fixed { rows, cols })
    }
}

// ---------------------------------------------------------------------------
// Resolved layout
// ---------------------------------------------------------------------------

/// A concrete grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major `(row, col)` of the `index`-th cell.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_grid_rejects_overflow() {
        let policy = GridPolicy::default();
        assert_eq!(policy.layout(6), Ok(GridLayout { rows: 2, cols: 3 }));
        assert_eq!(
            policy.layout(7),
            Err(LayoutError::TooManyMetrics {
                count: 7,
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn fixed_grid_rejects_zero_dimension() {
        let policy = GridPolicy::Fixed { rows: 0, cols: 3 };
        assert_eq!(
            policy.layout(1),
            Err(LayoutError::EmptyGrid { rows: 0, cols: 3 })
        );
    }

    #[test]
    fn square_grid_sizes() {
        let shape = |n| {
            let l = GridPolicy::Square.layout(n).unwrap();
            (l.rows, l.cols)
        };
        assert_eq!(shape(0), (1, 1));
        assert_eq!(shape(1), (1, 1));
        assert_eq!(shape(4), (2, 2));
        assert_eq!(shape(5), (2, 3));
        assert_eq!(shape(9), (3, 3));
        assert_eq!(shape(10), (3, 4));
    }

    #[test]
    fn cells_are_row_major() {
        let layout = GridLayout { rows: 2, cols: 3 };
        assert_eq!(layout.cell(0), (0, 0));
        assert_eq!(layout.cell(2), (0, 2));
        assert_eq!(layout.cell(3), (1, 0));
        assert_eq!(layout.cell(5), (1, 2));
    }

    #[test]
    fn parses_grid_specs() {
        assert_eq!(
            "2x3".parse::<GridPolicy>(),
            Ok(GridPolicy::Fixed { rows: 2, cols: 3 })
        );
        assert_eq!(
            " 4X1 ".parse::<GridPolicy>(),
            Ok(GridPolicy::Fixed { rows: 4, cols: 1 })
        );
        assert_eq!("Square".parse::<GridPolicy>(), Ok(GridPolicy::Square));
        assert!(matches!(
            "2by3".parse::<GridPolicy>(),
            Err(LayoutError::InvalidGrid(_))
        ));
        assert_eq!(
            "0x3".parse::<GridPolicy>(),
            Err(LayoutError::EmptyGrid { rows: 0, cols: 3 })
        );
        assert!(matches!(
            "4294967296x4294967296".parse::<GridPolicy>(),
            Err(LayoutError::InvalidGrid(_))
        ));
    }

    #[test]
    fn oversized_fixed_grid_is_rejected() {
        let policy = GridPolicy::Fixed {
            rows: usize::MAX,
            cols: 2,
        };
        assert_eq!(
            policy.layout(7),
            Err(LayoutError::InvalidGrid(format!("{}x2", usize::MAX)))
        );
    }
}
