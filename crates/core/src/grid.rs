//! Grid geometry - maps discrete cells onto a continuous drawing surface
//!
//! The grid is immutable: the cell size is derived once at construction from
//! the surface width and the column count, and never recomputed during play.
//! All simulation math stays in integer cell coordinates; only this module
//! deals in floating-point surface units.

use thiserror::Error;

/// Invalid grid geometry, fatal at construction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: i16, cols: i16 },
    #[error("cell gap must be non-negative (got {0})")]
    NegativeGap(f32),
    #[error(
        "computed cell size {cell_size} is below the minimum of 1 \
         (surface width {surface_width}, {cols} columns, gap {gap})"
    )]
    CellTooSmall {
        cell_size: f32,
        surface_width: f32,
        cols: i16,
        gap: f32,
    },
}

/// Immutable cell-to-surface geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    rows: i16,
    cols: i16,
    cell_size: f32,
    gap: f32,
}

impl Grid {
    /// Derive the geometry for a surface of the given width.
    ///
    /// The cell size is `floor(surface_width / cols) - 2 * gap` and must come
    /// out at 1 or more for the configuration to be valid.
    pub fn new(surface_width: f32, rows: i16, cols: i16, gap: f32) -> Result<Self, ConfigError> {
        if rows <= 0 || cols <= 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        if gap < 0.0 {
            return Err(ConfigError::NegativeGap(gap));
        }

        let cell_size = (surface_width / cols as f32).floor() - 2.0 * gap;
        if cell_size < 1.0 {
            return Err(ConfigError::CellTooSmall {
                cell_size,
                surface_width,
                cols,
                gap,
            });
        }

        Ok(Self {
            rows,
            cols,
            cell_size,
            gap,
        })
    }

    pub fn rows(&self) -> i16 {
        self.rows
    }

    pub fn cols(&self) -> i16 {
        self.cols
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Distance between the origins of two adjacent cells, per axis
    pub fn pitch(&self) -> f32 {
        2.0 * self.gap + self.cell_size
    }

    /// Top-left surface coordinate of a cell.
    ///
    /// Pure function of the construction-time geometry; each axis is
    /// `gap + index * (2 * gap + cell_size)`.
    pub fn cell_origin(&self, col: i16, row: i16) -> (f32, f32) {
        (
            self.gap + col as f32 * self.pitch(),
            self.gap + row as f32 * self.pitch(),
        )
    }

    /// Total surface extent of the grid as (width, height)
    pub fn surface_extent(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.pitch(),
            self.rows as f32 * self.pitch(),
        )
    }
}
