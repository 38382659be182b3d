//! Sprite sheet slicing.
//!
//! A [`FrameGrid`] cuts a sheet into equally sized cells addressed by
//! `(row, column)` or by a row-major frame index. Construction rejects any
//! layout that would not tile the sheet exactly, so every rectangle handed out
//! later is aligned to the artwork.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpriteError};
use crate::resources::texturestore::SheetHandle;

/// Axis-aligned rectangle in sheet pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Intersection area with another rectangle (0 when disjoint or touching).
    pub fn overlap_area(&self, other: &Rect) -> f32 {
        let w = (self.x + self.w).min(other.x + other.w) - self.x.max(other.x);
        let h = (self.y + self.h).min(other.y + other.h) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 { w * h } else { 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameGrid {
    sheet: SheetHandle,
    cell_width: u32,
    cell_height: u32,
    rows: u32,
    columns: u32,
}

impl FrameGrid {
    pub fn new(sheet: SheetHandle, rows: u32, columns: u32) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(SpriteError::Configuration(format!(
                "sheet '{}': rows and columns must be positive (got {}x{})",
                sheet.key(),
                rows,
                columns
            )));
        }
        if sheet.width() == 0 || sheet.height() == 0 {
            return Err(SpriteError::Configuration(format!(
                "sheet '{}' has no pixels",
                sheet.key()
            )));
        }
        if sheet.width() % columns != 0 || sheet.height() % rows != 0 {
            return Err(SpriteError::Configuration(format!(
                "sheet '{}' ({}x{}) does not divide into {} rows x {} columns",
                sheet.key(),
                sheet.width(),
                sheet.height(),
                rows,
                columns
            )));
        }
        Ok(Self {
            cell_width: sheet.width() / columns,
            cell_height: sheet.height() / rows,
            sheet,
            rows,
            columns,
        })
    }

    pub fn sheet(&self) -> &SheetHandle {
        &self.sheet
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn frame_count(&self) -> usize {
        (self.rows * self.columns) as usize
    }

    /// Cell size in pixels as `(width, height)`.
    pub fn cell_size(&self) -> (f32, f32) {
        (self.cell_width as f32, self.cell_height as f32)
    }

    pub fn frame(&self, row: u32, column: u32) -> Option<Rect> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(Rect {
            x: (column * self.cell_width) as f32,
            y: (row * self.cell_height) as f32,
            w: self.cell_width as f32,
            h: self.cell_height as f32,
        })
    }

    /// Row-major lookup: `index = row * columns + column`.
    pub fn frame_at(&self, index: usize) -> Option<Rect> {
        let columns = self.columns as usize;
        let row = u32::try_from(index / columns).ok()?;
        self.frame(row, (index % columns) as u32)
    }

    /// Row-major index of `(row, column)`.
    pub fn index_of(&self, row: u32, column: u32) -> usize {
        (row * self.columns + column) as usize
    }

    pub fn frames(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.frame_count()).filter_map(|i| self.frame_at(i))
    }
}
