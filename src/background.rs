//! Scrolling city backdrop.
//!
//! The offset accumulates without bound; only its value modulo the tile
//! width is ever drawn. Two copies of the tile placed exactly one width
//! apart cover the canvas for any visible offset in `[0, W)`.

use crate::error::GameError;

/// Where to draw one copy of the background tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDraw {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BackgroundScroll {
    pub offset: f64,
}

impl BackgroundScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll opposite to the target's horizontal heading.
    pub fn advance(&mut self, dx: f64, speed_factor: f64) {
        self.offset -= dx * speed_factor;
    }

    pub fn visible_offset(&self, tile_width: f64) -> Result<f64, GameError> {
        visible_offset(self.offset, tile_width)
    }

    /// The two tile placements for the current offset, bottom-aligned to the
    /// canvas.
    pub fn tile_draws(
        &self,
        tile_width: f64,
        tile_height: f64,
        canvas_height: f64,
    ) -> Result<[TileDraw; 2], GameError> {
        let visible = self.visible_offset(tile_width)?;
        let y = canvas_height - tile_height;
        Ok([
            TileDraw { x: -visible, y },
            TileDraw {
                x: tile_width - visible,
                y,
            },
        ])
    }
}

/// `offset` wrapped into `[0, tile_width)`, negative offsets included.
pub fn visible_offset(offset: f64, tile_width: f64) -> Result<f64, GameError> {
    if !(tile_width.is_finite() && tile_width > 0.0) {
        return Err(GameError::InvalidTileWidth(tile_width));
    }
    Ok(((offset % tile_width) + tile_width) % tile_width)
}

/// Fixed star positions for the sky: `((i * 12345) mod w, (i * 4321) mod h)`.
pub fn star_positions(count: u32, width: f64, height: f64) -> impl Iterator<Item = (f64, f64)> {
    (0..count).map(move |i| {
        let i = f64::from(i);
        ((i * 12345.0) % width, (i * 4321.0) % height)
    })
}
