// render.rs - Encode the profile to an output buffer
//
// Stacked bar chart, one bar per column, ground under water.
// Output encoding (row-major, row 0 at the top):
//   0 = sky
//   1 = ground
//   2 = water
//   3 = capacity (dry space a basin would fill, only with the overlay on)

use crate::error::{EngineError, Result};
use crate::sim::WaterSim;

pub const SKY: u8 = 0;
pub const GROUND: u8 = 1;
pub const WATER: u8 = 2;
pub const CAPACITY: u8 = 3;

/// Largest buffer an encoder will allocate (64 Mi cells)
pub const MAX_CELLS: usize = 1 << 26;

#[inline]
fn cell_count(w: u32, h: u32) -> Result<usize> {
    (w as usize)
        .checked_mul(h as usize)
        .filter(|n| *n <= MAX_CELLS)
        .ok_or(EngineError::CanvasTooLarge { w, h })
}

#[derive(Debug, Default)]
pub struct Encoder {
    out: Vec<u8>,
    w: u32,
    h: u32,
}

impl Encoder {
    pub fn new(w: u32, h: u32) -> Result<Self> {
        Ok(Self {
            out: vec![SKY; cell_count(w, h)?],
            w,
            h,
        })
    }

    /// Refuses oversized canvases and leaves the current buffer untouched.
    pub fn resize(&mut self, w: u32, h: u32) -> Result<()> {
        let cells = cell_count(w, h)?;
        self.w = w;
        self.h = h;
        self.out.resize(cells, SKY);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.out.fill(SKY);
    }

    pub fn ptr(&self) -> *const u8 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }

    pub fn as_slice(&self) -> &[u8] {
        &self.out
    }

    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> u8 {
        if x >= self.w || y >= self.h { return SKY; }
        self.out[y as usize * self.w as usize + x as usize]
    }

    /// Rasterize `sim`. `scale_max` is the height mapped to the top row;
    /// `None` fits the tallest surface.
    pub fn encode(&mut self, sim: &WaterSim, scale_max: Option<f64>, show_capacity: bool) {
        self.clear();

        let n = sim.column_count();
        if n == 0 || self.w == 0 || self.h == 0 { return; }

        let elevation = sim.elevations();
        let water = sim.water_levels();
        let capacity = if show_capacity { sim.terrain().capacity() } else { Vec::new() };

        let top = scale_max
            .filter(|m| m.is_finite() && *m > 0.0)
            .unwrap_or_else(|| {
                let mut m = sim.terrain().max_elevation();
                for i in 0..n {
                    let extra = capacity.get(i).copied().unwrap_or(0.0).max(water[i]);
                    m = m.max(elevation[i] + extra);
                }
                m
            });
        if top <= 0.0 { return; }

        let (w, h) = (self.w, self.h);
        let rows = |value: f64| -> u32 {
            ((value / top) * h as f64).round().clamp(0.0, h as f64) as u32
        };

        for x in 0..w {
            // Column under this pixel; equal-width spans
            let i = ((x as u64 * n as u64) / w as u64) as usize;

            let ground = rows(elevation[i]);
            let wet = rows(elevation[i] + water[i]);
            let cap = capacity.get(i).map_or(0, |c| rows(elevation[i] + c));

            for level in 0..h {
                let code = if level < ground {
                    GROUND
                } else if level < wet {
                    WATER
                } else if level < cap {
                    CAPACITY
                } else {
                    continue;
                };
                let y = h - 1 - level;
                self.out[y as usize * w as usize + x as usize] = code;
            }
        }
    }
}
