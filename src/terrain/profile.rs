// profile.rs - Static elevation profile
//
// Immutable once built. Column i sits at x = i, boundaries are open on both
// sides (water can leave past column 0 and column N-1).

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Terrain {
    elevations: Vec<f64>,
}

impl Terrain {
    /// Build from raw heights, rejecting negative or non-finite values.
    pub fn new(elevations: Vec<f64>) -> Result<Self> {
        if let Some((index, &value)) = elevations
            .iter()
            .enumerate()
            .find(|(_, h)| !h.is_finite() || **h < 0.0)
        {
            return Err(EngineError::InvalidElevation { index, value });
        }
        Ok(Self::from_valid(elevations))
    }

    /// Caller guarantees every height is finite and >= 0.
    pub(crate) fn from_valid(elevations: Vec<f64>) -> Self {
        Self { elevations }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elevations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }

    #[inline]
    pub fn elevations(&self) -> &[f64] {
        &self.elevations
    }

    /// Tallest column, 0 for an empty profile
    pub fn max_elevation(&self) -> f64 {
        self.elevations.iter().copied().fold(0.0, f64::max)
    }

    /// Still-water depth each column holds once every basin is full.
    ///
    /// With both ends open, water at column i can only stand as high as the
    /// lower of the tallest walls on its left and right:
    /// `min(max(h[..=i]), max(h[i..])) - h[i]`. This is priority-flood
    /// depression filling reduced to one dimension, where the flood front
    /// only ever enters from the two ends.
    pub fn capacity(&self) -> Vec<f64> {
        let n = self.len();
        let h = &self.elevations;

        let mut right_wall = vec![0.0; n];
        let mut wall = 0.0f64;
        for i in (0..n).rev() {
            wall = wall.max(h[i]);
            right_wall[i] = wall;
        }

        let mut wall = 0.0f64;
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            wall = wall.max(h[i]);
            out.push(wall.min(right_wall[i]) - h[i]);
        }
        out
    }
}
