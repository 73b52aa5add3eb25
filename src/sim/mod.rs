// sim/ - Water simulation
//
// `WaterSim` owns the terrain and a parallel water-depth field. A tick runs
// three phases, each in its own module:
//   rain   - uniform rainfall
//   relax  - neighbour pairs trade water toward level surfaces
//   runoff - edge columns spill excess to the outside

mod rain;
mod relax;
mod runoff;

pub use rain::rain;
pub use relax::{relax, transfer};
pub use runoff::drain_edges;

use log::{debug, trace};

use crate::config::{RainPolicy, SimConfig};
use crate::error::{EngineError, Result};
use crate::terrain::Terrain;

/// Terrain + water field for one simulation run
#[derive(Debug, Clone)]
pub struct WaterSim {
    terrain: Terrain,
    water: Vec<f64>,
    config: SimConfig,

    // Rainfall queued by fill() under RainPolicy::OnFill
    pending_fills: u32,

    // Counters since construction or reset
    ticks: u64,
    runoff: f64,
}

impl WaterSim {
    pub fn new(terrain: Terrain) -> Self {
        Self::build(terrain, SimConfig::default())
    }

    pub fn with_config(terrain: Terrain, config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(terrain, config))
    }

    fn build(terrain: Terrain, config: SimConfig) -> Self {
        debug!("water sim: {} columns, {:?}", terrain.len(), config);
        Self {
            water: vec![0.0; terrain.len()],
            terrain,
            config,
            pending_fills: 0,
            ticks: 0,
            runoff: 0.0,
        }
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.terrain.len()
    }

    #[inline]
    fn check(&self, i: usize) -> Result<()> {
        if i < self.column_count() {
            Ok(())
        } else {
            Err(EngineError::IndexOutOfRange { index: i, len: self.column_count() })
        }
    }

    pub fn elevation(&self, i: usize) -> Result<f64> {
        self.check(i)?;
        Ok(self.terrain.elevations()[i])
    }

    pub fn water_level(&self, i: usize) -> Result<f64> {
        self.check(i)?;
        Ok(self.water[i])
    }

    /// Elevation plus water depth
    pub fn surface_height(&self, i: usize) -> Result<f64> {
        self.check(i)?;
        Ok(self.terrain.elevations()[i] + self.water[i])
    }

    pub fn terrain(&self) -> &Terrain { &self.terrain }
    pub fn config(&self) -> &SimConfig { &self.config }
    pub fn elevations(&self) -> &[f64] { self.terrain.elevations() }
    pub fn water_levels(&self) -> &[f64] { &self.water }
    pub fn ticks(&self) -> u64 { self.ticks }

    pub fn total_water(&self) -> f64 {
        self.water.iter().sum()
    }

    /// Volume lost over the edges since construction or the last reset
    pub fn total_runoff(&self) -> f64 {
        self.runoff
    }

    /// Queue one rainfall for the next tick. Ignored under `EveryTick`,
    /// where every tick already rains.
    pub fn fill(&mut self) {
        if self.config.rain_policy == RainPolicy::OnFill {
            self.pending_fills = self.pending_fills.saturating_add(1);
        }
    }

    /// Back to the constructed state: dry field, counters cleared.
    pub fn reset(&mut self) {
        self.water.fill(0.0);
        self.pending_fills = 0;
        self.ticks = 0;
        self.runoff = 0.0;
    }

    /// Run one tick: rain, relax, drain the edges.
    pub fn advance(&mut self) {
        let depth = match self.config.rain_policy {
            RainPolicy::EveryTick => self.config.rainfall,
            RainPolicy::OnFill => {
                let fills = std::mem::take(&mut self.pending_fills);
                self.config.rainfall * fills as f64
            }
        };
        if depth > 0.0 {
            rain(&mut self.water, depth);
        }

        let sweeps = relax(
            self.terrain.elevations(),
            &mut self.water,
            self.config.tolerance,
            self.config.max_passes,
        );
        let drained = drain_edges(&mut self.water, self.config.spill_threshold);

        self.runoff += drained;
        self.ticks += 1;
        trace!(
            "tick {}: rain {depth}, {sweeps} sweeps, drained {drained}",
            self.ticks
        );
    }
}
