use js_sys::Float64Array;
use log::LevelFilter;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod sim;
pub mod terrain;

pub use config::{RainPolicy, SimConfig};
pub use error::EngineError;
pub use render::Encoder;
pub use sim::WaterSim;
pub use terrain::{ParseReport, Terrain, parse_terrain, parse_terrain_with_report};

// ============================================================================
// LANDSCAPE - Terrain profile + water simulation, driven from JS
// ============================================================================
//
// The page builds one Landscape per submitted terrain string, reads the
// elevations once, then calls advance() and re-reads water levels on every
// click. A new terrain means a new Landscape; nothing carries over.

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init(LevelFilter::Info);
}

/// Set console log verbosity: "error", "warn", "info", "debug" or "trace".
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| JsError::new(&format!("unknown log level {level:?}")))?;
    logging::init(filter);
    Ok(())
}

#[wasm_bindgen]
pub struct Landscape {
    sim: WaterSim,
    report: ParseReport,
    encoder: Encoder,
}

#[wasm_bindgen]
impl Landscape {
    /// Parse `input` and start a dry simulation with default parameters.
    #[wasm_bindgen(constructor)]
    pub fn new(input: &str) -> Self {
        let (terrain, report) = parse_terrain_with_report(input);
        Self::from_parts(WaterSim::new(terrain), report)
    }

    /// Like `new`, with parameters from a JSON object such as
    /// `{"rainfall": 0.5, "spill_threshold": 2, "rain_policy": "on_fill"}`.
    pub fn with_config(input: &str, config_json: &str) -> Result<Landscape, JsError> {
        let config = SimConfig::from_json(config_json)?;
        let (terrain, report) = parse_terrain_with_report(input);
        Ok(Self::from_parts(WaterSim::with_config(terrain, config)?, report))
    }

    pub fn column_count(&self) -> usize {
        self.sim.column_count()
    }

    pub fn elevation(&self, index: usize) -> Result<f64, JsError> {
        Ok(self.sim.elevation(index)?)
    }

    pub fn water_level(&self, index: usize) -> Result<f64, JsError> {
        Ok(self.sim.water_level(index)?)
    }

    pub fn surface_height(&self, index: usize) -> Result<f64, JsError> {
        Ok(self.sim.surface_height(index)?)
    }

    pub fn advance(&mut self) {
        self.sim.advance();
    }

    pub fn fill(&mut self) {
        self.sim.fill();
    }

    pub fn reset(&mut self) {
        self.sim.reset();
    }

    pub fn ticks(&self) -> u64 { self.sim.ticks() }
    pub fn total_water(&self) -> f64 { self.sim.total_water() }
    pub fn total_runoff(&self) -> f64 { self.sim.total_runoff() }

    /// Number of input tokens dropped while parsing
    pub fn skipped_tokens(&self) -> usize {
        self.report.skipped.len()
    }

    // Bulk copies for chart datasets
    pub fn elevations(&self) -> Float64Array {
        Float64Array::from(self.sim.elevations())
    }

    pub fn water_levels(&self) -> Float64Array {
        Float64Array::from(self.sim.water_levels())
    }

    pub fn capacity(&self) -> Float64Array {
        Float64Array::from(self.sim.terrain().capacity().as_slice())
    }

    /// Rasterize into the output buffer (see `render` for the cell codes).
    /// `scale_max <= 0` fits the tallest surface.
    pub fn render(
        &mut self,
        w: u32,
        h: u32,
        scale_max: f64,
        show_capacity: bool,
    ) -> Result<(), JsError> {
        self.resize_canvas(w, h)?;
        let scale = (scale_max > 0.0).then_some(scale_max);
        self.encoder.encode(&self.sim, scale, show_capacity);
        Ok(())
    }

    // Accessors for zero-copy canvas blits
    pub fn output_ptr(&self) -> *const u8 { self.encoder.ptr() }
    pub fn output_len(&self) -> usize { self.encoder.len() }
    pub fn width(&self) -> u32 { self.encoder.width() }
    pub fn height(&self) -> u32 { self.encoder.height() }
}

impl Landscape {
    fn from_parts(sim: WaterSim, report: ParseReport) -> Self {
        Self { sim, report, encoder: Encoder::default() }
    }

    fn resize_canvas(&mut self, w: u32, h: u32) -> Result<(), EngineError> {
        if self.encoder.width() != w || self.encoder.height() != h {
            self.encoder.resize(w, h)?;
        }
        Ok(())
    }

    pub fn sim(&self) -> &WaterSim {
        &self.sim
    }

    pub fn parse_report(&self) -> &ParseReport {
        &self.report
    }
}
