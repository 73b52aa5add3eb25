// rain.rs - Rainfall phase
//
// Uniform: every column gains the same depth.

/// Add `depth` to every column.
#[inline]
pub fn rain(water: &mut [f64], depth: f64) {
    for w in water.iter_mut() {
        *w += depth;
    }
}
