// runoff.rs - Boundary runoff phase
//
// The two edge columns are open: depth above the spill threshold leaves
// the strip for good. Interior columns never drain.

/// Clip the edge columns to `threshold`. Returns the volume removed.
pub fn drain_edges(water: &mut [f64], threshold: f64) -> f64 {
    let n = water.len();
    if n == 0 {
        return 0.0;
    }

    let mut drained = spill(&mut water[0], threshold);
    if n > 1 {
        drained += spill(&mut water[n - 1], threshold);
    }
    drained
}

#[inline]
fn spill(depth: &mut f64, threshold: f64) -> f64 {
    if *depth > threshold {
        let excess = *depth - threshold;
        *depth = threshold;
        excess
    } else {
        0.0
    }
}
