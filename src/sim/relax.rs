// relax.rs - Relaxation phase
//
// Neighbour pairs trade water toward a level surface. Each sweep visits
// the pairs left-to-right and then right-to-left; sweeps repeat until one
// moves nothing or the budget runs out.
//
// A single transfer moves half the surface difference, capped by what the
// sender holds. Volume within the pair is exact: the same `amount` is
// subtracted from one side and added to the other.

/// Level threshold for a pair, relative once surfaces exceed 1.0 so that
/// rounding on tall profiles doesn't ping-pong forever.
#[inline]
fn level_threshold(a: f64, b: f64, tolerance: f64) -> f64 {
    tolerance * a.abs().max(b.abs()).max(1.0)
}

/// Move water across the pair `(i, i + 1)` from the higher surface to the
/// lower. Returns the amount moved (0 if the pair is level or the higher
/// side is dry).
pub fn transfer(elevation: &[f64], water: &mut [f64], i: usize, tolerance: f64) -> f64 {
    let j = i + 1;
    let si = elevation[i] + water[i];
    let sj = elevation[j] + water[j];
    let diff = si - sj;
    if diff.abs() <= level_threshold(si, sj, tolerance) {
        return 0.0;
    }

    let (from, to) = if diff > 0.0 { (i, j) } else { (j, i) };
    let amount = (diff.abs() * 0.5).min(water[from]);
    if amount <= 0.0 {
        return 0.0;
    }

    // amount <= water[from], so the sender can't go negative
    water[from] -= amount;
    water[to] += amount;
    amount
}

/// Relax the whole field. Returns the number of sweeps run.
pub fn relax(elevation: &[f64], water: &mut [f64], tolerance: f64, max_sweeps: u32) -> u32 {
    debug_assert_eq!(elevation.len(), water.len());
    let n = water.len();
    if n < 2 {
        return 0;
    }

    for sweep in 1..=max_sweeps {
        let mut moved = false;
        for i in 0..n - 1 {
            moved |= transfer(elevation, water, i, tolerance) > 0.0;
        }
        for i in (0..n - 1).rev() {
            moved |= transfer(elevation, water, i, tolerance) > 0.0;
        }
        if !moved {
            return sweep;
        }
    }
    max_sweeps
}
