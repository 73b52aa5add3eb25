// terrain/ - Terrain profile input
//
// Parsing text into elevations, plus pure queries over the static profile.
// No simulation state lives here.

mod parse;
mod profile;

pub use parse::*;
pub use profile::*;
