mod geo;
pub mod geojson;
pub mod wkt;

pub use geo::*;
pub use geojson::*;
