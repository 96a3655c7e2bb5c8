mod location;
mod poi;

pub use location::Coordinates;
pub use poi::{parse_id, Poi, PoiParams};
