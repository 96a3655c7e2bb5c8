pub mod pois;
