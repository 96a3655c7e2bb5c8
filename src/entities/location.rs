use geo_types::{Geometry, Point};

use crate::error::{invalid_input_error, Error};

/// A WGS84 (SRID 4326) position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(invalid_input_error(format!(
                "lat must be between -90 and 90, got {}",
                self.lat
            )));
        }

        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(invalid_input_error(format!(
                "lng must be between -180 and 180, got {}",
                self.lng
            )));
        }

        Ok(())
    }
}

// x is longitude, y is latitude
impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.lng, coordinates.lat)
    }
}

impl From<Coordinates> for Geometry<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Geometry::Point(coordinates.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_is_built_longitude_first() {
        let point: Point<f64> = Coordinates::new(48.8566, 2.3522).into();

        assert_eq!(point.x(), 2.3522);
        assert_eq!(point.y(), 48.8566);
    }

    #[test]
    fn geometry_wraps_point() {
        let geometry: Geometry<f64> = Coordinates::new(-33.8688, 151.2093).into();

        match geometry {
            Geometry::Point(point) => {
                assert_eq!(point.x(), 151.2093);
                assert_eq!(point.y(), -33.8688);
            }
            _ => panic!("expected a point"),
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(Coordinates::new(90.0, 180.0).validate().is_ok());
        assert!(Coordinates::new(-90.0, -180.0).validate().is_ok());
        assert!(Coordinates::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn out_of_range_is_invalid_input() {
        let err = Coordinates::new(90.5, 0.0).validate().unwrap_err();
        assert!(err.is_invalid_input_error());
        assert!(err.message.contains("lat"));

        let err = Coordinates::new(0.0, -180.1).validate().unwrap_err();
        assert!(err.is_invalid_input_error());
        assert!(err.message.contains("lng"));

        assert!(Coordinates::new(f64::NAN, 0.0).validate().is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).validate().is_err());
    }
}
