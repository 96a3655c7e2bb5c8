use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;
use crate::error::{invalid_input_error, not_found_error, Error};

/// A stored point of interest as it goes out on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
}

impl Poi {
    pub fn new(id: i32, params: PoiParams) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            lat: params.lat,
            lng: params.lng,
        }
    }
}

/// Parses a POI id taken from the URL. Integers that cannot be a stored id
/// are reported as not found rather than as malformed input.
pub fn parse_id(raw: &str) -> Result<i32, Error> {
    if let Ok(id) = raw.parse() {
        return Ok(id);
    }

    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found_error());
    }

    Err(invalid_input_error(format!("invalid id {:?}", raw)))
}

/// Body accepted by create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoiParams {
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
}

impl PoiParams {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(invalid_input_error("name must not be empty"));
        }

        self.coordinates().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cafe() -> PoiParams {
        PoiParams {
            name: "Cafe".into(),
            description: "Coffee".into(),
            lat: 48.8566,
            lng: 2.3522,
        }
    }

    #[test]
    fn valid_params() {
        assert!(cafe().validate().is_ok());

        let params = PoiParams {
            description: "".into(),
            ..cafe()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let params = PoiParams {
            name: "   ".into(),
            ..cafe()
        };

        assert!(params.validate().unwrap_err().is_invalid_input_error());
    }

    #[test]
    fn missing_or_mistyped_fields_fail_to_deserialize() {
        let missing_name = json!({"description": "Coffee", "lat": 1.0, "lng": 2.0});
        assert!(serde_json::from_value::<PoiParams>(missing_name).is_err());

        let string_lat = json!({"name": "Cafe", "description": "Coffee", "lat": "1.0", "lng": 2.0});
        assert!(serde_json::from_value::<PoiParams>(string_lat).is_err());

        let numeric_name = json!({"name": 5, "description": "Coffee", "lat": 1.0, "lng": 2.0});
        assert!(serde_json::from_value::<PoiParams>(numeric_name).is_err());
    }

    #[test]
    fn ids_from_the_url() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-3").unwrap(), -3);

        assert!(parse_id("99999999999").unwrap_err().is_not_found_error());
        assert!(parse_id("-99999999999").unwrap_err().is_not_found_error());

        for raw in ["abc", "", "-", "1.5", "12abc"] {
            assert!(parse_id(raw).unwrap_err().is_invalid_input_error());
        }
    }

    #[test]
    fn serializes_flat_record() {
        let poi = Poi::new(7, cafe());

        assert_eq!(
            serde_json::to_value(&poi).unwrap(),
            json!({
                "id": 7,
                "name": "Cafe",
                "description": "Coffee",
                "lat": 48.8566,
                "lng": 2.3522,
            })
        );
    }
}
