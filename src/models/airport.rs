//! Airport model for the static registry

use serde::Serialize;

use super::Coordinate;

/// Classification tier of a Norwegian airport
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AirportClass {
    /// Major airports with jet capacity
    Primary,
    /// Regional airports and helicopter ports
    Regional,
    /// Private airports and airfields
    Private,
}

/// A named airport location. Registry entries are compiled in and live for
/// the whole process, hence the `'static` string fields.
///
/// `code` is an ICAO-style display label, NOT a unique key: the source
/// dataset contains duplicate codes. Never index airports by `code`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Airport {
    pub name: &'static str,
    pub code: &'static str,
    pub location: Coordinate,
    pub class: AirportClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_serializes_with_class_tag() {
        let airport = Airport {
            name: "Oslo Lufthavn, Gardermoen",
            code: "ENGM",
            location: Coordinate::new(60.1939, 11.1004),
            class: AirportClass::Primary,
        };

        let json = serde_json::to_value(&airport).unwrap();
        assert_eq!(json["code"], "ENGM");
        assert_eq!(json["class"], "primary");
        assert_eq!(json["location"]["latitude"], 60.1939);
    }
}
