//! Static registry of Norwegian airports
//!
//! Coordinates are WGS84 (EPSG:4326). Sources: Avinor AIS, ICAO location
//! indicators. The list is compiled in and read-only for the process
//! lifetime; iteration order is declaration order.
//!
//! Codes are display labels only. The dataset contains a duplicate (ENST
//! appears for both Stokmarknes and Sandnessjøen), so nothing in this crate
//! may use `code` as a unique key.

use serde::Serialize;

use crate::models::{Airport, AirportClass, Coordinate};
use crate::models::AirportClass::{Primary, Private, Regional};

const fn airport(
    name: &'static str,
    code: &'static str,
    latitude: f64,
    longitude: f64,
    class: AirportClass,
) -> Airport {
    Airport {
        name,
        code,
        location: Coordinate::new(latitude, longitude),
        class,
    }
}

pub static NORWEGIAN_AIRPORTS: &[Airport] = &[
    // Primary airports (jet capacity)
    airport("Oslo Lufthavn, Gardermoen", "ENGM", 60.1939, 11.1004, Primary),
    airport("Bergen Lufthavn, Flesland", "ENBR", 60.2934, 5.2181, Primary),
    airport("Stavanger Lufthavn, Sola", "ENZV", 58.8767, 5.6378, Primary),
    airport("Trondheim Lufthavn, Værnes", "ENVA", 63.4578, 10.9242, Primary),
    airport("Bodø Lufthavn", "ENBO", 67.2692, 14.3653, Primary),
    airport("Tromsø Lufthavn, Langnes", "ENTC", 69.6833, 18.9167, Primary),
    airport("Kristiansand Lufthavn, Kjevik", "ENCN", 58.2044, 8.0853, Primary),
    airport("Haugesund Lufthavn, Karmøy", "ENHD", 59.3453, 5.2084, Primary),
    airport("Ålesund Lufthavn, Vigra", "ENAL", 62.5625, 6.1197, Primary),
    airport("Sandefjord Lufthavn, Torp", "ENTO", 59.1867, 10.2586, Primary),
    // Regional airports - Nord-Norge
    airport("Alta Lufthavn", "ENAT", 69.9761, 23.3717, Regional),
    airport("Bardufoss Lufthavn", "ENDU", 69.0558, 18.5404, Regional),
    airport("Brønnøysund Lufthavn, Brønnøy", "ENBN", 65.4611, 12.2175, Regional),
    airport("Harstad/Narvik Lufthavn, Evenes", "ENEV", 68.4913, 16.6781, Regional),
    airport("Hasvik Lufthavn", "ENHK", 70.4867, 22.1397, Regional),
    airport("Hammerfest Lufthavn", "ENHF", 70.6797, 23.6686, Regional),
    airport("Kirkenes Lufthavn, Høybuktmoen", "ENKR", 69.7258, 29.8922, Regional),
    airport("Mehamn Lufthavn", "ENMH", 71.0297, 27.8267, Regional),
    airport("Mo i Rana Lufthavn, Røssvoll", "ENRA", 66.3639, 14.3014, Regional),
    airport("Molde Lufthavn, Årø", "ENML", 62.7447, 7.2625, Regional),
    airport("Mosjøen Lufthavn, Kjærstad", "ENMS", 65.7839, 13.2149, Regional),
    // Narvik Framnes closed 2017, replaced by Harstad/Narvik Evenes (ENEV)
    airport("Røros Lufthavn", "ENRS", 62.5781, 11.3425, Regional),
    airport("Svolvær Lufthavn, Helle", "ENSH", 68.2433, 14.6692, Regional),
    airport("Sørkjosen Lufthavn", "ENSR", 69.7868, 20.9594, Regional),
    airport("Stokmarknes Lufthavn, Skagen", "ENST", 68.5789, 15.0334, Regional),
    airport("Sandnessjøen Lufthavn, Stokka", "ENST", 65.9568, 12.4689, Regional),
    airport("Leknes Lufthavn", "ENLK", 68.1525, 13.6094, Regional),
    airport("Vardø Lufthavn, Svartnes", "ENSS", 70.3554, 31.0449, Regional),
    airport("Vadsø Lufthavn", "ENVD", 70.0653, 29.8447, Regional),
    airport("Andøya Lufthavn", "ENAN", 69.2925, 16.1442, Regional),
    airport("Berlevåg Lufthavn", "ENBV", 70.8714, 29.0342, Regional),
    airport("Båtsfjord Lufthavn", "ENBS", 70.6005, 29.6914, Regional),
    airport("Honningsvåg Lufthavn, Valan", "ENHV", 71.0097, 25.9836, Regional),
    airport("Lakselv Lufthavn, Banak", "ENNA", 70.0688, 24.9735, Regional),
    airport("Værøy Helikopterhavn", "ENVR", 67.6547, 12.7258, Regional),
    // Regional airports - Vestlandet
    airport("Florø Lufthavn", "ENFL", 61.5836, 5.0247, Regional),
    airport("Førde Lufthavn, Bringeland", "ENBL", 61.3911, 5.7572, Regional),
    airport("Ørsta-Volda Lufthavn, Hovden", "ENOV", 62.1800, 6.0747, Regional),
    airport("Sandane Lufthavn, Anda", "ENSD", 61.8300, 6.1058, Regional),
    airport("Sunndalsøra Lufthavn, Vinnu", "ENSU", 62.6567, 8.6811, Regional),
    // Regional airports - Midt-Norge
    airport("Kristiansund Lufthavn, Kvernberget", "ENKB", 63.1118, 7.8245, Regional),
    airport("Ørland Lufthavn", "ENOL", 63.6989, 9.6040, Regional),
    airport("Rørvik Lufthavn, Ryum", "ENRM", 64.8383, 11.1461, Regional),
    airport("Namsos Lufthavn, Høknesøra", "ENNM", 64.4722, 11.5786, Regional),
    airport("Oppdal Lufthavn, Fagerhaug", "ENOP", 62.6513, 9.8516, Regional),
    // Regional airports - Østlandet
    airport("Sogndal Lufthavn, Haukåsen", "ENSG", 61.1561, 7.1378, Regional),
    airport("Notodden Lufthavn", "ENNO", 59.5656, 9.2122, Regional),
    airport("Fagernes Lufthavn, Leirin", "ENFG", 61.0156, 9.2881, Regional),
    airport("Skien Lufthavn, Geiteryggen", "ENSN", 59.1850, 9.5669, Regional),
    airport("Dagali Lufthavn", "ENDI", 60.4167, 8.5077, Regional),
    // Regional airports - Sørlandet
    airport("Lista Lufthavn", "ENLI", 58.0994, 6.6261, Regional),
    // Regional airports - Svalbard
    airport("Svalbard Lufthavn, Longyear", "ENSB", 78.2461, 15.4656, Regional),
    // Private airports and airfields
    airport("Moss Lufthavn, Rygge", "ENRY", 59.3789, 10.7856, Private),
    airport("Stord Lufthavn, Sørstokken", "ENSO", 59.7919, 5.3408, Private),
    airport("Kjeller Flyplass", "ENKJ", 59.9683, 11.0367, Private),
    airport("Rakkestad Flyplass, Åstorp", "ENRK", 59.3686, 11.3450, Private),
    airport("Tønsberg Flyplass, Jarlsberg", "ENJB", 59.2842, 10.2592, Private),
];

/// Airport counts per classification tier
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AirportStats {
    pub primary: usize,
    pub regional: usize,
    pub private: usize,
    pub total: usize,
}

/// Count registry airports by classification tier
#[must_use]
pub fn airport_stats() -> AirportStats {
    let count = |class: AirportClass| {
        NORWEGIAN_AIRPORTS
            .iter()
            .filter(|a| a.class == class)
            .count()
    };

    AirportStats {
        primary: count(Primary),
        regional: count(Regional),
        private: count(Private),
        total: NORWEGIAN_AIRPORTS.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_nonempty() {
        assert!(!NORWEGIAN_AIRPORTS.is_empty());
    }

    #[test]
    fn test_airport_stats() {
        let stats = airport_stats();
        assert_eq!(stats.primary, 10);
        assert_eq!(stats.regional, 42);
        assert_eq!(stats.private, 5);
        assert_eq!(stats.total, 57);
    }

    #[test]
    fn test_all_coordinates_are_valid() {
        for airport in NORWEGIAN_AIRPORTS {
            assert!(
                airport.location.is_valid(),
                "invalid coordinates for {}",
                airport.name
            );
        }
    }

    // The dataset genuinely contains a duplicated code; consumers must treat
    // `code` as a display label. This test keeps the duplicate from being
    // "cleaned up" into a unique key.
    #[test]
    fn test_duplicate_enst_code_is_preserved() {
        let enst: Vec<_> = NORWEGIAN_AIRPORTS
            .iter()
            .filter(|a| a.code == "ENST")
            .collect();
        assert_eq!(enst.len(), 2);
        assert_ne!(enst[0].name, enst[1].name);
    }

    #[test]
    fn test_iteration_order_is_declaration_order() {
        assert_eq!(NORWEGIAN_AIRPORTS[0].code, "ENGM");
        assert_eq!(NORWEGIAN_AIRPORTS[NORWEGIAN_AIRPORTS.len() - 1].code, "ENJB");
    }
}
