use serde::Serialize;
use shared::opensky::states::StateVector;

/// Full projection of a state vector. Keys keep the upstream names; only `sensors` is dropped.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FlightRecord {
    pub icao24: String,
    pub callsign: String,
    pub origin_country: String,
    pub time_position: Option<i64>,
    pub last_contact: i64,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub baro_altitude: Option<f64>,
    pub on_ground: bool,
    pub velocity: Option<f64>,
    pub true_track: Option<f64>,
    pub vertical_rate: Option<f64>,
    pub geo_altitude: Option<f64>,
    pub squawk: Option<String>,
    pub spi: bool,
    pub position_source: i64,
}

/// Reduced record returned for bounding-box queries.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RegionFlightRecord {
    pub icao24: String,
    pub callsign: String,
    pub origin_country: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub altitude: Option<f64>,
    pub velocity: Option<f64>,
    pub heading: Option<f64>,
}

/// Trim and upper-case, the form callsigns are compared in.
pub fn normalize_callsign(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// First vector whose normalized callsign equals the normalized `callsign`.
pub fn find_flight(states: Vec<StateVector>, callsign: &str) -> Option<FlightRecord> {
    let wanted = normalize_callsign(callsign);
    states
        .into_iter()
        .find(|s| normalize_callsign(s.trimmed_callsign()) == wanted)
        .map(FlightRecord::from)
}

impl From<StateVector> for FlightRecord {
    fn from(s: StateVector) -> Self {
        Self {
            callsign: normalize_callsign(s.trimmed_callsign()),
            icao24: s.icao24,
            origin_country: s.origin_country,
            time_position: s.time_position,
            last_contact: s.last_contact,
            longitude: s.longitude,
            latitude: s.latitude,
            baro_altitude: s.baro_altitude,
            on_ground: s.on_ground,
            velocity: s.velocity,
            true_track: s.true_track,
            vertical_rate: s.vertical_rate,
            geo_altitude: s.geo_altitude,
            squawk: s.squawk,
            spi: s.spi,
            position_source: s.position_source,
        }
    }
}

impl From<StateVector> for RegionFlightRecord {
    fn from(s: StateVector) -> Self {
        Self {
            callsign: s.trimmed_callsign().to_string(),
            icao24: s.icao24,
            origin_country: s.origin_country,
            longitude: s.longitude,
            latitude: s.latitude,
            altitude: s.baro_altitude,
            velocity: s.velocity,
            heading: s.true_track,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vector(icao24: &str, callsign: Option<&str>) -> StateVector {
        StateVector {
            icao24: icao24.to_string(),
            callsign: callsign.map(str::to_string),
            origin_country: "US".to_string(),
            time_position: Some(0),
            last_contact: 0,
            longitude: Some(10.0),
            latitude: Some(20.0),
            baro_altitude: Some(1000.0),
            on_ground: false,
            velocity: Some(250.5),
            true_track: Some(90.0),
            vertical_rate: Some(0.0),
            sensors: Some(vec![42]),
            geo_altitude: Some(1100.0),
            squawk: Some("1200".to_string()),
            spi: false,
            position_source: 0,
        }
    }

    #[test]
    fn matches_ignoring_case_and_padding() {
        let states = vec![vector("000001", Some("DAL9")), vector("abc123", Some(" aa123 "))];
        let record = find_flight(states, "  Aa123").unwrap();
        assert_eq!(record.icao24, "abc123");
        assert_eq!(record.callsign, "AA123");
    }

    #[test]
    fn prefix_is_not_a_match() {
        let states = vec![vector("abc123", Some("AA1234"))];
        assert_eq!(find_flight(states, "AA123"), None);
    }

    #[test]
    fn null_callsigns_never_match() {
        let states = vec![vector("abc123", None)];
        assert_eq!(find_flight(states, "AA123"), None);
    }

    #[test]
    fn first_match_wins() {
        let states = vec![vector("first", Some("AA123")), vector("second", Some("AA123"))];
        assert_eq!(find_flight(states, "aa123").unwrap().icao24, "first");
    }

    #[test]
    fn flight_record_drops_sensors() {
        let value = serde_json::to_value(FlightRecord::from(vector("abc123", Some("AA123 ")))).unwrap();
        assert_eq!(
            value,
            json!({
                "icao24": "abc123",
                "callsign": "AA123",
                "origin_country": "US",
                "time_position": 0,
                "last_contact": 0,
                "longitude": 10.0,
                "latitude": 20.0,
                "baro_altitude": 1000.0,
                "on_ground": false,
                "velocity": 250.5,
                "true_track": 90.0,
                "vertical_rate": 0.0,
                "geo_altitude": 1100.0,
                "squawk": "1200",
                "spi": false,
                "position_source": 0,
            })
        );
    }

    #[test]
    fn region_record_keeps_callsign_case() {
        let record = RegionFlightRecord::from(vector("abc123", Some("aa123  ")));
        assert_eq!(record.callsign, "aa123");
        assert_eq!(record.altitude, Some(1000.0));
        assert_eq!(record.heading, Some(90.0));
    }
}
