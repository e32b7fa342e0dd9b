use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Formatter;

/// Number of positional fields in a state vector, not counting the optional `category`.
pub const STATE_VECTOR_LEN: usize = 17;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct StatesResponse {
    pub time: Option<i64>,
    #[serde(default)]
    pub states: Option<Vec<StateVector>>,
}

impl StatesResponse {
    /// A `null` or absent `states` list means no aircraft matched, not an error.
    pub fn into_states(self) -> Vec<StateVector> {
        self.states.unwrap_or_default()
    }
}

/// Query parameters understood by the states endpoint for spatial filtering.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lamin: f64,
    pub lomin: f64,
    pub lamax: f64,
    pub lomax: f64,
}

/// One aircraft's state as reported upstream. Upstream encodes it as a JSON array, so
/// it is decoded positionally.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    pub icao24: String,
    pub callsign: Option<String>,
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
    pub sensors: Option<Vec<i64>>,
    pub geo_altitude: Option<f64>,
    pub squawk: Option<String>,
    pub spi: bool,
    pub position_source: i64,
}

impl StateVector {
    /// Callsign with transponder padding removed. Missing callsigns become empty.
    pub fn trimmed_callsign(&self) -> &str {
        self.callsign.as_deref().unwrap_or_default().trim()
    }
}

impl<'de> Deserialize<'de> for StateVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(StateVectorVisitor)
    }
}

struct StateVectorVisitor;

impl<'de> Visitor<'de> for StateVectorVisitor {
    type Value = StateVector;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "a state vector array of at least {STATE_VECTOR_LEN} elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut index = 0;

        let vector = StateVector {
            icao24: next_field(&mut seq, &mut index)?,
            callsign: next_field(&mut seq, &mut index)?,
            origin_country: next_field(&mut seq, &mut index)?,
            time_position: next_field(&mut seq, &mut index)?,
            last_contact: next_field(&mut seq, &mut index)?,
            longitude: next_field(&mut seq, &mut index)?,
            latitude: next_field(&mut seq, &mut index)?,
            baro_altitude: next_field(&mut seq, &mut index)?,
            on_ground: next_field(&mut seq, &mut index)?,
            velocity: next_field(&mut seq, &mut index)?,
            true_track: next_field(&mut seq, &mut index)?,
            vertical_rate: next_field(&mut seq, &mut index)?,
            sensors: next_field(&mut seq, &mut index)?,
            geo_altitude: next_field(&mut seq, &mut index)?,
            squawk: next_field(&mut seq, &mut index)?,
            spi: next_field(&mut seq, &mut index)?,
            position_source: next_field(&mut seq, &mut index)?,
        };

        // Extended responses append `category`; anything past the known fields is skipped.
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(vector)
    }
}

fn next_field<'de, A, T>(seq: &mut A, index: &mut usize) -> Result<T, A::Error>
where
    A: SeqAccess<'de>,
    T: Deserialize<'de>,
{
    let value = seq
        .next_element()?
        .ok_or_else(|| de::Error::invalid_length(*index, &StateVectorVisitor))?;
    *index += 1;
    Ok(value)
}
