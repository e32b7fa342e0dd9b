pub mod states;

pub const STATES_ALL_ENDPOINT: &str = "https://opensky-network.org/api/states/all";
