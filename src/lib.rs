//! Small numeric helpers plus a rescaler for time/duration observation tables.
//!
//! The rescaler ([`process::reading_ht_data`]) takes a comma-delimited file or an
//! in-memory array of `(time, duration_a, duration_b)` rows and converts it to
//! sidereal-day units. See [`config::RescaleConfig`] for the constants it uses.

pub mod config;
pub mod process;
pub mod tools;

pub use config::RescaleConfig;
pub use process::{
    load_ht_data, parse_ht_data, reading_ht_data, reading_ht_data_with, rescale, rescale_with,
    HtSource, ObservationTable, RescaleError,
};
pub use tools::{get_pi, picky, picky_value, square, TypeError};
