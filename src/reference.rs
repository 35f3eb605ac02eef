//! Built-in instrument range reference data.

use crate::data_types::{InstrumentRange, MAX_PITCH};
use eyre::{ensure, Result, WrapErr};

const INSTRUMENT_RANGES_JSON: &str = include_str!("../data/instrument_ranges.json");

/// Parses and validates a JSON array of instrument ranges.
pub fn parse_instrument_ranges(json: &str) -> Result<Vec<InstrumentRange>> {
    let ranges: Vec<InstrumentRange> =
        serde_json::from_str(json).wrap_err("failed to parse instrument ranges")?;
    for range in &ranges {
        ensure!(
            range.min <= range.max,
            "instrument '{}' has min {} above max {}",
            range.label,
            range.min,
            range.max
        );
        ensure!(
            range.max <= MAX_PITCH,
            "instrument '{}' has max {} above pitch {}",
            range.label,
            range.max,
            MAX_PITCH
        );
    }
    Ok(ranges)
}

/// The instrument ranges shipped with the crate, in file order.
pub fn builtin_instrument_ranges() -> Result<Vec<InstrumentRange>> {
    parse_instrument_ranges(INSTRUMENT_RANGES_JSON).wrap_err("built-in reference data is invalid")
}
