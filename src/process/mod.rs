// src/process/mod.rs
pub mod convert;
pub mod raw_table;
pub mod utils;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use ndarray::{Array, Array2, ArrayD, Dimension};

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};
use tracing::{debug, trace};

pub use convert::{rescale, rescale_with, RescaleError, FIELD_COUNT};
pub use raw_table::ObservationTable;

use crate::config::RescaleConfig;

/// Where the rescaler gets its observations from.
#[derive(Debug, Clone)]
pub enum HtSource {
    /// A comma-delimited text file, read once.
    Path(PathBuf),
    /// An already parsed array, any dimensionality.
    Table(ArrayD<f64>),
}

impl From<&Path> for HtSource {
    fn from(p: &Path) -> Self {
        HtSource::Path(p.to_path_buf())
    }
}

impl From<PathBuf> for HtSource {
    fn from(p: PathBuf) -> Self {
        HtSource::Path(p)
    }
}

impl<D: Dimension> From<Array<f64, D>> for HtSource {
    fn from(a: Array<f64, D>) -> Self {
        HtSource::Table(a.into_dyn())
    }
}

impl From<ObservationTable> for HtSource {
    fn from(t: ObservationTable) -> Self {
        HtSource::Table(t.into_array().into_dyn())
    }
}

/// Read `path` and parse it as an observation table.
///
/// See [`parse_ht_data`] for the accepted format. The file is read once; I/O
/// errors are returned as-is with the path attached.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_ht_data<P: AsRef<Path>>(path: P) -> Result<ObservationTable> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open HT data file: {:?}", path.as_ref()))?;
    parse_ht_data(BufReader::new(file))
        .with_context(|| format!("Failed to parse HT data file: {:?}", path.as_ref()))
}

/// Parse comma-delimited observations.
///
/// - `#` starts a comment (whole line or trailing)
/// - blank lines are skipped
/// - fields are trimmed and may be double-quoted
/// - empty or non-numeric fields become `NaN`
/// - every row must have exactly [`FIELD_COUNT`] fields
///
/// Comments are cut before quotes are interpreted, so a `#` inside a quoted
/// field still ends the line (`"19#74",1,2` leaves an unclosed quote and the
/// row is rejected). This matches the usual `genfromtxt`-style readers.
pub fn parse_ht_data<R: BufRead>(reader: R) -> Result<ObservationTable> {
    // 1) strip comments and blank lines, keeping the source line number
    let mut content = String::new();
    let mut line_numbers: Vec<usize> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", idx + 1))?;
        let data = utils::strip_comment(&line);
        if data.trim().is_empty() {
            trace!(line = idx + 1, "skipping blank or comment line");
            continue;
        }
        content.push_str(data);
        content.push('\n');
        line_numbers.push(idx + 1);
    }

    // 2) parse the remaining rows
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut values: Vec<f64> = Vec::with_capacity(line_numbers.len() * FIELD_COUNT);
    for (idx, result) in rdr.records().enumerate() {
        let line = line_numbers.get(idx).copied().unwrap_or(idx + 1);
        let record = result.with_context(|| format!("CSV parse error at line {}", line))?;
        if record.len() != FIELD_COUNT {
            anyhow::bail!(
                "line {} has {} fields, expected {}",
                line,
                record.len(),
                FIELD_COUNT
            );
        }
        values.extend(record.iter().map(utils::parse_field));
    }

    let rows = values.len() / FIELD_COUNT;
    let arr = Array2::from_shape_vec((rows, FIELD_COUNT), values)
        .context("observation buffer has the wrong length")?;
    let table = ObservationTable::new(arr)?;
    if table.is_empty() {
        anyhow::bail!("no observations found");
    }
    debug!(rows, "parsed observations");
    Ok(table)
}

/// Load (if needed) and rescale observations with the default constants.
///
/// Returns an array with the same shape as the parsed or supplied table. See
/// [`rescale_with`] for the conversion, which is not idempotent.
pub fn reading_ht_data(source: impl Into<HtSource>) -> Result<ArrayD<f64>> {
    reading_ht_data_with(source, &RescaleConfig::default())
}

pub fn reading_ht_data_with(
    source: impl Into<HtSource>,
    config: &RescaleConfig,
) -> Result<ArrayD<f64>> {
    let table = match source.into() {
        HtSource::Path(path) => {
            let rescaled = load_ht_data(&path)?
                .rescaled(config)
                .with_context(|| format!("Failed to rescale {:?}", path))?;
            return Ok(rescaled.into_array().into_dyn());
        }
        HtSource::Table(table) => table,
    };
    let out = rescale_with(&table, config)
        .with_context(|| format!("Failed to rescale array of shape {:?}", table.shape()))?;
    Ok(out)
}
