use crate::config::RescaleConfig;
use crate::process::raw_table::{MEASUREMENT_A, MEASUREMENT_B, TIME};
use ndarray::{Array, ArrayBase, Axis, Data, Dimension, RemoveAxis};
use thiserror::Error;
use tracing::debug;

/// Fields per observation: time, measurement A, measurement B.
pub const FIELD_COUNT: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RescaleError {
    #[error("cannot rescale a 0-dimensional array")]
    Scalar,
    #[error("field index {index} out of range: field axis has length {len}")]
    MissingField { index: usize, len: usize },
    #[error("expected {expected} fields per observation, found {found}")]
    FieldCount { expected: usize, found: usize },
}

/// [`rescale_with`] using the default constants.
pub fn rescale<S, D>(data: &ArrayBase<S, D>) -> Result<Array<f64, D>, RescaleError>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    rescale_with(data, &RescaleConfig::default())
}

/// Convert raw observations to sidereal-day units.
///
/// The array is read through its transpose, so for a row-major `(N, 3)` table
/// field `k` is column `k`. On that view:
///
/// - field 0: `(t - epoch_year) * sidereal_days_per_year`
/// - fields 1 and 2: `s / seconds_per_sidereal_day`
///
/// Further fields are copied as-is and the returned array has the input's shape.
/// The input is not modified.
///
/// This is **not idempotent**: feeding the output back in converts the units a
/// second time.
pub fn rescale_with<S, D>(
    data: &ArrayBase<S, D>,
    config: &RescaleConfig,
) -> Result<Array<f64, D>, RescaleError>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    if data.ndim() == 0 {
        return Err(RescaleError::Scalar);
    }

    let mut out = data.to_owned();
    {
        let mut fields = out.view_mut().reversed_axes();
        let len = fields.len_of(Axis(0));
        if len < FIELD_COUNT {
            return Err(RescaleError::MissingField {
                index: len,
                len,
            });
        }
        debug!(shape = ?data.shape(), "rescaling observations");

        let RescaleConfig {
            epoch_year,
            sidereal_days_per_year,
            seconds_per_sidereal_day,
        } = *config;

        fields
            .index_axis_mut(Axis(0), TIME)
            .mapv_inplace(|t| (t - epoch_year) * sidereal_days_per_year);
        for field in [MEASUREMENT_A, MEASUREMENT_B] {
            fields
                .index_axis_mut(Axis(0), field)
                .mapv_inplace(|s| s / seconds_per_sidereal_day);
        }
    }
    Ok(out)
}
