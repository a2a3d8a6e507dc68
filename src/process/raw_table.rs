use crate::config::RescaleConfig;
use crate::process::convert::{self, RescaleError, FIELD_COUNT};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

/// Field positions within one observation.
pub const TIME: usize = 0;
pub const MEASUREMENT_A: usize = 1;
pub const MEASUREMENT_B: usize = 2;

/// Rows of `(time, measurement_a, measurement_b)`, stored row-major as `(N, 3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    rows: Array2<f64>,
}

impl ObservationTable {
    /// Wraps an `(N, 3)` array. Any other column count is rejected.
    pub fn new(rows: Array2<f64>) -> Result<Self, RescaleError> {
        if rows.ncols() != FIELD_COUNT {
            return Err(RescaleError::FieldCount {
                expected: FIELD_COUNT,
                found: rows.ncols(),
            });
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.nrows() == 0
    }

    /// Column-major `(3, N)` view; no copy.
    pub fn columns(&self) -> ArrayView2<'_, f64> {
        self.rows.t()
    }

    pub fn time(&self) -> ArrayView1<'_, f64> {
        self.rows.index_axis(Axis(1), TIME)
    }

    pub fn measurement_a(&self) -> ArrayView1<'_, f64> {
        self.rows.index_axis(Axis(1), MEASUREMENT_A)
    }

    pub fn measurement_b(&self) -> ArrayView1<'_, f64> {
        self.rows.index_axis(Axis(1), MEASUREMENT_B)
    }

    /// New table converted to sidereal-day units. Not idempotent.
    pub fn rescaled(&self, config: &RescaleConfig) -> Result<Self, RescaleError> {
        let rows = convert::rescale_with(&self.rows, config)?;
        Ok(Self { rows })
    }

    pub fn into_array(self) -> Array2<f64> {
        self.rows
    }
}
