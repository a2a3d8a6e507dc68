// src/tools/numeric.rs

use ndarray::{Array, ArrayBase, Data, Dimension};
use std::ops::Mul;

/// Element-wise square. Works for any dimensionality and keeps the shape.
pub fn square<A, S, D>(arr: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Copy + Mul<Output = A>,
    S: Data<Elem = A>,
    D: Dimension,
{
    arr.mapv(|x| x * x)
}

pub fn get_pi() -> f64 {
    std::f64::consts::PI
}
