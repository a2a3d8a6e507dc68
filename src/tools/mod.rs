// src/tools/mod.rs

pub mod numeric;
pub mod picky;

pub use numeric::{get_pi, square};
pub use picky::{picky, picky_value, TypeError};
