pub mod font;

pub use font::{FontError, FontMetrics, FontRole};
