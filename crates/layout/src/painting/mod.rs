mod box_painter;
mod text_painter;

pub use box_painter::{BoxStyle, KAPPA, RoundedBoxPainter};
pub use text_painter::CenteredTextPainter;
