pub mod color;
pub mod model;

pub use color::{ColorFormatError, Rgb};
pub use model::{
    assign_led_order, is_contiguous_assignment, split_assignment, Channel, ColorPair,
    CustomTheme, LedAssignment, Target, WireColorPair, WireTheme,
};
