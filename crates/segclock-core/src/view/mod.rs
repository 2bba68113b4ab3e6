mod geometry;
mod render;
mod state;

pub use geometry::{window_size, MonospaceMeasure, TextExtent, TextMeasure, WINDOW_PADDING};
pub use render::{render, CounterStatus, Frame};
pub use state::{random_colours, reduce, ViewAction, ViewState};
