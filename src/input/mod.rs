pub mod gesture;
pub mod handler;

pub use gesture::{SWIPE_THRESHOLD, SwipeTracker, swipe_direction};
pub use handler::{InputHandler, KeyAction};
