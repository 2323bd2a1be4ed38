//! Swipe gestures to directions
//!
//! A swipe is a press/release pair. It only counts once the pointer travelled
//! further than [`SWIPE_THRESHOLD`] along its dominant axis; shorter drags are
//! treated as taps and dropped.

use crate::game::Direction;

/// Minimum displacement, in pointer units, for a swipe to register
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// Approximate pixel size of a terminal cell, used to scale mouse drags
const CELL_WIDTH_UNITS: f32 = 8.0;
const CELL_HEIGHT_UNITS: f32 = 16.0;

/// Resolve a displacement into a direction.
///
/// The larger axis wins; an exact tie counts as vertical. Screen y grows
/// downwards, so a positive `dy` is `Down`.
pub fn swipe_direction(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    let (abs_dx, abs_dy) = (dx.abs(), dy.abs());

    if abs_dx.max(abs_dy) <= threshold {
        return None;
    }

    let direction = if abs_dx > abs_dy {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };

    Some(direction)
}

/// Tracks one pointer from press to release
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finish the gesture; the tracker is cleared either way
    pub fn release(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (start_x, start_y) = self.start.take()?;
        swipe_direction(x - start_x, y - start_y, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Press at a terminal cell
    pub fn press_cell(&mut self, column: u16, row: u16) {
        let (x, y) = cell_to_units(column, row);
        self.press(x, y);
    }

    /// Release at a terminal cell
    pub fn release_cell(&mut self, column: u16, row: u16) -> Option<Direction> {
        let (x, y) = cell_to_units(column, row);
        self.release(x, y)
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_to_units(column: u16, row: u16) -> (f32, f32) {
    (
        f32::from(column) * CELL_WIDTH_UNITS,
        f32::from(row) * CELL_HEIGHT_UNITS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_drags_ignored() {
        assert_eq!(swipe_direction(0.0, 0.0, SWIPE_THRESHOLD), None);
        assert_eq!(swipe_direction(30.0, 0.0, SWIPE_THRESHOLD), None);
        assert_eq!(swipe_direction(-12.0, 29.9, SWIPE_THRESHOLD), None);
    }

    #[test]
    fn test_dominant_axis() {
        assert_eq!(
            swipe_direction(31.0, 5.0, SWIPE_THRESHOLD),
            Some(Direction::Right)
        );
        assert_eq!(
            swipe_direction(-80.0, 40.0, SWIPE_THRESHOLD),
            Some(Direction::Left)
        );
        assert_eq!(
            swipe_direction(10.0, 45.0, SWIPE_THRESHOLD),
            Some(Direction::Down)
        );
        assert_eq!(
            swipe_direction(-20.0, -60.0, SWIPE_THRESHOLD),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_tie_is_vertical() {
        assert_eq!(
            swipe_direction(50.0, -50.0, SWIPE_THRESHOLD),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_tracker_press_release() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.release(100.0, 100.0), None);

        tracker.press(100.0, 100.0);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.release(160.0, 110.0), Some(Direction::Right));
        assert!(!tracker.is_tracking());

        tracker.press(0.0, 0.0);
        tracker.cancel();
        assert_eq!(tracker.release(0.0, 90.0), None);
    }

    #[test]
    fn test_tracker_terminal_cells() {
        let mut tracker = SwipeTracker::new();

        // Four columns is 32 units
        tracker.press_cell(10, 5);
        assert_eq!(tracker.release_cell(14, 5), Some(Direction::Right));

        // Two rows is 32 units
        tracker.press_cell(10, 5);
        assert_eq!(tracker.release_cell(10, 3), Some(Direction::Up));

        // One row is only 16
        tracker.press_cell(10, 5);
        assert_eq!(tracker.release_cell(10, 6), None);
    }
}
