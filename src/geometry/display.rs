use serde::Serialize;

use crate::config::Position;

/// Clock size and on-screen origin derived from screen geometry and
/// configuration.
///
/// Recomputed whenever the screen or the configuration changes. No
/// clamping anywhere: percentages outside `[0, 100]` place the clock
/// off-screen or oversize it, which is allowed on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    /// Clock diameter in screen units.
    pub clock_size: f64,
    /// Horizontal position of the clock centre.
    pub clock_origin_x: f64,
    /// Vertical position of the clock centre.
    pub clock_origin_y: f64,
}

impl DisplayState {
    /// Computes the layout for the given screen and configuration.
    ///
    /// The diameter is `size_percent` of the shortest screen dimension;
    /// the origin is the position percentages applied to width and height.
    pub fn new(screen_width: f64, screen_height: f64, size_percent: f64, position: Position) -> Self {
        let shortest_dimension = screen_width.min(screen_height);

        Self {
            clock_size: shortest_dimension * size_percent / 100.0,
            clock_origin_x: screen_width * position.x_percent / 100.0,
            clock_origin_y: screen_height * position.y_percent / 100.0,
        }
    }
}
