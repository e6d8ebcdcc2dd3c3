//! Configuration constants for graph-analyzer
//!
//! This module contains all configurable constants used throughout the
//! application. Tick intervals can be overridden through command line flags or
//! environment variables.

use std::time::Duration;

/// Traversal animation configuration
pub mod animation {
    use super::*;

    /// Delay between two traversal steps
    pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

    /// Same as [`TICK_INTERVAL`], in the unit accepted on the command line
    pub const DEFAULT_INTERVAL_MS: &str = "500";
}

/// Vertex geometry and naming
pub mod vertex {
    /// Prefix of generated vertex labels
    pub const LABEL_PREFIX: &str = "V";

    /// Radius of a drawn vertex, used for hit testing clicks
    pub const RADIUS: f64 = 15.0;
}

/// Automatic placement of vertices built from command line edge lists
pub mod layout {
    use crate::core::Point;

    /// Center of the circle vertices are placed on
    pub const CENTER: Point = Point { x: 300.0, y: 300.0 };

    /// Radius of the circle vertices are placed on
    pub const RADIUS: f64 = 200.0;
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar redraws
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while a traversal is running
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒", "✓"];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default drawing format when not specified
    pub const DEFAULT_SKETCH_FORMAT: &str = "ascii";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_constants() {
        assert_eq!(animation::TICK_INTERVAL, Duration::from_millis(500));
        assert_eq!(
            animation::DEFAULT_INTERVAL_MS.parse::<u64>().unwrap(),
            animation::TICK_INTERVAL.as_millis() as u64
        );
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::DEFAULT_SKETCH_FORMAT, "ascii");
    }

    #[test]
    fn test_vertex_constants() {
        assert_eq!(vertex::LABEL_PREFIX, "V");
        assert!(vertex::RADIUS > 0.0);
    }
}
