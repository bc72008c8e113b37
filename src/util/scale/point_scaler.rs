use crate::util::{scale::Scaler, Point};

/// Normalizes points from a world-space bounding box to the unit square.
pub struct PointScaler {
    pub x_scaler: Scaler<f64>,
    pub y_scaler: Scaler<f64>,
}

impl PointScaler {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        PointScaler {
            x_scaler: Scaler::new(min_x, max_x),
            y_scaler: Scaler::new(min_y, max_y),
        }
    }

    /// Builds a scaler for the square bounding box of a circle.
    /// Both axes get the same range, so the mapping keeps the aspect ratio.
    pub fn from_circle_bounds(center: Point, radius: f64) -> Self {
        PointScaler::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    pub fn scale_point(&self, point: &Point) -> Point {
        Point {
            x: self.x_scaler.scale(point.x),
            y: self.y_scaler.scale(point.y),
        }
    }
}
