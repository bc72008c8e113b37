use std::collections::BTreeMap;

use tera::{Context, Tera};

use crate::draw::DrawConfig;
use crate::graph::Edge;
use crate::util::{scale::PointScaler, Point};

const NODE_COLOR: &str = "#D3D3D3";
const EDGE_COLOR: &str = "black";

static TEMPLATE: &str = include_str!("../templates/graph.svg");

/// Renders a circular graph layout to an SVG document.
///
/// World coordinates are mapped onto the canvas with a single scale factor
/// for both axes, so the reference circle stays a circle.
pub struct Svg {
    pub config: DrawConfig,
}

impl Svg {
    /// The side length of the square drawing area inside the canvas.
    fn side(&self) -> f64 {
        self.config.width.min(self.config.height) as f64
    }

    fn offsets(&self) -> (f64, f64) {
        let padding = self.config.padding as f64;
        (
            padding + (self.config.width as f64 - self.side()) / 2.0,
            padding + (self.config.height as f64 - self.side()) / 2.0,
        )
    }

    fn scaled_point(&self, point: &Point, scaler: &PointScaler) -> Point {
        let unit = scaler.scale_point(point);
        let (x_offset, y_offset) = self.offsets();

        // SVG y grows downwards, so the unit y is flipped.
        Point {
            x: unit.x * self.side() + x_offset,
            y: (1.0 - unit.y) * self.side() + y_offset,
        }
    }

    /// Renders nodes at the given world positions, one line per edge and a
    /// dashed reference circle around the layout.
    pub fn render_circular(
        &self,
        name: &str,
        center: Point,
        radius: f64,
        positions: &[(usize, Point)],
        edges: &[Edge],
    ) -> Result<String, tera::Error> {
        let scaler = PointScaler::from_circle_bounds(center, radius);

        let scaled: BTreeMap<usize, Point> = positions
            .iter()
            .map(|(label, point)| (*label, self.scaled_point(point, &scaler)))
            .collect();

        let points: Vec<(Point, &str)> = scaled
            .values()
            .map(|point| (*point, NODE_COLOR))
            .collect();

        let paths: Vec<(String, &str)> = edges
            .iter()
            .filter_map(|(from, to)| match (scaled.get(from), scaled.get(to)) {
                (Some(p1), Some(p2)) => Some((
                    format!("M {} {} L {} {}", p1.x, p1.y, p2.x, p2.y),
                    EDGE_COLOR,
                )),
                _ => None,
            })
            .collect();

        let canvas_width = (self.config.width + 2 * self.config.padding) as f64;
        let canvas_height = (self.config.height + 2 * self.config.padding) as f64;

        let mut context = Context::new();
        context.insert("name", &name);
        context.insert("width", &canvas_width);
        context.insert("height", &canvas_height);
        context.insert("circle", &self.scaled_point(&center, &scaler));
        context.insert("circle_radius", &(self.side() / 2.0));
        context.insert("node_radius", &self.config.node_radius);
        context.insert("title_x", &(canvas_width / 2.0));
        context.insert("title_y", &(self.config.padding as f64 / 2.0));
        context.insert("points", &points);
        context.insert("paths", &paths);

        Tera::one_off(TEMPLATE, &context, true)
    }
}
