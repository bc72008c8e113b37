use std::f64::consts::PI;
use std::fs;
use std::io;

use crate::draw::{svg::Svg, DrawConfig, DrawError};
use crate::graph::{Edge, SimpleGraph};
use crate::util::Point;

/// Draws a graph with its nodes evenly spaced on a circle.
///
/// Configured through chained builder calls and consumed by one of the
/// output calls. Drawing fails if no graph was supplied.
pub struct GraphDrawer {
    graph: Option<NodeEdgeList>,
    radius: f64,
    center: Point,
    title: String,
    config: DrawConfig,
}

/// The node and edge view the renderer consumes.
/// Owned by the drawer, so the graph itself is not referenced.
#[derive(Debug, PartialEq, Clone)]
struct NodeEdgeList {
    nodes: Vec<usize>,
    edges: Vec<Edge>,
}

impl GraphDrawer {
    pub fn new() -> Self {
        GraphDrawer {
            graph: None,
            radius: 1.0,
            center: Point::new(0.0, 0.0),
            title: String::new(),
            config: DrawConfig::default(),
        }
    }

    /// Supplies the graph to draw, converted to an owned node and edge
    /// list via its adjacency list. Isolated nodes are kept.
    pub fn graph(mut self, graph: &SimpleGraph) -> Self {
        let adj_list = graph.adjacency_list();

        let nodes = adj_list.keys().copied().collect();
        let edges = adj_list
            .iter()
            .flat_map(|(&node, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |&&neighbour| node < neighbour)
                    .map(move |&neighbour| (node, neighbour))
            })
            .collect();

        self.graph = Some(NodeEdgeList { nodes, edges });
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn canvas(mut self, config: DrawConfig) -> Self {
        self.config = config;
        self
    }

    /// Renders the drawing to an SVG document.
    pub fn to_svg(&self) -> Result<String, DrawError> {
        let graph = self.graph.as_ref().ok_or(DrawError::MissingGraph)?;
        let positions = self.positions(&graph.nodes);

        let svg = Svg {
            config: self.config,
        };

        Ok(svg.render_circular(
            &self.title,
            self.center,
            self.radius,
            &positions,
            &graph.edges,
        )?)
    }

    /// Renders the drawing and streams it to the given writer.
    pub fn to_writer(&self, writer: &mut impl io::Write) -> Result<(), DrawError> {
        let document = self.to_svg()?;

        Ok(writer.write_all(document.as_bytes())?)
    }

    /// Renders the drawing to a file. The file is only created once
    /// rendering has succeeded.
    pub fn to_file(&self, filename: &str) -> Result<(), DrawError> {
        let document = self.to_svg()?;

        Ok(fs::write(filename, document)?)
    }

    /// Places the nodes evenly spaced on the configured circle, starting at
    /// the top and going clockwise.
    fn positions(&self, nodes: &[usize]) -> Vec<(usize, Point)> {
        let mut nodes = nodes.to_vec();
        nodes.sort_unstable();

        let alpha = 2.0 * PI / nodes.len() as f64;

        nodes
            .iter()
            .enumerate()
            .map(|(i, &node)| {
                let angle = i as f64 * alpha;
                let point = Point::new(
                    self.center.x + self.radius * angle.sin(),
                    self.center.y + self.radius * angle.cos(),
                );
                (node, point)
            })
            .collect()
    }
}

impl Default for GraphDrawer {
    fn default() -> Self {
        GraphDrawer::new()
    }
}
