use std::collections::BTreeMap;

use crate::graph::{BadGraphInput, Edge};
use crate::util::{is_rectangular, is_square, is_symmetric, transpose};

/// A simple undirected graph on nodes labeled 1..=n.
///
/// The canonical representation is a symmetric n×n neighbourhood matrix
/// over {0, 1} with a zero diagonal. Every constructor validates those
/// invariants and returns an error instead of a half-built graph.
#[derive(Debug, PartialEq, Clone)]
pub struct SimpleGraph {
    matrix: Vec<Vec<usize>>,
}

impl SimpleGraph {
    /// Creates a graph taking the given matrix as canonical state.
    pub fn from_neighbourhood_matrix(matrix: Vec<Vec<usize>>) -> Result<Self, BadGraphInput> {
        Self::validate(&matrix)?;

        Ok(SimpleGraph { matrix })
    }

    /// Creates a graph from a mapping of 1-indexed node labels to their
    /// neighbour labels. The node count is the number of keys.
    ///
    /// The list is not symmetrized: a neighbour relation that is not listed
    /// mutually fails validation. Labels outside of 1..=n are rejected
    /// before any matrix cell is touched.
    pub fn from_adjacency_list(
        adj_list: &BTreeMap<usize, Vec<usize>>,
    ) -> Result<Self, BadGraphInput> {
        let node_count = adj_list.len();
        let mut matrix = vec![vec![0; node_count]; node_count];

        for (&node, neighbours) in adj_list {
            Self::check_label(node, node_count)?;
            for &neighbour in neighbours {
                Self::check_label(neighbour, node_count)?;
                matrix[node - 1][neighbour - 1] += 1;
            }
        }

        Self::from_neighbourhood_matrix(matrix)
    }

    /// Creates a graph from an n×e incidence matrix with one column per
    /// edge. Every column must contain exactly two 1-entries, which mark
    /// the edge's endpoints.
    pub fn from_incidence_matrix(inc_matrix: &[Vec<usize>]) -> Result<Self, BadGraphInput> {
        // A ragged matrix has no well defined columns to read edges from.
        if !is_rectangular(inc_matrix) {
            return Err(BadGraphInput::Incorrect);
        }

        let node_count = inc_matrix.len();
        let mut matrix = vec![vec![0; node_count]; node_count];

        for edge in transpose(inc_matrix) {
            let endpoints: Vec<usize> = edge
                .iter()
                .enumerate()
                .filter(|(_, &val)| val == 1)
                .map(|(node, _)| node)
                .collect();

            if endpoints.len() != 2 {
                return Err(BadGraphInput::InvalidEdge(endpoints.len()));
            }

            matrix[endpoints[0]][endpoints[1]] += 1;
            matrix[endpoints[1]][endpoints[0]] += 1;
        }

        Self::from_neighbourhood_matrix(matrix)
    }

    fn check_label(label: usize, node_count: usize) -> Result<(), BadGraphInput> {
        if label == 0 || label > node_count {
            return Err(BadGraphInput::NodeOutOfBounds(label));
        }

        Ok(())
    }

    fn validate(matrix: &[Vec<usize>]) -> Result<(), BadGraphInput> {
        // Squareness first, the remaining checks index into full rows.
        if !is_square(matrix) {
            return Err(BadGraphInput::Incorrect);
        }
        if (0..matrix.len()).any(|i| matrix[i][i] != 0) {
            return Err(BadGraphInput::Loops);
        }
        if matrix.iter().flatten().any(|&val| val > 1) {
            return Err(BadGraphInput::MultipleEdges);
        }
        if !is_symmetric(matrix) {
            return Err(BadGraphInput::Incorrect);
        }

        Ok(())
    }

    /// Returns true if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Returns the number of nodes in this graph.
    pub fn order(&self) -> usize {
        self.matrix.len()
    }

    /// Returns the number of edges in this graph.
    pub fn size(&self) -> usize {
        // Symmetry counts every edge twice.
        self.matrix.iter().flatten().sum::<usize>() / 2
    }

    /// Returns the 1-indexed node labels in ascending order.
    pub fn nodes(&self) -> Vec<usize> {
        (1..=self.order()).collect()
    }

    /// Returns every edge once as (a, b) with a < b, ordered by a row-major
    /// scan of the upper triangle.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.size());
        for i in 0..self.order() {
            for j in (i + 1)..self.order() {
                if self.matrix[i][j] == 1 {
                    edges.push((i + 1, j + 1));
                }
            }
        }

        edges
    }

    /// Returns the canonical neighbourhood matrix.
    pub fn neighbourhood_matrix(&self) -> &Vec<Vec<usize>> {
        &self.matrix
    }

    /// Returns the adjacency list view: each 1-indexed node label mapped to
    /// its neighbour labels in ascending order.
    pub fn adjacency_list(&self) -> BTreeMap<usize, Vec<usize>> {
        self.matrix
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let neighbours = row
                    .iter()
                    .enumerate()
                    .filter(|(_, &val)| val == 1)
                    .map(|(j, _)| j + 1)
                    .collect();
                (i + 1, neighbours)
            })
            .collect()
    }

    /// Returns the incidence matrix view with one column per edge.
    /// Columns are numbered by a row-major scan of the upper triangle, the
    /// same order in which edges() lists them.
    pub fn incidence_matrix(&self) -> Vec<Vec<usize>> {
        let node_count = self.order();
        let mut matrix = vec![vec![0; self.size()]; node_count];

        let mut current_edge = 0;
        for i in 0..node_count {
            for j in (i + 1)..node_count {
                if self.matrix[i][j] == 1 {
                    matrix[i][current_edge] = 1;
                    matrix[j][current_edge] = 1;
                    current_edge += 1;
                }
            }
        }

        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The path 2-1-3.
    fn path_graph() -> SimpleGraph {
        let mut adj_list = BTreeMap::new();
        adj_list.insert(1, vec![2, 3]);
        adj_list.insert(2, vec![1]);
        adj_list.insert(3, vec![1]);

        SimpleGraph::from_adjacency_list(&adj_list).unwrap()
    }

    fn triangle_graph() -> SimpleGraph {
        SimpleGraph::from_neighbourhood_matrix(vec![
            vec![0, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn neighbourhood_matrix_is_kept_as_is() {
        let matrix = vec![vec![0, 1], vec![1, 0]];
        let graph = SimpleGraph::from_neighbourhood_matrix(matrix.clone()).unwrap();

        assert_eq!(
            graph.neighbourhood_matrix(),
            &matrix,
            "A valid matrix should be the canonical state unchanged."
        );
    }

    #[test]
    fn empty_matrix_gives_empty_graph() {
        let graph = SimpleGraph::from_neighbourhood_matrix(Vec::new()).unwrap();

        assert!(graph.is_empty(), "Graph without nodes should be empty.");
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn self_loop_errors() {
        let err = SimpleGraph::from_neighbourhood_matrix(vec![vec![1]]).err();

        assert_eq!(
            err,
            Some(BadGraphInput::Loops),
            "A nonzero diagonal should be rejected as a loop."
        );
    }

    #[test]
    fn multi_edge_errors() {
        let err = SimpleGraph::from_neighbourhood_matrix(vec![vec![0, 2], vec![2, 0]]).err();

        assert_eq!(
            err,
            Some(BadGraphInput::MultipleEdges),
            "An entry greater than one should be rejected as a multi edge."
        );
    }

    #[test]
    fn asymmetric_matrix_errors() {
        let err = SimpleGraph::from_neighbourhood_matrix(vec![vec![0, 1], vec![0, 0]]).err();

        assert_eq!(
            err,
            Some(BadGraphInput::Incorrect),
            "An asymmetric matrix should be rejected."
        );
    }

    #[test]
    fn non_square_matrix_errors() {
        let err = SimpleGraph::from_neighbourhood_matrix(vec![vec![0, 1], vec![1]]).err();

        assert_eq!(
            err,
            Some(BadGraphInput::Incorrect),
            "A ragged matrix should be rejected."
        );
    }

    #[test]
    fn loop_error_wins_over_later_checks() {
        // Matrix violating all three invariants at once.
        let err = SimpleGraph::from_neighbourhood_matrix(vec![vec![1, 2], vec![0, 0]]).err();

        assert_eq!(err, Some(BadGraphInput::Loops));
    }

    #[test]
    fn adjacency_list_builds_expected_matrix() {
        let graph = path_graph();

        assert_eq!(
            graph.neighbourhood_matrix(),
            &vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]],
            "The path 2-1-3 should connect node 1 to both others."
        );
    }

    #[test]
    fn adjacency_list_is_not_symmetrized() {
        let mut adj_list = BTreeMap::new();
        adj_list.insert(1, vec![2]);
        adj_list.insert(2, Vec::new());

        let err = SimpleGraph::from_adjacency_list(&adj_list).err();

        assert_eq!(
            err,
            Some(BadGraphInput::Incorrect),
            "A one-sided neighbour relation should fail the symmetry check."
        );
    }

    #[test]
    fn adjacency_list_with_out_of_bounds_neighbour_errors() {
        let mut adj_list = BTreeMap::new();
        adj_list.insert(1, vec![3]);
        adj_list.insert(2, vec![1]);

        let err = SimpleGraph::from_adjacency_list(&adj_list).err();

        assert_eq!(
            err,
            Some(BadGraphInput::NodeOutOfBounds(3)),
            "Two nodes can't have a neighbour labeled 3."
        );
    }

    #[test]
    fn adjacency_list_with_out_of_bounds_key_errors() {
        let mut adj_list = BTreeMap::new();
        adj_list.insert(1, vec![5]);
        adj_list.insert(5, vec![1]);

        let err = SimpleGraph::from_adjacency_list(&adj_list).err();

        assert_eq!(
            err,
            Some(BadGraphInput::NodeOutOfBounds(5)),
            "Two keys mean two nodes, so label 5 is out of bounds."
        );
    }

    #[test]
    fn adjacency_list_with_zero_label_errors() {
        let mut adj_list = BTreeMap::new();
        adj_list.insert(0, vec![1]);
        adj_list.insert(1, vec![0]);

        let err = SimpleGraph::from_adjacency_list(&adj_list).err();

        assert_eq!(
            err,
            Some(BadGraphInput::NodeOutOfBounds(0)),
            "Labels are 1-indexed, 0 is out of bounds."
        );
    }

    #[test]
    fn incidence_matrix_builds_expected_graph() {
        let graph = SimpleGraph::from_incidence_matrix(&[
            vec![1, 1, 0],
            vec![1, 0, 1],
            vec![0, 1, 1],
        ])
        .unwrap();

        assert_eq!(
            graph,
            triangle_graph(),
            "Three columns pairing all nodes should give the triangle."
        );
    }

    #[test]
    fn incidence_column_with_one_endpoint_errors() {
        let err = SimpleGraph::from_incidence_matrix(&[vec![1], vec![0], vec![0]]).err();

        assert_eq!(
            err,
            Some(BadGraphInput::InvalidEdge(1)),
            "A column with a single 1-entry is not an edge."
        );
    }

    #[test]
    fn incidence_column_with_three_endpoints_errors() {
        let err = SimpleGraph::from_incidence_matrix(&[vec![1], vec![1], vec![1]]).err();

        assert_eq!(
            err,
            Some(BadGraphInput::InvalidEdge(3)),
            "A column with three 1-entries is not an edge."
        );
    }

    #[test]
    fn duplicate_incidence_columns_error() {
        let err =
            SimpleGraph::from_incidence_matrix(&[vec![1, 1], vec![1, 1], vec![0, 0]]).err();

        assert_eq!(
            err,
            Some(BadGraphInput::MultipleEdges),
            "Two columns for the same node pair are a multi edge."
        );
    }

    #[test]
    fn ragged_incidence_matrix_errors() {
        let err = SimpleGraph::from_incidence_matrix(&[vec![1, 1], vec![1]]).err();

        assert_eq!(err, Some(BadGraphInput::Incorrect));
    }

    #[test]
    fn order_size_nodes_and_edges_work() {
        let graph = path_graph();

        assert_eq!(graph.order(), 3, "The path has three nodes.");
        assert_eq!(graph.size(), 2, "The path has two edges.");
        assert_eq!(graph.nodes(), vec![1, 2, 3]);
        assert_eq!(
            graph.edges(),
            vec![(1, 2), (1, 3)],
            "Edges should come out in upper triangle order."
        );
    }

    #[test]
    fn adjacency_list_view_works() {
        let graph = path_graph();
        let adj_list = graph.adjacency_list();

        assert_eq!(adj_list[&1], vec![2, 3]);
        assert_eq!(adj_list[&2], vec![1]);
        assert_eq!(adj_list[&3], vec![1]);
    }

    #[test]
    fn incidence_matrix_view_works() {
        let inc_matrix = path_graph().incidence_matrix();

        assert_eq!(
            inc_matrix,
            vec![vec![1, 1], vec![1, 0], vec![0, 1]],
            "Node 1 sits on both edges, nodes 2 and 3 on one each."
        );
    }

    #[test]
    fn neighbourhood_matrix_round_trips() {
        let graph = triangle_graph();
        let rebuilt =
            SimpleGraph::from_neighbourhood_matrix(graph.neighbourhood_matrix().clone()).unwrap();

        assert_eq!(rebuilt, graph);
    }

    #[test]
    fn adjacency_list_round_trips() {
        let graph = path_graph();
        let rebuilt = SimpleGraph::from_adjacency_list(&graph.adjacency_list()).unwrap();

        assert_eq!(rebuilt, graph);
    }

    #[test]
    fn incidence_matrix_round_trips() {
        let graph = triangle_graph();
        let rebuilt = SimpleGraph::from_incidence_matrix(&graph.incidence_matrix()).unwrap();

        assert_eq!(rebuilt, graph);
    }

    #[test]
    fn accessors_do_not_mutate() {
        let graph = path_graph();
        let first = (
            graph.adjacency_list(),
            graph.incidence_matrix(),
            graph.edges(),
        );
        let second = (
            graph.adjacency_list(),
            graph.incidence_matrix(),
            graph.edges(),
        );

        assert_eq!(first, second, "Repeated reads should give the same views.");
        assert_eq!(graph, path_graph(), "Reads should leave the graph unchanged.");
    }

    #[test]
    fn isolated_node_appears_with_empty_neighbour_list() {
        let graph = SimpleGraph::from_neighbourhood_matrix(vec![
            vec![0, 1, 0],
            vec![1, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();

        assert_eq!(
            graph.adjacency_list()[&3],
            Vec::<usize>::new(),
            "An isolated node should still be listed."
        );
    }
}
