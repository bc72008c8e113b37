mod error;

pub use error::ImportError;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::graph::SimpleGraph;

/// Reads a graph from a neighbourhood matrix file: one line per row,
/// space separated integer values.
pub fn from_neighbourhood_matrix_file(filename: &str) -> Result<SimpleGraph, ImportError> {
    let matrix = read_matrix(filename)?;

    Ok(SimpleGraph::from_neighbourhood_matrix(matrix)?)
}

/// Reads a graph from an adjacency list file: one line per node of the form
/// `<label>:<space separated neighbour labels>`.
pub fn from_adjacency_list_file(filename: &str) -> Result<SimpleGraph, ImportError> {
    if !Path::new(filename).exists() {
        return Err(ImportError::MissingFile(filename.to_string()));
    }

    let contents = fs::read_to_string(filename)
        .map_err(|err| ImportError::InvalidFormat(format!("{}: {}", filename, err)))?;

    let mut adj_list = BTreeMap::new();
    for line in contents.lines().filter(|line| !line.trim().is_empty()) {
        let (label, rest) = split_adjacency_line(line)?;
        let node = parse_value(label)?;
        let neighbours = rest
            .split_whitespace()
            .map(parse_value)
            .collect::<Result<Vec<usize>, ImportError>>()?;

        adj_list.insert(node, neighbours);
    }

    Ok(SimpleGraph::from_adjacency_list(&adj_list)?)
}

/// Reads a graph from an incidence matrix file: one line per node,
/// one space separated column per edge.
pub fn from_incidence_matrix_file(filename: &str) -> Result<SimpleGraph, ImportError> {
    let inc_matrix = read_matrix(filename)?;

    Ok(SimpleGraph::from_incidence_matrix(&inc_matrix)?)
}

/// Reads a whitespace separated integer matrix, one row per record.
fn read_matrix(filename: &str) -> Result<Vec<Vec<usize>>, ImportError> {
    if !Path::new(filename).exists() {
        return Err(ImportError::MissingFile(filename.to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_path(filename)
        .map_err(|err| ImportError::InvalidFormat(err.to_string()))?;

    let mut matrix = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| ImportError::InvalidFormat(err.to_string()))?;
        let row = record
            .iter()
            .filter(|field| !field.is_empty())
            .map(parse_value)
            .collect::<Result<Vec<usize>, ImportError>>()?;

        if !row.is_empty() {
            matrix.push(row);
        }
    }

    Ok(matrix)
}

fn split_adjacency_line(line: &str) -> Result<(&str, &str), ImportError> {
    let mut parts = line.splitn(2, ':');
    let label = parts.next().unwrap_or("");

    match parts.next() {
        Some(rest) => Ok((label.trim(), rest)),
        None => Err(ImportError::InvalidFormat(format!(
            "adjacency list line without ':' separator: {}",
            line
        ))),
    }
}

fn parse_value(field: &str) -> Result<usize, ImportError> {
    field
        .trim()
        .parse()
        .map_err(|_| ImportError::InvalidFormat(format!("not an integer: {}", field)))
}
