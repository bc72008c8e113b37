/// Returns true if all rows have the same length.
pub fn is_rectangular<T>(matrix: &[Vec<T>]) -> bool {
    match matrix.first() {
        Some(first) => matrix.iter().all(|row| row.len() == first.len()),
        None => true,
    }
}

/// Returns true if the matrix has as many columns as rows.
pub fn is_square<T>(matrix: &[Vec<T>]) -> bool {
    matrix.iter().all(|row| row.len() == matrix.len())
}

/// Returns the transpose of a rectangular matrix.
pub fn transpose<T: Copy>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let columns = matrix.first().map_or(0, |row| row.len());

    (0..columns)
        .map(|j| matrix.iter().map(|row| row[j]).collect())
        .collect()
}

/// Returns true if the matrix equals its own transpose.
/// A non-square matrix is never symmetric.
pub fn is_symmetric<T: Copy + PartialEq>(matrix: &[Vec<T>]) -> bool {
    is_square(matrix) && transpose(matrix) == matrix
}
