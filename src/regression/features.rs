//! Polynomial feature expansion.

/// `[x, x², …, x^degree]`.
pub fn powers(x: f64, degree: usize) -> Vec<f64> {
    (1..=degree).map(|d| x.powi(d as i32)).collect()
}

/// Expands every feature of `row` into its powers, feature by feature:
/// `[a, a², …, a^d, b, b², …, b^d, …]`.
pub fn expand_row(row: &[f64], degree: usize) -> Vec<f64> {
    row.iter().flat_map(|&x| powers(x, degree)).collect()
}
