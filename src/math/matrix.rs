use rand::Rng;

/// Dense row-major matrix. Weight matrices are stored as `data[from][to]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Samples every entry uniformly from `[-bound, bound)`.
    pub fn uniform<R: Rng>(rows: usize, cols: usize, bound: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-bound..bound);
            }
        }

        res
    }

    /// Builds a matrix from rows. All rows must have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows must have equal length"
        );
        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}
