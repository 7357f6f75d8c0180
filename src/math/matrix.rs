use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::ops::{Add, Mul, Sub};

/// Dense row-major matrix of `f64`. A vector is represented as an `n × 1` matrix.
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

    /// Samples every entry i.i.d. from N(0, std_dev²), row by row.
    ///
    /// `std_dev` must be finite and positive; callers derive it from layer sizes
    /// that have already been validated.
    pub fn random_normal<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        std_dev: f64,
        rng: &mut R,
    ) -> Matrix {
        let normal = match Normal::new(0.0, std_dev) {
            Ok(normal) => normal,
            Err(e) => panic!("invalid standard deviation {std_dev}: {e}"),
        };
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = normal.sample(rng);
            }
        }
        res
    }

    /// Builds an `n × 1` column from a slice.
    pub fn column(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.iter().map(|&v| vec![v]).collect(),
        }
    }

    /// Stacks equally sized slices side by side, one per column.
    pub fn from_columns(columns: &[&[f64]], rows: usize) -> Matrix {
        let mut res = Matrix::zeros(rows, columns.len());
        for (j, column) in columns.iter().enumerate() {
            assert_eq!(column.len(), rows, "column {j} has the wrong length");
            for (i, &v) in column.iter().enumerate() {
                res.data[i][j] = v;
            }
        }
        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, |row| row.len());
        assert!(data.iter().all(|row| row.len() == cols), "ragged matrix rows");
        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    /// Copies column `j` out as a plain vector.
    pub fn column_vec(&self, j: usize) -> Vec<f64> {
        self.data.iter().map(|row| row[j]).collect()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.shape(), rhs.shape(), "Matrices are of incorrect sizes");
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect())
            .collect();
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Adds an `rows × 1` column to every column of `self`.
    pub fn add_column(&self, column: &Matrix) -> Matrix {
        assert_eq!((self.rows, 1), column.shape(), "Matrices are of incorrect sizes");
        let data = self
            .data
            .iter()
            .zip(column.data.iter())
            .map(|(row, b)| row.iter().map(|x| x + b[0]).collect())
            .collect();
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Sums across columns, producing a `rows × 1` column.
    pub fn row_sums(&self) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: 1,
            data: self.data.iter().map(|row| vec![row.iter().sum()]).collect(),
        }
    }

    /// `self *= alpha`
    pub fn scale(&mut self, alpha: f64) {
        for row in &mut self.data {
            for x in row.iter_mut() {
                *x *= alpha;
            }
        }
    }

    /// `self += alpha * rhs`
    pub fn scaled_add(&mut self, alpha: f64, rhs: &Matrix) {
        assert_eq!(self.shape(), rhs.shape(), "Matrices are of incorrect sizes");
        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, y) in row.iter_mut().zip(rhs_row.iter()) {
                *x += alpha * y;
            }
        }
    }

    /// Sum of squared entries.
    pub fn norm_sq(&self) -> f64 {
        self.data.iter().flatten().map(|x| x * x).sum()
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        let mut res = self.clone();
        res.scaled_add(1.0, rhs);
        res
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mul_and_transpose() {
        let a = Matrix::from_data(vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
        let b = a.transpose();
        assert_eq!(b.shape(), (3, 2));
        let c = &a * &b;
        assert_eq!(c, Matrix::from_data(vec![vec![14., 32.], vec![32., 77.]]));
    }

    #[test]
    fn test_from_columns_stacks_side_by_side() {
        let x = [1., 2.];
        let y = [3., 4.];
        let m = Matrix::from_columns(&[&x[..], &y[..]], 2);
        assert_eq!(m, Matrix::from_data(vec![vec![1., 3.], vec![2., 4.]]));
        assert_eq!(m.column_vec(1), vec![3., 4.]);
    }

    #[test]
    fn test_add_column_broadcasts_and_row_sums() {
        let m = Matrix::from_data(vec![vec![1., 2.], vec![3., 4.]]);
        let b = Matrix::column(&[10., 20.]);
        let shifted = m.add_column(&b);
        assert_eq!(shifted, Matrix::from_data(vec![vec![11., 12.], vec![23., 24.]]));
        assert_eq!(shifted.row_sums(), Matrix::column(&[23., 47.]));
    }

    #[test]
    fn test_scaled_add_and_scale() {
        let mut a = Matrix::from_data(vec![vec![1., 1.]]);
        a.scale(3.);
        a.scaled_add(-0.5, &Matrix::from_data(vec![vec![2., 4.]]));
        assert_eq!(a, Matrix::from_data(vec![vec![2., 1.]]));
        assert_eq!(a.norm_sq(), 5.);
    }

    #[test]
    fn test_random_normal_is_seed_reproducible() {
        let a = Matrix::random_normal(4, 5, 0.5, &mut StdRng::seed_from_u64(7));
        let b = Matrix::random_normal(4, 5, 0.5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.shape(), (4, 5));
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn test_mul_rejects_bad_shapes() {
        let _ = &Matrix::zeros(2, 3) * &Matrix::zeros(2, 3);
    }
}
