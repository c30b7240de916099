use crate::math::matrix::Matrix;

/// Central-difference numerical gradient of a scalar function of a matrix.
///
/// Perturbs each entry of `at` by ±`step`, evaluates `f` at both points,
/// and fills the corresponding entry of the result with
/// `(f(w + h) - f(w - h)) / 2h`. A `step` around 1e-5 keeps the truncation
/// error near f64 round-off for well-scaled inputs.
///
/// The standard cross-check for an analytic gradient: if the two disagree
/// beyond tolerance, the analytic gradient is wrong.
pub fn numerical_gradient<F>(f: F, at: &Matrix, step: f64) -> Matrix
where
    F: Fn(&Matrix) -> f64,
{
    let mut grad = Matrix::zeros(at.rows, at.cols);
    let mut probe = at.clone();

    for i in 0..at.rows {
        for j in 0..at.cols {
            let original = probe.data[i][j];

            probe.data[i][j] = original + step;
            let plus = f(&probe);

            probe.data[i][j] = original - step;
            let minus = f(&probe);

            probe.data[i][j] = original;
            grad.data[i][j] = (plus - minus) / (2.0 * step);
        }
    }

    grad
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn recovers_gradient_of_sum_of_squares() {
        // f(W) = Σ w², so ∂f/∂w = 2w everywhere.
        let at = Matrix::from_data(vec![vec![1.0, -2.0], vec![0.5, 3.0]]);
        let numeric = numerical_gradient(|w| w.sum_of_squares(), &at, 1e-5);

        for i in 0..at.rows {
            for j in 0..at.cols {
                assert_relative_eq!(
                    numeric.data[i][j],
                    2.0 * at.data[i][j],
                    epsilon = 1e-8,
                    max_relative = 1e-8
                );
            }
        }
    }

    #[test]
    fn leaves_the_probed_matrix_unchanged() {
        let at = Matrix::from_data(vec![vec![1.0, 2.0]]);
        let before = at.clone();
        let _ = numerical_gradient(|w| w.sum_of_squares(), &at, 1e-5);
        assert_eq!(at.data, before.data);
    }
}
