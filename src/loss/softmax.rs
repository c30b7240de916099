use crate::error::{LossError, Result};
use crate::loss::variant::Variant;
use crate::math::matrix::Matrix;

/// Softmax classification loss over a linear scoring function.
///
/// Scores for example `i` are `inputs[i] · weights`, one per class. The
/// loss is the mean cross-entropy of the softmax of those scores against
/// the integer label, plus an L2 penalty `0.5 · reg · Σw²`. Every entry
/// point returns the scalar loss together with its gradient with respect
/// to `weights`, leaving all inputs untouched.
///
/// `naive` and `vectorized` compute the same quantity; the first with
/// explicit per-example and per-class loops, the second through
/// whole-matrix operations. They agree to floating-point tolerance.
pub struct SoftmaxLoss;

impl SoftmaxLoss {
    /// Reference implementation with explicit loops.
    ///
    /// - `weights` — shape (dim, num_classes)
    /// - `inputs`  — shape (num_train, dim), one example per row
    /// - `labels`  — one class index per example, each in [0, num_classes)
    /// - `reg`     — L2 regularization strength, >= 0
    pub fn naive(
        weights: &Matrix,
        inputs: &Matrix,
        labels: &[usize],
        reg: f64,
    ) -> Result<(f64, Matrix)> {
        validate(weights, inputs, labels)?;

        let num_train = inputs.rows;
        let num_classes = weights.cols;
        let dim = weights.rows;

        if num_train == 0 {
            // Empty batch: only the regularization term remains.
            return Ok(regularization_only(weights, reg));
        }

        let mut loss = 0.0;
        let mut grad = Matrix::zeros(dim, num_classes);

        for i in 0..num_train {
            // scores[j] = inputs[i] · weights[:, j]
            let mut scores = vec![0.0; num_classes];
            for j in 0..num_classes {
                for d in 0..dim {
                    scores[j] += inputs.data[i][d] * weights.data[d][j];
                }
            }

            // Shift by this row's own max so exp() cannot overflow. The
            // shift cancels in the softmax ratio and in the loss.
            let max_score = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            for s in scores.iter_mut() {
                *s -= max_score;
            }

            let sum_exp: f64 = scores.iter().map(|s| s.exp()).sum();
            let probs = softmax(&scores);

            for j in 0..num_classes {
                let indicator = if j == labels[i] { 1.0 } else { 0.0 };
                for d in 0..dim {
                    grad.data[d][j] += (probs[j] - indicator) * inputs.data[i][d];
                }
            }

            loss += -scores[labels[i]] + sum_exp.ln();
        }

        let inv_n = 1.0 / num_train as f64;
        loss *= inv_n;
        grad = grad.map(|g| g * inv_n);

        loss += 0.5 * reg * weights.sum_of_squares();
        grad = grad + weights.map(|w| reg * w);

        Ok((loss, grad))
    }

    /// Whole-matrix implementation of the same computation.
    ///
    /// One matrix product for the (num_train, num_classes) score matrix,
    /// per-row max/sum reductions, and the gradient assembled as
    /// `inputsᵀ · (probs - one_hot) / num_train + reg · weights`.
    pub fn vectorized(
        weights: &Matrix,
        inputs: &Matrix,
        labels: &[usize],
        reg: f64,
    ) -> Result<(f64, Matrix)> {
        validate(weights, inputs, labels)?;

        let num_train = inputs.rows;
        let num_classes = weights.cols;

        if num_train == 0 {
            return Ok(regularization_only(weights, reg));
        }

        let scores = inputs.clone() * weights.clone();
        let shifted = sub_rows(&scores, &row_max(&scores));

        let exp_scores = shifted.map(f64::exp);
        let sums = row_sums(&exp_scores);
        let probs = div_rows(&exp_scores, &sums);

        // Data loss: Σ_i (ln Σ_j exp(s[i][j]) - s[i][y_i]), averaged below.
        let correct_scores: f64 = labels.iter()
            .enumerate()
            .map(|(i, &label)| shifted.data[i][label])
            .sum();
        let log_sums: f64 = sums.iter().map(|s| s.ln()).sum();
        let mut loss = log_sums - correct_scores;

        let targets = one_hot(labels, num_classes);
        let mut grad = inputs.transpose() * (probs - targets);

        let inv_n = 1.0 / num_train as f64;
        loss *= inv_n;
        grad = grad.map(|g| g * inv_n);

        loss += 0.5 * reg * weights.sum_of_squares();
        grad = grad + weights.map(|w| reg * w);

        Ok((loss, grad))
    }

    /// Runs the implementation selected by `variant`. Both arms satisfy
    /// the same contract; harness code uses this to compare them.
    pub fn compute(
        weights: &Matrix,
        inputs: &Matrix,
        labels: &[usize],
        reg: f64,
        variant: Variant,
    ) -> Result<(f64, Matrix)> {
        match variant {
            Variant::Naive => Self::naive(weights, inputs, labels, reg),
            Variant::Vectorized => Self::vectorized(weights, inputs, labels, reg),
        }
    }
}

/// Softmax of one score vector, shifted by its max before exponentiating.
/// The shift leaves the ratios unchanged but keeps exp() from overflowing.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max_logit = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&s| (s - max_logit).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Fails fast on shape disagreement or out-of-range labels; nothing is
/// computed until every input checks out.
fn validate(weights: &Matrix, inputs: &Matrix, labels: &[usize]) -> Result<()> {
    if inputs.cols != weights.rows {
        return Err(LossError::DimensionMismatch {
            context: "feature dimension of inputs vs rows of weights",
            expected: weights.rows,
            actual: inputs.cols,
        });
    }
    if labels.len() != inputs.rows {
        return Err(LossError::DimensionMismatch {
            context: "length of labels vs rows of inputs",
            expected: inputs.rows,
            actual: labels.len(),
        });
    }
    let num_classes = weights.cols;
    for (index, &label) in labels.iter().enumerate() {
        if label >= num_classes {
            return Err(LossError::InvalidLabel { index, label, num_classes });
        }
    }
    Ok(())
}

/// Loss and gradient when no data term exists (empty batch).
fn regularization_only(weights: &Matrix, reg: f64) -> (f64, Matrix) {
    let loss = 0.5 * reg * weights.sum_of_squares();
    let grad = weights.map(|w| reg * w);
    (loss, grad)
}

/// Max of each row, one scalar per row.
fn row_max(m: &Matrix) -> Vec<f64> {
    m.data.iter()
        .map(|row| row.iter().cloned().fold(f64::NEG_INFINITY, f64::max))
        .collect()
}

/// Sum of each row, one scalar per row.
fn row_sums(m: &Matrix) -> Vec<f64> {
    m.data.iter().map(|row| row.iter().sum()).collect()
}

/// Subtracts `shifts[i]` from every entry of row `i`.
fn sub_rows(m: &Matrix, shifts: &[f64]) -> Matrix {
    let data = m.data.iter().zip(shifts.iter())
        .map(|(row, &shift)| row.iter().map(|v| v - shift).collect())
        .collect();
    Matrix::from_data(data)
}

/// Divides every entry of row `i` by `divisors[i]`.
fn div_rows(m: &Matrix, divisors: &[f64]) -> Matrix {
    let data = m.data.iter().zip(divisors.iter())
        .map(|(row, &div)| row.iter().map(|v| v / div).collect())
        .collect();
    Matrix::from_data(data)
}

/// One-hot label matrix of shape (labels.len(), num_classes):
/// 1.0 at (i, labels[i]), 0.0 elsewhere.
fn one_hot(labels: &[usize], num_classes: usize) -> Matrix {
    let mut m = Matrix::zeros(labels.len(), num_classes);
    for (i, &label) in labels.iter().enumerate() {
        m.data[i][label] = 1.0;
    }
    m
}
