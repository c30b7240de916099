use serde::{Serialize, Deserialize};

/// Selects which softmax loss implementation `SoftmaxLoss::compute` runs.
///
/// - `Naive`      : explicit per-example, per-class accumulation; the
///                  reference implementation.
/// - `Vectorized` : whole-matrix formulation of the same computation;
///                  agrees with `Naive` to floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Naive,
    Vectorized,
}
