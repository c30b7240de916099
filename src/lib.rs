pub mod error;
pub mod math;
pub mod loss;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use error::LossError;
pub use loss::softmax::{softmax, SoftmaxLoss};
pub use loss::variant::Variant;
pub use loss::grad_check::numerical_gradient;
