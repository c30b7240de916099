pub mod softmax;
pub mod variant;
pub mod grad_check;

pub use softmax::SoftmaxLoss;
pub use variant::Variant;
pub use grad_check::numerical_gradient;
