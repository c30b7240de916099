use rand::Rng;
use softgrad::{numerical_gradient, Matrix, SoftmaxLoss, Variant};

fn main() {
    let num_train = 50;
    let dim = 12;
    let num_classes = 7;
    let reg = 0.05;

    let weights = Matrix::gaussian(dim, num_classes, 1e-4);
    let inputs = Matrix::random(num_train, dim);
    let mut rng = rand::thread_rng();
    let labels: Vec<usize> = (0..num_train)
        .map(|_| rng.gen_range(0..num_classes))
        .collect();

    let (naive_loss, naive_grad) =
        SoftmaxLoss::compute(&weights, &inputs, &labels, reg, Variant::Naive).unwrap();
    let (vec_loss, vec_grad) =
        SoftmaxLoss::compute(&weights, &inputs, &labels, reg, Variant::Vectorized).unwrap();

    println!("{num_train} examples, {dim} features, {num_classes} classes, reg = {reg}");
    println!("naive loss:      {naive_loss:.12}");
    println!("vectorized loss: {vec_loss:.12}");
    println!("loss difference: {:.3e}", (naive_loss - vec_loss).abs());
    println!(
        "max gradient difference between implementations: {:.3e}",
        max_abs_diff(&naive_grad, &vec_grad)
    );

    let numeric = numerical_gradient(
        |w| SoftmaxLoss::vectorized(w, &inputs, &labels, reg).unwrap().0,
        &weights,
        1e-5,
    );
    println!(
        "max analytic vs finite-difference gradient error: {:.3e}",
        max_abs_diff(&vec_grad, &numeric)
    );
}

fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
    let mut max = 0.0_f64;
    for i in 0..a.rows {
        for j in 0..a.cols {
            max = max.max((a.data[i][j] - b.data[i][j]).abs());
        }
    }
    max
}
