// This binary crate is intentionally minimal.
// All loss and gradient logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example gradient_check
fn main() {
    println!("softgrad: softmax classification loss and gradients in Rust.");
    println!("Run `cargo run --example gradient_check` to compare the naive and vectorized implementations.");
}
