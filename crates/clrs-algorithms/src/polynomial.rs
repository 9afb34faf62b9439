//! Polynomial evaluation (Problem 2-3).
use num_traits::Zero;
use std::ops::{Add, Mul};

/// Evaluate `a_n x^n + ... + a_1 x + a_0` with Horner's rule, Θ(n).
///
/// `coefficients` are ordered from the highest degree down to the
/// constant term. No coefficients evaluates to zero.
pub fn horners_rule<T>(coefficients: &[T], x: T) -> T
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    coefficients
        .iter()
        .fold(T::zero(), |y, &a| a + x * y)
}

/// Naive evaluation summing each term `a_k x^k` separately, Θ(n²) products.
pub fn evaluate_direct<T>(coefficients: &[T], x: T) -> T
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    let degree = coefficients.len();
    let mut y = T::zero();
    for (i, &a) in coefficients.iter().enumerate() {
        let power = degree - 1 - i;
        let mut term = a;
        for _ in 0..power {
            term = term * x;
        }
        y = y + term;
    }
    y
}
