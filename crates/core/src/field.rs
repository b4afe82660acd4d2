/// The right-hand side of a first-order ODE system `dy/dt = f(y, t)`.
///
/// The returned derivative must have the same length as `y`. Integrators
/// check this on every evaluation and report a mismatch as an error rather
/// than truncating or padding.
///
/// Closures of the form `Fn(&[f64], f64) -> Vec<f64>` implement this trait
/// automatically.
pub trait VectorField {
    /// Returns the time derivative of `y` at time `t`.
    fn derivative(&self, y: &[f64], t: f64) -> Vec<f64>;
}

impl<F> VectorField for F
where
    F: Fn(&[f64], f64) -> Vec<f64>,
{
    fn derivative(&self, y: &[f64], t: f64) -> Vec<f64> {
        self(y, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit-frequency harmonic oscillator with state `[x, v]`.
    struct Oscillator;

    impl VectorField for Oscillator {
        fn derivative(&self, y: &[f64], _t: f64) -> Vec<f64> {
            vec![y[1], -y[0]]
        }
    }

    fn eval_at(field: &impl VectorField, y: &[f64], t: f64) -> Vec<f64> {
        field.derivative(y, t)
    }

    #[test]
    fn named_types_are_vector_fields() {
        assert_eq!(eval_at(&Oscillator, &[2.0, 1.0], 0.0), vec![1.0, -2.0]);
    }

    #[test]
    fn closures_are_vector_fields() {
        let growth = |y: &[f64], t: f64| y.iter().map(|value| value * t).collect::<Vec<_>>();

        assert_eq!(eval_at(&growth, &[1.0, 2.0, 3.0], 2.0), vec![2.0, 4.0, 6.0]);
    }
}
