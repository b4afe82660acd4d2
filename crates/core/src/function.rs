/// A real-valued function of one real variable.
///
/// Implementations must be free of observable state: solvers may evaluate
/// them any number of times and in any order.
///
/// Closures of the form `Fn(f64) -> f64` implement this trait automatically,
/// so most callers never name it.
pub trait ScalarFunction {
    /// Evaluates the function at `x`.
    fn value(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Quadratic `x² - a`, implemented without a closure.
    struct ShiftedSquare {
        a: f64,
    }

    impl ScalarFunction for ShiftedSquare {
        fn value(&self, x: f64) -> f64 {
            x * x - self.a
        }
    }

    fn eval_at(f: &impl ScalarFunction, x: f64) -> f64 {
        f.value(x)
    }

    #[test]
    fn closures_are_scalar_functions() {
        let offset = 3.0;
        let f = |x: f64| 2.0 * x + offset;

        assert_relative_eq!(eval_at(&f, 1.5), 6.0);
    }

    #[test]
    fn named_types_are_scalar_functions() {
        let f = ShiftedSquare { a: 2.0 };

        assert_relative_eq!(eval_at(&f, 2.0), 2.0);
        assert_relative_eq!(eval_at(&f, 0.0), -2.0);
    }
}
