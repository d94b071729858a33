pub const EPSILON: f64 = 1.0e-5;

pub trait ApproxEq<Rhs = Self> {
    fn approx_eq(&self, rhs: &Rhs) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, rhs: &Self) -> bool {
        (self - rhs).abs() < EPSILON
    }
}

#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr) => {
        let (lhs, rhs) = (&$lhs, &$rhs);
        assert!(
            $crate::approx_eq::ApproxEq::approx_eq(lhs, rhs),
            "assertion failed: `left ~= right`\n  left: `{:?}`\n right: `{:?}`",
            lhs,
            rhs
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_within_epsilon_are_equal() {
        assert!(1.0.approx_eq(&(1.0 + EPSILON / 2.)));
        assert!(!1.0.approx_eq(&(1.0 + EPSILON * 2.)));
    }

    #[test]
    fn assert_macro_accepts_close_values() {
        assert_approx_eq!(0.1 + 0.2, 0.3);
    }
}
