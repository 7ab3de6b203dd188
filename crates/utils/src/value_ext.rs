use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition of a signed and padded exponent.
    ///
    /// ```rust
    /// # use fetools_utils::ValueExt;
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(0.0125_f64.sci(3, 2), "1.250e-02".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", &self, precision = precision);
        // LowerExp always writes an 'e', fall back to the raw string otherwise
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return formatted;
        };
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}

/// Extends floats with checks used to guard numerical edge conditions
pub trait FloatExt: Sized {
    /// True when the magnitude is below `threshold` (or not a number at all)
    ///
    /// ```rust
    /// # use fetools_utils::FloatExt;
    /// assert!(1e-9_f64.is_negligible(1e-6));
    /// assert!((-1e-9_f64).is_negligible(1e-6));
    /// assert!(!2.0_f64.is_negligible(1e-6));
    /// assert!(f64::NAN.is_negligible(1e-6));
    /// ```
    fn is_negligible(&self, threshold: Self) -> bool;

    /// Divide by `denominator` unless it is negligible
    ///
    /// Returns `None` instead of propagating `inf` or `NaN` when the
    /// denominator magnitude falls below `threshold`.
    ///
    /// ```rust
    /// # use fetools_utils::FloatExt;
    /// assert_eq!(6.0_f64.guarded_div(3.0, 1e-6), Some(2.0));
    /// assert_eq!(6.0_f64.guarded_div(1e-12, 1e-6), None);
    /// ```
    fn guarded_div(self, denominator: Self, threshold: Self) -> Option<Self>;
}

impl FloatExt for f64 {
    fn is_negligible(&self, threshold: f64) -> bool {
        self.is_nan() || self.abs() < threshold
    }

    fn guarded_div(self, denominator: f64, threshold: f64) -> Option<f64> {
        if denominator.is_negligible(threshold) {
            None
        } else {
            Some(self / denominator)
        }
    }
}
