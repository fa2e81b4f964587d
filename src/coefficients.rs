use std::fmt;

/// Number of ternary coefficients driving the map, nine per output axis.
pub const COEFFICIENT_COUNT: usize = 18;
pub const TERMS_PER_AXIS: usize = 9;

/// Labels of the monomials, in coefficient order.
pub const TERM_LABELS: [&str; TERMS_PER_AXIS] = ["x²", "y²", "t²", "xy", "xt", "yt", "x", "y", "t"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn offset(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => TERMS_PER_AXIS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x'",
            Axis::Y => "y'",
        }
    }
}

/// The 18 coefficients of the quadratic map, each in {-1, 0, 1}.
///
/// Elements 0..9 build `x'` and 9..18 build `y'`, both over the monomials
/// `x², y², t², xy, xt, yt, x, y, t`. A vector is never edited once built;
/// a reset swaps in a whole new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoefficientVector([i8; COEFFICIENT_COUNT]);

impl CoefficientVector {
    /// Builds a vector from raw values. Anything outside {-1, 0, 1} is
    /// folded onto its sign so the ternary invariant always holds.
    pub fn new(values: [i8; COEFFICIENT_COUNT]) -> Self {
        Self(values.map(i8::signum))
    }

    pub fn zero() -> Self {
        Self([0; COEFFICIENT_COUNT])
    }

    pub fn values(&self) -> &[i8; COEFFICIENT_COUNT] {
        &self.0
    }

    /// The nine coefficients of one axis.
    pub fn row(&self, axis: Axis) -> &[i8] {
        let start = axis.offset();
        &self.0[start..start + TERMS_PER_AXIS]
    }

    /// Row as f32, the layout the vertex shader consumes.
    pub fn row_f32(&self, axis: Axis) -> [f32; TERMS_PER_AXIS] {
        let mut out = [0.0; TERMS_PER_AXIS];
        for (dst, &c) in out.iter_mut().zip(self.row(axis)) {
            *dst = c as f32;
        }
        out
    }

    /// One application of the map: `(x, y) -> (x', y')` with `t` held fixed.
    pub fn apply(&self, x: f64, y: f64, t: f64) -> (f64, f64) {
        let terms = [x * x, y * y, t * t, x * y, x * t, y * t, x, y, t];
        (
            dot(self.row(Axis::X), &terms),
            dot(self.row(Axis::Y), &terms),
        )
    }

    /// Human readable right-hand side for one axis, e.g. `x² - y²`.
    pub fn equation(&self, axis: Axis) -> String {
        let mut out = String::new();
        for (&c, label) in self.row(axis).iter().zip(TERM_LABELS.iter()) {
            match (c, out.is_empty()) {
                (0, _) => continue,
                (c, true) if c > 0 => out.push_str(label),
                (_, true) => {
                    out.push('-');
                    out.push_str(label);
                }
                (c, false) if c > 0 => {
                    out.push_str(" + ");
                    out.push_str(label);
                }
                (_, false) => {
                    out.push_str(" - ");
                    out.push_str(label);
                }
            }
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

impl Default for CoefficientVector {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for CoefficientVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}, {} = {}",
            Axis::X.name(),
            self.equation(Axis::X),
            Axis::Y.name(),
            self.equation(Axis::Y)
        )
    }
}

fn dot(row: &[i8], terms: &[f64; TERMS_PER_AXIS]) -> f64 {
    row.iter().zip(terms).map(|(&c, &v)| c as f64 * v).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_x_row(row: [i8; TERMS_PER_AXIS]) -> CoefficientVector {
        let mut values = [0; COEFFICIENT_COUNT];
        values[..TERMS_PER_AXIS].copy_from_slice(&row);
        CoefficientVector::new(values)
    }

    #[test]
    fn leading_plus_is_suppressed() {
        let c = with_x_row([1, -1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(c.equation(Axis::X), "x² - y²");
    }

    #[test]
    fn leading_minus_has_no_spaces() {
        let c = with_x_row([0, 0, 0, -1, 0, 1, 0, 0, -1]);
        assert_eq!(c.equation(Axis::X), "-xy + yt - t");
    }

    #[test]
    fn empty_row_renders_zero() {
        assert_eq!(CoefficientVector::zero().equation(Axis::Y), "0");
    }

    #[test]
    fn out_of_range_values_fold_to_sign() {
        let mut values = [0; COEFFICIENT_COUNT];
        values[0] = 7;
        values[17] = -3;
        let c = CoefficientVector::new(values);
        assert_eq!(c.values()[0], 1);
        assert_eq!(c.values()[17], -1);
    }

    #[test]
    fn apply_evaluates_every_monomial() {
        let mut values = [1; COEFFICIENT_COUNT];
        values[TERMS_PER_AXIS..].copy_from_slice(&[-1; TERMS_PER_AXIS]);
        let c = CoefficientVector::new(values);
        let (x, y, t) = (2.0, 3.0, 0.5);
        let expected = 4.0 + 9.0 + 0.25 + 6.0 + 1.0 + 1.5 + 2.0 + 3.0 + 0.5;
        let (nx, ny) = c.apply(x, y, t);
        assert_eq!(nx, expected);
        assert_eq!(ny, -expected);
    }

    #[test]
    fn rows_split_at_nine() {
        let mut values = [0; COEFFICIENT_COUNT];
        values[8] = 1;
        values[9] = -1;
        let c = CoefficientVector::new(values);
        assert_eq!(c.row(Axis::X)[8], 1);
        assert_eq!(c.row(Axis::Y)[0], -1);
        assert_eq!(c.row_f32(Axis::Y)[0], -1.0);
    }
}
