use num::complex::Complex;

pub type C<T> = Complex<T>;

/// Squared-norm escape threshold. Radius 2, so |z|^2 > 4 means the orbit
/// has left the set; equality is not an escape.
pub const ESCAPE_NORM_SQR: f64 = 4.0;

pub fn c(re: f64, im: f64) -> C<f64> {
    Complex::new(re, im)
}

pub fn cr(re: f64) -> C<f64> {
    c(re, 0.0)
}

pub fn ci(im: f64) -> C<f64> {
    c(0.0, im)
}

pub fn escaped(z: &C<f64>) -> bool {
    z.norm_sqr() > ESCAPE_NORM_SQR
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_escape_is_strict() {
        // |2+0i|^2 == 4.0 exactly: on the threshold, not past it
        assert!(!escaped(&cr(2.0)));
        assert!(escaped(&c(2.0, 0.1)));
        assert!(!escaped(&c(0.0, 0.0)));
    }
}
