//! Complex arithmetic on disk points

use glam::DVec2;

/// Complex-number view of a 2D point: `x` is the real part, `y` the imaginary part.
pub trait Complex: Sized {
    /// r·e^{iθ}
    fn from_polar(r: f64, theta: f64) -> Self;
    fn cmul(self, other: Self) -> Self;
    fn conj(self) -> Self;
    /// 1/z. Infinite components for z = 0.
    fn cinv(self) -> Self;
    fn modulus(self) -> f64;

    #[inline]
    fn cdiv(self, other: Self) -> Self {
        self.cmul(other.cinv())
    }
}

impl Complex for DVec2 {
    #[inline]
    fn from_polar(r: f64, theta: f64) -> Self {
        crate::polar_to_cartesian(r, theta)
    }

    #[inline]
    fn cmul(self, other: Self) -> Self {
        DVec2::new(
            self.x * other.x - self.y * other.y,
            self.x * other.y + self.y * other.x,
        )
    }

    #[inline]
    fn conj(self) -> Self {
        DVec2::new(self.x, -self.y)
    }

    #[inline]
    fn cinv(self) -> Self {
        let scale = self.length_squared();
        DVec2::new(self.x / scale, -self.y / scale)
    }

    #[inline]
    fn modulus(self) -> f64 {
        self.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_i_squared_is_minus_one() {
        let i = DVec2::new(0.0, 1.0);
        let sq = i.cmul(i);
        assert!((sq.x + 1.0).abs() < 1e-12);
        assert!(sq.y.abs() < 1e-12);
    }

    #[test]
    fn test_division_inverts_multiplication() {
        let a = DVec2::new(0.3, -0.7);
        let b = DVec2::new(-1.2, 0.4);
        let back = a.cmul(b).cdiv(b);
        assert!((back - a).length() < 1e-12);
    }

    #[test]
    fn test_from_polar() {
        let z = DVec2::from_polar(2.0, PI / 2.0);
        assert!(z.x.abs() < 1e-12);
        assert!((z.y - 2.0).abs() < 1e-12);
        assert!((z.modulus() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_conjugate_product_is_squared_modulus() {
        let z = DVec2::new(0.6, 0.8);
        let p = z.cmul(z.conj());
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
    }
}
