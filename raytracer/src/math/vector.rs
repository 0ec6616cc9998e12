use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A vector in 3D space. Also used for linear RGB colors, whose
/// channels may exceed 1 until the final clamp.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Instantiate a new Vector3.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0., 0., 0.)
    }

    /// A vector with all three components set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Find the dot product between two Vector3s.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross two Vector3s.
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: -self.x * other.z + self.z * other.x,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Find the magnitude of this Vector3.
    pub fn magnitude(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Normalize this Vector3 by dividing it by its own magnitude.
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Reflect this vector about `normal`, which is expected to be unit length.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2. * self.dot(normal))
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

/// Component-wise product, used for modulating one color by another.
impl Mul for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3::new(1., 0., 0.);
        let y = Vector3::new(0., 1., 0.);
        assert_eq!(x.cross(y), Vector3::new(0., 0., 1.));
        assert_eq!(Vector3::new(0., 0., -1.).cross(y), x);
    }

    #[test]
    fn reflect_flips_normal_component() {
        let d = Vector3::new(1., -1., 0.).normalize();
        let r = d.reflect(Vector3::new(0., 1., 0.));
        assert!((r.x - d.x).abs() < 1e-12);
        assert!((r.y + d.y).abs() < 1e-12);
    }

    #[test]
    fn normalize_yields_unit_length() {
        let v = Vector3::new(3., 4., 12.).normalize();
        assert!((v.magnitude() - 1.).abs() < 1e-12);
    }
}
