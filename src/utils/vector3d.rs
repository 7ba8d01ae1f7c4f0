use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Cartesian triple in SI units. Unit-polymorphic by convention: the same
/// type carries positions (m), velocities (m/s) and forces (N).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D { x, y, z }
    }

    pub fn zero() -> Self {
        Vector3D::new(0.0, 0.0, 0.0)
    }

    /// Build a vector from its length and spherical angles: `azimuth` in the
    /// XY plane measured from +x, `polar` measured from the +z axis. Pure 2D
    /// motion in the XY plane uses `polar = PI / 2`. Angles are radians;
    /// callers convert degrees themselves.
    pub fn from_spherical(length: f64, azimuth: f64, polar: f64) -> Self {
        Vector3D::new(
            length * polar.sin() * azimuth.cos(),
            length * polar.sin() * azimuth.sin(),
            length * polar.cos(),
        )
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            Vector3D::new(self.x / mag, self.y / mag, self.z / mag)
        }
    }

    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Angle in the XY plane, `atan2(y, x)`. Zero at the origin, where
    /// direction is undefined by convention.
    pub fn azimuth(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle from the +z axis, `atan2(hypot(x, y), z)`. Zero at the origin.
    pub fn polar(&self) -> f64 {
        self.x.hypot(self.y).atan2(self.z)
    }
}

impl Sum for Vector3D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vector3D::zero(), |a, b| a + b)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector3D::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, vector: Vector3D) -> Vector3D {
        Vector3D::new(self * vector.x, self * vector.y, self * vector.z)
    }
}

impl Div<f64> for Vector3D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Vector3D::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}
