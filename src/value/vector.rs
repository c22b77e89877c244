use std::{fmt::Display, ops};

use ordered_float::OrderedFloat;

/// The zero vector.
pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

/// A three-component vector compared by value.
///
/// Two vectors are equal when all three components are equal, regardless of
/// which instance they are. Components compare through [`OrderedFloat`], so a
/// `NaN` component is equal to itself and equality stays reflexive.
#[derive(Debug, Clone, Copy)]
pub struct Vector3 {
    /// The x component.
    pub x: f64,
    /// The y component.
    pub y: f64,
    /// The z component.
    pub z: f64,
}

impl Vector3 {
    /// Constructs a vector from its components.
    ///
    /// # Example
    /// ```
    /// use semset::value::vector::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x.mul_add(other.x, self.y.mul_add(other.y, self.z * other.z))
    }

    /// Returns the Euclidean length.
    ///
    /// # Example
    /// ```
    /// use semset::value::vector::Vector3;
    ///
    /// assert_eq!(Vector3::new(2.0, 3.0, 6.0).length(), 7.0);
    /// ```
    #[must_use]
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { x: self.x + rhs.x,
               y: self.y + rhs.y,
               z: self.z + rhs.z, }
    }
}

impl ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { x: self.x - rhs.x,
               y: self.y - rhs.y,
               z: self.z - rhs.z, }
    }
}

impl ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scale: f64) -> Self::Output {
        Self { x: self.x * scale,
               y: self.y * scale,
               z: self.z * scale, }
    }
}

impl ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { x: -self.x,
               y: -self.y,
               z: -self.z, }
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.x) == OrderedFloat(other.x)
        && OrderedFloat(self.y) == OrderedFloat(other.y)
        && OrderedFloat(self.z) == OrderedFloat(other.z)
    }
}

impl Eq for Vector3 {}
