use std::ops;

use crate::set::{core::Set, equivalence::Equivalence};

/// `a + b` is [`Set::union`].
impl<T, E> ops::Add for &Set<T, E> where E: Equivalence<T> + Clone
{
    type Output = Set<T, E>;

    fn add(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// `a - b` is [`Set::complement`].
impl<T, E> ops::Sub for &Set<T, E> where E: Equivalence<T> + Clone
{
    type Output = Set<T, E>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.complement(rhs)
    }
}

/// `a * b` is [`Set::intersection`].
impl<T, E> ops::Mul for &Set<T, E> where E: Equivalence<T> + Clone
{
    type Output = Set<T, E>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

/// `a / b` is also [`Set::complement`], identical to `a - b`.
///
/// Both `-` and `/` spell set subtraction. Use [`Set::symmetric_difference`]
/// for the symmetric variant.
impl<T, E> ops::Div for &Set<T, E> where E: Equivalence<T> + Clone
{
    type Output = Set<T, E>;

    fn div(self, rhs: Self) -> Self::Output {
        self.complement(rhs)
    }
}

impl<T, E> PartialEq for Set<T, E> where E: Equivalence<T>
{
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
