use std::rc::Rc;

/// An equality relation deciding whether two items are the same set member.
///
/// A [`Set`](crate::set::core::Set) never hashes its members. Every
/// membership question is answered by an `Equivalence`, so items that have no
/// canonical hash (or whose identity differs while their content matches) can
/// still be deduplicated.
///
/// Implementations should behave like an equivalence relation: reflexive,
/// symmetric and transitive. The set does not verify this.
///
/// Any closure `Fn(&T, &T) -> bool` is an `Equivalence<T>`.
///
/// # Example
/// ```
/// use semset::set::{core::Set, equivalence::Equivalence};
///
/// let case_insensitive = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
/// assert!(case_insensitive.equivalent(&String::from("Rust"), &String::from("rust")));
///
/// let mut names = Set::with_equivalence(case_insensitive);
/// names.add("Ferris".to_string());
/// names.add("FERRIS".to_string());
///
/// assert_eq!(names.len(), 1);
/// ```
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `a` and `b` denote the same member.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// The default relation: structural equality through [`PartialEq`].
///
/// Scalars compare by value and compound values compare member by member,
/// exactly as their `PartialEq` implementation defines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Structural;

impl<T: PartialEq + ?Sized> Equivalence<T> for Structural {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> Equivalence<T> for F where F: Fn(&T, &T) -> bool
{
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Relation over ordered pairs, comparing each component with its own
/// relation.
///
/// This is the relation carried by the result of
/// [`Set::cartesian_product`](crate::set::core::Set::cartesian_product).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairEquivalence<L, R> {
    /// Relation applied to the left components.
    pub left:  L,
    /// Relation applied to the right components.
    pub right: R,
}

impl<L, R> PairEquivalence<L, R> {
    /// Combines two component relations.
    #[must_use]
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<A, B, L, R> Equivalence<(Rc<A>, Rc<B>)> for PairEquivalence<L, R>
    where L: Equivalence<A>,
          R: Equivalence<B>
{
    fn equivalent(&self, a: &(Rc<A>, Rc<B>), b: &(Rc<A>, Rc<B>)) -> bool {
        self.left.equivalent(&*a.0, &*b.0) && self.right.equivalent(&*a.1, &*b.1)
    }
}
