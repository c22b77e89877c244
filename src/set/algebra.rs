use std::rc::Rc;

use crate::set::{
    core::Set,
    equivalence::{Equivalence, PairEquivalence},
};

impl<T, E> Set<T, E> where E: Equivalence<T> + Clone
{
    /// Returns every member of `self` and `other`, each equality class once.
    ///
    /// When both operands hold equal members, the one from `self` is kept.
    ///
    /// # Example
    /// ```
    /// use semset::set::core::Set;
    ///
    /// let a = Set::from_items([1, 2, 3]);
    /// let b = Set::from_items([3, 4]);
    ///
    /// assert_eq!(a.union(&b), Set::from_items([1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for member in other.shared_members() {
            result.add_shared(Rc::clone(member));
        }
        result
    }

    /// Returns the members of `self` that are also members of `other`.
    ///
    /// # Example
    /// ```
    /// use semset::set::core::Set;
    ///
    /// let a = Set::from_items([1, 2, 3]);
    /// let b = Set::from_items([2, 3, 4]);
    ///
    /// assert_eq!(a.intersection(&b), Set::from_items([2, 3]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.filtered(|member| other.contains(member))
    }

    /// Returns the members of `self` that are not members of `other`.
    ///
    /// This is the relative complement `self \ other`, not an absolute
    /// complement, and it does not commute.
    ///
    /// # Example
    /// ```
    /// use semset::set::core::Set;
    ///
    /// let a = Set::from_items([1, 2, 3]);
    /// let b = Set::from_items([2, 3, 4]);
    ///
    /// assert_eq!(a.complement(&b), Set::from_items([1]));
    /// assert_eq!(b.complement(&a), Set::from_items([4]));
    /// ```
    #[must_use]
    pub fn complement(&self, other: &Self) -> Self {
        self.filtered(|member| !other.contains(member))
    }

    /// Returns the members that belong to exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.complement(other);
        for member in other.shared_members() {
            if !self.contains(member) {
                result.push_distinct(Rc::clone(member));
            }
        }
        result
    }

    /// Returns every ordered pair `(a, b)` with `a` from `self` and `b` from
    /// `other`.
    ///
    /// The pairs share their components with the operands. The result holds
    /// exactly `self.len() * other.len()` members.
    ///
    /// # Example
    /// ```
    /// use semset::set::core::Set;
    ///
    /// let a = Set::from_items(['x', 'y']);
    /// let b = Set::from_items([1, 2, 3]);
    /// let product = a.cartesian_product(&b);
    ///
    /// assert_eq!(product.len(), 6);
    /// assert!(product.iter().any(|(l, r)| **l == 'y' && **r == 3));
    /// ```
    #[must_use]
    pub fn cartesian_product<U, F>(&self,
                                   other: &Set<U, F>)
                                   -> Set<(Rc<T>, Rc<U>), PairEquivalence<E, F>>
        where F: Equivalence<U> + Clone
    {
        let relation = PairEquivalence::new(self.equivalence().clone(),
                                            other.equivalence().clone());
        let mut product = Set::with_equivalence(relation);

        // Operand members are pairwise distinct, so every pair is too.
        for left in self.shared_members() {
            for right in other.shared_members() {
                product.push_distinct(Rc::new((Rc::clone(left), Rc::clone(right))));
            }
        }
        product
    }

    fn filtered(&self, mut keep: impl FnMut(&T) -> bool) -> Self {
        let mut result = Self::with_equivalence(self.equivalence().clone());
        for member in self.shared_members() {
            if keep(member.as_ref()) {
                result.push_distinct(Rc::clone(member));
            }
        }
        result
    }
}

impl<T, E> Set<T, E> where E: Equivalence<T>
{
    /// Returns `true` if every member of `self` is a member of `other`.
    ///
    /// The empty set is a subset of every set. Membership is tested with
    /// `other`'s relation, so a larger receiver can still be a subset when
    /// `other` groups members more coarsely.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.iter().all(|member| other.contains(member))
    }

    /// Returns `true` if every member of `other` is a member of `self`.
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// Returns `true` if the sets share no member.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.iter().any(|member| other.contains(member))
    }

    /// Returns `true` if both sets hold the same members.
    ///
    /// Two sets are equal when they have the same size and each is a subset
    /// of the other. Member order does not matter.
    ///
    /// # Example
    /// ```
    /// use semset::set::core::Set;
    ///
    /// let a = Set::from_items([1, 2, 3]);
    /// let b = Set::from_items([3, 1, 2]);
    ///
    /// assert!(a.equals(&b));
    /// assert!(!a.equals(&Set::from_items([1, 2])));
    /// ```
    pub fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other) && other.is_subset_of(self)
    }
}
