use std::{collections::HashMap, fmt, iter::FusedIterator, rc::Rc, slice};

use crate::set::equivalence::{Equivalence, Structural};

/// A mutable collection holding at most one member per equality class.
///
/// Membership is decided by the set's [`Equivalence`] relation rather than by
/// hashing, so two distinct instances with the same content are the same
/// member. Members are kept behind [`Rc`] so that clones and derived sets can
/// share member allocations while owning independent storage.
///
/// Iteration order is insertion order and is stable across removals.
///
/// # Example
/// ```
/// use semset::set::core::Set;
///
/// let mut primes = Set::from_items([2, 3, 5, 5, 7]);
/// assert_eq!(primes.len(), 4);
///
/// primes.remove(&2);
/// assert!(!primes.contains(&2));
/// assert_eq!(primes.to_string(), "{3, 5, 7}");
/// ```
pub struct Set<T, E = Structural> {
    members:     Vec<Rc<T>>,
    identity:    HashMap<usize, usize>,
    count:       usize,
    equivalence: E,
}

impl<T> Set<T, Structural> {
    /// Creates an empty set using structural (`PartialEq`) equality.
    #[must_use]
    pub fn new() -> Self {
        Self::with_equivalence(Structural)
    }

    /// Creates a set from the given items using structural equality.
    ///
    /// Items that are equal to an earlier item are dropped, so the first
    /// occurrence of each equality class is the one that is kept.
    pub fn from_items<I>(items: I) -> Self
        where I: IntoIterator<Item = T>,
              T: PartialEq
    {
        let mut set = Self::new();
        set.extend(items);
        set
    }
}

impl<T> Default for Set<T, Structural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Set<T, E> {
    /// Creates an empty set that compares members with `equivalence`.
    pub fn with_equivalence(equivalence: E) -> Self {
        Self { members: Vec::new(),
               identity: HashMap::new(),
               count: 0,
               equivalence }
    }

    /// Number of members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The relation this set uses to compare members.
    pub const fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Iterates over the members in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.members.iter() }
    }

    pub(crate) fn shared_members(&self) -> slice::Iter<'_, Rc<T>> {
        self.members.iter()
    }

    /// Appends a member known to be distinct from every current member.
    pub(crate) fn push_distinct(&mut self, member: Rc<T>) {
        self.identity.insert(address_of(&*member), self.members.len());
        self.members.push(member);
        self.count += 1;
    }
}

impl<T, E: Equivalence<T>> Set<T, E> {
    /// Inserts `item` unless an equal member is already present.
    ///
    /// Returns `true` if the set grew.
    pub fn add(&mut self, item: T) -> bool {
        self.add_shared(Rc::new(item))
    }

    /// Inserts an already shared member unless an equal member is present.
    ///
    /// Returns `true` if the set grew.
    pub fn add_shared(&mut self, item: Rc<T>) -> bool {
        if self.position(&item).is_some() {
            return false;
        }

        self.push_distinct(item);
        true
    }

    /// Removes the member equal to `item`, if any.
    ///
    /// The member removed is the one found by the membership test, which need
    /// not be the same instance as `item`. Returns the removed member.
    pub fn remove(&mut self, item: &T) -> Option<Rc<T>> {
        let index = self.position(item)?;
        let removed = self.members.remove(index);

        self.identity.remove(&address_of(&*removed));
        for slot in self.identity.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        self.count -= 1;

        debug_assert_eq!(self.count, self.members.len());
        Some(removed)
    }

    /// Returns `true` if some member is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Finds the storage slot of the member equal to `item`.
    ///
    /// The identity index only recognises an argument that lives in one of
    /// this set's member allocations. Anything else falls through to a scan
    /// with the equivalence relation, which is what makes distinct but equal
    /// instances collapse into one member.
    fn position(&self, item: &T) -> Option<usize> {
        if let Some(&index) = self.identity.get(&address_of(item)) {
            return Some(index);
        }

        self.members
            .iter()
            .position(|member| self.equivalence.equivalent(&**member, item))
    }
}

impl<T, E: Clone> Clone for Set<T, E> {
    fn clone(&self) -> Self {
        Self { members:     self.members.clone(),
               identity:    self.identity.clone(),
               count:       self.count,
               equivalence: self.equivalence.clone(), }
    }
}

impl<T, E> Extend<T> for Set<T, E> where E: Equivalence<T>
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }
}

impl<T, E> FromIterator<T> for Set<T, E> where E: Equivalence<T> + Default
{
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut set = Self::with_equivalence(E::default());
        set.extend(items);
        set
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Set<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, E> fmt::Display for Set<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, member) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{member}")?;
        }
        write!(f, "}}")
    }
}

/// Borrowing iterator over the members of a [`Set`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Rc<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|member| &**member)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|member| &**member)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T, E> IntoIterator for &'a Set<T, E> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn address_of<T>(item: &T) -> usize {
    std::ptr::from_ref(item).addr()
}
