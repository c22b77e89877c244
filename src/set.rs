/// The set container.
///
/// Defines `Set`, its storage, membership test and mutation. Membership is
/// always answered by the set's equivalence relation, with an identity lookup
/// as a fast path for arguments that are themselves stored members.
pub mod core;
/// Pluggable equality relations.
///
/// Defines the `Equivalence` trait that every set uses to compare members,
/// the default `Structural` relation, and the pairwise relation used by
/// cartesian products.
pub mod equivalence;

/// Set algebra: union, intersection, complement, product, subset and equality.
mod algebra;
/// Operator aliases for the set algebra.
mod ops;

pub use self::core::{Iter, Set};
pub use self::equivalence::{Equivalence, PairEquivalence, Structural};
