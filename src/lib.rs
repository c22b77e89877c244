//! # semset
//!
//! semset provides the container and string utilities of a scripting runtime:
//! a set that deduplicates by value rather than by identity, the algebra of
//! such sets, and the Levenshtein edit distance.
//!
//! ```
//! use semset::{distance::levenshtein, set::Set, value::vector::Vector3};
//!
//! let mut points = Set::new();
//! points.add(Vector3::new(1.0, 0.0, 0.0));
//! points.add(Vector3::new(1.0, 0.0, 0.0));
//! assert_eq!(points.len(), 1);
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Levenshtein edit distance.
///
/// This module computes the minimum number of single-token insertions,
/// deletions and substitutions between two sequences. Both a generic slice
/// form and a `&str` form working on characters are provided.
///
/// # Responsibilities
/// - Run the Wagner–Fischer recurrence with two rows of working memory.
/// - Short-circuit equal and empty inputs.
pub mod distance;
/// Provides the error type for dynamic value operations.
///
/// This module defines the errors raised when a script value operation is
/// applied to operands of the wrong type. Operations on typed sets and on
/// slices are total and never produce these errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes of the value layer.
/// - Names the operation, the expected type and the type found.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Sets with pluggable equality.
///
/// This module declares the `Set` container, the `Equivalence` trait that
/// decides membership, and the set algebra with its operator aliases.
///
/// # Responsibilities
/// - Keep at most one member per equality class.
/// - Maintain the member count incrementally on every insertion and removal.
/// - Build union, intersection, complement and product as new sets that
///   never alias their operands.
pub mod set;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` without silent data loss.
pub mod util;
/// Script values.
///
/// This module defines the dynamically typed `Value` used by scripts, its
/// structural equality, and the glue exposing set operators and edit distance
/// to values whose type is only known at run time.
///
/// # Responsibilities
/// - Discriminate value types through the enum tag.
/// - Dispatch set operators and reject non-set operands.
/// - Compute edit distance over string and array values.
pub mod value;
