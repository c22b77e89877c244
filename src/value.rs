/// Three-component vector support.
///
/// Defines `Vector3`, a value type compared component by component. It has no
/// canonical hash, so sets of vectors rely entirely on structural equality to
/// recognise two separately built vectors as the same member.
pub mod vector;
/// Set operators on script values.
///
/// Maps the `+`, `-`, `*` and `/` operators onto union, complement,
/// intersection and complement, rejecting operands that are not sets.
pub mod binary;

pub mod core;
