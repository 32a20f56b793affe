/// Core evaluation logic.
///
/// Contains the recursive `evaluate` walk, variable resolution and
/// assignment.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators on numeric operands.
pub mod binary;
