//! Property-based tests for the coefficient types.
