//! Peripheral tests.
