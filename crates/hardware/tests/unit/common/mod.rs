//! Common type tests.
