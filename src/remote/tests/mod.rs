//! Unit tests for the remote context.
