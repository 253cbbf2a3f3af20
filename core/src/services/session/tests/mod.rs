//! Unit tests for session components

mod session_tests;
