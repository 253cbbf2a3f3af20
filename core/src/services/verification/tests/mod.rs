//! Unit tests for the verification service

mod mocks;
