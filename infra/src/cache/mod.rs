//! Cache module for Redis-based storage
//!
//! Provides the Redis client with retry logic and the Redis-backed
//! verification code store.

pub mod code_store;
pub mod redis_client;

pub use code_store::RedisCodeStore;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use dj_shared::CacheConfig;
