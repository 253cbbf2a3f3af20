//! Phone-keyed identity resolution

mod resolver;

pub use resolver::IdentityResolver;
