//! In-process code source

use async_trait::async_trait;

use super::generator::generate_code;
use crate::domain::entities::CodeType;
use crate::errors::DomainError;
use crate::services::verification::CodeSource;

/// Issues codes with the local generator instead of calling the peer code service
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalCodeSource;

#[async_trait]
impl CodeSource for LocalCodeSource {
    async fn issue(&self, length: usize, code_type: CodeType) -> Result<String, DomainError> {
        generate_code(code_type, length)
    }
}
