//! Default id generator.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AdapterResult;
use crate::ports::UuidGenerator;

/// Random (v4) uuids, lowercase hyphenated.
#[derive(Debug, Clone, Copy, Default)]
pub struct V4UuidGenerator;

#[async_trait]
impl UuidGenerator for V4UuidGenerator {
    async fn generate(&self) -> AdapterResult<String> {
        Ok(Uuid::new_v4().to_string())
    }
}
