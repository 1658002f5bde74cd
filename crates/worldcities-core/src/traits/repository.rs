//! Generic repository trait for entity persistence.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic create/read/update repository trait.
///
/// `Draft` is the writable shape of an entity (everything except the
/// generated primary key). Listing is not part of this trait; list
/// endpoints go through the paginated query engine instead.
#[async_trait]
pub trait Repository<Entity, Draft>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Draft: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Entity>>;

    /// Insert a new entity and return it with its generated key.
    async fn create(&self, draft: &Draft) -> AppResult<Entity>;

    /// Overwrite an existing entity. Returns `None` if `id` does not exist.
    async fn update(&self, id: i32, draft: &Draft) -> AppResult<Option<Entity>>;
}
