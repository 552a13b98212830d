//! Generic repository trait for document-store access.

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::entity::Entity;
use crate::result::AppResult;
use crate::types::filter::Filter;
use crate::types::pagination::{PageRequest, PageResponse};
use crate::types::sorting::SortField;

/// Collection-agnostic CRUD and query operations for any [`Entity`].
///
/// Every read uniformly excludes soft-deleted records; the only operations
/// that see them are the physical [`delete`](Repository::delete) and raw
/// driver access outside this trait. All operations are independent
/// request-response exchanges with the store, with no retries, locking or
/// cross-document transactions. Dropping a returned future aborts the
/// in-flight store call; a single document replace either fully applies or
/// not at all.
///
/// Paginated reads issue a count followed by a window fetch. The two reads
/// are not transactionally consistent with each other; a concurrent writer
/// can change the collection between them. Known limitation, accepted.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Insert a new entity. Any caller-supplied id is discarded; the audit
    /// timestamps are stamped server-side. Returns the entity with the
    /// store-assigned id populated.
    async fn create(&self, entity: E) -> AppResult<E>;

    /// Look up a non-deleted entity by id. Absence is `Ok(None)`, never an
    /// error.
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<E>>;

    /// Return all non-deleted entities in the collection.
    ///
    /// Unbounded: the caller is responsible for not using this on large
    /// collections where a paginated read belongs.
    async fn find_all(&self) -> AppResult<Vec<E>>;

    /// Return the non-deleted entities matching the filter, in store order.
    async fn find(&self, filter: &Filter) -> AppResult<Vec<E>>;

    /// Return one page of the collection, sorted by `created_at`
    /// descending.
    async fn list_page(&self, page: &PageRequest) -> AppResult<PageResponse<E>>;

    /// Return one page of the collection with a caller-supplied sort. A
    /// blank sort field falls back to `created_at` in the requested
    /// direction.
    async fn list_page_sorted(
        &self,
        page: &PageRequest,
        sort: &SortField,
    ) -> AppResult<PageResponse<E>>;

    /// Return one page of the entities matching the filter, sorted by
    /// `created_at` descending.
    async fn find_page(&self, filter: &Filter, page: &PageRequest) -> AppResult<PageResponse<E>>;

    /// Return one page of the entities matching the filter with a
    /// caller-supplied sort.
    async fn find_page_sorted(
        &self,
        filter: &Filter,
        page: &PageRequest,
        sort: &SortField,
    ) -> AppResult<PageResponse<E>>;

    /// Replace the stored record with the given entity (full replace, no
    /// field-level patch) and refresh `updated_at`. Returns `false` when no
    /// non-deleted record matches the entity's id.
    async fn update(&self, entity: E) -> AppResult<bool>;

    /// Physically remove the record, deleted or not. Returns `true` if a
    /// record was removed.
    async fn delete(&self, id: ObjectId) -> AppResult<bool>;

    /// Mark the record logically removed and refresh `updated_at`, only if
    /// it is not already deleted. Returns `true` if the record was
    /// modified.
    async fn soft_delete(&self, id: ObjectId) -> AppResult<bool>;

    /// Whether a non-deleted record with this id exists.
    async fn exists(&self, id: ObjectId) -> AppResult<bool>;

    /// Count all non-deleted entities in the collection.
    async fn count(&self) -> AppResult<u64>;

    /// Count the non-deleted entities matching the filter.
    async fn count_matching(&self, filter: &Filter) -> AppResult<u64>;
}
