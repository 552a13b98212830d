//! Generic MongoDB-backed repository.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document, doc};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use eventide_core::entity::Entity;
use eventide_core::result::AppResult;
use eventide_core::traits::repository::Repository;
use eventide_core::types::filter::Filter;
use eventide_core::types::pagination::{PageRequest, PageResponse};
use eventide_core::types::sorting::SortField;

use crate::error::map_store_error;
use crate::query::{FieldNaming, resolve_sort, scoped_filter, soft_delete_guard};

/// The single store-backed implementation of the generic repository trait.
///
/// One instance serves one entity type; the collection is resolved from
/// [`Entity::COLLECTION`] at construction. The field-naming convention is
/// an explicit constructor argument so it can be tested independent of any
/// running store.
pub struct MongoRepository<E: Entity> {
    collection: Collection<E>,
    naming: FieldNaming,
}

// Manual impl: a derived Clone would demand E: Clone, which the entity
// contract does not require.
impl<E: Entity> Clone for MongoRepository<E> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            naming: self.naming,
        }
    }
}

impl<E: Entity> MongoRepository<E> {
    /// Create a repository over the entity's collection with the default
    /// snake_case field naming.
    pub fn new(database: &Database) -> Self {
        Self::with_naming(database, FieldNaming::default())
    }

    /// Create a repository with an explicit field-naming convention.
    pub fn with_naming(database: &Database, naming: FieldNaming) -> Self {
        Self {
            collection: database.collection::<E>(E::COLLECTION),
            naming,
        }
    }

    /// The collection this repository reads and writes.
    pub fn collection(&self) -> &Collection<E> {
        &self.collection
    }

    /// Count-then-fetch for one page. The two reads are not transactionally
    /// consistent with each other; a concurrent writer can change the
    /// collection between them.
    async fn fetch_page(
        &self,
        store_filter: Document,
        page: &PageRequest,
        sort: Document,
    ) -> AppResult<PageResponse<E>> {
        let total = self
            .collection
            .count_documents(store_filter.clone())
            .await
            .map_err(|e| map_store_error(e, "Failed to count documents"))?;
        if total == 0 {
            return Ok(PageResponse::empty(page));
        }

        let items: Vec<E> = self
            .collection
            .find(store_filter)
            .sort(sort)
            .skip(page.offset())
            .limit(page.limit() as i64)
            .await
            .map_err(|e| map_store_error(e, "Failed to fetch page"))?
            .try_collect()
            .await
            .map_err(|e| map_store_error(e, "Failed to read page cursor"))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    fn id_guard(id: ObjectId) -> Document {
        let mut guard = soft_delete_guard();
        guard.insert("_id", id);
        guard
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MongoRepository<E> {
    async fn create(&self, mut entity: E) -> AppResult<E> {
        entity.set_id(None);
        entity.stamp_created(Utc::now());
        entity.set_deleted(false);

        let result = self
            .collection
            .insert_one(&entity)
            .await
            .map_err(|e| map_store_error(e, "Failed to insert document"))?;

        match result.inserted_id.as_object_id() {
            Some(id) => {
                entity.set_id(Some(id));
                Ok(entity)
            }
            None => Err(eventide_core::AppError::internal(
                "Store returned a non-ObjectId document id",
            )),
        }
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<E>> {
        self.collection
            .find_one(Self::id_guard(id))
            .await
            .map_err(|e| map_store_error(e, "Failed to find document by id"))
    }

    async fn find_all(&self) -> AppResult<Vec<E>> {
        self.collection
            .find(soft_delete_guard())
            .await
            .map_err(|e| map_store_error(e, "Failed to list documents"))?
            .try_collect()
            .await
            .map_err(|e| map_store_error(e, "Failed to read list cursor"))
    }

    async fn find(&self, filter: &Filter) -> AppResult<Vec<E>> {
        self.collection
            .find(scoped_filter(filter, self.naming)?)
            .await
            .map_err(|e| map_store_error(e, "Failed to find documents"))?
            .try_collect()
            .await
            .map_err(|e| map_store_error(e, "Failed to read find cursor"))
    }

    async fn list_page(&self, page: &PageRequest) -> AppResult<PageResponse<E>> {
        self.fetch_page(soft_delete_guard(), page, resolve_sort(None, self.naming))
            .await
    }

    async fn list_page_sorted(
        &self,
        page: &PageRequest,
        sort: &SortField,
    ) -> AppResult<PageResponse<E>> {
        self.fetch_page(
            soft_delete_guard(),
            page,
            resolve_sort(Some(sort), self.naming),
        )
        .await
    }

    async fn find_page(&self, filter: &Filter, page: &PageRequest) -> AppResult<PageResponse<E>> {
        self.fetch_page(
            scoped_filter(filter, self.naming)?,
            page,
            resolve_sort(None, self.naming),
        )
        .await
    }

    async fn find_page_sorted(
        &self,
        filter: &Filter,
        page: &PageRequest,
        sort: &SortField,
    ) -> AppResult<PageResponse<E>> {
        self.fetch_page(
            scoped_filter(filter, self.naming)?,
            page,
            resolve_sort(Some(sort), self.naming),
        )
        .await
    }

    async fn update(&self, mut entity: E) -> AppResult<bool> {
        let Some(id) = entity.id() else {
            return Err(eventide_core::AppError::query(
                "Cannot update an entity that has no id",
            ));
        };
        entity.stamp_updated(Utc::now());

        let result = self
            .collection
            .replace_one(Self::id_guard(id), &entity)
            .await
            .map_err(|e| map_store_error(e, "Failed to replace document"))?;
        Ok(result.modified_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<bool> {
        // Physical removal: deliberately not scoped by the soft-delete flag.
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| map_store_error(e, "Failed to delete document"))?;
        Ok(result.deleted_count > 0)
    }

    async fn soft_delete(&self, id: ObjectId) -> AppResult<bool> {
        let update = doc! {
            "$set": {
                "is_deleted": true,
                "updated_at": Bson::DateTime(bson::DateTime::from_chrono(Utc::now())),
            }
        };
        let result = self
            .collection
            .update_one(Self::id_guard(id), update)
            .await
            .map_err(|e| map_store_error(e, "Failed to soft-delete document"))?;
        Ok(result.modified_count > 0)
    }

    async fn exists(&self, id: ObjectId) -> AppResult<bool> {
        let count = self
            .collection
            .count_documents(Self::id_guard(id))
            .limit(1)
            .await
            .map_err(|e| map_store_error(e, "Failed to check document existence"))?;
        Ok(count > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection
            .count_documents(soft_delete_guard())
            .await
            .map_err(|e| map_store_error(e, "Failed to count documents"))
    }

    async fn count_matching(&self, filter: &Filter) -> AppResult<u64> {
        self.collection
            .count_documents(scoped_filter(filter, self.naming)?)
            .await
            .map_err(|e| map_store_error(e, "Failed to count matching documents"))
    }
}
