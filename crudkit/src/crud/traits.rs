//! The CRUD contract
//!
//! [`Crudable`] uses return-position `impl Trait` for its async methods, so
//! implementors can write plain `async fn` without `async_trait`.

use std::future::Future;

use super::error::CrudResult;
use super::filter::Filter;

/// Create, read, update and delete for records of type `T`
///
/// # Example
///
/// ```rust,ignore
/// use crudkit::crud::{Crud, Crudable, Filter};
///
/// async fn publish(posts: &impl Crudable<Post>, slug: &str) -> CrudResult<Post> {
///     let mut post = posts.get(&Filter::where_slug(slug)).await?;
///     post.published = true;
///     posts.update(&post).await
/// }
/// ```
pub trait Crudable<T>: Send + Sync {
    /// Insert a record and return it as stored
    fn create(&self, record: &T) -> impl Future<Output = CrudResult<T>> + Send;

    /// Update a record by its primary key and return it as stored
    fn update(&self, record: &T) -> impl Future<Output = CrudResult<T>> + Send;

    /// Delete the record with the given primary key
    fn delete(&self, id: i64) -> impl Future<Output = CrudResult<()>> + Send;

    /// Fetch the first record matching `filter`
    fn get(&self, filter: &Filter) -> impl Future<Output = CrudResult<T>> + Send;

    /// Fetch every record matching `filter`
    fn list(&self, filter: &Filter) -> impl Future<Output = CrudResult<Vec<T>>> + Send;

    /// Whether a record matching `filter` exists
    ///
    /// Store failures are reported as `false`. Use [`get`](Self::get) when a
    /// missing row has to be told apart from a failing store.
    fn exists(&self, filter: &Filter) -> impl Future<Output = bool> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::{CrudError, CrudOperation};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: i64,
        body: String,
    }

    #[derive(Default)]
    struct MemoryNotes {
        rows: Mutex<Vec<Note>>,
    }

    impl MemoryNotes {
        fn matching(&self, filter: &Filter) -> Vec<Note> {
            let ids: Vec<i64> = filter
                .where_int64
                .iter()
                .chain(filter.and_int64.iter())
                .filter(|field| field.key == "id")
                .map(|field| field.value)
                .collect();
            self.rows
                .lock()
                .unwrap()
                .iter()
                .filter(|note| ids.iter().all(|id| *id == note.id))
                .cloned()
                .collect()
        }
    }

    impl Crudable<Note> for MemoryNotes {
        async fn create(&self, record: &Note) -> CrudResult<Note> {
            self.rows.lock().unwrap().push(record.clone());
            Ok(record.clone())
        }

        async fn update(&self, record: &Note) -> CrudResult<Note> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|row| row.id == record.id)
                .ok_or_else(|| CrudError::new(CrudOperation::Update, sqlx::Error::RowNotFound))?;
            *row = record.clone();
            Ok(record.clone())
        }

        async fn delete(&self, id: i64) -> CrudResult<()> {
            self.rows.lock().unwrap().retain(|row| row.id != id);
            Ok(())
        }

        async fn get(&self, filter: &Filter) -> CrudResult<Note> {
            self.matching(filter)
                .into_iter()
                .next()
                .ok_or_else(|| CrudError::new(CrudOperation::Get, sqlx::Error::RowNotFound))
        }

        async fn list(&self, filter: &Filter) -> CrudResult<Vec<Note>> {
            Ok(self.matching(filter))
        }

        async fn exists(&self, filter: &Filter) -> bool {
            self.get(filter).await.is_ok()
        }
    }

    fn note(id: i64, body: &str) -> Note {
        Note {
            id,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let notes = MemoryNotes::default();
        notes.create(&note(1, "first")).await.unwrap();

        let found = notes.get(&Filter::where_id(1)).await.unwrap();
        assert_eq!(found.body, "first");
    }

    #[tokio::test]
    async fn test_update_missing_row_reports_update() {
        let notes = MemoryNotes::default();
        let error = notes.update(&note(5, "nope")).await.unwrap_err();
        assert_eq!(error.operation(), CrudOperation::Update);
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_exists_collapses_not_found() {
        let notes = MemoryNotes::default();
        notes.create(&note(2, "second")).await.unwrap();

        assert!(notes.exists(&Filter::where_id(2)).await);
        assert!(!notes.exists(&Filter::where_id(3)).await);
    }

    #[tokio::test]
    async fn test_delete_and_list() {
        let notes = MemoryNotes::default();
        notes.create(&note(1, "a")).await.unwrap();
        notes.create(&note(2, "b")).await.unwrap();
        notes.delete(1).await.unwrap();

        let remaining = notes.list(&Filter::default()).await.unwrap();
        assert_eq!(remaining, vec![note(2, "b")]);
    }
}
