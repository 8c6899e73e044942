use std::path::PathBuf;

use tokio::fs;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::Document;

/// File-backed document store. Reads load the whole file fresh; mutations go
/// through [`JsonStore::update`], which serializes writers behind a mutex so
/// concurrent read-modify-write cycles cannot drop each other's changes.
pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read and parse the whole backing file.
    pub async fn load(&self) -> AppResult<Document> {
        let raw = fs::read(&self.path)
            .await
            .map_err(|e| AppError::StorageRead(format!("{}: {e}", self.path.display())))?;
        serde_json::from_slice(&raw)
            .map_err(|e| AppError::StorageRead(format!("{}: {e}", self.path.display())))
    }

    /// Load, apply `mutate`, and rewrite the file. The write lock is held for
    /// the whole cycle. An error from `mutate` aborts before any write, so the
    /// file stays untouched.
    pub async fn update<T, F>(&self, mutate: F) -> AppResult<T>
    where
        F: FnOnce(&mut Document) -> AppResult<T>,
    {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.load().await?;
        let out = mutate(&mut doc)?;
        self.persist(&doc).await?;
        Ok(out)
    }

    async fn persist(&self, doc: &Document) -> AppResult<()> {
        // Pretty-printed, matching the hand-editable format the file ships in.
        let raw = serde_json::to_vec_pretty(doc)
            .map_err(|e| AppError::StorageWrite(e.to_string()))?;
        fs::write(&self.path, raw)
            .await
            .map_err(|e| AppError::StorageWrite(format!("{}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seed_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn load_missing_file_is_storage_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nope.json"));
        assert!(matches!(
            store.load().await,
            Err(AppError::StorageRead(_))
        ));
    }

    #[tokio::test]
    async fn load_invalid_json_is_storage_read_error() {
        let (_dir, path) = seed_file("{ not json");
        let store = JsonStore::new(path);
        assert!(matches!(
            store.load().await,
            Err(AppError::StorageRead(_))
        ));
    }

    #[tokio::test]
    async fn update_persists_and_reload_reproduces_collections() {
        let (_dir, path) = seed_file(
            r#"{
  "latest": [{ "id": "l1", "title": "Dune" }],
  "upcomingMovies": [{ "id": "m1", "title": "Alien", "year": 1979 }],
  "events": [],
  "users": [{ "id": "u1", "name": "Ada" }],
  "bookings": []
}"#,
        );
        let store = JsonStore::new(&path);

        store
            .update(|doc| {
                let booking = json!({ "id": "b1", "user": "u1", "movie": "m1" });
                doc.bookings.push(booking.as_object().cloned().unwrap());
                Ok(())
            })
            .await
            .unwrap();

        let reloaded = store.load().await.unwrap();
        assert_eq!(reloaded.bookings.len(), 1);
        assert_eq!(reloaded.bookings[0]["user"], "u1");
        // Untouched collections come back byte-for-byte equivalent.
        assert_eq!(reloaded.upcoming_movies[0]["year"], 1979);
        assert_eq!(reloaded.latest[0]["title"], "Dune");
        assert_eq!(reloaded.users.len(), 1);
    }

    #[tokio::test]
    async fn failed_mutation_leaves_file_untouched() {
        let contents = r#"{ "users": [{ "id": "u1" }] }"#;
        let (_dir, path) = seed_file(contents);
        let store = JsonStore::new(&path);

        let result: AppResult<()> = store
            .update(|_doc| Err(AppError::NotFound("Booking not found".to_string())))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, contents);
    }

    #[tokio::test]
    async fn concurrent_updates_serialize_instead_of_losing_writes() {
        let (_dir, path) = seed_file(r#"{ "users": [] }"#);
        let store = std::sync::Arc::new(JsonStore::new(&path));

        let a = store.clone();
        let b = store.clone();
        let (ra, rb) = tokio::join!(
            a.update(|doc| {
                doc.users
                    .push(json!({ "id": "u-a" }).as_object().cloned().unwrap());
                Ok(())
            }),
            b.update(|doc| {
                doc.users
                    .push(json!({ "id": "u-b" }).as_object().cloned().unwrap());
                Ok(())
            }),
        );
        ra.unwrap();
        rb.unwrap();

        let doc = store.load().await.unwrap();
        assert_eq!(doc.users.len(), 2);
    }
}
