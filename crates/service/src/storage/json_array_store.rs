use std::{marker::PhantomData, path::PathBuf, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::Mutex};
use tracing::warn;

use crate::errors::ServiceError;

/// Generic JSON file-backed array store.
///
/// The file holds a JSON array of `T` and is the only copy of the data: every
/// call re-reads it and every mutation rewrites it in full. All calls run
/// under one mutex so read-modify-write cycles never interleave within this
/// process.
pub struct JsonArrayStore<T> {
    lock: Mutex<()>,
    file_path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonArrayStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send,
{
    /// Initialize the store from a path. Creates the file with an empty array if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        common::env::ensure_storage_file(&file_path)
            .await
            .map_err(|e| ServiceError::StorageOpen(e.to_string()))?;

        Ok(Arc::new(Self { lock: Mutex::new(()), file_path, _marker: PhantomData }))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.file_path
    }

    async fn load(&self) -> Result<Vec<T>, ServiceError> {
        let bytes = fs::read(&self.file_path).await.map_err(|e| {
            warn!(path = %self.file_path.display(), error = %e, "storage file unreadable");
            ServiceError::StorageOpen(e.to_string())
        })?;

        // A blank file carries no records.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(path = %self.file_path.display(), error = %e, "storage file malformed");
            ServiceError::StorageCorrupt(e.to_string())
        })
    }

    async fn save(&self, items: &[T]) -> Result<(), ServiceError> {
        let data = to_pretty_json(items)?;
        fs::write(&self.file_path, data).await.map_err(|e| {
            warn!(path = %self.file_path.display(), error = %e, "storage file write failed");
            ServiceError::Write(e.to_string())
        })
    }

    /// Run a read-only closure against the current contents.
    pub async fn read<R, F>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&[T]) -> R,
    {
        let _guard = self.lock.lock().await;
        let items = self.load().await?;
        Ok(f(&items))
    }

    /// List every entry in file order.
    pub async fn list(&self) -> Result<Vec<T>, ServiceError> {
        self.read(|items| items.to_vec()).await
    }

    /// Apply a mutation and persist the whole array. Nothing is written when
    /// the closure returns an error.
    pub async fn update<R, F>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, ServiceError>,
    {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        let out = f(&mut items)?;
        self.save(&items).await?;
        Ok(out)
    }
}

/// Serialize with a single-space indent.
fn to_pretty_json<T: Serialize>(items: &[T]) -> Result<Vec<u8>, ServiceError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    items.serialize(&mut ser).map_err(|e| ServiceError::Serialize(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_array_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn json_array_store_update_persists() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonArrayStore::<String>::new(&tmp).await?;

        // initially empty
        assert!(store.list().await?.is_empty());

        store
            .update(|v| {
                v.push("a".into());
                v.push("b".into());
                Ok(())
            })
            .await?;
        let len = store.read(|v| v.len()).await?;
        assert_eq!(len, 2);

        // failed mutation leaves the file alone
        let before = fs::read(&tmp).await?;
        let res: Result<(), _> = store
            .update(|v| {
                v.clear();
                Err(ServiceError::NotFound("x".into()))
            })
            .await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        assert_eq!(fs::read(&tmp).await?, before);

        // reload persistence
        let reloaded = JsonArrayStore::<String>::new(&tmp).await?;
        assert_eq!(reloaded.list().await?, vec!["a".to_string(), "b".to_string()]);

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn writes_single_space_indent() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonArrayStore::<Vec<u8>>::new(&tmp).await?;
        store
            .update(|v| {
                v.push(vec![1, 2]);
                Ok(())
            })
            .await?;

        let text = fs::read_to_string(&tmp).await?;
        assert_eq!(text, "[\n [\n  1,\n  2\n ]\n]");

        store
            .update(|v| {
                v.clear();
                Ok(())
            })
            .await?;
        assert_eq!(fs::read_to_string(&tmp).await?, "[]");

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn blank_file_reads_as_empty() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        fs::write(&tmp, b"  \n").await?;
        let store = JsonArrayStore::<String>::new(&tmp).await?;
        assert!(store.list().await?.is_empty());

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_is_reported() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        fs::write(&tmp, b"{not json").await?;
        let store = JsonArrayStore::<String>::new(&tmp).await?;

        assert!(matches!(store.list().await, Err(ServiceError::StorageCorrupt(_))));
        let res = store
            .update(|v| {
                v.push("a".into());
                Ok(())
            })
            .await;
        assert!(matches!(res, Err(ServiceError::StorageCorrupt(_))));
        assert_eq!(fs::read(&tmp).await?, b"{not json");

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn vanished_file_is_reported() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonArrayStore::<String>::new(&tmp).await?;
        fs::remove_file(&tmp).await?;

        assert!(matches!(store.list().await, Err(ServiceError::StorageOpen(_))));
        Ok(())
    }

    #[tokio::test]
    async fn unwritable_target_is_reported() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonArrayStore::<String>::new(&tmp).await?;

        // swap the file for a directory between the read and the write
        let path = tmp.clone();
        let res = store
            .update(move |v| {
                let setup = |e: std::io::Error| ServiceError::StorageOpen(e.to_string());
                std::fs::remove_file(&path).map_err(setup)?;
                std::fs::create_dir(&path).map_err(setup)?;
                v.push("a".into());
                Ok(())
            })
            .await;
        assert!(matches!(res, Err(ServiceError::Write(_))));
        assert!(fs::metadata(&tmp).await?.is_dir());

        let _ = fs::remove_dir_all(&tmp).await;
        Ok(())
    }
}
