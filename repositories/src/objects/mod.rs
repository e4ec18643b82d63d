use async_trait::async_trait;

#[cfg(feature = "test_mocks")]
use mockall::mock;

pub mod objects_repository_impl;

#[derive(Debug, thiserror::Error)]
pub enum ObjectsRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

/// Server-side object operations on the storage backend.
#[async_trait]
pub trait ObjectsRepository
where
    Self: Sync + Send,
{
    /// Copies an object without downloading it. Source and destination may be the
    /// same bucket; an existing destination object is overwritten.
    async fn copy_object(
        &self,
        source_bucket: String,
        source_key: String,
        dest_bucket: String,
        dest_key: String,
    ) -> Result<(), ObjectsRepositoryError>;

    async fn delete_object(&self, bucket: String, key: String)
        -> Result<(), ObjectsRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub ObjectsRepository {}
    #[async_trait]
    impl ObjectsRepository for ObjectsRepository {
        async fn copy_object(
            &self,
            source_bucket: String,
            source_key: String,
            dest_bucket: String,
            dest_key: String,
        ) -> Result<(), ObjectsRepositoryError>;

        async fn delete_object(
            &self,
            bucket: String,
            key: String,
        ) -> Result<(), ObjectsRepositoryError>;
    }
}
