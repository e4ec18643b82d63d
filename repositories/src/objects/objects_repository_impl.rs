use crate::objects::{ObjectsRepository, ObjectsRepositoryError};
use anyhow::anyhow;
use async_trait::async_trait;
use rusoto_s3::{CopyObjectRequest, DeleteObjectRequest, S3};

pub struct ObjectsRepositoryImpl<C: S3 + Sync + Send> {
    s3_client: C,
}

impl<C: S3 + Sync + Send> ObjectsRepositoryImpl<C> {
    pub fn new(s3_client: C) -> Self {
        Self { s3_client }
    }

    fn create_copy_object_request(
        source_bucket: &str,
        source_key: &str,
        dest_bucket: String,
        dest_key: String,
    ) -> CopyObjectRequest {
        CopyObjectRequest {
            bucket: dest_bucket,
            key: dest_key,
            copy_source: copy_source(source_bucket, source_key),
            ..Default::default()
        }
    }
}

/// Value for the `x-amz-copy-source` header. The key must be url-encoded, but its
/// `/` separators are sent as they are.
fn copy_source(bucket: &str, key: &str) -> String {
    let encoded_key = key
        .split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/");

    format!("{bucket}/{encoded_key}")
}

#[async_trait]
impl<C: S3 + Sync + Send> ObjectsRepository for ObjectsRepositoryImpl<C> {
    async fn copy_object(
        &self,
        source_bucket: String,
        source_key: String,
        dest_bucket: String,
        dest_key: String,
    ) -> Result<(), ObjectsRepositoryError> {
        let context = format!(
            "Error copying object {source_bucket}/{source_key} to {dest_bucket}/{dest_key}"
        );
        let input =
            Self::create_copy_object_request(&source_bucket, &source_key, dest_bucket, dest_key);

        tracing::debug!(
            copy_source = %input.copy_source,
            bucket = %input.bucket,
            key = %input.key,
            "Copying object"
        );

        self.s3_client
            .copy_object(input)
            .await
            .map_err(|e| ObjectsRepositoryError::Unknown(anyhow!(e).context(context)))?;

        Ok(())
    }

    async fn delete_object(
        &self,
        bucket: String,
        key: String,
    ) -> Result<(), ObjectsRepositoryError> {
        let context = format!("Error deleting object {bucket}/{key}");
        let input = DeleteObjectRequest {
            bucket,
            key,
            ..Default::default()
        };

        self.s3_client
            .delete_object(input)
            .await
            .map_err(|e| ObjectsRepositoryError::Unknown(anyhow!(e).context(context)))?;

        Ok(())
    }
}
