mod dtos;

use async_trait::async_trait;
use common::aws_clients::s3::get_s3_client;
use dtos::S3Notification;
use model::rename::RenameRequest;
use repositories::objects::objects_repository_impl::ObjectsRepositoryImpl;
use repositories::objects::{ObjectsRepository, ObjectsRepositoryError};
use s3_object_renamer::{
    lambda_main, lambda_structure::lambda_trait::Lambda, result::error::LambdaError,
};
use std::sync::Arc;

pub struct Persisted {
    pub objects_repository: Arc<dyn ObjectsRepository>,
}

pub struct RenameObject;

impl RenameObject {
    /// Copies the object to its new key and removes the original. The delete is only
    /// attempted once the copy has succeeded.
    async fn rename(
        request: &RenameRequest,
        objects_repository: &dyn ObjectsRepository,
    ) -> Result<(), ObjectsRepositoryError> {
        objects_repository
            .copy_object(
                request.bucket.clone(),
                request.source_key.clone(),
                request.bucket.clone(),
                request.target_key.clone(),
            )
            .await?;

        objects_repository
            .delete_object(request.bucket.clone(), request.source_key.clone())
            .await
    }
}

#[async_trait]
impl Lambda for RenameObject {
    type PersistedMemory = Persisted;
    type InputBody = S3Notification;
    type Output = ();
    type Error = LambdaError;

    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error> {
        let objects_repository = Arc::new(ObjectsRepositoryImpl::new(get_s3_client()));

        Ok(Persisted { objects_repository })
    }

    async fn run(
        request: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        let rename_request = request.into_rename_request()?;

        match Self::rename(&rename_request, state.objects_repository.as_ref()).await {
            Ok(()) => {
                tracing::info!(
                    bucket = %rename_request.bucket,
                    source_key = %rename_request.source_key,
                    target_key = %rename_request.target_key,
                    "Object renamed from {} to {}",
                    rename_request.source_key,
                    rename_request.target_key
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    error = ?e,
                    bucket = %rename_request.bucket,
                    source_key = %rename_request.source_key,
                    target_key = %rename_request.target_key,
                    "Error renaming object: {e}"
                );
                Err(LambdaError::BackendOperationFailure(e))
            }
        }
    }
}

lambda_main!(RenameObject);
