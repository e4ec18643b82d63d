use model::rename::RenameRequest;
use s3_object_renamer::result::error::LambdaError;
use serde::Deserialize;

/// Object-created notification as delivered by S3. Only the fields the handler reads
/// are modelled, everything else in the record is ignored.
#[derive(Debug, Deserialize)]
pub struct S3Notification {
    #[serde(rename(deserialize = "Records"))]
    pub records: Vec<S3NotificationRecord>,
}

#[derive(Debug, Deserialize)]
pub struct S3NotificationRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Object {
    /// Form-encoded object key.
    pub key: String,
}

impl S3Notification {
    /// Builds the rename for the first record. Any further records are ignored.
    pub fn into_rename_request(self) -> Result<RenameRequest, LambdaError> {
        let record = self.records.into_iter().next().ok_or_else(|| {
            LambdaError::InvalidNotification("notification contains no records".to_owned())
        })?;
        let S3Entity { bucket, object } = record.s3;

        if bucket.name.is_empty() {
            return Err(LambdaError::InvalidNotification(
                "bucket name is empty".to_owned(),
            ));
        }

        if object.key.is_empty() {
            return Err(LambdaError::InvalidNotification(
                "object key is empty".to_owned(),
            ));
        }

        Ok(RenameRequest::from_encoded_key(bucket.name, &object.key))
    }
}
