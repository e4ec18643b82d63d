//! LambdaError is the error every handler invocation can fail with. Returning it from
//! `Lambda::run` makes the runtime report the invocation as failed.

use lambda_runtime::Error as LambdaRuntimeError;
use repositories::objects::ObjectsRepositoryError;
use serde::{self, Deserialize};

pub type LambdaRuntimeResult = std::result::Result<(), LambdaRuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum LambdaError {
    /// Any failure of the storage backend while copying or deleting an object.
    #[error("{0}")]
    BackendOperationFailure(#[source] ObjectsRepositoryError),
    #[error("Invalid notification: {0}")]
    InvalidNotification(String),
    #[error("{0:#}")]
    Unknown(#[source] anyhow::Error),
}

impl From<ObjectsRepositoryError> for LambdaError {
    fn from(value: ObjectsRepositoryError) -> Self {
        LambdaError::BackendOperationFailure(value)
    }
}

/// Body the runtime sends back to the invoker when a handler fails.
#[derive(Deserialize, Debug)]
pub struct ErrorFromHandler {
    #[serde(rename(deserialize = "errorMessage"))]
    pub error_message: String,
    #[serde(rename(deserialize = "errorType"))]
    pub error_type: String,
}
