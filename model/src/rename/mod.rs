use std::borrow::Cow;

/// Prefix prepended to the source key to build the renamed key.
pub const RENAMED_KEY_PREFIX: &str = "renamed-";

/// Copy-then-delete instruction derived from a single object-created notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameRequest {
    pub bucket: String,
    pub source_key: String,
    pub target_key: String,
}

impl RenameRequest {
    /// Builds the request for an already decoded key. A key that already carries the
    /// prefix gets it a second time.
    pub fn new(bucket: String, source_key: String) -> Self {
        let target_key = format!("{RENAMED_KEY_PREFIX}{source_key}");
        Self {
            bucket,
            source_key,
            target_key,
        }
    }

    /// Builds the request for a key as it arrives in an S3 notification.
    pub fn from_encoded_key(bucket: String, encoded_key: &str) -> Self {
        Self::new(bucket, decode_object_key(encoded_key))
    }
}

/// S3 notifications carry form-encoded keys: `+` stands for a space and everything else
/// is percent-encoded. Invalid UTF-8 is replaced and malformed escapes are left as they are.
pub fn decode_object_key(encoded_key: &str) -> String {
    let with_spaces: Cow<str> = if encoded_key.contains('+') {
        Cow::Owned(encoded_key.replace('+', " "))
    } else {
        Cow::Borrowed(encoded_key)
    };

    String::from_utf8_lossy(&urlencoding::decode_binary(with_spaces.as_bytes())).into_owned()
}
