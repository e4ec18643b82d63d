pub const BUCKET_FOR_MOCK_REQUESTS: &str = "my-bucket";
pub const OBJECT_KEY_FOR_MOCK_REQUESTS: &str = "images/cat.png";
pub const RENAMED_OBJECT_KEY_FOR_MOCK_REQUESTS: &str = "renamed-images/cat.png";
