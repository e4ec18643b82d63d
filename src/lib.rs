pub mod config;
pub mod lambda_structure {
    pub mod lambda_trait;
}
pub mod result {
    pub mod error;
}
