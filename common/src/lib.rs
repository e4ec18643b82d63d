pub mod aws_clients {
    pub mod s3;
}
pub mod config;
pub mod test_tools {
    pub mod constants;
}
