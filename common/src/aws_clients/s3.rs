use crate::config::aws_client_config::AwsClientConfig;
use crate::config::ConfigLoader;
use rusoto_core::credential::EnvironmentProvider;
use rusoto_s3::S3Client;

pub fn get_s3_client() -> S3Client {
    let config = ConfigLoader::load_default::<AwsClientConfig>();
    let request_dispatcher = rusoto_core::request::HttpClient::new()
        .unwrap_or_else(|e| panic!("Unable to build Rusoto HTTP Client: {e}"));

    S3Client::new_with(
        request_dispatcher,
        EnvironmentProvider::default(),
        config.region(),
    )
}
