use rstest::{fixture, rstest};
use serde_json::{json, Value};
use uuid::Uuid;

use s3_object_renamer::result::error::ErrorFromHandler;

use crate::fixtures::lambda::{lambda_fixture, LambdaFixture};
use crate::fixtures::s3::{s3_fixture, S3Fixture};
use crate::handlers::common_assertions::assert_error_from_handler;
use crate::helpers::lambda::LambdaResponse;
use crate::helpers::s3::{ensure_bucket, get_object_content, put_object};

const FUNCTION_NAME: &str = "rename_object";
const OBJECT_CONTENT: &[u8] = b"\x89PNG\r\n\x1a\nnot really a cat";

pub struct LocalFixture {
    pub bucket: String,
    /// Unique per test so runs do not see each other's objects.
    pub prefix: String,
}

#[fixture]
async fn local_fixture(s3_fixture: &S3Fixture) -> LocalFixture {
    let bucket = s3_fixture.config.renamer_test_bucket.clone();
    ensure_bucket(&s3_fixture.s3_client, &bucket, &s3_fixture.config.aws_region).await;

    LocalFixture {
        bucket,
        prefix: Uuid::new_v4().to_string(),
    }
}

fn get_s3_event(bucket: &str, encoded_key: &str) -> Value {
    json!({
        "Records": [
            {
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-west-2",
                "eventTime": "2023-04-28T16:48:03.000Z",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": { "name": bucket, "arn": format!("arn:aws:s3:::{bucket}") },
                    "object": { "key": encoded_key, "size": OBJECT_CONTENT.len() }
                }
            }
        ]
    })
}

#[rstest]
#[case::plain_key("images/cat.png", "images/cat.png")]
#[case::form_encoded_key("my+file%20name.txt", "my file name.txt")]
#[tokio::test(flavor = "multi_thread")]
pub async fn rename_object_ok(
    lambda_fixture: &LambdaFixture,
    s3_fixture: &S3Fixture,
    #[future] local_fixture: LocalFixture,
    #[case] encoded_name: &str,
    #[case] decoded_name: &str,
) {
    let local_fixture = local_fixture.await;
    let bucket = &local_fixture.bucket;
    let source_key = format!("{}/{decoded_name}", local_fixture.prefix);
    let target_key = format!("renamed-{source_key}");

    put_object(&s3_fixture.s3_client, bucket, &source_key, OBJECT_CONTENT).await;

    let response: LambdaResponse<Value> = lambda_fixture
        .lambda
        .invoke(
            FUNCTION_NAME,
            get_s3_event(bucket, &format!("{}/{encoded_name}", local_fixture.prefix)),
        )
        .await
        .unwrap_or_else(|e| panic!("There was an error invoking {FUNCTION_NAME}: {e:?}"));

    assert_eq!(200, response.status);
    assert_eq!(
        Some(OBJECT_CONTENT.to_vec()),
        get_object_content(&s3_fixture.s3_client, bucket, &target_key).await
    );
    assert!(get_object_content(&s3_fixture.s3_client, bucket, &source_key)
        .await
        .is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
pub async fn rename_object_overwrites_existing_target(
    lambda_fixture: &LambdaFixture,
    s3_fixture: &S3Fixture,
    #[future] local_fixture: LocalFixture,
) {
    let local_fixture = local_fixture.await;
    let bucket = &local_fixture.bucket;
    let source_key = format!("{}/a.txt", local_fixture.prefix);
    let target_key = format!("renamed-{source_key}");

    put_object(&s3_fixture.s3_client, bucket, &target_key, b"stale").await;
    put_object(&s3_fixture.s3_client, bucket, &source_key, OBJECT_CONTENT).await;

    let response: LambdaResponse<Value> = lambda_fixture
        .lambda
        .invoke(FUNCTION_NAME, get_s3_event(bucket, &source_key))
        .await
        .unwrap_or_else(|e| panic!("There was an error invoking {FUNCTION_NAME}: {e:?}"));

    assert_eq!(200, response.status);
    assert_eq!(
        Some(OBJECT_CONTENT.to_vec()),
        get_object_content(&s3_fixture.s3_client, bucket, &target_key).await
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
pub async fn rename_missing_object_fails(
    lambda_fixture: &LambdaFixture,
    s3_fixture: &S3Fixture,
    #[future] local_fixture: LocalFixture,
) {
    let local_fixture = local_fixture.await;
    let bucket = &local_fixture.bucket;
    let source_key = format!("{}/missing.txt", local_fixture.prefix);

    let response: LambdaResponse<ErrorFromHandler> = lambda_fixture
        .lambda
        .invoke(FUNCTION_NAME, get_s3_event(bucket, &source_key))
        .await
        .unwrap_or_else(|e| panic!("There was an error invoking {FUNCTION_NAME}: {e:?}"));

    assert_error_from_handler(response, "Error copying object");
    assert!(get_object_content(
        &s3_fixture.s3_client,
        bucket,
        &format!("renamed-{source_key}")
    )
    .await
    .is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
pub async fn rename_without_records_fails(lambda_fixture: &LambdaFixture) {
    let response: LambdaResponse<ErrorFromHandler> = lambda_fixture
        .lambda
        .invoke(FUNCTION_NAME, json!({ "Records": [] }))
        .await
        .unwrap_or_else(|e| panic!("There was an error invoking {FUNCTION_NAME}: {e:?}"));

    assert_error_from_handler(response, "notification contains no records");
}
