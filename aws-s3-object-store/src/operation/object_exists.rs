/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;

use crate::error;
use aws_sdk_s3::operation::head_object::HeadObjectError;
/// Request type for checking whether a single object exists in Amazon S3
pub use input::{ObjectExistsInput, ObjectExistsInputBuilder};

use std::sync::Arc;

/// Operation struct for checking object existence
#[derive(Clone, Default, Debug)]
pub(crate) struct ObjectExists;

impl ObjectExists {
    /// Execute a single `HeadObject` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ObjectExistsInput,
    ) -> Result<bool, error::Error> {
        tracing::trace!(
            bucket = input.bucket(),
            key = input.key(),
            "sending HeadObject request"
        );

        let result = handle
            .client()
            .head_object()
            .bucket(input.bucket())
            .key(input.key())
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(HeadObjectError::is_not_found) =>
            {
                tracing::debug!(
                    bucket = input.bucket(),
                    key = input.key(),
                    "object not found"
                );
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use aws_sdk_s3::operation::head_object::HeadObjectOutput;
    use test_common::mock_client_with_stubbed_http_client;
    use aws_smithy_mocks_experimental::{mock, RuleMode};
    use test_common::empty_response;

    fn test_client(rule: &aws_smithy_mocks_experimental::Rule) -> crate::Client {
        let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::Sequential, &[rule]);
        crate::Client::new(crate::Config::builder().client(s3_client).build())
    }

    #[tokio::test]
    async fn test_object_exists() {
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .match_requests(|r| r.bucket() == Some("test-bucket") && r.key() == Some("test-key"))
            .then_output(|| HeadObjectOutput::builder().content_length(12).build());
        let client = test_client(&head_object);

        let exists = client
            .object_exists()
            .bucket("test-bucket")
            .key("test-key")
            .send()
            .await
            .unwrap();
        assert!(exists);
    }

    #[tokio::test]
    async fn test_object_not_found_is_not_an_error() {
        // S3 answers a HEAD for a missing key with a bare 404
        let head_object =
            mock!(aws_sdk_s3::Client::head_object).then_http_response(|| empty_response(404));
        let client = test_client(&head_object);

        let exists = client
            .object_exists()
            .bucket("test-bucket")
            .key("never-created")
            .send()
            .await
            .unwrap();
        assert!(!exists);
    }

    #[tokio::test]
    async fn test_object_exists_other_errors_propagate() {
        let head_object =
            mock!(aws_sdk_s3::Client::head_object).then_http_response(|| empty_response(403));
        let client = test_client(&head_object);

        let err = client
            .object_exists()
            .bucket("test-bucket")
            .key("test-key")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::ServiceError, err.kind());
    }
}
