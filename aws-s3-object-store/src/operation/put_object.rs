/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use crate::error::{self, ErrorKind};
use aws_sdk_s3::primitives::{ByteStream, Length};
/// Request type for uploading a local file to Amazon S3
pub use input::{PutObjectInput, PutObjectInputBuilder};
/// Response type for uploading a local file to Amazon S3
pub use output::{PutObjectOutput, PutObjectOutputBuilder};

use std::sync::Arc;
use tokio::fs;

/// Operation struct for uploading a local file as a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct PutObject;

impl PutObject {
    /// Execute a single `PutObject` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: PutObjectInput,
    ) -> Result<PutObjectOutput, error::Error> {
        let source = input.source();
        let file = fs::File::open(source).await?;
        let metadata = file.metadata().await?;
        if !metadata.is_file() {
            return Err(error::invalid_input(format!(
                "upload source {} is not a regular file",
                source.display()
            )));
        }

        // the declared length and the body both come from the one open handle
        let body = ByteStream::read_from()
            .file(file)
            .length(Length::Exact(metadata.len()))
            .build()
            .await
            .map_err(error::from_kind(ErrorKind::IOError))?;

        let bytes = body.size_hint().0;
        let content_length: i64 = bytes
            .try_into()
            .map_err(|_| error::invalid_input(format!("content_length:{bytes} is invalid.")))?;

        tracing::trace!(
            bucket = input.bucket(),
            key = input.key(),
            source = %source.display(),
            content_length,
            "sending PutObject request"
        );

        let resp = handle
            .client()
            .put_object()
            .bucket(input.bucket())
            .key(input.key())
            .body(body)
            .content_length(content_length)
            .set_storage_class(input.storage_class().cloned())
            .set_content_type(input.content_type().map(str::to_owned))
            .send()
            .await?;

        tracing::info!(
            bucket = input.bucket(),
            key = input.key(),
            bytes = content_length,
            "object uploaded successfully"
        );

        Ok(PutObjectOutput::builder()
            .bytes_transferred(bytes)
            .set_e_tag(resp.e_tag().map(str::to_owned))
            .set_version_id(resp.version_id().map(str::to_owned))
            .build())
    }
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use crate::operation::put_object::PutObjectInput;
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_sdk_s3::types::StorageClass;
    use test_common::mock_client_with_stubbed_http_client;
    use aws_smithy_mocks_experimental::{mock, RuleMode};
    use std::io::Write;

    fn test_client(s3_client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(s3_client).build();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_put_object_forwards_request_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"every adolescent dog goes bonkers early")
            .unwrap();

        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| {
                r.bucket() == Some("test-bucket")
                    && r.key() == Some("test-key")
                    && r.content_length() == Some(39)
                    && r.storage_class() == Some(&StorageClass::StandardIa)
                    && r.content_type() == Some("text/plain")
            })
            .then_output(|| {
                PutObjectOutput::builder()
                    .e_tag("test-etag")
                    .version_id("v1")
                    .build()
            });
        let client = test_client(mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]));

        let output = PutObjectInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .source(file.path())
            .storage_class(StorageClass::StandardIa)
            .content_type("text/plain")
            .send_with(&client)
            .await
            .unwrap();

        assert_eq!(39, output.bytes_transferred());
        assert_eq!(Some("test-etag"), output.e_tag());
        assert_eq!(Some("v1"), output.version_id());
        assert_eq!(1, put_object.num_calls());
    }

    #[tokio::test]
    async fn test_put_object_rejects_directory_source() {
        let dir = tempfile::tempdir().unwrap();
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .then_output(|| PutObjectOutput::builder().build());
        let client = test_client(mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]));

        let err = client
            .put_object()
            .bucket("test-bucket")
            .key("test-key")
            .source(dir.path())
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::InputInvalid, err.kind());
        assert_eq!(0, put_object.num_calls());
    }
}
