/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;
mod sink;

use crate::error;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_smithy_types::error::display::DisplayErrorContext;
/// Request type for downloading a single object from Amazon S3
pub use input::{GetObjectInput, GetObjectInputBuilder};
/// Response type for downloading a single object from Amazon S3
pub use output::{GetObjectOutput, GetObjectOutputBuilder};

use std::sync::Arc;

/// Operation struct for downloading a single object into a local file
#[derive(Clone, Default, Debug)]
pub(crate) struct GetObject;

impl GetObject {
    /// Execute a single `GetObject` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: GetObjectInput,
    ) -> Result<GetObjectOutput, error::Error> {
        tracing::trace!(
            bucket = input.bucket(),
            key = input.key(),
            "sending GetObject request"
        );

        let resp = match handle
            .client()
            .get_object()
            .bucket(input.bucket())
            .key(input.key())
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                let not_found = err
                    .as_service_error()
                    .is_some_and(GetObjectError::is_no_such_key);
                let err = error::from_sdk_error(err, not_found);
                tracing::warn!(
                    bucket = input.bucket(),
                    key = input.key(),
                    error = %DisplayErrorContext(&err),
                    "couldn't get object"
                );
                return Err(err);
            }
        };

        let content_length = resp.content_length().and_then(|len| u64::try_from(len).ok());
        let e_tag = resp.e_tag().map(str::to_owned);
        let version_id = resp.version_id().map(str::to_owned);

        let destination = input.destination();
        let bytes_transferred =
            match sink::stream_to_file(resp.body, destination, content_length).await {
                Ok(written) => written,
                Err(err) => {
                    tracing::warn!(
                        bucket = input.bucket(),
                        key = input.key(),
                        destination = %destination.display(),
                        error = %DisplayErrorContext(&err),
                        "couldn't write object body"
                    );
                    return Err(err);
                }
            };

        tracing::info!(
            bucket = input.bucket(),
            key = input.key(),
            destination = %destination.display(),
            content_length = ?content_length,
            bytes = bytes_transferred,
            "object downloaded successfully"
        );

        Ok(GetObjectOutput::builder()
            .bytes_transferred(bytes_transferred)
            .set_content_length(content_length)
            .set_e_tag(e_tag)
            .set_version_id(version_id)
            .destination(destination)
            .build())
    }
}
