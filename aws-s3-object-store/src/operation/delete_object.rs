/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use crate::error;
/// Request type for deleting a single object from Amazon S3
pub use input::{DeleteObjectInput, DeleteObjectInputBuilder};
/// Response type for deleting a single object from Amazon S3
pub use output::{DeleteObjectOutput, DeleteObjectOutputBuilder};

use std::sync::Arc;

/// Operation struct for deleting a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteObject;

impl DeleteObject {
    /// Execute a single `DeleteObject` operation
    ///
    /// Deleting a key that doesn't exist succeeds (that's how S3 behaves), a missing bucket
    /// does not.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteObjectInput,
    ) -> Result<DeleteObjectOutput, error::Error> {
        tracing::trace!(
            bucket = input.bucket(),
            key = input.key(),
            version_id = ?input.version_id(),
            "sending DeleteObject request"
        );

        let resp = handle
            .client()
            .delete_object()
            .bucket(input.bucket())
            .key(input.key())
            .set_version_id(input.version_id().map(str::to_owned))
            .send()
            .await?;

        tracing::info!(
            bucket = input.bucket(),
            key = input.key(),
            "object deleted successfully"
        );

        Ok(DeleteObjectOutput::builder()
            .delete_marker(resp.delete_marker().unwrap_or_default())
            .set_version_id(resp.version_id().map(str::to_owned))
            .build())
    }
}
