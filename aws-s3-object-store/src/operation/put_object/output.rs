/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for uploading a local file as a single object
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct PutObjectOutput {
    /// Number of bytes read from the local file and sent as the object body.
    pub bytes_transferred: u64,

    /// Entity tag for the uploaded object.
    pub e_tag: Option<String>,

    /// Version ID of the object, if versioning is enabled for the bucket.
    pub version_id: Option<String>,
}

impl PutObjectOutput {
    /// Creates a new builder-style object to manufacture [`PutObjectOutput`](crate::operation::put_object::PutObjectOutput).
    pub fn builder() -> PutObjectOutputBuilder {
        PutObjectOutputBuilder::default()
    }

    /// Number of bytes sent as the object body.
    pub fn bytes_transferred(&self) -> u64 {
        self.bytes_transferred
    }

    /// Entity tag for the uploaded object.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Version ID of the object.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}

/// A builder for [`PutObjectOutput`](crate::operation::put_object::PutObjectOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct PutObjectOutputBuilder {
    pub(crate) bytes_transferred: u64,
    pub(crate) e_tag: Option<String>,
    pub(crate) version_id: Option<String>,
}

impl PutObjectOutputBuilder {
    /// Number of bytes sent as the object body.
    pub fn bytes_transferred(mut self, input: u64) -> Self {
        self.bytes_transferred = input;
        self
    }

    /// Entity tag for the uploaded object.
    pub fn e_tag(mut self, input: impl Into<String>) -> Self {
        self.e_tag = Some(input.into());
        self
    }

    /// Entity tag for the uploaded object.
    pub fn set_e_tag(mut self, input: Option<String>) -> Self {
        self.e_tag = input;
        self
    }

    /// Version ID of the object.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.version_id = Some(input.into());
        self
    }

    /// Version ID of the object.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// Consumes the builder and constructs a [`PutObjectOutput`]
    pub fn build(self) -> PutObjectOutput {
        PutObjectOutput {
            bytes_transferred: self.bytes_transferred,
            e_tag: self.e_tag,
            version_id: self.version_id,
        }
    }
}
