/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

/// Output type for downloading a single object into a local file
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct GetObjectOutput {
    /// Number of bytes written to the destination file.
    pub bytes_transferred: u64,

    /// Size of the body as declared by the service.
    pub content_length: Option<u64>,

    /// Entity tag of the downloaded object.
    pub e_tag: Option<String>,

    /// Version ID of the downloaded object.
    pub version_id: Option<String>,

    /// The local file the object was written to.
    pub destination: PathBuf,
}

impl GetObjectOutput {
    /// Creates a new builder-style object to manufacture [`GetObjectOutput`](crate::operation::get_object::GetObjectOutput).
    pub fn builder() -> GetObjectOutputBuilder {
        GetObjectOutputBuilder::default()
    }

    /// Number of bytes written to the destination file.
    pub fn bytes_transferred(&self) -> u64 {
        self.bytes_transferred
    }

    /// Size of the body as declared by the service.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Entity tag of the downloaded object.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Version ID of the downloaded object.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// The local file the object was written to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// A builder for [`GetObjectOutput`](crate::operation::get_object::GetObjectOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct GetObjectOutputBuilder {
    pub(crate) bytes_transferred: u64,
    pub(crate) content_length: Option<u64>,
    pub(crate) e_tag: Option<String>,
    pub(crate) version_id: Option<String>,
    pub(crate) destination: PathBuf,
}

impl GetObjectOutputBuilder {
    /// Number of bytes written to the destination file.
    pub fn bytes_transferred(mut self, input: u64) -> Self {
        self.bytes_transferred = input;
        self
    }

    /// Size of the body as declared by the service.
    pub fn set_content_length(mut self, input: Option<u64>) -> Self {
        self.content_length = input;
        self
    }

    /// Entity tag of the downloaded object.
    pub fn set_e_tag(mut self, input: Option<String>) -> Self {
        self.e_tag = input;
        self
    }

    /// Version ID of the downloaded object.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// The local file the object was written to.
    pub fn destination(mut self, input: impl AsRef<Path>) -> Self {
        self.destination = input.as_ref().to_path_buf();
        self
    }

    /// Consumes the builder and constructs a [`GetObjectOutput`]
    pub fn build(self) -> GetObjectOutput {
        GetObjectOutput {
            bytes_transferred: self.bytes_transferred,
            content_length: self.content_length,
            e_tag: self.e_tag,
            version_id: self.version_id,
            destination: self.destination,
        }
    }
}
