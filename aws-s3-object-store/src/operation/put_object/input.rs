/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use aws_sdk_s3::types::StorageClass;

use crate::operation::{local_path, required_field};

/// Input type for uploading a local file as a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PutObjectInput {
    /// The bucket name to upload the object to.
    pub bucket: String,

    /// The key of the object.
    pub key: String,

    /// The local file to upload. Defaults to the object key.
    pub source: PathBuf,

    /// The storage class to store the object with.
    ///
    /// The value is passed through as given; unknown values are rejected by the service.
    pub storage_class: Option<StorageClass>,

    /// A standard MIME type describing the format of the object data.
    pub content_type: Option<String>,
}

impl PutObjectInput {
    /// Creates a new builder-style object to manufacture [`PutObjectInput`].
    pub fn builder() -> PutObjectInputBuilder {
        PutObjectInputBuilder::default()
    }

    /// The bucket name to upload the object to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the object.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The local file to upload.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The storage class to store the object with.
    pub fn storage_class(&self) -> Option<&StorageClass> {
        self.storage_class.as_ref()
    }

    /// A standard MIME type describing the format of the object data.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// A builder for [`PutObjectInput`].
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct PutObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) source: Option<PathBuf>,
    pub(crate) storage_class: Option<StorageClass>,
    pub(crate) content_type: Option<String>,
}

impl PutObjectInputBuilder {
    /// The bucket name to upload the object to.
    ///
    /// This member is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket name to upload the object to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name to upload the object to.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// The key of the object.
    ///
    /// This member is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The key of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The key of the object.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// The local file to upload. When not set the object key is used as the path.
    pub fn source(mut self, input: impl AsRef<Path>) -> Self {
        self.source = Some(input.as_ref().to_path_buf());
        self
    }

    /// The local file to upload.
    pub fn get_source(&self) -> &Option<PathBuf> {
        &self.source
    }

    /// The storage class to store the object with.
    pub fn storage_class(mut self, input: StorageClass) -> Self {
        self.storage_class = Some(input);
        self
    }

    /// The storage class to store the object with.
    pub fn set_storage_class(mut self, input: Option<StorageClass>) -> Self {
        self.storage_class = input;
        self
    }

    /// The storage class to store the object with.
    pub fn get_storage_class(&self) -> &Option<StorageClass> {
        &self.storage_class
    }

    /// A standard MIME type describing the format of the object data.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.content_type = Some(input.into());
        self
    }

    /// A standard MIME type describing the format of the object data.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.content_type = input;
        self
    }

    /// Consumes the builder and constructs a [`PutObjectInput`]
    pub fn build(self) -> Result<PutObjectInput, ::aws_smithy_types::error::operation::BuildError> {
        let bucket = required_field("bucket", self.bucket)?;
        let key = required_field("key", self.key)?;
        let source = local_path(self.source.as_deref(), &key);

        Ok(PutObjectInput {
            bucket,
            key,
            source,
            storage_class: self.storage_class,
            content_type: self.content_type,
        })
    }
}
