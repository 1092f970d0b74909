/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::operation::required_field;

/// Input type for deleting a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DeleteObjectInput {
    /// The bucket name containing the object.
    pub bucket: String,

    /// The key of the object.
    pub key: String,

    /// Version ID used to reference a specific version of the object.
    pub version_id: Option<String>,
}

impl DeleteObjectInput {
    /// Creates a new builder-style object to manufacture [`DeleteObjectInput`].
    pub fn builder() -> DeleteObjectInputBuilder {
        DeleteObjectInputBuilder::default()
    }

    /// The bucket name containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the object.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Version ID used to reference a specific version of the object.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}

/// A builder for [`DeleteObjectInput`].
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct DeleteObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) version_id: Option<String>,
}

impl DeleteObjectInputBuilder {
    /// The bucket name containing the object.
    ///
    /// This member is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket name containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name containing the object.
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

    /// Version ID used to reference a specific version of the object.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.version_id = Some(input.into());
        self
    }

    /// Version ID used to reference a specific version of the object.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// Version ID used to reference a specific version of the object.
    pub fn get_version_id(&self) -> &Option<String> {
        &self.version_id
    }

    /// Consumes the builder and constructs a [`DeleteObjectInput`]
    pub fn build(
        self,
    ) -> Result<DeleteObjectInput, ::aws_smithy_types::error::operation::BuildError> {
        Ok(DeleteObjectInput {
            bucket: required_field("bucket", self.bucket)?,
            key: required_field("key", self.key)?,
            version_id: self.version_id,
        })
    }
}
