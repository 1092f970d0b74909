/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use crate::operation::{local_path, required_field};

/// Input type for downloading a single object into a local file
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct GetObjectInput {
    /// The bucket name containing the object.
    pub bucket: String,

    /// The key of the object.
    pub key: String,

    /// The local file to write the object to. Defaults to the object key.
    pub destination: PathBuf,
}

impl GetObjectInput {
    /// Creates a new builder-style object to manufacture [`GetObjectInput`].
    pub fn builder() -> GetObjectInputBuilder {
        GetObjectInputBuilder::default()
    }

    /// The bucket name containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the object.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The local file to write the object to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// A builder for [`GetObjectInput`].
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct GetObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) destination: Option<PathBuf>,
}

impl GetObjectInputBuilder {
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

    /// The local file to write the object to. When not set the object key is used as the path.
    ///
    /// Missing parent directories are created. An existing file is replaced once the
    /// download completes.
    pub fn destination(mut self, input: impl AsRef<Path>) -> Self {
        self.destination = Some(input.as_ref().to_path_buf());
        self
    }

    /// The local file to write the object to.
    pub fn get_destination(&self) -> &Option<PathBuf> {
        &self.destination
    }

    /// Consumes the builder and constructs a [`GetObjectInput`]
    pub fn build(self) -> Result<GetObjectInput, ::aws_smithy_types::error::operation::BuildError> {
        let bucket = required_field("bucket", self.bucket)?;
        let key = required_field("key", self.key)?;
        let destination = local_path(self.destination.as_deref(), &key);

        Ok(GetObjectInput {
            bucket,
            key,
            destination,
        })
    }
}
