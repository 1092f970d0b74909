/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;
use std::sync::Arc;

use aws_sdk_s3::types::StorageClass;

use crate::error;

use super::{PutObjectInputBuilder, PutObjectOutput};

/// Fluent builder for constructing a single object upload
#[derive(Debug)]
pub struct PutObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: PutObjectInputBuilder,
}

impl PutObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Upload the local file as a single object
    pub async fn send(self) -> Result<PutObjectOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::put_object::PutObject::orchestrate(self.handle, input).await
    }

    /// Access the input builder
    pub fn as_input(&self) -> &PutObjectInputBuilder {
        &self.inner
    }

    /// The bucket name to upload the object to.
    ///
    /// This member is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket name to upload the object to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The key of the object.
    ///
    /// This member is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// The key of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The local file to upload. When not set the object key is used as the path.
    pub fn source(mut self, input: impl AsRef<Path>) -> Self {
        self.inner = self.inner.source(input);
        self
    }

    /// The storage class to store the object with.
    ///
    /// Not validated locally, e.g. `StorageClass::from("STANDARD")`.
    pub fn storage_class(mut self, input: StorageClass) -> Self {
        self.inner = self.inner.storage_class(input);
        self
    }

    /// The storage class to store the object with.
    pub fn set_storage_class(mut self, input: Option<StorageClass>) -> Self {
        self.inner = self.inner.set_storage_class(input);
        self
    }

    /// A standard MIME type describing the format of the object data.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(input);
        self
    }
}

impl crate::operation::put_object::input::PutObjectInputBuilder {
    /// Upload the local file with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<PutObjectOutput, error::Error> {
        let mut fluent_builder = client.put_object();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
