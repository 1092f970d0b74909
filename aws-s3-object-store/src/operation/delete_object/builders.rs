/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error;

use super::{DeleteObjectInputBuilder, DeleteObjectOutput};

/// Fluent builder for constructing a single object deletion
#[derive(Debug)]
pub struct DeleteObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DeleteObjectInputBuilder,
}

impl DeleteObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Delete the object
    pub async fn send(self) -> Result<DeleteObjectOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::delete_object::DeleteObject::orchestrate(self.handle, input).await
    }

    /// Access the input builder
    pub fn as_input(&self) -> &DeleteObjectInputBuilder {
        &self.inner
    }

    /// The bucket name containing the object.
    ///
    /// This member is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket name containing the object.
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

    /// Version ID used to reference a specific version of the object.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.version_id(input);
        self
    }

    /// Version ID used to reference a specific version of the object.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_version_id(input);
        self
    }
}

impl crate::operation::delete_object::input::DeleteObjectInputBuilder {
    /// Delete the object with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<DeleteObjectOutput, error::Error> {
        let mut fluent_builder = client.delete_object();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
