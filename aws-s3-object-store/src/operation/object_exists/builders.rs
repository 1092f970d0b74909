/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error;

use super::ObjectExistsInputBuilder;

/// Fluent builder for constructing an object existence check
#[derive(Debug)]
pub struct ObjectExistsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ObjectExistsInputBuilder,
}

impl ObjectExistsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Check whether the object exists.
    ///
    /// Resolves to `Ok(false)` when the service reports the object as not found.
    pub async fn send(self) -> Result<bool, error::Error> {
        let input = self.inner.build()?;
        crate::operation::object_exists::ObjectExists::orchestrate(self.handle, input).await
    }

    /// Access the input builder
    pub fn as_input(&self) -> &ObjectExistsInputBuilder {
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
}

impl crate::operation::object_exists::input::ObjectExistsInputBuilder {
    /// Check whether the object exists with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<bool, error::Error> {
        let mut fluent_builder = client.object_exists();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
