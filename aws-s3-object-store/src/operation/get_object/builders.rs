/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;
use std::sync::Arc;

use crate::error;

use super::{GetObjectInputBuilder, GetObjectOutput};

/// Fluent builder for constructing a single object download
#[derive(Debug)]
pub struct GetObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: GetObjectInputBuilder,
}

impl GetObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Download the object into the destination file
    pub async fn send(self) -> Result<GetObjectOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::get_object::GetObject::orchestrate(self.handle, input).await
    }

    /// Access the input builder
    pub fn as_input(&self) -> &GetObjectInputBuilder {
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

    /// The local file to write the object to. When not set the object key is used as the path.
    pub fn destination(mut self, input: impl AsRef<Path>) -> Self {
        self.inner = self.inner.destination(input);
        self
    }
}

impl crate::operation::get_object::input::GetObjectInputBuilder {
    /// Download the object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<GetObjectOutput, error::Error> {
        let mut fluent_builder = client.get_object();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
