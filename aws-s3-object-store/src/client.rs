/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Config;
use std::sync::Arc;

/// Object store client for Amazon Simple Storage Service.
///
/// Cloning a client is cheap; every clone shares the same configuration.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }
}

impl Client {
    /// Creates a new client from an object store config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Upload a local file as a single object.
    ///
    /// The whole file is sent with one `PutObject` request. Unless a
    /// [`source`](crate::operation::put_object::builders::PutObjectFluentBuilder::source) is
    /// given, the object key doubles as the local path to read from.
    ///
    /// Constructs a fluent builder for the
    /// [`PutObject`](crate::operation::put_object::builders::PutObjectFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_sdk_s3::types::StorageClass;
    ///
    /// async fn save(client: &aws_s3_object_store::Client) -> Result<(), aws_s3_object_store::error::Error> {
    ///     let output = client
    ///         .put_object()
    ///         .bucket("my-bucket")
    ///         .key("cache/deps.tar.gz")
    ///         .storage_class(StorageClass::StandardIa)
    ///         .send()
    ///         .await?;
    ///
    ///     println!("uploaded {} bytes", output.bytes_transferred());
    ///     Ok(())
    /// }
    /// ```
    pub fn put_object(&self) -> crate::operation::put_object::builders::PutObjectFluentBuilder {
        crate::operation::put_object::builders::PutObjectFluentBuilder::new(self.handle.clone())
    }

    /// Download a single object into a local file.
    ///
    /// The response body is streamed to disk; the destination is only replaced once the
    /// entire body has been received. Unless a
    /// [`destination`](crate::operation::get_object::builders::GetObjectFluentBuilder::destination)
    /// is given, the object key doubles as the local path to write to.
    ///
    /// Constructs a fluent builder for the
    /// [`GetObject`](crate::operation::get_object::builders::GetObjectFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn restore(client: &aws_s3_object_store::Client) -> Result<(), aws_s3_object_store::error::Error> {
    ///     client
    ///         .get_object()
    ///         .bucket("my-bucket")
    ///         .key("cache/deps.tar.gz")
    ///         .destination("/tmp/deps.tar.gz")
    ///         .send()
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn get_object(&self) -> crate::operation::get_object::builders::GetObjectFluentBuilder {
        crate::operation::get_object::builders::GetObjectFluentBuilder::new(self.handle.clone())
    }

    /// Delete a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`DeleteObject`](crate::operation::delete_object::builders::DeleteObjectFluentBuilder) operation.
    pub fn delete_object(
        &self,
    ) -> crate::operation::delete_object::builders::DeleteObjectFluentBuilder {
        crate::operation::delete_object::builders::DeleteObjectFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Check whether an object exists.
    ///
    /// Issues a single `HeadObject` request. A missing object resolves to `Ok(false)`, any
    /// other failure (access denied, network, ...) is returned as an error.
    ///
    /// Constructs a fluent builder for the
    /// [`ObjectExists`](crate::operation::object_exists::builders::ObjectExistsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn is_cached(client: &aws_s3_object_store::Client) -> Result<bool, aws_s3_object_store::error::Error> {
    ///     client
    ///         .object_exists()
    ///         .bucket("my-bucket")
    ///         .key("cache/deps.tar.gz")
    ///         .send()
    ///         .await
    /// }
    /// ```
    pub fn object_exists(
        &self,
    ) -> crate::operation::object_exists::builders::ObjectExistsFluentBuilder {
        crate::operation::object_exists::builders::ObjectExistsFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
