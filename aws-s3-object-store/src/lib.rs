/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A thin helper layer over the Amazon S3 [service API] for whole-object transfers.
//!
//! Every operation maps one local intent onto exactly one S3 request:
//!
//! * [`put_object`](crate::Client::put_object) - upload a local file as an object (`PutObject`)
//! * [`get_object`](crate::Client::get_object) - download an object into a local file (`GetObject`)
//! * [`delete_object`](crate::Client::delete_object) - delete an object (`DeleteObject`)
//! * [`object_exists`](crate::Client::object_exists) - check whether an object exists (`HeadObject`)
//!
//! There is no multipart upload, no ranged download and no retry policy beyond what the
//! underlying SDK client is configured with.
//!
//! [service API]: https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations_Amazon_Simple_Storage_Service.html
//!
//! # Examples
//!
//! Load the default configuration:
//!
//! ```no_run
//! # async fn example() {
//! let config = aws_s3_object_store::from_env().load().await;
//! let client = aws_s3_object_store::Client::new(config);
//! # }
//! ```
//!
//! Upload a file, then check that it landed:
//!
//! ```no_run
//! use aws_sdk_s3::types::StorageClass;
//!
//! # async fn example() -> Result<(), aws_s3_object_store::error::Error> {
//! let config = aws_s3_object_store::from_env().load().await;
//! let client = aws_s3_object_store::Client::new(config);
//!
//! client
//!     .put_object()
//!     .bucket("my-bucket")
//!     .key("report.csv")
//!     .storage_class(StorageClass::from("STANDARD"))
//!     .send()
//!     .await?;
//!
//! let exists = client
//!     .object_exists()
//!     .bucket("my-bucket")
//!     .key("report.csv")
//!     .send()
//!     .await?;
//! assert!(exists);
//! # Ok(())
//! # }
//! ```

/// Error types emitted by `aws-s3-object-store`
pub mod error;

/// Common types used by `aws-s3-object-store`
pub mod types;

/// Object store client
pub mod client;

/// Object store operations
pub mod operation;

/// Object store configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
