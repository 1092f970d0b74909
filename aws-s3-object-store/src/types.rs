/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// How bucket names are addressed in request URLs.
///
/// The selected style applies to every operation issued by a [`Client`](crate::Client).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum AddressingStyle {
    /// Bucket is part of the host name, e.g. `https://my-bucket.s3.us-west-2.amazonaws.com/key`
    #[default]
    VirtualHosted,

    /// Bucket is the first path segment, e.g. `https://s3.us-west-2.amazonaws.com/my-bucket/key`
    ///
    /// Typically required by S3 compatible stores running behind a non-standard endpoint.
    Path,
}

impl AddressingStyle {
    /// Whether this style forces path style addressing on the S3 client
    pub(crate) fn force_path_style(&self) -> bool {
        matches!(self, AddressingStyle::Path)
    }
}
