/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for deleting a single object
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DeleteObjectOutput {
    /// Whether the deleted version was (or the deletion created) a delete marker.
    pub delete_marker: bool,

    /// Version ID of the delete marker created as a result of the request, if any.
    pub version_id: Option<String>,
}

impl DeleteObjectOutput {
    /// Creates a new builder-style object to manufacture [`DeleteObjectOutput`](crate::operation::delete_object::DeleteObjectOutput).
    pub fn builder() -> DeleteObjectOutputBuilder {
        DeleteObjectOutputBuilder::default()
    }

    /// Whether the deleted version was (or the deletion created) a delete marker.
    pub fn delete_marker(&self) -> bool {
        self.delete_marker
    }

    /// Version ID of the delete marker created as a result of the request, if any.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}

/// A builder for [`DeleteObjectOutput`](crate::operation::delete_object::DeleteObjectOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct DeleteObjectOutputBuilder {
    pub(crate) delete_marker: bool,
    pub(crate) version_id: Option<String>,
}

impl DeleteObjectOutputBuilder {
    /// Whether the deleted version was (or the deletion created) a delete marker.
    pub fn delete_marker(mut self, input: bool) -> Self {
        self.delete_marker = input;
        self
    }

    /// Version ID of the delete marker created as a result of the request, if any.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.version_id = Some(input.into());
        self
    }

    /// Version ID of the delete marker created as a result of the request, if any.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// Consumes the builder and constructs a [`DeleteObjectOutput`]
    pub fn build(self) -> DeleteObjectOutput {
        DeleteObjectOutput {
            delete_marker: self.delete_marker,
            version_id: self.version_id,
        }
    }
}
