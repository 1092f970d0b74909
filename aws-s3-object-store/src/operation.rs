/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Types for uploading a local file as a single object
pub mod put_object;

/// Types for downloading a single object into a local file
pub mod get_object;

/// Types for deleting a single object
pub mod delete_object;

/// Types for checking whether a single object exists
pub mod object_exists;

/// Validate a required, non-empty string field of an operation input
pub(crate) fn required_field(
    field: &'static str,
    value: Option<String>,
) -> Result<String, BuildError> {
    match value {
        None => Err(BuildError::missing_field(field, "a value is required")),
        Some(value) if value.is_empty() => {
            Err(BuildError::invalid_field(field, "value must not be empty"))
        }
        Some(value) => Ok(value),
    }
}

/// The local path backing an object.
///
/// Falls back to the object key itself when no explicit path was given.
pub(crate) fn local_path(explicit: Option<&Path>, key: &str) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(key))
        .clean()
}

#[cfg(test)]
mod test {
    use super::{local_path, required_field};
    use std::path::{Path, PathBuf};

    #[test]
    fn test_required_field() {
        assert_eq!(
            "test-bucket",
            required_field("bucket", Some("test-bucket".to_owned())).unwrap()
        );
        assert!(required_field("bucket", None).is_err());
        assert!(required_field("bucket", Some(String::new())).is_err());
    }

    #[test]
    fn test_local_path() {
        assert_eq!(PathBuf::from("report.csv"), local_path(None, "report.csv"));
        assert_eq!(
            PathBuf::from("cache/deps.tar.gz"),
            local_path(None, "cache/./tmp/../deps.tar.gz")
        );
        assert_eq!(
            PathBuf::from("/tmp/out.bin"),
            local_path(Some(Path::new("/tmp/out.bin")), "report.csv")
        );
    }
}
