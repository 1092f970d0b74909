/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::operation::required_field;

/// Input type for checking whether a single object exists
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ObjectExistsInput {
    /// The bucket name containing the object.
    pub bucket: String,

    /// The key of the object.
    pub key: String,
}

impl ObjectExistsInput {
    /// Creates a new builder-style object to manufacture [`ObjectExistsInput`].
    pub fn builder() -> ObjectExistsInputBuilder {
        ObjectExistsInputBuilder::default()
    }

    /// The bucket name containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the object.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A builder for [`ObjectExistsInput`].
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct ObjectExistsInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl ObjectExistsInputBuilder {
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

    /// Consumes the builder and constructs an [`ObjectExistsInput`]
    pub fn build(
        self,
    ) -> Result<ObjectExistsInput, ::aws_smithy_types::error::operation::BuildError> {
        Ok(ObjectExistsInput {
            bucket: required_field("bucket", self.bucket)?,
            key: required_field("key", self.key)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::ObjectExistsInput;

    #[test]
    fn test_set_and_get_fields() {
        let builder = ObjectExistsInput::builder()
            .set_bucket(Some("test-bucket".to_owned()))
            .set_key(Some("test-key".to_owned()));
        assert_eq!(&Some("test-bucket".to_owned()), builder.get_bucket());
        assert_eq!(&Some("test-key".to_owned()), builder.get_key());

        let input = builder.build().unwrap();
        assert_eq!("test-bucket", input.bucket());
        assert_eq!("test-key", input.key());

        assert!(ObjectExistsInput::builder()
            .bucket("test-bucket")
            .set_key(None)
            .build()
            .is_err());
    }
}
