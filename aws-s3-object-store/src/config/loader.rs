/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::Region;
use aws_types::SdkConfig;

use crate::config::Builder;
use crate::{types::AddressingStyle, Config};

/// Load object store [`Config`] from the environment.
///
/// Credentials and region are resolved once, through the default provider chain
/// (environment variables, shared profile files, container/instance metadata), when
/// [`load`](Self::load) is called.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    region: Option<String>,
    endpoint_url: Option<String>,
}

impl ConfigLoader {
    /// Set the addressing style to use for bucket names.
    ///
    /// Default is [AddressingStyle::VirtualHosted].
    pub fn addressing_style(mut self, style: AddressingStyle) -> Self {
        self.builder = self.builder.addressing_style(style);
        self
    }

    /// Override the region resolved from the environment.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Override the endpoint requests are sent to, e.g. for an S3 compatible store.
    ///
    /// Such stores usually also need [`AddressingStyle::Path`].
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        let mut loader = aws_config::from_env();
        if let Some(region) = self.region {
            loader = loader.region(Region::new(region));
        }
        if let Some(endpoint_url) = self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let shared_config = loader.load().await;
        tracing::debug!(
            region = ?shared_config.region(),
            endpoint_url = ?shared_config.endpoint_url(),
            "loaded shared config"
        );

        self.builder.client(s3_client(&shared_config)).build()
    }
}

fn s3_client(shared_config: &SdkConfig) -> aws_sdk_s3::Client {
    aws_sdk_s3::Client::new(shared_config)
}
