/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::AddressingStyle;

pub(crate) mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    addressing_style: AddressingStyle,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the addressing style used for every request
    pub fn addressing_style(&self) -> &AddressingStyle {
        &self.addressing_style
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    addressing_style: AddressingStyle,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the addressing style to use for bucket names.
    ///
    /// The style is applied to every operation, overriding whatever the given
    /// [`client`](Self::client) was configured with.
    /// Default is [AddressingStyle::VirtualHosted].
    pub fn addressing_style(mut self, style: AddressingStyle) -> Self {
        self.addressing_style = style;
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// # Panics
    ///
    /// Panics if no S3 [`client`](Self::client) was set.
    pub fn build(self) -> Config {
        let client = self.client.expect("client set");
        Config {
            client: with_addressing_style(&client, self.addressing_style),
            addressing_style: self.addressing_style,
        }
    }
}

/// Rebuild `client` so that it addresses buckets using `style`.
///
/// Everything else (credentials, region, endpoint, interceptors, http client) carries over.
fn with_addressing_style(client: &aws_sdk_s3::Client, style: AddressingStyle) -> aws_sdk_s3::Client {
    let conf = client
        .config()
        .to_builder()
        .force_path_style(style.force_path_style())
        .build();
    aws_sdk_s3::Client::from_conf(conf)
}
