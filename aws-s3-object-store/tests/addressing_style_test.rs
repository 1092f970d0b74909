/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_object_store::types::AddressingStyle;
use aws_sdk_s3::config::Region;
use aws_smithy_http_client::test_util::{capture_request, CaptureRequestReceiver};
use test_common::create_test_file;

fn test_client(style: AddressingStyle) -> (aws_s3_object_store::Client, CaptureRequestReceiver) {
    let (http_client, rx) = capture_request(None);
    let s3_client = aws_sdk_s3::Client::from_conf(
        aws_sdk_s3::config::Config::builder()
            .http_client(http_client)
            .region(Region::from_static("us-west-2"))
            .with_test_defaults()
            .build(),
    );

    let config = aws_s3_object_store::Config::builder()
        .client(s3_client)
        .addressing_style(style)
        .build();
    (aws_s3_object_store::Client::new(config), rx)
}

/// Send each of the four operations through a fresh capturing client and return the
/// request URIs, in operation order.
async fn request_uris(style: AddressingStyle) -> Vec<String> {
    let (dir, source) = create_test_file("test-key", b"hello");
    let mut uris = Vec::new();

    let (client, rx) = test_client(style);
    client
        .put_object()
        .bucket("test-bucket")
        .key("test-key")
        .source(&source)
        .send()
        .await
        .unwrap();
    uris.push(rx.expect_request().uri().to_owned());

    let (client, rx) = test_client(style);
    client
        .get_object()
        .bucket("test-bucket")
        .key("test-key")
        .destination(dir.path().join("downloaded"))
        .send()
        .await
        .unwrap();
    uris.push(rx.expect_request().uri().to_owned());

    let (client, rx) = test_client(style);
    client
        .delete_object()
        .bucket("test-bucket")
        .key("test-key")
        .send()
        .await
        .unwrap();
    uris.push(rx.expect_request().uri().to_owned());

    let (client, rx) = test_client(style);
    assert!(client
        .object_exists()
        .bucket("test-bucket")
        .key("test-key")
        .send()
        .await
        .unwrap());
    uris.push(rx.expect_request().uri().to_owned());

    uris
}

#[tokio::test]
async fn test_path_style_applies_to_every_operation() {
    let uris = request_uris(AddressingStyle::Path).await;
    assert_eq!(4, uris.len());
    for uri in uris {
        assert!(
            uri.starts_with("https://s3.us-west-2.amazonaws.com/test-bucket/test-key"),
            "unexpected uri: {uri}"
        );
    }
}

#[tokio::test]
async fn test_virtual_hosted_style_is_the_default() {
    let uris = request_uris(AddressingStyle::default()).await;
    assert_eq!(4, uris.len());
    for uri in uris {
        assert!(
            uri.starts_with("https://test-bucket.s3.us-west-2.amazonaws.com/test-key"),
            "unexpected uri: {uri}"
        );
    }
}
