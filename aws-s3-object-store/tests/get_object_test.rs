/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use aws_s3_object_store::error::ErrorKind;
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::primitives::ByteStream;
use test_common::mock_client_with_stubbed_http_client;
use aws_smithy_mocks_experimental::{mock, Rule, RuleMode};
use bytes::Bytes;
use http_body_1x::Frame;
use test_common::{dir_entries, error_response, rand_data};

fn test_client(rules: &[&Rule]) -> aws_s3_object_store::Client {
    let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::Sequential, rules);
    let config = aws_s3_object_store::Config::builder()
        .client(s3_client)
        .build();
    aws_s3_object_store::Client::new(config)
}

fn get_object_rule(data: Bytes) -> Rule {
    mock!(aws_sdk_s3::Client::get_object)
        .match_requests(|r| r.bucket() == Some("test-bucket"))
        .then_output(move || {
            GetObjectOutput::builder()
                .body(ByteStream::from(data.clone()))
                .content_length(data.len() as i64)
                .e_tag("test-etag")
                .build()
        })
}

fn no_such_key_rule() -> Rule {
    mock!(aws_sdk_s3::Client::get_object).then_http_response(|| error_response(404, "NoSuchKey"))
}

/// Body that yields one chunk and then fails, as a dropped connection would
#[derive(Debug, Default)]
struct FailingBody {
    sent: bool,
}

impl http_body_1x::Body for FailingBody {
    type Data = Bytes;
    type Error = io::Error;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        if self.sent {
            return Poll::Ready(Some(Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            ))));
        }

        self.sent = true;
        Poll::Ready(Some(Ok(Frame::data(Bytes::from_static(b"partial")))))
    }
}

/// Body that yields one chunk and then never makes progress again
#[derive(Debug, Default)]
struct StalledBody {
    sent: bool,
}

impl http_body_1x::Body for StalledBody {
    type Data = Bytes;
    type Error = io::Error;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        if self.sent {
            return Poll::Pending;
        }

        self.sent = true;
        Poll::Ready(Some(Ok(Frame::data(Bytes::from_static(b"partial")))))
    }
}

#[tokio::test]
async fn test_get_object_writes_destination() {
    let data = rand_data(4096);
    let get_object = get_object_rule(data.clone());
    let client = test_client(&[&get_object]);
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("nested/dir/object.bin");

    let output = client
        .get_object()
        .bucket("test-bucket")
        .key("object.bin")
        .destination(&dest)
        .send()
        .await
        .unwrap();

    assert_eq!(4096, output.bytes_transferred());
    assert_eq!(Some(4096), output.content_length());
    assert_eq!(Some("test-etag"), output.e_tag());
    assert_eq!(dest.as_path(), output.destination());
    assert_eq!(data.as_ref(), std::fs::read(&dest).unwrap().as_slice());
    assert_eq!(vec!["object.bin"], dir_entries(&dir.path().join("nested/dir")));
}

/// The object key doubles as the local path when no explicit destination is given
#[tokio::test]
async fn test_get_object_writes_key_as_path() {
    let data = rand_data(100);
    let get_object = get_object_rule(data.clone());
    let client = test_client(&[&get_object]);
    let dir = tempfile::tempdir().unwrap();
    let key = dir.path().join("report.csv").to_str().unwrap().to_owned();

    client
        .get_object()
        .bucket("test-bucket")
        .key(&key)
        .send()
        .await
        .unwrap();

    assert_eq!(data.as_ref(), std::fs::read(&key).unwrap().as_slice());
}

/// Existing destination is replaced once the download completes
#[tokio::test]
async fn test_get_object_overwrites_existing_destination() {
    let data = rand_data(10);
    let get_object = get_object_rule(data.clone());
    let client = test_client(&[&get_object]);
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("report.csv");
    std::fs::write(&dest, b"a much longer stale file than the object").unwrap();

    client
        .get_object()
        .bucket("test-bucket")
        .key("report.csv")
        .destination(&dest)
        .send()
        .await
        .unwrap();

    assert_eq!(data.as_ref(), std::fs::read(&dest).unwrap().as_slice());
}

#[tokio::test]
async fn test_get_object_missing_does_not_create_destination() {
    let get_object = no_such_key_rule();
    let client = test_client(&[&get_object]);
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("report.csv");

    let err = client
        .get_object()
        .bucket("test-bucket")
        .key("report.csv")
        .destination(&dest)
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::NotFound, err.kind());
    assert!(!dest.exists());
    assert!(dir_entries(dir.path()).is_empty());
}

#[tokio::test]
async fn test_get_object_missing_keeps_existing_destination() {
    let get_object = no_such_key_rule();
    let client = test_client(&[&get_object]);
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("report.csv");
    std::fs::write(&dest, b"previous contents").unwrap();

    let err = client
        .get_object()
        .bucket("test-bucket")
        .key("report.csv")
        .destination(&dest)
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::NotFound, err.kind());
    assert_eq!(b"previous contents".to_vec(), std::fs::read(&dest).unwrap());
}

/// A body failing mid-stream must not leave a partial file behind
#[tokio::test]
async fn test_get_object_body_failure_leaves_no_partial_file() {
    let get_object = mock!(aws_sdk_s3::Client::get_object).then_output(|| {
        GetObjectOutput::builder()
            .body(ByteStream::from_body_1_x(FailingBody::default()))
            .content_length(64)
            .build()
    });
    let client = test_client(&[&get_object]);
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("report.csv");
    std::fs::write(&dest, b"previous contents").unwrap();

    let err = client
        .get_object()
        .bucket("test-bucket")
        .key("report.csv")
        .destination(&dest)
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::BodyStreamError, err.kind());
    assert_eq!(b"previous contents".to_vec(), std::fs::read(&dest).unwrap());
    assert_eq!(vec!["report.csv"], dir_entries(dir.path()));
}

/// Abandoning a download part way through the body must not leave a partial file behind
#[tokio::test]
async fn test_get_object_cancelled_leaves_no_partial_file() {
    let get_object = mock!(aws_sdk_s3::Client::get_object).then_output(|| {
        GetObjectOutput::builder()
            .body(ByteStream::from_body_1_x(StalledBody::default()))
            .content_length(64)
            .build()
    });
    let client = test_client(&[&get_object]);
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("report.csv");

    let download = client
        .get_object()
        .bucket("test-bucket")
        .key("report.csv")
        .destination(&dest)
        .send();
    // either the timeout fires or the SDK gives up on the stalled body first
    let _ = tokio::time::timeout(Duration::from_millis(200), download).await;

    assert!(!dest.exists());
    assert!(dir_entries(dir.path()).is_empty());
}
