/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::{fs, iter};

/// Random alphanumeric payload of `size` bytes
pub fn rand_data(size: usize) -> Bytes {
    iter::repeat_with(fastrand::alphanumeric)
        .take(size)
        .map(|x| x as u8)
        .collect::<Vec<_>>()
        .into()
}

/// Create a temporary directory containing a single file at `relative_path` with `contents`.
///
/// Returns the directory guard (the directory is removed when it is dropped) together with
/// the absolute path of the file.
pub fn create_test_file(relative_path: &str, contents: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let full_path = temp_dir.path().join(relative_path);

    // Create the parent directories if they don't exist
    fs::create_dir_all(full_path.parent().unwrap()).unwrap();
    fs::write(&full_path, contents).unwrap();

    (temp_dir, full_path)
}

/// Names of all entries directly under `dir`, sorted
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// A bodiless HTTP response with the given status, as S3 sends for a failed `HEAD`
pub fn empty_response(status: u16) -> HttpResponse {
    HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::empty())
}

/// An S3 REST error response with the given status and error code
pub fn error_response(status: u16, code: &str) -> HttpResponse {
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>{code}</Code><Message>{code}</Message><RequestId>test-request-id</RequestId></Error>"#
    );
    HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::from(body))
}

/// Like `aws_smithy_mocks_experimental::mock_client!`, but with a stub HTTP client installed.
///
/// The mock interceptor only swaps in `then_http_response` responses after transmit, so the
/// client needs a connector that never reaches the network.
#[macro_export]
macro_rules! mock_client_with_stubbed_http_client {
    ($aws_crate: ident, $rule_mode: expr, $rules: expr) => {
        aws_smithy_mocks_experimental::mock_client!($aws_crate, $rule_mode, $rules, |conf| {
            conf.http_client(aws_smithy_http_client::test_util::infallible_client_fn(|_req| {
                $crate::empty_response(200).try_into_http1x().unwrap()
            }))
        })
    };
}
