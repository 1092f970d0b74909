/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::ffi::OsStr;
use std::iter;
use std::path::{Path, PathBuf};

use aws_sdk_s3::primitives::ByteStream;
use aws_smithy_types::error::display::DisplayErrorContext;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{self, ErrorKind};

/// Stream `body` into `destination`, returning the number of bytes written.
///
/// The body is written to a temporary file in the destination's directory which replaces
/// `destination` only after the whole body was received (and matches `expected_len` when
/// the service declared one). On failure, or when the returned future is dropped before
/// completion, the temporary file is removed and `destination` is left untouched.
pub(super) async fn stream_to_file(
    body: ByteStream,
    destination: &Path,
    expected_len: Option<u64>,
) -> Result<u64, error::Error> {
    let mut sink = DestinationFile::create(destination).await?;

    let written = sink.copy_from(body).await?;
    if let Some(expected) = expected_len {
        if expected != written {
            return Err(error::Error::new(
                ErrorKind::BodyStreamError,
                format!("object body ended after {written} of {expected} bytes"),
            ));
        }
    }

    sink.persist().await?;
    Ok(written)
}

/// Temporary download file, removed on drop unless it was renamed over the destination
#[derive(Debug)]
struct DestinationFile {
    destination: PathBuf,
    temp_path: PathBuf,
    file: Option<fs::File>,
    persisted: bool,
}

impl DestinationFile {
    async fn create(destination: &Path) -> Result<Self, error::Error> {
        let file_name = destination.file_name().ok_or_else(|| {
            error::invalid_input(format!(
                "download destination {} does not name a file",
                destination.display()
            ))
        })?;

        let parent = destination.parent().unwrap_or_else(|| Path::new(""));
        fs::create_dir_all(parent).await?;

        let temp_path = parent.join(temp_file_name(file_name));
        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .await?;

        tracing::trace!(temp_path = %temp_path.display(), "created temporary download file");

        Ok(Self {
            destination: destination.to_path_buf(),
            temp_path,
            file: Some(file),
            persisted: false,
        })
    }

    async fn copy_from(&mut self, mut body: ByteStream) -> Result<u64, error::Error> {
        let file = self.file()?;
        let mut written = 0;
        while let Some(chunk) = body.try_next().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        Ok(written)
    }

    async fn persist(&mut self) -> Result<(), error::Error> {
        let file = self.file()?;
        file.flush().await?;
        file.sync_all().await?;
        self.file.take();

        fs::rename(&self.temp_path, &self.destination).await?;
        self.persisted = true;
        Ok(())
    }

    fn file(&mut self) -> Result<&mut fs::File, error::Error> {
        self.file.as_mut().ok_or_else(|| {
            error::Error::new(
                ErrorKind::IOError,
                format!("{} is already closed", self.temp_path.display()),
            )
        })
    }
}

impl Drop for DestinationFile {
    // also runs when the download future is cancelled mid-body
    fn drop(&mut self) {
        if self.persisted {
            return;
        }
        self.file.take();
        match std::fs::remove_file(&self.temp_path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(
                temp_path = %self.temp_path.display(),
                error = %DisplayErrorContext(&err),
                "failed to remove temporary download file"
            ),
        }
    }
}

fn temp_file_name(file_name: &OsStr) -> String {
    let suffix: String = iter::repeat_with(fastrand::alphanumeric).take(8).collect();
    format!(".{}.{suffix}.part", file_name.to_string_lossy())
}
