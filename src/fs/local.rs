//! Local disk backend
//!
//! Reference backend for the empty scheme and `file`, implemented over
//! `tokio::fs`. Outcome classification relies on the `io::ErrorKind` mapping
//! in `fs::code`; the one case the kernel reports asymmetrically (opening a
//! directory read-only succeeds on Linux) is checked explicitly so that
//! random-access opens of directories classify as FAILED_PRECONDITION.

use crate::fs::error::{FsError, FsResult};
use crate::fs::traits::{FileSystem, RandomAccessFile, WritableFile};
use std::io::SeekFrom;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;

/// Local filesystem backend
#[derive(Debug, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileSystem for LocalFileSystem {
    async fn new_writable_file(&self, path: &str) -> FsResult<Box<dyn WritableFile>> {
        let target = self.translate_name(path);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&target)
            .await?;
        Ok(Box::new(LocalWritableFile { file }))
    }

    async fn new_appendable_file(&self, path: &str) -> FsResult<Box<dyn WritableFile>> {
        let target = self.translate_name(path);
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&target)
            .await?;
        Ok(Box::new(LocalWritableFile { file }))
    }

    async fn new_random_access_file(&self, path: &str) -> FsResult<Box<dyn RandomAccessFile>> {
        let target = self.translate_name(path);
        let metadata = tokio::fs::metadata(&target).await?;
        if metadata.is_dir() {
            return Err(FsError::failed_precondition(format!(
                "{}: is a directory",
                target
            )));
        }
        let file = tokio::fs::File::open(&target).await?;
        Ok(Box::new(LocalRandomAccessFile {
            file: Mutex::new(file),
        }))
    }

    async fn create_directory(&self, path: &str) -> FsResult<()> {
        let target = self.translate_name(path);
        tokio::fs::create_dir(&target).await?;
        Ok(())
    }
}

struct LocalWritableFile {
    file: tokio::fs::File,
}

#[async_trait::async_trait]
impl WritableFile for LocalWritableFile {
    async fn append(&mut self, data: &[u8]) -> FsResult<()> {
        self.file.write_all(data).await?;
        Ok(())
    }

    async fn flush(&mut self) -> FsResult<()> {
        self.file.flush().await?;
        Ok(())
    }
}

struct LocalRandomAccessFile {
    // Positioned reads share one descriptor; seek+read must be atomic
    file: Mutex<tokio::fs::File>,
}

#[async_trait::async_trait]
impl RandomAccessFile for LocalRandomAccessFile {
    async fn read_at(&self, offset: u64, len: usize) -> FsResult<Vec<u8>> {
        let mut file = self.file.lock().await;
        file.seek(SeekFrom::Start(offset)).await?;

        let mut buffer = vec![0u8; len];
        let mut filled = 0;
        while filled < len {
            let n = file.read(&mut buffer[filled..]).await?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        buffer.truncate(filled);
        Ok(buffer)
    }
}
