//! On-disk store for uploaded meal images.
//!
//! Images live in `{public_dir}/images/{slug}.{ext}` and are referenced from
//! the database by their public path `/images/{slug}.{ext}`.

use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::StorageError;

/// URL prefix under which stored images are served.
pub const PUBLIC_IMAGE_PREFIX: &str = "/images/";

/// Name of the image directory inside the public directory.
const IMAGES_DIR: &str = "images";

/// Writes and removes meal images below a public directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    images_dir: PathBuf,
}

impl ImageStore {
    /// Create a store rooted at `{public_dir}/images`.
    ///
    /// The directory is created lazily on the first [`save`](Self::save).
    pub fn new(public_dir: impl AsRef<Path>) -> Self {
        Self {
            images_dir: public_dir.as_ref().join(IMAGES_DIR),
        }
    }

    /// Directory the images are written to (served at [`PUBLIC_IMAGE_PREFIX`]).
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Write `bytes` to `{slug}.{extension}` and return its public path.
    ///
    /// The file is opened with create-new semantics, so an existing image is
    /// never overwritten. The handle is closed on every exit path; if the
    /// write or sync fails the partial file is removed.
    pub async fn save(
        &self,
        slug: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        let file_name = format!("{slug}.{extension}");
        let path = self.images_dir.join(&file_name);

        fs::create_dir_all(&self.images_dir)
            .await
            .map_err(|source| write_error(&self.images_dir, source))?;

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists {
                    path: path.display().to_string(),
                });
            }
            Err(source) => return Err(write_error(&path, source)),
        };

        let written = async {
            file.write_all(bytes).await?;
            file.sync_all().await
        }
        .await;
        drop(file);

        if let Err(source) = written {
            if let Err(e) = fs::remove_file(&path).await {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial image");
            }
            return Err(write_error(&path, source));
        }

        tracing::debug!(path = %path.display(), size = bytes.len(), "Image stored");
        Ok(format!("{PUBLIC_IMAGE_PREFIX}{file_name}"))
    }

    /// Remove an image previously returned by [`save`](Self::save).
    ///
    /// A missing file is not an error.
    pub async fn remove(&self, public_path: &str) -> Result<(), StorageError> {
        let path = self.resolve(public_path);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(write_error(&path, source)),
        }
    }

    /// Map a public path such as `/images/pie.png` to its file on disk.
    ///
    /// Only the final path component is used, so the result always stays
    /// inside the images directory.
    pub fn resolve(&self, public_path: &str) -> PathBuf {
        let file_name = public_path.rsplit('/').next().unwrap_or(public_path);
        self.images_dir.join(file_name)
    }
}

fn write_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Write {
        path: path.display().to_string(),
        source,
    }
}
