use std::path::PathBuf;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::utils::multipart::UploadedFile;

pub const MEDIA_PREFIX: &str = "/media";

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDir {
    CompanyImages,
    UserImages,
}

impl ImageDir {
    const ALL: [ImageDir; 2] = [ImageDir::CompanyImages, ImageDir::UserImages];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageDir::CompanyImages => "company_images",
            ImageDir::UserImages => "user_images",
        }
    }
}

/// Stores uploaded logos and photos under the uploads root.
#[derive(Clone, Debug)]
pub struct UploadService {
    root: PathBuf,
    max_bytes: usize,
}

impl UploadService {
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Writes the image and returns the public path the record should keep.
    pub async fn save_image(&self, dir: ImageDir, file: &UploadedFile) -> Result<String> {
        let ext = check_image(file, self.max_bytes)?;
        let file_name = format!("{}.{}", Uuid::new_v4(), ext);

        let target_dir = self.root.join(dir.as_str());
        tokio::fs::create_dir_all(&target_dir).await?;
        tokio::fs::write(target_dir.join(&file_name), &file.data).await?;

        tracing::info!(dir = dir.as_str(), file = %file_name, bytes = file.data.len(), "image stored");
        Ok(format!("{}/{}/{}", MEDIA_PREFIX, dir.as_str(), file_name))
    }

    /// Removes a stored image by its public path. Missing files are fine;
    /// paths outside the image directories are left alone.
    pub async fn discard(&self, public_path: &str) {
        let Some(path) = self.local_path(public_path) else {
            tracing::debug!(path = public_path, "not a stored upload, leaving it");
            return;
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::info!(path = public_path, "image removed"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(path = public_path, error = %err, "could not remove image"),
        }
    }

    /// Cleans up after the record holding an image was written. A failed write
    /// drops the image just stored; a successful one drops the image it replaced.
    pub async fn settle<T>(
        &self,
        outcome: Result<T>,
        stored: Option<&str>,
        previous: Option<&str>,
    ) -> Result<T> {
        match outcome {
            Ok(value) => {
                if let (Some(stored), Some(previous)) = (stored, previous) {
                    if stored != previous {
                        self.discard(previous).await;
                    }
                }
                Ok(value)
            }
            Err(err) => {
                if let Some(stored) = stored {
                    self.discard(stored).await;
                }
                Err(err)
            }
        }
    }

    fn local_path(&self, public_path: &str) -> Option<PathBuf> {
        let relative = public_path.strip_prefix(MEDIA_PREFIX)?.strip_prefix('/')?;
        let (dir, file) = relative.split_once('/')?;
        let known_dir = ImageDir::ALL.iter().any(|d| d.as_str() == dir);
        let plain_file = !file.is_empty()
            && !file.starts_with('.')
            && !file.contains(['/', '\\']);
        (known_dir && plain_file).then(|| self.root.join(dir).join(file))
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

fn matches_signature(ext: &str, data: &[u8]) -> bool {
    match ext {
        "jpg" | "jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        "png" => data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        "webp" => data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP",
        _ => false,
    }
}

/// Returns the normalised extension of an acceptable image.
fn check_image(file: &UploadedFile, max_bytes: usize) -> Result<String> {
    if file.data.is_empty() {
        return Err(Error::BadRequest("Uploaded file is empty".into()));
    }
    if file.data.len() > max_bytes {
        return Err(Error::BadRequest(format!(
            "Uploaded file exceeds {} bytes",
            max_bytes
        )));
    }
    let ext = extension_of(&file.file_name).ok_or_else(|| {
        Error::BadRequest(format!(
            "Unsupported image type, expected one of: {}",
            ALLOWED_EXTENSIONS.join(", ")
        ))
    })?;
    if !matches_signature(&ext, &file.data) {
        return Err(Error::BadRequest("File content is not a valid image".into()));
    }
    Ok(ext)
}
