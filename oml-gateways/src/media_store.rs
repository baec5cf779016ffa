use std::{fs, path::PathBuf};

use anyhow::{anyhow, Result};

use oml_core::gateways::storage::ObjectStorageGateway;

/// Stores uploaded images in a local directory that is served
/// as static files under the given public base path.
pub struct FsMediaStore {
    media_dir: PathBuf,
    public_base_path: String,
}

impl FsMediaStore {
    pub fn new(media_dir: PathBuf, public_base_path: String) -> Result<Self> {
        fs::create_dir_all(&media_dir)?;
        Ok(Self {
            media_dir,
            public_base_path,
        })
    }
}

fn file_extension(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

impl ObjectStorageGateway for FsMediaStore {
    fn store_image(&self, bytes: &[u8], content_type: &str) -> Result<String> {
        let ext = file_extension(content_type)
            .ok_or_else(|| anyhow!("Unsupported image content type: {content_type}"))?;
        let file_name = format!("{}.{ext}", uuid::Uuid::new_v4().as_simple());
        let file_path = self.media_dir.join(&file_name);
        fs::write(&file_path, bytes)?;
        log::debug!("Stored image at {}", file_path.display());
        Ok(format!("{}/{file_name}", self.public_base_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_media_dir() -> PathBuf {
        std::env::temp_dir().join(format!("media-{}", uuid::Uuid::new_v4().as_simple()))
    }

    #[test]
    fn store_image_writes_file_and_returns_public_url() {
        let dir = temp_media_dir();
        let store = FsMediaStore::new(dir.clone(), "/media".to_string()).unwrap();
        let url = store.store_image(b"not really a png", "image/png").unwrap();
        assert!(url.starts_with("/media/"));
        assert!(url.ends_with(".png"));
        let file_name = url.strip_prefix("/media/").unwrap();
        let stored = fs::read(dir.join(file_name)).unwrap();
        assert_eq!(b"not really a png".as_slice(), stored);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn reject_unsupported_content_type() {
        let dir = temp_media_dir();
        let store = FsMediaStore::new(dir.clone(), "/media".to_string()).unwrap();
        assert!(store.store_image(b"<svg/>", "image/svg+xml").is_err());
        fs::remove_dir_all(dir).unwrap();
    }
}
