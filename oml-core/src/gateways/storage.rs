/// Stores an image blob and returns a stable, retrievable URL.
/// Only the URL string is ever persisted by the core.
pub trait ObjectStorageGateway {
    fn store_image(&self, bytes: &[u8], content_type: &str) -> anyhow::Result<String>;
}
