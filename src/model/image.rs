use std::io;
use std::path::Path;

/// An image selected for upload.
#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Reads an image from disk, guessing its content type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(file_name, bytes))
    }
}

// Bytes are elided so request logs stay readable.
impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(ImageFile::new("mug.JPG", vec![1]).content_type, "image/jpeg");
        assert_eq!(ImageFile::new("mug.png", vec![1]).content_type, "image/png");
        assert_eq!(
            ImageFile::new("mug", vec![1]).content_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_debug_hides_bytes() {
        let debug = format!("{:?}", ImageFile::new("a.png", vec![0; 4096]));
        assert!(debug.contains("len: 4096"));
    }

    #[tokio::test]
    async fn test_from_path_reads_bytes() {
        let path = std::env::temp_dir().join("product_forms_image_test.png");
        tokio::fs::write(&path, b"fake png").await.unwrap();

        let image = ImageFile::from_path(&path).await.unwrap();
        assert_eq!(image.file_name, "product_forms_image_test.png");
        assert_eq!(image.bytes, b"fake png");

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
