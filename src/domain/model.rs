use crate::utils::error::Result;
use std::fmt::Display;
use std::path::Path;

/// 上傳的圖片檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_from_extension(&file_name).map(str::to_string);
        Self {
            file_name,
            bytes,
            mime,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self::new(file_name, bytes))
    }
}

fn mime_from_extension(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())?
        .to_ascii_lowercase();

    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

/// Text fields sent next to the file in an image upload.
///
/// `is_catalog_image` is only ever `Some("true")`. A false or omitted flag
/// leaves the field out of the form entirely; the server treats absence, not
/// `"false"`, as "not a catalog image".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pub ceremic_id: String,
    pub is_catalog_image: Option<String>,
}

impl UploadForm {
    pub fn new(ceremic_id: impl Display, is_catalog_image: Option<bool>) -> Self {
        Self {
            ceremic_id: ceremic_id.to_string(),
            is_catalog_image: is_catalog_image
                .unwrap_or(false)
                .then(|| "true".to_string()),
        }
    }

    /// 按送出順序列出文字欄位
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("ceremicId", self.ceremic_id.as_str())];
        if let Some(flag) = &self.is_catalog_image {
            fields.push(("isCatalogImage", flag.as_str()));
        }
        fields
    }

    pub fn contains(&self, key: &str) -> bool {
        self.text_fields().iter().any(|(name, _)| *name == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadImage {
    pub file: ImageFile,
    pub form: UploadForm,
}

impl UploadImage {
    pub fn new(ceremic_id: impl Display, file: ImageFile, is_catalog_image: Option<bool>) -> Self {
        Self {
            file,
            form: UploadForm::new(ceremic_id, is_catalog_image),
        }
    }
}
