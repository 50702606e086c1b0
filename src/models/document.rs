use validator::Validate;

/// A raw uploaded file as handed to the ingest flow: declared name and MIME
/// type plus the untouched bytes. Extraction decides what the bytes mean.
#[derive(Clone, Debug, Validate)]
pub struct UploadedFile {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_file_name() {
        let file = UploadedFile::new("notes.txt", "text/plain", b"hello".to_vec());
        assert!(file.validate().is_ok());
    }

    #[test]
    fn rejects_empty_file_name() {
        let file = UploadedFile::new("", "text/plain", b"hello".to_vec());
        assert!(file.validate().is_err());
    }

    #[test]
    fn rejects_absurdly_long_file_name() {
        let file = UploadedFile::new("x".repeat(300), "text/plain", Vec::new());
        assert!(file.validate().is_err());
    }
}
