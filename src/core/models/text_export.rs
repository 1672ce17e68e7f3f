use crate::global_constants;

/// A plain-text file ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextExport {
    pub file_name: String,
    pub contents: String,
}

impl TextExport {
    pub fn from_text(text: Option<&str>) -> Option<Self> {
        let text = text?;
        if text.is_empty() {
            return None;
        }

        Some(Self {
            file_name: global_constants::EXPORT_FILE_NAME.to_string(),
            contents: text.to_string(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_without_text_is_none() {
        assert!(TextExport::from_text(None).is_none());
    }

    #[test]
    fn test_from_text_with_empty_text_is_none() {
        assert!(TextExport::from_text(Some("")).is_none());
    }

    #[test]
    fn test_from_text_uses_fixed_file_name_and_exact_contents() {
        let export = TextExport::from_text(Some("Hello\nWorld")).unwrap();

        assert_eq!(export.file_name, "extracted-text.txt");
        assert_eq!(export.as_bytes(), b"Hello\nWorld");
    }

    #[test]
    fn test_from_text_keeps_whitespace_only_text() {
        let export = TextExport::from_text(Some("\n  \n")).unwrap();
        assert_eq!(export.contents, "\n  \n");
    }
}
