/// Background image collection for the package.
///
/// Each distinct image path is read once and stored as
/// `ppt/media/imageN.<ext>`; slides referencing the same path share the part.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::super::format::ImageFormat;
use crate::ooxml::error::{OoxmlError, Result};

/// An image stored in the package.
#[derive(Debug, Clone)]
pub(crate) struct MediaItem {
    /// Partname, e.g. `/ppt/media/image1.png`
    pub partname: String,
    pub format: ImageFormat,
    pub data: Vec<u8>,
}

impl MediaItem {
    /// Relationship target as seen from a slide part.
    pub fn slide_target(&self) -> String {
        format!("..{}", self.partname.trim_start_matches("/ppt"))
    }
}

#[derive(Debug, Default)]
pub(crate) struct MediaMap {
    by_path: HashMap<PathBuf, usize>,
    items: Vec<MediaItem>,
}

impl MediaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored image for `path`, reading it on first use.
    pub fn intern(&mut self, path: &Path) -> Result<&MediaItem> {
        if let Some(&index) = self.by_path.get(path) {
            return Ok(&self.items[index]);
        }

        let data = std::fs::read(path).map_err(|source| OoxmlError::Media {
            path: path.to_path_buf(),
            source,
        })?;
        let format = ImageFormat::detect_from_bytes(&data).ok_or_else(|| {
            OoxmlError::InvalidFormat(format!(
                "{} is not a PNG, JPEG, GIF, BMP or TIFF image",
                path.display()
            ))
        })?;

        let index = self.items.len();
        let partname = format!("/ppt/media/image{}.{}", index + 1, format.extension());
        tracing::debug!(path = %path.display(), partname = %partname, "stored background image");
        self.items.push(MediaItem {
            partname,
            format,
            data,
        });
        self.by_path.insert(path.to_path_buf(), index);
        Ok(&self.items[index])
    }

    pub fn into_items(self) -> Vec<MediaItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_same_path_stored_once() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("a.png");
        let jpg = dir.path().join("b.jpg");
        std::fs::write(&png, PNG).unwrap();
        std::fs::write(&jpg, [0xFF, 0xD8, 0xFF, 0xE0, 0x00]).unwrap();

        let mut media = MediaMap::new();
        assert_eq!(media.intern(&png).unwrap().partname, "/ppt/media/image1.png");
        assert_eq!(media.intern(&jpg).unwrap().partname, "/ppt/media/image2.jpeg");
        let again = media.intern(&png).unwrap();
        assert_eq!(again.partname, "/ppt/media/image1.png");
        assert_eq!(again.slide_target(), "../media/image1.png");
        assert_eq!(media.len(), 2);
    }

    #[test]
    fn test_unreadable_and_unknown_images() {
        let dir = tempfile::tempdir().unwrap();
        let mut media = MediaMap::new();

        let missing = dir.path().join("missing.png");
        assert!(matches!(
            media.intern(&missing),
            Err(OoxmlError::Media { path, .. }) if path == missing
        ));

        let text = dir.path().join("notes.txt");
        std::fs::write(&text, "just some text").unwrap();
        assert!(matches!(
            media.intern(&text),
            Err(OoxmlError::InvalidFormat(_))
        ));
        assert_eq!(media.len(), 0);
    }
}
