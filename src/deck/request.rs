//! Request documents.
//!
//! A request is the explicit, declarative replacement for an input form: style
//! settings, optional font and background files, and the songs to lay out.
//! It is normally read from YAML:
//!
//! ```yaml
//! style:
//!   lyric_color_secondary: "#FFFF00"
//!   text_vertical_offset: 1.5
//! fonts:
//!   primary: fonts/NanumGothic.ttf
//! backgrounds:
//!   lyric: images/dark.jpg
//! songs:
//!   - title: 주 하나님 지으신 모든 세계
//!     subtitle: How Great Thou Art
//!     lyrics: |-
//!       주 하나님 지으신 모든 세계
//!       내 마음 속에 그리어 볼 때
//!     translation: |-
//!       O Lord my God, when I in awesome wonder
//!       Consider all the worlds Thy hands have made
//!   - title: Amazing Grace
//!     blocks:
//!       Verse: "Amazing grace\nhow sweet the sound"
//!       Chorus: "My chains are gone"
//!     sequence: Verse, Chorus, Verse
//!     highlight: Chorus
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::slide::Background;
use super::song::{BlockSong, FlatSong, Song};
use super::style::{self, Style, StyleInput};
use crate::common::{Error, Result};

/// A complete deck request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckRequest {
    pub style: StyleInput,
    pub fonts: FontFiles,
    pub backgrounds: BackgroundImages,
    pub songs: Vec<SongEntry>,
    /// Directory that relative file paths are resolved against.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Optional font files whose display names become the deck typefaces.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontFiles {
    /// Font for the primary (local-script) track of titles and lyrics.
    pub primary: Option<PathBuf>,
    /// Font for the secondary (translation) track.
    pub secondary: Option<PathBuf>,
}

/// Optional background images; each overrides the matching solid color.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundImages {
    pub title: Option<PathBuf>,
    pub lyric: Option<PathBuf>,
}

/// Font family names read from the request's font files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontNames {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

/// Block play order, written either as a list or as a comma/space separated string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SequenceSpec {
    List(Vec<String>),
    Text(String),
}

impl SequenceSpec {
    pub fn names(&self) -> Vec<String> {
        match self {
            SequenceSpec::List(names) => names
                .iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
            SequenceSpec::Text(text) => text
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// One song as written in the request.
///
/// Either `lyrics` (with an optional parallel `translation`) or
/// `blocks`/`sequence`/`highlight` may be used, not both.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SongEntry {
    pub title: String,
    pub subtitle: Option<String>,
    pub lyrics: Option<String>,
    pub translation: Option<String>,
    pub blocks: Option<HashMap<String, String>>,
    pub sequence: Option<SequenceSpec>,
    pub highlight: Option<String>,
}

/// Everything the assembler needs, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub style: Style,
    pub songs: Vec<Song>,
    pub title_background: Background,
    pub lyric_background: Background,
}

/// Split lyric text into slide lines.
///
/// Lines are separated by `\n` (a trailing `\r` is dropped) and blank lines are
/// kept, so `K` lines always give `K` slides. Empty text has no lines.
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

impl SongEntry {
    fn is_block_form(&self) -> bool {
        self.blocks.is_some() || self.sequence.is_some()
    }

    /// Convert into a [`Song`]. `index` is the 1-based position used in errors.
    pub fn to_song(&self, index: usize) -> Result<Song> {
        let invalid = |reason: &str| Error::InvalidSong {
            index,
            title: self.title.clone(),
            reason: reason.to_string(),
        };

        if self.is_block_form() {
            if self.lyrics.is_some() || self.translation.is_some() {
                return Err(invalid(
                    "use either lyrics/translation or blocks/sequence, not both",
                ));
            }
            let mut blocks = HashMap::new();
            for (name, text) in self.blocks.iter().flatten() {
                let name = name.trim();
                if blocks.insert(name.to_string(), split_lines(text)).is_some() {
                    return Err(invalid(&format!("block name {name:?} is defined twice")));
                }
            }
            Ok(Song::Block(BlockSong {
                title_primary: self.title.clone(),
                title_secondary: self.subtitle.clone(),
                blocks,
                sequence: self.sequence.as_ref().map(SequenceSpec::names).unwrap_or_default(),
                highlight_block: self.highlight.as_ref().map(|h| h.trim().to_string()),
            }))
        } else {
            if self.highlight.is_some() {
                return Err(invalid("highlight needs blocks and a sequence"));
            }
            Ok(Song::Flat(FlatSong {
                title_primary: self.title.clone(),
                title_secondary: self.subtitle.clone(),
                lines_primary: split_lines(self.lyrics.as_deref().unwrap_or_default()),
                lines_secondary: split_lines(self.translation.as_deref().unwrap_or_default()),
            }))
        }
    }
}

impl DeckRequest {
    /// Parse a YAML request. Relative paths resolve against the working directory.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_saphyr::from_str(yaml)?)
    }

    /// Read and parse a YAML request file. Relative paths resolve against the
    /// file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?;
        let mut request = Self::from_yaml_str(&yaml)?;
        request.base_dir = path.parent().map(Path::to_path_buf);
        tracing::info!(path = %path.display(), songs = request.songs.len(), "loaded request");
        Ok(request)
    }

    /// Resolve `path` against [`DeckRequest::base_dir`].
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Read the configured font files and extract their display names.
    ///
    /// Missing files are an error; unreadable font data only logs a warning and
    /// leaves the name unset.
    pub fn read_font_names(&self) -> Result<FontNames> {
        let read = |file: &Option<PathBuf>| -> Result<Option<String>> {
            let Some(file) = file else {
                return Ok(None);
            };
            let path = self.resolve_path(file);
            let data = std::fs::read(&path).map_err(|source| Error::File {
                path: path.clone(),
                source,
            })?;
            Ok(crate::fonts::font_display_name(&data))
        };

        Ok(FontNames {
            primary: read(&self.fonts.primary)?,
            secondary: read(&self.fonts.secondary)?,
        })
    }

    /// Style settings with font names filled in from `fonts` where the style
    /// section does not name a family itself.
    pub fn style_input(&self, fonts: &FontNames) -> StyleInput {
        let mut input = self.style.clone();
        for (slot, name) in [
            (&mut input.title_font_primary, &fonts.primary),
            (&mut input.lyric_font_primary, &fonts.primary),
            (&mut input.title_font_secondary, &fonts.secondary),
            (&mut input.lyric_font_secondary, &fonts.secondary),
        ] {
            if slot.is_none() {
                slot.clone_from(name);
            }
        }
        input
    }

    /// Convert every song entry, failing on the first malformed one.
    pub fn songs(&self) -> Result<Vec<Song>> {
        self.songs
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.to_song(i + 1))
            .collect()
    }

    /// Validate the whole request. Nothing is built if any part is invalid.
    pub fn resolve(&self, fonts: &FontNames) -> Result<ResolvedRequest> {
        let style = style::resolve(&self.style_input(fonts))?;
        let songs = self.songs()?;

        let title_image = self.backgrounds.title.as_deref().map(|p| self.resolve_path(p));
        let lyric_image = self.backgrounds.lyric.as_deref().map(|p| self.resolve_path(p));

        Ok(ResolvedRequest {
            title_background: Background::image_or_solid(
                title_image.as_deref(),
                style.title_background,
            ),
            lyric_background: Background::image_or_solid(
                lyric_image.as_deref(),
                style.lyric_background,
            ),
            style,
            songs,
        })
    }
}
