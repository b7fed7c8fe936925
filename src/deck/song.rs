//! Song records consumed by the deck assembler.
//!
//! A song is either a flat list of lyric lines with an optional parallel
//! translation, or a set of named blocks (verse, chorus, ...) played back in
//! an explicit sequence.

use std::collections::HashMap;

/// One song in a deck.
#[derive(Debug, Clone, PartialEq)]
pub enum Song {
    Flat(FlatSong),
    Block(BlockSong),
}

/// A song whose lyrics are an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatSong {
    pub title_primary: String,
    pub title_secondary: Option<String>,
    pub lines_primary: Vec<String>,
    /// Translation lines, paired with `lines_primary` by index. May be shorter.
    pub lines_secondary: Vec<String>,
}

/// A song built from named blocks referenced by a play sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockSong {
    pub title_primary: String,
    pub title_secondary: Option<String>,
    pub blocks: HashMap<String, Vec<String>>,
    /// Block names in play order. Repeats are allowed; unknown names are skipped.
    pub sequence: Vec<String>,
    pub highlight_block: Option<String>,
}

/// A single content slide's worth of text, borrowed from a [`Song`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine<'a> {
    pub primary: &'a str,
    /// Present only when a non-blank secondary line exists at this position.
    pub secondary: Option<&'a str>,
    pub highlighted: bool,
}

/// Treat blank and whitespace-only text as absent.
#[inline]
pub(crate) fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

impl Song {
    pub fn title_primary(&self) -> &str {
        match self {
            Song::Flat(song) => &song.title_primary,
            Song::Block(song) => &song.title_primary,
        }
    }

    /// The secondary title, if present and not blank.
    pub fn title_secondary(&self) -> Option<&str> {
        let title = match self {
            Song::Flat(song) => song.title_secondary.as_deref(),
            Song::Block(song) => song.title_secondary.as_deref(),
        };
        non_blank(title)
    }

    /// Content lines in presentation order.
    pub fn content_lines(&self) -> Vec<ContentLine<'_>> {
        match self {
            Song::Flat(song) => song.content_lines().collect(),
            Song::Block(song) => song.content_lines().collect(),
        }
    }
}

impl From<FlatSong> for Song {
    fn from(song: FlatSong) -> Self {
        Song::Flat(song)
    }
}

impl From<BlockSong> for Song {
    fn from(song: BlockSong) -> Self {
        Song::Block(song)
    }
}

impl FlatSong {
    /// The non-blank secondary line paired with primary line `index`, if any.
    pub fn secondary_line(&self, index: usize) -> Option<&str> {
        non_blank(self.lines_secondary.get(index).map(String::as_str))
    }

    pub fn content_lines(&self) -> impl Iterator<Item = ContentLine<'_>> + '_ {
        self.lines_primary
            .iter()
            .enumerate()
            .map(move |(index, primary)| ContentLine {
                primary: primary.as_str(),
                secondary: self.secondary_line(index),
                highlighted: false,
            })
    }
}

impl BlockSong {
    /// The highlight block name, ignoring an empty one.
    pub fn highlight(&self) -> Option<&str> {
        self.highlight_block.as_deref().filter(|name| !name.is_empty())
    }

    /// The play sequence with names missing from `blocks` dropped.
    pub fn effective_sequence(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.sequence.iter().filter_map(move |name| match self.blocks.get(name) {
            Some(lines) => Some((name.as_str(), lines.as_slice())),
            None => {
                tracing::debug!(
                    song = %self.title_primary,
                    block = %name,
                    "sequence names an unknown block, skipping"
                );
                None
            },
        })
    }

    pub fn content_lines(&self) -> impl Iterator<Item = ContentLine<'_>> + '_ {
        let highlight = self.highlight();
        self.effective_sequence().flat_map(move |(name, lines)| {
            let highlighted = highlight == Some(name);
            lines.iter().map(move |line| ContentLine {
                primary: line.as_str(),
                secondary: None,
                highlighted,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flat_pairs_by_index() {
        let song = FlatSong {
            title_primary: "Grace".into(),
            title_secondary: Some("".into()),
            lines_primary: lines(&["A", "B", ""]),
            lines_secondary: lines(&["a", "  "]),
        };
        let content: Vec<_> = song.content_lines().collect();
        assert_eq!(content.len(), 3);
        assert_eq!(content[0].secondary, Some("a"));
        assert_eq!(content[1].secondary, None);
        assert_eq!(content[2].primary, "");
        assert_eq!(content[2].secondary, None);
        assert_eq!(Song::from(song).title_secondary(), None);
    }

    #[test]
    fn test_block_sequence_skips_unknown_and_repeats() {
        let song = BlockSong {
            title_primary: "Blocks".into(),
            blocks: HashMap::from([
                ("Verse".to_string(), lines(&["L1", "L2"])),
                ("Chorus".to_string(), lines(&["C1"])),
            ]),
            sequence: lines(&["Verse", "Chorus", "Verse", "Missing"]),
            highlight_block: Some("Chorus".into()),
            ..Default::default()
        };

        let names: Vec<_> = song.effective_sequence().map(|(name, _)| name).collect();
        assert_eq!(names, ["Verse", "Chorus", "Verse"]);

        let content: Vec<_> = song
            .content_lines()
            .map(|line| (line.primary, line.highlighted))
            .collect();
        assert_eq!(
            content,
            [
                ("L1", false),
                ("L2", false),
                ("C1", true),
                ("L1", false),
                ("L2", false)
            ]
        );
    }

    #[test]
    fn test_empty_highlight_is_ignored() {
        let song = BlockSong {
            blocks: HashMap::from([(String::new(), lines(&["x"]))]),
            sequence: lines(&[""]),
            highlight_block: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(song.highlight(), None);
        assert!(song.content_lines().all(|line| !line.highlighted));
    }
}
