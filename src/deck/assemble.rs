//! Deck assembly: songs plus a resolved style in, slide specifications out.
//!
//! Every slide is built by a standalone function from borrowed inputs, so a
//! single slide can be produced or tested without walking the whole deck.

use super::slide::{Background, SlideKind, SlideSpec, TextRun};
use super::song::{ContentLine, Song};
use super::style::{HIGHLIGHT_COLOR, Style};

/// Build the slides for `songs`, in order: for each song a title slide followed
/// by one content slide per lyric line.
#[tracing::instrument(level = "debug", skip_all, fields(songs = songs.len()))]
pub fn assemble(
    songs: &[Song],
    style: &Style,
    title_background: &Background,
    lyric_background: &Background,
) -> Vec<SlideSpec> {
    let mut slides = Vec::with_capacity(songs.len() * 8);
    for song in songs {
        slides.push(title_slide(song, style, title_background));
        slides.extend(
            song.content_lines()
                .into_iter()
                .map(|line| content_slide(&line, style, lyric_background)),
        );
    }
    tracing::debug!(slides = slides.len(), "assembled deck");
    slides
}

/// The slide announcing a song: primary title, plus the secondary title when
/// it is not blank.
pub fn title_slide(song: &Song, style: &Style, background: &Background) -> SlideSpec {
    let mut runs = vec![TextRun::centered(
        song.title_primary(),
        &style.title_font_primary,
        style.title_size_primary,
        style.title_color_primary,
    )];
    if let Some(secondary) = song.title_secondary() {
        runs.push(TextRun::centered(
            secondary,
            &style.title_font_secondary,
            style.title_size_secondary,
            style.title_color_secondary,
        ));
    }

    SlideSpec {
        kind: SlideKind::Title,
        background: background.clone(),
        runs,
    }
}

/// One lyric line. Highlighted lines swap the primary color for
/// [`HIGHLIGHT_COLOR`]; font and size stay the same.
pub fn content_slide(line: &ContentLine<'_>, style: &Style, background: &Background) -> SlideSpec {
    let primary_color = if line.highlighted {
        HIGHLIGHT_COLOR
    } else {
        style.lyric_color_primary
    };

    let mut runs = vec![TextRun::centered(
        line.primary,
        &style.lyric_font_primary,
        style.lyric_size_primary,
        primary_color,
    )];
    if let Some(secondary) = line.secondary {
        runs.push(TextRun::centered(
            secondary,
            &style.lyric_font_secondary,
            style.lyric_size_secondary,
            style.lyric_color_secondary,
        ));
    }

    SlideSpec {
        kind: SlideKind::Content,
        background: background.clone(),
        runs,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;
    use crate::common::RGBColor;
    use crate::deck::song::{BlockSong, FlatSong};
    use crate::deck::style::{StyleInput, resolve};

    fn style() -> Style {
        resolve(&StyleInput::default()).unwrap()
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn texts(slide: &SlideSpec) -> Vec<&str> {
        slide.runs.iter().map(|r| r.text.as_str()).collect()
    }

    fn backgrounds(style: &Style) -> (Background, Background) {
        (
            Background::Solid(style.title_background),
            Background::Solid(style.lyric_background),
        )
    }

    #[test]
    fn test_grace_scenario() {
        let style = style();
        let (title_bg, lyric_bg) = backgrounds(&style);
        let song = Song::Flat(FlatSong {
            title_primary: "Grace".into(),
            title_secondary: Some("".into()),
            lines_primary: lines(&["A", "B", ""]),
            lines_secondary: lines(&["a", "b"]),
        });

        let slides = assemble(&[song], &style, &title_bg, &lyric_bg);
        assert_eq!(slides.len(), 4);

        assert_eq!(slides[0].kind, SlideKind::Title);
        assert_eq!(texts(&slides[0]), ["Grace"]);
        assert_eq!(slides[0].background, title_bg);

        assert_eq!(texts(&slides[1]), ["A", "a"]);
        assert_eq!(texts(&slides[2]), ["B", "b"]);
        assert_eq!(texts(&slides[3]), [""]);
        for slide in &slides[1..] {
            assert_eq!(slide.kind, SlideKind::Content);
            assert_eq!(slide.background, lyric_bg);
        }

        let secondary = slides[1].secondary().unwrap();
        assert_eq!(secondary.font, style.lyric_font_secondary);
        assert_eq!(secondary.size_pt, style.lyric_size_secondary);
        assert_eq!(secondary.color, style.lyric_color_secondary);
    }

    #[test]
    fn test_title_with_secondary() {
        let style = style();
        let song = Song::Flat(FlatSong {
            title_primary: "은혜".into(),
            title_secondary: Some("Grace".into()),
            ..Default::default()
        });
        let slide = title_slide(&song, &style, &Background::Solid(RGBColor::WHITE));
        assert_eq!(texts(&slide), ["은혜", "Grace"]);
        assert_eq!(slide.runs[0].size_pt, style.title_size_primary);
        assert_eq!(slide.runs[1].font, style.title_font_secondary);
        assert_eq!(slide.runs[1].color, style.title_color_secondary);
    }

    #[test]
    fn test_block_scenario_with_highlight() {
        let style = style();
        let (title_bg, lyric_bg) = backgrounds(&style);
        let song = Song::Block(BlockSong {
            title_primary: "Blocks".into(),
            blocks: HashMap::from([
                ("Verse".to_string(), lines(&["L1", "L2"])),
                ("Chorus".to_string(), lines(&["C1"])),
            ]),
            sequence: lines(&["Verse", "Chorus", "Verse", "Missing"]),
            highlight_block: Some("Chorus".into()),
            ..Default::default()
        });

        let slides = assemble(&[song], &style, &title_bg, &lyric_bg);
        let content: Vec<_> = slides[1..]
            .iter()
            .map(|s| (s.runs[0].text.as_str(), s.runs[0].color))
            .collect();
        let plain = style.lyric_color_primary;
        assert_eq!(
            content,
            [
                ("L1", plain),
                ("L2", plain),
                ("C1", HIGHLIGHT_COLOR),
                ("L1", plain),
                ("L2", plain),
            ]
        );
        assert!(slides[1..].iter().all(|s| s.runs.len() == 1));
        let highlighted = &slides[3].runs[0];
        assert_eq!(highlighted.size_pt, style.lyric_size_primary);
        assert_eq!(highlighted.font, style.lyric_font_primary);
    }

    #[test]
    fn test_empty_lyrics_yield_title_only() {
        let style = style();
        let (title_bg, lyric_bg) = backgrounds(&style);
        let song = Song::Flat(FlatSong {
            title_primary: "Only a title".into(),
            ..Default::default()
        });
        assert_eq!(assemble(&[song], &style, &title_bg, &lyric_bg).len(), 1);
    }

    #[test]
    fn test_image_backgrounds_apply_per_category() {
        let style = style();
        let title_bg = Background::Image(PathBuf::from("title.png"));
        let lyric_bg = Background::Image(PathBuf::from("lyric.jpg"));
        let songs = [
            Song::Flat(FlatSong {
                title_primary: "One".into(),
                lines_primary: lines(&["x", "y"]),
                ..Default::default()
            }),
            Song::Flat(FlatSong {
                title_primary: "Two".into(),
                lines_primary: lines(&["z"]),
                ..Default::default()
            }),
        ];
        let slides = assemble(&songs, &style, &title_bg, &lyric_bg);
        assert_eq!(slides.len(), 5);
        for slide in &slides {
            let expected = match slide.kind {
                SlideKind::Title => &title_bg,
                SlideKind::Content => &lyric_bg,
            };
            assert_eq!(&slide.background, expected);
        }
        assert_eq!(texts(&slides[3]), ["Two"]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn line_strategy() -> impl Strategy<Value = String> {
            prop_oneof![Just(String::new()), Just("  ".to_string()), "[a-z가-힣 ]{1,12}"]
        }

        fn flat_song_strategy() -> impl Strategy<Value = FlatSong> {
            (
                "[A-Za-z ]{0,10}",
                proptest::option::of("[A-Za-z ]{0,10}"),
                proptest::collection::vec(line_strategy(), 0..12),
                proptest::collection::vec(line_strategy(), 0..12),
            )
                .prop_map(|(title, subtitle, primary, secondary)| FlatSong {
                    title_primary: title,
                    title_secondary: subtitle,
                    lines_primary: primary,
                    lines_secondary: secondary,
                })
        }

        fn block_name() -> impl Strategy<Value = String> {
            prop::sample::select(vec!["Verse", "Chorus", "Bridge", "Tag"]).prop_map(|s| s.to_string())
        }

        fn block_song_strategy() -> impl Strategy<Value = BlockSong> {
            (
                proptest::collection::hash_map(
                    prop::sample::select(vec!["Verse", "Chorus", "Bridge"]).prop_map(|s| s.to_string()),
                    proptest::collection::vec(line_strategy(), 0..5),
                    0..3,
                ),
                proptest::collection::vec(block_name(), 0..8),
                proptest::option::of(block_name()),
            )
                .prop_map(|(blocks, sequence, highlight_block)| BlockSong {
                    title_primary: "Blocks".into(),
                    title_secondary: None,
                    blocks,
                    sequence,
                    highlight_block,
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_flat_song_yields_one_slide_per_line(song in flat_song_strategy()) {
                let style = style();
                let (title_bg, lyric_bg) = backgrounds(&style);
                let expected = song.lines_primary.len() + 1;
                let slides = assemble(&[Song::Flat(song)], &style, &title_bg, &lyric_bg);
                prop_assert_eq!(slides.len(), expected);
                prop_assert!(slides.iter().all(|s| (1..=2).contains(&s.runs.len())));
            }

            #[test]
            fn prop_block_song_counts_effective_sequence(song in block_song_strategy()) {
                let style = style();
                let (title_bg, lyric_bg) = backgrounds(&style);
                let expected: usize = song
                    .sequence
                    .iter()
                    .filter_map(|name| song.blocks.get(name))
                    .map(Vec::len)
                    .sum();
                let slides = assemble(&[Song::Block(song)], &style, &title_bg, &lyric_bg);
                prop_assert_eq!(slides.len(), expected + 1);
            }

            #[test]
            fn prop_highlight_colors(song in block_song_strategy()) {
                let style = style();
                let (title_bg, lyric_bg) = backgrounds(&style);
                let mut expected = Vec::new();
                for name in &song.sequence {
                    if let Some(block) = song.blocks.get(name) {
                        let color = if song.highlight_block.as_deref() == Some(name.as_str()) {
                            HIGHLIGHT_COLOR
                        } else {
                            style.lyric_color_primary
                        };
                        expected.extend(std::iter::repeat_n(color, block.len()));
                    }
                }
                let slides = assemble(&[Song::Block(song)], &style, &title_bg, &lyric_bg);
                let actual: Vec<_> = slides[1..].iter().map(|s| s.runs[0].color).collect();
                prop_assert_eq!(actual, expected);
            }

            #[test]
            fn prop_assemble_is_idempotent(
                flat in flat_song_strategy(),
                blocks in block_song_strategy(),
            ) {
                let style = style();
                let (title_bg, lyric_bg) = backgrounds(&style);
                let songs = [Song::Flat(flat), Song::Block(blocks)];
                let first = assemble(&songs, &style, &title_bg, &lyric_bg);
                let second = assemble(&songs, &style, &title_bg, &lyric_bg);
                prop_assert_eq!(first, second);
            }
        }
    }
}
