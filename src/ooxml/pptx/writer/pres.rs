/// Presentation writer for PPTX.
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::super::template;
use super::media::MediaMap;
use super::slide::slide_xml;
use crate::deck::Deck;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{PackageWriter, Part, Relationships};

/// First `p:sldId` value; lower IDs are reserved.
const FIRST_SLIDE_ID: usize = 256;
/// ID of the single slide master in `p:sldMasterIdLst`.
const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// Writes an assembled [`Deck`] as a `.pptx` package.
///
/// Background image files are read when the package is built, so a deck can
/// be assembled and inspected without touching the filesystem.
#[derive(Debug)]
pub struct PptxWriter<'a> {
    deck: &'a Deck,
    title: String,
}

impl<'a> PptxWriter<'a> {
    pub fn new(deck: &'a Deck) -> Self {
        let title = deck
            .slides
            .first()
            .and_then(|slide| slide.primary())
            .map(|run| run.text.clone())
            .unwrap_or_default();
        Self { deck, title }
    }

    /// Override the document title stored in the core properties.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Serialize the deck to package bytes.
    #[tracing::instrument(level = "debug", skip_all, fields(slides = self.deck.slide_count()))]
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.package()?.to_bytes()
    }

    /// Write the deck to `path`.
    ///
    /// Package failures surface as [`crate::Error::Ooxml`].
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        self.package()?.write(path)?;
        tracing::info!(
            path = %path.display(),
            slides = self.deck.slide_count(),
            "deck written"
        );
        Ok(())
    }

    fn package(&self) -> Result<PackageWriter> {
        let mut pkg = PackageWriter::new();
        pkg.rels_mut().add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        pkg.rels_mut().add(rt::CORE_PROPERTIES, "docProps/core.xml");
        pkg.rels_mut().add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        pkg.add_part(Part::new(
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            template::core_properties_xml(&self.title),
        ));
        pkg.add_part(Part::new(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_properties_xml(self.deck.slide_count()),
        ));

        // rId1 and rId2 are fixed; slides follow from rId3.
        let mut pres_rels = Relationships::new();
        pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");

        let mut media = MediaMap::new();
        let mut slide_rel_ids = Vec::with_capacity(self.deck.slide_count());
        for (index, spec) in self.deck.slides.iter().enumerate() {
            let number = index + 1;
            let mut rels = Relationships::new();
            rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");

            let image_rel_id = match spec.background.image_path() {
                Some(path) => Some(rels.add(rt::IMAGE, media.intern(path)?.slide_target())),
                None => None,
            };
            let xml = slide_xml(spec, &self.deck.layout, image_rel_id.as_deref())?;

            pkg.add_part(
                Part::new(format!("/ppt/slides/slide{number}.xml"), ct::PML_SLIDE, xml)
                    .with_rels(rels),
            );
            slide_rel_ids.push(pres_rels.add(rt::SLIDE, format!("slides/slide{number}.xml")));
        }

        pkg.add_part(
            Part::new(
                "/ppt/presentation.xml",
                ct::PML_PRESENTATION_MAIN,
                self.presentation_xml(&slide_rel_ids)?,
            )
            .with_rels(pres_rels),
        );

        let mut master_rels = Relationships::new();
        master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        pkg.add_part(
            Part::new(
                "/ppt/slideMasters/slideMaster1.xml",
                ct::PML_SLIDE_MASTER,
                template::SLIDE_MASTER_XML,
            )
            .with_rels(master_rels),
        );

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        pkg.add_part(
            Part::new(
                "/ppt/slideLayouts/slideLayout1.xml",
                ct::PML_SLIDE_LAYOUT,
                template::SLIDE_LAYOUT_XML,
            )
            .with_rels(layout_rels),
        );

        pkg.add_part(Part::new(
            "/ppt/theme/theme1.xml",
            ct::OFC_THEME,
            template::THEME_XML,
        ));

        tracing::debug!(images = media.len(), parts = pkg.part_count(), "package assembled");
        for item in media.into_items() {
            pkg.add_part(Part::new(item.partname, item.format.mime_type(), item.data));
        }

        Ok(pkg)
    }

    /// Generate presentation.xml content.
    fn presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="rId1"/>"#,
            SLIDE_MASTER_ID
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !slide_rel_ids.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, rel_id) in slide_rel_ids.iter().enumerate() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    FIRST_SLIDE_ID + index,
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        let layout = &self.deck.layout;
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            layout.slide_width.emus(),
            layout.slide_height.emus()
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::deck::{Background, Layout, SlideKind, SlideSpec, TextRun};
    use crate::ooxml::error::OoxmlError;
    use std::io::{Cursor, Read};

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

    fn slide(kind: SlideKind, background: Background, text: &str) -> SlideSpec {
        SlideSpec {
            kind,
            background,
            runs: vec![TextRun::centered(text, "Arial", 50.0, RGBColor::WHITE)],
        }
    }

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn test_package_structure() {
        let deck = Deck {
            slides: vec![
                slide(SlideKind::Title, Background::Solid(RGBColor::WHITE), "Grace"),
                slide(SlideKind::Content, Background::Solid(RGBColor::BLACK), "A"),
            ],
            layout: Layout::default(),
        };
        let bytes = PptxWriter::new(&deck).to_bytes().unwrap();
        assert_eq!(&bytes[0..4], &[0x50, 0x4B, 0x03, 0x04]);

        let archive = zip::ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
        let names: Vec<_> = archive.file_names().collect();
        for required in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
        ] {
            assert!(names.contains(&required), "missing {required}");
        }

        let pres = read_member(&bytes, "ppt/presentation.xml");
        assert!(pres.contains(r#"<p:sldId id="256" r:id="rId3"/>"#));
        assert!(pres.contains(r#"<p:sldId id="257" r:id="rId4"/>"#));
        assert!(pres.contains(r#"<p:sldSz cx="12188952" cy="6858000"/>"#));

        let core = read_member(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Grace</dc:title>"));

        let types = read_member(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"PartName="/ppt/slides/slide2.xml""#));
    }

    #[test]
    fn test_shared_background_image_stored_once() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("lyric.png");
        std::fs::write(&image, PNG).unwrap();

        let deck = Deck {
            slides: vec![
                slide(SlideKind::Content, Background::Image(image.clone()), "A"),
                slide(SlideKind::Content, Background::Image(image), "B"),
            ],
            layout: Layout::default(),
        };
        let bytes = PptxWriter::new(&deck).to_bytes().unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
        let media: Vec<_> = archive
            .file_names()
            .filter(|name| name.starts_with("ppt/media/"))
            .collect();
        assert_eq!(media, ["ppt/media/image1.png"]);

        for n in [1, 2] {
            let rels = read_member(&bytes, &format!("ppt/slides/_rels/slide{n}.xml.rels"));
            assert!(rels.contains(r#"Id="rId2""#));
            assert!(rels.contains(r#"Target="../media/image1.png""#));
        }
        let types = read_member(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
    }

    #[test]
    fn test_missing_image_fails() {
        let deck = Deck {
            slides: vec![slide(
                SlideKind::Title,
                Background::Image("/nonexistent/songdeck/bg.png".into()),
                "x",
            )],
            layout: Layout::default(),
        };
        assert!(matches!(
            PptxWriter::new(&deck).to_bytes(),
            Err(OoxmlError::Media { .. })
        ));
    }

    #[test]
    fn test_save_reports_package_errors() {
        let dir = tempfile::tempdir().unwrap();
        let deck = Deck {
            slides: vec![slide(
                SlideKind::Content,
                Background::Image(dir.path().join("absent.png")),
                "x",
            )],
            layout: Layout::default(),
        };
        let out = dir.path().join("deck.pptx");
        assert!(matches!(
            PptxWriter::new(&deck).save(&out),
            Err(crate::Error::Ooxml(OoxmlError::Media { .. }))
        ));
        assert!(!out.exists());

        let empty = Deck {
            slides: Vec::new(),
            layout: Layout::default(),
        };
        let unwritable = dir.path().join("no-such-dir").join("deck.pptx");
        assert!(matches!(
            PptxWriter::new(&empty).save(&unwritable),
            Err(crate::Error::Ooxml(OoxmlError::Io(_)))
        ));
    }

    #[test]
    fn test_save_and_empty_deck() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.pptx");
        let deck = Deck {
            slides: Vec::new(),
            layout: Layout::default(),
        };
        PptxWriter::new(&deck).with_title("Empty").save(&out).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        let pres = read_member(&bytes, "ppt/presentation.xml");
        assert!(!pres.contains("sldIdLst"));
        assert!(read_member(&bytes, "docProps/app.xml").contains("<Slides>0</Slides>"));
    }
}
