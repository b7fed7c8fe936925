/// Slide part generation.
use std::fmt::Write as FmtWrite;

use super::shape::{Frame, write_picture, write_text_box};
use crate::common::RGBColor;
use crate::deck::{Background, Layout, SlideSpec};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;

/// Shape ID of the background picture, when present.
const PICTURE_SHAPE_ID: u32 = 2;
/// Shape ID of the lyric text box.
const TEXT_BOX_SHAPE_ID: u32 = 3;

/// Render one slide.
///
/// `image_rel_id` must be set exactly when the slide has an image background;
/// the picture goes first in the shape tree so the text draws over it.
pub(crate) fn slide_xml(
    spec: &SlideSpec,
    layout: &Layout,
    image_rel_id: Option<&str>,
) -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )?;
    xml.push_str("<p:cSld>");

    // <p:bg> must come before spTree
    if let Background::Solid(color) = &spec.background {
        write_solid_background(&mut xml, *color);
    }

    xml.push_str("<p:spTree>");
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    if let (Background::Image(path), Some(rel_id)) = (&spec.background, image_rel_id) {
        let description = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        write_picture(
            &mut xml,
            PICTURE_SHAPE_ID,
            Frame::full_slide(layout),
            rel_id,
            &description,
        )?;
    }

    write_text_box(
        &mut xml,
        TEXT_BOX_SHAPE_ID,
        Frame::text_box(layout),
        &spec.runs,
    )?;

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sld>");

    Ok(xml)
}

fn write_solid_background(xml: &mut String, color: RGBColor) {
    xml.push_str("<p:bg>");
    xml.push_str("<p:bgPr>");
    xml.push_str("<a:solidFill>");
    xml.push_str("<a:srgbClr val=\"");
    xml.push_str(&color.to_hex());
    xml.push_str("\"/>");
    xml.push_str("</a:solidFill>");
    xml.push_str("<a:effectLst/>");
    xml.push_str("</p:bgPr>");
    xml.push_str("</p:bg>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{SlideKind, TextRun};
    use quick_xml::Reader;
    use quick_xml::events::Event;

    fn spec(background: Background) -> SlideSpec {
        SlideSpec {
            kind: SlideKind::Content,
            background,
            runs: vec![TextRun::centered(
                "Amazing grace",
                "Arial",
                50.0,
                RGBColor::WHITE,
            )],
        }
    }

    /// Names of all start/empty elements, in document order.
    fn element_names(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut names = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) => {
                    names.push(String::from_utf8(e.name().as_ref().to_vec()).unwrap())
                },
                Event::Eof => break,
                _ => {},
            }
        }
        names
    }

    #[test]
    fn test_solid_background_slide() {
        let xml = slide_xml(
            &spec(Background::Solid(RGBColor::BLACK)),
            &Layout::default(),
            None,
        )
        .unwrap();
        let names = element_names(&xml);

        assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="000000"/>"#));
        assert!(!names.iter().any(|n| n == "p:pic"));
        let bg = names.iter().position(|n| n == "p:bg").unwrap();
        let tree = names.iter().position(|n| n == "p:spTree").unwrap();
        assert!(bg < tree);
    }

    #[test]
    fn test_image_background_slide() {
        let xml = slide_xml(
            &spec(Background::Image("/tmp/lyric bg.png".into())),
            &Layout::default(),
            Some("rId2"),
        )
        .unwrap();
        let names = element_names(&xml);

        assert!(!names.iter().any(|n| n == "p:bg"));
        let pic = names.iter().position(|n| n == "p:pic").unwrap();
        let text = names.iter().position(|n| n == "p:sp").unwrap();
        assert!(pic < text, "picture must sit under the text box");
        assert!(xml.contains(r#"descr="lyric bg.png""#));
        assert!(xml.contains(r#"r:embed="rId2""#));
    }
}
