/// Shape markup for deck slides: the lyric text box and the background picture.
use std::fmt::Write as FmtWrite;

use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::deck::{Layout, TextRun};
use crate::ooxml::error::Result;

/// Position and size of a shape, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Frame {
    /// The whole slide canvas.
    pub fn full_slide(layout: &Layout) -> Self {
        Self {
            x: 0,
            y: 0,
            cx: layout.slide_width.emus(),
            cy: layout.slide_height.emus(),
        }
    }

    /// The lyric text box footprint.
    pub fn text_box(layout: &Layout) -> Self {
        Self {
            x: layout.text_left.emus(),
            y: layout.text_top.emus(),
            cx: layout.text_width.emus(),
            cy: layout.text_height.emus(),
        }
    }

    fn write_xfrm(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.cx, self.cy)?;
        xml.push_str("</a:xfrm>");
        Ok(())
    }
}

/// Write a word-wrapped text box holding one paragraph per run.
pub(crate) fn write_text_box(
    xml: &mut String,
    shape_id: u32,
    frame: Frame,
    runs: &[TextRun],
) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
        shape_id, shape_id
    )?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    frame.write_xfrm(xml)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("<a:noFill/>");
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:noAutofit/></a:bodyPr>"#);
    xml.push_str("<a:lstStyle/>");
    for run in runs {
        write_paragraph(xml, run)?;
    }
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_paragraph(xml: &mut String, run: &TextRun) -> Result<()> {
    let font = escape_xml(&run.font);

    xml.push_str("<a:p>");
    write!(xml, r#"<a:pPr algn="{}"/>"#, run.alignment.as_ooxml())?;
    xml.push_str("<a:r>");
    write!(
        xml,
        r#"<a:rPr lang="en-US" sz="{}" dirty="0">"#,
        pt_to_centipoints(run.size_pt)
    )?;
    // Fill must precede the typefaces in CT_TextCharacterProperties.
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        run.color.to_hex()
    )?;
    write!(xml, r#"<a:latin typeface="{font}"/><a:ea typeface="{font}"/>"#)?;
    xml.push_str("</a:rPr>");
    write!(xml, "<a:t>{}</a:t>", escape_xml(&run.text))?;
    xml.push_str("</a:r>");
    xml.push_str("</a:p>");
    Ok(())
}

/// Write a stretched picture referencing the image relationship `rel_id`.
pub(crate) fn write_picture(
    xml: &mut String,
    shape_id: u32,
    frame: Frame,
    rel_id: &str,
    description: &str,
) -> Result<()> {
    xml.push_str("<p:pic>");
    xml.push_str("<p:nvPicPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
        shape_id,
        shape_id,
        escape_xml(description)
    )?;
    xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvPicPr>");

    xml.push_str("<p:blipFill>");
    write!(xml, r#"<a:blip r:embed="{}"/>"#, rel_id)?;
    xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
    xml.push_str("</p:blipFill>");

    xml.push_str("<p:spPr>");
    frame.write_xfrm(xml)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");
    xml.push_str("</p:pic>");
    Ok(())
}
