use allsorts::binary::read::ReadScope;
use allsorts::tables::{FontTableProvider, NameTable, OpenTypeFont};

use crate::fonts::FontError;

/// Read the full font name (name ID 4) from TrueType/OpenType font data.
///
/// For font collections the first face is used. When several ID 4 records
/// exist, the one allsorts prefers by platform and encoding (Unicode/Windows
/// before Macintosh) wins, not necessarily the first record in the table.
pub fn try_font_display_name(data: &[u8]) -> Result<String, FontError> {
    let scope = ReadScope::new(data);
    let font_file = scope
        .read::<OpenTypeFont<'_>>()
        .map_err(|e| FontError::InvalidData(e.to_string()))?;
    let provider = font_file
        .table_provider(0)
        .map_err(|e| FontError::InvalidData(e.to_string()))?;

    let name_data = provider
        .table_data(allsorts::tag::NAME)
        .map_err(|e| FontError::InvalidData(e.to_string()))?
        .ok_or(FontError::MissingNameTable)?;

    let name_table = ReadScope::new(&name_data)
        .read::<NameTable<'_>>()
        .map_err(|e| FontError::InvalidData(e.to_string()))?;

    name_table
        .string_for_id(NameTable::FULL_FONT_NAME)
        .map(|name| name.trim_end_matches('\0').trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(FontError::MissingFullName)
}
