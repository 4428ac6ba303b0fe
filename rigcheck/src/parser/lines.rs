//! Line-oriented helpers shared by the dump parsers.
//!
//! Both dump formats are plain text made of `Key: Value` lines. The helpers
//! here decode the raw bytes, split them into lines and pull the value field
//! out of the first line that mentions a keyword.

/// Field separator used by both dump formats.
pub const DELIMITER: char = ':';

/// Decode raw dump bytes into text.
///
/// A UTF-16 byte-order mark selects UTF-16 decoding (msinfo32 writes its
/// reports that way); everything else is read as UTF-8. Invalid sequences
/// are replaced rather than rejected, so decoding never fails.
pub fn decode_dump(bytes: &[u8]) -> String {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Split text into lines, accepting `\n`, `\r\n` and bare `\r` endings.
///
/// A `\r\n` pair yields an extra empty line, which no keyword can match.
pub fn dump_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

/// The `index`-th delimited field of a line, if the line has that many.
///
/// Index 1 is the text between the first and second delimiter (or to the
/// end of the line when there is no second one).
pub fn nth_field(line: &str, index: usize) -> Option<&str> {
    line.split(DELIMITER).nth(index)
}

/// Value of the first line containing `keyword`, trimmed.
///
/// Lines are scanned in order and scanning stops at the first line that both
/// contains the keyword and has a value field.
pub fn first_value<'a, I>(lines: I, keyword: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| line.contains(keyword))
        .find_map(|line| nth_field(line, 1))
        .map(str::trim)
}
