use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::AnalyzeError;

/// Pulls the main document part out of the OOXML container and collects its
/// visible text: every `<w:t>` run is appended and every closed paragraph
/// adds a newline, in document order.
pub(crate) fn extract(bytes: &[u8]) -> Result<String, AnalyzeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut part = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_run = false;
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) if e.name().as_ref() == b"w:t" => in_run = true,
            Event::End(ref e) => match e.name().as_ref() {
                b"w:t" => in_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(ref t) if in_run => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(text)
}
