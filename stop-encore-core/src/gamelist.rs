use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::TriageError;
use crate::record::GameRecord;

/// File name of the metadata file inside a system directory.
pub const GAMELIST_FILE_NAME: &str = "gamelist.xml";

/// Parse a gamelist document into records.
///
/// Every direct `game` child of the root element becomes one record, and each
/// child element of a `game` becomes one field. Anything else (`folder`
/// entries, attributes, deeper nesting) is ignored. Field text is kept as
/// written, including leading and trailing whitespace; whitespace between
/// elements is dropped.
pub fn parse_gamelist<R: BufRead>(reader: R) -> Result<Vec<GameRecord>, TriageError> {
    let mut xml = Reader::from_reader(reader);

    let mut buf = Vec::new();
    let mut games = Vec::new();

    let mut depth = 0usize;
    let mut saw_root = false;
    let mut current_game: Option<Vec<(String, String)>> = None;
    let mut current_field: Option<(String, String)> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                depth += 1;
                saw_root = true;
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match depth {
                    2 if tag_name == "game" => current_game = Some(Vec::new()),
                    3 if current_game.is_some() => {
                        current_field = Some((tag_name, String::new()));
                    }
                    _ => {}
                }
            }
            Event::Empty(ref e) => {
                saw_root = true;
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match depth + 1 {
                    2 if tag_name == "game" => {
                        let game = finish_game(Vec::new(), games.len())?;
                        games.push(game);
                    }
                    3 => {
                        if let Some(ref mut fields) = current_game {
                            fields.push((tag_name, String::new()));
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref e) => {
                if depth == 3 {
                    if let Some((_, ref mut value)) = current_field {
                        value.push_str(&e.unescape()?);
                    }
                }
            }
            Event::CData(e) => {
                if depth == 3 {
                    if let Some((_, ref mut value)) = current_field {
                        value.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
            }
            Event::End(_) => {
                match depth {
                    3 => {
                        if let (Some(field), Some(fields)) =
                            (current_field.take(), current_game.as_mut())
                        {
                            fields.push(field);
                        }
                    }
                    2 => {
                        if let Some(fields) = current_game.take() {
                            let game = finish_game(fields, games.len())?;
                            games.push(game);
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(TriageError::invalid_gamelist("No root element"));
    }
    if depth != 0 {
        return Err(TriageError::invalid_gamelist("Unexpected end of file"));
    }

    Ok(games)
}

fn finish_game(fields: Vec<(String, String)>, index: usize) -> Result<GameRecord, TriageError> {
    GameRecord::from_fields(fields).ok_or_else(|| {
        TriageError::invalid_gamelist(format!(
            "game #{} is missing a path or name",
            index + 1
        ))
    })
}

/// Parse a gamelist from a file path.
pub fn parse_gamelist_file(path: &Path) -> Result<Vec<GameRecord>, TriageError> {
    let file = fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    parse_gamelist(reader)
}

/// Write a gamelist document containing `games`, one field element per field.
pub fn write_gamelist<'a, W, I>(mut out: W, games: I) -> Result<(), TriageError>
where
    W: Write,
    I: IntoIterator<Item = &'a GameRecord>,
{
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\"?>\n");
    xml.push_str("<gameList>\n");

    for game in games {
        xml.push_str("  <game>\n");
        for (tag, value) in game.fields() {
            write_tag(&mut xml, tag, value);
        }
        xml.push_str("  </game>\n");
    }

    xml.push_str("</gameList>\n");

    out.write_all(xml.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn write_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push_str("    <");
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[path = "tests/gamelist_tests.rs"]
mod tests;
