use super::*;

const SAMPLE: &str = r#"<?xml version="1.0"?>
<gameList>
  <game id="12" source="ScreenScraper.fr">
    <path>./Alpha (USA).zip</path>
    <name>Alpha</name>
    <desc>Shoot &amp; run</desc>
    <image>./media/images/Alpha (USA).png</image>
    <region>us</region>
  </game>
  <folder>
    <path>./Multi</path>
    <name>Multi-disc</name>
  </folder>
  <game>
    <path>./Beta.zip</path>
    <name><![CDATA[Beta <Special>]]></name>
    <video/>
  </game>
</gameList>
"#;

#[test]
fn test_parse_game_fields_in_order() {
    let games = parse_gamelist(SAMPLE.as_bytes()).unwrap();
    assert_eq!(games.len(), 2);

    let alpha = &games[0];
    let keys: Vec<&str> = alpha.fields().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["path", "name", "desc", "image", "region"]);
    assert_eq!(alpha.path(), "./Alpha (USA).zip");
    assert_eq!(alpha.description(), "Shoot & run");
    assert_eq!(alpha.image(), Some("./media/images/Alpha (USA).png"));
}

#[test]
fn test_parse_skips_folders_and_keeps_cdata() {
    let games = parse_gamelist(SAMPLE.as_bytes()).unwrap();
    assert!(games.iter().all(|g| g.name() != "Multi-disc"));

    let beta = &games[1];
    assert_eq!(beta.name(), "Beta <Special>");
    assert_eq!(beta.get("video"), Some(""));
    assert_eq!(beta.image(), None);
    assert_eq!(beta.region(), "Unknown");
    assert_eq!(beta.description(), "No description available");
}

#[test]
fn test_parse_missing_name_is_invalid() {
    let xml = "<gameList><game><path>./a.zip</path></game></gameList>";
    let err = parse_gamelist(xml.as_bytes()).unwrap_err();
    assert!(matches!(err, TriageError::InvalidGamelist(_)), "{err}");
}

#[test]
fn test_parse_malformed_xml_fails() {
    let xml = "<gameList><game><path>./a.zip</name></game></gameList>";
    assert!(parse_gamelist(xml.as_bytes()).is_err());
}

#[test]
fn test_parse_empty_document_fails() {
    let err = parse_gamelist("".as_bytes()).unwrap_err();
    assert!(matches!(err, TriageError::InvalidGamelist(_)));
}

#[test]
fn test_parse_empty_gamelist() {
    let games = parse_gamelist("<gameList></gameList>".as_bytes()).unwrap();
    assert!(games.is_empty());
}

#[test]
fn test_write_contains_every_field() {
    let game = GameRecord::new("./Tom.zip", "Tom & Jerry")
        .with_field("desc", "Cat <chases> mouse")
        .with_field("developer", "Hudson");

    let mut out = Vec::new();
    write_gamelist(&mut out, [&game]).unwrap();
    let xml = String::from_utf8(out).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\"?>\n<gameList>\n"));
    assert!(xml.contains("    <path>./Tom.zip</path>\n"));
    assert!(xml.contains("<name>Tom &amp; Jerry</name>"));
    assert!(xml.contains("<desc>Cat &lt;chases&gt; mouse</desc>"));
    assert!(xml.contains("<developer>Hudson</developer>"));

    let reparsed = parse_gamelist(xml.as_bytes()).unwrap();
    assert_eq!(reparsed, vec![game]);
}

#[test]
fn test_escape_xml() {
    assert_eq!(escape_xml("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(escape_xml("a < b"), "a &lt; b");
    assert_eq!(escape_xml("it's \"fine\""), "it&apos;s &quot;fine&quot;");
}

#[test]
fn test_parse_keeps_field_whitespace() {
    let xml = "<gameList>\n  <game>\n    <path>./t.zip</path>\n    <name>  Tom &amp; Jerry</name>\n  </game>\n</gameList>\n";
    let games = parse_gamelist(xml.as_bytes()).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name(), "  Tom & Jerry");
    assert_eq!(games[0].path(), "./t.zip");
    assert_eq!(games[0].fields().count(), 2);
}
