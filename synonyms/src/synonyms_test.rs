//! Tests for synonym data handling.

use super::*;
use pretty_assertions::assert_eq;
use std::io::Write as _;

const DATA: &str = "\
fast | quick, rapid, speedy
Big | large, huge
happy | glad, Cheerful, content
";

fn data() -> SynonymData {
    DATA.parse().unwrap()
}

#[test]
fn test_parse_line() {
    let line: SynonymLine = "  cold |  chilly,frosty , icy ".parse().unwrap();
    assert_eq!(line, SynonymLine::new("cold", ["chilly", "frosty", "icy"]));
    assert_eq!(line.to_string(), "cold | chilly, frosty, icy");
}

#[test]
fn test_parse_line_without_synonyms() {
    let line: SynonymLine = "lonely |".parse().unwrap();
    assert!(line.synonyms.is_empty());
}

#[test]
fn test_parse_malformed_lines() {
    let err = "no delimiter".parse::<SynonymLine>().unwrap_err();
    assert!(matches!(err, SynonymError::MalformedLine(ref line) if line == "no delimiter"));
    assert_eq!(
        err.to_string(),
        "malformed synonym line `no delimiter`: expected `word | synonym, ...`"
    );
    assert!(matches!(
        " | orphan".parse::<SynonymLine>(),
        Err(SynonymError::MalformedLine(_))
    ));
    assert!(matches!(
        "ok | fine\n | orphan\n".parse::<SynonymData>(),
        Err(SynonymError::Malformed { line_number: 2, .. })
    ));
}

#[test]
fn test_read_skips_blank_lines() {
    let data: SynonymData = "a | b\n\n   \nc | d\n".parse().unwrap();
    assert_eq!(data.len(), 2);
}

#[test]
fn test_line_lookup_ignores_case() {
    let data = data();
    assert_eq!(
        data.line("BIG").unwrap().to_string(),
        "Big | large, huge"
    );
    assert_eq!(data.line("Fast").unwrap().word, "fast");
}

#[test]
fn test_line_not_found() {
    let err = data().line("slow").unwrap_err();
    assert!(matches!(err, SynonymError::NotFound(ref word) if word == "slow"));
    assert_eq!(err.to_string(), "slow not present");
}

#[test]
fn test_add_and_remove_line() {
    let mut data = data();
    data.add_line("cold | chilly".parse().unwrap());
    assert_eq!(data.len(), 4);
    assert_eq!(data.lines()[3].word, "cold");

    let removed = data.remove_line("big").unwrap();
    assert_eq!(removed.word, "Big");
    assert_eq!(data.len(), 3);
    assert!(matches!(
        data.remove_line("big"),
        Err(SynonymError::NotFound(_))
    ));
}

#[test]
fn test_add_synonym() {
    let mut data = data();
    data.add_synonym("happy", "joyful").unwrap();
    assert_eq!(
        data.line("happy").unwrap().to_string(),
        "happy | glad, Cheerful, content, joyful"
    );
    assert!(matches!(
        data.add_synonym("sad", "blue"),
        Err(SynonymError::NotFound(_))
    ));
}

#[test]
fn test_remove_synonym() {
    let mut data = data();
    data.remove_synonym("HAPPY", "cheerful").unwrap();
    assert_eq!(
        data.line("happy").unwrap().to_string(),
        "happy | glad, content"
    );

    let err = data.remove_synonym("happy", "cheerful").unwrap_err();
    assert_eq!(err.to_string(), "cheerful is not a synonym of happy");
}

#[test]
fn test_sort_lines_and_synonyms() {
    let mut data = data();
    data.sort();
    assert_eq!(
        data.to_string(),
        "\
Big | huge, large
fast | quick, rapid, speedy
happy | Cheerful, content, glad
"
    );
}

#[test]
fn test_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DATA.as_bytes()).unwrap();

    let mut data = SynonymData::read_file(file.path()).unwrap();
    data.add_synonym("fast", "swift").unwrap();
    data.write_file(file.path()).unwrap();

    let reread = SynonymData::read_file(file.path()).unwrap();
    assert_eq!(reread, data);
    assert_eq!(
        std::fs::read_to_string(file.path()).unwrap(),
        "fast | quick, rapid, speedy, swift\nBig | large, huge\nhappy | glad, Cheerful, content\n"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SynonymData::read_file(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, SynonymError::Io(_)));
}
