//! Tests for delimited-text parsing and classification

use std::io::{self, Read};

use proptest::prelude::*;

use super::*;
use crate::common::Error;

#[test]
fn test_csv_parsing_classifies_header_as_numeric() {
    let grid = parse("a,b\n1,2\n".as_bytes(), &CsvConfig::default()).unwrap();

    assert_eq!(grid.len(), 2);
    let typed: Vec<Vec<TypedCell>> = grid
        .rows()
        .iter()
        .map(|row| row.iter().map(|t| classify(t)).collect())
        .collect();

    // No quotes present, so every token falls through to the numeric branch
    assert_eq!(
        typed[0],
        vec![
            TypedCell::Numeric("a".to_string()),
            TypedCell::Numeric("b".to_string())
        ]
    );
    assert_eq!(
        typed[1],
        vec![
            TypedCell::Numeric("1".to_string()),
            TypedCell::Numeric("2".to_string())
        ]
    );
}

#[test]
fn test_ragged_rows_are_not_padded() {
    let grid = parse("a,b,c\nd\ne,f\n".as_bytes(), &CsvConfig::default()).unwrap();
    let lengths: Vec<usize> = grid.rows().iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![3, 1, 2]);
    assert_eq!(grid.width(), 3);
}

#[test]
fn test_empty_input() {
    let grid = parse(io::empty(), &CsvConfig::default()).unwrap();
    assert!(grid.is_empty());
}

#[test]
fn test_blank_lines_keep_their_position() {
    let grid = parse("a\n\nb".as_bytes(), &CsvConfig::default()).unwrap();
    assert_eq!(
        grid.rows(),
        &[vec!["a".to_string()], vec![String::new()], vec!["b".to_string()]]
    );
}

#[test]
fn test_gbk_default_encoding() {
    // "姓名,年龄\r\n张三,30" encoded as GBK
    let (bytes, _, _) = encoding_rs::GBK.encode("姓名,年龄\r\n张三,30");
    let grid = parse(&bytes[..], &CsvConfig::default()).unwrap();

    assert_eq!(grid.rows()[0], vec!["姓名", "年龄"]);
    assert_eq!(grid.rows()[1], vec!["张三", "30"]);
}

#[test]
fn test_utf8_with_bom() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("id,name\n1,x".as_bytes());
    let grid = parse(bytes.as_slice(), &CsvConfig::utf8()).unwrap();
    assert_eq!(grid.rows()[0], vec!["id", "name"]);
}

#[test]
fn test_strict_decoding_rejects_invalid_bytes() {
    let config = CsvConfig::utf8().with_strict_decoding(true);
    let err = parse(&[b'a', b',', 0xC3][..], &config).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
}

#[test]
fn test_encoding_from_codepage() {
    let config = CsvConfig::new().with_codepage(65001).unwrap();
    assert_eq!(config.encoding, encoding_rs::UTF_8);
    assert!(matches!(
        CsvConfig::new().with_codepage(1),
        Err(Error::InvalidArgument(_))
    ));
}

/// Reader that yields some bytes, then fails.
struct FailingReader {
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "boom"));
        }
        self.served = true;
        let chunk = b"a,b\n1,";
        buf[..chunk.len()].copy_from_slice(chunk);
        Ok(chunk.len())
    }
}

#[test]
fn test_read_failure_aborts_parse() {
    let err = parse(FailingReader { served: false }, &CsvConfig::default()).unwrap_err();
    match err {
        Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
        other => panic!("unexpected error: {other:?}"),
    }
}

proptest! {
    #[test]
    fn prop_formula_tokens(rest in ".*") {
        let token = format!("={rest}");
        let expected = rest.replace('"', "");
        prop_assert_eq!(classify(&token), TypedCell::FormulaLiteral(expected));
    }

    #[test]
    fn prop_quoted_tokens(rest in ".*") {
        let token = format!("\"{rest}");
        let expected = token.replace('"', "");
        prop_assert_eq!(classify(&token), TypedCell::QuotedString(expected));
    }

    #[test]
    fn prop_other_tokens_are_numeric(token in "[^=\"].*") {
        let expected = token.replace('"', "");
        prop_assert_eq!(classify(&token), TypedCell::Numeric(expected));
    }

    #[test]
    fn prop_classified_text_has_no_quotes(token in ".*") {
        prop_assert!(!classify(&token).text().contains('"'));
    }

    #[test]
    fn prop_split_rejoins_to_line(line in "[a-z,\"]{0,24}") {
        let tokens = split_line(&line);
        if line.contains(',') {
            // Dropped trailing empties only ever remove trailing commas
            let joined = tokens.join(",");
            prop_assert!(line.starts_with(&joined));
            prop_assert!(line[joined.len()..].chars().all(|c| c == ','));
            prop_assert!(tokens.last().is_none_or(|t| !t.is_empty()));
        } else {
            prop_assert_eq!(tokens, vec![line.clone()]);
        }
    }

    #[test]
    fn prop_row_count_matches_lines(lines in prop::collection::vec("[a-z0-9,]{0,8}", 0..16)) {
        let text = lines.iter().map(|l| format!("{l}\n")).collect::<String>();
        let grid = parse(text.as_bytes(), &CsvConfig::utf8()).unwrap();
        prop_assert_eq!(grid.len(), lines.len());
    }
}
