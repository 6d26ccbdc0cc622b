//! # Loader Tests

use std::fs;

use ls8_core::common::LoaderError;
use ls8_core::sim::loader::{load_binary, load_program, parse_program};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn parse_skips_comments_and_blank_lines() {
    let text = "# header\n\n10000010 # LDI R0,8\n00000000\n  00001000  \n\n01000111\n00000000\n00000001 # HLT\n";
    assert_eq!(
        parse_program(text).unwrap(),
        vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]
    );
}

#[test]
fn parse_accepts_crlf() {
    assert_eq!(parse_program("00000001\r\n").unwrap(), vec![0x01]);
}

#[test]
fn parse_reports_first_bad_line() {
    let err = parse_program("00000001\n# ok\n0102\n").unwrap_err();
    match err {
        LoaderError::InvalidLine { line, text } => {
            assert_eq!(line, 3);
            assert_eq!(text, "0102");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_text_by_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prog.LS8");
    fs::write(&path, "10000010\n00000000\n00001000\n00000001\n").unwrap();
    assert_eq!(load_program(&path).unwrap(), vec![0x82, 0, 8, 1]);
}

#[test]
fn load_raw_binary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prog.bin");
    fs::write(&path, [0x82, 0, 8, 1]).unwrap();
    assert_eq!(load_program(&path).unwrap(), vec![0x82, 0, 8, 1]);
    assert_eq!(load_binary(&path).unwrap(), vec![0x82, 0, 8, 1]);
}

#[test]
fn load_rejects_oversize_image() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("big.bin");
    fs::write(&path, vec![0u8; 300]).unwrap();
    assert!(matches!(
        load_program(&path),
        Err(LoaderError::TooLarge { len: 300 })
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.ls8");
    let err = load_program(&path).unwrap_err();
    assert!(matches!(err, LoaderError::Io { .. }));
    assert!(err.to_string().contains("absent.ls8"));
}
