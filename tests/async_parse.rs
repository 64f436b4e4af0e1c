#![cfg(feature = "async")]

use fbkscan::{parse_backup_async, BackupFormat, ParserConfig};

#[tokio::test]
async fn async_matches_sync() {
    let mut buf = Vec::from(&b"\x00gbak:WI-V3.0\n\x00"[..]);
    buf.extend_from_slice(b"\x00CUSTOMER\x00someone@example.com\x00");
    buf.extend(std::iter::repeat(0u8).take(64));

    let sync = fbkscan::parse_backup(&buf, Some("a.fbk"));
    let result = parse_backup_async(buf, Some(String::from("a.fbk")), ParserConfig::default()).await;

    assert_eq!(result, sync);
    assert_eq!(result.file_info.format, BackupFormat::RawFirebird);
}

#[tokio::test]
async fn async_too_small() {
    let result = parse_backup_async(vec![1, 2, 3], None, ParserConfig::default()).await;
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
}
