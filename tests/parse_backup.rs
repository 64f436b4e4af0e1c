use fbkscan::{parse_backup, parse_backup_with, BackupFormat, FieldValue, ParseMode, ParserConfig};

const SEVENZ_MAGIC: [u8; 6] = [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C];
const MB: u64 = 1024 * 1024;

/// A raw gbak stream with one definition record per table, each followed by
/// a little readable row data.
fn raw_backup(tables: &[&str]) -> Vec<u8> {
    let mut buf = Vec::from(&b"\x00\x02gbak:WI-V2.5.9.27139 Firebird 2.5\n\x00\x00"[..]);
    for (i, t) in tables.iter().enumerate() {
        buf.extend_from_slice(&[0x00, 0x1E]);
        buf.extend_from_slice(t.as_bytes());
        buf.push(0x00);
        buf.extend_from_slice(format!("row{:04}@example.com", i).as_bytes());
        buf.push(0x00);
        buf.extend(std::iter::repeat(0x01).take(200));
    }
    return buf;
}

/// A 7zip signature header with a correct start header CRC, followed by `payload`.
fn sevenz_archive(payload: &[u8]) -> Vec<u8> {
    let mut start = Vec::new();
    start.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    start.extend_from_slice(&64u64.to_le_bytes());
    start.extend_from_slice(&0u32.to_le_bytes());
    let crc = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC).checksum(&start);

    let mut buf = Vec::from(&SEVENZ_MAGIC[..]);
    buf.extend_from_slice(&[0, 4]);
    buf.extend_from_slice(&crc.to_le_bytes());
    buf.extend_from_slice(&start);
    buf.extend_from_slice(payload);
    return buf;
}

fn utf16le(s: &str) -> Vec<u8> {
    return s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
}

fn assert_sorted(result: &fbkscan::FirebirdParseResult) {
    assert!(result
        .tables
        .windows(2)
        .all(|w| w[0].priority() <= w[1].priority()));
}

#[test]
fn six_tables_full_match() {
    let buf = raw_backup(&["DEPARTMENT", "SHIPMENTXN", "CARRIER", "CUSTOMER", "MBDETAIL", "SHIPTO"]);
    let result = parse_backup(&buf, Some("PM.fbk"));

    assert!(result.success);
    assert_eq!(result.parse_mode, ParseMode::StructuralEstimate);
    assert_eq!(result.confidence, 0.8);
    assert_eq!(result.file_info.format, BackupFormat::RawFirebird);
    assert!(result.file_info.is_valid_archive);
    assert_eq!(result.file_info.size_bytes, buf.len() as u64);
    assert_eq!(result.file_info.file_name.as_deref(), Some("PM.fbk"));
    assert_eq!(
        result.database_version.as_deref(),
        Some("gbak:WI-V2.5.9.27139 Firebird 2.5")
    );
    assert!(result.errors.is_empty());

    let names: Vec<&str> = result.tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        ["CUSTOMER", "SHIPTO", "SHIPMENTXN", "MBDETAIL", "CARRIER", "DEPARTMENT"]
    );
    assert_sorted(&result);
}

#[test]
fn byte_ranges_stay_inside_buffer() {
    let buf = raw_backup(&["CARRIER", "CUSTOMER", "DEPARTMENT"]);
    let result = parse_backup(&buf, None);
    for t in result.tables.iter() {
        let r = t.byte_range.unwrap();
        assert!(r.start < r.end && r.end <= buf.len());
    }
}

#[test]
fn samples_attached_from_row_data() {
    let buf = raw_backup(&["CUSTOMER", "CARRIER"]);
    let result = parse_backup(&buf, None);

    let customer = result.table("CUSTOMER").unwrap();
    assert_eq!(customer.sample_records.len(), 1);
    assert_eq!(
        customer.sample_records[0].get("_raw_sample"),
        Some(&FieldValue::Text(String::from("row0000@example.com")))
    );
    assert_eq!(customer.columns[0], "CUSTOMERID");
}

#[test]
fn confidence_follows_evidence() {
    let full = parse_backup(
        &raw_backup(&["CUSTOMER", "SHIPTO", "SHIPMENTXN", "PACKAGEXN", "CARRIER", "DEPARTMENT"]),
        None,
    );
    let partial = parse_backup(&raw_backup(&["CUSTOMER", "SHIPTO"]), None);
    let markers_only = parse_backup(&raw_backup(&[]), None);

    assert!(full.confidence > partial.confidence);
    assert!(partial.confidence > markers_only.confidence);
    assert_eq!(partial.confidence, 0.6);
    assert_eq!(markers_only.confidence, 0.4);
}

#[test]
fn markers_without_tables_fall_back_to_size() {
    let result = parse_backup(&raw_backup(&[]), None);

    assert!(result.success);
    assert_eq!(result.file_info.format, BackupFormat::RawFirebird);
    assert_eq!(result.tables.len(), 12);
    assert!(result.tables.iter().all(|t| t.byte_range.is_none()));
    assert!(result.tables.iter().all(|t| t.sample_records.is_empty()));
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("could not locate PostalMate table structures"));
    assert_sorted(&result);
}

#[test]
fn relation_name_marker_alone_is_firebird() {
    let mut buf = vec![0u8; 20_000];
    buf[15_000..15_017].copy_from_slice(b"RDB$RELATION_NAME");
    buf[15_018..15_024].copy_from_slice(b"SHIPTO");
    let result = parse_backup(&buf, None);

    assert_eq!(result.file_info.format, BackupFormat::RawFirebird);
    assert_eq!(result.tables.len(), 1);
    assert_eq!(result.database_version, None);
}

#[test]
fn archive_without_backup_name() {
    let buf = sevenz_archive(&[0xA5; 512]);
    let result = parse_backup(&buf, Some("upload.7z"));

    assert!(!result.success);
    assert!(result.tables.is_empty());
    assert_eq!(result.file_info.format, BackupFormat::SevenZip);
    assert!(result.file_info.is_valid_archive);
    assert_eq!(result.file_info.contained_files, Some(vec![]));
    assert_eq!(result.file_info.archive_version.as_deref(), Some("0.4"));
    assert_eq!(result.file_info.start_header_crc_valid, Some(true));
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].ends_with("Found files: none detected"));
}

#[test]
fn compressed_archive_falls_back_to_size() {
    let mut payload = vec![0xA5u8; 256];
    payload.extend_from_slice(&[0x15, 0x00]);
    payload.extend(utf16le("TMPBCK"));
    payload.extend_from_slice(&[0x00, 0x00]);
    payload.extend(std::iter::repeat(0x5Au8).take(1024));
    let buf = sevenz_archive(&payload);
    let result = parse_backup(&buf, None);

    assert!(result.success);
    assert_eq!(result.confidence, 0.3);
    assert_eq!(result.file_info.contained_files, Some(vec![String::from("TMPBCK")]));
    assert_eq!(result.tables.len(), 12);
    assert!(result.tables.iter().all(|t| t.byte_range.is_none()));
    assert!(result.errors[0].contains("compressed archive"));
    assert_sorted(&result);
}

#[test]
fn archive_with_visible_markers() {
    let mut payload = Vec::from(&b"\x00POSTALMATE.fbk\x00"[..]);
    payload.extend(raw_backup(&["INVOICETBL", "CUSTOMER"]));
    let buf = sevenz_archive(&payload);
    let result = parse_backup(&buf, None);

    assert!(result.success);
    assert_eq!(result.confidence, 0.6);
    assert_eq!(result.file_info.contained_files, Some(vec![String::from("POSTALMATE.fbk")]));
    assert_eq!(result.tables[0].name, "CUSTOMER");
    assert_eq!(result.tables[1].name, "INVOICETBL");
    assert!(result.tables.iter().all(|t| t.byte_range.is_some()));
    assert!(result.database_version.is_some());
}

#[test]
fn unknown_format() {
    let result = parse_backup(&[0u8; 64], None);

    assert!(!result.success);
    assert_eq!(result.file_info.format, BackupFormat::Unknown);
    assert!(!result.file_info.is_valid_archive);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains(".7z"));
    assert!(result.errors[0].contains(".fbk/.gbk"));
}

#[test]
fn flipped_magic_is_not_sevenz() {
    for i in 0..6 {
        let mut buf = sevenz_archive(&[0u8; 64]);
        buf[i] ^= 0x80;
        let result = parse_backup(&buf, None);
        assert_ne!(result.file_info.format, BackupFormat::SevenZip);
    }
}

#[test]
fn degenerate_inputs_never_fail() {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut random = Vec::with_capacity(10 * MB as usize);
    while random.len() < 10 * MB as usize {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        random.extend_from_slice(&state.to_le_bytes());
    }

    for buf in [Vec::new(), vec![0x41u8; 31], random] {
        let result = parse_backup(&buf, None);
        assert!(!result.success);
        assert!(!result.errors.is_empty());
        assert!(result.tables.is_empty());
        assert_eq!(result.file_info.size_bytes, buf.len() as u64);
    }
}

#[test]
fn reference_size_fallback_scaling() {
    let config = ParserConfig::default();
    let full = fbkscan::fallback::size_based_estimates(758 * MB, &config);
    let half = fbkscan::fallback::size_based_estimates(379 * MB, &config);
    assert_eq!(full[0].name, "CUSTOMER");
    assert_eq!(full[0].record_count, 90140);
    assert_eq!(half[0].record_count, 45070);
}

#[test]
fn tuned_bytes_per_column() {
    let buf = raw_backup(&["DEPARTMENT"]);
    let config = ParserConfig {
        bytes_per_column: 1,
        ..ParserConfig::default()
    };
    let default_count = parse_backup(&buf, None).tables[0].record_count;
    let tuned = parse_backup_with(&buf, None, &config).tables[0].record_count;
    assert_eq!(default_count, 5);
    assert_eq!(tuned, 116);
}

#[test]
fn unvalidated_column_width_does_not_panic() {
    let config = ParserConfig {
        bytes_per_column: usize::MAX,
        ..ParserConfig::default()
    };
    let mut buf = Vec::from(&b"gbak\x00CUSTOMER\x00"[..]);
    buf.extend(std::iter::repeat(0x01).take(64));
    let result = parse_backup_with(&buf, None, &config);

    assert!(result.success);
    assert_eq!(result.tables.len(), 1);
    assert_eq!(result.tables[0].record_count, 0);
}

#[test]
fn result_serializes_for_the_upload_screen() {
    let result = parse_backup(&raw_backup(&["CUSTOMER"]), Some("PM.fbk"));
    let v: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

    assert_eq!(v["success"], true);
    assert_eq!(v["parseMode"], "structural_estimate");
    assert_eq!(v["fileInfo"]["format"], "fbk");
    assert_eq!(v["fileInfo"]["fileName"], "PM.fbk");
    assert_eq!(v["tables"][0]["name"], "CUSTOMER");
    assert!(v["tables"][0]["sampleRecords"][0]["_raw_sample"].is_string());
}
