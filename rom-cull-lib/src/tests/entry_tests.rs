use super::*;
use rom_cull_core::ParseError;
use rom_cull_core::build::BuildKeyword;

#[test]
fn new_parses_filename_of_full_path() {
    let entry = Entry::new("/roms/snes/Game (USA) (Rev 1).sfc", 1024).unwrap();
    assert_eq!(entry.file_name(), "Game (USA) (Rev 1).sfc");
    assert_eq!(entry.title_key(), "Game.sfc");
    assert_eq!(entry.size_bytes(), 1024);
    assert!(entry.tags().contains("USA"));
    assert_eq!(entry.build_rank().keyword, Some(BuildKeyword::Revision));
    assert_eq!(entry.disc_number(), -1);
}

#[test]
fn directory_brackets_do_not_affect_tags() {
    let entry = Entry::new("/roms/(unsorted)/Game (Japan).gb", 1).unwrap();
    assert_eq!(entry.tags().len(), 1);
    assert!(entry.tags().contains("Japan"));
}

#[test]
fn new_rejects_malformed_filename() {
    let err = Entry::new("/roms/Game (USA.bin", 1).unwrap_err();
    assert!(matches!(
        err,
        CullError::Parse {
            source: ParseError::MalformedFilename { .. },
            ..
        }
    ));
}

#[test]
fn new_rejects_unknown_disc_sequence() {
    let err = Entry::new("/roms/Game (Disc X1).bin", 1).unwrap_err();
    assert!(matches!(
        err,
        CullError::Parse {
            source: ParseError::UnknownDiscSequence { .. },
            ..
        }
    ));
}

#[test]
fn disc_entries_know_their_siblings() {
    let disc1 = Entry::new("Game (Disc 1).bin", 1).unwrap();
    let disc2 = Entry::new("Game (Disc 2).bin", 1).unwrap();
    let beta = Entry::new("Game (Disc 1)(Beta).bin", 1).unwrap();
    assert_eq!(disc2.disc_number(), 2);
    assert!(disc2.is_sibling_of(&disc1));
    assert!(!disc2.is_sibling_of(&beta));
}

#[test]
fn from_path_reads_file_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Game (USA).bin");
    std::fs::write(&path, vec![0u8; 300]).unwrap();

    let entry = Entry::from_path(&path).unwrap();
    assert_eq!(entry.size_bytes(), 300);
    assert_eq!(entry.path(), path.as_path());
}

#[test]
fn from_path_missing_file_is_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Entry::from_path(dir.path().join("Gone (USA).bin")).unwrap_err();
    assert!(matches!(err, CullError::FileAccess { .. }));
}

#[test]
fn load_entries_collects_tags_and_aborts_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("Game (USA).bin");
    let also_good = dir.path().join("Game (Europe).bin");
    let bad = dir.path().join("Game (USA.bin");
    for p in [&good, &also_good, &bad] {
        std::fs::write(p, b"rom").unwrap();
    }

    let mut collector = TagCollector::new();
    let entries = load_entries(
        &[good.clone(), also_good.clone()],
        &mut collector,
        &crate::progress::no_progress,
    )
    .unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(collector.len(), 2);

    let mut collector = TagCollector::new();
    let result = load_entries(
        &[good, bad, also_good],
        &mut collector,
        &crate::progress::no_progress,
    );
    assert!(matches!(result, Err(CullError::Parse { .. })));
}

#[cfg(unix)]
#[test]
fn non_utf8_names_are_rejected_instead_of_merged() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    // Both names would decode lossily to "Game\u{FFFD} (...)" and share a title key
    for raw in [&b"Game\xFF (USA).bin"[..], &b"Game\xFE (Japan).bin"[..]] {
        let path = Path::new("/roms").join(OsStr::from_bytes(raw));
        let err = Entry::new(path, 1).unwrap_err();
        assert!(matches!(err, CullError::NonUtf8Name { .. }));
    }
}
