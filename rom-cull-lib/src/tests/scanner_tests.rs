use super::*;
use crate::progress::no_progress;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"rom").unwrap();
}

fn ignore(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn walk_lists_files_recursively_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("snes/b (USA).sfc"));
    touch(&root.join("snes/a (USA).sfc"));
    touch(&root.join("gb/c (Japan).gb"));

    let files = walk_roms(root, &[], &no_progress).unwrap();
    assert_eq!(
        files,
        vec![
            root.join("gb/c (Japan).gb"),
            root.join("snes/a (USA).sfc"),
            root.join("snes/b (USA).sfc"),
        ]
    );
}

#[test]
fn walk_skips_ignored_directories_at_any_depth() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("snes/game (USA).sfc"));
    touch(&root.join("snes/images/game (USA).png"));
    touch(&root.join("manuals/game.pdf"));

    let files = walk_roms(root, &ignore(&["images", "manuals"]), &no_progress).unwrap();
    assert_eq!(files, vec![root.join("snes/game (USA).sfc")]);
}

#[test]
fn walk_does_not_ignore_files_named_like_ignored_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("images"));

    let files = walk_roms(root, &ignore(&["images"]), &no_progress).unwrap();
    assert_eq!(files, vec![root.join("images")]);
}

#[test]
fn walk_missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = walk_roms(&dir.path().join("nope"), &[], &no_progress);
    assert!(matches!(result, Err(CullError::Walk(_))));
}

#[test]
fn load_or_scan_writes_then_reuses_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("roms");
    let cache = dir.path().join("roms.txt");
    touch(&root.join("a (USA).bin"));

    let first = FileList::load_or_scan(&root, &[], &cache, &no_progress).unwrap();
    assert_eq!(first.source(), ListSource::Walk);
    assert_eq!(first.len(), 1);
    assert!(cache.is_file());

    // New files are not seen until the snapshot is invalidated
    touch(&root.join("b (USA).bin"));
    let second = FileList::load_or_scan(&root, &[], &cache, &no_progress).unwrap();
    assert_eq!(second.source(), ListSource::Cache);
    assert_eq!(second.files(), first.files());

    assert!(invalidate_cache(&cache).unwrap());
    let third = FileList::load_or_scan(&root, &[], &cache, &no_progress).unwrap();
    assert_eq!(third.source(), ListSource::Walk);
    assert_eq!(third.len(), 2);
}

#[test]
fn read_file_list_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("roms.txt");
    fs::write(&cache, "/roms/a.bin\n\n  /roms/b.bin  \n").unwrap();

    let files = read_file_list(&cache).unwrap();
    assert_eq!(
        files,
        vec![PathBuf::from("/roms/a.bin"), PathBuf::from("/roms/b.bin")]
    );
}

#[test]
fn invalidate_missing_cache_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!invalidate_cache(&dir.path().join("roms.txt")).unwrap());
}

#[cfg(unix)]
#[test]
fn write_file_list_refuses_non_utf8_paths() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("roms.txt");
    let files = vec![
        PathBuf::from("/roms/a (USA).bin"),
        Path::new("/roms").join(OsStr::from_bytes(b"b\xFF (USA).bin")),
    ];

    let err = write_file_list(&cache, &files).unwrap_err();
    assert!(matches!(err, CullError::NonUtf8Name { .. }));
    assert!(!cache.exists());
}

#[test]
fn written_snapshot_reads_back_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("nested/roms.txt");
    let files = vec![
        PathBuf::from("/roms/a (USA).bin"),
        PathBuf::from("/roms/b (Japan) [!].bin"),
    ];

    write_file_list(&cache, &files).unwrap();
    assert_eq!(read_file_list(&cache).unwrap(), files);
}
