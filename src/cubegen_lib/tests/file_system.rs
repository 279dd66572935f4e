use std::fs;

use crate::file_system::FileOperations;
use crate::file_system::FileSystemInteractor;

#[test]
fn write_utf8_truncate_test() {
    let tempdir = tempdir::TempDir::new("fs_test").unwrap();
    let filepath = tempdir.path().join("scene.dsl");
    let fsi = FileSystemInteractor { dry_run: false };

    fsi.write_utf8_truncate(&filepath, "shape_create cube_0\n")
        .unwrap();
    assert_eq!(fsi.read_utf8(&filepath).unwrap(), "shape_create cube_0\n");

    // A second write truncates, it does not append.
    fsi.write_utf8_truncate(&filepath, "").unwrap();
    assert_eq!(fsi.read_utf8(&filepath).unwrap(), "");
}

#[test]
fn write_dry_run_test() {
    let tempdir = tempdir::TempDir::new("fs_test").unwrap();
    let filepath = tempdir.path().join("scene.dsl");
    let fsi = FileSystemInteractor { dry_run: true };

    fsi.write_utf8_truncate(&filepath, "shape_create cube_0\n")
        .unwrap();
    assert!(!filepath.exists());
}

#[test]
fn read_utf8_invalid_test() {
    let tempdir = tempdir::TempDir::new("fs_test").unwrap();
    let filepath = tempdir.path().join("scene.dsl");
    let fsi = FileSystemInteractor { dry_run: false };

    fs::write(&filepath, [0xc0, 0xaf]).unwrap();
    assert!(fsi.read_utf8(&filepath).is_err());
}

#[test]
fn canonicalize_missing_test() {
    let tempdir = tempdir::TempDir::new("fs_test").unwrap();
    let fsi = FileSystemInteractor { dry_run: false };

    assert!(fsi.canonicalize(&tempdir.path().join("missing")).is_err());
}
