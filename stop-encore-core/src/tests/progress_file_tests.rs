use super::*;
use crate::record::GameRecord;

fn catalog_in(dir: &Path) -> Catalog {
    Catalog::from_records(
        dir,
        vec![
            GameRecord::new("a.zip", "Alpha"),
            GameRecord::new("b.zip", "Alpha"),
            GameRecord::new("c.zip", "Beta"),
        ],
    )
}

#[test]
fn test_write_exact_grammar() {
    let catalog = catalog_in(Path::new("/roms/snes"));
    let mut triage = TriageState::new();
    triage.classify_path("a.zip", Bucket::Accepted);
    triage.classify_path("b.zip", Bucket::Rejected);

    let mut out = Vec::new();
    write_progress(&mut out, &catalog, &triage).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Accepted:\na.zip\n\nRejected:\nb.zip\n\nOn Hold:\n"
    );
}

#[test]
fn test_parse_sections() {
    let text = "stray line\nAccepted:\n a.zip \n\nRejected:\nb.zip\nzzz.zip\n\nOn Hold:\nc.zip\n";
    let saved = parse_progress(text.as_bytes()).unwrap();
    assert_eq!(saved.accepted, vec!["a.zip"]);
    assert_eq!(saved.rejected, vec!["b.zip", "zzz.zip"]);
    assert_eq!(saved.hold, vec!["c.zip"]);
}

#[test]
fn test_restore_drops_unknown_paths() {
    let catalog = catalog_in(Path::new("/roms/snes"));
    let saved = SavedProgress {
        accepted: vec!["a.zip".into()],
        rejected: vec!["gone.zip".into()],
        hold: vec!["c.zip".into()],
    };
    let mut triage = TriageState::new();
    let summary = restore(&saved, &catalog, &mut triage);

    assert_eq!(summary, RestoreSummary { restored: 2, dropped: 1 });
    let counts = triage.counts(&catalog);
    assert_eq!((counts.accepted, counts.rejected, counts.hold), (1, 0, 1));
}

#[test]
fn test_restore_keeps_buckets_disjoint() {
    let catalog = catalog_in(Path::new("/roms/snes"));
    let saved = SavedProgress {
        accepted: vec!["a.zip".into()],
        rejected: vec![],
        hold: vec!["a.zip".into()],
    };
    let mut triage = TriageState::new();
    restore(&saved, &catalog, &mut triage);
    assert_eq!(
        triage.status_of_path("a.zip"),
        crate::triage::TriageStatus::Tagged(Bucket::Hold)
    );
    assert_eq!(triage.tagged_len(), 1);
}

#[test]
fn test_save_requires_overwrite_confirmation() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = catalog_in(tmp.path());
    let path = progress_file_path(&catalog);
    fs::write(&path, "keep me").unwrap();

    let mut triage = TriageState::new();
    triage.classify_path("a.zip", Bucket::Accepted);

    let err = save_progress(&path, &catalog, &triage, false).unwrap_err();
    assert!(matches!(err, TriageError::ProgressExists(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

    save_progress(&path, &catalog, &triage, true).unwrap();
    assert!(fs::read_to_string(&path).unwrap().starts_with("Accepted:\na.zip\n"));
}

#[test]
fn test_save_and_load_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = catalog_in(tmp.path());
    let path = progress_file_path(&catalog);

    let mut triage = TriageState::new();
    triage.classify_path("a.zip", Bucket::Accepted);
    triage.classify_path("b.zip", Bucket::Rejected);
    triage.classify_path("c.zip", Bucket::Hold);
    save_progress(&path, &catalog, &triage, false).unwrap();

    let saved = load_progress(&path).unwrap().unwrap();
    let mut restored = TriageState::new();
    restore(&saved, &catalog, &mut restored);
    for record in catalog.records() {
        assert_eq!(restored.bucket_of(record), triage.bucket_of(record));
    }
}

#[test]
fn test_load_without_file() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(load_progress(&tmp.path().join("none.txt")).unwrap(), None);
}

#[test]
fn test_progress_file_path_uses_system_name() {
    let catalog = catalog_in(Path::new("/roms/snes"));
    assert_eq!(
        progress_file_path(&catalog),
        PathBuf::from("/roms/snes/snes_progress.txt")
    );
}
