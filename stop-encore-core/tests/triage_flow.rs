use std::fs;
use std::path::{Path, PathBuf};

use stop_encore_core::*;

const GAMELIST: &str = r#"<?xml version="1.0"?>
<gameList>
    <folder>
        <path>./Hacks</path>
        <name>Hacks</name>
    </folder>
    <game id="1">
        <path>./Super Mario World (USA).zip</path>
        <name>Super Mario World</name>
        <desc>Mario &amp; Luigi visit Dinosaur Land.</desc>
        <image>./media/images/smw.png</image>
        <marquee>./media/marquees/smw.png</marquee>
        <releasedate>19901121T000000</releasedate>
        <players>1-2</players>
    </game>
    <game id="2">
        <path>./Super Mario World (Europe).zip</path>
        <name>Super Mario World</name>
        <image>./media/images/smw-eu.png</image>
    </game>
    <game>
        <path>./F-Zero (USA).zip</path>
        <name>F-Zero</name>
        <video>./media/videos/fzero.mp4</video>
    </game>
    <game>
        <path>./2020 Super Baseball (USA).zip</path>
        <name>2020 Super Baseball</name>
    </game>
</gameList>
"#;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A `snes` system directory with a gamelist, roms and part of the media.
fn system_dir(tmp: &tempfile::TempDir) -> PathBuf {
    let dir = tmp.path().join("snes");
    write(&dir, "gamelist.xml", GAMELIST);
    write(&dir, "Super Mario World (USA).zip", "smw-us");
    write(&dir, "Super Mario World (Europe).zip", "smw-eu");
    write(&dir, "F-Zero (USA).zip", "fzero");
    write(&dir, "2020 Super Baseball (USA).zip", "baseball");
    write(&dir, "media/images/smw.png", "png");
    write(&dir, "media/videos/fzero.mp4", "mp4");
    dir
}

#[test]
fn open_marks_duplicates_and_skips_folders() {
    let tmp = tempfile::tempdir().unwrap();
    let session = Session::open(&system_dir(&tmp)).unwrap();

    assert_eq!(session.catalog().system_name(), "snes");
    assert_eq!(session.catalog().len(), 4);
    assert!(session.catalog().duplicates().contains("Super Mario World"));
    assert_eq!(session.catalog().duplicates().len(), 1);

    let first = &session.catalog().records()[0];
    assert_eq!(first.description(), "Mario & Luigi visit Dinosaur Land.");
    assert_eq!(first.get("players"), Some("1-2"));
}

#[test]
fn triage_save_reload_and_export() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = system_dir(&tmp);
    let mut session = Session::open(&dir).unwrap();

    session.classify_selected(Bucket::Accepted); // SMW (USA)
    session.classify_selected(Bucket::Rejected); // SMW (Europe)
    session.classify_selected(Bucket::Accepted); // F-Zero
    session.classify_selected(Bucket::Hold); // 2020 Super Baseball
    session.save_progress(false).unwrap();

    let saved = fs::read_to_string(dir.join("snes_progress.txt")).unwrap();
    assert_eq!(
        saved,
        "Accepted:\n\
         ./Super Mario World (USA).zip\n\
         ./F-Zero (USA).zip\n\
         \n\
         Rejected:\n\
         ./Super Mario World (Europe).zip\n\
         \n\
         On Hold:\n\
         ./2020 Super Baseball (USA).zip\n"
    );

    let mut session = Session::open(&dir).unwrap();
    session.load_progress().unwrap();
    session.set_filter_mode(FilterMode::Accepted);
    let accepted: Vec<_> = session.visible_records().map(|r| r.name()).collect();
    assert_eq!(accepted, vec!["Super Mario World", "F-Zero"]);

    let dest = tmp.path().join("export");
    let summary = session.export(&dest, &|_| {}).unwrap();
    assert_eq!(summary.games, 2);
    // Two roms, one image, one video; the marquee does not exist.
    assert_eq!(summary.files_copied, 4);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].field, "marquee");

    assert!(dest.join("media/images/smw.png").is_file());
    assert!(dest.join("media/videos/fzero.mp4").is_file());
    assert!(!dest.join("Super Mario World (Europe).zip").exists());

    let exported = Catalog::load(&dest).unwrap();
    assert_eq!(exported.len(), 2);
    assert_eq!(exported.records()[0], session.catalog().records()[0]);
    assert_eq!(exported.records()[1], session.catalog().records()[2]);
}

#[test]
fn progress_paths_for_unknown_games_are_dropped() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = system_dir(&tmp);
    fs::write(
        dir.join("snes_progress.txt"),
        "Accepted:\n./F-Zero (USA).zip\n./Removed.zip\n\nRejected:\n\nOn Hold:\n",
    )
    .unwrap();

    let mut session = Session::open(&dir).unwrap();
    let summary = session.load_progress().unwrap().unwrap();
    assert_eq!(summary, RestoreSummary { restored: 1, dropped: 1 });
    assert_eq!(session.counts().accepted, 1);
    assert_eq!(session.counts().untagged, 3);
}

#[test]
fn export_with_nothing_accepted_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let session = Session::open(&system_dir(&tmp)).unwrap();
    let err = session.export(&tmp.path().join("out"), &|_| {}).unwrap_err();
    assert!(matches!(err, TriageError::NothingToExport));
    assert_eq!(err.to_string(), "No accepted games to export");
}
