use super::*;

fn session() -> Session {
    Session::new(Catalog::from_records(
        Path::new("/roms/snes"),
        vec![
            GameRecord::new("./a.zip", "Alpha"),
            GameRecord::new("./b.zip", "Bravo"),
            GameRecord::new("./c.zip", "Charlie"),
            GameRecord::new("./d.zip", "Alpha"),
        ],
    ))
}

fn selected_path(session: &Session) -> Option<&str> {
    session.selected_record().map(|r| r.path())
}

#[test]
fn test_new_session_shows_everything() {
    let session = session();
    assert_eq!(session.visible(), &[0, 1, 2, 3]);
    assert_eq!(session.selected(), 0);
    assert_eq!(session.counts().untagged, 4);
}

#[test]
fn test_classify_advances_selection() {
    let mut session = session();
    assert_eq!(session.classify_selected(Bucket::Accepted).as_deref(), Some("./a.zip"));
    assert_eq!(selected_path(&session), Some("./b.zip"));
    session.classify_selected(Bucket::Rejected);
    assert_eq!(selected_path(&session), Some("./c.zip"));

    let counts = session.counts();
    assert_eq!((counts.accepted, counts.rejected, counts.untagged), (1, 1, 2));
}

#[test]
fn test_classify_last_row_stays() {
    let mut session = session();
    assert!(session.select(3));
    session.classify_selected(Bucket::Hold);
    assert_eq!(session.selected(), 3);
    assert_eq!(selected_path(&session), Some("./d.zip"));
}

#[test]
fn test_classify_under_untagged_filter() {
    let mut session = session();
    session.set_filter_mode(FilterMode::Untagged);
    session.classify_selected(Bucket::Accepted);

    // The tagged row drops out; the next untagged game takes its place.
    assert_eq!(session.visible().len(), 3);
    assert_eq!(selected_path(&session), Some("./b.zip"));
}

#[test]
fn test_classify_empty_view() {
    let mut session = session();
    session.set_filter_mode(FilterMode::Accepted);
    assert!(session.visible().is_empty());
    assert_eq!(session.classify_selected(Bucket::Accepted), None);
}

#[test]
fn test_select_out_of_range() {
    let mut session = session();
    assert!(!session.select(10));
    assert_eq!(session.selected(), 0);
}

#[test]
fn test_letter_filter_clamps_selection() {
    let mut session = session();
    session.select(3);
    session.set_letter(LetterFilter::Letter('B'));
    assert_eq!(session.visible(), &[1]);
    assert_eq!(session.selected(), 0);
}

#[test]
fn test_classify_path() {
    let mut session = session();
    session.classify_path("./c.zip", Bucket::Rejected).unwrap();
    assert_eq!(
        session.status_of(&session.catalog().records()[2]),
        TriageStatus::Tagged(Bucket::Rejected)
    );
    assert!(matches!(
        session.classify_path("./zzz.zip", Bucket::Accepted),
        Err(TriageError::NotFound(_))
    ));
}

#[test]
fn test_row_style_marks_duplicates() {
    let mut session = session();
    let alpha = session.catalog().records()[0].clone();
    assert_eq!(session.row_style(&alpha), RowStyle::DuplicateUntagged);
    session.classify_path("./a.zip", Bucket::Hold).unwrap();
    assert_eq!(session.row_style(&alpha), RowStyle::Hold);
}

#[test]
fn test_save_and_load_progress() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("snes");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(
        dir.join("gamelist.xml"),
        "<gameList>\
           <game><path>./a.zip</path><name>Alpha</name></game>\
           <game><path>./b.zip</path><name>Bravo</name></game>\
         </gameList>",
    )
    .unwrap();

    let mut session = Session::open(&dir).unwrap();
    assert_eq!(session.load_progress().unwrap(), None);

    session.classify_selected(Bucket::Accepted);
    session.classify_selected(Bucket::Rejected);
    let path = session.save_progress(false).unwrap();
    assert!(path.ends_with("snes_progress.txt"));
    assert!(matches!(
        session.save_progress(false),
        Err(TriageError::ProgressExists(_))
    ));

    let mut reopened = Session::open(&dir).unwrap();
    let summary = reopened.load_progress().unwrap().unwrap();
    assert_eq!(summary, RestoreSummary { restored: 2, dropped: 0 });
    let counts = reopened.counts();
    assert_eq!((counts.accepted, counts.rejected, counts.untagged), (1, 1, 0));
}
