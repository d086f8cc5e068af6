use super::*;

#[test]
fn test_missing_file_gives_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(
        load_settings_from(&tmp.path().join("settings.toml")),
        Settings::default()
    );
}

#[test]
fn test_corrupt_file_gives_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "last_source_dir = [not toml").unwrap();
    assert_eq!(load_settings_from(&path), Settings::default());
}

#[test]
fn test_save_and_load() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.remember_source(Path::new("/roms/snes"), 12);
    settings.remember_export(Path::new("/export/snes"));
    save_settings_to(&settings, &path).unwrap();

    assert!(!path.with_extension("toml.tmp").exists());
    assert_eq!(load_settings_from(&path), settings);
}

#[test]
fn test_recent_moves_to_front() {
    let mut settings = Settings::default();
    settings.remember_source(Path::new("/roms/snes"), 1);
    settings.remember_source(Path::new("/roms/nes"), 2);
    settings.remember_source(Path::new("/roms/snes"), 3);

    let paths: Vec<_> = settings.recent.iter().map(|r| r.path.clone()).collect();
    assert_eq!(
        paths,
        vec![PathBuf::from("/roms/snes"), PathBuf::from("/roms/nes")]
    );
    assert_eq!(settings.recent[0].game_count, 3);
    assert_eq!(settings.last_source_dir, Some(PathBuf::from("/roms/snes")));
}

#[test]
fn test_recent_is_bounded() {
    let mut settings = Settings::default();
    for i in 0..15 {
        settings.remember_source(&PathBuf::from(format!("/roms/{i}")), i);
    }
    assert_eq!(settings.recent.len(), MAX_RECENT);
    assert_eq!(settings.recent[0].path, PathBuf::from("/roms/14"));
}

#[test]
fn test_resolve_source_dir_priority() {
    let mut settings = Settings::default();
    assert_eq!(
        resolve_source_dir(Some(PathBuf::from("/cli")), &settings),
        PathBuf::from("/cli")
    );

    settings.last_source_dir = Some(PathBuf::from("/saved"));
    assert_eq!(resolve_source_dir(None, &settings), PathBuf::from("/saved"));
    assert_eq!(
        resolve_source_dir(Some(PathBuf::from("/cli")), &settings),
        PathBuf::from("/cli")
    );
}
