use super::*;
use std::path::Path;

fn catalog() -> Catalog {
    Catalog::from_records(
        Path::new("/roms/snes"),
        vec![
            GameRecord::new("a.zip", "Alpha"),
            GameRecord::new("b.zip", "Alpha"),
            GameRecord::new("c.zip", "Beta"),
        ],
    )
}

#[test]
fn test_untagged_by_default() {
    let catalog = catalog();
    let triage = TriageState::new();
    for record in catalog.records() {
        assert_eq!(triage.bucket_of(record), TriageStatus::Untagged);
    }
}

#[test]
fn test_classify_moves_between_buckets() {
    let catalog = catalog();
    let record = &catalog.records()[0];
    let mut triage = TriageState::new();

    for bucket in [Bucket::Accepted, Bucket::Hold, Bucket::Rejected, Bucket::Accepted] {
        triage.classify(record, bucket);
        assert_eq!(triage.bucket_of(record), TriageStatus::Tagged(bucket));
        let memberships = Bucket::ALL
            .iter()
            .filter(|b| triage.is_in(record, **b))
            .count();
        assert_eq!(memberships, 1);
    }
    assert_eq!(triage.tagged_len(), 1);
}

#[test]
fn test_classify_is_idempotent() {
    let catalog = catalog();
    let record = &catalog.records()[2];
    let mut once = TriageState::new();
    once.classify(record, Bucket::Hold);

    let mut twice = TriageState::new();
    twice.classify(record, Bucket::Hold);
    twice.classify(record, Bucket::Hold);

    assert_eq!(once.counts(&catalog), twice.counts(&catalog));
    assert_eq!(
        twice.members(&catalog, Bucket::Hold).count(),
        once.members(&catalog, Bucket::Hold).count()
    );
}

#[test]
fn test_same_name_different_path_are_distinct() {
    let catalog = catalog();
    let mut triage = TriageState::new();
    triage.classify(&catalog.records()[0], Bucket::Accepted);
    assert_eq!(
        triage.bucket_of(&catalog.records()[1]),
        TriageStatus::Untagged
    );
}

#[test]
fn test_counts() {
    let catalog = catalog();
    let mut triage = TriageState::new();
    triage.classify(&catalog.records()[0], Bucket::Accepted);
    triage.classify(&catalog.records()[1], Bucket::Rejected);

    let counts = triage.counts(&catalog);
    assert_eq!(
        counts,
        TriageCounts {
            total: 3,
            accepted: 1,
            rejected: 1,
            hold: 0,
            untagged: 1,
        }
    );
}

#[test]
fn test_members_follow_catalog_order() {
    let catalog = catalog();
    let mut triage = TriageState::new();
    triage.classify(&catalog.records()[2], Bucket::Accepted);
    triage.classify(&catalog.records()[0], Bucket::Accepted);

    let paths: Vec<&str> = triage
        .members(&catalog, Bucket::Accepted)
        .map(|r| r.path())
        .collect();
    assert_eq!(paths, vec!["a.zip", "c.zip"]);
}

#[test]
fn test_bucket_from_str() {
    assert_eq!("accepted".parse::<Bucket>(), Ok(Bucket::Accepted));
    assert_eq!("R".parse::<Bucket>(), Ok(Bucket::Rejected));
    assert_eq!("on-hold".parse::<Bucket>(), Ok(Bucket::Hold));
    assert!("maybe".parse::<Bucket>().is_err());
}
