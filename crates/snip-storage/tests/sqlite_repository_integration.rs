use std::path::PathBuf;
use std::sync::Arc;

use snip_core::{Link, LinkId};
use snip_storage::{ReadRepository, Repository, SqliteRepository, StorageError};

async fn in_memory() -> SqliteRepository {
    let repo = SqliteRepository::in_memory().await.expect("open sqlite");
    repo.ensure_schema().await.expect("create schema");
    repo
}

/// A database file path unique to one test, removed on drop.
struct TempDb(PathBuf);

impl TempDb {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "snip-{name}-{}.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        Self(path)
    }

    fn url(&self) -> String {
        format!("sqlite://{}", self.0.display())
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn id(value: &str) -> LinkId {
    LinkId::new_unchecked(value)
}

fn link(value: &str, target: &str) -> Link {
    Link::new(id(value), target, "10.0.0.7")
}

#[tokio::test]
async fn insert_and_get_round_trips() {
    let repo = in_memory().await;
    let inserted = link("abc123", "https://example.com/some/path?q=1");

    repo.insert_if_absent(inserted.clone()).await.unwrap();

    let got = repo.get(&inserted.id).await.unwrap().unwrap();
    assert_eq!(got, inserted);
}

#[tokio::test]
async fn get_nonexistent() {
    let repo = in_memory().await;

    assert!(repo.get(&id("nope")).await.unwrap().is_none());
}

#[tokio::test]
async fn insert_conflicts_when_id_already_exists() {
    let repo = in_memory().await;

    repo.insert_if_absent(link("abc", "https://one.example"))
        .await
        .unwrap();

    let err = repo
        .insert_if_absent(link("abc", "https://two.example"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Conflict(ref conflicted) if conflicted == "abc"));

    let got = repo.get(&id("abc")).await.unwrap().unwrap();
    assert_eq!(got.target, "https://one.example");
}

#[tokio::test]
async fn ids_differing_in_case_are_distinct() {
    let repo = in_memory().await;

    repo.insert_if_absent(link("abc", "https://lower.example"))
        .await
        .unwrap();
    repo.insert_if_absent(link("ABC", "https://upper.example"))
        .await
        .unwrap();

    assert_eq!(
        repo.get(&id("ABC")).await.unwrap().unwrap().target,
        "https://upper.example"
    );
}

#[tokio::test]
async fn delete_removes_record_and_frees_id() {
    let repo = in_memory().await;
    let deleted = id("foo");

    repo.insert_if_absent(link("foo", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.delete(&deleted).await.unwrap());
    assert!(repo.get(&deleted).await.unwrap().is_none());
    assert!(!repo.delete(&deleted).await.unwrap());

    repo.insert_if_absent(link("foo", "https://again.example"))
        .await
        .unwrap();
}

#[tokio::test]
async fn query_without_schema_fails_as_query_error() {
    let repo = SqliteRepository::in_memory().await.unwrap();

    let err = repo.get(&id("abc")).await.unwrap_err();
    assert!(matches!(err, StorageError::Query(_)));
}

#[tokio::test]
async fn links_survive_reopening_the_database() {
    let db = TempDb::new("reopen");
    let inserted = link("durable", "https://example.com");

    {
        let repo = SqliteRepository::connect(&db.url()).await.unwrap();
        repo.ensure_schema().await.unwrap();
        repo.insert_if_absent(inserted.clone()).await.unwrap();
        repo.pool().close().await;
    }

    let repo = SqliteRepository::connect(&db.url()).await.unwrap();
    repo.ensure_schema().await.unwrap();
    assert_eq!(repo.get(&inserted.id).await.unwrap(), Some(inserted));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_inserts_for_one_id_have_one_winner() {
    let db = TempDb::new("contested");
    let repo = SqliteRepository::connect(&db.url()).await.unwrap();
    repo.ensure_schema().await.unwrap();
    let repo = Arc::new(repo);

    let mut handles = vec![];
    for i in 0..16 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.insert_if_absent(link("contested", &format!("https://example{i}.com")))
                .await
        }));
    }

    let mut wins = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => wins += 1,
            Err(StorageError::Conflict(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(wins, 1);
    repo.pool().close().await;
}

#[tokio::test]
async fn trailing_spaces_make_distinct_ids() {
    let repo = in_memory().await;

    repo.insert_if_absent(link("abc", "https://plain.example"))
        .await
        .unwrap();
    repo.insert_if_absent(link("abc ", "https://padded.example"))
        .await
        .unwrap();

    let padded = repo.get(&id("abc ")).await.unwrap().unwrap();
    assert_eq!(padded.id.as_str(), "abc ");
    assert_eq!(padded.target, "https://padded.example");

    assert!(repo.delete(&id("abc ")).await.unwrap());
    let plain = repo.get(&id("abc")).await.unwrap().unwrap();
    assert_eq!(plain.target, "https://plain.example");
}

#[tokio::test]
async fn targets_longer_than_64k_are_stored() {
    let repo = in_memory().await;
    let target = format!("https://example.com/{}", "a".repeat(70_000));

    repo.insert_if_absent(link("long", &target)).await.unwrap();

    let got = repo.get(&id("long")).await.unwrap().unwrap();
    assert_eq!(got.target, target);
}
