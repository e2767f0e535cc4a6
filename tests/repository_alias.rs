mod common;

use alias_shortener::domain::AliasError;
use alias_shortener::domain::repositories::AliasRepository;
use alias_shortener::infrastructure::persistence::{PoolSettings, connect_pool};

#[tokio::test]
async fn test_create_returns_increasing_ids() {
    let repo = common::create_test_repository(common::memory_pool().await).await;

    let first = repo.create("https://example.com/a", "first").await.unwrap();
    let second = repo.create("https://example.com/b", "second").await.unwrap();

    assert!(first >= 1);
    assert!(second > first);
}

#[tokio::test]
async fn test_create_then_get() {
    let repo = common::create_test_repository(common::memory_pool().await).await;

    repo.create("https://example.com/page", "docs").await.unwrap();

    assert_eq!(repo.get("docs").await.unwrap(), "https://example.com/page");
}

#[tokio::test]
async fn test_create_duplicate_alias() {
    let pool = common::memory_pool().await;
    let repo = common::create_test_repository(pool.clone()).await;

    repo.create("https://example.com/a", "dup").await.unwrap();
    let result = repo.create("https://example.com/b", "dup").await;

    assert!(matches!(result, Err(AliasError::AliasExists(ref a)) if a == "dup"));
    // The original mapping is untouched
    assert_eq!(repo.get("dup").await.unwrap(), "https://example.com/a");
    assert_eq!(common::count_aliases(&pool).await, 1);
}

#[tokio::test]
async fn test_same_url_under_multiple_aliases() {
    let repo = common::create_test_repository(common::memory_pool().await).await;

    repo.create("https://example.com", "one").await.unwrap();
    repo.create("https://example.com", "two").await.unwrap();

    assert_eq!(repo.get("one").await.unwrap(), "https://example.com");
    assert_eq!(repo.get("two").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_aliases_are_case_sensitive() {
    let repo = common::create_test_repository(common::memory_pool().await).await;

    repo.create("https://example.com/lower", "abc").await.unwrap();
    repo.create("https://example.com/upper", "ABC").await.unwrap();

    assert_eq!(repo.get("abc").await.unwrap(), "https://example.com/lower");
    assert_eq!(repo.get("ABC").await.unwrap(), "https://example.com/upper");
}

#[tokio::test]
async fn test_get_not_found() {
    let repo = common::create_test_repository(common::memory_pool().await).await;

    let result = repo.get("missing").await;

    assert!(matches!(result, Err(AliasError::NotFound(ref a)) if a == "missing"));
}

#[tokio::test]
async fn test_delete() {
    let pool = common::memory_pool().await;
    let repo = common::create_test_repository(pool.clone()).await;
    common::insert_alias(&pool, "gone", "https://example.com").await;

    repo.delete("gone").await.unwrap();

    assert!(matches!(repo.get("gone").await, Err(AliasError::NotFound(_))));
    assert!(matches!(repo.delete("gone").await, Err(AliasError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_not_found() {
    let repo = common::create_test_repository(common::memory_pool().await).await;

    let result = repo.delete("never").await;

    assert!(matches!(result, Err(AliasError::NotFound(ref a)) if a == "never"));
}

#[tokio::test]
async fn test_alias_reusable_after_delete() {
    let repo = common::create_test_repository(common::memory_pool().await).await;

    let first = repo.create("https://example.com/old", "reuse").await.unwrap();
    repo.delete("reuse").await.unwrap();
    let second = repo.create("https://example.com/new", "reuse").await.unwrap();

    // AUTOINCREMENT never hands out a deleted id again
    assert!(second > first);
    assert_eq!(repo.get("reuse").await.unwrap(), "https://example.com/new");
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let pool = common::memory_pool().await;
    let repo = common::create_test_repository(pool.clone()).await;
    common::insert_alias(&pool, "kept", "https://example.com").await;

    repo.init().await.unwrap();
    repo.init().await.unwrap();

    assert_eq!(repo.get("kept").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_find_and_count() {
    let pool = common::memory_pool().await;
    let repo = common::create_test_repository(pool.clone()).await;

    assert_eq!(repo.count().await.unwrap(), 0);
    assert!(repo.find("docs").await.unwrap().is_none());

    let id = repo.create("https://example.com/docs", "docs").await.unwrap();

    let record = repo.find("docs").await.unwrap().unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.alias, "docs");
    assert_eq!(record.target_url, "https://example.com/docs");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aliases.db");
    let path = path.to_str().unwrap();
    let settings = PoolSettings::default();

    {
        let pool = connect_pool(path, &settings).await.unwrap();
        let repo = common::create_test_repository(pool.clone()).await;
        repo.create("https://example.com/kept", "kept").await.unwrap();
        pool.close().await;
    }

    let pool = connect_pool(path, &settings).await.unwrap();
    let repo = common::create_test_repository(pool).await;

    assert_eq!(repo.get("kept").await.unwrap(), "https://example.com/kept");
}
