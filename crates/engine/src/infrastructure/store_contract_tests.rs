//! The same scenarios run against every store adapter.

use shelfkeep_domain::{Book, User};

use super::memory::InMemoryStore;
use super::ports::{EntityStore, StoreError};
use super::sqlite::{connect_pool, SqlRecord, SqliteStore};

async fn memory<R: SqlRecord>() -> Box<dyn EntityStore<R>> {
    let store = InMemoryStore::<R>::new();
    store.initialize().await.unwrap();
    Box::new(store)
}

async fn sqlite<R: SqlRecord>() -> Box<dyn EntityStore<R>> {
    let store = SqliteStore::<R>::new(connect_pool("sqlite::memory:").await.unwrap());
    store.initialize().await.unwrap();
    Box::new(store)
}

async fn both<R: SqlRecord>() -> [(&'static str, Box<dyn EntityStore<R>>); 2] {
    [("memory", memory().await), ("sqlite", sqlite().await)]
}

#[tokio::test]
async fn saved_record_reads_back_equal() {
    for (backend, store) in both::<Book>().await {
        let book = Book::new("1", "Test Book", "Test Author");
        store.save(&book).await.unwrap();
        assert_eq!(store.find_by_id("1").await.unwrap(), book, "{backend}");
        assert!(store.exists("1").await.unwrap(), "{backend}");
    }
}

#[tokio::test]
async fn second_save_of_same_id_is_duplicate() {
    for (backend, store) in both::<Book>().await {
        store.save(&Book::new("1", "T", "A")).await.unwrap();
        let err = store.save(&Book::new("1", "T", "A")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey { .. }), "{backend}: {err}");
    }
}

#[tokio::test]
async fn absent_id_is_not_found_never_a_default() {
    for (backend, store) in both::<User>().await {
        let err = store.find_by_id("ghost").await.unwrap_err();
        assert!(err.is_not_found(), "{backend}: {err}");
        assert_eq!(err.to_string(), "User not found: ghost");
        assert!(!store.exists("ghost").await.unwrap(), "{backend}");
    }
}

#[tokio::test]
async fn update_touches_only_its_own_record() {
    for (backend, store) in both::<User>().await {
        store.save(&User::new("u1", "A", "a@example.com")).await.unwrap();
        store.save(&User::new("u2", "C", "c@example.com")).await.unwrap();

        let revised = User::new("u1", "B", "b@example.com");
        store.update(&revised).await.unwrap();

        assert_eq!(store.find_by_id("u1").await.unwrap(), revised, "{backend}");
        assert_eq!(store.find_by_id("u2").await.unwrap().name, "C", "{backend}");
    }
}

#[tokio::test]
async fn update_and_delete_of_absent_id_are_not_found() {
    for (backend, store) in both::<Book>().await {
        let err = store.update(&Book::new("9", "T", "A")).await.unwrap_err();
        assert!(err.is_not_found(), "{backend}: {err}");
        let err = store.delete("9").await.unwrap_err();
        assert!(err.is_not_found(), "{backend}: {err}");
    }
}

#[tokio::test]
async fn deleted_record_is_gone() {
    for (backend, store) in both::<Book>().await {
        store.save(&Book::new("1", "T", "A")).await.unwrap();
        store.delete("1").await.unwrap();
        assert!(store.find_by_id("1").await.unwrap_err().is_not_found(), "{backend}");
    }
}

#[tokio::test]
async fn clear_empties_the_kind() {
    for (backend, store) in both::<Book>().await {
        store.save(&Book::new("1", "T", "A")).await.unwrap();
        store.save(&Book::new("2", "T", "A")).await.unwrap();
        store.clear().await.unwrap();
        assert!(!store.exists("1").await.unwrap(), "{backend}");
        assert!(!store.exists("2").await.unwrap(), "{backend}");
    }
}

#[tokio::test]
async fn shutdown_makes_the_store_unavailable() {
    for (backend, store) in both::<Book>().await {
        store.shutdown().await.unwrap();
        let err = store.exists("1").await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }), "{backend}: {err}");
    }
}
