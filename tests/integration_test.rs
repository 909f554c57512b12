//! Integration tests for actor-store.

#![allow(clippy::expect_used)]

use actor_store::core::{Actor, seed_actors};
use actor_store::error::{Error, StorageError};
use actor_store::query::{SortField, SortOrder, SortSpec};
use actor_store::service::ActorService;
use actor_store::storage::{SqliteStorage, Storage};
use tempfile::TempDir;

/// Helper to open a service on a fresh database file.
async fn create_test_service() -> (ActorService, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("local.db");
    let service = ActorService::open(&db_path)
        .await
        .expect("Failed to open service");
    (service, temp_dir)
}

fn names(actors: &[Actor]) -> Vec<&str> {
    actors.iter().map(|a| a.name.as_str()).collect()
}

#[tokio::test]
async fn test_fresh_store_is_seeded() {
    let (service, _temp) = create_test_service().await;

    let mut actors = service
        .fetch_all_sorted(SortSpec::default())
        .await
        .expect("fetch failed");
    actors.sort_by_key(|a| a.id);
    assert_eq!(actors, seed_actors());
}

#[tokio::test]
async fn test_sort_by_name_both_directions() {
    let (service, _temp) = create_test_service().await;

    let asc = service
        .fetch_all_sorted(SortSpec::new(SortField::Name, SortOrder::Ascending))
        .await
        .expect("fetch failed");
    assert_eq!(names(&asc), vec!["Alan Wake", "Bruce Wayne", "Jason Bourne"]);

    let desc = service
        .fetch_all_sorted(SortSpec::new(SortField::Name, SortOrder::Descending))
        .await
        .expect("fetch failed");
    assert_eq!(names(&desc), vec!["Jason Bourne", "Bruce Wayne", "Alan Wake"]);
}

#[tokio::test]
async fn test_sort_by_joined_categories() {
    let (service, _temp) = create_test_service().await;
    service
        .update(&Actor::new(1, "Alan Wake", ["Zebra"]))
        .await
        .expect("update failed");
    service
        .update(&Actor::new(2, "Jason Bourne", ["Apple", "Zebra"]))
        .await
        .expect("update failed");

    let actors = service
        .fetch_all_sorted(SortSpec::new(SortField::Categories, SortOrder::Ascending))
        .await
        .expect("fetch failed");
    // "Apple, Zebra" < "Batman, ..." < "Zebra"
    assert_eq!(names(&actors), vec!["Jason Bourne", "Bruce Wayne", "Alan Wake"]);
}

#[tokio::test]
async fn test_update_round_trip() {
    let (service, _temp) = create_test_service().await;
    let edit = Actor::new(2, "Jason Bourne", ["Spy", "Amnesiac"]);
    service.update(&edit).await.expect("update failed");

    let loaded = service
        .get(2)
        .await
        .expect("get failed")
        .expect("actor should exist");
    assert_eq!(loaded, edit);
    assert_eq!(service.stats().await.expect("stats failed").actor_count, 3);
}

#[tokio::test]
async fn test_update_missing_actor_fails() {
    let (service, _temp) = create_test_service().await;
    let err = service
        .update(&Actor::new(77, "Nobody", ["None"]))
        .await
        .expect_err("update of missing id should fail");
    assert!(matches!(
        err,
        Error::Storage(StorageError::ActorNotFound { id: 77 })
    ));
    assert!(service.get(77).await.expect("get failed").is_none());
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let (service, _temp) = create_test_service().await;
    service.delete(3).await.expect("delete failed");

    let actors = service
        .fetch_all_sorted(SortSpec::default())
        .await
        .expect("fetch failed");
    assert_eq!(names(&actors), vec!["Alan Wake", "Jason Bourne"]);
}

#[tokio::test]
async fn test_delete_missing_id_is_noop() {
    let (service, _temp) = create_test_service().await;
    let before = service
        .fetch_all_sorted(SortSpec::default())
        .await
        .expect("fetch failed");

    service.delete(12345).await.expect("delete should succeed");
    service.delete(12345).await.expect("delete should succeed");

    let after = service
        .fetch_all_sorted(SortSpec::default())
        .await
        .expect("fetch failed");
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_changes_persist_across_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("local.db");

    let service = ActorService::open(&db_path).await.expect("open failed");
    service.delete(1).await.expect("delete failed");
    service
        .update(&Actor::new(2, "J. Bourne", ["Spy"]))
        .await
        .expect("update failed");
    service.close().await.expect("close failed");

    let reopened = ActorService::open(&db_path).await.expect("reopen failed");
    let actors = reopened
        .fetch_all_sorted(SortSpec::default())
        .await
        .expect("fetch failed");
    assert_eq!(names(&actors), vec!["Bruce Wayne", "J. Bourne"]);
}

#[tokio::test]
async fn test_seeding_happens_once() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("local.db");

    let service = ActorService::open(&db_path).await.expect("open failed");
    for id in 1..=3 {
        service.delete(id).await.expect("delete failed");
    }
    service.close().await.expect("close failed");

    let reopened = ActorService::open(&db_path).await.expect("reopen failed");
    let stats = reopened.stats().await.expect("stats failed");
    assert_eq!(stats.actor_count, 0);
    assert!(stats.db_size.is_some());
}

#[tokio::test]
async fn test_operations_after_close_fail() {
    let (service, _temp) = create_test_service().await;
    service.close().await.expect("close failed");

    let err = service
        .update(&Actor::new(1, "Alan", ["TPS"]))
        .await
        .expect_err("closed service should fail");
    assert!(matches!(err, Error::Storage(StorageError::Closed)));
}

#[tokio::test]
async fn test_concurrent_updates_are_serialized() {
    let (service, _temp) = create_test_service().await;

    let mut handles = Vec::new();
    for i in 0..16 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let id = i % 3 + 1;
            service
                .update(&Actor::new(id, format!("Actor {i}"), ["Tag"]))
                .await
        }));
    }
    for handle in handles {
        handle
            .await
            .expect("task panicked")
            .expect("update failed");
    }

    let actors = service
        .fetch_all_sorted(SortSpec::default())
        .await
        .expect("fetch failed");
    assert_eq!(actors.len(), 3);
    assert!(actors.iter().all(|a| a.categories == vec!["Tag"]));
}

#[test]
fn test_storage_direct_use() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("local.db");

    let mut storage = SqliteStorage::open(&db_path).expect("open failed");
    assert!(!storage.is_initialized().expect("is_initialized failed"));
    storage.init().expect("init failed");
    assert_eq!(storage.path(), Some(db_path.as_path()));
    assert_eq!(storage.actor_count().expect("count failed"), 3);
}

// ==================== Property-Based Tests ====================

mod property_tests {
    use actor_store::core::Actor;
    use actor_store::query::{SortField, SortOrder, SortSpec, locale_compare, sort_actors};
    use proptest::prelude::*;
    use std::cmp::Ordering;

    fn actor_strategy() -> impl Strategy<Value = Vec<Actor>> {
        prop::collection::vec(
            ("[A-Za-zÀ-ÿ ~.-]{0,12}", prop::collection::vec("[A-Za-zÀ-ÿ]{1,6}", 0..4)),
            0..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, tags))| Actor::new(i as i64, name, tags))
                .collect()
        })
    }

    fn spec_strategy() -> impl Strategy<Value = SortSpec> {
        (
            prop_oneof![Just(SortField::Name), Just(SortField::Categories)],
            prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)],
        )
            .prop_map(|(field, order)| SortSpec::new(field, order))
    }

    fn key(actor: &Actor, field: SortField) -> String {
        match field {
            SortField::Name => actor.name.clone(),
            SortField::Categories => actor.categories_label(),
        }
    }

    proptest! {
        #[test]
        fn accents_do_not_outrank_base_letters(base in "[a-y]", rest in "[a-z]{0,4}") {
            let accented = format!("{base}\u{301}{rest}");
            let next = char::from(base.as_bytes()[0] + 1).to_string();
            prop_assert_eq!(locale_compare(&accented, &next), Ordering::Less);
        }

        #[test]
        fn sorted_output_is_ordered(actors in actor_strategy(), spec in spec_strategy()) {
            let mut sorted = actors;
            sort_actors(&mut sorted, spec);
            for pair in sorted.windows(2) {
                let ord = locale_compare(&key(&pair[0], spec.field), &key(&pair[1], spec.field));
                match spec.order {
                    SortOrder::Ascending => prop_assert_ne!(ord, Ordering::Greater),
                    SortOrder::Descending => prop_assert_ne!(ord, Ordering::Less),
                }
            }
        }

        #[test]
        fn sort_is_a_permutation(actors in actor_strategy(), spec in spec_strategy()) {
            let mut sorted = actors.clone();
            sort_actors(&mut sorted, spec);
            let mut before: Vec<i64> = actors.iter().map(|a| a.id).collect();
            let mut after: Vec<i64> = sorted.iter().map(|a| a.id).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn equal_keys_keep_id_order(actors in actor_strategy(), spec in spec_strategy()) {
            let mut sorted = actors;
            sort_actors(&mut sorted, spec);
            for pair in sorted.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                if key(a, spec.field) == key(b, spec.field) {
                    prop_assert!(a.id < b.id);
                }
            }
        }

        #[test]
        fn locale_compare_is_antisymmetric(a in "[A-Za-zÀ-ÿ ~.-]{0,8}", b in "[A-Za-zÀ-ÿ ~.-]{0,8}") {
            prop_assert_eq!(locale_compare(&a, &b), locale_compare(&b, &a).reverse());
        }
    }
}
