//! Macro-generated test suite for the `PropertyStore` contract.
//!
//! The `store_contract_tests!` macro generates a test module that validates
//! `PropertyStore` over any `PropertyBackend` implementation: loading, id
//! assignment, persistence, filtering and concurrent appends.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use propmap::storage::InMemoryBackend;
//!
//! store_contract_tests!(InMemoryBackend::new());
//! ```
//!
//! # Generated Tests
//!
//! ## Load
//! - `test_load_all_empty`: a fresh backend lists nothing
//! - `test_load_all_preserves_storage_order`: seeded order comes back as-is
//!
//! ## Append
//! - `test_append_first_id_is_one`
//! - `test_sequential_appends_strictly_increasing`
//! - `test_append_after_gap_uses_max`: `[1, 3]` → next id is 4
//! - `test_append_persists_full_record`
//!
//! ## Query
//! - `test_query_flat_residential`: 5 flats (3 residential) + 2 villas → 3
//! - `test_query_city_substring`
//!
//! ## Concurrency
//! - `test_concurrent_appends_get_unique_ids`: parallel appends from spawned tasks

/// Generate a full `PropertyStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh backend implementing
/// `PropertyBackend + Clone + 'static`, where clones share storage. It is
/// re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! store_contract_tests {
    ($factory:expr) => {
        mod store_contract_tests {
            use super::*;
            use propmap::core::{
                FilterSpec, PropertyBackend, PropertyKind, PropertyStore, Usage,
            };
            use std::sync::Arc;

            // ==================================================================
            // Load
            // ==================================================================

            #[tokio::test]
            async fn test_load_all_empty() {
                let store = PropertyStore::new($factory);
                assert!(store.load_all().await.is_empty());
            }

            #[tokio::test]
            async fn test_load_all_preserves_storage_order() {
                let backend = $factory;
                let seeded = vec![
                    sample_property(9, PropertyKind::Villa, Usage::Residential, "Goa"),
                    sample_property(2, PropertyKind::Office, Usage::Commercial, "Mumbai"),
                    sample_property(5, PropertyKind::Land, Usage::Commercial, "Nagpur"),
                ];
                backend.write_all(&seeded).await.unwrap();

                let store = PropertyStore::new(backend.clone());
                assert_eq!(store.load_all().await, seeded);
            }

            // ==================================================================
            // Append
            // ==================================================================

            #[tokio::test]
            async fn test_append_first_id_is_one() {
                let store = PropertyStore::new($factory);
                let created = store
                    .append(sample_input(PropertyKind::Flat, Usage::Residential, "Pune"))
                    .await
                    .unwrap();
                assert_eq!(created.id, 1);
            }

            #[tokio::test]
            async fn test_sequential_appends_strictly_increasing() {
                let store = PropertyStore::new($factory);
                let first = store
                    .append(sample_input(PropertyKind::Flat, Usage::Residential, "Pune"))
                    .await
                    .unwrap();
                let second = store
                    .append(sample_input(PropertyKind::Shop, Usage::Commercial, "Pune"))
                    .await
                    .unwrap();

                assert!(second.id > first.id);
                assert_ne!(first.id, second.id);
            }

            #[tokio::test]
            async fn test_append_after_gap_uses_max() {
                let backend = $factory;
                backend
                    .write_all(&[
                        sample_property(1, PropertyKind::Flat, Usage::Residential, "Pune"),
                        sample_property(3, PropertyKind::Plot, Usage::Residential, "Pune"),
                    ])
                    .await
                    .unwrap();

                let store = PropertyStore::new(backend.clone());
                let created = store
                    .append(sample_input(PropertyKind::Villa, Usage::Residential, "Lonavala"))
                    .await
                    .unwrap();

                assert_eq!(created.id, 4);
                assert_eq!(store.load_all().await.len(), 3);
            }

            #[tokio::test]
            async fn test_append_persists_full_record() {
                let backend = $factory;
                let store = PropertyStore::new(backend.clone());
                let input = sample_input(PropertyKind::Warehouse, Usage::Commercial, "Chakan");

                let created = store.append(input.clone()).await.unwrap();
                assert_eq!(created, input.into_property(created.id));

                // Visible through the backend, not only through the store
                let stored = backend.read_all().await.unwrap();
                assert_eq!(stored, vec![created]);
            }

            // ==================================================================
            // Query
            // ==================================================================

            #[tokio::test]
            async fn test_query_flat_residential() {
                let store = PropertyStore::new($factory);
                let layout = [
                    (PropertyKind::Flat, Usage::Residential),
                    (PropertyKind::Villa, Usage::Residential),
                    (PropertyKind::Flat, Usage::Commercial),
                    (PropertyKind::Flat, Usage::Residential),
                    (PropertyKind::Villa, Usage::Residential),
                    (PropertyKind::Flat, Usage::Commercial),
                    (PropertyKind::Flat, Usage::Residential),
                ];
                for (kind, usage) in layout {
                    store.append(sample_input(kind, usage, "Thane")).await.unwrap();
                }

                let spec = FilterSpec::new().with_kind("Flat").with_usage("Residential");
                let ids: Vec<u64> = store.query(&spec).await.iter().map(|p| p.id).collect();
                assert_eq!(ids, vec![1, 4, 7]);
            }

            #[tokio::test]
            async fn test_query_city_substring() {
                let store = PropertyStore::new($factory);
                for city in ["Pune", "Mumbai", "Puniya"] {
                    store
                        .append(sample_input(PropertyKind::Flat, Usage::Residential, city))
                        .await
                        .unwrap();
                }

                let cities: Vec<String> = store
                    .query(&FilterSpec::new().with_city("pun"))
                    .await
                    .into_iter()
                    .map(|p| p.city)
                    .collect();
                assert_eq!(cities, vec!["Pune", "Puniya"]);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
            async fn test_concurrent_appends_get_unique_ids() {
                let store = Arc::new(PropertyStore::new($factory));

                let mut handles = Vec::new();
                for i in 0..16 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        let city = format!("City {}", i);
                        store
                            .append(sample_input(PropertyKind::Plot, Usage::Residential, &city))
                            .await
                            .unwrap()
                            .id
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap());
                }
                ids.sort_unstable();

                assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
                assert_eq!(store.load_all().await.len(), 16);
            }
        }
    };
}
