//! Fanout aggregation integration tests.
//!
//! How per-target results combine: affected rows sum, the execute boolean
//! keeps its last value, and key retrieval requests pass through untouched.

use ferry_tests::prelude::*;

mod update_counts {
    use super::*;

    #[test]
    fn test_counts_sum_across_targets() {
        // GIVEN three targets with distinct scripted counts
        let fixture = Fixture::new(&["a", "b", "c"]);
        fixture.router.route_to("DELETE FROM logs", &["a", "b", "c"]);
        fixture.source("a").on_update("DELETE FROM logs", 10);
        fixture.source("b").on_update("DELETE FROM logs", 20);
        fixture.source("c").on_update("DELETE FROM logs", 12);

        // WHEN executing the delete
        let mut stmt = fixture.statement();
        let count = stmt
            .execute_update("DELETE FROM logs", KeyRetrieval::None)
            .unwrap();

        // THEN the counts sum exactly
        assert_eq!(count, 42);
    }

    #[test]
    fn test_unscripted_targets_contribute_zero() {
        // GIVEN two targets where only one affects rows
        let fixture = Fixture::new(&["a", "b"]);
        fixture.router.route_to("DELETE FROM logs", &["a", "b"]);
        fixture.source("a").on_update("DELETE FROM logs", 5);

        // WHEN executing
        let mut stmt = fixture.statement();
        let count = stmt
            .execute_update("DELETE FROM logs", KeyRetrieval::None)
            .unwrap();

        // THEN the silent target adds nothing
        assert_eq!(count, 5);
    }
}

mod execute_outcome {
    use super::*;

    fn fixture_with_outcomes(first: bool, second: bool) -> Fixture {
        let fixture = Fixture::new(&["a", "b"]);
        fixture.router.route_to("CALL refresh()", &["a", "b"]);
        fixture.source("a").on_execute("CALL refresh()", first);
        fixture.source("b").on_execute("CALL refresh()", second);
        fixture
    }

    #[test]
    fn test_last_target_wins_true() {
        // GIVEN outcomes [false, true] in routing order
        let fixture = fixture_with_outcomes(false, true);

        // WHEN executing
        let mut stmt = fixture.statement();
        let produced = stmt.execute("CALL refresh()", KeyRetrieval::None).unwrap();

        // THEN the last outcome wins
        assert!(produced);
    }

    #[test]
    fn test_last_target_wins_false() {
        // GIVEN outcomes [true, false] in routing order
        let fixture = fixture_with_outcomes(true, false);

        // WHEN executing
        let mut stmt = fixture.statement();
        let produced = stmt.execute("CALL refresh()", KeyRetrieval::None).unwrap();

        // THEN the last outcome still wins
        assert!(!produced);
    }
}

mod key_retrieval {
    use super::*;

    fn update_events(fixture: &Fixture) -> Vec<KeyRetrieval> {
        fixture
            .events()
            .into_iter()
            .filter_map(|event| match event {
                BackendEvent::Update { keys, .. } => Some(keys),
                _ => None,
            })
            .collect()
    }

    fn execute_events(fixture: &Fixture) -> Vec<KeyRetrieval> {
        fixture
            .events()
            .into_iter()
            .filter_map(|event| match event {
                BackendEvent::Execute { keys, .. } => Some(keys),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_update_passes_every_variant_through() {
        // GIVEN each retrieval request in turn
        let requests = vec![
            KeyRetrieval::None,
            KeyRetrieval::Auto(true),
            KeyRetrieval::Indexes(vec![1, 3]),
            KeyRetrieval::Names(vec!["id".to_string(), "uuid".to_string()]),
        ];

        for request in requests {
            let fixture = Fixture::new(&["a", "b"]);
            fixture.router.default_route(&["a", "b"]);

            // WHEN fanning out an update with it
            let mut stmt = fixture.statement();
            stmt.execute_update("INSERT INTO t VALUES (1)", request.clone())
                .unwrap();

            // THEN both targets saw the exact request
            assert_eq!(update_events(&fixture), vec![request.clone(), request]);
        }
    }

    #[test]
    fn test_execute_passes_every_variant_through() {
        // GIVEN each retrieval request in turn
        let requests = vec![
            KeyRetrieval::None,
            KeyRetrieval::Auto(false),
            KeyRetrieval::Indexes(vec![2]),
            KeyRetrieval::Names(vec!["id".to_string()]),
        ];

        for request in requests {
            let fixture = Fixture::new(&["a"]);
            fixture.router.default_route(&["a"]);

            // WHEN executing with it
            let mut stmt = fixture.statement();
            stmt.execute("INSERT INTO t VALUES (1)", request.clone())
                .unwrap();

            // THEN the target saw the exact request
            assert_eq!(execute_events(&fixture), vec![request]);
        }
    }
}

mod generated_keys {
    use super::*;

    #[test]
    fn test_sole_target_keys_returned_unmodified() {
        // GIVEN a primary scripted with generated keys
        let fixture = Fixture::new(&["primary"]);
        fixture.router.default_route(&["primary"]);
        let source = fixture.source("primary");
        source.on_update("INSERT INTO t (v) VALUES (7)", 1);
        let keys = RowSet::new(vec!["id".to_string()], vec![vec![Value::Int(1001)]]);
        source.on_generated_keys("INSERT INTO t (v) VALUES (7)", keys.clone());

        // WHEN inserting and reading the keys
        let mut stmt = fixture.statement();
        stmt.execute_update("INSERT INTO t (v) VALUES (7)", KeyRetrieval::Auto(true))
            .unwrap();

        // THEN the backend's key rows come back as-is
        assert_eq!(stmt.generated_keys().unwrap(), keys);
    }

    #[test]
    fn test_multi_target_keys_rejected() {
        // GIVEN a broadcast insert over two targets
        let fixture = Fixture::new(&["a", "b"]);
        fixture.router.default_route(&["a", "b"]);
        let mut stmt = fixture.statement();
        stmt.execute_update("INSERT INTO t VALUES (1)", KeyRetrieval::Auto(true))
            .unwrap();

        // WHEN reading generated keys
        let result = stmt.generated_keys();

        // THEN retrieval is refused with the active count
        assert!(matches!(
            result,
            Err(StatementError::SingleRouteRequired {
                operation: "generated_keys",
                found: 2,
            })
        ));
    }

    #[test]
    fn test_keys_without_dispatch_rejected() {
        // GIVEN a statement that never dispatched
        let fixture = Fixture::new(&["a"]);
        let mut stmt = fixture.statement();

        // WHEN reading generated keys
        let result = stmt.generated_keys();

        // THEN retrieval is refused with zero active statements
        assert!(matches!(
            result,
            Err(StatementError::SingleRouteRequired { found: 0, .. })
        ));
    }

    #[test]
    fn test_unscripted_keys_are_empty() {
        // GIVEN an insert with no scripted keys
        let fixture = Fixture::new(&["primary"]);
        fixture.router.default_route(&["primary"]);

        // WHEN inserting and reading keys
        let mut stmt = fixture.statement();
        stmt.execute_update("INSERT INTO t VALUES (1)", KeyRetrieval::Auto(true))
            .unwrap();
        let keys = stmt.generated_keys().unwrap();

        // THEN the key row set is empty rather than an error
        assert!(keys.is_empty());
    }
}
