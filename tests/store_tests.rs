use rtimesince::core::store::ItemStore;
use rtimesince::db::pool::DbPool;
use rtimesince::errors::AppError;
use rtimesince::models::item::Item;

mod common;
use common::{fresh_store, ids, setup_test_db};

const T0: &str = "2026-10-19T08:00:00+02:00";
const T1: &str = "2026-10-19T08:00:10+02:00";
const T2: &str = "2026-10-20T09:30:00+02:00";

#[test]
fn test_initialize_is_idempotent() {
    let db_path = setup_test_db("store_init_idempotent");

    let store = ItemStore::open(&db_path).expect("first open");
    store.add(1, T0).unwrap();
    assert!(!store.initialize().unwrap(), "table already existed");
    drop(store);

    // second process start on the same file keeps the data
    let store = ItemStore::open(&db_path).expect("second open");
    assert_eq!(ids(&store), vec![1]);
}

#[test]
fn test_list_all_empty() {
    let store = fresh_store("store_empty");
    assert!(store.list_all().unwrap().is_empty());
    assert!(store.current().unwrap().is_none());
    assert_eq!(store.next_id().unwrap(), 1);
}

#[test]
fn test_list_all_orders_by_id_desc() {
    let store = fresh_store("store_order");

    for id in [3, 10, 1, 7] {
        store.add(id, T0).unwrap();
    }

    assert_eq!(ids(&store), vec![10, 7, 3, 1]);
    assert_eq!(store.count().unwrap(), 4);
    assert_eq!(store.next_id().unwrap(), 11);
}

#[test]
fn test_current_is_highest_id_not_latest_time() {
    let store = fresh_store("store_current_by_id");

    // id 5 is older in time but wins because ordering is by id
    store.add(2, T2).unwrap();
    store.add(5, T0).unwrap();

    let current = store.current().unwrap().unwrap();
    assert_eq!(current, Item::new(5, T0));
}

#[test]
fn test_add_duplicate_id_is_constraint_violation() {
    let store = fresh_store("store_dup");
    store.add(1, T0).unwrap();

    let err = store.add(1, T2).unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(1)), "got {err:?}");

    // the original row is untouched
    assert_eq!(store.get(1).unwrap(), Some(Item::new(1, T0)));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_add_rejects_unparseable_date() {
    let store = fresh_store("store_bad_date");
    let err = store.add(1, "yesterday-ish").unwrap_err();
    assert!(matches!(err, AppError::MalformedInput(_)));
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_update_replaces_only_target_row() {
    let store = fresh_store("store_update");
    store.add(1, T0).unwrap();
    store.add(2, T1).unwrap();

    assert!(store.update(1, T2).unwrap());

    let items = store.list_all().unwrap();
    assert_eq!(items, vec![Item::new(2, T1), Item::new(1, T2)]);
}

#[test]
fn test_update_missing_id_is_noop() {
    let store = fresh_store("store_update_missing");
    store.add(1, T0).unwrap();

    assert!(!store.update(42, T2).unwrap());
    assert_eq!(store.list_all().unwrap(), vec![Item::new(1, T0)]);
}

#[test]
fn test_delete_one_and_idempotence() {
    let store = fresh_store("store_delete_one");
    store.add(1, T0).unwrap();
    store.add(2, T1).unwrap();

    assert!(store.delete_one(2).unwrap());
    assert_eq!(ids(&store), vec![1]);

    // repeating is harmless
    assert!(!store.delete_one(2).unwrap());
    assert_eq!(ids(&store), vec![1]);
}

#[test]
fn test_delete_all_and_idempotence() {
    let store = fresh_store("store_delete_all");
    store.add(1, T0).unwrap();
    store.add(2, T1).unwrap();

    assert_eq!(store.delete_all().unwrap(), 2);
    assert!(store.list_all().unwrap().is_empty());

    assert_eq!(store.delete_all().unwrap(), 0);
    assert_eq!(store.next_id().unwrap(), 1);
}

#[test]
fn test_add_add_delete_scenario() {
    let store = fresh_store("store_scenario");

    let first = store.next_id().unwrap();
    store.add(first, T0).unwrap();
    let second = store.next_id().unwrap();
    store.add(second, T1).unwrap();
    assert_eq!((first, second), (1, 2));
    assert_eq!(store.current().unwrap().unwrap().id, 2);

    store.delete_one(2).unwrap();
    assert_eq!(store.list_all().unwrap(), vec![Item::new(1, T0)]);
}

#[test]
fn test_export_format() {
    let store = fresh_store("store_export_format");
    store.add(1, T0).unwrap();
    store.add(2, T1).unwrap();

    let json = store.export_all().unwrap();
    assert_eq!(
        json,
        format!(r#"[{{"id":2,"dateTime":"{T1}"}},{{"id":1,"dateTime":"{T0}"}}]"#)
    );
}

#[test]
fn test_export_import_round_trip() {
    let source = fresh_store("store_round_trip_src");
    source.add(1, T0).unwrap();
    source.add(4, T2).unwrap();
    // text produced by the old mobile app is carried over verbatim
    source
        .add(9, "Mon Oct 19 2026 08:30:00 GMT+0200 (Central European Summer Time)")
        .unwrap();

    let payload = source.export_all().unwrap();

    let target = fresh_store("store_round_trip_dst");
    let report = target.import_all(&payload).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.imported, vec![9, 4, 1]);
    assert_eq!(target.list_all().unwrap(), source.list_all().unwrap());
}

#[test]
fn test_import_is_best_effort_on_collision() {
    let store = fresh_store("store_import_partial");
    store.add(2, T0).unwrap();

    let payload = format!(
        r#"[{{"id":1,"dateTime":"{T1}"}},{{"id":2,"dateTime":"{T2}"}},{{"id":3,"dateTime":"{T2}"}}]"#
    );
    let report = store.import_all(&payload).unwrap();

    // records before and after the collision are applied
    assert_eq!(report.imported, vec![1, 3]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, 2);
    assert!(matches!(report.failed[0].1, AppError::ConstraintViolation(2)));

    // the pre-existing row keeps its timestamp
    assert_eq!(store.get(2).unwrap(), Some(Item::new(2, T0)));
    assert_eq!(ids(&store), vec![3, 2, 1]);
}

#[test]
fn test_import_malformed_payload_inserts_nothing() {
    let store = fresh_store("store_import_malformed");

    let payloads = [
        "not json at all",
        r#"{"id":1,"dateTime":"2026-10-19T08:00:00Z"}"#,
        r#"[{"id":1,"dateTime":"2026-10-19T08:00:00Z"},{"id":"two","dateTime":"2026-10-19T08:00:00Z"}]"#,
        r#"[{"id":1,"dateTime":"2026-10-19T08:00:00Z"},{"id":2}]"#,
        r#"[{"id":1,"dateTime":"2026-10-19T08:00:00Z"},{"id":2,"dateTime":"whenever"}]"#,
        r#"[{"id":1.5,"dateTime":"2026-10-19T08:00:00Z"}]"#,
        r#"[42]"#,
    ];

    for p in payloads {
        let err = store.import_all(p).unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)), "payload {p}: {err:?}");
    }

    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_import_coerces_string_ids() {
    let store = fresh_store("store_import_string_ids");
    let report = store
        .import_all(r#"[{"id":"7","dateTime":"2026-10-19T08:00:00Z"},{"id":3.0,"dateTime":"2026-10-19T07:00:00Z"}]"#)
        .unwrap();

    assert_eq!(report.imported, vec![7, 3]);
    assert_eq!(ids(&store), vec![7, 3]);
}

#[test]
fn test_unavailable_storage() {
    let missing_dir = std::env::temp_dir()
        .join("rtimesince_no_such_dir")
        .join("nested")
        .join("db.sqlite");
    std::fs::remove_dir_all(std::env::temp_dir().join("rtimesince_no_such_dir")).ok();

    let err = DbPool::new(&missing_dir.to_string_lossy())
        .err()
        .expect("opening inside a missing directory must fail");
    assert!(matches!(err, AppError::StorageUnavailable { .. }), "got {err:?}");
    assert!(err.is_fatal());
}

#[test]
fn test_in_memory_store() {
    let store = ItemStore::open_in_memory().unwrap();
    store.add(1, T0).unwrap();
    assert_eq!(ids(&store), vec![1]);
}

#[test]
fn test_undated_row_survives_export_import() {
    let store = fresh_store("store_undated_src");
    store.add(1, T0).unwrap();
    // legacy databases may hold rows without a timestamp
    store
        .conn()
        .execute("INSERT INTO items (id, dateTime) VALUES (2, NULL)", [])
        .unwrap();

    assert_eq!(
        store.list_all().unwrap(),
        vec![Item::undated(2), Item::new(1, T0)]
    );

    let payload = store.export_all().unwrap();
    assert_eq!(
        payload,
        format!(r#"[{{"id":2,"dateTime":null}},{{"id":1,"dateTime":"{T0}"}}]"#)
    );

    let target = fresh_store("store_undated_dst");
    let report = target.import_all(&payload).unwrap();
    assert!(report.is_complete());
    assert_eq!(target.list_all().unwrap(), store.list_all().unwrap());

    // the undated row is current and has no usable timestamp
    let current = target.current().unwrap().unwrap();
    assert!(matches!(current.timestamp(), Err(AppError::MalformedInput(_))));
}
