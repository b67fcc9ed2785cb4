//! Tests for the delegating connector's read, subscribe and control paths.

mod support;

use buildmaster_data::domain::ChangeRecord;
use buildmaster_data::error::Error;
use buildmaster_data::port::{DataConnector, GetOptions, UpdateApi};
use buildmaster_data::testkit::fixture;
use serde_json::{json, Map, Value};

use support::callbacks::MessageLog;

fn seeded_change(author: &str) -> ChangeRecord {
    ChangeRecord {
        files: None,
        comments: None,
        author: Some(author.to_string()),
        revision: None,
        when_timestamp: Some(0),
        branch: None,
        category: None,
        revlink: None,
        properties: Default::default(),
        repository: "r".into(),
        codebase: None,
        project: "p".into(),
        src: None,
    }
}

#[tokio::test]
async fn non_sequence_paths_are_type_errors() {
    let connector = fixture::connector();
    let options = GetOptions::default();

    for path in [json!("changes"), json!({"changes": 1}), json!(7)] {
        let err = connector.get(&options, &path).await.unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }), "get {path}");

        let err = connector
            .start_consuming(MessageLog::default().callback(), &options, &path)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }), "consume {path}");

        let err = connector
            .control("cancel", &Map::new(), &path)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }), "control {path}");
    }
}

#[tokio::test]
async fn get_reads_rows_from_the_real_store() {
    let connector = fixture::connector();
    let db = connector.master().db();
    let first = db.insert_change(&seeded_change("alice"));
    db.insert_change(&seeded_change("bob"));

    let one = connector
        .get(&GetOptions::default(), &json!(["changes", first.get()]))
        .await
        .unwrap();
    assert_eq!(one["author"], json!("alice"));

    let all = connector
        .get(&GetOptions::default(), &json!(["changes"]))
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn recorded_changes_do_not_reach_the_store() {
    let connector = fixture::connector();
    connector
        .updates()
        .add_change(fixture::change("alice", "r", "p"))
        .await
        .unwrap();

    let all = connector
        .get(&GetOptions::default(), &json!(["changes"]))
        .await
        .unwrap();
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn consumers_see_cancellations_until_stopped() {
    let connector = fixture::connector();
    let (_, brids) = connector
        .updates()
        .add_buildset(fixture::buildset("s", &["a", "b"]))
        .await
        .unwrap();

    let log = MessageLog::default();
    let consumer = connector
        .start_consuming(log.callback(), &GetOptions::default(), &json!(["buildrequests"]))
        .await
        .unwrap();

    let mut params = Map::new();
    params.insert("reason".into(), Value::from("no longer needed"));
    connector
        .control("cancel", &params, &json!(["buildrequests", brids["a"].get()]))
        .await
        .unwrap();

    assert_eq!(log.len(), 1);
    assert_eq!(
        log.keys()[0],
        vec![
            "buildrequests".to_string(),
            brids["a"].to_string(),
            "complete".to_string()
        ]
    );

    consumer.stop_consuming();
    connector
        .control("cancel", &Map::new(), &json!(["buildrequests", brids["b"].get()]))
        .await
        .unwrap();
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn entity_consumers_filter_by_id() {
    let connector = fixture::connector();
    let (_, brids) = connector
        .updates()
        .add_buildset(fixture::buildset("s", &["a", "b"]))
        .await
        .unwrap();

    let log = MessageLog::default();
    let _consumer = connector
        .start_consuming(
            log.callback(),
            &GetOptions::default(),
            &json!(["buildrequests", brids["b"].get()]),
        )
        .await
        .unwrap();

    connector
        .control("cancel", &Map::new(), &json!(["buildrequests", brids["a"].get()]))
        .await
        .unwrap();
    assert_eq!(log.len(), 0);

    connector
        .control("cancel", &Map::new(), &json!(["buildrequests", brids["b"].get()]))
        .await
        .unwrap();
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn master_scoped_collections_filter_by_owner() {
    let connector = fixture::connector();
    let db = connector.master().db();
    let m1 = db.insert_master("m1", true);
    let m2 = db.insert_master("m2", false);
    db.insert_scheduler("nightly", Some(m1));
    db.insert_scheduler("weekly", Some(m2));
    db.insert_scheduler("orphan", None);
    db.insert_builder("linux", vec![m1, m2]);
    db.insert_builder("mac", vec![m2]);

    let options = GetOptions::default();
    let schedulers = connector
        .get(&options, &json!(["masters", m1.get(), "schedulers"]))
        .await
        .unwrap();
    assert_eq!(schedulers, json!([{"schedulerid": 1, "name": "nightly", "masterid": 1}]));

    let builders = connector
        .get(&options, &json!(["masters", m2.get(), "builders"]))
        .await
        .unwrap();
    assert_eq!(builders.as_array().unwrap().len(), 2);

    let master = connector
        .get(&options, &json!(["masters", m2.get()]))
        .await
        .unwrap();
    assert_eq!(master["name"], json!("m2"));
    assert_eq!(master["active"], json!(false));
}

#[test]
fn resource_types_are_exposed() {
    let connector = fixture::connector();
    let rtypes = connector.rtypes();

    assert_eq!(rtypes.len(), 6);
    let buildrequest = rtypes.get("buildrequest").unwrap();
    assert!(buildrequest
        .patterns()
        .any(|p| p == "buildsets/n:bsid/buildrequests"));
}
