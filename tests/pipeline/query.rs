//! Query flow: natural language in, literal rows and a reply out.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use debrief::{
    register_pipeline, CommandBus, Event, EventDispatcher, EventKind, MatchStore, MemoryStore,
    QueryMatches, QueryPlan,
};

use crate::support::{init_logging, seeded_match, FakeTranslator, RecordingChat};

fn last_five_plan(owner_id: u64) -> QueryPlan {
    QueryPlan::from_value(json!({
        "stages": [
            { "operator": "$match", "expression": { "owner_id": owner_id } },
            { "operator": "$sort", "expression": { "created_at": -1 } },
            { "operator": "$limit", "expression": 5 },
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn my_last_five_matches_round_trip() {
    init_logging();
    let bus = CommandBus::new();
    let dispatcher = Arc::new(EventDispatcher::new());
    let store = Arc::new(MemoryStore::new());
    let chat = RecordingChat::new();

    // Seven matches for the asker, two for someone else.
    for n in 0..7 {
        store.append(&seeded_match(123, n)).await.unwrap();
    }
    for n in 0..2 {
        store.append(&seeded_match(999, n)).await.unwrap();
    }

    register_pipeline(
        &bus,
        &dispatcher,
        Arc::new(FakeTranslator::new().with_plan(last_five_plan(123))),
        Arc::clone(&store) as Arc<dyn MatchStore>,
        Arc::clone(&chat) as Arc<dyn debrief::ChatSurface>,
    )
    .unwrap();

    // Probe: capture the literal rows QueryExecuted carries.
    let captured: Arc<Mutex<Vec<Vec<Value>>>> = Arc::new(Mutex::new(Vec::new()));
    let probe = Arc::clone(&captured);
    dispatcher.subscribe(EventKind::QueryExecuted, move |event| {
        let probe = Arc::clone(&probe);
        async move {
            if let Event::QueryExecuted(event) = event {
                probe.lock().unwrap().push(event.rows.clone());
            }
            Ok(())
        }
    });

    let command = QueryMatches::new("my last 5 matches", 123, 456, 789).unwrap();
    bus.execute(command.into()).await.unwrap();

    // One QueryExecuted fact, carrying exactly the rows the store returned.
    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let rows = &captured[0];
    assert_eq!(rows.len(), 5);
    // Most recent first: seeds n=6..=2, appended as m-7..=m-3.
    let ids: Vec<_> = rows.iter().map(|r| r["_id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["m-7", "m-6", "m-5", "m-4", "m-3"]);
    assert!(rows.iter().all(|r| r["owner_id"] == 123));

    // The reply quotes the rows back to the channel.
    let messages = chat.messages();
    assert_eq!(messages.len(), 1);
    let (channel, text) = &messages[0];
    assert_eq!(*channel, 789);
    assert!(text.contains("Query complete for <@123>"));
    assert!(text.contains("\"m-7\""));
}

#[tokio::test]
async fn listing_by_owner_applies_skip_before_limit() {
    init_logging();
    let store = MemoryStore::new();
    for n in 0..10 {
        store.append(&seeded_match(7, n)).await.unwrap();
    }

    let page = store.list_by_owner(7, 3, 2).await.unwrap();
    assert_eq!(page.len(), 3);
    let ids: Vec<_> = page.iter().map(|d| d["_id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["m-3", "m-4", "m-5"]);
}
