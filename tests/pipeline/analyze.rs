//! Analyze flow: two screenshots in, one saved match and one reply out.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use debrief::{
    register_pipeline, AnalyzeImages, CommandBus, Event, EventDispatcher, EventKind,
    MemoryStore, PipelineError,
};

use crate::support::{init_logging, FailingStore, FakeTranslator, RecordingChat};

struct Harness {
    bus: CommandBus,
    store: Arc<MemoryStore>,
    chat: Arc<RecordingChat>,
    saved_events: Arc<AtomicUsize>,
}

fn harness(translator: FakeTranslator) -> Harness {
    init_logging();
    let bus = CommandBus::new();
    let dispatcher = Arc::new(EventDispatcher::new());
    let store = Arc::new(MemoryStore::new());
    let chat = RecordingChat::new();

    register_pipeline(
        &bus,
        &dispatcher,
        Arc::new(translator),
        Arc::clone(&store) as Arc<dyn debrief::MatchStore>,
        Arc::clone(&chat) as Arc<dyn debrief::ChatSurface>,
    )
    .unwrap();

    // Probe subscriber: counts MatchSaved facts without interfering.
    let saved_events = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&saved_events);
    dispatcher.subscribe(EventKind::MatchSaved, move |event| {
        let probe = Arc::clone(&probe);
        async move {
            assert!(matches!(event, Event::MatchSaved(_)));
            probe.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    });

    Harness {
        bus,
        store,
        chat,
        saved_events,
    }
}

fn analyze_command() -> debrief::Command {
    AnalyzeImages::new(
        b"scoreboard-png".to_vec(),
        Some(b"weapons-png".to_vec()),
        123,
        456,
        789,
    )
    .unwrap()
    .into()
}

#[tokio::test]
async fn two_images_end_as_one_tagged_document_and_one_reply() {
    let h = harness(FakeTranslator::new());

    h.bus.execute(analyze_command()).await.unwrap();

    // Exactly one new document, tagged with the submitting identifiers.
    let documents = h.store.documents();
    assert_eq!(documents.len(), 1);
    let doc = &documents[0];
    assert_eq!(doc["_id"], "m-1");
    assert_eq!(doc["owner_id"], 123);
    assert_eq!(doc["message_id"], 456);
    assert_eq!(doc["channel_id"], 789);
    assert_eq!(doc["stats"]["game_mode"], "HARDPOINT");

    // MatchSaved fired exactly once.
    assert_eq!(h.saved_events.load(Ordering::SeqCst), 1);

    // The reply went to the originating channel with the record inline.
    let messages = h.chat.messages();
    assert_eq!(messages.len(), 1);
    let (channel, text) = &messages[0];
    assert_eq!(*channel, 789);
    assert!(text.contains("Match saved with ID: `m-1`"));
    assert!(text.contains("```json"));
}

#[tokio::test]
async fn translator_failure_short_circuits_before_any_event() {
    let h = harness(FakeTranslator::failing());

    let err = h.bus.execute(analyze_command()).await.unwrap_err();
    assert!(matches!(err, PipelineError::Translator(_)));

    assert!(h.store.is_empty());
    assert_eq!(h.saved_events.load(Ordering::SeqCst), 0);
    assert!(h.chat.messages().is_empty());
}

#[tokio::test]
async fn store_failure_stops_the_chain_at_persistence() {
    init_logging();
    let bus = CommandBus::new();
    let dispatcher = Arc::new(EventDispatcher::new());
    let chat = RecordingChat::new();
    let saved_events = Arc::new(AtomicUsize::new(0));

    register_pipeline(
        &bus,
        &dispatcher,
        Arc::new(FakeTranslator::new()),
        Arc::new(FailingStore),
        Arc::clone(&chat) as Arc<dyn debrief::ChatSurface>,
    )
    .unwrap();

    let probe = Arc::clone(&saved_events);
    dispatcher.subscribe(EventKind::MatchSaved, move |_| {
        let probe = Arc::clone(&probe);
        async move {
            probe.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    });

    // The command itself succeeds: analysis worked and the fact was
    // emitted. The persistence reactor fails downstream, so MatchSaved
    // never fires and no reply is sent.
    bus.execute(analyze_command()).await.unwrap();

    assert_eq!(saved_events.load(Ordering::SeqCst), 0);
    assert!(chat.messages().is_empty());
}
