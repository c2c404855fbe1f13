//! Integration tests for the PuzzleService public interface.
//!
//! The upstream source and both generators are replaced with in-process
//! stubs that count their calls, so these tests never touch the network.

use async_trait::async_trait;
use connections_core::{
    ConnectionsError, ErrorClass, ImageGenerator, OverallScore, PickupLine,
    PickupLineGenerator, PuzzleCategory, PuzzleDate, PuzzleService, PuzzleSource, RawPuzzle,
    Result,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Upstream stub serving one "Dishes" puzzle whose id encodes the day.
#[derive(Default)]
struct StubSource {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl PuzzleSource for StubSource {
    async fn fetch(&self, date: &PuzzleDate) -> Result<RawPuzzle> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ConnectionsError::Upstream {
                service: "stub".into(),
                message: "HTTP 503".into(),
                status_code: Some(503),
            });
        }
        let day: i64 = date.as_str()[8..].parse().unwrap();
        Ok(serde_json::from_value(json!({
            "id": 200 + day,
            "categories": [
                {"title": "Dishes", "cards": [
                    {"content": "Pie"}, {"content": "Curry"},
                    {"content": "Sushi"}, {"content": "Tofu"}
                ]},
                {"title": "Birds", "cards": [
                    {"content": "Robin"}, {"content": "Swift"},
                    {"content": "Finch"}, {"content": "Wren"}
                ]}
            ]
        }))
        .unwrap())
    }
}

#[derive(Default)]
struct StubLines {
    calls: AtomicUsize,
    fail_on: Option<String>,
}

#[async_trait]
impl PickupLineGenerator for StubLines {
    async fn generate(&self, category: &PuzzleCategory) -> Result<Vec<PickupLine>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.as_deref() == Some(category.category.as_str()) {
            return Err(ConnectionsError::generation(
                connections_core::GenerationKind::PickupLines,
                "malformed model output",
            ));
        }
        Ok(category
            .words
            .iter()
            .map(|word| PickupLine {
                word: word.clone(),
                line: format!("{} line about {}", category.category, word),
                overall_score: OverallScore {
                    creativity: 5,
                    humor: 5,
                },
            })
            .collect())
    }
}

/// Image stub; the first category is slowest so completion order is reversed.
#[derive(Default)]
struct StubImages {
    calls: AtomicUsize,
}

#[async_trait]
impl ImageGenerator for StubImages {
    async fn generate(&self, title: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if title == "Dishes" {
            tokio::time::sleep(Duration::from_millis(30)).await;
        }
        Ok(format!("img:{}", title))
    }
}

struct Harness {
    service: Arc<PuzzleService>,
    source: Arc<StubSource>,
    lines: Arc<StubLines>,
    images: Arc<StubImages>,
}

fn harness_with(source: StubSource, lines: StubLines) -> Harness {
    let source = Arc::new(source);
    let lines = Arc::new(lines);
    let images = Arc::new(StubImages::default());
    let service = PuzzleService::builder()
        .puzzle_source(source.clone())
        .pickup_line_generator(lines.clone())
        .image_generator(images.clone())
        .build()
        .unwrap();
    Harness {
        service: Arc::new(service),
        source,
        lines,
        images,
    }
}

fn harness() -> Harness {
    harness_with(StubSource::default(), StubLines::default())
}

fn date(s: &str) -> PuzzleDate {
    PuzzleDate::parse(s).unwrap()
}

#[tokio::test]
async fn test_puzzle_answers_transforms_upstream() {
    let h = harness();
    let answers = h.service.puzzle_answers(&date("2024-03-09")).await.unwrap();

    assert_eq!(answers.id, 209);
    assert_eq!(answers.date.as_str(), "2024-03-09");
    assert_eq!(
        answers.data[0],
        PuzzleCategory {
            category: "Dishes".into(),
            words: vec!["Pie".into(), "Curry".into(), "Sushi".into(), "Tofu".into()],
            difficulty: 1,
        }
    );
    assert_eq!(answers.data[1].difficulty, 2);
}

#[tokio::test]
async fn test_puzzle_answers_fetches_once_per_date() {
    let h = harness();
    let d = date("2024-03-09");

    let first = h.service.puzzle_answers(&d).await.unwrap();
    let second = h.service.puzzle_answers(&d).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
    assert_eq!(h.source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_new_date_replaces_slot_and_enrichment() {
    let h = harness();
    let d1 = date("2024-03-09");
    let d2 = date("2024-03-10");

    h.service.puzzle_answers(&d1).await.unwrap();
    h.service.images(&d1).await.unwrap();
    assert!(h.service.cache_status().await.has_images);

    let answers = h.service.puzzle_answers(&d2).await.unwrap();
    assert_eq!(answers.id, 210);
    let status = h.service.cache_status().await;
    assert_eq!(status.date, Some(d2.clone()));
    assert!(!status.has_images);

    // d1 is gone: enrichment for it is a 404 now
    let err = h.service.images(&d1).await.unwrap_err();
    assert_eq!(err.class(), ErrorClass::NotFound);

    // and d2 regenerates rather than reusing d1's images
    h.service.images(&d2).await.unwrap();
    assert_eq!(h.images.calls.load(Ordering::SeqCst), 4);
    assert_eq!(h.source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_upstream_failure_is_upstream_class_and_not_cached() {
    let h = harness_with(
        StubSource {
            fail: true,
            ..Default::default()
        },
        StubLines::default(),
    );
    let err = h
        .service
        .puzzle_answers(&date("2024-03-09"))
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Upstream);
    assert!(h.service.cache_status().await.date.is_none());
}

#[tokio::test]
async fn test_pickup_lines_before_puzzle_is_not_found() {
    let h = harness();
    let err = h
        .service
        .pickup_lines(&date("2024-03-09"))
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::NotFound);
    assert_eq!(h.source.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.lines.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_pickup_lines_generated_once() {
    let h = harness();
    let d = date("2024-03-09");
    h.service.puzzle_answers(&d).await.unwrap();

    let first = h.service.pickup_lines(&d).await.unwrap();
    let second = h.service.pickup_lines(&d).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.pickup_lines.len(), 2);
    assert_eq!(first.pickup_lines[0][0].word, "Pie");
    assert_eq!(first.pickup_lines[1][3].word, "Wren");
    // one call per category, and only for the first request
    assert_eq!(h.lines.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_pickup_line_failure_discards_whole_batch() {
    let h = harness_with(
        StubSource::default(),
        StubLines {
            fail_on: Some("Birds".into()),
            ..Default::default()
        },
    );
    let d = date("2024-03-09");
    h.service.puzzle_answers(&d).await.unwrap();

    let err = h.service.pickup_lines(&d).await.unwrap_err();
    assert_eq!(err.class(), ErrorClass::Upstream);
    assert!(!h.service.cache_status().await.has_pickup_lines);
}

#[tokio::test]
async fn test_images_keep_category_order() {
    let h = harness();
    let d = date("2024-03-09");
    h.service.puzzle_answers(&d).await.unwrap();

    let images = h.service.images(&d).await.unwrap();
    assert_eq!(images.images, vec!["img:Dishes", "img:Birds"]);

    let again = h.service.images(&d).await.unwrap();
    assert_eq!(again, images);
    assert_eq!(h.images.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_game_data_fetches_and_generates() {
    let h = harness();
    let d = date("2024-03-09");

    let game = h.service.game_data(&d).await.unwrap();
    assert_eq!(game.id, 209);
    assert_eq!(game.data.len(), 2);
    assert_eq!(game.pickup_lines.len(), 2);

    // the split endpoint now reuses what the combined call generated
    let lines = h.service.pickup_lines(&d).await.unwrap();
    assert_eq!(lines.pickup_lines, game.pickup_lines);
    assert_eq!(h.lines.calls.load(Ordering::SeqCst), 2);
    assert_eq!(h.source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_enrichment_runs_on_spawned_tasks() {
    let h = harness();
    let d = date("2024-03-09");
    h.service.puzzle_answers(&d).await.unwrap();

    let lines = {
        let service = h.service.clone();
        let d = d.clone();
        tokio::spawn(async move { service.pickup_lines(&d).await })
    };
    let images = {
        let service = h.service.clone();
        let d = d.clone();
        tokio::spawn(async move { service.images(&d).await })
    };
    let game = {
        let service = h.service.clone();
        let d = d.clone();
        tokio::spawn(async move { service.game_data(&d).await })
    };

    let lines = lines.await.unwrap().unwrap();
    let images = images.await.unwrap().unwrap();
    let game = game.await.unwrap().unwrap();
    assert_eq!(lines.pickup_lines.len(), 2);
    assert_eq!(images.images, vec!["img:Dishes", "img:Birds"]);
    assert_eq!(game.data.len(), 2);
}

/// Image generator that parks until released, to interleave a date change.
struct GatedImages {
    started: Notify,
    release: Notify,
}

#[async_trait]
impl ImageGenerator for GatedImages {
    async fn generate(&self, title: &str) -> Result<String> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(format!("img:{}", title))
    }
}

#[tokio::test]
async fn test_stale_enrichment_is_not_cached_under_new_date() {
    let gate = Arc::new(GatedImages {
        started: Notify::new(),
        release: Notify::new(),
    });
    let service = Arc::new(
        PuzzleService::builder()
            .puzzle_source(Arc::new(StubSource::default()))
            .pickup_line_generator(Arc::new(StubLines::default()))
            .image_generator(gate.clone())
            .config(connections_core::ServiceConfig {
                max_concurrent_generations: 1,
                ..Default::default()
            })
            .build()
            .unwrap(),
    );
    let d1 = date("2024-03-09");
    let d2 = date("2024-03-10");
    service.puzzle_answers(&d1).await.unwrap();

    let in_flight = {
        let service = service.clone();
        let d1 = d1.clone();
        tokio::spawn(async move { service.images(&d1).await })
    };

    // roll the slot over while the first image is still generating
    gate.started.notified().await;
    service.puzzle_answers(&d2).await.unwrap();
    // release both sequential calls for d1's two categories
    gate.release.notify_one();
    gate.started.notified().await;
    gate.release.notify_one();

    let stale = in_flight.await.unwrap().unwrap();
    assert_eq!(stale.date, d1);
    assert_eq!(stale.images.len(), 2);

    let status = service.cache_status().await;
    assert_eq!(status.date, Some(d2));
    assert!(!status.has_images);
}
