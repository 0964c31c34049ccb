//! End-to-end orchestration against scripted backends.

mod test_utils;

use std::time::Duration;
use test_utils::{MockResponse, MockSynthesizer, ScriptedGenerator};
use worldsmith_core::{CHARACTER_SLOTS, ImageResult, ProgressState, SCENARIO_SLOTS, SlotKind};
use worldsmith_error::GenerationErrorKind;
use worldsmith_narrative::{
    CONTINENTAL_OVERVIEW, ProgressTracker, SETTLEMENT_DISTRICTS, WorldOrchestrator,
};

const IDEA: &str = "floating cities above toxic clouds";
const CATEGORY: &str = "Post-Apocalyptic";

const NARRATIVE: &str = "## The Drift\n\n**Cities** float above the *green* murk.\n\n\n\nAir is currency.";
const OVERVIEW: &str = "Ashen Reach\nA plain of fused glass.\n\nSky Harbors\nDocks hung on chains.";
const DISTRICTS: &str = "Spire Row\nWhere the rich breathe.\n\nThe Sump\nWhere the filters are.";
const BRIEF: &str = "Low angle, sulfur palette, hard rim light.";

fn ideas_json(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"title":"**Hook {i}**","synopsis":"Something stirs {i}."}}"#))
        .collect();
    format!("[{}]", items.join(","))
}

fn characters_json(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"name":"Figure {i}","role":"Scavenger","description":"Knows the winds."}}"#))
        .collect();
    format!("[{}]", items.join(","))
}

fn script(idea_count: usize, character_count: usize) -> ScriptedGenerator {
    ScriptedGenerator::from_texts([
        NARRATIVE.to_string(),
        ideas_json(idea_count),
        r#"[{"feature":"Toxicity","description":"Make the clouds rise each season."}]"#
            .to_string(),
        characters_json(character_count),
        OVERVIEW.to_string(),
        DISTRICTS.to_string(),
        BRIEF.to_string(),
    ])
}

fn orchestrator(
    text: ScriptedGenerator,
    synth: MockSynthesizer,
) -> WorldOrchestrator<ScriptedGenerator, MockSynthesizer> {
    WorldOrchestrator::new(text, synth).with_image_delay(Duration::ZERO)
}

#[tokio::test]
async fn visuals_off_makes_only_text_calls() -> anyhow::Result<()> {
    let text = script(3, 2);
    let synth = MockSynthesizer::new_success("aW1n");
    let (text_calls, synth_calls) = (text.counter(), synth.counter());

    let world = orchestrator(text, synth)
        .build_world(IDEA, CATEGORY, false)
        .await?;

    assert_eq!(*synth_calls.lock().unwrap(), 0);
    assert_eq!(*text_calls.lock().unwrap(), 6);
    assert!(world.concept_image().is_none());
    assert_eq!(world.character_images().len(), CHARACTER_SLOTS);
    assert_eq!(world.scenario_images().len(), SCENARIO_SLOTS);
    assert!(!world.has_visuals());
    Ok(())
}

#[tokio::test]
async fn two_characters_fill_two_of_six_slots() -> anyhow::Result<()> {
    let text = script(3, 2);
    let synth = MockSynthesizer::new_success("aW1n");
    let synth_calls = synth.counter();

    let world = orchestrator(text, synth)
        .build_world(IDEA, CATEGORY, true)
        .await?;

    assert_eq!(*synth_calls.lock().unwrap(), 1 + 2 + SCENARIO_SLOTS);
    assert!(world.concept_image().as_ref().is_some_and(|i| i.is_image()));
    assert_eq!(world.character_images().len(), CHARACTER_SLOTS);
    assert!(world.character_images()[..2].iter().all(Option::is_some));
    assert!(world.character_images()[2..].iter().all(Option::is_none));
    assert_eq!(world.scenario_images().len(), SCENARIO_SLOTS);
    assert!(world.scenario_images().iter().all(Option::is_some));
    Ok(())
}

#[tokio::test]
async fn narrative_failure_is_fatal_and_leaves_progress_reset() {
    let text = ScriptedGenerator::new(vec![MockResponse::Error(GenerationErrorKind::Upstream {
        status_code: 500,
        message: "internal".to_string(),
    })]);
    let text_calls = text.counter();
    let synth = MockSynthesizer::new_success("aW1n");
    let synth_calls = synth.counter();
    let mut tracker = ProgressTracker::new();

    let err = orchestrator(text, synth)
        .build_world_with_progress(IDEA, CATEGORY, true, &mut tracker)
        .await
        .unwrap_err();

    assert!(err.generation_kind().is_some_and(GenerationErrorKind::is_upstream));
    assert_eq!(*text_calls.lock().unwrap(), 1);
    assert_eq!(*synth_calls.lock().unwrap(), 0);
    assert_eq!(tracker.state(), &ProgressState::default());
}

#[tokio::test]
async fn end_to_end_post_apocalyptic_world() -> anyhow::Result<()> {
    let world = orchestrator(script(7, 8), MockSynthesizer::unconfigured())
        .build_world(IDEA, CATEGORY, false)
        .await?;

    assert_eq!(
        world.narrative(),
        "The Drift\n\nCities float above the green murk.\n\nAir is currency."
    );
    assert_eq!(world.ideas().len(), 5);
    assert!(world
        .ideas()
        .iter()
        .all(|idea| !idea.title.is_empty() && !idea.synopsis.is_empty()));
    assert_eq!(world.ideas()[0].title, "Hook 0");
    assert_eq!(world.customizations().len(), 1);
    assert_eq!(world.characters().len(), CHARACTER_SLOTS);
    assert_eq!(world.display_characters().len(), CHARACTER_SLOTS);

    assert_eq!(world.regions().len(), 2);
    assert_eq!(world.regions()[0].title, CONTINENTAL_OVERVIEW);
    assert_eq!(world.regions()[0].sections[1].heading, "Sky Harbors");
    assert_eq!(world.regions()[1].title, SETTLEMENT_DISTRICTS);
    assert_eq!(world.idea(), IDEA);
    assert_eq!(world.category(), CATEGORY);
    Ok(())
}

#[tokio::test]
async fn plain_text_lists_become_empty() -> anyhow::Result<()> {
    let text = ScriptedGenerator::from_texts([
        NARRATIVE,
        "1. Not JSON at all",
        "{\"feature\":\"object, not array\"}",
        "[]",
        OVERVIEW,
        DISTRICTS,
    ]);

    let world = orchestrator(text, MockSynthesizer::unconfigured())
        .build_world(IDEA, CATEGORY, false)
        .await?;

    assert!(world.ideas().is_empty());
    assert!(world.customizations().is_empty());
    assert!(world.characters().is_empty());
    assert_eq!(world.display_characters().len(), CHARACTER_SLOTS);
    Ok(())
}

#[tokio::test]
async fn progress_is_published_before_and_after_each_slot() -> anyhow::Result<()> {
    let mut tracker = ProgressTracker::new();
    let mut rx = tracker.subscribe();

    let world = orchestrator(script(2, 2), MockSynthesizer::unconfigured())
        .build_world_with_progress(IDEA, CATEGORY, true, &mut tracker)
        .await?;

    let mut updates = Vec::new();
    while let Ok(update) = rx.try_recv() {
        updates.push(update);
    }
    let attempted = 1 + 2 + SCENARIO_SLOTS;
    assert_eq!(updates.len(), attempted * 2);
    for pair in updates.chunks(2) {
        assert_eq!(pair[0].slot, pair[1].slot);
        assert!(pair[0].status.loading);
        assert!(pair[1].status.completed && pair[1].status.failed);
    }
    assert_eq!(updates[0].slot.kind, SlotKind::Concept);
    assert_eq!(tracker.state().completed_count(), attempted);

    // Without a credential every slot carries the art-direction brief.
    assert!(world.concept_image().as_ref().is_some_and(|i| !i.is_image()));
    Ok(())
}

#[tokio::test]
async fn hung_up_subscriber_does_not_stop_visuals() -> anyhow::Result<()> {
    let mut tracker = ProgressTracker::new();
    drop(tracker.subscribe());
    let synth = MockSynthesizer::new_success("aW1n");
    let synth_calls = synth.counter();

    let world = orchestrator(script(2, 2), synth)
        .build_world_with_progress(IDEA, CATEGORY, true, &mut tracker)
        .await?;

    // concept + two characters + three scenarios
    assert_eq!(*synth_calls.lock().unwrap(), 1 + 2 + 3);
    assert!(world.has_visuals());
    assert!(world.concept_image().as_ref().is_some_and(ImageResult::is_image));
    assert!(world.character_image(1).is_some());
    assert!(world.character_image(2).is_none());
    assert!((0..3).all(|i| world.scenario_image(i).is_some()));
    assert!(!tracker.has_subscriber());
    assert_eq!(tracker.state().completed_count(), 6);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn image_calls_are_spaced_by_the_delay() -> anyhow::Result<()> {
    let delay = Duration::from_millis(250);
    let orchestrator = WorldOrchestrator::new(script(1, 1), MockSynthesizer::new_success("aW1n"))
        .with_image_delay(delay);

    let started = tokio::time::Instant::now();
    orchestrator.build_world(IDEA, CATEGORY, true).await?;

    // concept + one character + three scenarios, four gaps between them
    assert!(started.elapsed() >= delay * 4);
    Ok(())
}
