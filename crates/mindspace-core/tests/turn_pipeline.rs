//! Integration tests driving the public API end to end: a multi-turn
//! conversation through arbitration, recursion, chemistry, and metrics.

use mindspace_core::config::{MetacognitionConfig, SessionConfig, WorkspaceConfig};
use mindspace_core::session::{ConsciousnessSession, EmotionReading, TurnInput};
use mindspace_core::stubs::{EchoReflection, ScriptedReflection};
use mindspace_core::workspace::LinguisticFeatures;

fn turn(user: &str, response: &str, emotion: &str, intensity: f32) -> TurnInput {
    TurnInput {
        user_text: user.to_string(),
        response_text: response.to_string(),
        user_emotion: EmotionReading::new(emotion, intensity),
        bot_emotion: EmotionReading::new(emotion, intensity * 0.8),
        linguistic: LinguisticFeatures {
            is_question: user.ends_with('?'),
            expressing_emotion: intensity > 0.5,
        },
        recalled_memories: vec![],
    }
}

#[test]
fn a_conversation_accumulates_coherent_state() {
    let mut session = ConsciousnessSession::new().unwrap();
    let generator = ScriptedReflection::new([
        "the enthusiasm stands out",
        "confident, 8 out of 10",
        "a pattern of matching the user's energy",
    ]);

    let turns = [
        turn("I won the race!", "Amazing, congratulations!", "joy", 0.9),
        turn(
            "But I pulled a muscle doing it.",
            "Ouch - worth resting that before the next one.",
            "sadness",
            0.5,
        ),
        turn(
            "Will it heal in time?",
            "Most likely, if you take it easy this week.",
            "anxiety",
            0.6,
        ),
    ];

    let mut previous_overall = None;
    for input in &turns {
        let outcome = session.process_turn(input, &generator);

        // arbitration never overfills consciousness
        assert!(outcome.cycle.competition.occupancy <= outcome.cycle.competition.capacity);
        // four levels per turn at the default depth of 3
        assert_eq!(outcome.reflections.len(), 4);
        // chemistry stays on its scale
        let c = outcome.chemicals;
        for level in [c.dopamine, c.serotonin, c.noradrenaline, c.oxytocin, c.cortisol] {
            assert!((0.0..=1.0).contains(&level));
        }
        previous_overall = Some(outcome.score.overall);
    }

    assert_eq!(session.turn_count(), 3);
    assert!(previous_overall.unwrap() > 0.0);
    assert_eq!(session.metrics().history_len(), 3);
    // every turn's thoughts flowed into the stream
    assert!(session.metacognition().stream().len() >= 9);
}

#[test]
fn reflection_chain_is_observable_from_outside() {
    let mut session = ConsciousnessSession::with_config(SessionConfig {
        metacognition: MetacognitionConfig {
            max_depth: 2,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    let outcome = session.process_turn(
        &turn("hello?", "hello there!", "joy", 0.4),
        &EchoReflection,
    );

    assert_eq!(outcome.reflections.len(), 3);
    assert_eq!(outcome.reflections[0].thought_type, "response");
    assert_eq!(outcome.reflections[1].thought_type, "observation");
    assert_eq!(outcome.reflections[2].thought_type, "evaluation");
    // echo tags are distinct because each level reflects on different text
    assert_ne!(outcome.reflections[1].content, outcome.reflections[2].content);
}

#[test]
fn a_tiny_workspace_still_behaves() {
    let mut session = ConsciousnessSession::with_config(SessionConfig {
        workspace: WorkspaceConfig {
            capacity: 1,
            competition_threshold: 0.9,
            ..Default::default()
        },
        metacognition: MetacognitionConfig {
            max_depth: 1,
            ..Default::default()
        },
    })
    .unwrap();

    // weak signals everywhere: nothing clears the 0.9 admission bar
    let outcome = session.process_turn(
        &turn("hm.", "hm indeed.", "neutral", 0.1),
        &EchoReflection,
    );

    assert!(outcome.cycle.broadcasts.is_empty());
    assert_eq!(outcome.cycle.competition.occupancy, 0);
    // losers are pooled for the next round, not discarded
    assert!(outcome.cycle.competition.total_competitors > 0);
    assert_eq!(outcome.score.integration, 0.0);
}
