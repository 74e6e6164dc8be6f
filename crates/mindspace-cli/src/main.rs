//! Mindspace CLI
//!
//! Drives a scripted conversation through a full consciousness session with
//! deterministic stub collaborators, printing per-turn summaries. Useful
//! for eyeballing arbitration, reflection chains, and metric trends without
//! any model backend.
//!
//! # Commands
//!
//! - `simulate`: run the scripted conversation (optionally as JSON)

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use mindspace_core::config::{MetacognitionConfig, SessionConfig, WorkspaceConfig};
use mindspace_core::session::{ConsciousnessSession, EmotionReading, TurnInput};
use mindspace_core::stubs::ScriptedReflection;
use mindspace_core::workspace::LinguisticFeatures;

/// Mindspace - consciousness engine demo driver
#[derive(Parser)]
#[command(name = "mindspace")]
#[command(version = "0.1.0")]
#[command(about = "Demo driver for the mindspace consciousness engine")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted conversation through a full session
    Simulate {
        /// Number of scripted turns to run (the script repeats if longer)
        #[arg(long, default_value_t = 4)]
        turns: usize,

        /// Recursive reflection depth
        #[arg(long, default_value_t = 3)]
        depth: u32,

        /// Workspace capacity
        #[arg(long, default_value_t = 3)]
        capacity: usize,

        /// Emit each turn's outcome as a JSON line instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Simulate {
            turns,
            depth,
            capacity,
            json,
        } => simulate(turns, depth, capacity, json),
    }
}

/// A small scripted conversation with pre-classified emotions.
fn script() -> Vec<TurnInput> {
    vec![
        TurnInput {
            user_text: "I just got back from the interview. I think it went really well!".into(),
            response_text: "That's great to hear! What part do you think went best?".into(),
            user_emotion: EmotionReading::new("joy", 0.85),
            bot_emotion: EmotionReading::new("excitement", 0.6),
            linguistic: LinguisticFeatures {
                is_question: false,
                expressing_emotion: true,
            },
            recalled_memories: vec![],
        },
        TurnInput {
            user_text: "Honestly... now I'm worried I said something wrong.".into(),
            response_text: "It's natural to second-guess yourself after something important."
                .into(),
            user_emotion: EmotionReading::new("anxiety", 0.7),
            bot_emotion: EmotionReading::new("trust", 0.5),
            linguistic: LinguisticFeatures {
                is_question: false,
                expressing_emotion: true,
            },
            recalled_memories: vec!["They came back from a job interview feeling good".into()],
        },
        TurnInput {
            user_text: "Do you think they'll call back?".into(),
            response_text: "I can't know for sure, but your preparation showed.".into(),
            user_emotion: EmotionReading::new("fear", 0.5),
            bot_emotion: EmotionReading::new("trust", 0.6),
            linguistic: LinguisticFeatures {
                is_question: true,
                expressing_emotion: false,
            },
            recalled_memories: vec!["They were worried about having said something wrong".into()],
        },
        TurnInput {
            user_text: "They called. I got it!!".into(),
            response_text: "Congratulations! All that worrying, and you did it anyway.".into(),
            user_emotion: EmotionReading::new("joy", 0.95),
            bot_emotion: EmotionReading::new("joy", 0.8),
            linguistic: LinguisticFeatures {
                is_question: false,
                expressing_emotion: true,
            },
            recalled_memories: vec!["They asked whether the company would call back".into()],
        },
    ]
}

fn simulate(turns: usize, depth: u32, capacity: usize, json: bool) -> Result<()> {
    let config = SessionConfig {
        workspace: WorkspaceConfig {
            capacity,
            ..Default::default()
        },
        metacognition: MetacognitionConfig {
            max_depth: depth,
            ..Default::default()
        },
    };
    let mut session = ConsciousnessSession::with_config(config)?;
    tracing::info!(turns, depth, capacity, "starting scripted simulation");

    let generator = ScriptedReflection::new([
        "the warmth in that reply",
        "fairly confident, maybe 7 out of 10",
        "a bias toward reassurance over accuracy",
        "the hedging stands out",
        "confident, the hedge was honest, 8/10",
        "a pattern of cautious empathy",
        "the shared excitement feels genuine",
        "very confident, 9 out of 10",
        "mirroring the user's emotional arc",
    ]);

    let script = script();
    for index in 0..turns {
        let input = &script[index % script.len()];
        let outcome = session.process_turn(input, &generator);

        if json {
            println!("{}", serde_json::to_string(&outcome)?);
            continue;
        }

        println!("=== Turn {} ===", outcome.turn);
        println!("User: {}", input.user_text);
        println!("Bot:  {}", input.response_text);
        println!();
        println!("Self-talk:");
        for reflection in &outcome.reflections {
            let indent = "  ".repeat(reflection.level as usize + 1);
            println!("{indent}[{}] {}", reflection.thought_type, reflection.content);
        }
        println!();
        println!("{}", session.workspace().workspace_summary());
        if let Some(focus) = session.workspace().attention_focus() {
            println!("Attention focus: [{}] {}", focus.source, focus.content);
        }
        println!(
            "State: {} | creativity {:.2}, empathy {:.2}, caution {:.2}",
            outcome.emotional_state,
            outcome.modulation.creativity,
            outcome.modulation.empathy,
            outcome.modulation.caution
        );
        println!(
            "Consciousness: overall {:.3} (integration {:.3}, depth {:.3}, reportability {:.3})",
            outcome.score.overall,
            outcome.score.integration,
            outcome.score.meta_cognitive_depth,
            outcome.score.reportability
        );
        println!();
    }

    if !json {
        println!("{}", session.metrics().summary(turns));
        println!("{}", session.metacognition().stream().summary());
    }

    Ok(())
}
