//! Replay a timing fixture against a printing presentation runtime.
//!
//! ```text
//! cargo run -p session --example replay -- --period-ms 100
//! cargo run -p session --example replay -- --timing audio-timing.json
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use session::{
    CelebrationEvent, ClockEvent, FixedRotation, PresentationRuntime, RenderInstruction, Session,
    SessionConfig, StaticMedia, StaticTiming,
};

const FIXTURE: &str = r#"[
    {"word": "Hey,", "start": 0.3, "end": 0.55},
    {"word": "this", "start": 0.6, "end": 0.75},
    {"word": "is", "start": 0.75, "end": 0.85},
    {"word": "Joel", "start": 0.9, "end": 1.4},
    {"word": "check", "start": 2.2, "end": 2.5},
    {"word": "out", "start": 2.5, "end": 2.65},
    {"word": "my", "start": 2.65, "end": 2.8},
    {"word": "website", "start": 2.85, "end": 3.4}
]"#;

#[derive(clap::Parser)]
#[command(name = "replay", about = "Replay a word-timing fixture in the terminal")]
struct Args {
    /// Tick period in milliseconds (simulates the host clock cadence).
    #[arg(short, long, default_value_t = 100)]
    period_ms: u64,

    /// Timing JSON file; the built-in fixture is used when omitted.
    #[arg(short, long)]
    timing: Option<PathBuf>,

    /// Run without sleeping between ticks.
    #[arg(long)]
    fast: bool,
}

struct PrintRuntime;

impl PresentationRuntime for PrintRuntime {
    fn render(&self, instruction: RenderInstruction) {
        match instruction {
            RenderInstruction::ShowText { word, rotation_deg } => {
                println!("show text {word:?} (rotation {rotation_deg:.1}°)");
            }
            RenderInstruction::ShowImage {
                path,
                max_width,
                max_height,
            } => {
                println!("show image {path} (budget {max_width}x{max_height})");
            }
            RenderInstruction::ShowEnd => println!("show end card"),
            RenderInstruction::Clear => println!("clear"),
        }
    }

    fn celebrate(&self, _event: CelebrationEvent) {
        println!("*** celebration ***");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let json = match &args.timing {
        Some(path) => std::fs::read_to_string(path)?,
        None => FIXTURE.to_string(),
    };

    // Offline replay: probes answer from a fixed path set, media is a stub.
    let probe = cue_artifact::StaticProbe::with_existing(["joel.png"]);

    let mut session = Session::prepare(
        SessionConfig::default(),
        &StaticTiming::from_json(json),
        &StaticMedia::ready(),
        &probe,
        Arc::new(PrintRuntime),
    )
    .await?;
    session.set_rotation_source(Box::new(FixedRotation(1.5)));

    let track_end = session
        .index()
        .intervals()
        .iter()
        .map(|i| i.end)
        .fold(0.0, f64::max)
        + 1.0;

    session.handle(ClockEvent::Play);

    let period = Duration::from_millis(args.period_ms);
    let mut t = 0.0;
    while t <= track_end {
        session.handle(ClockEvent::Tick(t));
        if !args.fast {
            tokio::time::sleep(period).await;
        }
        t += period.as_secs_f64();
    }

    session.handle(ClockEvent::Ended);
    Ok(())
}
