use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use trivia_quiz::config::{DEFAULT_AMOUNT, DEFAULT_API_URL, DEFAULT_TIMEOUT};
use trivia_quiz::{
    Difficulty, FileQuestionSource, HttpQuestionSource, QuestionSource, Quiz, QuizError,
    SourceConfig,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address of the trivia question service
    #[arg(long, env = "TRIVIA_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Play from a saved response file instead of the question service
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Number of questions per batch
    #[arg(short = 'n', long, default_value_t = DEFAULT_AMOUNT)]
    amount: u32,

    /// Restrict questions to a category id
    #[arg(long)]
    category: Option<u32>,

    /// Restrict questions to a difficulty
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Seed for the choice shuffler, for a reproducible order
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is reserved for the quiz)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "info" or "trivia_quiz=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), QuizError> {
    init_logging(&args)?;

    let source: Box<dyn QuestionSource> = match &args.questions {
        Some(path) => {
            info!(path = %path.display(), "playing from saved questions");
            Box::new(FileQuestionSource::new(path))
        }
        None => {
            let config = SourceConfig {
                api_url: args.api_url.clone(),
                amount: args.amount,
                category: args.category,
                difficulty: args.difficulty,
                timeout: Duration::from_secs(args.timeout_secs),
            };
            info!(url = %config.api_url, amount = config.amount, "playing from question service");
            Box::new(HttpQuestionSource::new(config)?)
        }
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Quiz::new(source, rng).run().await
}

fn init_logging(args: &Args) -> Result<(), QuizError> {
    let Some(log_file) = &args.log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}
