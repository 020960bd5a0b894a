//! numfield CLI
//!
//! Usage:
//!   numfield --text "0912-345-678"            # Single analysis
//!   numfield --text "0912-345-678" --paid     # Analysis + remedy
//!   numfield --interactive                    # Read inputs from stdin
//!   numfield --serve                          # HTTP API server
//!   numfield --text "ABC1234" --mode alpha    # Letters as alphabet positions

use clap::Parser;
use colored::{ColoredString, Colorize};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use numfield::core::{run_server, NumerologyEngine, RngSource};
use numfield::types::{AnalysisResult, NormalizationMode, PairResult, RemedyResult, Report, ScanMode, UnlockStatus};
use numfield::{EngineConfig, MAX_UNLOCK_TTL_SECS, UNLOCK_TTL_SECS, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "numfield",
    version = VERSION,
    about = "Digit-pair field analysis with remedy codes",
    long_about = "numfield scores a digit string (phone number, birthdate, plate)\n\
                  pair by pair against eight fixed field categories.\n\n\
                  Every analysis starts at 60; auspicious pairs add, inauspicious\n\
                  pairs subtract, and the total is clamped to 0-100.\n\n\
                  With --paid a remedy code is generated, biased toward the\n\
                  weakest of the Wealth, Noble and Career fields."
)]
struct Args {
    /// Text to analyze (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// How raw text becomes digits
    #[arg(long, value_enum, default_value_t = NormalizationMode::DigitsOnly)]
    mode: NormalizationMode,

    /// Pair scanning discipline
    #[arg(long, value_enum, default_value_t = ScanMode::Adjacent)]
    scan: ScanMode,

    /// Treat the report as paid for (shows the remedy)
    #[arg(long)]
    paid: bool,

    /// Seed for reproducible remedy codes
    #[arg(long)]
    seed: Option<u64>,

    /// Unlock window for the server, in seconds
    #[arg(
        long,
        default_value_t = UNLOCK_TTL_SECS,
        value_parser = clap::value_parser!(i64).range(0..=MAX_UNLOCK_TTL_SECS)
    )]
    unlock_ttl: i64,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_scan_mode(self.scan)
            .with_normalization(self.mode)
            .with_unlock_ttl_secs(self.unlock_ttl)
    }

    fn rng(&self) -> RngSource<rand::rngs::StdRng> {
        match self.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        }
    }

    fn unlock_status(&self) -> UnlockStatus {
        if self.paid {
            UnlockStatus::Unlocked { remaining_secs: self.unlock_ttl }
        } else {
            UnlockStatus::Locked
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    if args.serve {
        run_serve(&args).await;
    } else if let Some(ref text) = args.text {
        run_single(text, &args);
    } else {
        run_interactive(&args);
    }
}

/// Run single analysis
fn run_single(text: &str, args: &Args) {
    let engine = NumerologyEngine::new(args.config());
    let mut rng = args.rng();

    match engine.report(text, args.mode, args.unlock_status(), &mut rng) {
        Ok(report) => print_report(&report, args),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Run interactive mode
fn run_interactive(args: &Args) {
    let engine = NumerologyEngine::new(args.config());
    let mut rng = args.rng();

    print_header("Interactive", args.no_color);
    println!("Enter a phone number, birthdate or plate. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", ">".cyan());
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match engine.report(line, args.mode, args.unlock_status(), &mut rng) {
            Ok(report) => print_report(&report, args),
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        }
        println!();
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    print_header("API Server", args.no_color);
    println!("Listening on {}", args.addr);
    println!();

    if let Err(e) = run_server(&args.addr, args.config()).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    let title = format!("numfield v{} - {}", VERSION, mode);
    if no_color {
        println!("========================================");
        println!("  {}", title);
        println!("========================================");
    } else {
        println!("{}", "════════════════════════════════════════".bold());
        println!("  {}", title.bold());
        println!("{}", "════════════════════════════════════════".bold());
    }
    println!();
}

fn print_report(report: &Report, args: &Args) {
    if args.json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        }
        return;
    }

    println!("Input: {}", report.input);
    print_analysis("Original field", &report.analysis);

    match (&report.remedy, &report.payment_url) {
        (Some(remedy), _) => print_remedy(remedy),
        (None, Some(url)) => {
            println!();
            println!("{}", "🔒 Remedy code and full reading are locked.".yellow());
            println!("   Unlock: {}", url);
        }
        (None, None) => {}
    }
}

fn print_analysis(title: &str, analysis: &AnalysisResult) {
    println!();
    println!("{} {}", title.bold(), score_text(analysis.total_score));
    if analysis.pairs.is_empty() {
        println!("  (fewer than two digits, nothing to pair)");
        return;
    }
    for pair in &analysis.pairs {
        println!("  {}", pair_line(pair));
    }
}

fn print_remedy(remedy: &RemedyResult) {
    println!();
    println!("{}", "Remedy".bold());
    println!("  code:     {}", remedy.code.as_str().blue().bold());
    println!("  focus:    {}", remedy.focus);
    println!("  expected: {}", format!("{:.1}", remedy.inflated_score).green().bold());
    println!();
    for paragraph in remedy.explanation.split("\n\n") {
        println!("  {}", paragraph);
    }
    print_analysis("Remedy field", &remedy.analysis);
}

fn pair_line(pair: &PairResult) -> String {
    let label = format!("{}({})", pair.traditional_name(), pair.label());
    let score = format!("{:+.1}", pair.score);
    let score = match pair.category {
        Some(c) if c.is_auspicious() => score.green(),
        Some(_) => score.red(),
        None => score.dimmed(),
    };
    let emoji = pair.category.map(|c| c.emoji()).unwrap_or(" ");
    format!(
        "{} {:<6} {:<16} {:>6} {}",
        emoji,
        pair.section,
        label,
        score,
        pair.modifier_tag()
    )
}

fn score_text(score: f64) -> ColoredString {
    let text = format!("{:.1}", score);
    if score >= 80.0 {
        text.green().bold()
    } else if score >= 60.0 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}
