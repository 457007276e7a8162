//! Footprint Label Align CLI
//!
//! Usage:
//!   fp-label-align [OPTIONS] <BOARD>
//!
//! Options:
//!   -l, --labels <KIND>      Labels to align: reference or value
//!   -a, --align <MODE>       left, center or right (top/center/bottom for vertical text)
//!   -p, --position <MODE>    absolute or relative
//!   -o, --output <FILE>      Write the aligned board here instead of stdout
//!   --dry-run                Print the planned moves without writing anything
//!   -d, --debug              Debug logging
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use fp_label_align::host::{TerminalNotifier, TerminalPicker};
use fp_label_align::{
    prepare_alignment, run_alignment, AlignConfig, AlignError, AlignMode, Board, LabelKind,
    PositionMode,
};

#[derive(Parser)]
#[command(name = "fp-label-align")]
#[command(about = "Align footprint reference and value labels to an anchor footprint")]
struct Cli {
    /// Board document (TOML)
    board: PathBuf,

    /// Which labels to align
    #[arg(short, long, value_enum, default_value_t = LabelKind::Reference)]
    labels: LabelKind,

    /// Anchor edge to align to (left/right mean top/bottom for vertical text)
    #[arg(short, long, value_enum, default_value_t = AlignMode::Left)]
    align: AlignMode,

    /// Snap to the anchor's absolute edges or copy its offset from its footprint
    #[arg(short, long, value_enum, default_value_t = PositionMode::Absolute)]
    position: PositionMode,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the planned moves and leave the board untouched
    #[arg(long)]
    dry_run: bool,

    /// Debug mode: log orientation, offsets and every planned move
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let source = match fs::read_to_string(&cli.board) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", cli.board.display(), e);
            process::exit(1);
        }
    };
    let filename = cli.board.display().to_string();
    let mut board = match Board::from_toml_str(&source) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            process::exit(1);
        }
    };

    let config = AlignConfig::new()
        .with_mode(cli.align)
        .with_position_mode(cli.position);
    let mut picker = TerminalPicker::stdio();
    let mut notifier = TerminalNotifier::stderr();

    if cli.dry_run {
        match prepare_alignment(&board, &mut picker, &mut notifier, cli.labels, &config) {
            Ok(prepared) => {
                let plan = &prepared.plan;
                println!(
                    "anchor {} at {}: {} {} label, {}, {}",
                    prepared.anchor_name,
                    plan.anchor.origin,
                    plan.orientation,
                    plan.kind,
                    config.mode,
                    config.position_mode
                );
                for mv in &plan.moves {
                    println!("  {}: {} -> {}", mv.footprint.display_name, mv.from, mv.to);
                }
                for fp in &plan.skipped {
                    println!("  {}: skipped, no {} text", fp.display_name, plan.kind);
                }
            }
            Err(e) => exit_for(e),
        }
        return;
    }

    if let Err(e) = run_alignment(&mut board, &mut picker, &mut notifier, cli.labels, &config) {
        exit_for(e);
    }

    let output = match board.to_toml_string() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, output) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_module("fp_label_align", log::LevelFilter::Debug);
    }
    builder.init();
}

/// Cancelling is a clean exit; other aborts, prompt failures included, were
/// already reported to the user
fn exit_for(err: AlignError) -> ! {
    match err {
        AlignError::AnchorCancelled => process::exit(0),
        _ => process::exit(1),
    }
}
