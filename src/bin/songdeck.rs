use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use songdeck::deck::{self, Background, Deck, DeckRequest, SlideKind};
use songdeck::ooxml::pptx::PptxWriter;

#[derive(Parser, Debug)]
#[command(name = "songdeck", version)]
struct Cli {
    /// Log pipeline progress to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a .pptx deck from a request document.
    Build(BuildArgs),
    /// Print the slide plan without writing a file.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input request YAML.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PPTX path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input request YAML.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_deck(path: &Path) -> anyhow::Result<Deck> {
    let request = DeckRequest::load(path)
        .with_context(|| format!("load request '{}'", path.display()))?;
    let fonts = request.read_font_names().context("read font files")?;
    let deck = deck::build(&request, &fonts).context("resolve deck")?;
    Ok(deck)
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let deck = load_deck(&args.in_path)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    PptxWriter::new(&deck)
        .save(&args.out)
        .with_context(|| format!("write deck '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} slides to {}",
        deck.slide_count(),
        args.out.display()
    );
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let deck = load_deck(&args.in_path)?;

    for (index, slide) in deck.slides.iter().enumerate() {
        let kind = match slide.kind {
            SlideKind::Title => "title",
            SlideKind::Content => "lyric",
        };
        let background = match &slide.background {
            Background::Solid(color) => color.to_string(),
            Background::Image(path) => path.display().to_string(),
        };
        let runs = slide
            .runs
            .iter()
            .map(|run| format!("{:?} {} {}pt {}", run.text, run.color, run.size_pt, run.font))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{:>4} {kind:<5} [{background}] {runs}", index + 1);
    }
    Ok(())
}
