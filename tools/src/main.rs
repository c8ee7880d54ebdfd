use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pcfg::{CkyParser, GrammarEstimator, ParserConfig};
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use treebank::{CollapseOptions, MarkovOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Debug logging, RUST_LOG takes precedence
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TrainArgs {
    /// Bracketed treebank file
    treebank: PathBuf,
    /// Trees are already in Chomsky Normal Form
    #[arg(long)]
    binarized: bool,
    /// Siblings kept in synthetic labels, unbounded if absent
    #[arg(long)]
    horizontal: Option<usize>,
    /// Ancestors annotated on phrasal labels
    #[arg(long, default_value_t = 0)]
    vertical: usize,
}

impl TrainArgs {
    fn markov(&self) -> MarkovOptions {
        MarkovOptions{
            horizontal: self.horizontal,
            vertical: self.vertical,
            ..MarkovOptions::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Induce a PCFG from a treebank and print its most frequent productions
    Induce {
        #[command(flatten)]
        train: TrainArgs,
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
    /// Induce a PCFG and parse sentences with it. Reads stdin when no
    /// sentence is given, interactively on a terminal.
    Parse {
        #[command(flatten)]
        train: TrainArgs,
        /// Start symbol. Unary chains at the root are joined while
        /// binarizing, so a `(ROOT (S ...))` treebank starts at `ROOT+S`
        #[arg(long, default_value = "S")]
        start: String,
        #[arg(long)]
        max_tokens: Option<usize>,
        /// Fill chart spans of equal length concurrently
        #[arg(long)]
        parallel: bool,
        /// Undo binarization before printing
        #[arg(long)]
        debinarize: bool,
        sentence: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
    debug!("tracing initialised");
}

// Read, binarize and count a bracketed treebank
fn induce(text: &str, args: &TrainArgs) -> Result<GrammarEstimator> {
    let mut trees = treebank::read_trees(text).context("Failed to read treebank")?;
    if !args.binarized {
        let (collapse, markov) = (CollapseOptions::default(), args.markov());
        for tree in trees.iter_mut() {
            tree.collapse_unary(&collapse);
            tree.chomsky_normal_form(&markov);
        }
    }
    info!(trees = trees.len(), "read treebank");
    Ok(pcfg::train(&trees)?)
}

// Labels heading the trained trees, ie: candidate start symbols
fn root_labels(grammar: &GrammarEstimator) -> Vec<&str> {
    let rhs_labels: std::collections::HashSet<&str> = grammar.production_counts().keys()
        .filter_map(|p| match &p.rhs {
            pcfg::Rhs::Binary(left, right) => Some([left.as_ref(), right.as_ref()]),
            pcfg::Rhs::Terminal(_) => None,
        })
        .flatten()
        .collect();
    grammar.nonterminals()
        .map(|l| l.as_ref())
        .filter(|l| !rhs_labels.contains(l))
        .collect()
}

fn load(args: &TrainArgs) -> Result<GrammarEstimator> {
    let text = std::fs::read_to_string(&args.treebank)
        .with_context(|| format!("Failed to read {}", args.treebank.display()))?;
    induce(&text, args)
}

fn render(parser: &CkyParser, line: &str, start: &str, markov: Option<&MarkovOptions>) -> String {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match parser.parse(&tokens, start) {
        Err(e) => format!("Parse err: {}", e),
        Ok(None) => "no parse".to_string(),
        Ok(Some(best)) => {
            let mut tree = best.to_tree();
            if let Some(markov) = markov {
                tree.un_chomsky_normal_form(markov);
            }
            format!("{:.4}\t{}", best.score, tree)
        }
    }
}

fn repl(parser: &CkyParser, start: &str, markov: Option<&MarkovOptions>) -> Result<()> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new()?;
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e).context("Readline err"),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                println!("{}", render(parser, &line, start, markov));
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Induce{train, top} => {
            let grammar = load(&train)?;
            println!("{} productions, {} nonterminals",
                     grammar.num_productions(), grammar.lhs_counts().len());
            for (production, count) in grammar.top_productions(top) {
                println!("{:>6}  {:>8.4}  {}", count, grammar.scores()[production], production);
            }
        }
        Commands::Parse{train, start, max_tokens, parallel, debinarize, sentence} => {
            let grammar = load(&train)?;
            if !grammar.lhs_counts().contains_key(start.as_str()) {
                warn!(start = %start, roots = ?root_labels(&grammar), "start symbol never seen in treebank");
            }
            let parser = CkyParser::with_config(
                grammar.parsing_index(), ParserConfig{max_tokens, parallel});
            let markov = train.markov();
            let markov = debinarize.then_some(&markov);

            if !sentence.is_empty() {
                println!("{}", render(&parser, &sentence.join(" "), &start, markov));
            } else if io::stdin().is_terminal() {
                repl(&parser, &start, markov)?;
            } else {
                for line in io::stdin().lock().lines() {
                    let line = line?;
                    if !line.trim().is_empty() {
                        println!("{}", render(&parser, &line, &start, markov));
                    }
                }
            }
        }
    }
    Ok(())
}

///////////////////////////////////////////////////////////////////////////////
