//! Sprouts CLI
//!
//! Usage:
//!   sprouts [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>   Display settings (TOML format)
//!   -s, --sentence        Print the sentence read off the heads
//!   -b, --brackets        Print the normalised bracket text
//!   --check               Report parser recoveries and exit
//!   --lazy-triangles      Draw triangles under every phrasal leaf
//!   --head-lines          Connect labels to heads with a line
//!   --hide-traces         Omit traces and movement arrows
//!   --data-url            Print the SVG as a base64 data URL
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use sprouts::{
    export_slug, parse_with_diagnostics, render_tree, svg_data_url, RenderConfig,
};

#[derive(Parser)]
#[command(name = "sprouts")]
#[command(about = "Draw syntax trees from labelled bracket notation")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Display settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the sentence read off the heads instead of SVG
    #[arg(short, long, conflicts_with_all = ["brackets", "check"])]
    sentence: bool,

    /// Print the normalised bracket text instead of SVG
    #[arg(short, long, conflicts_with = "check")]
    brackets: bool,

    /// Report what the parser had to repair, exiting non-zero if anything
    #[arg(long)]
    check: bool,

    /// Draw a triangle under every phrasal leaf (label ending in P)
    #[arg(long)]
    lazy_triangles: bool,

    /// Connect leaf labels to their heads with a line
    #[arg(long)]
    head_lines: bool,

    /// Omit traces and their movement arrows
    #[arg(long)]
    hide_traces: bool,

    /// Print the SVG as a base64 data URL
    #[arg(long)]
    data_url: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let config = match &cli.config {
        Some(path) => match RenderConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };
    let tree_config = config.tree.clone();
    // Flags only switch features on top of the config file
    let lazy_triangles = tree_config.lazy_triangles || cli.lazy_triangles;
    let head_lines = tree_config.head_lines || cli.head_lines;
    let show_traces = tree_config.show_traces && !cli.hide_traces;
    let tree_config = tree_config
        .with_lazy_triangles(lazy_triangles)
        .with_head_lines(head_lines)
        .with_show_traces(show_traces);

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let output = parse_with_diagnostics(&source);

    if cli.check {
        for diagnostic in &output.diagnostics {
            eprint!("{}", diagnostic.format(&source, &filename));
        }
        if !output.diagnostics.is_empty() {
            std::process::exit(1);
        }
        return;
    }

    // Recoveries are warnings; output is still produced
    for diagnostic in &output.diagnostics {
        eprint!("{}", diagnostic.format(&source, &filename));
    }

    if cli.sentence {
        println!("{}", output.tree.sentence());
        return;
    }
    if cli.brackets {
        println!("{}", output.tree.to_bracket_string());
        return;
    }

    let config = config.with_tree(tree_config);
    let svg = render_tree(&output.tree, &config);
    info!("rendered '{}' ({} nodes)", export_slug(&output.tree), output.tree.len());

    if cli.data_url {
        println!("{}", svg_data_url(&svg));
    } else {
        println!("{}", svg);
    }
}

fn print_intro() {
    println!(
        r#"Sprouts - syntax tree diagrams from labelled bracket notation

USAGE:
    sprouts [OPTIONS] [FILE]
    echo '<brackets>' | sprouts

OPTIONS:
    -c, --config       Display settings (TOML file)
    -s, --sentence     Print the sentence instead of SVG
    -b, --brackets     Print normalised bracket text instead of SVG
    --check            Report parser recoveries and exit
    --lazy-triangles   Triangles under every phrasal leaf
    --head-lines       Lines between leaf labels and heads
    --hide-traces      Omit traces and movement arrows
    --data-url         Print a base64 data URL
    -h, --help         Print help

QUICK START:
    echo '[S [NP she] [VP [V left]]]' | sprouts > she-left.svg

NOTATION:
    [Label head words]       A phrase with an optional head
    [DP_1 who] ... [DP_1 t]  Coindexed antecedent and trace
    [NP ^the old man]        Triangle over the head
    [C 0]                    Null head, drawn as ∅"#
    );
}
