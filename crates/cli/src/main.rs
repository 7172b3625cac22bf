use anyhow::{bail, Context};
use hupai_core::{
    parse_tiles, standard_decomposition, validate_hand_with_rules, Decomposition, Hand,
    HandRules, MeldKind, Tile, TileCounts, ValidationReport, WinPattern,
};
use hupai_data::{
    builtin_example_hands, builtin_hand_rules, load_example_hands, load_hand_rules, ExampleHand,
};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HUPAI_LOG";
const EXIT_NOT_WINNING: i32 = 2;

const USAGE: &str = "\
usage: hupai <command> [options]

commands:
  validate <ids...>   check whether the tiles form a winning hand
  combos <ids...>     list pairs, pungs, kongs and chows the tiles could form
  examples            validate the example hands
  tiles               list every tile id

options:
  --json              print machine-readable output
  --explain           show how a winning hand splits into sets
  --strict            exit with status 2 when the hand does not win
  --rules <file>      read table rules from a JSON file
  --examples <file>   read example hands from a JSON file
  -v, --verbose       log search details to stderr

Tile ids are m1-m9, p1-p9, s1-s9, z1-z7 and f1-f8, separated by spaces
or commas. Set HUPAI_LOG to override log filtering.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliCommand {
    Validate,
    Combos,
    Examples,
    Tiles,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    command: CliCommand,
    ids: Vec<String>,
    json: bool,
    explain: bool,
    strict: bool,
    verbose: bool,
    rules: Option<PathBuf>,
    examples: Option<PathBuf>,
}

fn parse_cli_options(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut command = None;
    let mut ids = Vec::new();
    let mut json = false;
    let mut explain = false;
    let mut strict = false;
    let mut verbose = false;
    let mut rules = None;
    let mut examples = None;
    let mut idx = 0usize;
    while idx < args.len() {
        let arg = args[idx].as_str();
        match arg {
            "--json" => json = true,
            "--explain" => explain = true,
            "--strict" => strict = true,
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => command = Some(CliCommand::Help),
            "--rules" | "--examples" => {
                let Some(value) = args.get(idx + 1) else {
                    bail!("{arg} needs a file path");
                };
                let path = Some(PathBuf::from(value));
                if arg == "--rules" {
                    rules = path;
                } else {
                    examples = path;
                }
                idx += 1;
            }
            _ if arg.starts_with('-') => bail!("unknown option {arg}"),
            _ if command.is_none() => {
                command = Some(match arg {
                    "validate" | "check" => CliCommand::Validate,
                    "combos" => CliCommand::Combos,
                    "examples" => CliCommand::Examples,
                    "tiles" => CliCommand::Tiles,
                    "help" => CliCommand::Help,
                    other => bail!("unknown command {other}"),
                });
            }
            _ => ids.push(arg.to_string()),
        }
        idx += 1;
    }
    Ok(CliOptions {
        command: command.unwrap_or(CliCommand::Help),
        ids,
        json,
        explain,
        strict,
        verbose,
        rules,
        examples,
    })
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("install log subscriber: {err}"))
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(args: &[String]) -> anyhow::Result<i32> {
    let options = parse_cli_options(args)?;
    init_logging(options.verbose)?;
    tracing::debug!(command = ?options.command, ids = options.ids.len(), "starting");
    match options.command {
        CliCommand::Validate => run_validate(&options),
        CliCommand::Combos => run_combos(&options).map(|_| 0),
        CliCommand::Examples => run_examples(&options).map(|_| 0),
        CliCommand::Tiles => run_tiles(&options).map(|_| 0),
        CliCommand::Help => {
            println!("{USAGE}");
            Ok(0)
        }
    }
}

fn read_rules(path: Option<&Path>) -> anyhow::Result<HandRules> {
    match path {
        Some(path) => load_hand_rules(path),
        None => builtin_hand_rules(),
    }
}

fn read_tiles(ids: &[String]) -> anyhow::Result<Vec<Tile>> {
    let joined = ids.join(" ");
    let tiles = parse_tiles(&joined).with_context(|| format!("parse tiles {joined:?}"))?;
    Ok(tiles)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}

fn tile_list(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| tile.id())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Serialize)]
struct ValidateOutput {
    #[serde(flatten)]
    report: ValidationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    decomposition: Option<Decomposition>,
}

fn run_validate(options: &CliOptions) -> anyhow::Result<i32> {
    let rules = read_rules(options.rules.as_deref())?;
    let tiles = read_tiles(&options.ids)?;
    let result = validate_hand_with_rules(&tiles, rules);

    let scoring: Vec<Tile> = tiles.iter().copied().filter(|tile| !tile.is_bonus()).collect();
    let counts = TileCounts::from_tiles(&scoring);
    let decomposition = match (options.explain, result.pattern()) {
        (true, Some(WinPattern::Standard)) => standard_decomposition(&counts),
        _ => None,
    };

    if options.json {
        print_json(&ValidateOutput {
            report: result.report(),
            decomposition,
        })?;
    } else {
        println!("{}", result.reason());
        if !result.invalid_tiles().is_empty() {
            println!("over limit: {}", tile_list(result.invalid_tiles()));
        }
        if let Some(decomposition) = &decomposition {
            println!("  pair  {} {}", decomposition.pair, decomposition.pair);
            for meld in &decomposition.melds {
                let kind = match meld.kind {
                    MeldKind::Pung => "pung",
                    MeldKind::Chow => "chow",
                };
                println!("  {kind}  {}", tile_list(&meld.tiles));
            }
        }
        if options.explain && result.pattern() == Some(WinPattern::SevenPairs) {
            for (tile, count) in counts.iter() {
                for _ in 0..count / 2 {
                    println!("  pair  {tile} {tile}");
                }
            }
        }
    }

    if options.strict && !result.is_winning() {
        return Ok(EXIT_NOT_WINNING);
    }
    Ok(0)
}

fn run_combos(options: &CliOptions) -> anyhow::Result<()> {
    let tiles = read_tiles(&options.ids)?;
    let hand = Hand::from_tiles(&tiles).context("build hand")?;
    let combos = hand.potential_combos();
    if options.json {
        return print_json(&combos);
    }
    println!("slots: {}", tile_list(hand.tiles()));
    if combos.is_empty() {
        println!("no combos");
    }
    for combo in &combos {
        let slots = combo
            .indices
            .iter()
            .map(|idx| idx.to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{:<5} {:<12} [{slots}]",
            combo.combo_type.name(),
            tile_list(&combo.tiles)
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct ExampleOutput<'a> {
    #[serde(flatten)]
    hand: &'a ExampleHand,
    report: ValidationReport,
}

fn run_examples(options: &CliOptions) -> anyhow::Result<()> {
    let rules = read_rules(options.rules.as_deref())?;
    let hands = match options.examples.as_deref() {
        Some(path) => load_example_hands(path)?,
        None => builtin_example_hands()?,
    };
    if options.json {
        let output: Vec<ExampleOutput> = hands
            .iter()
            .map(|hand| ExampleOutput {
                hand,
                report: hand.validate(rules).report(),
            })
            .collect();
        return print_json(&output);
    }
    for hand in &hands {
        let result = hand.validate(rules);
        println!("{} ({})", hand.name, hand.description);
        println!("  {}", tile_list(&hand.tiles));
        println!("  {}", result.reason());
    }
    Ok(())
}

#[derive(Serialize)]
struct TileOutput {
    id: String,
    name: String,
    suit: &'static str,
    face: String,
    unicode: char,
}

fn run_tiles(options: &CliOptions) -> anyhow::Result<()> {
    let catalog = Tile::catalog();
    if options.json {
        let output: Vec<TileOutput> = catalog
            .into_iter()
            .map(|tile| TileOutput {
                id: tile.id(),
                name: tile.name(),
                suit: tile.suit().display_name(),
                face: tile.face(),
                unicode: tile.unicode(),
            })
            .collect();
        return print_json(&output);
    }
    for tile in catalog {
        println!("{:<3} {}  {}", tile.id(), tile.unicode(), tile.name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn parses_command_ids_and_flags() {
        let options = parse_cli_options(&args("validate m1 m2,m3 --json --explain -v"))
            .expect("parse");
        assert_eq!(options.command, CliCommand::Validate);
        assert_eq!(options.ids, vec!["m1", "m2,m3"]);
        assert!(options.json && options.explain && options.verbose);
        assert!(!options.strict);
    }

    #[test]
    fn rules_flag_takes_a_path() {
        let options =
            parse_cli_options(&args("examples --rules table.json")).expect("parse");
        assert_eq!(options.command, CliCommand::Examples);
        assert_eq!(options.rules, Some(PathBuf::from("table.json")));
        assert!(options.ids.is_empty());
        assert!(parse_cli_options(&args("validate --rules")).is_err());
    }

    #[test]
    fn defaults_to_help_and_rejects_unknown_input() {
        assert_eq!(
            parse_cli_options(&[]).expect("parse").command,
            CliCommand::Help
        );
        assert!(parse_cli_options(&args("shuffle")).is_err());
        assert!(parse_cli_options(&args("validate --fast")).is_err());
    }

    #[test]
    fn second_logging_install_is_reported() {
        let _ = init_logging(false);
        let err = init_logging(true).expect_err("already installed");
        assert!(err.to_string().starts_with("install log subscriber"));
    }

    #[test]
    fn reads_ids_split_across_arguments() {
        let tiles = read_tiles(&args("m1,m2 c3 f1")).expect("tiles");
        assert_eq!(tile_list(&tiles), "m1 m2 m3 f1");
        assert!(read_tiles(&args("m1 x9")).is_err());
    }
}
