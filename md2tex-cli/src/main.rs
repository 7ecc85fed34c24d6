// Command-line interface for md2tex
//
// This binary converts line-oriented Markdown files into LaTeX documents.
//
// The inspect command is a development aid: it dumps the normalized lines or the parsed parts
// so you can see what the parser made of a file before anything is rendered.
//
// Converting:
//
// The source format is auto-detected from the file extension and falls back to markdown, so any
// text file can be converted. --parser overrides the detection. The target defaults to latex.
// Usage:
//  md2tex <input> [-o <file>] [-t <title>] [-a <author>] [-d <date> | -n]  - Convert (default)
//  md2tex convert <input> [--to <format>] [-o <file>]                      - Same as above (explicit)
//  md2tex inspect <path> [<transform>]      - Execute a transform (defaults to "parts-simple")
//  md2tex --list-formats                    - List available formats
//  md2tex --list-transforms                 - List available transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  md2tex notes.md --extra-packages amsmath,booktabs
//  md2tex inspect notes.md lines-simple --extra-show-linum false

mod transforms;

use chrono::Local;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use md2tex_babel::formats::LatexFormat;
use md2tex_babel::publish::{publish_with_registry, PublishArtifact, PublishSpec};
use md2tex_babel::{DocumentOptions, FormatRegistry};
use md2tex_config::{Loader, Md2TexConfig};
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DATE_FORMAT: &str = "%Y/%-m/%-d";
const DEFAULT_PARSER: &str = "markdown";
const SUBCOMMANDS: &[&str] = &["inspect", "convert", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("md2tex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert line-oriented Markdown into LaTeX")
        .long_about(
            "md2tex reads a small Markdown dialect (headings, pipe tables, lists, images,\n\
            fenced code, <meta> captions) and writes a LaTeX document.\n\n\
            Commands:\n  \
            - convert: Markdown to LaTeX (default command)\n  \
            - inspect: View normalized lines or parsed parts\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            md2tex notes.md                          # LaTeX to stdout\n  \
            md2tex notes.md -o notes.tex -t Notes -n # Titled document dated today\n  \
            md2tex notes.md --to json                # Parsed parts as JSON\n  \
            md2tex inspect notes.md lines-simple     # Normalized lines",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a md2tex.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser decisions to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect what the parser sees")
                .long_about(
                    "View a Markdown file at different processing stages.\n\n\
                    Transforms (stage-format):\n  \
                    - lines-simple:  Normalized lines, one per row, with source line numbers\n  \
                    - lines-json:    Normalized lines as JSON\n  \
                    - parts-simple:  Parsed parts, one summary per row (default)\n  \
                    - parts-json:    Parsed parts as JSON\n\n\
                    Extra Parameters:\n  \
                    --extra-show-linum false   Drop line numbers from lines-simple\n  \
                    --extra-pretty false       Compact JSON\n\n\
                    Examples:\n  \
                    md2tex inspect notes.md                 # Part summary (default)\n  \
                    md2tex inspect notes.md lines-simple    # See where line breaks split",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'parts-simple'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Markdown file (default command)")
                .long_about(
                    "Convert a Markdown file to LaTeX or to a JSON dump of its parts.\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\
                    Preamble settings come from md2tex.toml (or --config) and can be\n\
                    overridden per run with the flags below.\n\n\
                    Examples:\n  \
                    md2tex convert notes.md -o notes.tex       # Write a file\n  \
                    md2tex notes.md -t 'Lab report' -a Me -n   # Title block, dated today\n  \
                    md2tex notes.md -c article -w 8cm          # Other class, wider images",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .short('t')
                        .help("Document title"),
                )
                .arg(
                    Arg::new("author")
                        .long("author")
                        .short('a')
                        .help("Document author"),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .short('d')
                        .help("Document date, written as given"),
                )
                .arg(
                    Arg::new("now")
                        .long("now")
                        .short('n')
                        .help("Date the document today (YYYY/M/D)")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("date"),
                )
                .arg(
                    Arg::new("class")
                        .long("class")
                        .short('c')
                        .help("LaTeX document class (default: jsarticle)"),
                )
                .arg(
                    Arg::new("picture-width")
                        .long("picture-width")
                        .visible_alias("width")
                        .short('w')
                        .help("Width of included images (default: 5cm)"),
                )
                .arg(
                    Arg::new("parser")
                        .long("parser")
                        .visible_alias("from")
                        .short('p')
                        .help("Source format (auto-detected from file extension, else markdown)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (default from config: latex)")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }
    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            apply_flag_overrides(&mut config, sub_matches);

            let registry = FormatRegistry::default();
            let from = match sub_matches.get_one::<String>("parser") {
                Some(f) => f.to_string(),
                None => registry
                    .detect_format_from_filename(input)
                    .unwrap_or_else(|| DEFAULT_PARSER.to_string()),
            };
            let to = sub_matches
                .get_one::<String>("to")
                .cloned()
                .unwrap_or_else(|| config.convert.to.clone());

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, &to, output, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &Md2TexConfig,
) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    println!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &Md2TexConfig,
) {
    let mut registry = FormatRegistry::default();
    registry.register(LatexFormat::new(DocumentOptions::from(&config.document)));

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    debug!(input, from, to, "converting");
    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Error: {input}: {e}");
        std::process::exit(1);
    });

    let mut spec = PublishSpec::new(&doc, to).with_options(extra_params.clone());
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    match publish_with_registry(&registry, spec) {
        Ok(result) => match result.artifact {
            PublishArtifact::InMemory(text) => print!("{text}"),
            PublishArtifact::File(path) => debug!(path = %path.display(), "done"),
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let direction = match (format.supports_parsing(), format.supports_serialization()) {
                (true, true) => "in/out",
                (true, false) => "in",
                (false, true) => "out",
                (false, false) => "-",
            };
            println!(
                "  {name:<10} {direction:<6} .{:<16} {}",
                format.file_extensions().join(", ."),
                format.description()
            );
        }
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  lines  - Normalized lines (after double-space line break splitting)");
    println!("  parts  - Parsed document parts\n");
    println!("Formats:");
    println!("  json   - JSON output");
    println!("  simple - One row per line or part\n");
    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Md2TexConfig {
    let loader = Loader::new().with_optional_file("md2tex.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Moves preamble-related extras into the document config so they are
/// applied through the registered LaTeX format.
fn apply_config_overrides(config: &mut Md2TexConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["class"]) {
        config.document.class = raw;
    }
    if let Some(raw) = take_override(extra_params, &["picture-width", "width"]) {
        config.document.picture_width = raw;
    }
    if let Some(raw) = take_override(extra_params, &["title"]) {
        config.document.title = Some(raw);
    }
    if let Some(raw) = take_override(extra_params, &["author"]) {
        config.document.author = Some(raw);
    }
    if let Some(raw) = take_override(extra_params, &["date"]) {
        config.document.date = Some(raw);
    }
    if let Some(raw) = take_override(extra_params, &["packages"]) {
        config.document.packages = split_packages(&raw);
    }
    if let Some(raw) = extra_params.remove("pretty-json") {
        config.inspect.pretty_json = parse_bool_arg("pretty-json", &raw);
    }
}

/// Explicit convert flags win over config files and extras.
fn apply_flag_overrides(config: &mut Md2TexConfig, matches: &ArgMatches) {
    let document = &mut config.document;
    if let Some(class) = matches.get_one::<String>("class") {
        document.class = class.clone();
    }
    if let Some(width) = matches.get_one::<String>("picture-width") {
        document.picture_width = width.clone();
    }
    if let Some(title) = matches.get_one::<String>("title") {
        document.title = Some(title.clone());
    }
    if let Some(author) = matches.get_one::<String>("author") {
        document.author = Some(author.clone());
    }
    if let Some(date) = matches.get_one::<String>("date") {
        document.date = Some(date.clone());
    }
    if matches.get_flag("now") {
        document.date = Some(Local::now().format(DATE_FORMAT).to_string());
    }
}

fn build_inspect_params(
    config: &Md2TexConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert(
        "pretty".to_string(),
        if config.inspect.pretty_json {
            "true".to_string()
        } else {
            "false".to_string()
        },
    );
    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }
    params
}

fn split_packages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
