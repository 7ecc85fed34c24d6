use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["lines-json", "lines-simple", "parts-json", "parts-simple"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md2tex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert line-oriented Markdown into LaTeX")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available inspect transforms")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect what the parser sees")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Markdown file (default command)")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("title").long("title").short('t'))
                .arg(Arg::new("author").long("author").short('a'))
                .arg(Arg::new("date").long("date").short('d'))
                .arg(
                    Arg::new("now")
                        .long("now")
                        .short('n')
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("class").long("class").short('c'))
                .arg(
                    Arg::new("picture-width")
                        .long("picture-width")
                        .visible_alias("width")
                        .short('w'),
                )
                .arg(
                    Arg::new("parser")
                        .long("parser")
                        .visible_alias("from")
                        .short('p')
                        .value_parser(["markdown"]),
                )
                .arg(Arg::new("to").long("to").value_parser(["latex", "json"])),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "md2tex", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "md2tex", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "md2tex", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
