// Command-line interface for docsmith
//
// This binary converts markup documents (Markdown, HTML) into Word packages.
//
// The conversion needs a source parser, which is auto-detected from the file
// extension and overridable with an explicit --from flag. Converted content
// can be appended onto an existing .docx passed via --template (or configured
// in docsmith.toml). The package is written to --output, or streamed to
// stdout so the tool composes with shell redirection.
//
// Usage:
//  docsmith <input> [-o <file>] [--template <docx>] [--from <parser>]  - Convert (default)
//  docsmith convert <input> [...]                                      - Same as above (explicit)
//  docsmith inspect <input> [--json]                                   - Show the block model

use clap::{Arg, ArgAction, Command, ValueHint};
use docsmith_config::{DocsmithConfig, InspectFormat, Loader};
use docsmith_press::outline::render_outline;
use docsmith_press::walker::walk;
use docsmith_press::{convert, ConvertArtifact, ConvertSpec, ParserRegistry};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("docsmith")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown and HTML documents to Word packages")
        .long_about(
            "docsmith converts markup documents into Word (.docx) packages.\n\n\
            Commands:\n  \
            - convert: Convert a markup file to .docx (default command)\n  \
            - inspect: Show the blocks a conversion would write\n\n\
            Examples:\n  \
            docsmith report.md -o report.docx           # 'convert' is optional\n  \
            docsmith report.md > report.docx            # Package bytes go to stdout\n  \
            docsmith notes.md -t letterhead.docx -o out.docx\n  \
            docsmith inspect report.md                  # Outline of the block model\n  \
            docsmith inspect report.md --json           # Same, as JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a docsmith.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a markup file to a .docx package (default command)")
                .long_about(
                    "Convert a markup document to a Word package.\n\n\
                    Supported parsers:\n  \
                    - markdown: CommonMark with tables and strikethrough (.md)\n  \
                    - html:     HTML documents or fragments (.html)\n\n\
                    The source parser is auto-detected from the file extension.\n\
                    Package bytes go to stdout by default, or use -o to write a file.\n\n\
                    Examples:\n  \
                    docsmith convert report.md -o report.docx\n  \
                    docsmith convert page.html --from html -o page.docx\n  \
                    docsmith convert notes.md --template letterhead.docx -o notes.docx\n  \
                    docsmith report.md -o report.docx            # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source parser (auto-detected from file extension if not specified)")
                        .long_help(
                            "Source parser to read the input with.\n\n\
                            If not specified, the parser is auto-detected from the file\n\
                            extension, falling back to the configured default.\n\
                            Use this option to override auto-detection.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .short('t')
                        .help("Template package to append onto")
                        .long_help(
                            "Path to a .docx whose content the converted blocks are\n\
                            appended after.\n\n\
                            A missing or unreadable template is ignored and the\n\
                            conversion starts from a fresh document.",
                        )
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .long_help(
                            "Path to write the package to.\n\n\
                            If not specified, the package bytes are streamed to stdout.\n\
                            The file is written atomically; a failed write leaves no\n\
                            partial output behind.",
                        )
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the blocks a conversion would write")
                .long_about(
                    "Parse the input and print the block model a conversion would\n\
                    write, without producing a package.\n\n\
                    Examples:\n  \
                    docsmith inspect report.md           # One block per line\n  \
                    docsmith inspect report.md --json    # Blocks as JSON",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source parser (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Render the block model as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "inspect"
                && args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                // Try parsing again with "convert" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let template = sub_matches
                .get_one::<String>("template")
                .map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, template, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let json = sub_matches.get_flag("json");
            handle_inspect_command(input, from, json, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from_flag: Option<&str>,
    template_flag: Option<&str>,
    output: Option<&str>,
    config: &DocsmithConfig,
) {
    let registry = ParserRegistry::default();
    let parser = resolve_parser(&registry, input, from_flag, config).unwrap_or_else(|msg| {
        eprintln!("Error: {msg}");
        std::process::exit(1);
    });

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    // An explicit --template wins over the configured default
    let template = template_flag
        .map(PathBuf::from)
        .or_else(|| config.convert.template_path());

    let mut spec = ConvertSpec::new(&source).with_parser(&parser);
    if let Some(path) = &template {
        spec = spec.with_template(path);
    }
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    let result = convert(spec).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    match result.artifact {
        ConvertArtifact::File(_) => {}
        ConvertArtifact::InMemory(bytes) => {
            std::io::stdout().write_all(&bytes).unwrap_or_else(|e| {
                eprintln!("Error writing to stdout: {e}");
                std::process::exit(1);
            });
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    input: &str,
    from_flag: Option<&str>,
    json_flag: bool,
    config: &DocsmithConfig,
) {
    let registry = ParserRegistry::default();
    let parser = resolve_parser(&registry, input, from_flag, config).unwrap_or_else(|msg| {
        eprintln!("Error: {msg}");
        std::process::exit(1);
    });

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let nodes = registry.parse(&parser, &source).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    let blocks = walk(&nodes);

    if json_flag || config.inspect.format == InspectFormat::Json {
        let rendered = serde_json::to_string_pretty(&blocks).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
        println!("{rendered}");
    } else {
        println!("{}", render_outline(&blocks));
    }
}

/// Decide which parser reads the input: an explicit --from wins, then
/// filename detection, then the configured default.
fn resolve_parser(
    registry: &ParserRegistry,
    input: &str,
    from_flag: Option<&str>,
    config: &DocsmithConfig,
) -> Result<String, String> {
    if let Some(name) = from_flag {
        if registry.has(name) {
            return Ok(name.to_string());
        }
        return Err(format!(
            "unknown parser '{name}' (available: {})",
            registry.list_parsers().join(", ")
        ));
    }

    if let Some(parser) = registry.detect_parser_from_filename(input) {
        return Ok(parser.name().to_string());
    }

    let name = &config.convert.format;
    if registry.has(name) {
        Ok(name.clone())
    } else {
        Err(format!(
            "configured default parser '{name}' is not registered (available: {})",
            registry.list_parsers().join(", ")
        ))
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> DocsmithConfig {
    let loader = Loader::new().with_optional_file("docsmith.toml");
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
