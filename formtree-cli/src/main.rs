mod error;
mod script;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use formtree::{
    Autocomplete, AutocompleteConfig, AutocompleteProps, Commit, Item, MatchMode, Row,
    SelectedValue, check_items, check_value,
};
use log::{LevelFilter, debug, info, warn};
use serde_json::json;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use crate::error::CliError;
use crate::script::Command;

/// Replay widget interactions against a selection tree.
#[derive(Parser, Debug)]
#[command(name = "formtree")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "The script is read from stdin when --script is not given.")]
struct Cli {
    /// JSON file with the item list
    items: PathBuf,

    /// Interaction script, one command per line
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// JSON file with the control configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name reported with every commit
    #[arg(long, default_value = "formtree")]
    name: String,

    /// Initially selected path-key (can be specified multiple times)
    #[arg(long = "value", value_name = "PATH_KEY")]
    values: Vec<String>,

    /// Allow several selected items
    #[arg(short, long)]
    multiselect: bool,

    /// Keep the single selection when it is toggled again
    #[arg(long)]
    disable_deselect: bool,

    /// Treat an empty selection as invalid
    #[arg(long)]
    required: bool,

    /// Ignore all interaction
    #[arg(long)]
    disabled: bool,

    /// Match typed text fuzzily instead of by substring
    #[arg(long)]
    fuzzy: bool,

    /// Separator between keys in path-keys
    #[arg(long)]
    separator: Option<char>,

    /// Validity override (true or false)
    #[arg(long)]
    valid: Option<bool>,

    /// Print one JSON object per event
    #[arg(long)]
    json: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = load_config(&cli)?;
    let items = Item::list_from_json(&read(&cli.items)?)?;
    if let Err(err) = check_items(&items, config.separator) {
        warn!("{}", err);
    }

    let script = match &cli.script {
        Some(path) => read(path)?,
        None => io::read_to_string(io::stdin())?,
    };
    let commands = script::parse(&script)?;

    let value = initial_value(&cli.values, config.multiselect);
    let mut props = AutocompleteProps::new(cli.name.clone(), items).with_value(value.clone());
    if let Some(valid) = cli.valid {
        props = props.with_valid(valid);
    }

    let mut control = Autocomplete::new(config);
    control.set_props(props);
    if let Err(err) = check_value(control.tree(), &value) {
        warn!("{}", err);
    }
    info!(
        "loaded {} nodes, replaying {} commands",
        control.tree().len(),
        commands.len()
    );

    let mut printer = Printer::new(io::stdout().lock(), cli.json);
    printer.status(&control, "init")?;
    replay(&mut control, &commands, &mut printer)
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<(), CliError> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|err| CliError::file(path, err))?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|err| CliError::file(path, err))
}

/// Config file first, then flags on top.
fn load_config(cli: &Cli) -> Result<AutocompleteConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&read(path)?).map_err(CliError::Config)?,
        None => AutocompleteConfig::default(),
    };
    if cli.multiselect {
        config = config.multiselect();
    }
    if cli.disable_deselect {
        config = config.disable_deselect();
    }
    if cli.required {
        config = config.required();
    }
    if cli.disabled {
        config = config.disabled();
    }
    if cli.fuzzy {
        config = config.with_match_mode(MatchMode::Fuzzy);
    }
    if let Some(separator) = cli.separator {
        config = config.with_separator(separator);
    }
    Ok(config)
}

fn initial_value(values: &[String], multiselect: bool) -> SelectedValue {
    match values {
        [] => SelectedValue::None,
        [one] if !multiselect => SelectedValue::One(one.clone()),
        many => SelectedValue::Many(many.to_vec()),
    }
}

fn replay<W: Write>(
    control: &mut Autocomplete,
    commands: &[Command],
    printer: &mut Printer<W>,
) -> Result<(), CliError> {
    for command in commands {
        debug!("replaying {:?}", command);
        match command {
            Command::Open => {
                control.open();
                printer.status(control, "open")?;
            }
            Command::Type(text) => {
                control.on_filter_text_changed(text);
                printer.status(control, "type")?;
            }
            Command::Toggle(path) => {
                if control.tree().find(path).is_none() {
                    warn!("no item with path-key '{}'", path);
                }
                match control.on_item_activated(path).commit {
                    Some(commit) => printer.commit(&commit)?,
                    None => printer.status(control, "toggle")?,
                }
            }
            Command::SelectAll => {
                control.on_select_all_activated();
                printer.status(control, "select-all")?;
            }
            Command::Clear => match control.on_clear() {
                Some(outcome) => printer.commit(&outcome.commit)?,
                None => {
                    warn!("'{}' cannot be cleared", control.props().name);
                    printer.status(control, "clear")?;
                }
            },
            Command::Commit => {
                let commit = control.on_commit();
                printer.commit(&commit)?;
            }
            Command::Scroll(offset) => {
                control.on_scroll(*offset);
                printer.status(control, "scroll")?;
            }
            Command::Rows => printer.rows(&control.rows())?,
        }
    }
    Ok(())
}

struct Printer<W> {
    out: W,
    json: bool,
}

impl<W: Write> Printer<W> {
    fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    fn status(&mut self, control: &Autocomplete, event: &str) -> Result<(), CliError> {
        let selected = control.selected().len();
        if self.json {
            return self.line(&json!({
                "event": event,
                "text": control.text(),
                "open": control.is_open(),
                "rows": control.row_count(),
                "selected": selected,
                "clearable": control.clear_button_visible(),
            }));
        }
        writeln!(
            self.out,
            "{event}: text={:?} open={} rows={} selected={}",
            control.text(),
            control.is_open(),
            control.row_count(),
            selected
        )?;
        Ok(())
    }

    fn rows(&mut self, rows: &[Row<'_>]) -> Result<(), CliError> {
        if self.json {
            let rows: Vec<_> = rows
                .iter()
                .map(|row| {
                    json!({
                        "path": row.path(),
                        "value": row.value(),
                        "tooltip": row.tooltip(),
                        "depth": row.depth,
                        "selected": row.is_selected(),
                        "parent": row.is_parent(),
                    })
                })
                .collect();
            return self.line(&json!({ "event": "rows", "rows": rows }));
        }
        for row in rows {
            let mark = if row.is_selected() { "[x]" } else { "[ ]" };
            let branch = if row.is_parent() { "+" } else { " " };
            writeln!(
                self.out,
                "{}{mark}{branch} {} ({})",
                "  ".repeat(row.depth),
                row.value(),
                row.path()
            )?;
        }
        Ok(())
    }

    fn commit(&mut self, commit: &Commit) -> Result<(), CliError> {
        if self.json {
            return self.line(&json!({ "event": "commit", "commit": commit }));
        }
        let value = serde_json::to_string(&commit.value).map_err(CliError::Output)?;
        writeln!(
            self.out,
            "commit {}: value={value} validity={:?} preview={:?}",
            commit.name, commit.validity, commit.preview
        )?;
        Ok(())
    }

    fn line(&mut self, value: &serde_json::Value) -> Result<(), CliError> {
        let text = serde_json::to_string(value).map_err(CliError::Output)?;
        writeln!(self.out, "{text}")?;
        Ok(())
    }
}
