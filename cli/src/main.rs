use std::{fs::OpenOptions, io::Read, ops::Range, process::ExitCode};

use clap::{command, error::ErrorKind, Arg, Command};
use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    files::SimpleFiles,
    term::{
        self,
        termcolor::{ColorChoice, StandardStream},
    },
};
use fen_diagram::Diagram;
use fen_parsers::FenErr;
use log::{debug, error};

mod printer_err;
use printer_err::PrinterErr;

fn main() -> ExitCode {
    env_logger::init();

    let matches = match create_command().try_get_matches() {
        Err(err) => {
            err.print().ok();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => PrinterErr::Usage.exit_code(),
            };
        }
        Ok(matches) => matches,
    };

    let file_name = matches
        .get_one::<String>("fen file")
        .expect("'fen file' is required");

    let color_choice = match matches.get_one::<String>("color").map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    };

    match handle_print(file_name, color_choice) {
        Err(err) => err.exit_code(),
        Ok(()) => ExitCode::SUCCESS,
    }
}

fn create_command() -> Command {
    command!()
        .about("Prints the board described by a FEN file, white at the bottom")
        .arg(
            Arg::new("fen file")
                .required(true)
                .value_name("FEN_FILE")
                .help("a file whose first field is a FEN piece placement"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_parser(["auto", "always", "never"])
                .default_value("auto")
                .help("when to color error diagnostics"),
        )
}

fn has_fen_extension(file_name: &str) -> bool {
    file_name.ends_with(".fen")
}

fn handle_print(file_name: &str, color_choice: ColorChoice) -> Result<(), PrinterErr> {
    if !has_fen_extension(file_name) {
        error!("{}: {file_name}", PrinterErr::InvalidExtension);
        return Err(PrinterErr::InvalidExtension);
    }

    let fen = match OpenOptions::new().read(true).write(false).open(file_name) {
        Err(err) => {
            error!("Failed to open {file_name}. Inner error: {err}");
            return Err(PrinterErr::Unreadable);
        }
        Ok(mut file) => {
            let mut fen = String::new();
            if let Err(err) = file.read_to_string(&mut fen) {
                error!("Failed to read {file_name}. Inner error: {err}");
                return Err(PrinterErr::Unreadable);
            }
            fen
        }
    };

    match fen_parsers::parse_fen(&fen) {
        Err(err) => {
            error!("{file_name}: {err}");
            emit_fen_diagnostic(file_name, &fen, &err, color_choice);
            Err(PrinterErr::MalformedField)
        }
        Ok(layout) => {
            debug!("{file_name} holds placement {layout}");
            print!("{}", Diagram::new(&layout).with_title(file_name));
            Ok(())
        }
    }
}

fn emit_fen_diagnostic(file_name: &str, fen: &str, err: &FenErr, color_choice: ColorChoice) {
    let mut files = SimpleFiles::new();
    let file_id = files.add(file_name.to_string(), fen.to_string());

    let writer = StandardStream::stderr(color_choice);
    let config = codespan_reporting::term::Config::default();

    let diagnostic = Diagnostic::error()
        .with_message(PrinterErr::MalformedField.to_string())
        .with_label(
            Label::primary(file_id, label_range(err.span(), fen.len()))
                .with_message(err.kind().to_string()),
        );

    term::emit(&mut writer.lock(), &config, &files, &diagnostic).ok();
}

/// Errors found at the end of the field carry an empty span. Widen those to one
/// byte so the label has something to underline.
fn label_range(span: Range<usize>, source_len: usize) -> Range<usize> {
    let mut start = span.start;
    let mut end = span.end;
    if start == end {
        if end < source_len {
            end += 1;
        } else if start > 0 {
            start -= 1;
        }
    }

    start..end
}
