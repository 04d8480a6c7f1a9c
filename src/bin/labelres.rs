#[macro_use] extern crate log;
extern crate clap;
extern crate tokfilt;

use clap::{Arg, ArgMatches};
use tokfilt::cli;
use tokfilt::filters::labels;
use tokfilt::logging::{initialize_logging, level_filter};

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    let ifile = cli::input_name(&args);
    let ofile = cli::output_name(&args);

    debug!("Arguments:\n\tVerbosity: {}\n\tPrint Table: {}\n\tOutfile: {}\n\tInfile: {}",
        level_filter(args.occurrences_of("verbose")),
        args.is_present("print-table"),
        ofile,
        ifile
    );

    let text = match cli::read_input(ifile) {
        Err(err) => {
            error!("fatal: unable to read input `{}`: {}", ifile, err);
            std::process::exit(1);
        },
        Ok(text) => text,
    };

    let resolved = match labels::resolve(&text) {
        Err(err) => {
            error!("fatal: {}", err);
            std::process::exit(1);
        },
        Ok(resolved) => resolved,
    };

    if args.is_present("print-table") {
        eprint!("{}", cli::label_grid(&resolved.labels));
    }

    let mut out = resolved.joined();
    out.push('\n');

    if let Err(err) = cli::write_output(ofile, &out) {
        error!("fatal: unable to write output `{}`: {}", ofile, err);
        std::process::exit(1);
    }
}

fn process_arguments() -> ArgMatches<'static> {
    cli::app("labelres")
        .about("Resolves `name:` label definitions and `$name` references in a comma-separated token list")
        .arg(Arg::with_name("print-table")
            .short("d")
            .long("print-table")
            .alias("show")
            .takes_value(false)
            .help("prints the label table to STDERR after resolution"))
        .get_matches()
}
