#[macro_use] extern crate log;
extern crate clap;
extern crate tokfilt;

use clap::{Arg, ArgMatches};
use tokfilt::cli;
use tokfilt::filters::hex::{self, Variant};
use tokfilt::logging::{initialize_logging, level_filter};

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    let variant = if args.is_present("raw") { Variant::Raw } else { Variant::Normalize };
    let ifile = cli::input_name(&args);
    let ofile = cli::output_name(&args);

    debug!("Arguments:\n\tVerbosity: {}\n\tVariant: {}\n\tOutfile: {}\n\tInfile: {}",
        level_filter(args.occurrences_of("verbose")),
        variant,
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

    let lines = match hex::format_list(&text, variant) {
        Err(err) => {
            error!("fatal: {}", err);
            std::process::exit(1);
        },
        Ok(lines) => lines,
    };

    let mut out = String::new();
    for line in lines.iter() {
        out.push_str(&line.to_string());
        out.push('\n');
    }

    if let Err(err) = cli::write_output(ofile, &out) {
        error!("fatal: unable to write output `{}`: {}", ofile, err);
        std::process::exit(1);
    }
}

fn process_arguments() -> ArgMatches<'static> {
    cli::app("hexfmt")
        .about("Formats a comma-separated list of decimal integers as hex lines")
        .arg(Arg::with_name("raw")
            .short("r")
            .long("raw")
            .takes_value(false)
            .help("print negative values with a sign instead of as 32-bit two's complement"))
        .get_matches()
}
