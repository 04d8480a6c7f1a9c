//! Argument definitions and I/O plumbing shared by `hexfmt` and `labelres`.
use clap::{Arg, ArgMatches, App};
use term_grid::{Grid, GridOptions, Direction, Filling, Cell};

use std::fs::File;
use std::io::{self, Read, Write};

use crate::filters::labels::LabelTable;

/// Name given to STDIN/STDOUT in log messages, and accepted as INPUT.
pub const STDIO: &str = "-";

/// Builds an `App` carrying the arguments common to both filters.
pub fn app<'a, 'b>(name: &'a str) -> App<'a, 'b> {
    App::new(name)
        .version(option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"))
        .author(option_env!("CARGO_PKG_AUTHORS").unwrap_or(""))
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use (defaults to STDIN)")
            .required(false)
            .multiple(false)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .arg(Arg::with_name("output")
            .short("o")
            .takes_value(true)
            .help("write output to an outfile instead of STDOUT"))
}

pub fn input_name<'a>(args: &'a ArgMatches) -> &'a str {
    args.value_of("INPUT").unwrap_or(STDIO)
}

pub fn output_name<'a>(args: &'a ArgMatches) -> &'a str {
    args.value_of("output").unwrap_or(STDIO)
}

/// Reads the whole of `name`, or STDIN for `-`.
pub fn read_input(name: &str) -> io::Result<String> {
    let mut text = String::new();
    if name == STDIO {
        io::stdin().read_to_string(&mut text)?;
    } else {
        File::open(name)?.read_to_string(&mut text)?;
    }
    Ok(text)
}

/// Writes `text` to `name`, or STDOUT for `-`.
pub fn write_output(name: &str, text: &str) -> io::Result<()> {
    if name == STDIO {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(text.as_bytes())?;
        lock.flush()
    } else {
        File::create(name)?.write_all(text.as_bytes())
    }
}

/// Renders the label table as an `index: name` grid.
pub fn label_grid(labels: &LabelTable) -> String {
    if labels.is_empty() {
        return String::new();
    }

    let mut grid = Grid::new(GridOptions {
        filling:     Filling::Spaces(1),
        direction:   Direction::LeftToRight,
    });

    for (name, idx) in labels.entries() {
        grid.add(Cell::from(format!("{}:", idx)));
        grid.add(Cell::from(name));
    }

    grid.fit_into_columns(2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_args() {
        let args = app("test").get_matches_from(vec!["test", "-vv", "-o", "out.txt", "in.txt"]);
        assert_eq!(args.occurrences_of("verbose"), 2);
        assert_eq!(input_name(&args), "in.txt");
        assert_eq!(output_name(&args), "out.txt");

        let args = app("test").get_matches_from(vec!["test"]);
        assert_eq!(args.occurrences_of("verbose"), 0);
        assert_eq!(input_name(&args), STDIO);
        assert_eq!(output_name(&args), STDIO);
    }

    #[test]
    fn test_label_grid() {
        let mut labels = LabelTable::new();
        labels.define("start", 0);
        labels.define("end", 12);

        let grid = label_grid(&labels);
        let rows: Vec<&str> = grid.lines().map(|l| l.trim_end()).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("0:"));
        assert!(rows[0].ends_with("start"));
        assert!(rows[1].starts_with("12:"));
        assert!(rows[1].ends_with("end"));

        assert_eq!(label_grid(&LabelTable::new()), "");
    }
}
