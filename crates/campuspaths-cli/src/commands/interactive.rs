//! Menu-driven session reading commands from standard input.

use std::io::{self, BufRead, Write};

use tracing::debug;

use campuspaths_lib::{CampusMap, RouteSummary};

use crate::output::{render_buildings, render_text};

const PROMPT: &str = "Enter an option ('m' to see the menu): ";

/// Run the interactive menu until `q` or end of input.
///
/// Blank lines and lines starting with `#` are echoed without a new prompt,
/// which lets scripted sessions carry comments.
pub fn run_interactive<R: BufRead, W: Write>(
    map: &CampusMap,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    show_menu(out)?;
    writeln!(out)?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    while let Some(command) = read_line(input)? {
        match command.as_str() {
            "q" => break,
            "m" => show_menu(out)?,
            "r" => {
                write!(out, "Abbreviated name of starting building: ")?;
                out.flush()?;
                let start = read_line(input)?.unwrap_or_default();
                write!(out, "Abbreviated name of ending building: ")?;
                out.flush()?;
                let end = read_line(input)?.unwrap_or_default();
                let result = map.find_path(&start, &end);
                render_text(&RouteSummary::from_result(map, &start, &end, &result), out)?;
            }
            "b" => render_buildings(map, out)?,
            line if line.is_empty() || line.starts_with('#') => {
                writeln!(out, "{line}")?;
                continue;
            }
            other => {
                debug!(option = other, "unknown interactive option");
                writeln!(out, "Unknown option")?;
            }
        }
        writeln!(out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    Ok(())
}

fn show_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Menu:")?;
    writeln!(out, "\tr to find a route")?;
    writeln!(out, "\tb to see a list of all buildings")?;
    writeln!(out, "\tq to quit")
}

/// Next input line without its terminator, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
