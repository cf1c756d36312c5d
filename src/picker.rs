//! Interactive family picker.
//!
//! A searchable single-choice list over stdin/stdout: the user types a
//! name prefix to narrow the fetched catalog (case-insensitive, no
//! refetch), then a number to select. Scripts bypass the prompt with
//! `--family`.

use anyhow::{Result, bail};
use fontsnip_catalog::FontFamily;
use std::io::{self, BufRead, Write};

/// How many matches to show per prompt round.
const MAX_VISIBLE_MATCHES: usize = 20;

/// Case-insensitive prefix filter over the in-memory catalog.
pub fn filter_prefix<'a>(families: &'a [FontFamily], query: &str) -> Vec<&'a FontFamily> {
    let query = query.to_lowercase();
    families
        .iter()
        .filter(|f| f.family.to_lowercase().starts_with(&query))
        .collect()
}

/// Case-insensitive exact-name lookup, for `--family`.
pub fn find_exact<'a>(families: &'a [FontFamily], name: &str) -> Option<&'a FontFamily> {
    families
        .iter()
        .find(|f| f.family.eq_ignore_ascii_case(name))
}

/// Run the interactive prompt loop until the user picks a family.
///
/// Input lines are interpreted as: a number selects from the matches
/// last shown; anything else becomes the new prefix query; an empty
/// line selects when exactly one match remains. EOF cancels.
pub fn pick_interactive<'a>(families: &'a [FontFamily]) -> Result<&'a FontFamily> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut matches: Vec<&FontFamily> = families.iter().collect();

    show_matches(&matches);
    loop {
        print!("Font name prefix (or number to select): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("Selection cancelled");
        };
        let input = line?;
        let input = input.trim();

        if input.is_empty() {
            if matches.len() == 1 {
                return Ok(matches[0]);
            }
            show_matches(&matches);
            continue;
        }

        if let Ok(index) = input.parse::<usize>() {
            if index >= 1 && index <= matches.len().min(MAX_VISIBLE_MATCHES) {
                return Ok(matches[index - 1]);
            }
            println!("No match numbered {index}.");
            continue;
        }

        matches = filter_prefix(families, input);
        show_matches(&matches);
    }
}

fn show_matches(matches: &[&FontFamily]) {
    if matches.is_empty() {
        println!("No families match.");
        return;
    }
    for (i, family) in matches.iter().take(MAX_VISIBLE_MATCHES).enumerate() {
        if family.category.is_empty() {
            println!("  {:>2}. {}", i + 1, family.family);
        } else {
            println!("  {:>2}. {} ({})", i + 1, family.family, family.category);
        }
    }
    if matches.len() > MAX_VISIBLE_MATCHES {
        println!(
            "  ... and {} more; type a longer prefix to narrow down",
            matches.len() - MAX_VISIBLE_MATCHES
        );
    }
}
