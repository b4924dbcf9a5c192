use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::catalog::Movie;
use crate::errors::LoadError;

/// Reads the catalog CSV from disk and parses it. Any I/O failure is fatal
/// to the session; there is no retry.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Movie>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| LoadError::Fetch(format!("{}: {e}", path.display())))?;
    parse_catalog(&text)
}

/// Parses header-delimited CSV text into movies, in source row order.
///
/// Rows are never rejected: a row with fewer cells than the header (or
/// extra cells, which are ignored) still produces a record with the missing
/// fields defaulted. Only a source with no header row is an error.
pub fn parse_catalog(text: &str) -> Result<Vec<Movie>, LoadError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| LoadError::Parse("empty catalog source, no header row".into()))?;
    let header: HashMap<String, usize> = split_row(header_line)
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name.trim().to_string(), i))
        .collect();

    let mut movies = Vec::new();
    for line in lines {
        let cells = split_row(line);
        let field = |name: &str| cell(&header, &cells, name);

        movies.push(Movie {
            title_id: field("titleId").to_string(),
            primary_title: field("primaryTitle").to_string(),
            original_title: field("originalTitle").to_string(),
            average_rating: field("averageRating").parse().unwrap_or(0.0),
            num_votes: field("numVotes").parse().unwrap_or(0),
            start_year: field("startYear").parse().unwrap_or(0),
            runtime_minutes: field("runtimeMinutes").parse().unwrap_or(0),
            genres: field("genres").to_string(),
            // Case-sensitive on purpose: only the literal "true" counts.
            foreign_flag: field("foreignFlag") == "true",
            directors: field("directors").to_string(),
            primary_name: field("primaryName").to_string(),
        });
    }

    Ok(movies)
}

/// Looks a row's cell up by header name; anything the row does not carry
/// reads as empty, which the numeric coercions then turn into zero.
fn cell<'a>(header: &HashMap<String, usize>, cells: &'a [String], name: &str) -> &'a str {
    header
        .get(name)
        .and_then(|&i| cells.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

/// Splits one CSV row into cells, honoring RFC 4180 quoting: commas inside
/// a quoted cell are literal, and `""` inside quotes is an escaped quote.
fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    cells.push(cell);

    cells
}
