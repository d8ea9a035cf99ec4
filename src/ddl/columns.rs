use std::collections::BTreeMap;

use tracing::trace;

use crate::types::SplitPolicy;

/// Column name to the verbatim remainder of its definition.
pub type ColumnMap = BTreeMap<String, String>;

/// Parses the column list of one `CREATE TABLE` statement using the default split policy.
pub fn parse_columns(ddl: &str) -> ColumnMap {
    parse_columns_with(ddl, SplitPolicy::default())
}

/// Parses the column list of one `CREATE TABLE` statement.
///
/// Each definition is split on its first whitespace run into name and type; the type
/// keeps everything after the name (length, inline constraints) as one opaque string.
/// Definitions that do not carry both parts are skipped. A repeated column name keeps
/// the last definition.
pub fn parse_columns_with(ddl: &str, policy: SplitPolicy) -> ColumnMap {
    let mut columns = ColumnMap::new();

    let Some(body) = column_body(ddl) else {
        return columns;
    };

    for fragment in split_top_level_columns(body, policy) {
        match parse_fragment(fragment) {
            Some((name, data_type)) => {
                columns.insert(name, data_type);
            }
            None => trace!(fragment, "Skipping column fragment without a type"),
        }
    }

    columns
}

/// Text between the first `(` and the statement-terminating `);`.
fn column_body(ddl: &str) -> Option<&str> {
    let start = ddl.find('(')? + 1;
    let rest = &ddl[start..];
    let end = rest.find(");").or_else(|| rest.rfind(')'))?;
    Some(&rest[..end])
}

/// Cuts a column-list body into column-definition fragments.
///
/// This is the only place that decides where one definition ends; see [`SplitPolicy`].
pub fn split_top_level_columns(body: &str, policy: SplitPolicy) -> Vec<&str> {
    match policy {
        SplitPolicy::Naive => body.split(',').collect(),
        SplitPolicy::ParenAware => scan_top_level(body),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    Quoted(char),
}

fn scan_top_level(body: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut state = ScanState::Normal;
    let mut depth: usize = 0;
    let mut start = 0;

    for (idx, ch) in body.char_indices() {
        match state {
            ScanState::Quoted(quote) => {
                if ch == quote {
                    state = ScanState::Normal;
                }
            }
            ScanState::Normal => match ch {
                '\'' | '"' | '`' => state = ScanState::Quoted(ch),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    fragments.push(&body[start..idx]);
                    start = idx + ch.len_utf8();
                }
                _ => {}
            },
        }
    }

    fragments.push(&body[start..]);
    fragments
}

fn parse_fragment(fragment: &str) -> Option<(String, String)> {
    let trimmed = fragment.trim();
    let (name, rest) = trimmed.split_once(char::is_whitespace)?;
    let data_type = rest.trim_start();

    if name.is_empty() || data_type.is_empty() {
        return None;
    }

    Some((name.to_string(), data_type.to_string()))
}
