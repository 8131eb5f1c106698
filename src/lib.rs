pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod session;
pub mod store;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use std::fmt;

/// Prints a line diff of a config file change to stderr.
pub fn print_diff(old: &str, new: &str) {
    let diff = TextDiff::from_lines(old, new);
    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            eprintln!("{:-^1$}", "-", 80); //print line to separate groups
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };

                let (old_line, new_line) = (Line(change.old_index()), Line(change.new_index()));
                let value = change.value().trim_end_matches(['\r', '\n']);

                let styled_line = match change.tag() {
                    ChangeTag::Equal => format!("{sign} {value}").dimmed(),
                    ChangeTag::Delete => format!("{sign} {value}").red(),
                    ChangeTag::Insert => format!("{sign} {value}").green(),
                };

                eprintln!("{old_line} {new_line} | {styled_line}");
            }
        }
    }
}

struct Line(Option<usize>);

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{:>4}", n + 1),
            None => write!(f, "    "),
        }
    }
}
