//! Whole-word keyword search over the knowledge base.

use faultbook_core::Table;
use regex::Regex;
use tracing::debug;

/// Problems of every row whose keyword or ASIC/module column contains
/// `keyword` as a whole word, case-insensitive.
///
/// Results come back in table order; an empty vec means no match (a normal
/// outcome, not an error). The keyword is escaped, so punctuation in a
/// caller-supplied keyword cannot alter the match semantics.
#[must_use]
pub fn search_by_keyword(table: &Table, keyword: &str) -> Vec<String> {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
    let Ok(matcher) = Regex::new(&pattern) else {
        return Vec::new();
    };

    let problems: Vec<String> = table
        .records()
        .iter()
        .filter(|record| {
            matcher.is_match(&record.keyword) || matcher.is_match(&record.asic_module)
        })
        .map(|record| record.problem.clone())
        .collect();

    debug!("keyword `{keyword}` matched {} rows", problems.len());
    problems
}

/// Root cause and solution of the first row whose problem matches exactly.
#[must_use]
pub fn lookup_root_cause_and_solution<'a>(
    table: &'a Table,
    problem: &str,
) -> Option<(&'a str, &'a str)> {
    table
        .records()
        .iter()
        .find(|record| record.problem == problem)
        .map(|record| (record.root_cause.as_str(), record.solution.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultbook_core::Record;

    fn record(serial: u32, keyword: &str, asic_module: &str, problem: &str) -> Record {
        Record {
            serial,
            created: "2024-03-01 10:00:00".to_string(),
            author: "asha".to_string(),
            project: "aurora".to_string(),
            keyword: keyword.to_string(),
            asic_module: asic_module.to_string(),
            problem: problem.to_string(),
            root_cause: format!("{problem} root cause"),
            solution: format!("{problem} solution"),
        }
    }

    fn table() -> Table {
        Table::new(vec![
            record(1, "timeout", "SerDes", "Device hangs"),
            record(2, "reset", "PLL block", "Lock never acquired"),
            record(3, "voltage", "SerDes", "Eye diagram collapsed"),
        ])
    }

    #[test]
    fn matches_keyword_column() {
        assert_eq!(search_by_keyword(&table(), "timeout"), ["Device hangs"]);
    }

    #[test]
    fn matches_asic_module_column() {
        assert_eq!(
            search_by_keyword(&table(), "serdes"),
            ["Device hangs", "Eye diagram collapsed"]
        );
    }

    #[test]
    fn whole_word_only() {
        // "time" must not match "timeout".
        assert!(search_by_keyword(&table(), "time").is_empty());
    }

    #[test]
    fn word_inside_multi_word_column_matches() {
        assert_eq!(search_by_keyword(&table(), "pll"), ["Lock never acquired"]);
    }

    #[test]
    fn unknown_keyword_matches_nothing() {
        assert!(search_by_keyword(&table(), "fuse").is_empty());
    }

    #[test]
    fn punctuation_in_keyword_is_literal() {
        assert!(search_by_keyword(&table(), "ser.es").is_empty());
    }

    #[test]
    fn lookup_exact_problem() {
        let table = table();
        assert_eq!(
            lookup_root_cause_and_solution(&table, "Device hangs"),
            Some(("Device hangs root cause", "Device hangs solution"))
        );
    }

    #[test]
    fn lookup_is_exact_not_substring() {
        let table = table();
        assert_eq!(lookup_root_cause_and_solution(&table, "Device"), None);
    }
}
