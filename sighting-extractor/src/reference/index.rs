//! Lookup structures derived from the reference network.

use std::collections::HashSet;

use regex::Regex;

use crate::domain::{Line, Station};
use crate::extract::normalize;

use super::error::ReferenceDataError;

/// A normalized station alias pointing back at its station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationAlias {
    /// Alias in normalized form.
    pub alias: String,
    /// Index into `ReferenceData::stations`.
    pub station: usize,
}

/// Compiled matcher for every textual form of one line.
#[derive(Debug, Clone)]
pub struct LinePattern {
    /// Index into `ReferenceData::lines`.
    pub line: usize,
    pub regex: Regex,
}

/// Build the alias list, longest alias first.
///
/// Every station contributes its canonical name and its aliases.
/// Equal-length aliases stay in station order.
pub fn build_station_aliases(stations: &[Station]) -> Vec<StationAlias> {
    let mut aliases = Vec::new();

    for (idx, station) in stations.iter().enumerate() {
        let mut seen = HashSet::new();
        let forms = std::iter::once(station.id.as_str()).chain(station.aliases.iter().map(String::as_str));
        for form in forms {
            let alias = normalize(form);
            if alias.is_empty() || !seen.insert(alias.clone()) {
                continue;
            }
            aliases.push(StationAlias {
                alias,
                station: idx,
            });
        }
    }

    // Stable sort keeps station order among equal lengths.
    aliases.sort_by(|a, b| b.alias.len().cmp(&a.alias.len()));
    aliases
}

/// Compile one token-bounded regex per line.
pub fn build_line_patterns(lines: &[Line]) -> Result<Vec<LinePattern>, ReferenceDataError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let regex = Regex::new(&line_pattern(line)).map_err(|source| {
                ReferenceDataError::Pattern {
                    line: line.id.clone(),
                    source,
                }
            })?;
            Ok(LinePattern { line: idx, regex })
        })
        .collect()
}

/// Regex source matching the line code and any alias.
///
/// Alternatives are ordered longest first so that, at a given start
/// position, the most specific variant wins.
fn line_pattern(line: &Line) -> String {
    let mut variants: Vec<String> = std::iter::once(line.id.as_str())
        .chain(line.aliases.iter().map(String::as_str))
        .map(normalize)
        .filter(|v| !v.is_empty())
        .collect();
    variants.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    variants.dedup();

    let alternatives: Vec<String> = variants.iter().map(|v| variant_pattern(v)).collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}

/// Make spaces optional between tokens and between letter and digit runs,
/// so `s41`, `s 41` and `ring bahn`/`ringbahn` all match.
fn variant_pattern(variant: &str) -> String {
    variant
        .split(' ')
        .map(|token| {
            let mut runs: Vec<String> = Vec::new();
            let mut current = String::new();
            let mut current_is_digit = None;
            for c in token.chars() {
                let is_digit = c.is_ascii_digit();
                if current_is_digit.is_some_and(|d| d != is_digit) {
                    runs.push(regex::escape(&current));
                    current.clear();
                }
                current.push(c);
                current_is_digit = Some(is_digit);
            }
            if !current.is_empty() {
                runs.push(regex::escape(&current));
            }
            runs.join(" ?")
        })
        .collect::<Vec<_>>()
        .join(" ?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId};

    fn line(code: &str, aliases: &[&str]) -> Line {
        let mut line = Line::new(LineId::parse(code).unwrap(), Vec::new());
        line.aliases = aliases.iter().map(|a| a.to_string()).collect();
        line
    }

    fn station(name: &str, aliases: &[&str]) -> Station {
        let mut station = Station::new(StationId::parse(name).unwrap());
        station.aliases = aliases.iter().map(|a| a.to_string()).collect();
        station
    }

    #[test]
    fn variant_pattern_splits_letters_and_digits() {
        assert_eq!(variant_pattern("s41"), "s ?41");
        assert_eq!(variant_pattern("m10"), "m ?10");
        assert_eq!(variant_pattern("ring bahn"), "ring ?bahn");
        assert_eq!(variant_pattern("u"), "u");
    }

    #[test]
    fn line_pattern_matches_spacing_variants() {
        let pattern = line_pattern(&line("S41", &["Ringbahn"]));
        let regex = Regex::new(&pattern).unwrap();

        assert!(regex.is_match("kontrolle in der s41"));
        assert!(regex.is_match("kontrolle in der s 41"));
        assert!(regex.is_match("ringbahn voll"));
        assert!(!regex.is_match("s410"));
        assert!(!regex.is_match("s4"));
    }

    #[test]
    fn aliases_sorted_longest_first() {
        let stations = vec![
            station("Alexanderplatz", &["Alex"]),
            station("Rathaus Neukölln", &[]),
            station("Neukölln", &[]),
        ];
        let aliases = build_station_aliases(&stations);
        let forms: Vec<&str> = aliases.iter().map(|a| a.alias.as_str()).collect();

        assert_eq!(
            forms,
            vec!["rathaus neukolln", "alexanderplatz", "neukolln", "alex"]
        );
        assert_eq!(aliases[0].station, 1);
        assert_eq!(aliases[3].station, 0);
    }

    #[test]
    fn duplicate_and_blank_aliases_dropped() {
        let stations = vec![station("Südkreuz", &["sudkreuz", "SÜDKREUZ", "!!"])];
        let aliases = build_station_aliases(&stations);
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases[0].alias, "sudkreuz");
    }

    #[test]
    fn patterns_built_per_line() {
        let lines = vec![line("U8", &[]), line("S41", &["ringbahn"])];
        let patterns = build_line_patterns(&lines).unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[1].line, 1);
        assert!(patterns[0].regex.is_match("u 8"));
    }
}
