use std::cmp::Ordering;

/// Catalog entries that name no real release and never take part in ordering
const IGNORED_VERSIONS: [&str; 4] = ["unknown", "custom", "any version", "sample"];

/// NaturalVersionOrder policy for ordering version strings the way people read them
///
/// Each string is split into alternating text and digit runs. Digit runs
/// compare as integers and text runs compare lexically, so `2.10` sorts
/// after `2.9`.
pub struct NaturalVersionOrder;

#[derive(Debug, PartialEq, Eq)]
enum Run<'a> {
    Text(&'a str),
    Number(&'a str),
}

impl NaturalVersionOrder {
    /// Compares two version strings in natural order
    ///
    /// Strings that differ only in leading zeros (`1.01` / `1.1`) compare
    /// by their raw text as a final tie-break so the order stays total.
    pub fn compare(a: &str, b: &str) -> Ordering {
        let runs_a = Self::runs(a);
        let runs_b = Self::runs(b);

        for (left, right) in runs_a.iter().zip(runs_b.iter()) {
            let ordering = match (left, right) {
                (Run::Number(x), Run::Number(y)) => Self::compare_digits(x, y),
                (Run::Text(x), Run::Text(y)) => x.cmp(y),
                // Runs alternate from a leading text run, so positions always agree
                (Run::Text(_), Run::Number(_)) => Ordering::Less,
                (Run::Number(_), Run::Text(_)) => Ordering::Greater,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        runs_a
            .len()
            .cmp(&runs_b.len())
            .then_with(|| a.cmp(b))
    }

    /// Whether a catalog entry is a placeholder rather than a release
    pub fn is_ignored(version: &str) -> bool {
        let lowered = version.trim().to_lowercase();
        IGNORED_VERSIONS.contains(&lowered.as_str())
    }

    /// Whether a version carries no digits at all (`main`, `snapshot`)
    pub fn is_alphabetic(version: &str) -> bool {
        !version.chars().any(|c| c.is_ascii_digit())
    }

    /// Orders a component's version catalog oldest-first.
    ///
    /// Placeholder entries are dropped, the rest are sorted naturally and
    /// digit-free names are moved to the front so they can never be taken
    /// for the latest release.
    pub fn order_catalog(versions: &[String]) -> Vec<String> {
        let mut ordered: Vec<String> = versions
            .iter()
            .filter(|v| !Self::is_ignored(v))
            .cloned()
            .collect();
        ordered.sort_by(|a, b| Self::compare(a, b));

        let (mut alphabetic, numbered): (Vec<String>, Vec<String>) =
            ordered.into_iter().partition(|v| Self::is_alphabetic(v));
        alphabetic.extend(numbered);
        alphabetic
    }

    /// Splits into runs that always start with a (possibly empty) text run
    fn runs(s: &str) -> Vec<Run<'_>> {
        let mut runs = Vec::new();
        let mut start = 0;
        let mut in_digits = false;

        for (idx, ch) in s.char_indices() {
            let is_digit = ch.is_ascii_digit();
            if is_digit != in_digits {
                runs.push(Self::run(&s[start..idx], in_digits));
                start = idx;
                in_digits = is_digit;
            }
        }
        runs.push(Self::run(&s[start..], in_digits));
        runs
    }

    fn run(text: &str, digits: bool) -> Run<'_> {
        if digits {
            Run::Number(text)
        } else {
            Run::Text(text)
        }
    }

    /// Numeric comparison of arbitrarily long digit strings
    fn compare_digits(x: &str, y: &str) -> Ordering {
        let x = x.trim_start_matches('0');
        let y = y.trim_start_matches('0');
        x.len().cmp(&y.len()).then_with(|| x.cmp(y))
    }
}
