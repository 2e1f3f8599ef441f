// the collection of utility functions mainly for bracket checking and term splitting

/// true if every bracket of any kind is closed by a bracket of the same kind
pub fn has_balanced_brackets(s: &str) -> bool {
    let mut stack = Vec::new();
    for c in s.chars() {
        match c {
            '(' | '{' | '[' => stack.push(c),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

pub fn find_char_positions(input: &str, target_char: char) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut start_pos = 0;

    while let Some(pos) = input[start_pos..].find(target_char) {
        positions.push(start_pos + pos);
        start_pos += pos + target_char.len_utf8();
    }

    positions
}

/// Splits a sum into signed terms at every `+`/`-` outside brackets.
///
/// A sign directly after `^`, `*`, `/` or an opening bracket belongs to the following
/// factor and does not start a new term. Each returned term keeps its leading sign
/// (`"-3x^2"`, `"+x"`); the first term has no sign unless the input starts with one.
pub fn split_signed_terms(input: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut prev: Option<char> = None;

    for c in input.chars() {
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        let binds_to_factor = matches!(prev, Some('^' | '*' | '/' | '(' | '{' | '['));
        if (c == '+' || c == '-') && depth == 0 && !binds_to_factor && !current.is_empty() {
            terms.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        terms.push(current);
    }
    terms
}

/// Replaces a few Unicode math symbols with their ASCII equivalents.
pub fn normalize_symbols(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{2212}' => '-',
            '\u{00D7}' | '\u{00B7}' | '\u{22C5}' => '*',
            '\u{00F7}' => '/',
            _ => c,
        })
        .collect()
}

pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    if num_values == 1 {
        return vec![start];
    }
    let step = (end - start) / (num_values as f64 - 1.0);
    (0..num_values).map(|i| start + (i as f64 * step)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_brackets() {
        assert!(has_balanced_brackets("sin(x)*(2+{3})"));
        assert!(has_balanced_brackets("x"));
        assert!(!has_balanced_brackets("(x+1"));
        assert!(!has_balanced_brackets("(x+1]"));
        assert!(!has_balanced_brackets(")("));
    }

    #[test]
    fn test_find_char_positions() {
        assert_eq!(find_char_positions("x=1=2", '='), vec![1, 3]);
        assert!(find_char_positions("x+1", '=').is_empty());
    }

    #[test]
    fn test_split_signed_terms() {
        assert_eq!(split_signed_terms("x^2-3x+2"), vec!["x^2", "-3x", "+2"]);
        assert_eq!(split_signed_terms("-x^3+x"), vec!["-x^3", "+x"]);
        assert_eq!(split_signed_terms("2*-3+x^-1"), vec!["2*-3", "+x^-1"]);
        assert_eq!(split_signed_terms("(1-x)+2"), vec!["(1-x)", "+2"]);
        assert!(split_signed_terms("").is_empty());
    }

    #[test]
    fn test_normalize_symbols() {
        assert_eq!(normalize_symbols("2\u{00D7}x \u{2212} 1"), "2*x - 1");
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }
}
