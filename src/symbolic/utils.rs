// the collection of utility functions mainly for bracket parsing and proceeding

/// checks that every bracket in the string has a pair of the same kind
pub fn brackets_are_balanced(s: &str) -> bool {
    let mut depth: i32 = 0;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// find the first position of the given char that is outside brackets
pub fn find_char_position_outside_brackets(s: &str, c: char) -> Option<usize> {
    let mut depth = 0;
    for (i, ch) in s.char_indices() {
        if ch == '(' {
            depth += 1;
        } else if ch == ')' {
            depth -= 1;
        } else if ch == c && depth == 0 {
            return Some(i);
        }
    }
    None
}

/// find the position of the closing bracket pairing the opening bracket at `open_idx`
pub fn find_matching_bracket(input: &str, open_idx: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, c) in input.char_indices().skip_while(|(i, _)| *i < open_idx) {
        if c == '(' {
            depth += 1;
        } else if c == ')' {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// evenly spaced values over [start, end], both ends included
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    if num_values == 0 {
        return Vec::new();
    }
    if num_values == 1 {
        return vec![start];
    }
    let step = (end - start) / (num_values as f64 - 1.0);
    (0..num_values).map(|i| start + (i as f64 * step)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_brackets_balanced() {
        assert!(brackets_are_balanced("(x + (y))"));
        assert!(!brackets_are_balanced("(x + y"));
        assert!(!brackets_are_balanced("x + y)"));
        assert!(!brackets_are_balanced(")("));
    }

    #[test]
    fn test_find_char_outside_brackets() {
        assert_eq!(find_char_position_outside_brackets("x+(a+b)", '+'), Some(1));
        assert_eq!(find_char_position_outside_brackets("(a+b)", '+'), None);
        assert_eq!(find_char_position_outside_brackets("(a+b)*c", '*'), Some(5));
    }

    #[test]
    fn test_find_matching_bracket() {
        assert_eq!(find_matching_bracket("sin(x+(y))", 3), Some(9));
        assert_eq!(find_matching_bracket("(x", 0), None);
    }

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(-5.0, 5.0, 11);
        assert_eq!(grid.len(), 11);
        assert_relative_eq!(grid[0], -5.0);
        assert_relative_eq!(grid[10], 5.0);
        assert_relative_eq!(grid[5], 0.0);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }
}
