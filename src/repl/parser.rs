/// One token entered at the query-count prompt
#[derive(Debug, Clone, PartialEq)]
pub enum CountInput {
    /// A positive count
    Valid(usize),

    /// A number that is zero or negative
    NonPositive(i32),

    /// Anything that does not parse as a 32-bit integer
    Invalid(String),
}

/// Classify a single whitespace-free token from the count prompt
///
/// Accepts an optional sign, like `i32::from_str`.
pub fn parse_count_token(token: &str) -> CountInput {
    match token.parse::<i32>() {
        Ok(value) if value > 0 => CountInput::Valid(value as usize),
        Ok(value) => CountInput::NonPositive(value),
        Err(_) => CountInput::Invalid(token.to_string()),
    }
}

/// Scan a count line token by token
///
/// Stops at the first positive count and ignores the rest of the line, the
/// same way a token scanner followed by a line flush behaves. Every rejected
/// token before it is returned in order.
pub fn scan_count_line(line: &str) -> Vec<CountInput> {
    let mut scanned = Vec::new();
    for token in line.split_whitespace() {
        let input = parse_count_token(token);
        let accepted = matches!(input, CountInput::Valid(_));
        scanned.push(input);
        if accepted {
            break;
        }
    }
    scanned
}
