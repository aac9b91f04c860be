/// Out-of-range scores are accepted here and clamped by the matcher.
pub fn parse_min_score(input: &str) -> Result<f64, String> {
    input
        .trim()
        .parse()
        .map_err(|_| format!("Invalid score {input:?}"))
}

pub fn format_optional(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(value) => format!("{value:.1}{suffix}"),
        None => String::from("n/a"),
    }
}
