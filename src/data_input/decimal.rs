// src/data_input/decimal.rs

/// Normalizes a locale-formatted decimal string so Rust's float parser accepts it.
/// Trims surrounding whitespace and replaces every `,` with `.`.
pub fn normalize_decimal(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

/// Parses a field that may use `,` or `.` as its decimal separator.
/// Non-finite results (`NaN`, `inf`) are rejected: they cannot take part in geometry or timing.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    normalize_decimal(raw)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses an integer field, accepting a decimal rendering such as `2,0` by truncation.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let normalized = normalize_decimal(raw);
    normalized
        .parse::<i64>()
        .ok()
        .or_else(|| parse_decimal(&normalized).map(|value| value.trunc() as i64))
}


// src/data_input/decimal.rs
