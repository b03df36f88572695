//! Compact money formatting (`$90M`, `$6T`, ...)

const SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Format an amount with a magnitude suffix and at most one decimal
pub fn format_money(value: f64) -> String {
    let mut value = value;
    let mut magnitude = 0;
    while value.abs() >= 1000.0 && magnitude < SUFFIXES.len() - 1 {
        magnitude += 1;
        value /= 1000.0;
    }

    let digits = format!("{value:.1}");
    let digits = digits.strip_suffix(".0").unwrap_or(&digits);
    format!("${}{}", digits, SUFFIXES[magnitude])
}

/// Format an amount written as text; non-numeric text is returned unchanged
pub fn format_money_str(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(amount) => format_money(amount),
        Err(_) => value.to_string(),
    }
}

/// Format an amount taken straight from a JSON document
pub fn format_money_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(format_money)
            .unwrap_or_else(|| n.to_string()),
        serde_json::Value::String(s) => format_money_str(s),
        serde_json::Value::Bool(b) => format_money(if *b { 1.0 } else { 0.0 }),
        other => other.to_string(),
    }
}
