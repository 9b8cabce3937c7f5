pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    formatted
}

/// Milliseconds with three decimals, as shown in every report.
pub fn format_ms(ms: f64) -> String {
    format!("{:.3}", ms)
}

/// A bar of `█` proportional to `value / max`, at most `width` wide.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let length = ((value / max) * width as f64) as usize;
    "█".repeat(length.min(width))
}

/// Pads `text` with spaces to `width` characters, counting chars not bytes.
pub fn pad(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - length))
}
