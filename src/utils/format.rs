use chrono::NaiveTime;
use unicode_width::UnicodeWidthStr;

/// Format a count with thousands separators ("1,847")
pub fn format_number(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a NaiveTime as "8:30 AM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}

/// Pad `s` with spaces to `width` terminal columns, truncating with "…" if longer
pub fn pad_display(s: &str, width: usize) -> String {
    let w = s.width();
    if w <= width {
        return format!("{}{}", s, " ".repeat(width - w));
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Create a simple ASCII progress bar from a ratio in [0, 1]
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}
