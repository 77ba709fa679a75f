//! Pluralization helpers for report lines.

/// `"s"` suffix unless the count is exactly one.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count with noun: `1 route`, `3 routes`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}
