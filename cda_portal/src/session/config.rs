use std::sync::LazyLock;

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("simple_session".to_string())
});

// Unset means a browser-session cookie without Max-Age
pub(super) static SESSION_COOKIE_MAX_AGE: LazyLock<Option<i64>> =
    LazyLock::new(|| parse_max_age(std::env::var("SESSION_COOKIE_MAX_AGE").ok().as_deref()));

pub(super) static SESSION_COOKIE_SECURE: LazyLock<bool> =
    LazyLock::new(|| parse_secure(std::env::var("SESSION_COOKIE_SECURE").ok().as_deref()));

fn parse_max_age(value: Option<&str>) -> Option<i64> {
    value
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|age| *age > 0)
}

fn parse_secure(value: Option<&str>) -> bool {
    value
        .map(|val| val.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
