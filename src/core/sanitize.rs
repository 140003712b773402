// src/core/sanitize.rs

/// Make a user-typed scheme round safe to use in a file name.
/// Whitespace runs become `_`, path separators become `-`, anything else
/// outside `[A-Za-z0-9._-]` is dropped.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if ch.is_whitespace() || ch == '_' {
            if !last_us { out.push('_'); last_us = true; }
        } else if ch == '/' || ch == '\\' {
            out.push('-');
            last_us = false;
        }
    }
    out.trim_matches('_').to_string()
}

/// Mask a secret for logs and `Debug` output: keep the last four characters.
pub fn mask_secret(secret: &str) -> String {
    let n = secret.chars().count();
    if n <= 4 {
        return "*".repeat(n);
    }
    let tail: String = secret.chars().skip(n - 4).collect();
    join!(&"*".repeat(n - 4), &tail)
}
