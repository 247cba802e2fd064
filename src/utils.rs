pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn locale_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; Max-Age=31536000; Path=/; SameSite=Lax")
}

/// `Content-Disposition` value that makes the browser save the body as `file_name`.
pub fn attachment(file_name: &str) -> String {
    format!("attachment; filename=\"{file_name}\"")
}
