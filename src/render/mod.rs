//! Renderer module: text artifacts and the site index page.

pub mod artifact;
pub mod index;

/// File stem used for a function's artifact and HTML page.
pub fn file_stem(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
