//! `index.html`: the navigation frame linking every generated page.

use super::{file_stem, html_escape};

/// Name of the iframe the navigation links open into.
pub const CONTENT_FRAME: &str = "docs-window";

/// Render the index page for `title`, linking each name to `/docs/<name>.html`.
pub fn render(title: &str, names: &[&str], stylesheet: &str, home_page: &str) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang='en'>\n");
    out.push_str("<head>\n");
    out.push_str("  <meta charset='UTF-8'>\n");
    out.push_str("  <meta name='viewport' content='width=device-width, initial-scale=1'>\n");
    out.push_str(&format!(
        "  <link href='{}' rel='stylesheet' type='text/css' media='all'>\n",
        html_escape(stylesheet)
    ));
    out.push_str(&format!(
        "  <title>{} Documentation</title>\n",
        html_escape(title)
    ));
    out.push_str("</head>\n");
    out.push_str("<body translate='no'>\n");
    out.push_str("  <main class='front'>\n");

    out.push_str("  <div class='nav'>\n");
    for name in names {
        out.push_str(&format!(
            "    <a href='/docs/{}.html' target='{}'>{}</a>\n",
            html_escape(&file_stem(name)),
            CONTENT_FRAME,
            html_escape(name)
        ));
    }
    out.push_str("  </div>\n");

    out.push_str("  <div class='content'>\n");
    out.push_str(&format!(
        "    <iframe name='{}' src='{}'></iframe>\n",
        CONTENT_FRAME,
        html_escape(home_page)
    ));
    out.push_str("  </div>\n");
    out.push_str("  </main>\n");
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}
