use std::fs;
use std::path::{Path, PathBuf};

use super::markup::escape_html;
use crate::app::domain::catalog::LanguageGroup;
use crate::app::infrastructure::error::Result;

const PAGE_STYLE: &str = "body{font-family:-apple-system,BlinkMacSystemFont,\"Segoe UI\",Roboto,sans-serif;\
margin:2em;background:#f5f5f5;color:#222}\
.snippet-card{background:#fff;border:1px solid #ddd;border-radius:6px;padding:1em;margin-bottom:1em}\
pre{background:#272822;color:#f8f8f2;padding:1em;overflow:auto}\
.explanation{color:#555}";

/// Render one language group as a standalone HTML page. Each card keeps the
/// escaped code and explanation in `data-` attributes as well as in its body.
pub fn render_language_page(group: &LanguageGroup) -> String {
    let name = escape_html(&group.name);
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{name} snippets</title>\n<style>{PAGE_STYLE}</style>\n</head>\n<body>\n<h1>{name}</h1>\n"
    );

    if group.snippets.is_empty() {
        html.push_str("<p>No snippets found for this language.</p>\n");
    }

    for snippet in &group.snippets {
        let code = escape_html(&snippet.code);
        let explanation = escape_html(&snippet.explanation);
        html.push_str(&format!(
            "<div class=\"snippet-card\">\n<h3>{}</h3>\n<pre><code data-code=\"{code}\">{code}</code></pre>\n<p class=\"explanation\" data-explanation=\"{explanation}\">{explanation}</p>\n</div>\n",
            escape_html(&snippet.title),
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// File name for a group's page; anything outside `[a-z0-9]` becomes `_`.
pub fn page_file_name(language: &str) -> String {
    let stem: String = language
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}-snippets.html", stem)
}

pub fn export_dir() -> PathBuf {
    std::env::temp_dir().join("snippetdeck")
}

/// Write the group's page into `dir`, returning its path.
pub fn write_language_page(group: &LanguageGroup, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(page_file_name(&group.name));
    fs::write(&path, render_language_page(group))?;
    Ok(path)
}

/// Write the page to the temp export directory and open it in the default browser.
pub fn open_in_browser(group: &LanguageGroup) -> Result<PathBuf> {
    let path = write_language_page(group, &export_dir())?;
    open::that(&path)?;
    Ok(path)
}
