//! Page templates

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::library::Section;
use crate::view::{Flash, FlashLevel};

/// Section buttons per grid row
pub const GRID_COLUMNS: usize = 3;

const APP_TITLE: &str = "PDF Library";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem 2rem; }
.row form button { width: 100%; padding: 1.2rem; font-size: 1.05rem; cursor: pointer; }
.flash { padding: .75rem 1rem; border-radius: 6px; margin: 1rem 0; }
.flash.success { background: #e6f4ea; color: #1e4620; }
.flash.info { background: #e8f0fe; color: #174ea6; }
.flash.error { background: #fce8e6; color: #8c1d18; }
.viewer img { max-width: 100%; border: 1px solid #ddd; }
.danger { border: 1px solid #f1b0b0; border-radius: 6px; padding: .5rem 1rem; margin-top: 1rem; }
hr { margin: 1.5rem 0; }
"#;

/// What the viewer area of the detail screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// No document selected
    Empty,
    /// Rendering is switched off on this server
    Unavailable,
    /// The document could not be opened for rendering
    Failed(String),
    /// Page `page` of `total`
    Page { page: usize, total: usize },
}

/// Everything the detail screen needs
#[derive(Debug)]
pub struct DetailView<'a> {
    pub section: &'a Section,
    pub documents: &'a [String],
    pub selected: Option<&'a str>,
    pub viewer: Viewer,
    pub flash: Option<&'a Flash>,
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {app}</title>
    <style>{style}.row {{ display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 1rem; margin-bottom: 1rem; }}
</style>
</head>
<body>
    <h1>{app}</h1>
{body}
</body>
</html>
"#,
        title = text(title),
        app = APP_TITLE,
        style = STYLE,
        columns = GRID_COLUMNS,
        body = body,
    )
}

fn flash_block(flash: Option<&Flash>) -> String {
    let Some(flash) = flash else {
        return String::new();
    };
    let class = match flash.level {
        FlashLevel::Success => "success",
        FlashLevel::Info => "info",
        FlashLevel::Error => "error",
    };
    format!(
        "    <div class=\"flash {}\">{}</div>\n",
        class,
        text(&flash.message)
    )
}

fn info_block(message: &str) -> String {
    flash_block(Some(&Flash {
        level: FlashLevel::Info,
        message: message.to_string(),
    }))
}

/// Section picker: one button per section, [`GRID_COLUMNS`] per row
pub fn section_grid(sections: &[Section], flash: Option<&Flash>) -> String {
    let mut body = flash_block(flash);
    body.push_str("    <h2>Choose a Section</h2>\n");

    for row in sections.chunks(GRID_COLUMNS) {
        body.push_str("    <div class=\"row\">\n");
        for section in row {
            body.push_str(&format!(
                r#"        <form method="post" action="/sections"><input type="hidden" name="section" value="{value}"><button type="submit">{label}</button></form>
"#,
                value = attr(&section.label),
                label = text(&section.label),
            ));
        }
        body.push_str("    </div>\n");
    }

    layout("Sections", &body)
}

/// Per-section screen: upload, document list, viewer and delete
pub fn section_detail(view: &DetailView<'_>) -> String {
    let label = &view.section.label;
    let mut body = String::new();

    body.push_str(&format!("    <h2>&#128194; {}</h2>\n", text(label)));
    body.push_str(
        r#"    <form method="post" action="/back"><button type="submit">&#11013; Back to Sections</button></form>
"#,
    );
    body.push_str(&flash_block(view.flash));

    body.push_str(&format!(
        r#"    <h3>Upload a new PDF</h3>
    <form method="post" action="/upload" enctype="multipart/form-data">
        <label>Upload to {label} <input type="file" name="file" accept=".pdf,application/pdf" required></label>
        <button type="submit">Upload</button>
    </form>
"#,
        label = text(label),
    ));

    body.push_str("    <h3>Your PDFs</h3>\n");
    if view.documents.is_empty() {
        body.push_str(&info_block("No PDFs in this section yet. Upload one above."));
        return layout(label, &body);
    }

    body.push_str(&document_selector(view.documents, view.selected));

    if let Some(selected) = view.selected {
        body.push_str(&format!(
            "    <p><a href=\"{href}\" download=\"{name}\">&#128229; Download PDF</a></p>\n",
            href = attr(&file_url(&view.section.label, selected)),
            name = attr(selected),
        ));
        body.push_str("    <hr>\n");
        body.push_str(&viewer_block(&view.section.label, selected, &view.viewer));
        body.push_str("    <hr>\n");
        body.push_str(
            r#"    <details class="danger">
        <summary>Danger Zone</summary>
        <form method="post" action="/delete"><button type="submit">&#128465; Delete this PDF</button></form>
    </details>
"#,
        );
    }

    layout(label, &body)
}

fn document_selector(documents: &[String], selected: Option<&str>) -> String {
    let mut options = String::new();
    if selected.is_none() {
        options.push_str("<option value=\"\" disabled selected>Select a PDF</option>");
    }
    for name in documents {
        let marker = if Some(name.as_str()) == selected {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            attr(name),
            marker,
            text(name)
        ));
    }

    format!(
        r#"    <form method="post" action="/select">
        <label>Choose a PDF to view <select name="document" onchange="this.form.submit()">{options}</select></label>
        <noscript><button type="submit">Open</button></noscript>
    </form>
"#,
        options = options,
    )
}

fn viewer_block(section: &str, document: &str, viewer: &Viewer) -> String {
    match viewer {
        Viewer::Empty => String::new(),
        Viewer::Unavailable => info_block("Page preview is not available on this server. Download the PDF to read it."),
        Viewer::Failed(reason) => flash_block(Some(&Flash::error(format!(
            "Could not open `{}`: {}",
            document, reason
        )))),
        Viewer::Page { page, total } => format!(
            r#"    <div class="viewer">
        <h3>Total Pages: {total}</h3>
        <form method="post" action="/page">
            <label>Go to Page <input type="number" name="page" min="1" max="{total}" value="{page}" required></label>
            <button type="submit">Go</button>
        </form>
        <img src="{src}" alt="{alt}">
    </div>
"#,
            total = total,
            page = page,
            src = attr(&render_url(section, document, *page)),
            alt = attr(&format!("{} page {}", document, page)),
        ),
    }
}

/// Download URL for a stored document
pub fn file_url(section: &str, document: &str) -> String {
    format!(
        "/files/{}/{}",
        urlencoding::encode(section),
        urlencoding::encode(document)
    )
}

/// Image URL for one rendered page
pub fn render_url(section: &str, document: &str, page: usize) -> String {
    format!(
        "/render/{}/{}/{}",
        urlencoding::encode(section),
        urlencoding::encode(document),
        page
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(label: &str) -> Section {
        Section {
            label: label.to_string(),
            folder: label.to_string(),
        }
    }

    #[test]
    fn test_grid_rows_of_three() {
        let sections: Vec<Section> = ["A", "B", "C", "D", "E"].iter().map(|s| section(s)).collect();
        let html = section_grid(&sections, None);

        assert_eq!(html.matches("<div class=\"row\">").count(), 2);
        assert_eq!(html.matches("action=\"/sections\"").count(), 5);
        assert!(html.contains(&format!("repeat({}, 1fr)", GRID_COLUMNS)));
        assert!(html.contains("Choose a Section"));
    }

    #[test]
    fn test_grid_escapes_labels() {
        let html = section_grid(&[section("Q&A <live>")], None);
        assert!(html.contains(">Q&amp;A &lt;live&gt;</button>"));
    }

    #[test]
    fn test_detail_empty_section() {
        let history = section("History");
        let html = section_detail(&DetailView {
            section: &history,
            documents: &[],
            selected: None,
            viewer: Viewer::Empty,
            flash: None,
        });

        assert!(html.contains("No PDFs in this section yet. Upload one above."));
        assert!(html.contains("accept=\".pdf,application/pdf\""));
        assert!(!html.contains("Danger Zone"));
    }

    #[test]
    fn test_detail_with_page_viewer() {
        let history = section("Static GK");
        let documents = vec!["a b.pdf".to_string(), "c.pdf".to_string()];
        let html = section_detail(&DetailView {
            section: &history,
            documents: &documents,
            selected: Some("a b.pdf"),
            viewer: Viewer::Page { page: 2, total: 7 },
            flash: Some(&Flash::success("`a b.pdf` uploaded to Static GK")),
        });

        assert!(html.contains("Total Pages: 7"));
        assert!(html.contains("min=\"1\" max=\"7\" value=\"2\""));
        assert!(html.contains("/render/Static%20GK/a%20b.pdf/2"));
        assert!(html.contains("/files/Static%20GK/a%20b.pdf"));
        assert!(html.contains("<option value=\"a b.pdf\" selected>"));
        assert!(html.contains("class=\"flash success\""));
        assert!(html.contains("Danger Zone"));
    }

    #[test]
    fn test_detail_without_renderer() {
        let history = section("History");
        let documents = vec!["a.pdf".to_string()];
        let html = section_detail(&DetailView {
            section: &history,
            documents: &documents,
            selected: Some("a.pdf"),
            viewer: Viewer::Unavailable,
            flash: None,
        });

        assert!(html.contains("Page preview is not available"));
        assert!(html.contains("Download PDF"));
        assert!(!html.contains("/render/"));
    }

    #[test]
    fn test_detail_no_selection_shows_placeholder() {
        let history = section("History");
        let documents = vec!["a.pdf".to_string()];
        let html = section_detail(&DetailView {
            section: &history,
            documents: &documents,
            selected: None,
            viewer: Viewer::Empty,
            flash: None,
        });

        assert!(html.contains("Select a PDF"));
        assert!(!html.contains("Download PDF"));
    }
}
