//! Static HTML rendering of a [`ViewContext`].

use std::fmt::Write;

use super::context::{ErrorDisplay, PlatformView, StatusText, ViewContext};

const HIDDEN: &str = "d-none";

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Renders the whole download page.
pub fn render_page(view: &ViewContext, title: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(title));

    let _ = writeln!(
        html,
        "<div id=\"loading-indicator\" style=\"display: {}\">Loading releases...</div>",
        if view.loading { "block" } else { "none" }
    );

    render_error(&mut html, view.error.as_ref());
    render_platform(&mut html, &view.android);
    render_platform(&mut html, &view.ios);
    render_status(&mut html, "release-sha-info", &view.release_info);
    render_status(&mut html, "download-site-info", &view.site_info);

    html.push_str("</body>\n</html>\n");
    html
}

fn render_platform(html: &mut String, view: &PlatformView) {
    let prefix = view.platform.element_prefix();

    let _ = writeln!(html, "<section id=\"{}-section\">", prefix);
    let _ = writeln!(html, "<h2>{}</h2>", view.platform.label());
    let _ = writeln!(
        html,
        "<select id=\"{}-versions\"{}>",
        prefix,
        if view.disabled { " disabled" } else { "" }
    );

    for (index, option) in view.options.iter().enumerate() {
        let mut attrs = format!(" value=\"{}\"", escape(&option.value));
        if let Some(entry) = &option.entry {
            let _ = write!(
                attrs,
                " data-version=\"{}\" data-asset-name=\"{}\"",
                escape(&entry.version),
                escape(&entry.asset_name)
            );
        }
        if index == view.selected {
            attrs.push_str(" selected");
        }
        let _ = writeln!(html, "<option{}>{}</option>", attrs, escape(&option.label));
    }

    html.push_str("</select>\n");

    let button = &view.button;
    let mut attrs = format!(" id=\"{}-download-btn\"", prefix);
    if let Some(href) = &button.href {
        let _ = write!(
            attrs,
            " href=\"{}\" data-version=\"{}\"",
            escape(href),
            escape(&button.version_label)
        );
    }
    let _ = write!(
        attrs,
        " class=\"btn{}\"",
        if button.enabled { "" } else { " disabled" }
    );
    let _ = writeln!(html, "<a{}>Download {}</a>", attrs, view.platform.label());
    let _ = writeln!(
        html,
        "<span id=\"{}-version-display\">{}</span>",
        prefix,
        escape(&button.version_label)
    );
    html.push_str("</section>\n");
}

fn render_status(html: &mut String, id: &str, status: &StatusText) {
    let _ = writeln!(
        html,
        "<div id=\"{}\"{}>{}</div>",
        id,
        if status.visible {
            String::new()
        } else {
            format!(" class=\"{}\"", HIDDEN)
        },
        escape(&status.text)
    );
}

fn render_error(html: &mut String, error: Option<&ErrorDisplay>) {
    let Some(error) = error else {
        let _ = writeln!(html, "<div id=\"error-message\" class=\"{}\"></div>", HIDDEN);
        return;
    };

    let _ = writeln!(html, "<div id=\"error-message\">{}",
        escape(&error.message)
    );
    html.push_str("<div class=\"mt-2\">You can also download the latest versions directly:</div>\n");
    let _ = writeln!(
        html,
        "<div class=\"mt-2\"><a href=\"{}\" class=\"btn btn-sm btn-primary me-2\" download>Download Android APK</a> \
         <a href=\"{}\" class=\"btn btn-sm btn-success\" download>Download iOS Bundle</a></div>",
        escape(&error.fallback.android),
        escape(&error.fallback.ios)
    );
    html.push_str("</div>\n");
}
