//! Line-descriptor model consumed by the renderer.

/// Visual treatment of a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Plain body text.
    Regular,
    /// Bold, used for the name line.
    Bold,
    /// Company name in the neutral gray.
    CompanyNeutral,
    /// Company name in the Lilly brand red.
    CompanyAccent,
    /// Small muted print, used for the confidentiality footer.
    FinePrint,
}

impl LineStyle {
    const fn css(self) -> &'static str {
        match self {
            Self::Regular => "color:#232323;",
            Self::Bold => "color:#232323;font-weight:bold;",
            Self::CompanyNeutral => "color:#54565B;",
            Self::CompanyAccent => "color:#D52B1E;",
            Self::FinePrint => "color:#75787B;font-size:8pt;",
        }
    }
}

/// One line of a rendered signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureLine {
    /// A styled text line.
    Text { content: String, style: LineStyle },
    /// A hyperlink line (mailto: or https:).
    Link { text: String, href: String },
    /// An inline image referenced by attachment content id.
    Image { alt: String, content_id: String },
    /// Vertical whitespace between blocks.
    Blank,
}

impl SignatureLine {
    /// A regular text line.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: LineStyle::Regular,
        }
    }

    /// A styled text line.
    pub fn styled(content: impl Into<String>, style: LineStyle) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    /// A regular text line, or no line at all when `content` is empty.
    pub fn text_opt(content: &str) -> Option<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::text(trimmed))
        }
    }
}

/// Minimal HTML escaping for profile-supplied text.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an ordered list of lines into the signature HTML block.
#[must_use]
pub fn render_lines(lines: &[SignatureLine]) -> String {
    let mut html = String::from(
        "<div style=\"font-family:'Segoe UI',Arial,sans-serif;font-size:10pt;\">",
    );

    for line in lines {
        match line {
            SignatureLine::Text { content, style } => {
                html.push_str("<p style=\"margin:0;");
                html.push_str(style.css());
                html.push_str("\">");
                html.push_str(&escape(content));
                html.push_str("</p>");
            }
            SignatureLine::Link { text, href } => {
                html.push_str("<p style=\"margin:0;\"><a style=\"color:#00A1DE;\" href=\"");
                html.push_str(&escape(href));
                html.push_str("\">");
                html.push_str(&escape(text));
                html.push_str("</a></p>");
            }
            SignatureLine::Image { alt, content_id } => {
                html.push_str("<p style=\"margin:8px 0 0 0;\"><img alt=\"");
                html.push_str(&escape(alt));
                html.push_str("\" src=\"cid:");
                html.push_str(&escape(content_id));
                html.push_str("\"></p>");
            }
            SignatureLine::Blank => html.push_str("<p style=\"margin:0;\">&nbsp;</p>"),
        }
    }

    html.push_str("</div>");
    html
}
