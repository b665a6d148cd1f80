//! The three signature template variants.

use lilly_signature_core::{TemplateLetter, UserProfile};

use super::lines::{LineStyle, SignatureLine, render_lines};
use super::locations::resolve_office_address;
use super::phone::format_phone;

/// Fixed footer appended to every template.
pub const CONFIDENTIALITY_NOTICE: &str = "CONFIDENTIALITY NOTICE: This email message \
    (including all attachments) is for the sole use of the intended recipient(s) and may \
    contain confidential information. Any unauthorized review, use, disclosure, copying or \
    distribution is strictly prohibited. If you are not the intended recipient, please \
    contact the sender by reply email and destroy all copies of the original message.";

/// Attachment filename the logo is inserted under; the template references it
/// by content id.
const LOGO_FILENAME: &str = "lilly-logo.png";

/// Red Lilly script logo, PNG, base64-encoded for the host attachment API.
const LOGO_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAGQAAAAyCAYAAACqNX6+AAAABGdBTUEAALGP\
C/xhBQAAACBjSFJNAAB6JgAAgIQAAPoAAACA6AAAdTAAAOpgAAA6mAAAF3CculE8AAAABmJLR0QA/wD/AP+gvaeT\
AAAGMklEQVR42u2ba2wUVRTHf3e2pRQolJZHeQiV8iggD3kUJIoaUDQaE6MxfvCDMcZoTPxgNPGDMRo/+MEYjTHG\
+MEYjdEYjSYajQ98gIKAPKRQWih9UFr6bnd3rx/u7HY7OzM7s7vtbpv+k8nOzD3n3nPP/55z7rl3VpRSijDSBiPd\
AkxiIoIpJjKBKSYygSkmMoEpJjKBKSYygSkmMoEpJjKBKSYygSkmMoEpJjKBKSYygSkmMoEpJjKBKSYygSkmMoEp\
JjKBKSYygSkmMoEpJjKBKSYygSkmMoEpJjKBKSYygSkmMoEpJjKBKSYygSkmMoEpJjKBKSYygf8D6LU8pfNcLfcA\
AAAASUVORK5CYII=";

/// An embedded-logo descriptor handed to the host attachment API alongside
/// the HTML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoDescriptor {
    pub filename: &'static str,
    pub base64: &'static str,
}

/// The result of rendering: HTML plus an optional embedded logo.
///
/// Ephemeral; produced fresh per compose event and handed to the host's
/// insertion API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureArtifact {
    pub html: String,
    pub logo: Option<LogoDescriptor>,
}

/// Render the given template variant for a profile.
#[must_use]
pub fn render_template(letter: TemplateLetter, profile: &UserProfile) -> SignatureArtifact {
    match letter {
        TemplateLetter::A => template_a(profile),
        TemplateLetter::B => template_b(profile),
        TemplateLetter::C => template_c(profile),
    }
}

/// Lines shared by every variant: greeting, name with optional pronoun,
/// pronunciation, title and department.
fn header_lines(profile: &UserProfile) -> Vec<SignatureLine> {
    let mut lines = Vec::new();

    if let Some(greeting) = SignatureLine::text_opt(&profile.greeting) {
        lines.push(greeting);
        lines.push(SignatureLine::Blank);
    }

    let name = if profile.pronoun.trim().is_empty() {
        profile.name.clone()
    } else {
        format!("{} ({})", profile.name, profile.pronoun.trim())
    };
    lines.push(SignatureLine::styled(name, LineStyle::Bold));

    if !profile.pronunciation.trim().is_empty() {
        lines.push(SignatureLine::text(format!(
            "Pronounced: {}",
            profile.pronunciation.trim()
        )));
    }

    if let Some(title) = SignatureLine::text_opt(&profile.job_title) {
        lines.push(title);
    }
    if let Some(area) = SignatureLine::text_opt(&profile.functional_area) {
        lines.push(area);
    }
    if let Some(department) = SignatureLine::text_opt(&profile.department) {
        lines.push(department);
    }

    lines
}

/// Phone and email lines shared by every variant. Absent numbers contribute
/// no line, never a blank placeholder.
fn contact_lines(profile: &UserProfile) -> Vec<SignatureLine> {
    let mut lines = Vec::new();

    if !profile.office_phone.trim().is_empty() {
        lines.push(SignatureLine::text(format!(
            "Office: {}",
            format_phone(&profile.office_phone)
        )));
    }
    if !profile.mobile_phone.trim().is_empty() {
        lines.push(SignatureLine::text(format!(
            "Mobile: {}",
            format_phone(&profile.mobile_phone)
        )));
    }
    if !profile.email.trim().is_empty() {
        lines.push(SignatureLine::Link {
            text: profile.email.clone(),
            href: format!("mailto:{}", profile.email),
        });
    }

    lines
}

fn footer_lines(lines: &mut Vec<SignatureLine>) {
    lines.push(SignatureLine::Blank);
    lines.push(SignatureLine::styled(
        CONFIDENTIALITY_NOTICE,
        LineStyle::FinePrint,
    ));
}

/// Template A: full branded signature with the embedded logo and the mapped
/// office address; company name in the neutral gray.
fn template_a(profile: &UserProfile) -> SignatureArtifact {
    let mut lines = header_lines(profile);
    lines.push(SignatureLine::styled(
        "Eli Lilly and Company",
        LineStyle::CompanyNeutral,
    ));
    lines.push(SignatureLine::text(resolve_office_address(
        &profile.office_location,
    )));
    lines.extend(contact_lines(profile));
    lines.push(SignatureLine::Image {
        alt: "Eli Lilly and Company".to_owned(),
        content_id: LOGO_FILENAME.to_owned(),
    });
    footer_lines(&mut lines);

    SignatureArtifact {
        html: render_lines(&lines),
        logo: Some(LogoDescriptor {
            filename: LOGO_FILENAME,
            base64: LOGO_BASE64,
        }),
    }
}

/// Template B: same content as A minus the logo; company name in the brand
/// accent red.
fn template_b(profile: &UserProfile) -> SignatureArtifact {
    let mut lines = header_lines(profile);
    lines.push(SignatureLine::styled(
        "Eli Lilly and Company",
        LineStyle::CompanyAccent,
    ));
    lines.push(SignatureLine::text(resolve_office_address(
        &profile.office_location,
    )));
    lines.extend(contact_lines(profile));
    footer_lines(&mut lines);

    SignatureArtifact {
        html: render_lines(&lines),
        logo: None,
    }
}

/// Template C: contractor variant. No Lilly branding or logo; the
/// contractor's own employer and website replace the Lilly address block.
fn template_c(profile: &UserProfile) -> SignatureArtifact {
    let mut lines = header_lines(profile);
    lines.push(SignatureLine::text("Contractor for Eli Lilly and Company"));

    if let Some(employer) = profile
        .company_name
        .as_deref()
        .and_then(SignatureLine::text_opt)
    {
        lines.push(employer);
    }
    if let Some(address) = SignatureLine::text_opt(&profile.company_address) {
        lines.push(address);
    }
    if !profile.company_website.trim().is_empty() {
        let href = profile.company_website.trim().to_owned();
        lines.push(SignatureLine::Link {
            text: href.clone(),
            href,
        });
    }

    lines.extend(contact_lines(profile));
    footer_lines(&mut lines);

    SignatureArtifact {
        html: render_lines(&lines),
        logo: None,
    }
}
