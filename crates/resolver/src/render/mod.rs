//! Signature rendering.
//!
//! Each template variant builds an ordered list of [`SignatureLine`]
//! descriptors from the profile; a single renderer turns the list into HTML.
//! Optional fields that are absent contribute no line at all, so the "omit if
//! absent" rule is testable independently of any one template.

mod lines;
mod locations;
mod phone;
mod templates;

pub use lines::{LineStyle, SignatureLine, render_lines};
pub use locations::resolve_office_address;
pub use phone::format_phone;
pub use templates::{CONFIDENTIALITY_NOTICE, LogoDescriptor, SignatureArtifact, render_template};
