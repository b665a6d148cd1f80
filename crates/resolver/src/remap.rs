//! Mailbox identity remap.
//!
//! In some tenants the compose event reports a shared or alias mailbox
//! rather than the signer's real account. The override table maps those
//! mailbox addresses to the account whose directory profile should be looked
//! up. The remap runs before every cache or network lookup, so the alias
//! address is never used as a cache key.

/// Shared-mailbox address -> actual account address.
const IDENTITY_OVERRIDES: &[(&str, &str)] = &[
    ("medinfo_us@lilly.com", "medinfo.us.lead@lilly.com"),
    ("gss_service_desk@lilly.com", "gss.desk.owner@lilly.com"),
    ("clinical_trials_inbox@lilly.com", "ct.inbox.owner@lilly.com"),
];

/// Apply the identity override table to a mailbox address.
///
/// Matching is case-insensitive; unmatched addresses pass through unchanged.
#[must_use]
pub fn remap_identity(mailbox_address: &str) -> String {
    let lowered = mailbox_address.to_ascii_lowercase();
    IDENTITY_OVERRIDES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map_or_else(|| mailbox_address.to_owned(), |(_, actual)| (*actual).to_owned())
}
