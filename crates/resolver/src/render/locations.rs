//! Facility-code to postal-address lookup.

/// Address used when the directory has no office location at all.
const DEFAULT_ADDRESS: &str = "Lilly Corporate Center, Indianapolis, IN 46285, USA";

/// Facility code (uppercase) -> full postal address.
const FACILITY_ADDRESSES: &[(&str, &str)] = &[
    ("MC", "Lilly Corporate Center, Indianapolis, IN 46285, USA"),
    ("LTC", "Lilly Technology Center, 1555 S Harding St, Indianapolis, IN 46221, USA"),
    ("LCC", "Lilly Corporate Center North, 893 Delaware St, Indianapolis, IN 46225, USA"),
    ("RTP", "Research Triangle Park, 40 Moore Dr, Durham, NC 27709, USA"),
    ("NYC", "Lilly Biotechnology Center East, 450 E 29th St, New York, NY 10016, USA"),
    ("SD", "Lilly Biotechnology Center, 10290 Campus Point Dr, San Diego, CA 92121, USA"),
];

/// Resolve a directory office location into a postal address.
///
/// The facility code is the text before the first `/` (buildings and floors
/// follow the slash), matched case-insensitively. Unmapped codes fall through
/// to the raw location string; a missing location falls through to the
/// default corporate address.
#[must_use]
pub fn resolve_office_address(office_location: &str) -> String {
    let trimmed = office_location.trim();
    if trimmed.is_empty() {
        return DEFAULT_ADDRESS.to_owned();
    }

    let code = trimmed
        .split('/')
        .next()
        .unwrap_or(trimmed)
        .trim()
        .to_ascii_uppercase();

    FACILITY_ADDRESSES
        .iter()
        .find(|(facility, _)| *facility == code)
        .map_or_else(|| trimmed.to_owned(), |(_, address)| (*address).to_owned())
}
