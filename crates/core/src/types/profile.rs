//! Directory identity record.

use serde::{Deserialize, Serialize};

/// A user's directory identity, as rendered into a signature.
///
/// Constructed from a cache entry, from a Graph profile response, or as a
/// static fallback when every other source fails. Immutable for the duration
/// of one compose event; a fresh value is built per event.
///
/// `company_name` is the sole discriminator between the "employee" and
/// "contractor" identity classes: `None` (or empty) means employee, a
/// non-empty value names the contractor's own employer.
///
/// Field names serialize in camelCase to match the JSON payloads the add-in
/// has written to the Office stores since the original release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub mobile_phone: String,
    pub office_phone: String,
    pub job_title: String,
    pub department: String,
    pub office_location: String,
    pub country: String,
    /// Contractor indicator. `None`/empty means employee.
    pub company_name: Option<String>,
    pub pronoun: String,
    pub pronunciation: String,
    pub functional_area: String,
    pub company_address: String,
    pub company_website: String,
    pub greeting: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            mobile_phone: String::new(),
            office_phone: String::new(),
            job_title: String::new(),
            department: String::new(),
            office_location: String::new(),
            country: String::new(),
            company_name: None,
            pronoun: String::new(),
            pronunciation: String::new(),
            functional_area: String::new(),
            company_address: String::new(),
            company_website: String::new(),
            greeting: String::new(),
        }
    }
}

impl UserProfile {
    /// Static fallback used when both cache tiers and the remote fetch fail.
    ///
    /// Every field is empty except name and email, which come from the
    /// compose host's current-user context.
    #[must_use]
    pub fn fallback(name: &str, email: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            ..Self::default()
        }
    }

    /// Whether this identity is a contractor rather than an employee.
    #[must_use]
    pub fn is_contractor(&self) -> bool {
        self.company_name
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_employee() {
        let profile = UserProfile::fallback("Jordan Doe", "jdoe@lilly.com");
        assert_eq!(profile.name, "Jordan Doe");
        assert_eq!(profile.email, "jdoe@lilly.com");
        assert!(!profile.is_contractor());
        assert!(profile.job_title.is_empty());
    }

    #[test]
    fn test_contractor_indicator() {
        let mut profile = UserProfile::default();
        assert!(!profile.is_contractor());

        profile.company_name = Some(String::new());
        assert!(!profile.is_contractor());

        profile.company_name = Some("  ".to_owned());
        assert!(!profile.is_contractor());

        profile.company_name = Some("Acme Consulting".to_owned());
        assert!(profile.is_contractor());
    }

    #[test]
    fn test_serializes_camel_case() {
        let profile = UserProfile {
            name: "Jordan Doe".to_owned(),
            office_location: "MC/B1".to_owned(),
            ..UserProfile::default()
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["name"], "Jordan Doe");
        assert_eq!(json["officeLocation"], "MC/B1");
        assert!(json.get("office_location").is_none());
    }

    #[test]
    fn test_deserializes_with_missing_fields() {
        // Legacy cache entries may predate newer fields; missing ones default.
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"Jordan Doe","email":"jdoe@lilly.com"}"#).unwrap();
        assert_eq!(profile.name, "Jordan Doe");
        assert!(profile.pronoun.is_empty());
        assert_eq!(profile.company_name, None);
    }
}
