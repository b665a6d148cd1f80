//! Template selection.

use lilly_signature_core::{TemplateLetter, UserProfile};

/// Choose the template to render for a profile.
///
/// An explicit preference (from a session wrapper or the roaming store) is
/// honored verbatim, with one exception: contractors are never permitted the
/// employee templates, so a non-C preference is overridden to C whenever the
/// contractor indicator is set. Without a preference, contractors get C and
/// employees get A.
///
/// Pure and deterministic: identical inputs always yield the same letter.
#[must_use]
pub fn select_template(profile: &UserProfile, explicit: Option<TemplateLetter>) -> TemplateLetter {
    match explicit {
        Some(preference) => {
            if profile.is_contractor() && preference != TemplateLetter::C {
                TemplateLetter::C
            } else {
                preference
            }
        }
        None => {
            if profile.is_contractor() {
                TemplateLetter::C
            } else {
                TemplateLetter::A
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> UserProfile {
        UserProfile::default()
    }

    fn contractor() -> UserProfile {
        UserProfile {
            company_name: Some("Acme Consulting".to_owned()),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_employee_defaults_to_a() {
        assert_eq!(select_template(&employee(), None), TemplateLetter::A);
    }

    #[test]
    fn test_contractor_defaults_to_c() {
        assert_eq!(select_template(&contractor(), None), TemplateLetter::C);
    }

    #[test]
    fn test_employee_preference_is_honored() {
        assert_eq!(
            select_template(&employee(), Some(TemplateLetter::B)),
            TemplateLetter::B
        );
        assert_eq!(
            select_template(&employee(), Some(TemplateLetter::C)),
            TemplateLetter::C
        );
    }

    #[test]
    fn test_contractor_overrides_any_non_c_preference() {
        assert_eq!(
            select_template(&contractor(), Some(TemplateLetter::A)),
            TemplateLetter::C
        );
        assert_eq!(
            select_template(&contractor(), Some(TemplateLetter::B)),
            TemplateLetter::C
        );
        assert_eq!(
            select_template(&contractor(), Some(TemplateLetter::C)),
            TemplateLetter::C
        );
    }

    #[test]
    fn test_selection_is_idempotent() {
        let profile = contractor();
        let first = select_template(&profile, Some(TemplateLetter::A));
        let second = select_template(&profile, Some(TemplateLetter::A));
        assert_eq!(first, second);
    }
}
