//! Role normalization and the plant role vocabulary

/// Role assigned when the backend issues none, or the stored value is blank
pub const DEFAULT_ROLE: &str = "Operator";

/// Canonical role names as they appear in permission tables.
///
/// Matching against these is always case-insensitive, so the human-written
/// `"QC Incharge"` and the normalizer's `"Qc Incharge"` agree.
pub mod roles {
    pub const ADMIN: &str = "Admin";
    pub const PLANT_MANAGER: &str = "Plant Manager";
    pub const SUPERVISOR: &str = "Supervisor";
    pub const OPERATOR: &str = "Operator";
    pub const QC_INCHARGE: &str = "QC Incharge";
    pub const LOGISTICS: &str = "Logistics";
}

/// Canonicalize a raw backend role string into its display form.
///
/// Rules, in order: absent or blank input maps to [`DEFAULT_ROLE`]; the rest
/// is trimmed, lowercased, underscores become spaces, and the first letter of
/// every word is uppercased. The function is total and idempotent - every
/// guard and the navigation menu must use this exact function so a role
/// string normalizes identically everywhere.
pub fn normalize_role(raw: Option<&str>) -> String {
    let trimmed = match raw {
        Some(r) => r.trim(),
        None => return DEFAULT_ROLE.to_string(),
    };
    if trimmed.is_empty() {
        return DEFAULT_ROLE.to_string();
    }

    let lowered = trimmed.to_lowercase().replace('_', " ");

    // Uppercase any letter that starts a word, i.e. one not preceded by an
    // alphanumeric character.
    let mut out = String::with_capacity(lowered.len());
    let mut prev_alnum = false;
    for c in lowered.chars() {
        if c.is_alphabetic() && !prev_alnum {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_alnum = c.is_alphanumeric();
    }
    out
}

/// Check whether a normalized role is the administrator role.
///
/// The admin menu group is hard-gated on this exact comparison rather than
/// the shared permission table.
pub fn is_admin(normalized_role: &str) -> bool {
    normalized_role == roles::ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absent_defaults_to_operator() {
        assert_eq!(normalize_role(None), "Operator");
        assert_eq!(normalize_role(Some("")), "Operator");
        assert_eq!(normalize_role(Some("   ")), "Operator");
    }

    #[test]
    fn test_normalize_underscores_and_case() {
        assert_eq!(normalize_role(Some("plant_manager")), "Plant Manager");
        assert_eq!(normalize_role(Some("ADMIN")), "Admin");
        assert_eq!(normalize_role(Some("logistics")), "Logistics");
    }

    #[test]
    fn test_normalize_trims_surrounding_whitespace() {
        // Word-boundary capitalization, including the known quirk that the
        // acronym "QC" comes out as "Qc".
        assert_eq!(normalize_role(Some("  QC_incharge ")), "Qc Incharge");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "plant_manager",
            "  QC_incharge ",
            "OPERATOR",
            "Supervisor",
            "weird__role",
            "role-with-dashes",
            "mixed CASE_input",
        ] {
            let once = normalize_role(Some(raw));
            let twice = normalize_role(Some(once.as_str()));
            assert_eq!(once, twice, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_preserves_interior_spacing() {
        assert_eq!(normalize_role(Some("plant  manager")), "Plant  Manager");
    }

    #[test]
    fn test_normalize_digits_do_not_break_words() {
        assert_eq!(normalize_role(Some("operator2")), "Operator2");
        assert_eq!(normalize_role(Some("shift_2_lead")), "Shift 2 Lead");
    }

    #[test]
    fn test_normalize_never_returns_empty() {
        for raw in [None, Some(""), Some("_"), Some(" _ ")] {
            assert!(!normalize_role(raw).is_empty());
        }
    }

    #[test]
    fn test_is_admin_exact_match_only() {
        assert!(is_admin("Admin"));
        assert!(!is_admin("admin"));
        assert!(!is_admin("Plant Manager"));
    }

    #[test]
    fn test_canonical_names_are_fixed_points() {
        // Every canonical name except the QC acronym survives normalization
        // unchanged; QC Incharge maps onto its normalized spelling.
        assert_eq!(normalize_role(Some(roles::ADMIN)), "Admin");
        assert_eq!(normalize_role(Some(roles::PLANT_MANAGER)), "Plant Manager");
        assert_eq!(normalize_role(Some(roles::SUPERVISOR)), "Supervisor");
        assert_eq!(normalize_role(Some(roles::OPERATOR)), "Operator");
        assert_eq!(normalize_role(Some(roles::LOGISTICS)), "Logistics");
        assert_eq!(normalize_role(Some(roles::QC_INCHARGE)), "Qc Incharge");
    }
}
