//! Identifier normalization.
//!
//! SDK operation names are PascalCase and frequently embed acronyms
//! (`GetSAMLProvider`, `ListObjectsV2`). Generated operation keys are
//! snake_case with acronym runs collapsed, so `GetSAMLProvider` becomes
//! `get_saml_provider` rather than `get_s_a_m_l_provider`.

/// Collapse embedded acronym runs to a capital followed by lowercase letters.
///
/// A character at index `i > 0` is lowercased when it and its predecessor are
/// both uppercase and it is either the last character or followed by another
/// uppercase character. The capital that starts the next word (an uppercase
/// letter followed by a lowercase one) is left alone.
///
/// ```
/// use wrapgen_scan::to_proper_case;
///
/// assert_eq!(to_proper_case("GetSAMLProviderCommandInput"), "GetSamlProviderCommandInput");
/// assert_eq!(to_proper_case("GetSAML"), "GetSaml");
/// ```
pub fn to_proper_case(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let last = chars.len().saturating_sub(1);

    chars
        .iter()
        .enumerate()
        .map(|(index, &ch)| {
            if index == 0 {
                return ch;
            }
            let collapses = is_upper(ch)
                && is_upper(chars[index - 1])
                && (index == last || is_upper(chars[index + 1]));
            if collapses { ch.to_ascii_lowercase() } else { ch }
        })
        .collect()
}

/// Insert `_` before every uppercase letter except the first character, then
/// lowercase everything.
///
/// ```
/// use wrapgen_scan::to_snake_case;
///
/// assert_eq!(to_snake_case("ListObjectsV2"), "list_objects_v2");
/// ```
pub fn to_snake_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 8);
    for (index, ch) in identifier.chars().enumerate() {
        if index > 0 && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Canonical operation key used in generated type maps and dispatch tables.
pub fn pretty_operation_name(identifier: &str) -> String {
    to_snake_case(&to_proper_case(identifier))
}

/// Uppercase the first character and every character following a `_`,
/// dropping the underscores. PascalCase input is returned unchanged.
pub fn snake_to_pascal(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut upper_next = true;
    for ch in identifier.chars() {
        if ch == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Short namespace alias for a package (`client-sso-oidc` -> `client_sso_oidc`).
pub fn package_alias(package_name: &str) -> String {
    package_name.replace(['-', '.', '/', '@'], "_")
}

// Digits and other non-letters count as "uppercase" for acronym collapsing,
// matching a plain `to_uppercase() == self` comparison.
fn is_upper(ch: char) -> bool {
    !ch.is_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn proper_case_collapses_acronyms() {
        assert_eq!(
            to_proper_case("GetSAMLProviderCommandInput"),
            "GetSamlProviderCommandInput"
        );
        assert_eq!(to_proper_case("GetSAML"), "GetSaml");
        assert_eq!(to_proper_case("ListObjectsV2"), "ListObjectsV2");
        assert_eq!(to_proper_case("DescribeDBInstances"), "DescribeDbInstances");
    }

    #[test]
    fn proper_case_keeps_short_inputs() {
        assert_eq!(to_proper_case(""), "");
        assert_eq!(to_proper_case("A"), "A");
        assert_eq!(to_proper_case("AB"), "Ab");
    }

    #[test]
    fn snake_case_inserts_separators() {
        assert_eq!(to_snake_case("ListObjectsV2"), "list_objects_v2");
        assert_eq!(to_snake_case("GetObject"), "get_object");
        assert_eq!(to_snake_case("listObjectsV2"), "list_objects_v2");
    }

    #[test]
    fn pretty_operation_names() {
        assert_eq!(pretty_operation_name("ListObjectsV2"), "list_objects_v2");
        assert_eq!(pretty_operation_name("GetSAMLProvider"), "get_saml_provider");
        assert_eq!(pretty_operation_name("CreateDBCluster"), "create_db_cluster");
        assert_eq!(pretty_operation_name("PutObjectACL"), "put_object_acl");
    }

    #[test]
    fn snake_to_pascal_is_identity_on_pascal_case() {
        assert_eq!(snake_to_pascal("GetObject"), "GetObject");
        assert_eq!(snake_to_pascal("get_object"), "GetObject");
        assert_eq!(snake_to_pascal("list_objects_v2"), "ListObjectsV2");
    }

    #[test]
    fn package_alias_normalizes_separators() {
        assert_eq!(package_alias("s3"), "s3");
        assert_eq!(package_alias("sso-oidc"), "sso_oidc");
        assert_eq!(package_alias("cognito-identity-provider"), "cognito_identity_provider");
    }

    proptest! {
        #[test]
        fn prop_proper_case_preserves_length_and_letters(input in "[A-Z][A-Za-z0-9]{0,24}") {
            let proper = to_proper_case(&input);
            prop_assert_eq!(proper.len(), input.len());
            prop_assert_eq!(proper.to_lowercase(), input.to_lowercase());
            prop_assert_eq!(proper.chars().next(), input.chars().next());
        }

        #[test]
        fn prop_pretty_name_is_lower_snake(input in "[A-Z][A-Za-z0-9]{0,24}") {
            let pretty = pretty_operation_name(&input);
            prop_assert!(!pretty.chars().any(|c| c.is_ascii_uppercase()));
            prop_assert!(!pretty.starts_with('_'));
            prop_assert_eq!(pretty_operation_name(&input), pretty);
        }
    }
}
