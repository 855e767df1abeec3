use std::collections::HashMap;

/// Find the header that matches one of the given aliases, case-insensitively.
///
/// Aliases are tried in order, so the first listed alias that is present in
/// the header row wins even when several aliases match. The original-case
/// header name is returned. `None` means no column matched, which is a
/// normal outcome and not an error.
pub fn find_column(headers: &[String], aliases: &[String]) -> Option<String> {
    let headers_lower: HashMap<String, &String> = headers
        .iter()
        .map(|header| (header.to_lowercase(), header))
        .collect();

    for alias in aliases {
        if let Some(header) = headers_lower.get(&alias.to_lowercase()) {
            return Some((*header).clone());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn aliases(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match_returns_original_case() {
        let result = find_column(
            &headers(&["FIRST NAME", "Email"]),
            &aliases(&["first name", "firstname"]),
        );
        assert_eq!(result, Some("FIRST NAME".to_string()));
    }

    #[test]
    fn test_alias_priority_order_wins() {
        // Both "firstname" and "name" are present; the earlier alias wins.
        let result = find_column(
            &headers(&["Name", "FirstName", "Email"]),
            &aliases(&["first name", "firstname", "name"]),
        );
        assert_eq!(result, Some("FirstName".to_string()));
    }

    #[test]
    fn test_name_alias_matches_plain_name_header() {
        // The "name" alias deliberately matches a bare "Name" header even
        // when that column may hold full names.
        let result = find_column(
            &headers(&["Name", "Phone"]),
            &aliases(&["first name", "firstname", "name"]),
        );
        assert_eq!(result, Some("Name".to_string()));
    }

    #[test]
    fn test_no_match_returns_none() {
        let result = find_column(
            &headers(&["Phone", "Address"]),
            &aliases(&["email", "e-mail"]),
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_no_partial_matching() {
        let result = find_column(&headers(&["Email Address Line"]), &aliases(&["email address"]));
        assert_eq!(result, None);
    }

    #[test]
    fn test_empty_headers() {
        let result = find_column(&[], &aliases(&["email"]));
        assert_eq!(result, None);
    }
}
