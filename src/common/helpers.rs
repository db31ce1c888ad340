// Helper functions for safe logging and display formatting

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = teachteam::common::safe_email_log("user@example.com");
/// assert_eq!(masked, "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            format!("{}***@{}", &parts[0][..1.min(parts[0].len())], parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Capitalises the first letter of a display name
pub fn capitalise_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Basic email shape check shared by the sign-in and application forms
pub fn is_valid_email(email: &str) -> bool {
    regex::Regex::new(r"^\S+@\S+\.\S+$")
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// Converts a YYYY-MM-DD date string to DD-MM-YYYY for display
pub fn display_date(date_str: &str) -> String {
    if date_str.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() == 3 {
        format!("{}-{}-{}", parts[2], parts[1], parts[0])
    } else {
        date_str.to_string()
    }
}
