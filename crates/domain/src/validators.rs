use std::net::IpAddr;

/// The DNS root, accepted verbatim even though it is not a hostname.
pub const ROOT_DOMAIN: &str = ".";

pub const MAX_DOMAIN_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;

pub fn validate_domain(domain: &str) -> Result<(), String> {
    if domain == ROOT_DOMAIN {
        return Ok(());
    }
    if domain.is_empty() {
        return Err("Domain cannot be empty".to_string());
    }

    // A single trailing dot marks an absolute name and does not count toward the length
    let name = domain.strip_suffix('.').unwrap_or(domain);
    if name.len() > MAX_DOMAIN_LENGTH {
        return Err(format!(
            "Domain cannot exceed {} characters",
            MAX_DOMAIN_LENGTH
        ));
    }

    for label in name.split('.') {
        validate_label(label).map_err(|reason| format!("Invalid domain '{}': {}", domain, reason))?;
    }

    Ok(())
}

fn validate_label(label: &str) -> Result<(), String> {
    if label.is_empty() {
        return Err("empty label".to_string());
    }
    if label.len() > MAX_LABEL_LENGTH {
        return Err(format!(
            "label '{}' exceeds {} characters",
            label, MAX_LABEL_LENGTH
        ));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(format!(
            "label '{}' cannot start or end with a hyphen",
            label
        ));
    }
    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(format!(
            "label '{}' contains invalid characters (only letters, digits and hyphens are allowed)",
            label
        ));
    }
    Ok(())
}

pub fn validate_server(server: &str) -> Result<IpAddr, String> {
    server
        .parse::<IpAddr>()
        .map_err(|_| format!("Invalid server address '{}': expected an IPv4 or IPv6 literal", server))
}
