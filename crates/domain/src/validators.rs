use crate::errors::DomainError;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Reject names no resolver could look up: empty names, empty labels, and
/// names or labels over the DNS length limits. One trailing dot is allowed.
pub fn validate_domain_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);

    if trimmed.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "Domain name cannot be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "Domain name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }

    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "Empty label in {name}"
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "Label '{label}' exceeds {MAX_LABEL_LEN} characters"
            )));
        }
        if label.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DomainError::InvalidDomainName(format!(
                "Label '{label}' contains whitespace"
            )));
        }
    }

    Ok(())
}
