#[cfg(debug_assertions)]
pub fn base_path() -> Option<&'static str> {
    None  // trunk serve mounts the app at the root
}

#[cfg(not(debug_assertions))]
pub fn base_path() -> Option<&'static str> {
    Some("/my-super-fast-site")  // Production sub-path
}

pub const SITE_NAME: &str = "MyDataShield.org";

/// Third-party scheduling page for the free compliance audit.
pub const BOOKING_URL: &str = "https://calendly.com/mydatashield/free-compliance-audit";

/// Third-party survey tool used for the detailed audit intake.
pub const AUDIT_INTAKE_URL: &str = "https://forms.gle/mydatashield-audit-intake";

pub const CONTACT_EMAIL: &str = "audit@mydatashield.org";
pub const CONTACT_PHONE: &str = "+971 4 000 0000";

/// Strips spaces so the display number can be used in a `tel:` link.
pub fn phone_href() -> String {
    let digits: String = CONTACT_PHONE.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

pub fn mailto_href(subject: &str) -> String {
    format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_href_has_no_spaces() {
        assert_eq!(phone_href(), "tel:+97140000000");
    }

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_href("Audit request & questions"),
            "mailto:audit@mydatashield.org?subject=Audit%20request%20%26%20questions"
        );
    }
}
