/// Brand link target.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Where a freshly paired machine is shown.
pub const MACHINE_STATUS_ROUTE: &str = "/maintenance/machine-status";

/// Marker class for the application root while the notification center is open.
pub const ROOT_NOTIFCENTER_OPEN: &str = "root-notifcenter-open";

/// Marker class for the page body while the notification center is open.
pub const BODY_NOTIFCENTER_OPEN: &str = "body-notifcenter-open";

pub const DEFAULT_BRAND_NAME: &str = "Lamassu Admin";

pub const DEFAULT_PAIRING_TTL_SECS: u64 = 600;

/// Pairing status poll interval on the client.
pub const PAIRING_POLL_INTERVAL_MS: u32 = 2_000;

pub const MACHINE_NAME_MAX_LEN: usize = 50;

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_CSS: &str = include_str!("../../assets/css/base.css");

    fn rule<'a>(css: &'a str, selector: &str) -> Option<&'a str> {
        let start = css.find(&format!("{} {{", selector))?;
        let body = &css[start..];
        body.find('}').map(|end| &body[..end])
    }

    #[test]
    fn test_page_wrapper_is_the_scroll_container() {
        let page = rule(BASE_CSS, ".c-page").unwrap();
        assert!(page.contains("height: 100vh"));
        assert!(!page.contains("min-height"));
        assert!(page.contains("overflow-y: auto"));
    }

    #[test]
    fn test_marker_classes_have_rules() {
        let body = rule(BASE_CSS, &format!(".c-page.{}", BODY_NOTIFCENTER_OPEN)).unwrap();
        assert!(body.contains("overflow-y: hidden"));
        assert!(rule(BASE_CSS, &format!(".c-root.{}", ROOT_NOTIFCENTER_OPEN)).is_some());
    }
}
