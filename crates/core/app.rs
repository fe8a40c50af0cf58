use log::{debug, info};
use olr::{Alert, Screen};

/// Title of every alert, the message of the alert follows it.
pub const ALERT_TITLE: &str = "Request Error";

pub fn alert_text(alert: &Alert) -> String {
    debug!("{}", alert.detail);
    format!("{ALERT_TITLE}: {}", alert.message())
}

pub fn render(screen: &Screen) {
    if screen.text.is_empty() {
        return;
    }

    println!("{}", screen.text);

    match (&screen.summary, &screen.cover) {
        (Some(summary), None) => info!("No cover image loaded from {}", summary.cover_url),
        (Some(summary), Some(bytes)) if summary.has_placeholder_cover() => {
            info!("Placeholder cover image loaded ({} bytes)", bytes.len());
        }
        (_, Some(bytes)) => info!("Cover image loaded ({} bytes)", bytes.len()),
        (None, None) => {}
    }
}

#[test]
fn alert_text_uses_user_message() {
    let alert = Alert {
        kind: olr::ErrorKind::NoNetwork,
        detail: "No network: Network is unreachable - request not sent".to_owned(),
    };

    assert_eq!("Request Error: No internet connection.", alert_text(&alert));
}
