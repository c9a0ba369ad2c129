//! Deep links for the external messaging channel.

/// Default deep-link base for the messaging channel.
pub const DEFAULT_LINK_BASE: &str = "https://wa.me/";

/// Build `<base>/<destination>?text=<percent-encoded message>`.
pub fn build_outbound_link(link_base: &str, destination: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        link_base.trim_end_matches('/'),
        destination,
        urlencoding::encode(message)
    )
}
