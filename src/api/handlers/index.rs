//! Handler for the root banner.

/// Plain-text banner shown on `GET /`.
pub const BANNER: &str = concat!(
    "link-registry ",
    env!("CARGO_PKG_VERSION"),
    "\n\n",
    "POST / with {\"url\": \"...\", \"code\": \"...\", \"mode\": \"exact|sub\"} to shorten a link.\n",
    "GET /<code> to follow one.\n"
);

/// `GET /`
pub async fn index_handler() -> &'static str {
    BANNER
}
