//! URL and anchor-text heuristics.
//!
//! All predicates expect an already normalized URL (see
//! [`normalize_url`](crate::normalize_url)) and are plain substring checks.
//! No network access happens here: "publicly accessible" means the URL looks
//! like a direct-view link, not that sharing permissions were verified.

use crate::constants::PATTERNS;
use crate::utils::is_blank;

/// Image is served from Google Drive or Google's user-content CDN.
pub fn is_google_drive_hosted(url: &str) -> bool {
    !is_blank(url) && PATTERNS.drive_hosted.is_match(url)
}

/// URL carries a direct/public view marker.
pub fn is_publicly_accessible(url: &str) -> bool {
    !is_blank(url) && PATTERNS.public_access.is_match(url)
}

/// URL points at something purchasable (storefront product path, variant
/// query key, or marketplace `/dp/` / `/gp/` shorthand).
pub fn is_product_link(url: &str) -> bool {
    !is_blank(url) && PATTERNS.product_link.is_match(url)
}

/// URL is a Drive file viewer link rather than an embeddable image.
pub fn is_drive_file_link(url: &str) -> bool {
    !is_blank(url) && PATTERNS.drive_file_link.is_match(url)
}

/// Anchor text is an exported image placeholder such as `IMAGE 1`.
pub fn looks_like_image_link(text: &str) -> bool {
    !is_blank(text) && PATTERNS.image_marker.is_match(text)
}
