/// Normalize a space's display name into the stable slug used for visit
/// tracking: lowercase alphanumerics with single hyphens between runs,
/// nothing leading or trailing.
///
/// A name with no alphanumeric content yields an empty slug; callers treat
/// that as unidentifiable and skip tracking rather than aliasing everything
/// to a shared placeholder.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}
