/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Joins an API root and a relative path and percent-encodes the result the
/// way a browser's `encodeURI` does.
pub fn api_url(root: &str, path: &str) -> String {
    let mut url = String::with_capacity(root.len() + path.len() + 1);
    url.push_str(root);
    if !root.ends_with('/') {
        url.push('/');
    }
    url.push_str(path);
    encode_uri(&url)
}

pub fn is_small_screen(width: u32, desktop_width_threshold: u32) -> bool {
    width < desktop_width_threshold
}

fn encode_uri(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_alphanumeric() || ";,/?:@&=+$-_.!~*'()#".contains(c) {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    out
}
