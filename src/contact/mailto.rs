use super::ContactPayload;

/// Percent-encodes `input` the way `encodeURIComponent` does: every byte outside
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` becomes `%XX` of its UTF-8 encoding.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn for_payload(to: impl Into<String>, payload: &ContactPayload) -> Self {
        Self {
            to: to.into(),
            subject: payload.subject(),
            body: payload.body(),
        }
    }

    pub fn uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_encode_uri_component() {
        assert_eq!(encode_uri_component("abc-XYZ_0.9"), "abc-XYZ_0.9");
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_uri_component("it's (fine)!*~"), "it's%20(fine)!*~");
        assert_eq!(encode_uri_component("a@b.com?x#y"), "a%40b.com%3Fx%23y");
        assert_eq!(encode_uri_component("é✓"), "%C3%A9%E2%9C%93");
    }

    #[test]
    fn test_uri_layout() {
        let payload = ContactPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        };
        let link = MailtoLink::for_payload("owner@example.com", &payload);
        assert_eq!(
            link.uri(),
            "mailto:owner@example.com?subject=Portfolio%20contact%20from%20Ada\
             &body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AHi"
        );
    }
}
