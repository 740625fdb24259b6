//! Coarse recognition of request URIs.
//!
//! A token is treated as a URI when it parses as an absolute URI or an
//! absolute path under request-URI rules. The check is intentionally loose:
//! `note:` or `/usr/bin` are "URIs" here, while anything carrying a control
//! character (such as a line-final token) never is.

#[derive(Clone, Copy, PartialEq)]
enum Component {
	Host,
	Path,
}

/// Returns `true` if `raw` is shaped like a request URI.
pub fn is_request_uri(raw: &str) -> bool {
	parse_request_uri(raw).is_ok()
}

/// Validates `raw` as a request URI, returning the reason on rejection.
pub(crate) fn parse_request_uri(raw: &str) -> Result<(), &'static str> {
	if raw.is_empty() {
		return Err("empty url");
	}
	if raw.bytes().any(|b| b < 0x20 || b == 0x7f) {
		return Err("invalid control character in URL");
	}
	if raw == "*" {
		return Ok(());
	}

	let (scheme, rest) = split_scheme(raw)?;
	// The query is carried along untouched
	let rest = rest.split_once('?').map_or(rest, |(path, _)| path);

	if !rest.starts_with('/') {
		return if scheme.is_empty() { Err("invalid URI for request") } else { Ok(()) };
	}

	let mut path = rest;
	if !scheme.is_empty() && rest.starts_with("//") && !rest.starts_with("///") {
		let after = &rest[2..];
		let (authority, tail) = match after.find('/') {
			Some(i) => after.split_at(i),
			None => (after, ""),
		};
		check_authority(authority)?;
		path = tail;
	}

	check_escapes(path, Component::Path)
}

/// Splits off a leading `scheme:`; returns an empty scheme when there is none.
fn split_scheme(raw: &str) -> Result<(&str, &str), &'static str> {
	for (i, b) in raw.bytes().enumerate() {
		match b {
			b'a'..=b'z' | b'A'..=b'Z' => {}
			b'0'..=b'9' | b'+' | b'-' | b'.' => {
				if i == 0 {
					return Ok(("", raw));
				}
			}
			b':' => {
				if i == 0 {
					return Err("missing protocol scheme");
				}
				return Ok((&raw[..i], &raw[i + 1..]));
			}
			_ => return Ok(("", raw)),
		}
	}
	Ok(("", raw))
}

fn check_authority(authority: &str) -> Result<(), &'static str> {
	let host = match authority.rfind('@') {
		Some(i) => {
			if !is_valid_userinfo(&authority[..i]) {
				return Err("invalid userinfo");
			}
			&authority[i + 1..]
		}
		None => authority,
	};
	check_host(host)
}

fn check_host(host: &str) -> Result<(), &'static str> {
	if host.starts_with('[') {
		let Some(end) = host.rfind(']') else {
			return Err("missing ']' in host");
		};
		if !is_valid_optional_port(&host[end + 1..]) {
			return Err("invalid port after host");
		}
	} else if let Some(i) = host.rfind(':') {
		if !is_valid_optional_port(&host[i..]) {
			return Err("invalid port after host");
		}
	}
	check_escapes(host, Component::Host)
}

/// Accepts `""`, `":"` or `":"` followed by digits.
fn is_valid_optional_port(port: &str) -> bool {
	match port.strip_prefix(':') {
		Some(digits) => digits.bytes().all(|b| b.is_ascii_digit()),
		None => port.is_empty(),
	}
}

fn is_valid_userinfo(userinfo: &str) -> bool {
	userinfo.chars().all(|c| {
		c.is_ascii_alphanumeric()
			|| matches!(
				c,
				'-' | '.' | '_' | ':' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '%' | '@'
			)
	})
}

/// Checks percent-escapes, and for hosts also the allowed byte set.
fn check_escapes(s: &str, component: Component) -> Result<(), &'static str> {
	let bytes = s.as_bytes();
	let mut i = 0;
	while i < bytes.len() {
		match bytes[i] {
			b'%' => {
				if i + 2 >= bytes.len() || !bytes[i + 1].is_ascii_hexdigit() || !bytes[i + 2].is_ascii_hexdigit() {
					return Err("invalid URL escape");
				}
				// Hosts may only escape non-ASCII bytes, or '%' itself
				if component == Component::Host && hex_value(bytes[i + 1]) < 8 && &s[i..i + 3] != "%25" {
					return Err("invalid URL escape in host");
				}
				i += 3;
			}
			b if component == Component::Host && b < 0x80 && !is_host_byte(b) => {
				return Err("invalid character in host name");
			}
			_ => i += 1,
		}
	}
	Ok(())
}

fn is_host_byte(b: u8) -> bool {
	b.is_ascii_alphanumeric()
		|| matches!(
			b,
			b'-' | b'_' | b'.' | b'~' | b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
				| b':' | b'[' | b']' | b'<' | b'>' | b'"'
		)
}

fn hex_value(b: u8) -> u8 {
	match b {
		b'0'..=b'9' => b - b'0',
		b'a'..=b'f' => b - b'a' + 10,
		b'A'..=b'F' => b - b'A' + 10,
		_ => 0,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn absolute_uris_are_accepted() {
		for raw in [
			"https://example.com/path",
			"http://user:pw@example.com:8080/a%20b?q=1",
			"http://[::1]:80/",
			"ftp://host",
			"*",
		] {
			assert!(is_request_uri(raw), "{raw} should be a request URI");
		}
	}

	#[test]
	fn absolute_paths_and_opaque_forms_are_accepted() {
		assert!(is_request_uri("/usr/bin"));
		assert!(is_request_uri("//double"));
		assert!(is_request_uri("note:"));
		assert!(is_request_uri("mailto:someone@example.com"));
		assert!(is_request_uri("Re:"));
	}

	#[test]
	fn plain_words_are_rejected() {
		assert_eq!(parse_request_uri(""), Err("empty url"));
		assert_eq!(parse_request_uri("word"), Err("invalid URI for request"));
		assert_eq!(parse_request_uri("3:00"), Err("invalid URI for request"));
		assert_eq!(parse_request_uri(":x"), Err("missing protocol scheme"));
		assert_eq!(parse_request_uri("relative/path"), Err("invalid URI for request"));
	}

	#[test]
	fn control_characters_are_rejected() {
		assert_eq!(parse_request_uri("https://example.com\n"), Err("invalid control character in URL"));
		assert!(!is_request_uri("/tmp\u{7f}"));
	}

	#[test]
	fn malformed_authorities_are_rejected() {
		assert_eq!(parse_request_uri("http://bad^host/"), Err("invalid character in host name"));
		assert_eq!(parse_request_uri("http://host:80x/"), Err("invalid port after host"));
		assert_eq!(parse_request_uri("http://[::1/"), Err("missing ']' in host"));
		assert_eq!(parse_request_uri("http://us{er@host/"), Err("invalid userinfo"));
		assert_eq!(parse_request_uri("http://ho%41st/"), Err("invalid URL escape in host"));
		assert!(is_request_uri("http://ho%25st/"));
	}

	#[test]
	fn path_escapes_must_be_complete() {
		assert_eq!(parse_request_uri("/100%zz"), Err("invalid URL escape"));
		assert_eq!(parse_request_uri("/50%"), Err("invalid URL escape"));
		assert!(is_request_uri("/50%25"));
		// The query is not validated
		assert!(is_request_uri("/search?q=100%"));
	}
}
