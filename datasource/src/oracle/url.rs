use std::borrow::Cow;

/// Prefix of thin-driver JDBC URLs.
const JDBC_THIN_PREFIX: &str = "jdbc:oracle:thin:@";

/// Converts a JDBC URL into a connect string the Oracle client understands.
///
/// The `jdbc:oracle:thin:@` prefix is stripped. Easy Connect strings
/// (`//host:port/service`, `host:port/service`), connect descriptors and TNS aliases are
/// kept as they are. The legacy `host:port:SID` form has no Easy Connect equivalent and is
/// expanded into a connect descriptor.
///
/// Input that does not carry the prefix is returned unchanged: the driver reports
/// anything it cannot parse when the first connection is opened.
pub fn jdbc_url_to_connect_string(jdbc_url: &str) -> Cow<'_, str> {
    let Some(target) = jdbc_url.strip_prefix(JDBC_THIN_PREFIX) else {
        return Cow::Borrowed(jdbc_url);
    };

    match parse_sid_target(target) {
        Some((host, port, sid)) => Cow::Owned(format!(
            "(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST={host})(PORT={port}))(CONNECT_DATA=(SID={sid})))"
        )),
        None => Cow::Borrowed(target),
    }
}

/// Splits `host:port:SID`, allowing a bracketed IPv6 host.
fn parse_sid_target(target: &str) -> Option<(&str, &str, &str)> {
    if target.starts_with("//") || target.starts_with('(') || target.contains('/') {
        return None;
    }

    let mut parts = target.rsplitn(3, ':');
    let sid = parts.next()?;
    let port = parts.next()?;
    let host = parts.next()?;

    if sid.is_empty() || host.is_empty() || port.is_empty() {
        return None;
    }
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);

    Some((host, port, sid))
}
