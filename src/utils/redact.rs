use once_cell::sync::Lazy;
use regex::Regex;

/// Replacement for a scrubbed line
pub const REDACTED: &str = "***";

/// Lines reporting an upload, which leak the destination URL
static DESTINATION_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^.+Uploading.*to\s*destinationUrl\s*(.+?),.+$")
        .expect("destination URL pattern must compile")
});

/// Scrub a captured log, replacing every line which reveals an upload destination.
///
/// Line endings are normalized to `\n` first, then the log is scrubbed line by line.
pub fn redact(log: &str) -> String {
    let log = log.replace("\r\n", "\n").replace('\r', "\n");
    let mut result = String::with_capacity(log.len());

    for line in log.split_inclusive('\n') {
        let (content, terminator) = match line.strip_suffix('\n') {
            Some(content) => (content, "\n"),
            None => (line, ""),
        };

        if DESTINATION_URL.is_match(content) {
            result.push_str(REDACTED);
        } else {
            result.push_str(content);
        }
        result.push_str(terminator);
    }

    result
}
