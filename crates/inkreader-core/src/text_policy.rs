//! Label fitting and number formatting for fixed-width draw calls.

use core::str;

/// Copies as much of `source` as fits in `max_chars` characters into `out`,
/// ending with `...` when anything was cut.
pub fn fit_label<'a>(source: &str, out: &'a mut [u8], max_chars: usize) -> &'a str {
    if out.is_empty() || max_chars == 0 {
        return "";
    }

    if source.len() <= out.len() && source.chars().count() <= max_chars {
        out[..source.len()].copy_from_slice(source.as_bytes());
        return str::from_utf8(&out[..source.len()]).unwrap_or("?");
    }

    // Room for the ellipsis is reserved up front.
    let keep_chars = max_chars.saturating_sub(3);
    let byte_budget = out.len().saturating_sub(3);
    let mut len = 0usize;
    for ch in source.chars().take(keep_chars) {
        let mut utf8 = [0u8; 4];
        let encoded = ch.encode_utf8(&mut utf8).as_bytes();
        if len + encoded.len() > byte_budget {
            break;
        }
        out[len..len + encoded.len()].copy_from_slice(encoded);
        len += encoded.len();
    }

    if len + 3 <= out.len() {
        out[len..len + 3].copy_from_slice(b"...");
        len += 3;
    }

    str::from_utf8(&out[..len]).unwrap_or("?")
}

/// Formats `current/total`, e.g. `12/240`.
pub fn page_counter_label(current: usize, total: usize, out: &mut [u8; 24]) -> &str {
    let mut len = write_usize_ascii(current, out);
    if len < out.len() {
        out[len] = b'/';
        len += 1;
    }
    len += write_usize_ascii(total, &mut out[len..]);
    str::from_utf8(&out[..len]).unwrap_or("")
}

/// Formats `n books` / `1 book`.
pub fn book_count_label(count: usize, out: &mut [u8; 24]) -> &str {
    let mut len = write_usize_ascii(count, out);
    let suffix: &[u8] = if count == 1 { b" book" } else { b" books" };
    let end = (len + suffix.len()).min(out.len());
    out[len..end].copy_from_slice(&suffix[..end - len]);
    len = end;
    str::from_utf8(&out[..len]).unwrap_or("")
}

pub fn write_usize_ascii(mut value: usize, out: &mut [u8]) -> usize {
    if out.is_empty() {
        return 0;
    }

    if value == 0 {
        out[0] = b'0';
        return 1;
    }

    let mut tmp = [0u8; 20];
    let mut n = 0usize;
    while value > 0 && n < tmp.len() {
        tmp[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
    }

    let len = n.min(out.len());
    for i in 0..len {
        out[i] = tmp[n - 1 - i];
    }
    len
}
