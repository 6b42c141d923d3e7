//! Natural filename ordering for page sequences.

use core::cmp::Ordering;

/// Compares two filenames so that digit runs order by numeric value.
///
/// Names are split into alternating text and digit chunks. Digit chunks
/// compare by value, text chunks byte-wise. When every chunk compares equal
/// (`01.png` against `1.png`) the plain byte order of the full names decides,
/// so the result is a total order usable as a sort key.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a.as_bytes());
    let mut right = Chunks::new(b.as_bytes());

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = compare_chunks(l, r);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn compare_chunks(left: &[u8], right: &[u8]) -> Ordering {
    match (is_digit_chunk(left), is_digit_chunk(right)) {
        (true, true) => compare_numeric(left, right),
        // A digit chunk never shares its first byte with a text chunk, so the
        // leading byte alone places it consistently.
        (true, false) | (false, true) => left[0].cmp(&right[0]),
        (false, false) => left.cmp(right),
    }
}

fn compare_numeric(left: &[u8], right: &[u8]) -> Ordering {
    let left = strip_leading_zeros(left);
    let right = strip_leading_zeros(right);

    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

fn strip_leading_zeros(digits: &[u8]) -> &[u8] {
    let first_significant = digits
        .iter()
        .position(|&b| b != b'0')
        .unwrap_or(digits.len());
    &digits[first_significant..]
}

fn is_digit_chunk(chunk: &[u8]) -> bool {
    chunk.first().is_some_and(u8::is_ascii_digit)
}

struct Chunks<'a> {
    rest: &'a [u8],
}

impl<'a> Chunks<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let first = *self.rest.first()?;
        let digits = first.is_ascii_digit();
        let len = self
            .rest
            .iter()
            .position(|b| b.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());

        let (chunk, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_suffixes_order_by_value() {
        assert_eq!(natural_cmp("page2.png", "page10.png"), Ordering::Less);
        assert_eq!(natural_cmp("page10.png", "page10b.png"), Ordering::Less);
        assert_eq!(natural_cmp("page2.png", "page10b.png"), Ordering::Less);
        assert_eq!(natural_cmp("page10.png", "page2.png"), Ordering::Greater);
    }

    #[test]
    fn sorting_image_names_is_numeric() {
        let mut names = ["img2.png", "img10.png", "img1.png"];
        names.sort_unstable_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, ["img1.png", "img2.png", "img10.png"]);
    }

    #[test]
    fn zero_padded_names_keep_their_order() {
        let mut names = ["0010.png", "0002.png", "0001.png", "0100.png"];
        names.sort_unstable_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, ["0001.png", "0002.png", "0010.png", "0100.png"]);
    }

    #[test]
    fn equal_values_fall_back_to_byte_order() {
        assert_eq!(natural_cmp("01.png", "1.png"), "01.png".cmp("1.png"));
        assert_eq!(natural_cmp("1.png", "01.png"), Ordering::Greater);
        assert_eq!(natural_cmp("same.png", "same.png"), Ordering::Equal);
    }

    #[test]
    fn names_without_digits_are_lexical() {
        assert_eq!(natural_cmp("cover.jpg", "intro.jpg"), Ordering::Less);
        assert_eq!(natural_cmp("Zeta.bmp", "alpha.bmp"), Ordering::Less);
    }

    #[test]
    fn digit_runs_longer_than_u64_still_compare() {
        assert_eq!(
            natural_cmp("p99999999999999999999999.png", "p100000000000000000000000.png"),
            Ordering::Less
        );
    }

    #[test]
    fn mixed_text_and_digit_chunks_stay_transitive() {
        let mut names = ["c1", "b", "a2", "a10", "1a", "-x", "a"];
        names.sort_unstable_by(|a, b| natural_cmp(a, b));
        for pair in names.windows(2) {
            assert_eq!(natural_cmp(pair[0], pair[1]), Ordering::Less);
        }
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_eq!(natural_cmp(a, b), Ordering::Less, "{a} vs {b}");
            }
        }
    }
}
