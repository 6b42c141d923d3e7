use std::{io, thread, time::Duration};

use inkreader_core::input::{TouchPoint, TouchProvider};
use log::{debug, info};

/// Touch controller fed by text lines.
///
/// Each poll blocks on one line. `x y` reports a touch at panel coordinates,
/// `wait <ms>` sleeps before the next poll, and blank lines or `#` comments
/// report nothing. End of input closes the controller.
pub struct StdinTouch<R> {
    reader: R,
    line: String,
    closed: bool,
}

impl<R: io::BufRead> StdinTouch<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<R: io::BufRead> TouchProvider for StdinTouch<R> {
    type Error = io::Error;

    fn poll_touch(&mut self) -> Result<Option<TouchPoint>, Self::Error> {
        if self.closed {
            return Ok(None);
        }

        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            info!("input: end of touch script");
            self.closed = true;
            return Ok(None);
        }

        parse_line(&self.line)
    }
}

fn parse_line(line: &str) -> io::Result<Option<TouchPoint>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let first = fields.next().unwrap_or_default();
    if first == "wait" {
        let ms = parse_field(fields.next(), line)?;
        debug!("input: wait {}ms", ms);
        thread::sleep(Duration::from_millis(ms));
        return Ok(None);
    }

    let x = parse_field(Some(first), line)?;
    let y = parse_field(fields.next(), line)?;
    if fields.next().is_some() {
        return Err(invalid(line));
    }
    Ok(Some(TouchPoint::new(x, y)))
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, line: &str) -> io::Result<T> {
    field
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| invalid(line))
}

fn invalid(line: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("expected `x y` or `wait <ms>`, got `{line}`"),
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_points_and_skips_comments() {
        let mut touch = StdinTouch::new(Cursor::new("# open\n\n512 700\n  30 40  \n"));

        assert_eq!(touch.poll_touch().unwrap(), None);
        assert_eq!(touch.poll_touch().unwrap(), None);
        assert_eq!(touch.poll_touch().unwrap(), Some(TouchPoint::new(512, 700)));
        assert_eq!(touch.poll_touch().unwrap(), Some(TouchPoint::new(30, 40)));
        assert!(!touch.is_closed());

        assert_eq!(touch.poll_touch().unwrap(), None);
        assert!(touch.is_closed());
    }

    #[test]
    fn malformed_lines_are_errors() {
        for line in ["12", "a b", "1 2 3", "wait", "wait soon"] {
            let mut touch = StdinTouch::new(Cursor::new(line));
            let err = touch.poll_touch().unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidData, "{line}");
        }
    }

    #[test]
    fn wait_reports_nothing() {
        let mut touch = StdinTouch::new(Cursor::new("wait 0\n"));
        assert_eq!(touch.poll_touch().unwrap(), None);
        assert!(!touch.is_closed());
    }
}
