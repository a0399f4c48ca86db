//! Paged output for long listings.

use std::io::{self, BufRead, Write};

use crate::error::PayrollResult;

/// Writes lines and waits for Enter after every full page.
///
/// The pause comes before the first line of the next page, so a listing
/// that ends on a page boundary does not wait for nothing. Once the input
/// reaches its end, pausing stops and the rest is written straight through.
#[derive(Debug)]
pub struct Pager<R, W> {
    input: Option<R>,
    output: W,
    page_size: usize,
    lines_on_page: usize,
}

impl<R: BufRead, W: Write> Pager<R, W> {
    /// Creates a pager that pauses every `page_size` lines, reading Enter
    /// from `input`. A `page_size` of zero never pauses.
    pub fn interactive(input: R, output: W, page_size: usize) -> Self {
        Self {
            input: Some(input),
            output,
            page_size,
            lines_on_page: 0,
        }
    }

    /// Returns the output stream.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes one line, pausing first if the current page is full.
    pub fn write_line(&mut self, line: &str) -> PayrollResult<()> {
        if self.page_size > 0 && self.lines_on_page == self.page_size {
            self.pause()?;
            self.lines_on_page = 0;
        }
        writeln!(self.output, "{line}")?;
        self.lines_on_page += 1;
        Ok(())
    }

    fn pause(&mut self) -> PayrollResult<()> {
        let Some(input) = self.input.as_mut() else {
            return Ok(());
        };

        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;

        let mut discard = Vec::new();
        if input.read_until(b'\n', &mut discard)? == 0 {
            self.input = None;
            writeln!(self.output)?;
        }
        Ok(())
    }
}

impl<W: Write> Pager<io::Empty, W> {
    /// Creates a pager that never pauses.
    pub fn continuous(output: W) -> Self {
        Self {
            input: None,
            output,
            page_size: 0,
            lines_on_page: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PROMPT: &str = "Press Enter to continue...";

    fn write_lines<R: BufRead>(pager: &mut Pager<R, Vec<u8>>, count: usize) {
        for i in 1..=count {
            pager.write_line(&format!("line {i}")).unwrap();
        }
    }

    #[test]
    fn test_pauses_between_pages() {
        let mut pager = Pager::interactive(Cursor::new("\n\n"), Vec::new(), 2);
        write_lines(&mut pager, 5);

        let text = String::from_utf8(pager.output).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 2);
        assert!(text.starts_with("line 1\nline 2\nPress Enter"));
    }

    #[test]
    fn test_no_pause_after_last_full_page() {
        let mut pager = Pager::interactive(Cursor::new("\n"), Vec::new(), 2);
        write_lines(&mut pager, 4);

        let text = String::from_utf8(pager.output).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 1);
        assert!(text.ends_with("line 4\n"));
    }

    #[test]
    fn test_end_of_input_stops_pausing() {
        let mut pager = Pager::interactive(Cursor::new(""), Vec::new(), 1);
        write_lines(&mut pager, 4);

        let text = String::from_utf8(pager.output).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 1);
        assert_eq!(text.matches("line ").count(), 4);
    }

    #[test]
    fn test_any_bytes_continue_after_pause() {
        let mut pager = Pager::interactive(Cursor::new(&b"\xff\n"[..]), Vec::new(), 1);
        write_lines(&mut pager, 2);

        let text = String::from_utf8(pager.output).unwrap();
        assert_eq!(text, format!("line 1\n{PROMPT}line 2\n"));
    }

    #[test]
    fn test_continuous_never_pauses() {
        let mut pager = Pager::continuous(Vec::new());
        write_lines(&mut pager, 20);

        let text = String::from_utf8(pager.output).unwrap();
        assert!(!text.contains(PROMPT));
        assert_eq!(text.lines().count(), 20);
    }
}
