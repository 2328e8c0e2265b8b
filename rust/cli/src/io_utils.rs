//! Line-oriented input helpers for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line (possibly empty), or `None` on EOF.
///
/// # Example
///
/// ```rust
/// # use onecard_cli::io_utils::read_stdin_line;
/// let mut input: &[u8] = b"  draw \n";
/// assert_eq!(read_stdin_line(&mut input).unwrap().as_deref(), Some("draw"));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}
