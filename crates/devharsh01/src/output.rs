use std::io::{self, Write};

/// Write the whole payload in one call and flush it.
///
/// A reader that hung up early (`devharsh01 | head -1`) is not an error.
pub fn emit<W: Write>(out: &mut W, payload: &str) -> io::Result<()> {
  match out.write_all(payload.as_bytes()).and_then(|()| out.flush()) {
    Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
    result => result,
  }
}
