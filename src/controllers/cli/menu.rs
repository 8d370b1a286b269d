use std::io::{self, BufRead, Write};

use crate::core::fractals::fractal_kinds::FractalKind;

/// Selector returned when the answer is not a number, so the usual fallback applies.
pub const UNPARSEABLE_SELECTOR: i64 = -1;

/// Lists the fractal families on `writer` and reads one selector line from `reader`.
///
/// Anything that does not parse as an integer, including end of input, yields
/// [`UNPARSEABLE_SELECTOR`]. Range checking is left to
/// [`FractalKind::resolve_selector`].
pub fn prompt_fractal_selector(
    mut reader: impl BufRead,
    mut writer: impl Write,
) -> io::Result<i64> {
    writeln!(writer, "Choose a fractal to render:")?;
    for &kind in FractalKind::ALL {
        match kind.recurrence_constant() {
            Some(c) => writeln!(
                writer,
                "{}. {} (z² {:+} {:+}i)",
                kind.selector(),
                kind.display_name(),
                c.real,
                c.imag
            )?,
            None => writeln!(writer, "{}. {} (z² + c)", kind.selector(), kind.display_name())?,
        }
    }
    write!(writer, "Your choice: ")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;

    Ok(line.trim().parse().unwrap_or(UNPARSEABLE_SELECTOR))
}
