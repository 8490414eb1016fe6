use crate::json::to_json;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use xtract_match::{Extractor, Map};

pub struct Output {
    stdout: StandardStream,
    pretty: bool,
}

impl Output {
    pub fn new(color: bool, pretty: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
            pretty,
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_bold(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_bold(true));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    /// Prints one extraction result as a JSON document, `null` for no match.
    pub fn print_result(&mut self, result: Option<&Map>) -> io::Result<()> {
        let Some(values) = result else {
            self.set_color(Color::Yellow);
            writeln!(self.stdout, "null")?;
            self.reset();
            return Ok(());
        };

        let json = to_json(values);
        let text = if self.pretty {
            serde_json::to_string_pretty(&json)
        } else {
            serde_json::to_string(&json)
        }
        .map_err(io::Error::from)?;
        writeln!(self.stdout, "{}", text)
    }

    pub fn print_explain(&mut self, extractor: &Extractor) -> io::Result<()> {
        let matcher = extractor.matcher();

        self.set_bold();
        write!(self.stdout, "pattern")?;
        self.reset();
        writeln!(self.stdout, " {}", matcher.pattern())?;

        for (tag, capture) in extractor.template().tags().zip(matcher.captures()) {
            self.set_color(Color::Cyan);
            write!(self.stdout, "{}", capture)?;
            self.reset();

            self.set_dim();
            writeln!(
                self.stdout,
                "  at byte {}, between {} and {}",
                tag.offset,
                describe(tag.before),
                describe(tag.after)
            )?;
            self.reset();
        }
        self.stdout.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

fn describe(neighbour: Option<char>) -> String {
    match neighbour {
        Some(c) => format!("{:?}", c),
        None => "-".to_string(),
    }
}
