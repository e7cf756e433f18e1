use crate::core::checksum;
use crate::core::classifier::{self, Command};
use crate::core::presentation::{self, BANNER, EXIT_MESSAGE, INPUT_MARKER, INSTRUCTIONS};
use crate::domain::model::Request;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// 每一行處理完後的流程控制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub computed: usize,
    pub validated: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub show_banner: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { show_banner: true }
    }
}

/// Interactive read-eval-print loop over any line source and sink.
pub struct Session<R, W> {
    input: R,
    output: W,
    options: SessionOptions,
    stats: SessionStats,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            options,
            stats: SessionStats::default(),
        }
    }

    /// Runs until a quit keyword or end of input.
    pub fn run(&mut self) -> Result<SessionStats> {
        tracing::info!("Starting ISBN session");

        if self.options.show_banner {
            writeln!(self.output, "{}", BANNER)?;
        }
        self.prompt()?;

        let mut buf = Vec::new();
        loop {
            write!(self.output, "{}", INPUT_MARKER)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                tracing::info!("End of input reached");
                writeln!(self.output, "{}", EXIT_MESSAGE)?;
                break;
            }

            // 非 UTF-8 位元組以替代字元保留，交由分類器拒絕
            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        self.output.flush()?;
        tracing::info!(
            "Session finished: {} computed, {} validated, {} rejected",
            self.stats.computed,
            self.stats.validated,
            self.stats.rejected
        );
        Ok(self.stats)
    }

    /// Processes one raw line and writes its response.
    pub fn handle_line(&mut self, raw: &str) -> Result<Flow> {
        match classifier::parse_command(raw) {
            Ok(Command::Quit) => {
                writeln!(self.output, "{}", EXIT_MESSAGE)?;
                Ok(Flow::Quit)
            }
            Ok(Command::Run(request)) => {
                tracing::debug!("Handling {}", request.sequence());
                self.dispatch(&request)?;
                self.prompt()?;
                Ok(Flow::Continue)
            }
            Err(e) => {
                tracing::debug!("Input rejected ({}): {}", e.category(), e);
                self.stats.rejected += 1;
                writeln!(self.output, "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, request: &Request) -> Result<()> {
        let lines = match request {
            Request::Compute(seq) => {
                self.stats.computed += 1;
                let check = checksum::compute_check(seq);
                presentation::render_compute(seq, check)
            }
            Request::Validate(seq) => {
                self.stats.validated += 1;
                match checksum::evaluate(seq) {
                    Some(verdict) => {
                        tracing::debug!("{} {} valid: {}", verdict.kind, seq, verdict.is_valid());
                        presentation::render_verdict(&verdict)
                    }
                    // 分類器保證完整長度，這裡不應發生
                    None => {
                        let check = checksum::compute_check(seq);
                        presentation::render_compute(seq, check)
                    }
                }
            }
        };

        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", INSTRUCTIONS)?;
        Ok(())
    }
}
