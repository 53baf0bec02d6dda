use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rustyline::DefaultEditor;

use rpn_calc::batch::{exit_status, run_batch};
use rpn_calc::cli::Args;
use rpn_calc::logging;
use rpn_calc::session::{Piped, Session};
use rpn_engine::LogTrace;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    logging::builder(args.log_level).init();

    let mut backend = args.mode.backend(LogTrace);
    log::debug!("using {} backend", backend.mode_name());

    if let Some(expression) = &args.expression {
        let ok = run_batch(
            backend.as_mut(),
            expression,
            &mut io::stdout(),
            &mut io::stderr(),
        )?;
        return Ok(ExitCode::from(exit_status(ok)));
    }

    let mut session = Session::new(backend);
    let mut out = io::stdout();
    let mut err = io::stderr();

    // The line editor only makes sense on a terminal.
    if io::stdin().is_terminal() {
        let mut editor = DefaultEditor::new().context("failed to initialise the line editor")?;
        session.run(&mut editor, &mut out, &mut err)?;
    } else {
        let mut reader = Piped(io::stdin().lock());
        session.run(&mut reader, &mut out, &mut err)?;
    }

    Ok(ExitCode::SUCCESS)
}
