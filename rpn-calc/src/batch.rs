use std::io::Write;

use crate::backend::Backend;

/// Evaluates `expression` once and prints the outcome.
///
/// Returns `Ok(false)` when the expression itself failed to evaluate; the
/// error message has already been written to `err` at that point.
pub fn run_batch<O, E>(
    backend: &mut dyn Backend,
    expression: &str,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<bool>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    writeln!(out, "RPN calculator - {} mode", backend.mode_name())?;
    writeln!(out, "Expression: {}", expression)?;

    match backend.evaluate(expression) {
        Ok(Some(result)) => {
            writeln!(out, "Result: {}", result)?;
            Ok(true)
        }
        Ok(None) => {
            writeln!(out, "Result: none")?;
            Ok(true)
        }
        Err(e) => {
            log::info!("batch evaluation of {:?} failed: {}", expression, e);
            writeln!(err, "Error: {}", e)?;
            Ok(false)
        }
    }
}

/// Process exit status for a batch run: 0 on success, 1 when evaluation failed.
pub fn exit_status(ok: bool) -> u8 {
    if ok {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Mode;
    use rpn_engine::Silent;

    fn batch(mode: Mode, expression: &str) -> (bool, String, String) {
        let mut backend = mode.backend(Silent);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = run_batch(backend.as_mut(), expression, &mut out, &mut err).unwrap();
        (
            ok,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_batch_success() {
        let (ok, out, err) = batch(Mode::Object, "10 5 + 2 * 8 4 / -");
        assert!(ok);
        assert_eq!(
            out,
            "RPN calculator - object (C) mode\n\
             Expression: 10 5 + 2 * 8 4 / -\n\
             Result: 28\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_batch_modes_agree() {
        for expression in ["5 3 + 2 * ", "1 2 3", "0.1 0.2 +", "", "2 0 /", "1 x"] {
            let (ok_c, out_c, err_c) = batch(Mode::Object, expression);
            let (ok_f, out_f, err_f) = batch(Mode::Functional, expression);

            assert_eq!(ok_c, ok_f);
            assert_eq!(err_c, err_f);
            let body = |out: &str| out.lines().skip(1).collect::<Vec<_>>().join("\n");
            assert_eq!(body(&out_c), body(&out_f));
        }
    }

    #[test]
    fn test_batch_failure() {
        let (ok, out, err) = batch(Mode::Functional, "1 +");
        assert!(!ok);
        assert!(!out.contains("Result"));
        assert_eq!(
            err,
            "Error: insufficient operands for '+': need 2, stack holds 1\n"
        );
    }

    #[test]
    fn test_batch_exit_status() {
        let (ok, _, _) = batch(Mode::Object, "5 3 + 2 *");
        assert_eq!(exit_status(ok), 0);

        for expression in ["1 +", "4 0 /", "2 2 %"] {
            for mode in [Mode::Object, Mode::Functional] {
                let (ok, _, _) = batch(mode, expression);
                assert_eq!(exit_status(ok), 1, "{}", expression);
            }
        }
    }

    #[test]
    fn test_batch_empty_expression() {
        let (ok, out, _) = batch(Mode::Object, "   ");
        assert!(ok);
        assert!(out.ends_with("Result: none\n"));
    }
}
