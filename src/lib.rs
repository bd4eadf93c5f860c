mod environment;
mod expr;
mod interpreter;
mod types;

pub mod error;

pub use environment::Environment;
pub use expr::{print_ast, Expr};
pub use interpreter::{evaluate, Evaluation};
pub use types::{Type, Value};

use std::io::{self, Write};

pub type RunResult = error::GenericResult<(Value, Type, Environment)>;

/// Evaluates a program against a fresh empty environment. `Print` output
/// goes to stdout.
pub fn run(program: &Expr) -> RunResult {
    run_with_output(program, false, &mut io::stdout())
}

/// Same as `run`, but all output goes to the supplied writer. With `debug`
/// set, the program's textual form, the final `(value, type)` pair, and a
/// dump of the final environment are written after evaluation.
pub fn run_with_output(program: &Expr, debug: bool, output: &mut dyn Write) -> RunResult {
    let env = Environment::new();
    let (value, value_type, final_env) = interpreter::evaluate(program, &env, output)?;

    if debug {
        writeln!(output, "program: {program}")?;
        writeln!(output, "final_value: ({value}, {value_type})")?;
        writeln!(output, "final_env: {final_env}")?;
    }

    Ok((value, value_type, final_env))
}
