use std::cmp::Ordering;
use std::io::Write;

use crate::environment::Environment;
use crate::error::{EvalError, EvalResult};
use crate::expr::Expr;
use crate::types::{Type, Value};

/// The result triple of the big-step judgment: the computed value, its
/// runtime type, and the environment holding every binding created while
/// computing it.
pub type Evaluation = (Value, Type, Environment);

/// Evaluates one expression against an environment. Sub-expressions are
/// evaluated left to right, and the environment produced by one operand is
/// the input environment of the next; operands never see forked copies.
pub fn evaluate(
    expression: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    match expression {
        Expr::Ren => Ok((Value::Unit, Type::Unit, env.clone())),
        Expr::IntLiteral { value } => Ok((Value::Integer(*value), Type::Integer, env.clone())),
        Expr::FloatLiteral { value } => Ok((
            Value::FloatingPoint(*value),
            Type::FloatingPoint,
            env.clone(),
        )),
        Expr::StringLiteral { value } => {
            Ok((Value::String(value.clone()), Type::String, env.clone()))
        }
        Expr::BoolLiteral { value } => Ok((Value::Boolean(*value), Type::Boolean, env.clone())),
        Expr::Variable { name } => evaluate_variable(name, env),
        Expr::Assign { name, value } => evaluate_assign(name, value, env, output),
        Expr::Add { left, right } => evaluate_add(left, right, env, output),
        Expr::Subtract { left, right } => evaluate_subtract(left, right, env, output),
        Expr::Multiply { left, right } => evaluate_multiply(left, right, env, output),
        Expr::Divide { left, right } => evaluate_divide(left, right, env, output),
        Expr::And { left, right } => evaluate_logical(Logical::And, left, right, env, output),
        Expr::Or { left, right } => evaluate_logical(Logical::Or, left, right, env, output),
        Expr::Not { expr } => evaluate_not(expr, env, output),
        Expr::Lt { left, right } => evaluate_comparison(Comparison::Lt, left, right, env, output),
        Expr::Lte { left, right } => evaluate_comparison(Comparison::Lte, left, right, env, output),
        Expr::Gt { left, right } => evaluate_comparison(Comparison::Gt, left, right, env, output),
        Expr::Gte { left, right } => evaluate_comparison(Comparison::Gte, left, right, env, output),
        Expr::Eq { left, right } => evaluate_comparison(Comparison::Eq, left, right, env, output),
        Expr::Ne { left, right } => evaluate_comparison(Comparison::Ne, left, right, env, output),
        Expr::If {
            condition,
            true_branch,
            false_branch,
        } => evaluate_if(condition, true_branch, false_branch, env, output),
        Expr::While { condition, body } => evaluate_while(condition, body, env, output),
        Expr::Print { to_print } => evaluate_print(to_print, env, output),
        Expr::Sequence { exprs } | Expr::Program { exprs } => {
            evaluate_sequence(exprs, env, output)
        }
    }
}

fn evaluate_variable(name: &str, env: &Environment) -> EvalResult<Evaluation> {
    if let Some((value, var_type)) = env.lookup(name) {
        Ok((value, var_type, env.clone()))
    } else {
        Err(EvalError::Syntax(format!(
            "Cannot read from {name} before assignment."
        )))
    }
}

fn evaluate_assign(
    name: &str,
    value_expr: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let (value, value_type, env) = evaluate(value_expr, env, output)?;

    // The first assignment to a name fixes its type for as long as the
    // binding is visible; later assignments must match it exactly.
    if let Some((_, existing_type)) = env.lookup(name) {
        if existing_type != value_type {
            return Err(EvalError::Type(format!(
                "Mismatched types for Assign: cannot assign {value_type} to {existing_type}"
            )));
        }
    }

    let extended = env.extend(name, value.clone(), value_type);
    Ok((value, value_type, extended))
}

fn evaluate_add(
    left: &Expr,
    right: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let (left_value, left_type, env) = evaluate(left, env, output)?;
    let (right_value, right_type, env) = evaluate(right, &env, output)?;

    if left_type != right_type {
        return Err(EvalError::Type(format!(
            "Mismatched types for Add: cannot add {left_type} to {right_type}"
        )));
    }

    let value = match (left_value, right_value) {
        (Value::Integer(a), Value::Integer(b)) => Value::Integer(a + b),
        (Value::FloatingPoint(a), Value::FloatingPoint(b)) => Value::FloatingPoint(a + b),
        (Value::String(a), Value::String(b)) => Value::String(a + &b),
        _ => return Err(EvalError::Type(format!("Cannot add {left_type}s"))),
    };
    Ok((value, left_type, env))
}

fn evaluate_subtract(
    left: &Expr,
    right: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let (left_value, left_type, env) = evaluate(left, env, output)?;
    let (right_value, right_type, env) = evaluate(right, &env, output)?;

    if left_type != right_type {
        return Err(EvalError::Type(format!(
            "Mismatched types for Subtract: cannot subtract {right_type} from {left_type}"
        )));
    }

    let value = match (left_value, right_value) {
        (Value::Integer(a), Value::Integer(b)) => Value::Integer(a - b),
        (Value::FloatingPoint(a), Value::FloatingPoint(b)) => Value::FloatingPoint(a - b),
        _ => return Err(EvalError::Type(format!("Cannot subtract {left_type}s"))),
    };
    Ok((value, left_type, env))
}

fn evaluate_multiply(
    left: &Expr,
    right: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let (left_value, left_type, env) = evaluate(left, env, output)?;
    let (right_value, right_type, env) = evaluate(right, &env, output)?;

    if left_type != right_type {
        return Err(EvalError::Type(format!(
            "Mismatched types for Multiply: cannot multiply {left_type} by {right_type}"
        )));
    }

    let value = match (left_value, right_value) {
        (Value::Integer(a), Value::Integer(b)) => Value::Integer(a * b),
        (Value::FloatingPoint(a), Value::FloatingPoint(b)) => Value::FloatingPoint(a * b),
        _ => return Err(EvalError::Type(format!("Cannot multiply {left_type}s"))),
    };
    Ok((value, left_type, env))
}

fn evaluate_divide(
    left: &Expr,
    right: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let (left_value, left_type, env) = evaluate(left, env, output)?;
    let (right_value, right_type, env) = evaluate(right, &env, output)?;

    if left_type != right_type {
        return Err(EvalError::Type(format!(
            "Mismatched types for Divide: cannot divide {left_type} by {right_type}"
        )));
    }

    let value = match (left_value, right_value) {
        (Value::Integer(a), Value::Integer(b)) => {
            if b == 0 {
                return Err(EvalError::Math("division by zero".to_string()));
            }
            // Integer quotients where the dividend is smaller than the
            // divisor collapse to 0, even where plain truncation would give
            // a nonzero result (negative dividends).
            if a < b {
                Value::Integer(0)
            } else {
                Value::Integer(a / b)
            }
        }
        (Value::FloatingPoint(a), Value::FloatingPoint(b)) => {
            if b == 0.0 {
                return Err(EvalError::Math("division by zero".to_string()));
            }
            Value::FloatingPoint(a / b)
        }
        _ => return Err(EvalError::Type(format!("Cannot divide {left_type}s"))),
    };
    Ok((value, left_type, env))
}

#[derive(Debug, Clone, Copy)]
enum Logical {
    And,
    Or,
}

impl Logical {
    fn name(self) -> &'static str {
        match self {
            Self::And => "And",
            Self::Or => "Or",
        }
    }
}

// Both operands are always evaluated; bindings made while evaluating the
// right operand land even when the left operand alone decides the outcome.
fn evaluate_logical(
    operator: Logical,
    left: &Expr,
    right: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let (left_value, left_type, env) = evaluate(left, env, output)?;
    let (right_value, right_type, env) = evaluate(right, &env, output)?;

    if left_type != right_type {
        return Err(EvalError::Type(format!(
            "Mismatched types for {}: cannot combine {left_type} and {right_type}",
            operator.name()
        )));
    }

    match (left_value, right_value) {
        (Value::Boolean(a), Value::Boolean(b)) => {
            let result = match operator {
                Logical::And => a && b,
                Logical::Or => a || b,
            };
            Ok((Value::Boolean(result), Type::Boolean, env))
        }
        _ => Err(EvalError::Type(format!(
            "Cannot perform {} on non-Boolean operands",
            operator.name()
        ))),
    }
}

fn evaluate_not(
    expr: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let (value, value_type, env) = evaluate(expr, env, output)?;
    match value {
        Value::Boolean(b) => Ok((Value::Boolean(!b), Type::Boolean, env)),
        _ => Err(EvalError::Type(format!(
            "Cannot perform Not on {value_type} operand"
        ))),
    }
}

#[derive(Debug, Clone, Copy)]
enum Comparison {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Ne,
}

impl Comparison {
    fn name(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }

    // There is exactly one unit value, so Unit compares equal to Unit
    // unconditionally.
    fn on_unit(self) -> bool {
        matches!(self, Self::Lte | Self::Gte | Self::Eq)
    }

    // An incomparable pair (float NaN) satisfies only `!=`.
    fn on_ordering(self, ordering: Option<Ordering>) -> bool {
        match ordering {
            Some(Ordering::Less) => matches!(self, Self::Lt | Self::Lte | Self::Ne),
            Some(Ordering::Equal) => matches!(self, Self::Lte | Self::Gte | Self::Eq),
            Some(Ordering::Greater) => matches!(self, Self::Gt | Self::Gte | Self::Ne),
            None => matches!(self, Self::Ne),
        }
    }
}

fn evaluate_comparison(
    operator: Comparison,
    left: &Expr,
    right: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let (left_value, left_type, env) = evaluate(left, env, output)?;
    let (right_value, right_type, env) = evaluate(right, &env, output)?;

    if left_type != right_type {
        return Err(EvalError::Type(format!(
            "Mismatched types for {}: cannot compare {left_type} and {right_type}",
            operator.name()
        )));
    }

    let result = match (&left_value, &right_value) {
        (Value::Unit, Value::Unit) => operator.on_unit(),
        (Value::Integer(a), Value::Integer(b)) => operator.on_ordering(a.partial_cmp(b)),
        (Value::FloatingPoint(a), Value::FloatingPoint(b)) => {
            operator.on_ordering(a.partial_cmp(b))
        }
        (Value::String(a), Value::String(b)) => operator.on_ordering(a.partial_cmp(b)),
        (Value::Boolean(a), Value::Boolean(b)) => operator.on_ordering(a.partial_cmp(b)),
        // unreachable because the operand types were just checked for equality
        _ => panic!("Comparison operands with matching types but mismatched values"),
    };
    Ok((Value::Boolean(result), Type::Boolean, env))
}

fn evaluate_if(
    condition: &Expr,
    true_branch: &Expr,
    false_branch: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let (cond_value, cond_type, env) = evaluate(condition, env, output)?;
    let chosen = match cond_value {
        Value::Boolean(true) => true_branch,
        Value::Boolean(false) => false_branch,
        _ => {
            return Err(EvalError::Type(format!(
                "If condition must be Boolean, found {cond_type}"
            )))
        }
    };
    // The chosen branch's triple propagates as-is, environment included.
    evaluate(chosen, &env, output)
}

fn evaluate_while(
    condition: &Expr,
    body: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let mut env = env.clone();
    let mut body_result: Option<(Value, Type)> = None;

    loop {
        let (cond_value, cond_type, cond_env) = evaluate(condition, &env, output)?;
        env = cond_env;
        match cond_value {
            Value::Boolean(true) => {}
            Value::Boolean(false) => break,
            _ => {
                return Err(EvalError::Type(format!(
                    "While condition must be Boolean, found {cond_type}"
                )))
            }
        }

        let (value, value_type, body_env) = evaluate(body, &env, output)?;
        body_result = Some((value, value_type));
        env = body_env;
    }

    // A body that never ran, or whose final result was Unit, reports the
    // final (false) condition value instead.
    match body_result {
        Some((value, value_type)) if value_type != Type::Unit => Ok((value, value_type, env)),
        _ => Ok((Value::Boolean(false), Type::Boolean, env)),
    }
}

fn evaluate_print(
    to_print: &Expr,
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let (value, value_type, env) = evaluate(to_print, env, output)?;
    writeln!(output, "{value}").expect("Writing to program output should always succeed.");
    Ok((value, value_type, env))
}

fn evaluate_sequence(
    exprs: &[Expr],
    env: &Environment,
    output: &mut dyn Write,
) -> EvalResult<Evaluation> {
    let mut env = env.clone();
    let mut last: Option<(Value, Type)> = None;

    for expr in exprs {
        let (value, value_type, next_env) = evaluate(expr, &env, output)?;
        last = Some((value, value_type));
        env = next_env;
    }

    // Bindings made inside the sequence stay visible afterwards regardless
    // of the final expression's type.
    match last {
        Some((value, value_type)) => Ok((value, value_type, env)),
        None => Ok((Value::Unit, Type::Unit, env)),
    }
}
