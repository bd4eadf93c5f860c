use std::fmt;

/// Program representation. A closed set of node kinds; nodes are immutable
/// records of their operands and carry no behavior of their own. There is no
/// parser in this crate, programs are constructed directly as trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ren,
    IntLiteral {
        value: i64,
    },
    FloatLiteral {
        value: f64,
    },
    StringLiteral {
        value: String,
    },
    BoolLiteral {
        value: bool,
    },
    Variable {
        name: String,
    },
    Assign {
        name: String,
        value: Box<Expr>,
    },
    Add {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Subtract {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Multiply {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Divide {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    And {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Or {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not {
        expr: Box<Expr>,
    },
    Lt {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Lte {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Gt {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Gte {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Eq {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Ne {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        true_branch: Box<Expr>,
        false_branch: Box<Expr>,
    },
    While {
        condition: Box<Expr>,
        body: Box<Expr>,
    },
    Print {
        to_print: Box<Expr>,
    },
    Sequence {
        exprs: Vec<Expr>,
    },
    Program {
        exprs: Vec<Expr>,
    },
}

// Constructors that take care of the boxing, so programs can be written as
// nested calls instead of nested struct literals.
impl Expr {
    pub fn int(value: i64) -> Expr {
        Expr::IntLiteral { value }
    }

    pub fn float(value: f64) -> Expr {
        Expr::FloatLiteral { value }
    }

    pub fn string(value: &str) -> Expr {
        Expr::StringLiteral {
            value: value.to_string(),
        }
    }

    pub fn boolean(value: bool) -> Expr {
        Expr::BoolLiteral { value }
    }

    pub fn variable(name: &str) -> Expr {
        Expr::Variable {
            name: name.to_string(),
        }
    }

    pub fn assign(name: &str, value: Expr) -> Expr {
        Expr::Assign {
            name: name.to_string(),
            value: Box::new(value),
        }
    }

    pub fn add(left: Expr, right: Expr) -> Expr {
        Expr::Add {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn subtract(left: Expr, right: Expr) -> Expr {
        Expr::Subtract {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn multiply(left: Expr, right: Expr) -> Expr {
        Expr::Multiply {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn divide(left: Expr, right: Expr) -> Expr {
        Expr::Divide {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not(expr: Expr) -> Expr {
        Expr::Not {
            expr: Box::new(expr),
        }
    }

    pub fn lt(left: Expr, right: Expr) -> Expr {
        Expr::Lt {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn lte(left: Expr, right: Expr) -> Expr {
        Expr::Lte {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn gt(left: Expr, right: Expr) -> Expr {
        Expr::Gt {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn gte(left: Expr, right: Expr) -> Expr {
        Expr::Gte {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn eq(left: Expr, right: Expr) -> Expr {
        Expr::Eq {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ne(left: Expr, right: Expr) -> Expr {
        Expr::Ne {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn if_else(condition: Expr, true_branch: Expr, false_branch: Expr) -> Expr {
        Expr::If {
            condition: Box::new(condition),
            true_branch: Box::new(true_branch),
            false_branch: Box::new(false_branch),
        }
    }

    pub fn while_loop(condition: Expr, body: Expr) -> Expr {
        Expr::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    pub fn print(to_print: Expr) -> Expr {
        Expr::Print {
            to_print: Box::new(to_print),
        }
    }

    pub fn sequence(exprs: Vec<Expr>) -> Expr {
        Expr::Sequence { exprs }
    }

    pub fn program(exprs: Vec<Expr>) -> Expr {
        Expr::Program { exprs }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", print_ast(self))
    }
}

/// Renders a program in prefix notation, one line regardless of nesting.
pub fn print_ast(root: &Expr) -> String {
    let mut printed = String::new();
    format_expr(root, &mut printed);
    printed
}

fn format_expr(expr: &Expr, output: &mut String) {
    match expr {
        Expr::Ren => output.push_str("ren"),
        Expr::IntLiteral { value } => output.push_str(&value.to_string()),
        Expr::FloatLiteral { value } => output.push_str(&value.to_string()),
        Expr::StringLiteral { value } => {
            output.push('"');
            output.push_str(value);
            output.push('"');
        }
        Expr::BoolLiteral { value } => output.push_str(&value.to_string()),
        Expr::Variable { name } => output.push_str(name),
        Expr::Assign { name, value } => {
            output.push_str("(assign ");
            output.push_str(name);
            output.push(' ');
            format_expr(value, output);
            output.push(')');
        }
        Expr::Add { left, right } => format_subexprs("+", left, right, output),
        Expr::Subtract { left, right } => format_subexprs("-", left, right, output),
        Expr::Multiply { left, right } => format_subexprs("*", left, right, output),
        Expr::Divide { left, right } => format_subexprs("/", left, right, output),
        Expr::And { left, right } => format_subexprs("and", left, right, output),
        Expr::Or { left, right } => format_subexprs("or", left, right, output),
        Expr::Not { expr } => format_subexpr("not", expr, output),
        Expr::Lt { left, right } => format_subexprs("<", left, right, output),
        Expr::Lte { left, right } => format_subexprs("<=", left, right, output),
        Expr::Gt { left, right } => format_subexprs(">", left, right, output),
        Expr::Gte { left, right } => format_subexprs(">=", left, right, output),
        Expr::Eq { left, right } => format_subexprs("==", left, right, output),
        Expr::Ne { left, right } => format_subexprs("!=", left, right, output),
        Expr::If {
            condition,
            true_branch,
            false_branch,
        } => {
            output.push_str("(if ");
            format_expr(condition, output);
            output.push(' ');
            format_expr(true_branch, output);
            output.push(' ');
            format_expr(false_branch, output);
            output.push(')');
        }
        Expr::While { condition, body } => format_subexprs("while", condition, body, output),
        Expr::Print { to_print } => format_subexpr("print", to_print, output),
        Expr::Sequence { exprs } => format_exprs("seq", exprs, output),
        Expr::Program { exprs } => format_exprs("program", exprs, output),
    }
}

fn format_subexpr(name: &str, expr: &Expr, output: &mut String) {
    output.push('(');
    output.push_str(name);
    output.push(' ');
    format_expr(expr, output);
    output.push(')');
}

fn format_subexprs(name: &str, expr1: &Expr, expr2: &Expr, output: &mut String) {
    output.push('(');
    output.push_str(name);
    output.push(' ');
    format_expr(expr1, output);
    output.push(' ');
    format_expr(expr2, output);
    output.push(')');
}

fn format_exprs(name: &str, exprs: &[Expr], output: &mut String) {
    output.push('(');
    output.push_str(name);
    for expr in exprs {
        output.push(' ');
        format_expr(expr, output);
    }
    output.push(')');
}
