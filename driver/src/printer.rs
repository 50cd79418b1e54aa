use model::{Block, Expr, Program, Stmt, Value};

/// Render an AST as indented text. Pure consumer of the public node
/// shape: read-only traversal, two spaces per level.
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    push_line(&mut out, 0, "Program");
    for stmt in &program.statements {
        render_stmt(&mut out, 1, stmt);
    }
    out
}

fn render_stmt(out: &mut String, indent: usize, stmt: &Stmt) {
    match stmt {
        Stmt::VarDeclaration { name, value } => {
            push_line(out, indent, &format!("VarDecl: {name}"));
            render_expr(out, indent + 1, value);
        }
        Stmt::Assignment { name, value } => {
            push_line(out, indent, &format!("Assign: {name}"));
            render_expr(out, indent + 1, value);
        }
        Stmt::If { condition, then_branch, else_branch } => {
            push_line(out, indent, "If");
            push_line(out, indent + 1, "Condition:");
            render_expr(out, indent + 2, condition);
            push_line(out, indent + 1, "Then:");
            render_block(out, indent + 2, then_branch);
            if let Some(else_branch) = else_branch {
                push_line(out, indent + 1, "Else:");
                render_block(out, indent + 2, else_branch);
            }
        }
        Stmt::While { condition, body } => {
            push_line(out, indent, "While");
            push_line(out, indent + 1, "Condition:");
            render_expr(out, indent + 2, condition);
            push_line(out, indent + 1, "Body:");
            render_block(out, indent + 2, body);
        }
        Stmt::FunctionDef { name, params, body } => {
            push_line(out, indent, &format!("Function: {name}"));
            push_line(out, indent + 1, &format!("Parameters: {}", params.join(", ")));
            push_line(out, indent + 1, "Body:");
            render_block(out, indent + 2, body);
        }
        Stmt::Return(value) => {
            push_line(out, indent, "Return");
            render_expr(out, indent + 1, value);
        }
        Stmt::Print(value) => {
            push_line(out, indent, "Print");
            render_expr(out, indent + 1, value);
        }
        Stmt::Expr(expr) => {
            render_expr(out, indent, expr);
        }
    }
}

fn render_block(out: &mut String, indent: usize, block: &Block) {
    for stmt in &block.statements {
        render_stmt(out, indent, stmt);
    }
}

fn render_expr(out: &mut String, indent: usize, expr: &Expr) {
    match expr {
        Expr::Literal(value) => {
            push_line(out, indent, &format!("Literal: {}", render_value(value)));
        }
        Expr::Identifier(name) => {
            push_line(out, indent, &format!("Identifier: {name}"));
        }
        Expr::Binary { left, op, right } => {
            push_line(out, indent, &format!("BinaryOp: {op:?}"));
            render_expr(out, indent + 1, left);
            render_expr(out, indent + 1, right);
        }
        Expr::Call { name, args } => {
            push_line(out, indent, &format!("Call: {name}"));
            for arg in args {
                render_expr(out, indent + 1, arg);
            }
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Int(v) => v.to_string(),
        Value::Float(v) => v.to_string(),
        Value::Str(v) => format!("{v:?}"),
        Value::Bool(v) => v.to_string(),
    }
}

fn push_line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push_str("  ");
    }
    out.push_str(text);
    out.push('\n');
}
