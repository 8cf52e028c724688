//! Tree-walking interpreter for parsed expressions.
//!
//! Names resolve against the current call's parameters first and the line's
//! [`Bindings`] second. Nothing else is reachable: there is no global
//! environment behind the table.

mod access;
mod call;

use rustc_hash::FxHashMap;
use tally_ir::{BinaryOp, Expr, ObjectMap, Value};
use tally_parse::parse_expression;
use tally_stack::{ensure_sufficient_stack, CallDepth};

use crate::bindings::Bindings;
use crate::errors::{undefined_variable, EvalError, EvalResult};
use crate::operators::{evaluate_binary, evaluate_unary};

/// Parameter bindings of the user-function call being evaluated.
pub(crate) type Locals = FxHashMap<String, Value>;

/// Evaluates expressions for one document line.
pub struct Interpreter<'b> {
    bindings: &'b Bindings,
    depth: CallDepth,
}

impl<'b> Interpreter<'b> {
    /// Interpreter over `bindings` allowing `max_call_depth` nested user calls.
    pub fn new(bindings: &'b Bindings, max_call_depth: usize) -> Self {
        Interpreter {
            bindings,
            depth: CallDepth::new(max_call_depth),
        }
    }

    /// Parse and evaluate expression text at the top level of a line.
    pub fn eval_text(&mut self, text: &str) -> EvalResult {
        let expr = parse_expression(text)?;
        self.eval(&expr, &Locals::default())
    }

    /// Evaluate an expression.
    pub(crate) fn eval(&mut self, expr: &Expr, locals: &Locals) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, locals))
    }

    fn eval_inner(&mut self, expr: &Expr, locals: &Locals) -> EvalResult {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::String(s) => Ok(Value::string(s.as_str())),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Null => Ok(Value::Null),
            Expr::Undefined => Ok(Value::Undefined),
            Expr::Ident(name) => self.lookup(name, locals),
            Expr::Array(items) => {
                let values = self.eval_all(items, locals)?;
                Ok(Value::array(values))
            }
            Expr::Object(entries) => {
                let mut map = ObjectMap::with_capacity(entries.len());
                for (key, value_expr) in entries {
                    let value = self.eval(value_expr, locals)?;
                    map.insert(key.clone(), value);
                }
                Ok(Value::object(map))
            }
            Expr::Unary { op, operand } => {
                let value = self.eval(operand, locals)?;
                evaluate_unary(&value, *op)
            }
            Expr::Binary { op, left, right } => self.eval_binary(*op, left, right, locals),
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval(condition, locals)?.is_truthy() {
                    self.eval(then_branch, locals)
                } else {
                    self.eval(else_branch, locals)
                }
            }
            Expr::Member { object, property } => {
                let receiver = self.eval(object, locals)?;
                access::member(&receiver, property)
            }
            Expr::Index { object, index } => {
                let receiver = self.eval(object, locals)?;
                let key = self.eval(index, locals)?;
                access::index(&receiver, &key)
            }
            Expr::Call { callee, args } => self.eval_call(callee, args, locals),
        }
    }

    fn lookup(&self, name: &str, locals: &Locals) -> EvalResult {
        locals
            .get(name)
            .or_else(|| self.bindings.get(name))
            .cloned()
            .ok_or_else(|| undefined_variable(name))
    }

    fn eval_binary(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        locals: &Locals,
    ) -> EvalResult {
        let left = self.eval(left, locals)?;
        match op {
            BinaryOp::And if !left.is_truthy() => Ok(left),
            BinaryOp::Or if left.is_truthy() => Ok(left),
            BinaryOp::And | BinaryOp::Or => self.eval(right, locals),
            _ => {
                let right = self.eval(right, locals)?;
                evaluate_binary(&left, &right, op)
            }
        }
    }

    fn eval_all(&mut self, exprs: &[Expr], locals: &Locals) -> Result<Vec<Value>, EvalError> {
        exprs.iter().map(|expr| self.eval(expr, locals)).collect()
    }
}

#[cfg(test)]
mod tests;
