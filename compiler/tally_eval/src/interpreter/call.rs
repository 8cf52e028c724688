//! Function call evaluation.

use tally_ir::{Expr, FunctionValue, UserFunction, Value};
use tally_parse::parse_expression;

use super::{Interpreter, Locals};
use crate::errors::{not_callable, EvalError, EvalResult};

impl Interpreter<'_> {
    /// Evaluate `callee(args...)`. Arguments are evaluated left to right
    /// before the callee is checked for callability.
    pub(super) fn eval_call(&mut self, callee: &Expr, args: &[Expr], locals: &Locals) -> EvalResult {
        let target = self.eval(callee, locals)?;
        let args = self.eval_all(args, locals)?;
        match target {
            Value::Function(func) => self.call_function(&func, &args),
            _ => Err(not_callable(describe_callee(callee))),
        }
    }

    fn call_function(&mut self, func: &FunctionValue, args: &[Value]) -> EvalResult {
        match func {
            FunctionValue::Builtin { func, .. } => Ok(func(args)),
            FunctionValue::User(user) => self.call_user(user, args),
        }
    }

    /// Call a user function: parse its body, bind parameters positionally
    /// over the line's bindings, evaluate.
    ///
    /// Missing arguments are `undefined`; extra arguments are ignored. The
    /// caller's own parameters are not visible inside the body.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = %func.name, depth = self.depth.depth())
    )]
    fn call_user(&mut self, func: &UserFunction, args: &[Value]) -> EvalResult {
        let body = parse_expression(&func.body_text)
            .map_err(|err| EvalError::from(err).in_function(&func.name))?;

        let mut params = Locals::default();
        for (i, name) in func.parameter_names.iter().enumerate() {
            let value = args.get(i).cloned().unwrap_or(Value::Undefined);
            params.insert(name.clone(), value);
        }

        self.depth
            .enter()
            .map_err(|err| EvalError::from(err).in_function(&func.name))?;
        let result = self.eval(&body, &params);
        self.depth.exit();

        result.map_err(|err| err.in_function(&func.name))
    }
}

/// Source-level name of a callee for error messages.
fn describe_callee(callee: &Expr) -> String {
    match callee {
        Expr::Ident(name) => name.clone(),
        Expr::Member { object, property } => {
            format!("{}.{property}", describe_callee(object))
        }
        Expr::Index { object, .. } => format!("{}[...]", describe_callee(object)),
        Expr::Call { callee, .. } => format!("{}(...)", describe_callee(callee)),
        _ => "expression".to_string(),
    }
}
