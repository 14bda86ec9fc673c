use crate::config::{EvalConfig, OverflowMode};
use crate::error::{Error, Result};
use crate::syntax::{Expr, Literal, Sum};

/// Ambient evaluation state.
struct State<'a> {
    config: &'a EvalConfig,
    /// Number of nodes between the root and the node being evaluated.
    depth: usize,
    /// Number of nodes visited so far.
    nodes: usize,
}

impl<'a> State<'a> {
    fn new(config: &'a EvalConfig) -> State<'a> {
        State {
            config,
            depth: 0,
            nodes: 0,
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.config.max_depth {
            return Err(Error::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        self.depth += 1;
        self.nodes += 1;
        Ok(())
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }
}

/// Evaluate an expression with the default configuration.
///
/// # Errors
///
/// Fails with [`Error::DepthLimitExceeded`] if the tree is nested deeper than
/// the default limit.
pub fn evaluate(expr: &Expr) -> Result<i32> {
    evaluate_with(&EvalConfig::default(), expr)
}

/// Evaluate an expression to its integer value.
///
/// # Errors
///
/// Fails with [`Error::DepthLimitExceeded`] if the tree is nested deeper than
/// `config.max_depth`, and with [`Error::Overflow`] if a sum leaves the `i32`
/// range under [`OverflowMode::Checked`].
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(max_depth = config.max_depth, overflow = ?config.overflow)
)]
pub fn evaluate_with(config: &EvalConfig, expr: &Expr) -> Result<i32> {
    let mut st = State::new(config);
    let result = eval(&mut st, expr);
    match &result {
        Ok(value) => tracing::debug!(value, nodes = st.nodes, "evaluated"),
        Err(err) => tracing::debug!(%err, nodes = st.nodes, "evaluation failed"),
    }
    result
}

fn eval(st: &mut State<'_>, expr: &Expr) -> Result<i32> {
    st.enter()?;
    let result = match expr {
        Expr::Literal(lit) => Ok(eval_literal(lit)),
        Expr::Sum(sum) => eval_sum(st, sum),
    };
    st.exit();
    result
}

fn eval_literal(lit: &Literal) -> i32 {
    tracing::trace!(value = lit.value, "literal");
    lit.value
}

fn eval_sum(st: &mut State<'_>, sum: &Sum) -> Result<i32> {
    // The right operand is evaluated before the left.
    let right = eval(st, &sum.right)?;
    let left = eval(st, &sum.left)?;
    add(st.config.overflow, left, right)
}

fn add(mode: OverflowMode, left: i32, right: i32) -> Result<i32> {
    let value = match mode {
        OverflowMode::Checked => left
            .checked_add(right)
            .ok_or(Error::Overflow { left, right })?,
        OverflowMode::Wrapping => left.wrapping_add(right),
    };
    tracing::trace!(left, right, value, "sum");
    Ok(value)
}
