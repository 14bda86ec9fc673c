//! Evaluate and print a few expressions.
//!
//! This example can be run with:
//! ```
//! RUST_LOG=arith_core=trace cargo run --package arith_core --example eval_demo
//! ```

use anyhow::{Context, Result};
use arith_core::syntax::{dump_expr, Expr};
use arith_core::{evaluate, evaluate_with, EvalConfig, OverflowMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let exprs = [
        Expr::sum(Expr::sum(1.into(), 2.into()), 4.into()),
        Expr::sum(1.into(), 2.into()),
        Expr::sum(1.into(), Expr::sum(2.into(), 4.into())),
    ];

    for expr in &exprs {
        let value = evaluate(expr).with_context(|| format!("evaluating {expr}"))?;
        println!("{expr} = {value}");
    }

    let big = (0..30).fold(Expr::literal(1_000_000), |acc, n| {
        Expr::sum(acc, Expr::literal(n * 10_000_000))
    });
    dump_expr(&big)?;

    println!("wrapping: {}", evaluate(&big)?);

    let checked = EvalConfig::default().with_overflow(OverflowMode::Checked);
    match evaluate_with(&checked, &big) {
        Ok(value) => println!("checked: {value}"),
        Err(err) => println!("checked: {err}"),
    }

    Ok(())
}
