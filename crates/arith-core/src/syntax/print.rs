use crate::syntax::{Expr, Literal, Sum};
use arith_support::pp::{self, lhs_prec, print_lhs, print_rhs, rhs_prec, State, TermPrec, PP, PPTerm};
use elegance::{Printer, Render};
use std::fmt;
use std::io;

/// Sums are left associative: a sum on the left of `+` prints bare, a sum on
/// the right is parenthesized.
const SUM_PREC: TermPrec = (Some(1), Some(2));

/// Print an expression to stdout.
///
/// # Errors
///
/// Returns any error from writing to stdout.
pub fn dump_expr(expr: &Expr) -> io::Result<()> {
    pp::dump(expr)
}

#[must_use]
pub fn print_expr_to_string(expr: &Expr) -> String {
    pp::dump_to_str(expr)
}

impl PP for Expr {
    fn print<R: Render>(&self, st: State, p: &mut Printer<R>) -> Result<(), R::Error> {
        match self {
            Expr::Literal(lit) => lit.print(st, p),
            Expr::Sum(sum) => sum.print(st, p),
        }
    }
}

impl PP for Literal {
    fn print<R: Render>(&self, _st: State, p: &mut Printer<R>) -> Result<(), R::Error> {
        p.text_owned(self.value.to_string())
    }
}

impl PPTerm for Sum {
    const PREC: TermPrec = SUM_PREC;

    fn print_content<R: Render>(&self, st: State, p: &mut Printer<R>) -> Result<(), R::Error> {
        p.cgroup(0, |p| {
            print_lhs(st, p, &*self.left, lhs_prec(SUM_PREC))?;
            p.text(" +")?;
            p.space()?;
            print_rhs(st, p, &*self.right, rhs_prec(SUM_PREC))
        })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_expr_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn sum(left: Expr, right: Expr) -> Expr {
        Expr::sum(left, right)
    }

    fn lit(value: i32) -> Expr {
        Expr::literal(value)
    }

    #[test]
    fn test_print_literal() {
        assert_snapshot!(print_expr_to_string(&lit(42)), @"42");
        assert_snapshot!(print_expr_to_string(&lit(-7)), @"-7");
    }

    #[test]
    fn test_print_sum() {
        assert_snapshot!(print_expr_to_string(&sum(lit(1), lit(2))), @"1 + 2");
    }

    #[test]
    fn test_print_left_nested_sum() {
        assert_snapshot!(
            print_expr_to_string(&sum(sum(lit(1), lit(2)), lit(4))),
            @"1 + 2 + 4"
        );
    }

    #[test]
    fn test_print_right_nested_sum() {
        assert_snapshot!(
            print_expr_to_string(&sum(lit(1), sum(lit(2), lit(4)))),
            @"1 + (2 + 4)"
        );
        assert_snapshot!(
            print_expr_to_string(&sum(sum(lit(1), lit(2)), sum(lit(3), lit(4)))),
            @"1 + 2 + (3 + 4)"
        );
    }

    #[test]
    fn test_print_negative_operands() {
        assert_snapshot!(print_expr_to_string(&sum(lit(-1), lit(-2))), @"-1 + -2");
    }

    #[test]
    fn test_display_matches_printer() {
        let expr = sum(sum(lit(1), lit(2)), lit(4));
        assert_eq!(expr.to_string(), print_expr_to_string(&expr));
    }

    #[test]
    fn test_dump_to_writer() {
        let mut out = Vec::new();
        pp::dump_to(&mut out, &sum(lit(1), sum(lit(2), lit(4)))).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim_end(), "1 + (2 + 4)");
    }

    #[test]
    fn test_long_sum_breaks_lines() {
        let expr = (2..40).fold(lit(1), |acc, n| sum(acc, lit(n)));
        let flat = pp::dump_to_str_width(&expr, 1000);
        assert!(!flat.contains('\n'));

        let narrow = pp::dump_to_str_width(&expr, 20);
        assert!(narrow.lines().count() > 1);

        let words = |s: &str| s.split_whitespace().map(str::to_owned).collect::<Vec<_>>();
        assert_eq!(words(&narrow), words(&flat));
    }
}
