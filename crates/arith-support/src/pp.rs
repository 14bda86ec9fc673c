use elegance::{Io, Printer, Render};
use std::io;

pub type Prec = Option<usize>;
pub type TermPrec = (Option<usize>, Option<usize>);

pub const COLUMNS: usize = 80;

#[must_use]
pub fn lhs_prec((lhs, _): TermPrec) -> Prec {
    lhs
}

#[must_use]
pub fn rhs_prec((_, rhs): TermPrec) -> Prec {
    rhs
}

#[derive(Clone, Copy, Debug, Default)]
pub struct State {
    /// The precedence of the term on the left-hand-side, if any.
    lhs_prec: Prec,
    /// The precedence of the term on the right-hand-side, if any.
    rhs_prec: Prec,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the LHS and RHS precedence.
    #[must_use]
    pub fn reset_prec(&self) -> Self {
        Self {
            lhs_prec: None,
            rhs_prec: None,
        }
    }

    #[must_use]
    pub fn set_lhs_prec(&self, lhs_prec: Prec) -> Self {
        Self { lhs_prec, ..*self }
    }

    #[must_use]
    pub fn set_rhs_prec(&self, rhs_prec: Prec) -> Self {
        Self { rhs_prec, ..*self }
    }

    /// True if a term with precedence `prec` must be parenthesized to keep its
    /// neighbours from binding to its operands.
    fn needs_parens(&self, (lhs_prec, rhs_prec): TermPrec) -> bool {
        binds_at_least(self.lhs_prec, lhs_prec) || binds_at_least(self.rhs_prec, rhs_prec)
    }
}

pub trait PP {
    fn print<R: Render>(&self, st: State, p: &mut Printer<R>) -> Result<(), R::Error>;
}

/// A term which participates in operator precedence. The term is wrapped in
/// parentheses whenever its neighbours bind at least as tightly.
pub trait PPTerm {
    const PREC: TermPrec;

    fn print_content<R: Render>(&self, st: State, p: &mut Printer<R>) -> Result<(), R::Error>;
}

impl<T: PPTerm> PP for T {
    fn print<R: Render>(&self, st: State, p: &mut Printer<R>) -> Result<(), R::Error> {
        if st.needs_parens(T::PREC) {
            p.cgroup(1, |p| {
                p.text("(")?;
                self.print_content(st.reset_prec(), p)?;
                p.text(")")
            })
        } else {
            self.print_content(st, p)
        }
    }
}

fn binds_at_least(ambient: Prec, current: Prec) -> bool {
    matches!((ambient, current), (Some(ambient), Some(current)) if ambient >= current)
}

/// Print the operand to the left of an operator whose left binding power is
/// `ambient_rhs_prec`.
pub fn print_lhs<R, T>(
    st: State,
    p: &mut Printer<R>,
    x: &T,
    ambient_rhs_prec: Prec,
) -> Result<(), R::Error>
where
    R: Render,
    T: PP,
{
    let st = st.set_rhs_prec(ambient_rhs_prec);
    x.print(st, p)
}

/// Print the operand to the right of an operator whose right binding power is
/// `ambient_lhs_prec`.
pub fn print_rhs<R, T>(
    st: State,
    p: &mut Printer<R>,
    x: &T,
    ambient_lhs_prec: Prec,
) -> Result<(), R::Error>
where
    R: Render,
    T: PP,
{
    let st = st.set_lhs_prec(ambient_lhs_prec);
    x.print(st, p)
}

/// Print `x` to stdout, followed by a newline.
///
/// # Errors
///
/// Returns any error from writing to stdout.
pub fn dump<T: PP>(x: &T) -> io::Result<()> {
    dump_to(io::stdout(), x)
}

/// Print `x` to `out`, followed by a newline.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn dump_to<W: io::Write, T: PP>(out: W, x: &T) -> io::Result<()> {
    let mut p = Printer::new(Io(out), COLUMNS);
    x.print(State::new(), &mut p)?;
    p.hard_break()?;
    p.finish()?;
    Ok(())
}

#[must_use]
pub fn dump_to_str<T: PP>(x: &T) -> String {
    dump_to_str_width(x, COLUMNS)
}

#[must_use]
pub fn dump_to_str_width<T: PP>(x: &T, columns: usize) -> String {
    let mut p = Printer::new(String::new(), columns);
    let st = State::new();
    let _ = x.print(st, &mut p);
    p.finish().unwrap_or_default()
}
