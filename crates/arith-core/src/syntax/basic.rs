use derive_new::new;
use std::mem;

pub type BoxExpr = Box<Expr>;

/// An integer expression. Every node exclusively owns its children, so a
/// tree is never shared or cyclic.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    Literal(Literal),
    Sum(Sum),
}

impl Expr {
    #[must_use]
    pub fn literal(value: i32) -> Expr {
        Expr::Literal(Literal::new(value))
    }

    #[must_use]
    pub fn sum(left: Expr, right: Expr) -> Expr {
        Expr::Sum(Sum::new(Box::new(left), Box::new(right)))
    }

    /// The number of nodes in the tree.
    #[must_use]
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            size += 1;
            if let Expr::Sum(sum) = expr {
                stack.push(&*sum.left);
                stack.push(&*sum.right);
            }
        }
        size
    }

    /// The number of nodes on the longest path from this node to a leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, level)) = stack.pop() {
            depth = depth.max(level);
            if let Expr::Sum(sum) = expr {
                stack.push((&*sum.left, level + 1));
                stack.push((&*sum.right, level + 1));
            }
        }
        depth
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::literal(value)
    }
}

/// An integer constant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new)]
pub struct Literal {
    pub value: i32,
}

/// The sum of two subexpressions.
#[derive(Clone, PartialEq, Eq, Hash, Debug, new)]
pub struct Sum {
    pub left: BoxExpr,
    pub right: BoxExpr,
}

/// Tear the tree down with an explicit stack, so dropping a deep tree does not
/// recurse once per level.
impl Drop for Sum {
    fn drop(&mut self) {
        let is_leaf = |e: &Expr| matches!(e, Expr::Literal(_));
        if is_leaf(&*self.left) && is_leaf(&*self.right) {
            return;
        }
        let mut stack = vec![take(&mut self.left), take(&mut self.right)];
        while let Some(mut expr) = stack.pop() {
            if let Expr::Sum(sum) = &mut expr {
                stack.push(take(&mut sum.left));
                stack.push(take(&mut sum.right));
            }
        }
    }
}

fn take(expr: &mut BoxExpr) -> Expr {
    mem::replace(&mut **expr, Expr::literal(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `1 + (1 + (1 + ...))` with `n` literals.
    fn right_chain(n: usize) -> Expr {
        (1..n).fold(Expr::literal(1), |acc, _| Expr::sum(Expr::literal(1), acc))
    }

    #[test]
    fn test_literal_equality() {
        assert_eq!(Expr::literal(42), Expr::literal(42));
        assert_ne!(Expr::literal(42), Expr::literal(99));
        assert_eq!(Expr::from(7), Expr::Literal(Literal::new(7)));
    }

    #[test]
    fn test_sum_equality_is_structural() {
        let a = Expr::sum(Expr::literal(1), Expr::literal(2));
        let b = Expr::sum(1.into(), 2.into());
        let c = Expr::sum(Expr::literal(2), Expr::literal(1));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_size_and_depth() {
        let lit = Expr::literal(3);
        assert_eq!(lit.size(), 1);
        assert_eq!(lit.depth(), 1);

        // (1 + 2) + 4
        let expr = Expr::sum(Expr::sum(1.into(), 2.into()), 4.into());
        assert_eq!(expr.size(), 5);
        assert_eq!(expr.depth(), 3);

        // 1 + ((2 + 3) + 4)
        let expr = Expr::sum(1.into(), Expr::sum(Expr::sum(2.into(), 3.into()), 4.into()));
        assert_eq!(expr.size(), 7);
        assert_eq!(expr.depth(), 4);
    }

    #[test]
    fn test_deep_tree_on_small_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let expr = right_chain(200_000);
                (expr.size(), expr.depth())
            })
            .unwrap();
        assert_eq!(handle.join().unwrap(), (399_999, 200_000));
    }

    #[test]
    fn test_expr_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expr>();
    }
}
