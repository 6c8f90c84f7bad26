use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// Each stack frame remembers how many children of its node have been traversed so far, so a
/// subtree that is shared (the same [`Arc`](std::sync::Arc) appearing under several parents) is
/// yielded once per occurrence.
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<(&'a Expr, usize)>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![(expr, 0)],
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, visited) = self.stack.last_mut()?;
            let expr = *expr;

            let child = match expr {
                Expr::Constant(_) | Expr::Variable(_) => None,
                Expr::Add(lhs, rhs)
                | Expr::Sub(lhs, rhs)
                | Expr::Mul(lhs, rhs)
                | Expr::Div(lhs, rhs) => match visited {
                    0 => Some(&**lhs),
                    1 => Some(&**rhs),
                    _ => None,
                },
                Expr::Sin(operand)
                | Expr::Cos(operand)
                | Expr::Exp(operand)
                | Expr::Log(operand) => match visited {
                    0 => Some(&**operand),
                    _ => None,
                },
            };

            match child {
                Some(child) => {
                    *visited += 1;
                    self.stack.push((child, 0));
                },
                None => {
                    self.stack.pop();
                    return Some(expr);
                },
            }
        }
    }
}
