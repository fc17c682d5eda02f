use std::fmt::Display;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
    pub fn holds<L: PartialOrd<R> + ?Sized, R: ?Sized>(&self, lhs: &L, rhs: &R) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    #[error("Check Failed: {expression}")]
    Condition { expression: String },
    // trailing space separates any appended detail
    #[error("Check Failed: {lhs} {op} {rhs} ")]
    Binary {
        lhs: String,
        op: BinaryOp,
        rhs: String,
    },
}

impl CheckFailure {
    fn binary(op: BinaryOp, lhs_label: &str, rhs_label: &str) -> Self {
        Self::Binary {
            lhs: lhs_label.to_owned(),
            op,
            rhs: rhs_label.to_owned(),
        }
    }
}

pub fn ensure(condition: bool, expression: &str) -> Result<(), CheckFailure> {
    if condition {
        Ok(())
    } else {
        Err(CheckFailure::Condition {
            expression: expression.to_owned(),
        })
    }
}

pub fn ensure_eq<L: PartialEq<R> + ?Sized, R: ?Sized>(
    lhs: &L,
    rhs: &R,
    lhs_label: &str,
    rhs_label: &str,
) -> Result<(), CheckFailure> {
    if lhs == rhs {
        Ok(())
    } else {
        Err(CheckFailure::binary(BinaryOp::Eq, lhs_label, rhs_label))
    }
}

pub fn ensure_ne<L: PartialEq<R> + ?Sized, R: ?Sized>(
    lhs: &L,
    rhs: &R,
    lhs_label: &str,
    rhs_label: &str,
) -> Result<(), CheckFailure> {
    if lhs != rhs {
        Ok(())
    } else {
        Err(CheckFailure::binary(BinaryOp::Ne, lhs_label, rhs_label))
    }
}

pub fn ensure_op<L: PartialOrd<R> + ?Sized, R: ?Sized>(
    op: BinaryOp,
    lhs: &L,
    rhs: &R,
    lhs_label: &str,
    rhs_label: &str,
) -> Result<(), CheckFailure> {
    if op.holds(lhs, rhs) {
        Ok(())
    } else {
        Err(CheckFailure::binary(op, lhs_label, rhs_label))
    }
}

pub fn ensure_lt<L: PartialOrd<R> + ?Sized, R: ?Sized>(
    lhs: &L,
    rhs: &R,
    lhs_label: &str,
    rhs_label: &str,
) -> Result<(), CheckFailure> {
    ensure_op(BinaryOp::Lt, lhs, rhs, lhs_label, rhs_label)
}

pub fn ensure_le<L: PartialOrd<R> + ?Sized, R: ?Sized>(
    lhs: &L,
    rhs: &R,
    lhs_label: &str,
    rhs_label: &str,
) -> Result<(), CheckFailure> {
    ensure_op(BinaryOp::Le, lhs, rhs, lhs_label, rhs_label)
}

pub fn ensure_gt<L: PartialOrd<R> + ?Sized, R: ?Sized>(
    lhs: &L,
    rhs: &R,
    lhs_label: &str,
    rhs_label: &str,
) -> Result<(), CheckFailure> {
    ensure_op(BinaryOp::Gt, lhs, rhs, lhs_label, rhs_label)
}

pub fn ensure_ge<L: PartialOrd<R> + ?Sized, R: ?Sized>(
    lhs: &L,
    rhs: &R,
    lhs_label: &str,
    rhs_label: &str,
) -> Result<(), CheckFailure> {
    ensure_op(BinaryOp::Ge, lhs, rhs, lhs_label, rhs_label)
}
