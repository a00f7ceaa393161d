//! Expression evaluation implementation.

use crate::access::{Tuple, Value};
use crate::catalog::RowSchema;
use crate::expression::{
    Expression, ExpressionError, ExpressionKind, ExpressionResult, Operator, RowContext,
    TupleContext,
};
use std::cmp::Ordering;

/// Evaluator for expressions
pub struct ExpressionEvaluator<'a, C: RowContext + ?Sized> {
    /// Row context column accesses resolve through
    context: &'a C,
}

impl<'a, C: RowContext + ?Sized> ExpressionEvaluator<'a, C> {
    pub fn new(context: &'a C) -> Self {
        Self { context }
    }

    /// Evaluate an expression and return the result.
    ///
    /// Compound nodes always evaluate the left child, then the right child,
    /// before applying the operator. Logical operators do not short-circuit.
    pub fn evaluate(&self, expr: &Expression) -> ExpressionResult<Value> {
        match expr {
            Expression::Constant(value) => Ok(value.clone()),

            Expression::ColumnAccess(column) => self.context.column_value(column),

            Expression::Arithmetic { op, left, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                evaluate_arithmetic(*op, &left_val, &right_val)
            }

            Expression::Logical { op, left, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                evaluate_logical(*op, &left_val, &right_val)
            }

            Expression::Relational { op, left, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                evaluate_relational(*op, &left_val, &right_val)
            }
        }
    }
}

fn evaluate_arithmetic(op: Operator, left: &Value, right: &Value) -> ExpressionResult<Value> {
    let a = left.as_integer()?;
    let b = right.as_integer()?;

    match op {
        Operator::Add => Ok(Value::Integer(a.wrapping_add(b))),
        Operator::Sub => Ok(Value::Integer(a.wrapping_sub(b))),
        Operator::Mul => Ok(Value::Integer(a.wrapping_mul(b))),
        Operator::Div => {
            if b == 0 {
                Err(ExpressionError::DivisionByZero)
            } else {
                Ok(Value::Integer(a.wrapping_div(b)))
            }
        }
        _ => Err(ExpressionError::UnsupportedOperator {
            operator: op,
            kind: ExpressionKind::Arithmetic,
        }),
    }
}

fn evaluate_logical(op: Operator, left: &Value, right: &Value) -> ExpressionResult<Value> {
    let a = left.as_boolean()?;
    let b = right.as_boolean()?;

    match op {
        Operator::And => Ok(Value::Boolean(a && b)),
        Operator::Or => Ok(Value::Boolean(a || b)),
        _ => Err(ExpressionError::UnsupportedOperator {
            operator: op,
            kind: ExpressionKind::Logical,
        }),
    }
}

fn evaluate_relational(op: Operator, left: &Value, right: &Value) -> ExpressionResult<Value> {
    let accepts: fn(Ordering) -> bool = match op {
        Operator::Lt => Ordering::is_lt,
        Operator::Le => Ordering::is_le,
        Operator::Gt => Ordering::is_gt,
        Operator::Ge => Ordering::is_ge,
        Operator::Eq => Ordering::is_eq,
        Operator::Ne => Ordering::is_ne,
        _ => {
            return Err(ExpressionError::UnsupportedOperator {
                operator: op,
                kind: ExpressionKind::Relational,
            })
        }
    };

    Ok(Value::Boolean(accepts(compare_values(left, right)?)))
}

/// Compare two values under their common type.
///
/// NULL only pairs with integers (or another NULL), reading as 0 the same
/// way the integer accessor does.
fn compare_values(left: &Value, right: &Value) -> ExpressionResult<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Ok(a.as_bytes().cmp(b.as_bytes())),
        (Value::Boolean(a), Value::Boolean(b)) => Ok(a.cmp(b)),
        (Value::Null, Value::Integer(_) | Value::Null) | (Value::Integer(_), Value::Null) => {
            Ok(left.as_integer()?.cmp(&right.as_integer()?))
        }
        _ => Err(ExpressionError::incomparable(left, right)),
    }
}

impl Expression {
    /// Evaluate against any row context
    pub fn evaluate<C: RowContext + ?Sized>(&self, context: &C) -> ExpressionResult<Value> {
        ExpressionEvaluator::new(context).evaluate(self)
    }

    /// Evaluate as a row filter against a materialized tuple.
    ///
    /// The result must be boolean; anything else is a type mismatch.
    pub fn evaluate_predicate(&self, tuple: &Tuple, schema: &RowSchema) -> ExpressionResult<bool> {
        evaluate_expression(self, tuple, schema)?.as_boolean()
    }
}

/// Helper function to evaluate an expression against a tuple and its schema
pub fn evaluate_expression(
    expr: &Expression,
    tuple: &Tuple,
    schema: &RowSchema,
) -> ExpressionResult<Value> {
    expr.evaluate(&TupleContext::new(schema, tuple))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::DataType;
    use crate::catalog::{ColumnInfo, TableSchema};
    use crate::expression::EmptyContext;
    use rand::Rng;

    fn people_schema() -> RowSchema {
        RowSchema::for_table(&TableSchema::new(
            "people",
            vec![
                ColumnInfo::new("name", DataType::Text),
                ColumnInfo::new("age", DataType::Integer),
                ColumnInfo::new("active", DataType::Boolean),
            ],
        ))
    }

    fn person(name: &str, age: i64, active: bool) -> Tuple {
        Tuple::new(vec![
            Value::Text(name.to_string()),
            Value::Integer(age),
            Value::Boolean(active),
        ])
    }

    #[test]
    fn test_constant_evaluation_is_identity() {
        let constants = [
            Value::Integer(42),
            Value::Text("hello".to_string()),
            Value::Boolean(true),
            Value::Null,
        ];

        let schema = people_schema();
        let tuple = person("ann", 30, true);
        for value in constants {
            let expr = Expression::Constant(value.clone());
            assert_eq!(expr.evaluate(&EmptyContext), Ok(value.clone()));
            assert_eq!(evaluate_expression(&expr, &tuple, &schema), Ok(value));
        }
    }

    #[test]
    fn test_column_access() {
        let schema = people_schema();
        let tuple = person("bob", 41, false);

        assert_eq!(
            evaluate_expression(&Expression::column("age"), &tuple, &schema),
            Ok(Value::Integer(41))
        );
        assert_eq!(
            evaluate_expression(&Expression::qualified("people", "name"), &tuple, &schema),
            Ok(Value::Text("bob".to_string()))
        );
        assert!(matches!(
            evaluate_expression(&Expression::column("email"), &tuple, &schema),
            Err(ExpressionError::UnboundColumn { .. })
        ));
        assert!(matches!(
            Expression::column("age").evaluate(&EmptyContext),
            Err(ExpressionError::UnboundColumn { .. })
        ));
    }

    #[test]
    fn test_arithmetic_operations() {
        let eval = |expr: Expression| expr.evaluate(&EmptyContext);

        assert_eq!(
            eval(Expression::add(Expression::integer(10), Expression::integer(5))),
            Ok(Value::Integer(15))
        );
        assert_eq!(
            eval(Expression::sub(Expression::integer(10), Expression::integer(15))),
            Ok(Value::Integer(-5))
        );
        assert_eq!(
            eval(Expression::mul(Expression::integer(4), Expression::integer(3))),
            Ok(Value::Integer(12))
        );
        assert_eq!(
            eval(Expression::div(Expression::integer(10), Expression::integer(3))),
            Ok(Value::Integer(3))
        );

        // NULL reads as zero
        assert_eq!(
            eval(Expression::add(Expression::null(), Expression::integer(7))),
            Ok(Value::Integer(7))
        );

        // Wrapping instead of panicking
        assert_eq!(
            eval(Expression::add(
                Expression::integer(i64::MAX),
                Expression::integer(1)
            )),
            Ok(Value::Integer(i64::MIN))
        );
    }

    #[test]
    fn test_division_by_zero() {
        let expr = Expression::div(Expression::integer(10), Expression::integer(0));
        assert_eq!(
            expr.evaluate(&EmptyContext),
            Err(ExpressionError::DivisionByZero)
        );

        let expr = Expression::div(Expression::integer(10), Expression::null());
        assert_eq!(
            expr.evaluate(&EmptyContext),
            Err(ExpressionError::DivisionByZero)
        );
    }

    #[test]
    fn test_arithmetic_type_mismatch() {
        let expr = Expression::add(Expression::integer(10), Expression::text("5"));
        assert!(matches!(
            expr.evaluate(&EmptyContext),
            Err(ExpressionError::TypeMismatch { .. })
        ));

        let expr = Expression::mul(Expression::boolean(true), Expression::integer(2));
        assert!(matches!(
            expr.evaluate(&EmptyContext),
            Err(ExpressionError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_unsupported_operators() {
        let expr = Expression::arithmetic(Operator::Lt, Expression::integer(1), Expression::integer(2));
        assert_eq!(
            expr.evaluate(&EmptyContext),
            Err(ExpressionError::UnsupportedOperator {
                operator: Operator::Lt,
                kind: ExpressionKind::Arithmetic,
            })
        );

        let expr = Expression::logical(
            Operator::Add,
            Expression::boolean(true),
            Expression::boolean(false),
        );
        assert_eq!(
            expr.evaluate(&EmptyContext),
            Err(ExpressionError::UnsupportedOperator {
                operator: Operator::Add,
                kind: ExpressionKind::Logical,
            })
        );

        let expr = Expression::relational(Operator::Or, Expression::integer(1), Expression::integer(1));
        assert_eq!(
            expr.evaluate(&EmptyContext),
            Err(ExpressionError::UnsupportedOperator {
                operator: Operator::Or,
                kind: ExpressionKind::Relational,
            })
        );
    }

    #[test]
    fn test_comparison_operations() {
        let cmp = |op: Operator, left: Expression, right: Expression| {
            Expression::relational(op, left, right).evaluate(&EmptyContext)
        };

        assert_eq!(
            cmp(Operator::Eq, Expression::integer(5), Expression::integer(5)),
            Ok(Value::Boolean(true))
        );
        assert_eq!(
            cmp(Operator::Ne, Expression::integer(5), Expression::integer(3)),
            Ok(Value::Boolean(true))
        );
        assert_eq!(
            cmp(Operator::Le, Expression::integer(5), Expression::integer(5)),
            Ok(Value::Boolean(true))
        );
        assert_eq!(
            cmp(Operator::Gt, Expression::integer(3), Expression::integer(5)),
            Ok(Value::Boolean(false))
        );

        // Text compares byte-wise
        assert_eq!(
            cmp(Operator::Lt, Expression::text("abc"), Expression::text("abd")),
            Ok(Value::Boolean(true))
        );
        assert_eq!(
            cmp(Operator::Lt, Expression::text("Z"), Expression::text("a")),
            Ok(Value::Boolean(true))
        );

        // Booleans compare by ordinal
        assert_eq!(
            cmp(Operator::Lt, Expression::boolean(false), Expression::boolean(true)),
            Ok(Value::Boolean(true))
        );

        // NULL pairs with integers as 0
        assert_eq!(
            cmp(Operator::Eq, Expression::null(), Expression::integer(0)),
            Ok(Value::Boolean(true))
        );
        assert_eq!(
            cmp(Operator::Eq, Expression::null(), Expression::null()),
            Ok(Value::Boolean(true))
        );
    }

    #[test]
    fn test_comparison_type_mismatch() {
        let expr = Expression::eq(Expression::integer(1), Expression::text("1"));
        assert!(matches!(
            expr.evaluate(&EmptyContext),
            Err(ExpressionError::TypeMismatch { .. })
        ));

        let expr = Expression::lt(Expression::boolean(true), Expression::integer(1));
        assert!(matches!(
            expr.evaluate(&EmptyContext),
            Err(ExpressionError::TypeMismatch { .. })
        ));

        let expr = Expression::eq(Expression::null(), Expression::text("x"));
        assert!(matches!(
            expr.evaluate(&EmptyContext),
            Err(ExpressionError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_integer_comparison_trichotomy() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let a: i64 = rng.gen_range(-50..50);
            let b: i64 = rng.gen_range(-50..50);

            let holds = [Operator::Lt, Operator::Eq, Operator::Gt]
                .into_iter()
                .filter(|op| {
                    Expression::relational(*op, Expression::integer(a), Expression::integer(b))
                        .evaluate(&EmptyContext)
                        == Ok(Value::Boolean(true))
                })
                .count();
            assert_eq!(holds, 1, "a={} b={}", a, b);
        }
    }

    #[test]
    fn test_text_and_boolean_trichotomy() {
        let texts = ["", "a", "ab", "b", "B"];
        for a in texts {
            for b in texts {
                let holds = [Operator::Lt, Operator::Eq, Operator::Gt]
                    .into_iter()
                    .filter(|op| {
                        Expression::relational(*op, Expression::text(a), Expression::text(b))
                            .evaluate(&EmptyContext)
                            == Ok(Value::Boolean(true))
                    })
                    .count();
                assert_eq!(holds, 1);
            }
        }

        for a in [false, true] {
            for b in [false, true] {
                let holds = [Operator::Lt, Operator::Eq, Operator::Gt]
                    .into_iter()
                    .filter(|op| {
                        Expression::relational(*op, Expression::boolean(a), Expression::boolean(b))
                            .evaluate(&EmptyContext)
                            == Ok(Value::Boolean(true))
                    })
                    .count();
                assert_eq!(holds, 1);
            }
        }
    }

    #[test]
    fn test_logical_operations() {
        let eval = |expr: Expression| expr.evaluate(&EmptyContext);

        assert_eq!(
            eval(Expression::and(Expression::boolean(true), Expression::boolean(false))),
            Ok(Value::Boolean(false))
        );
        assert_eq!(
            eval(Expression::or(Expression::boolean(false), Expression::boolean(true))),
            Ok(Value::Boolean(true))
        );

        // No short-circuit: the right side is still evaluated and can fail
        let expr = Expression::and(
            Expression::boolean(false),
            Expression::gt(
                Expression::div(Expression::integer(1), Expression::integer(0)),
                Expression::integer(0),
            ),
        );
        assert_eq!(eval(expr), Err(ExpressionError::DivisionByZero));

        let expr = Expression::or(Expression::boolean(true), Expression::integer(1));
        assert!(matches!(eval(expr), Err(ExpressionError::TypeMismatch { .. })));
    }

    #[test]
    fn test_age_range_predicate() {
        let schema = people_schema();
        let expr = Expression::and(
            Expression::gt(Expression::column("age"), Expression::integer(18)),
            Expression::lt(Expression::column("age"), Expression::integer(65)),
        );

        assert_eq!(
            expr.evaluate_predicate(&person("ann", 30, true), &schema),
            Ok(true)
        );
        assert_eq!(
            expr.evaluate_predicate(&person("ann", 70, true), &schema),
            Ok(false)
        );
    }

    #[test]
    fn test_predicate_requires_boolean() {
        let schema = people_schema();
        let tuple = person("ann", 30, true);

        assert_eq!(
            Expression::column("active").evaluate_predicate(&tuple, &schema),
            Ok(true)
        );
        assert!(matches!(
            Expression::column("age").evaluate_predicate(&tuple, &schema),
            Err(ExpressionError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let schema = people_schema();
        let tuple = person("carl", 12, true);
        let expr = Expression::or(
            Expression::eq(
                Expression::mul(Expression::column("age"), Expression::integer(2)),
                Expression::integer(24),
            ),
            Expression::eq(Expression::column("name"), Expression::text("dora")),
        );

        let first = evaluate_expression(&expr, &tuple, &schema);
        for _ in 0..10 {
            assert_eq!(evaluate_expression(&expr, &tuple, &schema), first);
        }
        assert_eq!(first, Ok(Value::Boolean(true)));
    }

    #[test]
    fn test_shared_tree_across_threads() {
        let schema = people_schema();
        let expr = Expression::gt(Expression::column("age"), Expression::integer(18));

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let expr = &expr;
                    let schema = &schema;
                    scope.spawn(move || {
                        let tuple = person("t", 10 + i * 5, true);
                        expr.evaluate_predicate(&tuple, schema)
                    })
                })
                .collect();

            let results: Vec<_> = handles
                .into_iter()
                .map(|handle| handle.join().expect("evaluation thread panicked"))
                .collect();
            assert_eq!(results, vec![Ok(false), Ok(false), Ok(true), Ok(true)]);
        });
    }
}
