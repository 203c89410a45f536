use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negates a value, built as `a * -1`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

#[cfg(test)]
mod tests {
    use super::neg_op;
    use crate::value::Value;

    #[test]
    fn test_neg_forward_and_backward() {
        let a = Value::new(2.5);
        let b = neg_op(&a);
        assert_eq!(b.data(), -2.5);
        b.backward();
        assert_eq!(a.grad(), -1.0);
    }

    #[test]
    fn test_neg_operator() {
        let a = Value::new(-3.0);
        let b = -&a;
        assert_eq!(b.data(), 3.0);
        let c = -b;
        assert_eq!(c.data(), -3.0);
    }
}
