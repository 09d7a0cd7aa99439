use crate::value::{Value, ValueMap};

///
/// DeepCopy
///
/// Structural duplication producing a fully independent object graph: scalars
/// by value, records field by field, containers rebuilt element-wise. The
/// copyable shapes are all owned data, so a cyclic graph cannot be formed
/// and recursion always terminates.
///

pub trait DeepCopy {
    #[must_use]
    fn deep_copy(&self) -> Self;
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(DeepCopy::deep_copy)
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl DeepCopy for Value {
    fn deep_copy(&self) -> Self {
        match self {
            Self::List(items) => Self::List(items.deep_copy()),
            Self::Map(map) => Self::Map(map.deep_copy()),
            other => other.clone(),
        }
    }
}

impl DeepCopy for ValueMap {
    fn deep_copy(&self) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), value.deep_copy()))
            .collect()
    }
}

///
/// TESTS
///
