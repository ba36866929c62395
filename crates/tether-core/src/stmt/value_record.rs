use super::Value;

use std::ops;

#[derive(Debug, Default, Clone)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }
}

impl ops::Deref for ValueRecord {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.fields[..]
    }
}

impl<'a> IntoIterator for &'a ValueRecord {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for ValueRecord {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<const N: usize> From<[Value; N]> for ValueRecord {
    fn from(fields: [Value; N]) -> Self {
        Self::from_vec(fields.into())
    }
}
