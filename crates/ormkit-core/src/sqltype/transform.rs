//! Value transformations layered on existing column types.

use super::SqlType;
use crate::error::Error;
use ormkit_proto::{ParamBuffer, Row, TypeCode};
use std::sync::Arc;

/// An existing column type wrapped with a pure mapping pair.
///
/// `forward` maps the stored representation to the application-level type and
/// `backward` maps it back; the two must compose to the identity over the
/// domain. Both functions run on every read and write of the column — no
/// transformed value is ever cached — so keep them cheap.
pub struct Transformed<S: SqlType, T> {
    underlying: S,
    forward: Arc<dyn Fn(S::Value) -> T + Send + Sync>,
    backward: Arc<dyn Fn(&T) -> S::Value + Send + Sync>,
}

impl<S: SqlType, T> Clone for Transformed<S, T>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            underlying: self.underlying.clone(),
            forward: Arc::clone(&self.forward),
            backward: Arc::clone(&self.backward),
        }
    }
}

impl<S: SqlType, T> std::fmt::Debug for Transformed<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transformed")
            .field("type_name", &self.underlying.type_name())
            .finish_non_exhaustive()
    }
}

impl<S, T> SqlType for Transformed<S, T>
where
    S: SqlType,
    T: Clone + Send + Sync + 'static,
{
    type Value = T;

    fn type_name(&self) -> &'static str {
        self.underlying.type_name()
    }

    fn type_code(&self) -> TypeCode {
        self.underlying.type_code()
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        Ok(self
            .underlying
            .get_result(row, index)?
            .map(|stored| (self.forward)(stored)))
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        let stored = (self.backward)(value);
        self.underlying.set_parameter(params, index, &stored)
    }
}

/// Extension methods available on every column type.
pub trait SqlTypeExt: SqlType + Sized {
    /// Wrap this type with a stored-to-application mapping pair.
    fn transform<T, F, B>(self, forward: F, backward: B) -> Transformed<Self, T>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(Self::Value) -> T + Send + Sync + 'static,
        B: Fn(&T) -> Self::Value + Send + Sync + 'static,
    {
        Transformed {
            underlying: self,
            forward: Arc::new(forward),
            backward: Arc::new(backward),
        }
    }
}

impl<S: SqlType> SqlTypeExt for S {}
