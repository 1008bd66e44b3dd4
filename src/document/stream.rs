// src/document/stream.rs

use serde::ser::{Error as _, Serialize, SerializeSeq, Serializer};
use std::cell::RefCell;

/// Serializes a fallible iterator as a JSON array without collecting it.
///
/// The iterator is drained during serialization, so a `StreamSeq` can be
/// serialized once. If the iterator yields an `Err`, serialization stops
/// and the error is kept for `take_error`.
pub struct StreamSeq<I, E> {
    iter: RefCell<Option<I>>,
    error: RefCell<Option<E>>,
}

impl<I, T, E> StreamSeq<I, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    pub fn new(iter: I) -> Self {
        Self {
            iter: RefCell::new(Some(iter)),
            error: RefCell::new(None),
        }
    }
}

impl<I, E> StreamSeq<I, E> {
    /// The error that aborted serialization, if any.
    pub fn take_error(&self) -> Option<E> {
        self.error.borrow_mut().take()
    }
}

impl<I, T, E> Serialize for StreamSeq<I, E>
where
    I: Iterator<Item = Result<T, E>>,
    T: Serialize,
    E: std::fmt::Display,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let iter = self
            .iter
            .borrow_mut()
            .take()
            .ok_or_else(|| S::Error::custom("stream already consumed"))?;

        let mut seq = serializer.serialize_seq(None)?;
        for item in iter {
            match item {
                Ok(value) => seq.serialize_element(&value)?,
                Err(e) => {
                    let err = S::Error::custom(&e);
                    *self.error.borrow_mut() = Some(e);
                    return Err(err);
                }
            }
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streams_once() {
        let seq = StreamSeq::new((1..=3).map(Ok::<_, String>));
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[1,2,3]");
        assert!(serde_json::to_string(&seq).is_err());
    }

    #[test]
    fn test_empty_stream() {
        let seq = StreamSeq::new(std::iter::empty::<Result<u8, String>>());
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[]");
        assert!(seq.take_error().is_none());
    }

    #[test]
    fn test_error_stops_and_is_kept() {
        let items = vec![Ok(1), Err("broken pipe".to_string()), Ok(3)];
        let seq = StreamSeq::new(items.into_iter());
        let err = serde_json::to_string(&seq).unwrap_err();
        assert!(err.to_string().contains("broken pipe"));
        assert_eq!(seq.take_error().as_deref(), Some("broken pipe"));
        assert!(seq.take_error().is_none());
    }
}
