//! Signals and their value types.
//!
//! A [`Signal`] is a named field within a message's payload. Its
//! [`SignalType`] describes the integer value type the field carries:
//! a type name (as it appears in generated headers), a bit size, a
//! signedness flag, and optional min/max bounds. Bit *layout* (start
//! positions, byte order) is out of scope for this catalog.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// An integer value type attached to a signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalType {
    name: String,
    size: u8,
    signed: bool,
    min: Option<i64>,
    max: Option<i64>,
}

impl SignalType {
    /// Create an integer signal type with the given bit size.
    ///
    /// Sizes outside `1..=64` are rejected.
    pub fn integer(name: &str, size: u8, signed: bool) -> Result<Self, CatalogError> {
        if size == 0 || size > 64 {
            return Err(CatalogError::InvalidSignalSize { name: name.to_string(), size });
        }
        Ok(SignalType {
            name: name.to_string(),
            size,
            signed,
            min: None,
            max: None,
        })
    }

    /// The type's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the type.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Bit size of values of this type.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether values of this type are signed.
    pub fn signed(&self) -> bool {
        self.signed
    }

    /// Lower bound, if one has been set.
    pub fn min(&self) -> Option<i64> {
        self.min
    }

    /// Set the lower bound.
    pub fn set_min(&mut self, min: i64) {
        self.min = Some(min);
    }

    /// Upper bound, if one has been set.
    pub fn max(&self) -> Option<i64> {
        self.max
    }

    /// Set the upper bound.
    pub fn set_max(&mut self, max: i64) {
        self.max = Some(max);
    }
}

/// A named signal within a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    name: String,
    ty: SignalType,
}

impl Signal {
    /// Create a signal with the given value type.
    pub fn new(name: &str, ty: SignalType) -> Self {
        Signal {
            name: name.to_string(),
            ty,
        }
    }

    /// The signal's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The signal's value type.
    pub fn ty(&self) -> &SignalType {
        &self.ty
    }

    /// Mutable access to the signal's value type.
    pub fn ty_mut(&mut self) -> &mut SignalType {
        &mut self.ty
    }

    /// Replace the signal's value type outright.
    pub fn set_ty(&mut self, ty: SignalType) {
        self.ty = ty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_type_rejects_zero_size() {
        let err = SignalType::integer("bad_t", 0, false).unwrap_err();
        assert!(err.to_string().contains("bad_t"));
    }

    #[test]
    fn test_signal_type_rejects_oversized() {
        assert!(SignalType::integer("wide_t", 65, true).is_err());
        assert!(SignalType::integer("wide_t", 64, true).is_ok());
    }

    #[test]
    fn test_signal_type_bounds() {
        let mut ty = SignalType::integer("pwm_t", 4, false).unwrap();
        assert_eq!(ty.max(), None);
        ty.set_max(10);
        assert_eq!(ty.max(), Some(10));
        assert_eq!(ty.min(), None);
    }

    #[test]
    fn test_signal_rename_type() {
        let ty = SignalType::integer("tmp_t", 8, false).unwrap();
        let mut sig = Signal::new("FW_major_version", ty);
        sig.ty_mut().set_name("uint8_t");
        assert_eq!(sig.ty().name(), "uint8_t");
        assert_eq!(sig.name(), "FW_major_version");
    }
}
