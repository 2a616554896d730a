//! Three-state partial-update fields.
//!
//! A JSON body field can be absent (leave the stored value unchanged),
//! explicitly `null` (clear it), or carry a value (set it). Duck-typed key
//! checks conflate the first two; [`Patch`] keeps them distinct.

use serde::{Deserialize, Deserializer};

/// One field of a partial update.
///
/// Deserialisation relies on the containing struct marking the field
/// `#[serde(default)]`: serde only invokes `Deserialize` for keys present in
/// the input, so an absent key falls back to [`Patch::Keep`], `null` becomes
/// [`Patch::Clear`], and a value becomes [`Patch::Set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
  #[default]
  Keep,
  Clear,
  Set(T),
}

impl<T> Patch<T> {
  pub fn is_keep(&self) -> bool { matches!(self, Patch::Keep) }

  /// Apply this patch to the current stored value.
  pub fn resolve(self, current: Option<T>) -> Option<T> {
    match self {
      Patch::Keep => current,
      Patch::Clear => None,
      Patch::Set(value) => Some(value),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    Ok(match Option::<T>::deserialize(deserializer)? {
      Some(value) => Patch::Set(value),
      None => Patch::Clear,
    })
  }
}

#[cfg(test)]
mod tests {
  use serde::Deserialize;

  use super::*;

  #[derive(Debug, Deserialize)]
  struct Body {
    #[serde(default)]
    photo: Patch<String>,
  }

  #[test]
  fn absent_key_keeps() {
    let body: Body = serde_json::from_str("{}").unwrap();
    assert_eq!(body.photo, Patch::Keep);
  }

  #[test]
  fn explicit_null_clears() {
    let body: Body = serde_json::from_str(r#"{"photo":null}"#).unwrap();
    assert_eq!(body.photo, Patch::Clear);
  }

  #[test]
  fn value_sets() {
    let body: Body = serde_json::from_str(r#"{"photo":"/photos/a.png"}"#).unwrap();
    assert_eq!(body.photo, Patch::Set("/photos/a.png".to_string()));
  }

  #[test]
  fn resolve_semantics() {
    let current = Some("old".to_string());
    assert_eq!(Patch::Keep.resolve(current.clone()), Some("old".to_string()));
    assert_eq!(Patch::<String>::Clear.resolve(current.clone()), None);
    assert_eq!(
      Patch::Set("new".to_string()).resolve(current),
      Some("new".to_string())
    );
  }
}
