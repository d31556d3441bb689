//! Path-addressed editing of the site document.
//!
//! Every type that appears in [`SiteConfig`](crate::site::SiteConfig)
//! implements [`Node`]. A node can replace itself from a JSON value, hand out
//! a child for one [`Segment`], and, if it is a list, push or remove
//! elements. The free functions [`set`], [`append`] and [`remove`] walk a
//! [`Path`] down to the target node and apply the change there.
//!
//! Nodes held in an `Arc` are copied on write through `Arc::make_mut`, so
//! an edit only allocates along the path it walks. Everything else stays
//! shared with the document the edit started from.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::EditError;
use crate::path::{Path, Segment};
use crate::types::{CtaVariant, GalleryKind};

/// A value inside the site document that can be edited in place.
///
/// Errors returned from these methods carry an empty location; the walker
/// fills it in.
pub trait Node {
    /// Overwrite this node with `value`.
    fn replace(&mut self, value: Value) -> Result<(), EditError>;

    /// Borrow the child addressed by `segment`.
    fn child(&mut self, segment: &Segment) -> Result<&mut dyn Node, EditError>;

    /// Append `item` to this list.
    fn push(&mut self, _item: Value) -> Result<(), EditError> {
        Err(EditError::NotAList(String::new()))
    }

    /// Remove the element at `index` from this list.
    fn remove(&mut self, _index: usize) -> Result<(), EditError> {
        Err(EditError::NotAList(String::new()))
    }
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, EditError> {
    serde_json::from_value(value).map_err(|source| EditError::InvalidValue {
        at: String::new(),
        source,
    })
}

fn walk<'a>(root: &'a mut dyn Node, path: &Path) -> Result<&'a mut dyn Node, EditError> {
    let mut node = root;
    for (depth, segment) in path.segments().iter().enumerate() {
        node = node
            .child(segment)
            .map_err(|e| e.at(&path.prefix(depth)))?;
    }
    Ok(node)
}

/// Replace the value at `path`.
pub fn set(root: &mut dyn Node, path: &Path, value: Value) -> Result<(), EditError> {
    walk(root, path)?
        .replace(value)
        .map_err(|e| e.at(&path.to_string()))
}

/// Push `item` onto the list at `path`.
pub fn append(root: &mut dyn Node, path: &Path, item: Value) -> Result<(), EditError> {
    walk(root, path)?
        .push(item)
        .map_err(|e| e.at(&path.to_string()))
}

/// Remove element `index` from the list at `path`.
pub fn remove(root: &mut dyn Node, path: &Path, index: usize) -> Result<(), EditError> {
    walk(root, path)?
        .remove(index)
        .map_err(|e| e.at(&path.to_string()))
}

macro_rules! leaf_node {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Node for $ty {
                fn replace(&mut self, value: Value) -> Result<(), EditError> {
                    *self = decode(value)?;
                    Ok(())
                }

                fn child(&mut self, _segment: &Segment) -> Result<&mut dyn Node, EditError> {
                    Err(EditError::NotARecord(String::new()))
                }
            }
        )+
    };
}

leaf_node!(String, bool, CtaVariant, GalleryKind);

/// Implement [`Node`] for a struct by listing its JSON keys and fields.
macro_rules! record_node {
    ($ty:ty { $($key:literal => $field:ident),+ $(,)? }) => {
        impl $crate::edit::Node for $ty {
            fn replace(
                &mut self,
                value: ::serde_json::Value,
            ) -> ::std::result::Result<(), $crate::error::EditError> {
                *self = $crate::edit::decode(value)?;
                Ok(())
            }

            fn child(
                &mut self,
                segment: &$crate::path::Segment,
            ) -> ::std::result::Result<&mut dyn $crate::edit::Node, $crate::error::EditError> {
                match segment {
                    $crate::path::Segment::Field(name) => match name.as_str() {
                        $($key => Ok(&mut self.$field as &mut dyn $crate::edit::Node),)+
                        _ => Err($crate::error::EditError::UnknownField {
                            at: String::new(),
                            field: name.clone(),
                        }),
                    },
                    $crate::path::Segment::Index(_) => {
                        Err($crate::error::EditError::NotAList(String::new()))
                    }
                }
            }
        }
    };
}

pub(crate) use record_node;

impl<T: Node + DeserializeOwned> Node for Vec<T> {
    fn replace(&mut self, value: Value) -> Result<(), EditError> {
        *self = decode(value)?;
        Ok(())
    }

    fn child(&mut self, segment: &Segment) -> Result<&mut dyn Node, EditError> {
        match segment {
            Segment::Index(index) => {
                let len = self.len();
                self.get_mut(*index)
                    .map(|item| item as &mut dyn Node)
                    .ok_or(EditError::IndexOutOfBounds {
                        at: String::new(),
                        index: *index,
                        len,
                    })
            }
            Segment::Field(_) => Err(EditError::NotARecord(String::new())),
        }
    }

    fn push(&mut self, item: Value) -> Result<(), EditError> {
        Vec::push(self, decode(item)?);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<(), EditError> {
        if index >= self.len() {
            return Err(EditError::IndexOutOfBounds {
                at: String::new(),
                index,
                len: self.len(),
            });
        }
        Vec::remove(self, index);
        Ok(())
    }
}

// Editing inside an absent optional value materialises its default first,
// so `team.members[0].specialties` can be appended to before it exists.
impl<T: Node + DeserializeOwned + Default> Node for Option<T> {
    fn replace(&mut self, value: Value) -> Result<(), EditError> {
        *self = decode(value)?;
        Ok(())
    }

    fn child(&mut self, segment: &Segment) -> Result<&mut dyn Node, EditError> {
        self.get_or_insert_with(T::default).child(segment)
    }

    fn push(&mut self, item: Value) -> Result<(), EditError> {
        self.get_or_insert_with(T::default).push(item)
    }

    fn remove(&mut self, index: usize) -> Result<(), EditError> {
        match self {
            Some(inner) => inner.remove(index),
            None => Err(EditError::IndexOutOfBounds {
                at: String::new(),
                index,
                len: 0,
            }),
        }
    }
}

impl<T: Node + Clone> Node for Arc<T> {
    fn replace(&mut self, value: Value) -> Result<(), EditError> {
        Arc::make_mut(self).replace(value)
    }

    fn child(&mut self, segment: &Segment) -> Result<&mut dyn Node, EditError> {
        Arc::make_mut(self).child(segment)
    }

    fn push(&mut self, item: Value) -> Result<(), EditError> {
        Arc::make_mut(self).push(item)
    }

    fn remove(&mut self, index: usize) -> Result<(), EditError> {
        Arc::make_mut(self).remove(index)
    }
}

impl<T: Node + DeserializeOwned> Node for BTreeMap<String, T> {
    fn replace(&mut self, value: Value) -> Result<(), EditError> {
        *self = decode(value)?;
        Ok(())
    }

    fn child(&mut self, segment: &Segment) -> Result<&mut dyn Node, EditError> {
        match segment {
            Segment::Field(key) => self
                .get_mut(key)
                .map(|item| item as &mut dyn Node)
                .ok_or_else(|| EditError::UnknownField {
                    at: String::new(),
                    field: key.clone(),
                }),
            Segment::Index(_) => Err(EditError::NotAList(String::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Item {
        label: String,
        tags: Option<Vec<String>>,
    }

    record_node!(Item { "label" => label, "tags" => tags });

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Doc {
        title: String,
        items: Arc<Vec<Item>>,
        other: Arc<Vec<String>>,
    }

    record_node!(Doc { "title" => title, "items" => items, "other" => other });

    fn doc() -> Doc {
        Doc {
            title: "t".into(),
            items: Arc::new(vec![
                Item { label: "a".into(), tags: None },
                Item { label: "b".into(), tags: Some(vec!["x".into()]) },
            ]),
            other: Arc::new(vec!["keep".into()]),
        }
    }

    fn p(s: &str) -> Path {
        s.parse().unwrap()
    }

    #[test]
    fn set_copies_only_the_walked_branch() {
        let original = doc();
        let mut edited = original.clone();
        set(&mut edited, &p("items[1].label"), json!("B")).unwrap();

        assert_eq!(edited.items[1].label, "B");
        assert_eq!(original.items[1].label, "b");
        assert!(!Arc::ptr_eq(&original.items, &edited.items));
        assert!(Arc::ptr_eq(&original.other, &edited.other));
    }

    #[test]
    fn append_creates_absent_optional_list() {
        let mut d = doc();
        append(&mut d, &p("items[0].tags"), json!("new")).unwrap();
        assert_eq!(d.items[0].tags, Some(vec!["new".to_string()]));
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut d = doc();
        append(&mut d, &p("items"), json!({ "label": "c", "tags": null })).unwrap();
        remove(&mut d, &p("items"), 0).unwrap();
        let labels: Vec<_> = d.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["b", "c"]);
    }

    #[test]
    fn errors_name_the_failing_location() {
        let mut d = doc();

        let err = set(&mut d, &p("items[5].label"), json!("x")).unwrap_err();
        assert!(matches!(
            err,
            EditError::IndexOutOfBounds { ref at, index: 5, len: 2 } if at == "items"
        ));

        let err = set(&mut d, &p("items[0].nope"), json!("x")).unwrap_err();
        assert!(matches!(
            err,
            EditError::UnknownField { ref at, ref field } if at == "items[0]" && field == "nope"
        ));

        let err = set(&mut d, &p("title"), json!(42)).unwrap_err();
        assert!(matches!(err, EditError::InvalidValue { ref at, .. } if at == "title"));

        let err = append(&mut d, &p("title"), json!("x")).unwrap_err();
        assert!(matches!(err, EditError::NotAList(ref at) if at == "title"));

        let err = remove(&mut d, &p("other"), 3).unwrap_err();
        assert!(matches!(err, EditError::IndexOutOfBounds { index: 3, len: 1, .. }));
    }
}
