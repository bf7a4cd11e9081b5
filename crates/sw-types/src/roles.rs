//! Insertion-ordered role -> permissions mapping.
//!
//! The exported document renders `rolePermissions` as a JSON object whose
//! key order matches role insertion order (predefined roles first, then
//! custom roles). A `BTreeMap` would resort keys and a `HashMap` would
//! scramble them, so the mapping is kept as an ordered vec of entries with
//! hand-rolled serde impls.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::options::PermissionKind;

/// Mapping from role name to its granted permissions, preserving insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RolePermissionMap {
    entries: Vec<(String, Vec<PermissionKind>)>,
}

impl RolePermissionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == role)
    }

    pub fn get(&self, role: &str) -> Option<&[PermissionKind]> {
        self.entries.iter().find(|(name, _)| name == role).map(|(_, perms)| perms.as_slice())
    }

    /// Insert or replace the permission set for `role`. New roles append at the end.
    pub fn insert(&mut self, role: impl Into<String>, permissions: Vec<PermissionKind>) {
        let role = role.into();
        match self.entries.iter_mut().find(|(name, _)| *name == role) {
            Some((_, perms)) => *perms = permissions,
            None => self.entries.push((role, permissions)),
        }
    }

    /// Seed an empty permission set for `role` unless it already has one.
    pub fn ensure(&mut self, role: &str) {
        if !self.contains(role) {
            self.entries.push((role.to_string(), Vec::new()));
        }
    }

    /// Remove a role's entry, returning its permissions when present.
    pub fn remove(&mut self, role: &str) -> Option<Vec<PermissionKind>> {
        let idx = self.entries.iter().position(|(name, _)| name == role)?;
        Some(self.entries.remove(idx).1)
    }

    /// Drop every entry whose role name fails the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|(name, _)| keep(name));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PermissionKind])> {
        self.entries.iter().map(|(name, perms)| (name.as_str(), perms.as_slice()))
    }
}

impl Serialize for RolePermissionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (role, perms) in &self.entries {
            map.serialize_entry(role, perms)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RolePermissionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = RolePermissionMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of role name to permission list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((role, perms)) = access.next_entry::<String, Vec<PermissionKind>>()? {
                    entries.push((role, perms));
                }
                Ok(RolePermissionMap { entries })
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<PermissionKind>)> for RolePermissionMap {
    fn from_iter<I: IntoIterator<Item = (S, Vec<PermissionKind>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (role, perms) in iter {
            map.insert(role, perms);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut map = RolePermissionMap::new();
        map.insert("editor", vec![PermissionKind::Read]);
        map.insert("admin", vec![PermissionKind::Create, PermissionKind::Delete]);
        map.insert("aardvark", Vec::new());

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["editor", "admin", "aardvark"]);
    }

    #[test]
    fn insert_replaces_existing_entry_in_place() {
        let mut map = RolePermissionMap::new();
        map.insert("admin", vec![PermissionKind::Read]);
        map.insert("editor", Vec::new());
        map.insert("admin", vec![PermissionKind::Create]);

        assert_eq!(map.get("admin"), Some(&[PermissionKind::Create][..]));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["admin", "editor"]);
    }

    #[test]
    fn remove_and_retain() {
        let mut map = RolePermissionMap::new();
        map.insert("admin", Vec::new());
        map.insert("editor", Vec::new());
        map.insert("Ops", Vec::new());

        assert!(map.remove("editor").is_some());
        assert!(map.remove("editor").is_none());

        map.retain(|name| name == "Ops");
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["Ops"]);
    }
}
