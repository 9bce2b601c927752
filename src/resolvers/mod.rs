//! Resolver directory.
//!
//! A read-only, ordered mapping of resolver names to the IP address of a
//! public DNS server. The directory is built once at startup, either from the
//! built-in table or from a JSON file, and shared by reference afterwards.
//!
//! Names are case-sensitive and unique. Iteration order is the declaration
//! order, which is also the order `/resolver` lists them in.

use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use serde::Deserialize;

use crate::config::DEFAULT_RESOLVER_NAME;
use crate::error_handling::DirectoryError;

/// Resolvers offered out of the box, in display order.
const BUILTIN_RESOLVERS: &[(&str, Ipv4Addr)] = &[
    ("Default", Ipv4Addr::new(9, 9, 9, 10)),
    ("AdGuard", Ipv4Addr::new(94, 140, 14, 14)),
    ("AT&T", Ipv4Addr::new(165, 87, 13, 129)),
    ("Cloudflare", Ipv4Addr::new(1, 1, 1, 1)),
    ("Comodo", Ipv4Addr::new(8, 26, 56, 26)),
    ("Google", Ipv4Addr::new(8, 8, 8, 8)),
    ("HiNet", Ipv4Addr::new(168, 95, 1, 1)),
    ("OpenDNS", Ipv4Addr::new(208, 67, 222, 222)),
    ("Quad9", Ipv4Addr::new(9, 9, 9, 9)),
    ("Securolytics", Ipv4Addr::new(144, 217, 51, 168)),
    ("UUNET-CH", Ipv4Addr::new(195, 129, 12, 122)),
    ("UUNET-DE", Ipv4Addr::new(192, 76, 144, 66)),
    ("UUNET-UK", Ipv4Addr::new(158, 43, 240, 3)),
    ("UUNET-US", Ipv4Addr::new(198, 6, 100, 25)),
    ("Verisign", Ipv4Addr::new(64, 6, 64, 6)),
    ("Yandex", Ipv4Addr::new(77, 88, 8, 8)),
];

/// A named public DNS server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverEntry {
    pub name: String,
    pub address: IpAddr,
}

impl ResolverEntry {
    pub fn new(name: impl Into<String>, address: IpAddr) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// On-disk shape of a resolver entry; the address is validated separately so
/// the error can name the offending entry.
#[derive(Debug, Deserialize)]
struct RawResolverEntry {
    name: String,
    address: String,
}

/// Immutable name → address directory.
#[derive(Debug, Clone)]
pub struct ResolverDirectory {
    entries: Vec<ResolverEntry>,
}

impl ResolverDirectory {
    /// The sixteen resolvers of the reference deployment.
    pub fn builtin() -> Self {
        let entries = BUILTIN_RESOLVERS
            .iter()
            .map(|(name, ip)| ResolverEntry::new(*name, IpAddr::V4(*ip)))
            .collect();
        Self { entries }
    }

    /// Builds a directory from explicit entries, keeping their order.
    ///
    /// # Errors
    ///
    /// Fails if `entries` is empty, contains a duplicate name, or lacks a
    /// `Default` entry.
    pub fn from_entries(entries: Vec<ResolverEntry>) -> Result<Self, DirectoryError> {
        if entries.is_empty() {
            return Err(DirectoryError::Empty);
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(DirectoryError::DuplicateName(entry.name.clone()));
            }
        }
        if !entries.iter().any(|e| e.name == DEFAULT_RESOLVER_NAME) {
            return Err(DirectoryError::MissingDefault(DEFAULT_RESOLVER_NAME));
        }
        Ok(Self { entries })
    }

    /// Parses a JSON array of `{"name", "address"}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        let raw: Vec<RawResolverEntry> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|r| match r.address.trim().parse::<IpAddr>() {
                Ok(address) => Ok(ResolverEntry::new(r.name, address)),
                Err(_) => Err(DirectoryError::InvalidAddress {
                    name: r.name,
                    address: r.address,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(entries)
    }

    /// Reads and parses a resolvers file.
    pub fn from_file(path: &Path) -> Result<Self, DirectoryError> {
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Returns the address registered under `name`, if any. Case-sensitive.
    pub fn lookup_address(&self, name: &str) -> Option<IpAddr> {
        self.get(name).map(|e| e.address)
    }

    pub fn get(&self, name: &str) -> Option<&ResolverEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Resolver names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolverEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResolverDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_has_sixteen_unique_entries() {
        let dir = ResolverDirectory::builtin();
        assert_eq!(dir.len(), 16);
        let names: Vec<&str> = dir.names().collect();
        for (i, name) in names.iter().enumerate() {
            assert!(
                !names[..i].contains(name),
                "duplicate builtin resolver {name}"
            );
        }
        // Builtin table must itself pass validation
        assert!(ResolverDirectory::from_entries(dir.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn test_builtin_order_starts_with_default() {
        let dir = ResolverDirectory::builtin();
        let names: Vec<&str> = dir.names().take(3).collect();
        assert_eq!(names, vec!["Default", "AdGuard", "AT&T"]);
    }

    #[test]
    fn test_lookup_address_known_names() {
        let dir = ResolverDirectory::builtin();
        assert_eq!(
            dir.lookup_address("Cloudflare"),
            Some("1.1.1.1".parse().unwrap())
        );
        assert_eq!(
            dir.lookup_address("Default"),
            Some("9.9.9.10".parse().unwrap())
        );
        assert_eq!(
            dir.lookup_address("Google"),
            Some("8.8.8.8".parse().unwrap())
        );
    }

    #[test]
    fn test_lookup_address_is_case_sensitive() {
        let dir = ResolverDirectory::builtin();
        assert!(dir.lookup_address("cloudflare").is_none());
        assert!(dir.lookup_address("Nope").is_none());
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let ip: IpAddr = "1.1.1.1".parse().unwrap();
        let result = ResolverDirectory::from_entries(vec![
            ResolverEntry::new("Default", ip),
            ResolverEntry::new("Default", ip),
        ]);
        assert!(matches!(result, Err(DirectoryError::DuplicateName(n)) if n == "Default"));
    }

    #[test]
    fn test_from_entries_requires_default() {
        let ip: IpAddr = "1.1.1.1".parse().unwrap();
        let result = ResolverDirectory::from_entries(vec![ResolverEntry::new("Cloudflare", ip)]);
        assert!(matches!(result, Err(DirectoryError::MissingDefault(_))));
    }

    #[test]
    fn test_from_entries_rejects_empty() {
        assert!(matches!(
            ResolverDirectory::from_entries(Vec::new()),
            Err(DirectoryError::Empty)
        ));
    }

    #[test]
    fn test_from_json_str_keeps_order_and_ipv6() {
        let json = r#"[
            {"name": "Zeta", "address": "2606:4700:4700::1111"},
            {"name": "Default", "address": "9.9.9.10"},
            {"name": "Alpha", "address": "8.8.4.4"}
        ]"#;
        let dir = ResolverDirectory::from_json_str(json).unwrap();
        let names: Vec<&str> = dir.names().collect();
        assert_eq!(names, vec!["Zeta", "Default", "Alpha"]);
        assert!(dir.lookup_address("Zeta").unwrap().is_ipv6());
    }

    #[test]
    fn test_from_json_str_invalid_address() {
        let json = r#"[{"name": "Default", "address": "not-an-ip"}]"#;
        let result = ResolverDirectory::from_json_str(json);
        assert!(matches!(
            result,
            Err(DirectoryError::InvalidAddress { name, .. }) if name == "Default"
        ));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let result = ResolverDirectory::from_json_str("{not json");
        assert!(matches!(result, Err(DirectoryError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Default", "address": "1.0.0.1"}}, {{"name": "Lab", "address": "10.0.0.53"}}]"#
        )
        .unwrap();
        let dir = ResolverDirectory::from_file(file.path()).unwrap();
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.lookup_address("Lab"), Some("10.0.0.53".parse().unwrap()));
    }

    #[test]
    fn test_from_file_missing() {
        let result = ResolverDirectory::from_file(Path::new("/nonexistent/resolvers.json"));
        assert!(matches!(result, Err(DirectoryError::Read { .. })));
    }
}
