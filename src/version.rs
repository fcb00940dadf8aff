use crate::error::{BumperError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Anchored SemVer 2.0.0 grammar: three release numbers without leading
/// zeros, optional dash-prefixed prerelease identifiers (numeric ones also
/// without leading zeros), optional plus-prefixed build identifiers.
const VERSION_PATTERN: &str = r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[A-Za-z-][0-9A-Za-z-]*)(?:\.(?:0|[1-9]\d*|\d*[A-Za-z-][0-9A-Za-z-]*))*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version grammar pattern compiles"))
}

/// Semantic version representation
///
/// Canonical string form is
/// `major.minor.patch[-prerelease.joined.by.dots][+build.joined.by.dots]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Dot-separated prerelease identifiers, empty when absent
    pub prerelease: Vec<String>,
    /// Dot-separated build identifiers, empty when absent
    pub build: Vec<String>,
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Create a new version without prerelease or build identifiers
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a SemVer string (e.g., "1.2.3" or "1.0.0-alpha+001")
    ///
    /// A `-` suffix populates `prerelease`, a `+` suffix populates `build`,
    /// and a `-...+...` combination populates both from their respective
    /// substrings.
    ///
    /// # Returns
    /// * `Ok(Version)` - Successfully parsed version
    /// * `Err(BumperError::InvalidFormat)` - carrying the rejected input
    ///
    /// # Example
    /// ```
    /// use bumper::version::Version;
    ///
    /// let v = Version::parse("1.0.0-alpha+001").unwrap();
    /// assert_eq!(v.prerelease, vec!["alpha".to_string()]);
    /// assert_eq!(v.build, vec!["001".to_string()]);
    /// assert!(Version::parse("0.01.0").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let captures = version_regex()
            .captures(input)
            .ok_or_else(|| BumperError::invalid_format(input))?;

        // The grammar leaves only plain digit runs in the first three
        // groups; parse can still overflow u32, which is a rejection too.
        let number = |index: usize| -> Result<u32> {
            captures[index]
                .parse::<u32>()
                .map_err(|_| BumperError::invalid_format(input))
        };

        let identifiers = |index: usize| -> Vec<String> {
            captures
                .get(index)
                .map(|m| m.as_str().split('.').map(str::to_string).collect())
                .unwrap_or_default()
        };

        Ok(Version {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            prerelease: identifiers(4),
            build: identifiers(5),
        })
    }

    /// Bump the version according to the bump type, returning a new value
    ///
    /// Lower release components reset to 0, prerelease and build
    /// identifiers are carried through unchanged:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    pub fn bump(&self, bump_type: &VersionBump) -> Self {
        let (major, minor, patch) = match bump_type {
            VersionBump::Major => (self.major + 1, 0, 0),
            VersionBump::Minor => (self.major, self.minor + 1, 0),
            VersionBump::Patch => (self.major, self.minor, self.patch + 1),
        };

        Version {
            major,
            minor,
            patch,
            prerelease: self.prerelease.clone(),
            build: self.build.clone(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease.join("."))?;
        }

        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = BumperError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_zero_components() {
        let v = Version::parse("0.0.0").unwrap();
        assert_eq!(v, Version::new(0, 0, 0));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("0.01.0").is_err());
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("a.b.c").is_err());
        assert!(Version::parse("1.-1.0").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_rejects_empty_suffixes() {
        assert!(Version::parse("1.2.3-").is_err());
        assert!(Version::parse("1.2.3+").is_err());
        assert!(Version::parse("1.2.3-beta.").is_err());
    }

    #[test]
    fn test_version_parse_error_carries_input() {
        match Version::parse("1.2") {
            Err(BumperError::InvalidFormat(input)) => assert_eq!(input, "1.2"),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_version_parse_prerelease() {
        let v = Version::parse("1.2.3-beta.0.1").unwrap();
        assert_eq!(v.prerelease, vec!["beta", "0", "1"]);
        assert!(v.build.is_empty());
    }

    #[test]
    fn test_version_parse_rejects_leading_zero_prerelease_number() {
        assert!(Version::parse("1.2.3-01").is_err());
        // Leading zeros are fine once the identifier is alphanumeric
        assert!(Version::parse("1.2.3-0a").is_ok());
    }

    #[test]
    fn test_version_parse_build_only() {
        let v = Version::parse("1.2.3+exp.sha-5114f85").unwrap();
        assert!(v.prerelease.is_empty());
        assert_eq!(v.build, vec!["exp", "sha-5114f85"]);
    }

    #[test]
    fn test_version_parse_prerelease_and_build() {
        let v = Version::parse("1.0.0-alpha+001").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 0);
        assert_eq!(v.patch, 0);
        assert_eq!(v.prerelease, vec!["alpha"]);
        assert_eq!(v.build, vec!["001"]);
        assert_eq!(v.to_string(), "1.0.0-alpha+001");
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(&VersionBump::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(&VersionBump::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(&VersionBump::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_scenario() {
        let v = Version::parse("1.2.1").unwrap();
        let bumped = v.bump(&VersionBump::Minor);
        assert_eq!(bumped, Version::new(1, 3, 0));
        assert_eq!(bumped.to_string(), "1.3.0");
    }

    #[test]
    fn test_version_bump_cascade() {
        let v = Version::new(1, 2, 1);
        let cascaded = v.bump(&VersionBump::Major).bump(&VersionBump::Minor);
        assert_eq!(cascaded, Version::new(2, 1, 0));
    }

    #[test]
    fn test_version_bump_carries_suffixes() {
        let v = Version::parse("1.2.3-beta.1+42").unwrap();
        let bumped = v.bump(&VersionBump::Patch);
        assert_eq!(bumped.major, 1);
        assert_eq!(bumped.minor, 2);
        assert_eq!(bumped.patch, 4);
        assert_eq!(bumped.prerelease, vec!["beta", "1"]);
        assert_eq!(bumped.build, vec!["42"]);
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_version_round_trip() {
        let inputs = [
            "0.0.4",
            "1.2.3",
            "10.20.30",
            "1.1.2-prerelease+meta",
            "1.0.0-alpha",
            "1.0.0-alpha.beta.1",
            "1.0.0-rc.1+build.123",
            "2.0.0+build.1848",
            "1.2.3-SNAPSHOT-123",
        ];

        for input in inputs {
            let v = Version::parse(input).unwrap();
            assert_eq!(v.to_string(), input);
            assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn test_version_from_str() {
        let v: Version = "1.2.3".parse().unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }
}
