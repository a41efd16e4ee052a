//! Path to constant-name normalization.
//!
//! A bundle constant is named after the file's relative path with every
//! character of [`SUBSTITUTED`] replaced by `_`. The set is part of the
//! bundle contract: changing it renames constants that consumers import.

use std::fmt;

/// Characters replaced by `_`. Everything else passes through unchanged.
pub const SUBSTITUTED: [char; 30] = [
    '\\', '.', ',', '/', '?', ':', ';', '\'', '"', '|', '-', '+', '=', '~', '!', '@', '#', '$', '%',
    '^', '&', '*', '(', ')', '<', '>', '{', '}', '[', ']',
];

/// Constant-name stem derived from a relative path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedIdentifier(String);

impl NormalizedIdentifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the digest constant, `Sha256_<id>`.
    pub fn digest_const(&self) -> String {
        format!("Sha256_{}", self.0)
    }

    /// Name of the contents constant, `File_<id>`.
    pub fn file_const(&self) -> String {
        format!("File_{}", self.0)
    }

    /// True when the identifier holds only ASCII alphanumerics and `_`.
    ///
    /// Paths with spaces or other characters outside the substitution set
    /// normalize to names the target toolchain may reject.
    pub fn is_plain(&self) -> bool {
        self.0.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl fmt::Display for NormalizedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a `/`-separated relative path.
///
/// No run collapsing, no trimming, case preserved.
pub fn normalize(rel_path: &str) -> NormalizedIdentifier {
    NormalizedIdentifier(
        rel_path
            .chars()
            .map(|c| if SUBSTITUTED.contains(&c) { '_' } else { c })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_manifest_names() {
        assert_eq!(normalize("deploy/role.yaml").as_str(), "deploy_role_yaml");
        assert_eq!(
            normalize("deploy/crds/noobaa.io_backingstores.yaml").as_str(),
            "deploy_crds_noobaa_io_backingstores_yaml"
        );
        assert_eq!(
            normalize("deploy/obc/objectbucket.io_objectbucketclaims_crd.yaml").as_str(),
            "deploy_obc_objectbucket_io_objectbucketclaims_crd_yaml"
        );
        assert_eq!(
            normalize("crds/noobaa.io_backingstores.yaml").as_str(),
            "crds_noobaa_io_backingstores_yaml"
        );
    }

    #[test]
    fn every_substituted_character_becomes_underscore() {
        let all: String = SUBSTITUTED.iter().collect();
        let id = normalize(&all);
        assert_eq!(id.as_str(), "_".repeat(SUBSTITUTED.len()));
    }

    #[test]
    fn other_characters_pass_through() {
        assert_eq!(normalize("Deploy_V2/ab c`é").as_str(), "Deploy_V2_ab c`é");
        assert_eq!(normalize("a--b..c").as_str(), "a__b__c");
        assert_eq!(normalize("./x/").as_str(), "__x_");
    }

    #[test]
    fn plain_identifier_check() {
        assert!(normalize("deploy/role.yaml").is_plain());
        assert!(!normalize("deploy/my role.yaml").is_plain());
        assert!(!normalize("deploy/ünïcode.yaml").is_plain());
    }

    #[test]
    fn constant_names() {
        let id = normalize("a/b.yaml");
        assert_eq!(id.digest_const(), "Sha256_a_b_yaml");
        assert_eq!(id.file_const(), "File_a_b_yaml");
    }

    #[test]
    fn distinct_paths_can_collide() {
        assert_eq!(normalize("a.b"), normalize("a-b"));
    }
}
