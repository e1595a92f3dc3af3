//! Publish-configuration resolution.
//!
//! Derives registry URL, access level, and auth-secret names from the
//! package options, detecting AWS CodeArtifact registries (role/key auth
//! replaces token auth there) and rejecting illegal combinations.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{
    error::DomainError,
    options::PackageOptions,
    value_objects::NpmAccess,
};

/// The public npm registry, used when no registry option is supplied.
pub const DEFAULT_NPM_REGISTRY_URL: &str = "https://registry.npmjs.org/";

/// GitHub Packages npm hostname; publishing there authenticates with the
/// workflow's `GITHUB_TOKEN` rather than an npm token.
pub const GITHUB_NPM_REGISTRY_HOST: &str = "npm.pkg.github.com";

const DEFAULT_NPM_TOKEN_SECRET: &str = "NPM_TOKEN";
const GITHUB_TOKEN_SECRET: &str = "GITHUB_TOKEN";
const DEFAULT_ACCESS_KEY_ID_SECRET: &str = "AWS_ACCESS_KEY_ID";
const DEFAULT_SECRET_ACCESS_KEY_SECRET: &str = "AWS_SECRET_ACCESS_KEY";

/// Matches a CodeArtifact registry host (scheme already stripped):
/// `<domain>-<account>.d.codeartifact.<region>.amazonaws.com/<repo path>`.
static CODE_ARTIFACT_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.+\.d\.codeartifact\..+\.amazonaws\.com/.+$")
        .expect("static regex must compile")
});

/// The resolved, immutable publish configuration.
///
/// Computed once at construction; the manifest `publishConfig` block is a
/// projection of this that only materializes when something diverges from
/// the implicit defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    registry_host: String,
    registry_url: String,
    access: NpmAccess,
    scoped: bool,
    token_secret: Option<String>,
    code_artifact: Option<CodeArtifactConfig>,
}

/// Resolved CodeArtifact auth settings, defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeArtifactConfig {
    pub access_key_id_secret: String,
    pub secret_access_key_secret: String,
    pub role_to_assume: Option<String>,
}

impl PublishConfig {
    /// Registry with the scheme stripped: bare hostname for root URLs
    /// (`registry.npmjs.org`), path kept otherwise (`foo.bar/path/`).
    pub fn npm_registry(&self) -> &str {
        &self.registry_host
    }

    /// Full registry URL, trailing slash guaranteed.
    pub fn npm_registry_url(&self) -> &str {
        &self.registry_url
    }

    pub fn npm_access(&self) -> NpmAccess {
        self.access
    }

    /// Secret name holding the publish token. `None` for CodeArtifact
    /// registries, which authenticate with AWS secrets instead.
    pub fn npm_token_secret(&self) -> Option<&str> {
        self.token_secret.as_deref()
    }

    pub fn code_artifact(&self) -> Option<&CodeArtifactConfig> {
        self.code_artifact.as_ref()
    }

    /// Access level, only when it diverges from the scoped/unscoped default.
    pub fn nondefault_access(&self) -> Option<NpmAccess> {
        (self.access != NpmAccess::default_for(self.scoped)).then_some(self.access)
    }

    /// Registry URL, only when it diverges from the public npm registry.
    pub fn nondefault_registry(&self) -> Option<&str> {
        (self.registry_url != DEFAULT_NPM_REGISTRY_URL).then_some(self.registry_url.as_str())
    }

    /// Whether a `publishConfig` block belongs in the manifest at all.
    pub fn diverges_from_defaults(&self) -> bool {
        self.nondefault_access().is_some() || self.nondefault_registry().is_some()
    }
}

/// Stateless resolver from options to [`PublishConfig`].
pub struct PublishConfigResolver;

impl PublishConfigResolver {
    /// Derive the publish configuration, validating auth and access rules.
    ///
    /// Fails with [`DomainError::InvalidPublishConfig`] on:
    /// - an explicit token secret for a CodeArtifact registry
    /// - CodeArtifact options for a non-CodeArtifact registry
    /// - restricted access on an unscoped package name
    pub fn resolve(options: &PackageOptions) -> Result<PublishConfig, DomainError> {
        let registry_url = resolve_registry_url(options);
        let registry_host = render_host(&registry_url);
        let is_code_artifact = CODE_ARTIFACT_HOST.is_match(&registry_host);

        debug!(%registry_url, code_artifact = is_code_artifact, "registry resolved");

        let code_artifact = if is_code_artifact {
            if options.npm_token_secret.is_some() {
                return Err(DomainError::invalid_publish(
                    "\"npm-token-secret\" must not be specified when publishing AWS CodeArtifact",
                ));
            }
            let supplied = options.code_artifact_options.clone().unwrap_or_default();
            Some(CodeArtifactConfig {
                access_key_id_secret: supplied
                    .access_key_id_secret
                    .unwrap_or_else(|| DEFAULT_ACCESS_KEY_ID_SECRET.into()),
                secret_access_key_secret: supplied
                    .secret_access_key_secret
                    .unwrap_or_else(|| DEFAULT_SECRET_ACCESS_KEY_SECRET.into()),
                role_to_assume: supplied.role_to_assume,
            })
        } else {
            if options
                .code_artifact_options
                .as_ref()
                .is_some_and(|o| o.is_any_set())
            {
                return Err(DomainError::invalid_publish(
                    "code-artifact-options must only be specified when publishing AWS CodeArtifact",
                ));
            }
            None
        };

        let scoped = options.is_scoped();
        let access = options
            .npm_access
            .unwrap_or_else(|| NpmAccess::default_for(scoped));
        if access == NpmAccess::Restricted && !scoped {
            return Err(DomainError::invalid_publish(format!(
                "\"npm-access\" cannot be restricted for non-scoped npm package '{}'",
                options.name
            )));
        }

        let token_secret = if is_code_artifact {
            None
        } else {
            Some(options.npm_token_secret.clone().unwrap_or_else(|| {
                if hostname(&registry_host) == GITHUB_NPM_REGISTRY_HOST {
                    GITHUB_TOKEN_SECRET.into()
                } else {
                    DEFAULT_NPM_TOKEN_SECRET.into()
                }
            }))
        };

        Ok(PublishConfig {
            registry_host,
            registry_url,
            access,
            scoped,
            token_secret,
            code_artifact,
        })
    }
}

/// Registry URL precedence: explicit URL, then the deprecated host-only
/// field with `https://` assumed, then the public registry.
fn resolve_registry_url(options: &PackageOptions) -> String {
    let url = match (&options.npm_registry_url, &options.npm_registry) {
        (Some(url), _) => url.clone(),
        (None, Some(host)) => format!("https://{host}"),
        (None, None) => return DEFAULT_NPM_REGISTRY_URL.to_string(),
    };
    ensure_trailing_slash(url)
}

fn ensure_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Scheme-stripped rendering of a registry URL. A root URL renders as the
/// bare hostname; a URL with a real path keeps the path and its trailing
/// slash.
fn render_host(url: &str) -> String {
    let stripped = strip_scheme(url);
    match stripped.strip_suffix('/') {
        Some(host) if !host.contains('/') => host.to_string(),
        _ => stripped.to_string(),
    }
}

/// Hostname portion of a host-with-path (`foo.bar/path/` → `foo.bar`).
fn hostname(host: &str) -> &str {
    host.split('/').next().unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::CodeArtifactOptions;

    const CODEARTIFACT_URL: &str =
        "https://my-domain-111122223333.d.codeartifact.us-west-2.amazonaws.com/npm/my_repo/";

    #[test]
    fn defaults() {
        let cfg = PublishConfigResolver::resolve(&PackageOptions::named("my-package")).unwrap();
        assert_eq!(cfg.npm_access(), NpmAccess::Public);
        assert_eq!(cfg.npm_registry(), "registry.npmjs.org");
        assert_eq!(cfg.npm_registry_url(), "https://registry.npmjs.org/");
        assert_eq!(cfg.npm_token_secret(), Some("NPM_TOKEN"));
        assert!(!cfg.diverges_from_defaults());
    }

    #[test]
    fn scoped_packages_default_to_restricted_access() {
        let cfg =
            PublishConfigResolver::resolve(&PackageOptions::named("scoped@my-package")).unwrap();
        assert_eq!(cfg.npm_access(), NpmAccess::Restricted);
        // Restricted *is* the default for a scoped package, so nothing to emit.
        assert!(!cfg.diverges_from_defaults());
    }

    #[test]
    fn non_scoped_package_cannot_be_restricted() {
        let opts = PackageOptions {
            npm_access: Some(NpmAccess::Restricted),
            ..PackageOptions::named("my-package")
        };
        assert!(matches!(
            PublishConfigResolver::resolve(&opts),
            Err(DomainError::InvalidPublishConfig { .. })
        ));
    }

    #[test]
    fn custom_settings() {
        let opts = PackageOptions {
            npm_registry_url: Some("https://foo.bar".into()),
            npm_access: Some(NpmAccess::Public),
            npm_token_secret: Some("GITHUB_TOKEN".into()),
            ..PackageOptions::named("scoped@my-package")
        };
        let cfg = PublishConfigResolver::resolve(&opts).unwrap();
        assert_eq!(cfg.npm_registry(), "foo.bar");
        assert_eq!(cfg.npm_registry_url(), "https://foo.bar/");
        assert_eq!(cfg.npm_access(), NpmAccess::Public);
        assert_eq!(cfg.npm_token_secret(), Some("GITHUB_TOKEN"));
        assert_eq!(cfg.nondefault_access(), Some(NpmAccess::Public));
        assert_eq!(cfg.nondefault_registry(), Some("https://foo.bar/"));
    }

    #[test]
    fn host_drops_the_slash_only_for_root_urls() {
        // Root URL: bare hostname. Real path: path kept, slash and all.
        let root = PublishConfigResolver::resolve(&PackageOptions {
            npm_registry_url: Some("https://foo.bar".into()),
            ..PackageOptions::named("my-package")
        })
        .unwrap();
        assert_eq!(root.npm_registry(), "foo.bar");

        let pathed = PublishConfigResolver::resolve(&PackageOptions {
            npm_registry_url: Some("https://foo.bar/path/".into()),
            ..PackageOptions::named("my-package")
        })
        .unwrap();
        assert_eq!(pathed.npm_registry(), "foo.bar/path/");
    }

    #[test]
    fn registry_with_path_preserves_the_path() {
        let opts = PackageOptions {
            npm_registry_url: Some("https://foo.bar/path/".into()),
            ..PackageOptions::named("my-package")
        };
        let cfg = PublishConfigResolver::resolve(&opts).unwrap();
        assert_eq!(cfg.npm_registry(), "foo.bar/path/");
        assert_eq!(cfg.npm_registry_url(), "https://foo.bar/path/");
        // Registry diverges, access does not.
        assert_eq!(cfg.nondefault_access(), None);
        assert_eq!(cfg.nondefault_registry(), Some("https://foo.bar/path/"));
    }

    #[test]
    fn code_artifact_registry_gets_default_aws_secrets() {
        let opts = PackageOptions {
            npm_registry_url: Some(CODEARTIFACT_URL.into()),
            ..PackageOptions::named("my-package")
        };
        let cfg = PublishConfigResolver::resolve(&opts).unwrap();
        assert_eq!(
            cfg.npm_registry(),
            "my-domain-111122223333.d.codeartifact.us-west-2.amazonaws.com/npm/my_repo/"
        );
        assert_eq!(cfg.npm_registry_url(), CODEARTIFACT_URL);
        assert_eq!(cfg.npm_token_secret(), None);

        let ca = cfg.code_artifact().unwrap();
        assert_eq!(ca.access_key_id_secret, "AWS_ACCESS_KEY_ID");
        assert_eq!(ca.secret_access_key_secret, "AWS_SECRET_ACCESS_KEY");
        assert_eq!(ca.role_to_assume, None);
    }

    #[test]
    fn code_artifact_secrets_are_overridable() {
        let opts = PackageOptions {
            npm_registry_url: Some(CODEARTIFACT_URL.into()),
            code_artifact_options: Some(CodeArtifactOptions {
                access_key_id_secret: Some("OTHER_AWS_ACCESS_KEY_ID".into()),
                secret_access_key_secret: Some("OTHER_AWS_SECRET_ACCESS_KEY".into()),
                role_to_assume: None,
            }),
            ..PackageOptions::named("my-package")
        };
        let ca = PublishConfigResolver::resolve(&opts)
            .unwrap()
            .code_artifact()
            .cloned()
            .unwrap();
        assert_eq!(ca.access_key_id_secret, "OTHER_AWS_ACCESS_KEY_ID");
        assert_eq!(ca.secret_access_key_secret, "OTHER_AWS_SECRET_ACCESS_KEY");
    }

    #[test]
    fn code_artifact_role_to_assume_passes_through() {
        let opts = PackageOptions {
            npm_registry_url: Some(CODEARTIFACT_URL.into()),
            code_artifact_options: Some(CodeArtifactOptions {
                role_to_assume: Some("role-arn".into()),
                ..CodeArtifactOptions::default()
            }),
            ..PackageOptions::named("my-package")
        };
        let cfg = PublishConfigResolver::resolve(&opts).unwrap();
        assert_eq!(
            cfg.code_artifact().unwrap().role_to_assume.as_deref(),
            Some("role-arn")
        );
    }

    #[test]
    fn token_secret_conflicts_with_code_artifact() {
        let opts = PackageOptions {
            npm_registry_url: Some(CODEARTIFACT_URL.into()),
            npm_token_secret: Some("INVALID_VALUE".into()),
            ..PackageOptions::named("my-package")
        };
        assert!(matches!(
            PublishConfigResolver::resolve(&opts),
            Err(DomainError::InvalidPublishConfig { .. })
        ));
    }

    #[test]
    fn code_artifact_options_require_a_code_artifact_registry() {
        for ca in [
            CodeArtifactOptions {
                access_key_id_secret: Some("INVALID_AWS_ACCESS_KEY_ID".into()),
                ..CodeArtifactOptions::default()
            },
            CodeArtifactOptions {
                secret_access_key_secret: Some("INVALID_AWS_SECRET_ACCESS_KEY".into()),
                ..CodeArtifactOptions::default()
            },
        ] {
            let opts = PackageOptions {
                code_artifact_options: Some(ca),
                ..PackageOptions::named("my-package")
            };
            assert!(matches!(
                PublishConfigResolver::resolve(&opts),
                Err(DomainError::InvalidPublishConfig { .. })
            ));
        }
    }

    #[test]
    fn deprecated_npm_registry_assumes_https() {
        let opts = PackageOptions {
            npm_registry: Some("foo.bar.com".into()),
            ..PackageOptions::named("scoped@my-package")
        };
        let cfg = PublishConfigResolver::resolve(&opts).unwrap();
        assert_eq!(cfg.npm_registry(), "foo.bar.com");
        assert_eq!(cfg.npm_registry_url(), "https://foo.bar.com/");
        assert_eq!(cfg.nondefault_registry(), Some("https://foo.bar.com/"));
    }

    #[test]
    fn explicit_url_wins_over_deprecated_host() {
        let opts = PackageOptions {
            npm_registry: Some("ignored.example.com".into()),
            npm_registry_url: Some("https://foo.bar/".into()),
            ..PackageOptions::named("my-package")
        };
        let cfg = PublishConfigResolver::resolve(&opts).unwrap();
        assert_eq!(cfg.npm_registry_url(), "https://foo.bar/");
    }

    #[test]
    fn github_registry_defaults_token_to_github_token() {
        let opts = PackageOptions {
            npm_registry_url: Some("https://npm.pkg.github.com".into()),
            ..PackageOptions::named("my-package")
        };
        let cfg = PublishConfigResolver::resolve(&opts).unwrap();
        assert_eq!(cfg.npm_token_secret(), Some("GITHUB_TOKEN"));
    }

    #[test]
    fn host_pattern_rejects_near_misses() {
        // Missing the `.d.` marker or the repo path — not CodeArtifact.
        for url in [
            "https://codeartifact.us-west-2.amazonaws.com/npm/my_repo/",
            "https://my-domain.d.codeartifact.us-west-2.amazonaws.com/",
        ] {
            let opts = PackageOptions {
                npm_registry_url: Some(url.into()),
                ..PackageOptions::named("my-package")
            };
            let cfg = PublishConfigResolver::resolve(&opts).unwrap();
            assert!(cfg.code_artifact().is_none(), "{url}");
        }
    }
}
