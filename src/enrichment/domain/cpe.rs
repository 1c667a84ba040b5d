use crate::shared::error::CpeError;

/// Prefix of the loose CPE form emitted by scanners such as nmap.
const LEGACY_PREFIX: &str = "cpe:/";

/// Prefix of the strict CPE 2.3 form accepted by the NVD API.
const STRICT_PREFIX: &str = "cpe:2.3:";

/// Number of data fields after `cpe:2.3:` in the strict form.
const FIELD_COUNT: usize = 11;

/// Total colon-separated tokens in the strict form (`cpe`, `2.3`, 11 fields).
const TOKEN_COUNT: usize = 13;

/// Converts a loose scanner CPE (`cpe:/...`) into the strict CPE 2.3 form.
///
/// The output always has exactly 11 fields after the `cpe:2.3:` prefix:
/// missing trailing fields are padded with `*`, surplus fields are
/// discarded. The input must carry at least part, vendor, product and
/// version; a CPE naming only a product without a version is rejected.
///
/// Pure string transformation, no network or side effects.
pub fn normalize_legacy(cpe: &str) -> Result<String, CpeError> {
    let Some(rest) = cpe.strip_prefix(LEGACY_PREFIX) else {
        return Err(CpeError::MissingLegacyPrefix {
            cpe: cpe.to_string(),
        });
    };

    let mut fields: Vec<&str> = rest.split(':').collect();
    if fields.len() < 4 {
        return Err(CpeError::TooShort {
            cpe: cpe.to_string(),
        });
    }

    // Some scanners emit the part field as "/o" instead of "o".
    if let Some(stripped) = fields[0].strip_prefix('/') {
        fields[0] = stripped;
    }

    fields.truncate(FIELD_COUNT);
    while fields.len() < FIELD_COUNT {
        fields.push("*");
    }

    Ok(format!("{}{}", STRICT_PREFIX, fields.join(":")))
}

/// A structurally valid CPE 2.3 name usable as an NVD lookup key.
///
/// A `Cpe` can only be obtained through [`Cpe::parse`] or
/// [`Cpe::from_legacy`], so holding one proves the identifier has 13
/// colon-separated tokens, the `cpe`/`2.3` header, and concrete part,
/// vendor, product and version fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpe(String);

impl Cpe {
    /// Validates a strict CPE 2.3 string.
    ///
    /// The lookup key must name a concrete part, vendor, product and
    /// version; the remaining fields (update through other) may hold any
    /// value, wildcard included.
    ///
    /// # Errors
    /// Returns a [`CpeError`] describing the first structural violation.
    pub fn parse(value: impl Into<String>) -> Result<Self, CpeError> {
        let value = value.into();
        let tokens: Vec<&str> = value.split(':').collect();

        if tokens.len() != TOKEN_COUNT {
            return Err(CpeError::TokenCount {
                count: tokens.len(),
            });
        }
        if tokens[0] != "cpe" {
            return Err(CpeError::Scheme {
                found: tokens[0].to_string(),
            });
        }
        if tokens[1] != "2.3" {
            return Err(CpeError::CpeVersion {
                found: tokens[1].to_string(),
            });
        }

        const CONCRETE_FIELDS: [(usize, &str); 4] =
            [(2, "part"), (3, "vendor"), (4, "product"), (5, "version")];
        for (index, name) in CONCRETE_FIELDS {
            if tokens[index] == "*" {
                return Err(CpeError::WildcardComponent { component: name });
            }
        }

        Ok(Self(value))
    }

    /// Normalizes a legacy scanner CPE and validates the result.
    pub fn from_legacy(cpe: &str) -> Result<Self, CpeError> {
        Self::parse(normalize_legacy(cpe)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cpe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
