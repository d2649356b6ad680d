use crate::class::StatusClass;
use crate::error::Error;
use crate::input::{CodeInput, Exact};
use crate::status::{self, StatusEntry, ENTRIES};
use convert_case::{Case, Casing};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Reference table of HTTP status codes and their reason phrases
///
/// The table is filled once by [`StatusRegistry::new`] and never changes afterwards, so a registry
/// can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct StatusRegistry {
    reasons: BTreeMap<u16, &'static str>,
}

impl Default for StatusRegistry {
    fn default() -> Self {
        let mut reasons = BTreeMap::new();

        for entry in ENTRIES {
            reasons.insert(entry.code, entry.reason);
        }

        log::trace!(entries = reasons.len(); "Built status registry");

        Self { reasons }
    }
}

impl StatusRegistry {
    /// Builds a registry holding every assigned status code
    pub fn new() -> Self {
        Self::default()
    }

    /// A process-wide registry, built on first use
    pub fn global() -> &'static StatusRegistry {
        static REGISTRY: OnceLock<StatusRegistry> = OnceLock::new();
        REGISTRY.get_or_init(StatusRegistry::new)
    }

    /// Returns the reason phrase for `code`
    ///
    /// The input must be exactly an integer: `"200"` and `200.0` are accepted, `"200 OK"` and
    /// `200.5` are not.
    ///
    /// ```
    /// use status_registry::{status, Error, StatusRegistry};
    ///
    /// let registry = StatusRegistry::new();
    ///
    /// assert_eq!(registry.get_reason(status::NOT_FOUND), Ok("Not Found"));
    /// assert_eq!(registry.get_reason("418"), Ok("I'm A Teapot"));
    /// assert_eq!(registry.get_reason(306), Err(Error::ReservedCode(306)));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCode`] if the input is not an integer
    /// - [`Error::ReservedCode`] for `306`
    /// - [`Error::UnassignedCode`] for any other code missing from the table
    pub fn get_reason<'a>(&self, code: impl Into<CodeInput<'a>>) -> Result<&'static str, Error> {
        let code = self.guard_code(code.into())?;

        self.reasons
            .get(&code)
            .copied()
            .ok_or_else(|| Error::UnassignedCode(code.to_string()))
    }

    /// Whether `code` falls within `200..=299`
    ///
    /// Unlike [`StatusRegistry::get_reason`], this never fails. Only the leading integer of the
    /// input is considered, and the code does not need to be assigned. Anything that cannot be read
    /// as an integer is not a success.
    pub fn is_success<'a>(&self, code: impl Into<CodeInput<'a>>) -> bool {
        matches!(code.into().leading_integer(), Some(200..=299))
    }

    /// The class of `code`, read the same lenient way as [`StatusRegistry::is_success`]
    pub fn class<'a>(&self, code: impl Into<CodeInput<'a>>) -> Option<StatusClass> {
        let code = code.into().leading_integer()?;
        u16::try_from(code).ok().and_then(StatusClass::of)
    }

    /// Looks up a code by its symbolic name
    ///
    /// The name may be written in any common case: `NOT_FOUND`, `not_found`, `NotFound` and
    /// `not-found` all resolve to `404`.
    pub fn code(&self, name: &str) -> Option<u16> {
        let name = name.to_case(Case::UpperSnake);

        ENTRIES
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.code)
    }

    /// All symbolic names and their codes, in declaration order
    ///
    /// `207` shows up twice, once as `PARTIAL_UPDATE_OK` and once as `MULTI_STATUS`.
    pub fn codes(&self) -> impl Iterator<Item = (&'static str, u16)> {
        ENTRIES.iter().map(|entry| (entry.name, entry.code))
    }

    /// The table as declared, including entries that were superseded by a later alias
    pub fn entries(&self) -> impl Iterator<Item = StatusEntry> {
        ENTRIES.iter().copied()
    }

    fn guard_code(&self, input: CodeInput) -> Result<u16, Error> {
        let code = match input.exact_integer() {
            Some(Exact::Integer(code)) => code,
            Some(Exact::OutOfRange) => {
                log::debug!(input:% = input; "Rejected out of range status code");
                return Err(Error::UnassignedCode(input.to_string()));
            }
            None => {
                log::debug!(input:% = input; "Rejected malformed status code");
                return Err(Error::InvalidCode(input.to_string()));
            }
        };

        if code == i128::from(status::RESERVED) {
            log::debug!(code:% = code; "Rejected reserved status code");
            return Err(Error::ReservedCode(status::RESERVED));
        }

        match u16::try_from(code) {
            Ok(code) if self.reasons.contains_key(&code) => Ok(code),
            _ => {
                log::debug!(code:% = code; "Rejected unassigned status code");
                Err(Error::UnassignedCode(code.to_string()))
            }
        }
    }
}
