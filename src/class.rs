use std::fmt;

/// The class of a status code, given by its first digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusClass {
    /// 1xx: Request received, continuing process
    Informational,
    /// 2xx: The action was successfully received, understood, and accepted
    Success,
    /// 3xx: Further action must be taken in order to complete the request
    Redirection,
    /// 4xx: The request contains bad syntax or cannot be fulfilled
    ClientError,
    /// 5xx: The server failed to fulfill an apparently valid request
    ServerError,
}

impl StatusClass {
    /// Returns `None` for codes outside of `100..=599`
    ///
    /// This does not check whether `code` is actually assigned.
    pub fn of(code: u16) -> Option<Self> {
        let class = match code {
            100..=199 => Self::Informational,
            200..=299 => Self::Success,
            300..=399 => Self::Redirection,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => return None,
        };

        Some(class)
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Informational => "Informational",
            Self::Success => "Success",
            Self::Redirection => "Redirection",
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn class_boundaries() {
        assert_eq!(StatusClass::of(99), None);
        assert_eq!(StatusClass::of(100), Some(StatusClass::Informational));
        assert_eq!(StatusClass::of(199), Some(StatusClass::Informational));
        assert_eq!(StatusClass::of(200), Some(StatusClass::Success));
        assert_eq!(StatusClass::of(306), Some(StatusClass::Redirection));
        assert_eq!(StatusClass::of(451), Some(StatusClass::ClientError));
        assert_eq!(StatusClass::of(599), Some(StatusClass::ServerError));
        assert_eq!(StatusClass::of(600), None);
    }

    #[test]
    fn display() {
        assert_eq!(StatusClass::ClientError.to_string(), "Client Error");
        assert_eq!(StatusClass::Success.to_string(), "Success");
    }
}
