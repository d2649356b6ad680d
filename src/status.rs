//! HTTP status code constants
//!
//! Every code in the IANA registry (as of writing) gets a constant here.
//! `306` is reserved and deliberately has none.

/// A single row of the status table, as declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    pub name: &'static str,
    pub code: u16,
    pub reason: &'static str,
}

pub(crate) const RESERVED: u16 = 306;

macro_rules! status_codes {
    ($($name:ident  $value:literal  $reason:literal),* $(,)?) => {
        $(
            #[doc = concat!(stringify!($value), " ", $reason)]
            pub const $name: u16 = $value;
        )*

        // Declaration order matters: a later row for the same code wins
        pub(crate) const ENTRIES: &[StatusEntry] = &[
            $(
                StatusEntry { name: stringify!($name), code: $value, reason: $reason },
            )*
        ];
    }
}

status_codes! {
    // 1xx: Informational
    CONTINUE                            100 "Continue",
    SWITCHING_PROTOCOLS                 101 "Switching Protocols",
    PROCESSING                          102 "Processing",
    CHECKPOINT                          103 "Checkpoint",

    // 2xx: Success
    OK                                  200 "OK",
    CREATED                             201 "Created",
    ACCEPTED                            202 "Accepted",
    NON_AUTHORITATIVE_INFORMATION       203 "Non-Authoritative Information",
    NO_CONTENT                          204 "No Content",
    RESET_CONTENT                       205 "Reset Content",
    PARTIAL_CONTENT                     206 "Partial Content",
    PARTIAL_UPDATE_OK                   207 "Partial Update OK",
    MULTI_STATUS                        207 "Multi-Status",
    ALREADY_REPORTED                    208 "Already Reported",
    IM_USED                             226 "Instance-Manipulation Used",

    // 3xx: Redirection
    MULTIPLE_CHOICES                    300 "Multiple Choices",
    MOVED_PERMANENTLY                   301 "Moved Permanently",
    FOUND                               302 "Found (Moved Temporarily)",
    SEE_OTHER                           303 "See Other",
    NOT_MODIFIED                        304 "Not Modified",
    USE_PROXY                           305 "Use Proxy",
    TEMPORARY_REDIRECT                  307 "Temporary Redirect",
    PERMANENT_REDIRECT                  308 "Permanent Redirect",

    // 4xx: Client Error
    BAD_REQUEST                         400 "Bad Request",
    UNAUTHORIZED                        401 "Unauthorized",
    PAYMENT_REQUIRED                    402 "Payment Required",
    FORBIDDEN                           403 "Forbidden",
    NOT_FOUND                           404 "Not Found",
    METHOD_NOT_ALLOWED                  405 "Method Not Allowed",
    NOT_ACCEPTABLE                      406 "Not Acceptable",
    PROXY_AUTHENTICATION_REQUIRED       407 "Proxy Authentication Required",
    REQUEST_TIMEOUT                     408 "Request Timeout",
    CONFLICT                            409 "Conflict",
    GONE                                410 "Gone",
    LENGTH_REQUIRED                     411 "Length Required",
    PRECONDITION_FAILED                 412 "Precondition Failed",
    PAYLOAD_TOO_LARGE                   413 "Payload Too Large",
    URI_TOO_LONG                        414 "URI Too Long",
    UNSUPPORTED_MEDIA_TYPE              415 "Unsupported Media Type",
    RANGE_NOT_SATISFIABLE               416 "Range Not Satisfiable",
    EXPECTATION_FAILED                  417 "Expectation Failed",
    I_AM_A_TEAPOT                       418 "I'm A Teapot",
    MISDIRECTED_REQUEST                 421 "Misdirected Request",
    UNPROCESSABLE_ENTITY                422 "Unprocessable Entity",
    LOCKED                              423 "Locked",
    FAILED_DEPENDENCY                   424 "Failed Dependency",
    UPGRADE_REQUIRED                    426 "Upgrade Required",
    PRECONDITION_REQUIRED               428 "Precondition Required",
    TOO_MANY_REQUESTS                   429 "Too Many Requests",
    REQUEST_HEADER_FIELDS_TOO_LARGE     431 "Request Header Fields Too Large",
    UNAVAILABLE_FOR_LEGAL_REASONS       451 "Unavailable for Legal Reasons",

    // 5xx: Server Error
    INTERNAL_SERVER_ERROR               500 "Internal Server Error",
    NOT_IMPLEMENTED                     501 "Not Implemented",
    BAD_GATEWAY                         502 "Bad Gateway",
    SERVICE_UNAVAILABLE                 503 "Service Unavailable",
    GATEWAY_TIMEOUT                     504 "Gateway Timeout",
    HTTP_VERSION_NOT_SUPPORTED          505 "HTTP Version Not Supported",
    VARIANT_ALSO_NEGOTIATES             506 "Variant Also Negotiates",
    INSUFFICIENT_STORAGE                507 "Insufficient Storage",
    LOOP_DETECTED                       508 "Loop Detected",
    BANDWIDTH_LIMIT_EXCEEDED            509 "Bandwidth Limit Exceeded",
    NOT_EXTENDED                        510 "Not Extended",
    NETWORK_AUTHENTICATION_REQUIRED     511 "Network Authentication Required",
    NETWORK_CONNECT_TIMEOUT_ERROR       599 "Network Connect Timeout Error",
}
