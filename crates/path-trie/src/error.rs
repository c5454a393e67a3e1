/// Errors raised while building a route table
///
/// Every variant is a configuration mistake: it surfaces from
/// [`Router::define`](crate::Router::define) at registration time and should
/// stop the host application from starting with a broken table.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The pattern (or a looked-up path) does not begin with `/`
    #[error("path must start with '/': {0:?}")]
    MissingLeadingSlash(String),

    /// A fragment matches none of the segment grammars
    #[error("invalid fragment: {0:?}")]
    InvalidFragment(String),

    /// A parenthesized fragment is not a valid regular expression
    #[error("invalid regex in fragment {fragment:?}")]
    InvalidRegex {
        fragment: String,
        #[source]
        source: regex::Error,
    },
}
