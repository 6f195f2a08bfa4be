/// The error type for requests to the Scryfall API.
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be sent, or no response arrived.
    Transport(reqwest::Error),
    /// A response arrived, but its body was not the expected JSON.
    Decode(reqwest::Error),
    /// Scryfall answered with an error object.
    Api {
        status: u16,
        code: String,
        details: String,
    },
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(err) | FetchError::Decode(err) => Some(err),
            FetchError::Api { .. } => None,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(_) => write!(f, "Could not reach the Scryfall API"),
            FetchError::Decode(_) => write!(f, "Could not understand the Scryfall response"),
            FetchError::Api {
                status,
                code,
                details,
            } => write!(f, "Scryfall returned {} ({}): {}", code, status, details),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err)
        } else {
            FetchError::Transport(err)
        }
    }
}
