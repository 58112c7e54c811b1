/// A remote repository location usable for artifact-coordinate lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repository {
    url: String,
    id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepositoryUrlError {
    Blank,
    MissingScheme { url: String },
    BadScheme { url: String },
}

impl Repository {
    /// Accepts a syntactically valid absolute URL. Whether the repository
    /// is actually reachable is decided much later, by the fetcher.
    pub fn parse(url: &str, id: Option<&str>) -> Result<Self, RepositoryUrlError> {
        let url = url.trim();

        if url.is_empty() {
            return Err(RepositoryUrlError::Blank);
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            return Err(RepositoryUrlError::MissingScheme { url: url.into() });
        };

        if scheme.is_empty()
            || rest.is_empty()
            || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
            || !scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        {
            return Err(RepositoryUrlError::BadScheme { url: url.into() });
        }

        Ok(Self {
            url: url.into(),
            id: id.map(str::trim).filter(|id| !id.is_empty()).map(Into::into),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} ({})", self.url, id),
            None => f.write_str(&self.url),
        }
    }
}

impl std::fmt::Display for RepositoryUrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => f.write_str("repository URL is blank"),
            Self::MissingScheme { url } => {
                write!(f, "repository URL '{}' has no scheme", url)
            }
            Self::BadScheme { url } => {
                write!(f, "repository URL '{}' has a malformed scheme", url)
            }
        }
    }
}
