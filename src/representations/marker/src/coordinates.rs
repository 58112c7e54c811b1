/// Parsed `group:artifact:version` or `group:artifact:classifier:version`
/// coordinates. Every segment must be non-blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinates {
    group: String,
    artifact: String,
    classifier: Option<String>,
    version: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoordinatesError {
    WrongSegmentCount { text: String, count: usize },
    BlankSegment { text: String, index: usize },
}

impl ArtifactCoordinates {
    pub fn parse(text: &str) -> Result<Self, CoordinatesError> {
        let segments: Vec<&str> = text.split(':').collect();

        if !(3..=4).contains(&segments.len()) {
            return Err(CoordinatesError::WrongSegmentCount {
                text: text.into(),
                count: segments.len(),
            });
        }

        if let Some(index) = segments.iter().position(|segment| segment.trim().is_empty()) {
            return Err(CoordinatesError::BlankSegment {
                text: text.into(),
                index,
            });
        }

        Ok(match segments.as_slice() {
            [group, artifact, version] => Self {
                group: (*group).into(),
                artifact: (*artifact).into(),
                classifier: None,
                version: (*version).into(),
            },
            [group, artifact, classifier, version] => Self {
                group: (*group).into(),
                artifact: (*artifact).into(),
                classifier: Some((*classifier).into()),
                version: (*version).into(),
            },
            _ => unreachable!("segment count was checked above"),
        })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)?;

        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }

        write!(f, ":{}", self.version)
    }
}

impl std::fmt::Display for CoordinatesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongSegmentCount { text, count } => write!(
                f,
                "'{}' has {} colon-separated segment{}, expected group:artifact:version or group:artifact:classifier:version",
                text,
                count,
                if *count == 1 { "" } else { "s" },
            ),
            Self::BlankSegment { text, index } => {
                write!(f, "'{}' has a blank segment at position {}", text, index + 1)
            }
        }
    }
}
