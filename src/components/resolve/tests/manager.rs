use diagnostics::Reporter;
use engine_api::{ArtifactFetcher, ClasspathProbe, FetchError};
use marker::{
    ArtifactCoordinates, DependencyMarker, MarkerKind, Repository, ResolvedResource,
};
use resolve::{
    ArtifactHandler, DEFAULT_REPOSITORY_URL, LocalPathHandler, ResolutionManager,
    ResolveErrorKind,
};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Remembers every fetch request and answers with one fake jar per
/// artifact.
#[derive(Default)]
struct RecordingFetcher {
    calls: Mutex<Vec<(ArtifactCoordinates, Vec<Repository>)>>,
}

impl RecordingFetcher {
    fn calls(&self) -> Vec<(ArtifactCoordinates, Vec<Repository>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ArtifactFetcher for RecordingFetcher {
    fn fetch(
        &self,
        coordinates: &ArtifactCoordinates,
        repositories: &[Repository],
    ) -> Result<Vec<ResolvedResource>, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((coordinates.clone(), repositories.to_vec()));

        Ok(vec![ResolvedResource::new(PathBuf::from(format!(
            "/cache/{}/{}-{}.jar",
            coordinates.group(),
            coordinates.artifact(),
            coordinates.version()
        )))])
    }
}

struct FailingFetcher {
    message: &'static str,
}

impl ArtifactFetcher for FailingFetcher {
    fn fetch(
        &self,
        coordinates: &ArtifactCoordinates,
        _repositories: &[Repository],
    ) -> Result<Vec<ResolvedResource>, FetchError> {
        Err(FetchError {
            coordinates: coordinates.clone(),
            message: self.message.into(),
        })
    }
}

struct PanickingFetcher;

impl ArtifactFetcher for PanickingFetcher {
    fn fetch(
        &self,
        _coordinates: &ArtifactCoordinates,
        _repositories: &[Repository],
    ) -> Result<Vec<ResolvedResource>, FetchError> {
        panic!("fetcher must not be reached");
    }
}

/// Maps every marker kind to a deterministic defining location.
struct FixedProbe;

impl ClasspathProbe for FixedProbe {
    fn defining_location(&self, kind: MarkerKind) -> Option<ResolvedResource> {
        Some(ResolvedResource::new(PathBuf::from(format!(
            "/markers/{kind}.jar"
        ))))
    }
}

struct EmptyProbe;

impl ClasspathProbe for EmptyProbe {
    fn defining_location(&self, _kind: MarkerKind) -> Option<ResolvedResource> {
        None
    }
}

fn artifact(coordinates: &str) -> DependencyMarker {
    DependencyMarker::Artifact {
        coordinates: coordinates.into(),
    }
}

fn remote_repo(url: &str) -> DependencyMarker {
    DependencyMarker::RemoteRepository {
        url: url.into(),
        id: None,
    }
}

fn manager_with(
    fetcher: Arc<dyn ArtifactFetcher>,
    probe: Arc<dyn ClasspathProbe>,
) -> ResolutionManager {
    ResolutionManager::new(
        vec![
            Arc::new(LocalPathHandler::new()),
            Arc::new(ArtifactHandler::new(fetcher)),
        ],
        probe,
    )
}

#[test]
fn repository_registration_is_visible_to_a_later_marker_in_the_batch() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let manager = manager_with(fetcher.clone(), Arc::new(EmptyProbe));

    manager
        .resolve(
            &[
                remote_repo("https://repo.example.org/releases"),
                artifact("org.example:widgets:1.0"),
            ],
            false,
        )
        .unwrap();

    let calls = fetcher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1.len(), 1);
    assert_eq!(calls[0].1[0].url(), "https://repo.example.org/releases");
}

#[test]
fn kind_priority_registers_the_repository_even_when_submitted_last() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let manager = manager_with(fetcher.clone(), Arc::new(EmptyProbe));

    // Submitted coordinate-first; the handler declares remote-repo ahead
    // of artifact-coordinate, so registration still runs first.
    manager
        .resolve(
            &[
                artifact("org.example:widgets:1.0"),
                remote_repo("https://repo.example.org/releases"),
            ],
            false,
        )
        .unwrap();

    let calls = fetcher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1[0].url(), "https://repo.example.org/releases");
}

#[test]
fn cross_handler_order_follows_handler_registration_order() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("local.jar"), b"jar bytes").unwrap();

    let fetcher = Arc::new(RecordingFetcher::default());
    let manager = manager_with(fetcher.clone(), Arc::new(EmptyProbe));

    // Artifact submitted first, but the local handler was registered
    // first, so the local file leads the outcome classpath.
    let outcome = manager
        .resolve(
            &[
                artifact("org.example:widgets:1.0"),
                DependencyMarker::LocalFile {
                    filename: root.path().join("local.jar").to_str().unwrap().into(),
                },
            ],
            false,
        )
        .unwrap();

    assert_eq!(outcome.classpath().len(), 2);
    assert!(outcome.classpath()[0].path().ends_with("local.jar"));
    assert!(outcome.classpath()[1].path().ends_with("widgets-1.0.jar"));
}

#[test]
fn default_repository_is_used_until_an_explicit_one_exists() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let manager = manager_with(fetcher.clone(), Arc::new(EmptyProbe));

    manager
        .resolve(&[artifact("org.example:widgets:1.0")], false)
        .unwrap();

    manager
        .resolve(
            &[
                remote_repo("https://repo.example.org/releases"),
                artifact("org.example:widgets:2.0"),
            ],
            false,
        )
        .unwrap();

    let calls = fetcher.calls();
    assert_eq!(calls.len(), 2);

    // Before any registration: exactly the well-known default
    assert_eq!(calls[0].1.len(), 1);
    assert_eq!(calls[0].1[0].url(), DEFAULT_REPOSITORY_URL);

    // After: the default is no longer additive
    assert_eq!(calls[1].1.len(), 1);
    assert_eq!(calls[1].1[0].url(), "https://repo.example.org/releases");
}

#[test]
fn malformed_coordinates_fail_before_the_fetcher_is_reached() {
    let manager = manager_with(Arc::new(PanickingFetcher), Arc::new(EmptyProbe));

    let error = manager
        .resolve(&[artifact("groupOnly")], false)
        .unwrap_err();

    assert!(matches!(
        error.kind,
        ResolveErrorKind::InvalidMarkerArguments { .. }
    ));
}

#[test]
fn unknown_marker_kinds_fail_hard() {
    let manager = ResolutionManager::new(
        vec![Arc::new(LocalPathHandler::new())],
        Arc::new(EmptyProbe),
    );

    let error = manager
        .resolve(&[artifact("org.example:widgets:1.0")], false)
        .unwrap_err();

    assert!(matches!(
        error.kind,
        ResolveErrorKind::UnknownMarkerKind {
            kind: MarkerKind::Artifact
        }
    ));
}

#[test]
fn first_resolution_contributes_imports_and_defining_classpath_once() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let manager = ResolutionManager::new(
        vec![
            Arc::new(LocalPathHandler::new().with_imports(["scripting.markers.*"])),
            Arc::new(
                ArtifactHandler::new(fetcher.clone())
                    .with_imports(["scripting.artifacts.*"]),
            ),
        ],
        Arc::new(FixedProbe),
    );

    let first = manager
        .resolve(&[artifact("org.example:widgets:1.0")], true)
        .unwrap();

    assert_eq!(
        first.imports(),
        &["scripting.markers.*".to_string(), "scripting.artifacts.*".to_string()]
    );

    // Per-marker result first, then one defining location per accepted kind
    let classpath: Vec<&std::path::Path> =
        first.classpath().iter().map(ResolvedResource::path).collect();
    assert!(classpath[0].ends_with("widgets-1.0.jar"));
    assert!(classpath.contains(&std::path::Path::new("/markers/local-file.jar")));
    assert!(classpath.contains(&std::path::Path::new("/markers/remote-repo.jar")));
    assert_eq!(classpath.len(), 5);

    let second = manager
        .resolve(&[artifact("org.example:gadgets:2.0")], false)
        .unwrap();

    assert!(second.imports().is_empty());
    assert_eq!(second.classpath().len(), 1);
    assert!(second.classpath()[0].path().ends_with("gadgets-2.0.jar"));
}

#[test]
fn classpath_and_imports_deduplicate_in_first_appearance_order() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let manager = manager_with(fetcher, Arc::new(EmptyProbe));

    let outcome = manager
        .resolve(
            &[
                artifact("org.example:widgets:1.0"),
                artifact("org.example:widgets:1.0"),
            ],
            false,
        )
        .unwrap();

    assert_eq!(outcome.classpath().len(), 1);
}

#[test]
fn fetch_failures_route_to_the_reporter_when_one_is_installed() {
    let reporter = Arc::new(Reporter::collecting());
    let handler = ArtifactHandler::new(Arc::new(FailingFetcher {
        message: "repository unreachable",
    }))
    .with_reporter(reporter.clone());

    let manager = ResolutionManager::new(vec![Arc::new(handler)], Arc::new(EmptyProbe));

    let outcome = manager
        .resolve(&[artifact("org.example:widgets:1.0")], false)
        .unwrap();

    assert!(outcome.classpath().is_empty());

    let messages = reporter.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("repository unreachable"));
}

#[test]
fn fetch_failures_are_hard_without_a_reporter() {
    let handler = ArtifactHandler::new(Arc::new(FailingFetcher {
        message: "repository unreachable",
    }));
    let manager = ResolutionManager::new(vec![Arc::new(handler)], Arc::new(EmptyProbe));

    let error = manager
        .resolve(&[artifact("org.example:widgets:1.0")], false)
        .unwrap_err();

    match error.kind {
        ResolveErrorKind::FetchFailed { repositories, .. } => {
            assert_eq!(repositories, vec![DEFAULT_REPOSITORY_URL.to_string()]);
        }
        other => panic!("expected FetchFailed, got {:?}", other),
    }
}
