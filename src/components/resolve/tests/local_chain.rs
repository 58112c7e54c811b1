use marker::{DependencyMarker, MarkerKind, ResolvedResource};
use resolve::{FlatDirResolver, LocalPathHandler, MarkerHandler, PathResolver, ResolveErrorKind};
use std::fs;

fn local_file(filename: &str) -> DependencyMarker {
    DependencyMarker::LocalFile {
        filename: filename.into(),
    }
}

#[test]
fn flat_dir_resolver_finds_files_under_its_root() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("widgets.jar"), b"jar bytes").unwrap();

    let resolver = FlatDirResolver::new(root.path()).unwrap();

    let resources = resolver.try_resolve("widgets.jar").unwrap();
    assert_eq!(
        resources,
        vec![ResolvedResource::new(root.path().join("widgets.jar"))]
    );

    assert!(resolver.try_resolve("absent.jar").is_none());
}

#[test]
fn flat_dir_resolver_rejects_missing_roots() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("never-created");

    let error = FlatDirResolver::new(&missing).unwrap_err();
    assert!(matches!(
        error.kind,
        ResolveErrorKind::RegistrationRejected { .. }
    ));

    let file = root.path().join("plain-file");
    fs::write(&file, b"not a directory").unwrap();
    assert!(FlatDirResolver::new(&file).is_err());
}

#[test]
fn direct_resolver_wins_over_flat_directories_for_the_same_filename() {
    // Cargo runs tests with the package root as working directory, so the
    // direct resolver can see our own manifest.
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("Cargo.toml"), b"decoy").unwrap();

    let handler = LocalPathHandler::new();
    handler.add_directory(root.path().to_str().unwrap()).unwrap();

    let resources = handler.resolve_marker(&local_file("Cargo.toml")).unwrap();
    assert_eq!(resources.len(), 1);
    assert_ne!(resources[0].path(), root.path().join("Cargo.toml"));
    assert!(resources[0].path().ends_with("Cargo.toml"));
}

#[test]
fn registering_a_directory_resolves_later_lookups_under_it() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("tools.jar"), b"jar bytes").unwrap();

    let handler = LocalPathHandler::new();
    assert_eq!(handler.resolver_count(), 1);

    let registered = handler
        .resolve_marker(&DependencyMarker::DirectoryRepository {
            path: root.path().to_str().unwrap().into(),
        })
        .unwrap();
    assert!(registered.is_empty());
    assert_eq!(handler.resolver_count(), 2);

    let resources = handler.resolve_marker(&local_file("tools.jar")).unwrap();
    assert_eq!(
        resources,
        vec![ResolvedResource::new(root.path().join("tools.jar"))]
    );
}

#[test]
fn exhausting_the_chain_yields_one_unresolved_failure_with_the_marker() {
    let root = tempfile::tempdir().unwrap();

    let handler = LocalPathHandler::new();
    handler.add_directory(root.path().to_str().unwrap()).unwrap();

    let marker = local_file("definitely-absent.jar");
    let error = handler.resolve_marker(&marker).unwrap_err();

    match error.kind {
        ResolveErrorKind::UnresolvedDependency { marker: failed } => {
            assert_eq!(failed, marker);
        }
        other => panic!("expected UnresolvedDependency, got {:?}", other),
    }
}

#[test]
fn blank_filenames_and_blank_directory_paths_are_hard_failures() {
    let handler = LocalPathHandler::new();

    let error = handler.resolve_marker(&local_file("   ")).unwrap_err();
    assert!(matches!(
        error.kind,
        ResolveErrorKind::InvalidMarkerArguments { .. }
    ));

    let error = handler
        .resolve_marker(&DependencyMarker::DirectoryRepository { path: " ".into() })
        .unwrap_err();
    assert!(matches!(
        error.kind,
        ResolveErrorKind::RegistrationRejected { .. }
    ));

    // A failed registration leaves the chain as it was
    assert_eq!(handler.resolver_count(), 1);
}

#[test]
fn declared_kind_order_puts_registration_before_lookup() {
    let handler = LocalPathHandler::new();
    assert_eq!(
        handler.accepted_kinds(),
        &[MarkerKind::DirectoryRepository, MarkerKind::LocalFile]
    );
}
