//! Contract tests run against every file-manager implementation.
//!
//! Any store implementing the capability must behave identically from the
//! caller's side, whether it is backed by the local disk or by memory.

use runtime_file_manager::{FileManager, FileManagerError, LocalFileManager, MemoryFileManager};
use tempfile::TempDir;

async fn contract_store_read_back<M: FileManager>(manager: &M) {
    manager.store("a/b/c.txt", b"payload").await.unwrap();
    assert_eq!(manager.get_content("a/b/c.txt").await.unwrap(), b"payload");
}

async fn contract_missing_file_names_logical_filename<M: FileManager>(manager: &M) {
    let err = manager.get_content("ghost/file.txt").await.unwrap_err();
    assert!(matches!(err, FileManagerError::FileNotFound(_)));
    let message = err.to_string();
    assert!(message.contains("ghost/file.txt"));
    let root_display = manager.root_location().display().to_string();
    assert!(!message.contains(&root_display));
}

async fn contract_remove_is_idempotent<M: FileManager>(manager: &M) {
    manager.store("victim.txt", b"x").await.unwrap();
    manager.remove("victim.txt").await.unwrap();
    manager.remove("victim.txt").await.unwrap();
}

async fn contract_copy_preserves_content<M: FileManager>(manager: &M) {
    manager.store("orig.bin", b"\xde\xad").await.unwrap();
    manager.copy("orig.bin", "copy.bin").await.unwrap();
    manager.remove("orig.bin").await.unwrap();
    assert_eq!(manager.get_content("copy.bin").await.unwrap(), b"\xde\xad");
}

async fn contract_copy_missing_source_fails<M: FileManager>(manager: &M) {
    assert!(manager.copy("missing.bin", "dst.bin").await.is_err());
}

async fn contract_load_record<M: FileManager>(manager: &M) {
    manager.store("pkg/app.js", b"export {}").await.unwrap();
    let record = manager.load("pkg/app.js").await.unwrap();
    assert_eq!(record.filename, "pkg/app.js");
    assert_eq!(record.content_type, "application/javascript");
    assert_eq!(record.content, b"export {}");
}

async fn contract_discovery_by_suffix<M: FileManager>(manager: &M) {
    manager.store("x.segment.local.js", b"").await.unwrap();
    manager.store("x.segment.repository.js", b"").await.unwrap();
    manager.store("plain.js", b"").await.unwrap();

    let relative = |paths: Vec<std::path::PathBuf>| {
        let mut names: Vec<String> = paths.iter().map(|p| manager.relative_location(p)).collect();
        names.sort();
        names
    };

    let node = manager.get_node_segment_files().await.unwrap();
    assert_eq!(relative(node), vec!["x.segment.local.js"]);

    let repository = manager.get_repository_segment_files().await.unwrap();
    assert_eq!(relative(repository), vec!["x.segment.repository.js"]);

    let modules = manager.get_module_file_names().await.unwrap();
    assert_eq!(
        relative(modules),
        vec!["plain.js", "x.segment.local.js", "x.segment.repository.js"]
    );
}

async fn contract_assets_exclude_generated_variants<M: FileManager>(manager: &M) {
    manager.store("logo.png", b"").await.unwrap();
    manager.store("logo.local.png", b"").await.unwrap();

    let assets = manager
        .get_asset_files(&["**/*.png".to_string()])
        .await
        .unwrap();
    assert_eq!(assets, vec!["logo.png"]);
}

async fn run_contract<M: FileManager>(manager: &M) {
    contract_store_read_back(manager).await;
    contract_missing_file_names_logical_filename(manager).await;
    contract_remove_is_idempotent(manager).await;
    contract_copy_preserves_content(manager).await;
    contract_copy_missing_source_fails(manager).await;
    contract_load_record(manager).await;
    contract_assets_exclude_generated_variants(manager).await;
}

#[tokio::test]
async fn test_local_manager_honors_contract() {
    let root = TempDir::new().unwrap();
    let manager = LocalFileManager::new(root.path()).unwrap();
    run_contract(&manager).await;
}

#[tokio::test]
async fn test_local_manager_discovery_contract() {
    let root = TempDir::new().unwrap();
    let manager = LocalFileManager::new(root.path()).unwrap();
    contract_discovery_by_suffix(&manager).await;
}

#[tokio::test]
async fn test_memory_manager_honors_contract() {
    let manager = MemoryFileManager::new("/virtual/root");
    run_contract(&manager).await;
}

#[tokio::test]
async fn test_memory_manager_discovery_contract() {
    let manager = MemoryFileManager::new("/virtual/root");
    contract_discovery_by_suffix(&manager).await;
}
