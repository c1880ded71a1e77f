//! Integration tests for the lint orchestration pipeline.
//!
//! Drives [`LintRuleSet::lint_paths`] end-to-end over a temporary content
//! tree, with local test rules that observe which thread evaluated them.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::ThreadId;

use asset_lint_core::{
    AssetDescriptor, AssetIndex, AssetIndexError, AssetObject, ClassRegistry, FsAssetIndex,
    LintProgress, LintRule, LintRuleList, LintRuleSet, NamingConventionTable, RuleRef,
    RuleViolation, Severity,
};
use tempfile::TempDir;

/// Test rule that records the thread it was evaluated on.
struct ThreadProbe {
    main_thread: bool,
    severity: Severity,
    seen: Mutex<Vec<ThreadId>>,
}

impl ThreadProbe {
    fn new(main_thread: bool) -> Self {
        Self {
            main_thread,
            severity: Severity::Error,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen_threads(&self) -> Vec<ThreadId> {
        self.seen.lock().expect("probe lock").clone()
    }
}

impl LintRule for ThreadProbe {
    fn name(&self) -> &'static str {
        "thread-probe"
    }
    fn code(&self) -> &'static str {
        "TEST100"
    }
    fn title(&self) -> &'static str {
        "Thread probe"
    }
    fn severity(&self) -> Severity {
        self.severity
    }
    fn requires_main_thread(&self) -> bool {
        self.main_thread
    }

    fn check(&self, asset: &AssetObject, _rule_set: &LintRuleSet) -> Vec<RuleViolation> {
        self.seen
            .lock()
            .expect("probe lock")
            .push(std::thread::current().id());
        vec![RuleViolation::new(self, asset, "Probed")]
    }
}

fn write_manifest(dir: &Path, relative: &str, json: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create dirs");
    }
    std::fs::write(path, json).expect("write manifest");
}

fn texture_content(count: usize) -> TempDir {
    let tmp = TempDir::new().expect("tempdir");
    for i in 0..count {
        write_manifest(
            tmp.path(),
            &format!("Textures/T_Sample{i}.asset.json"),
            r#"{"class": "Texture2D", "texture": {"width": 64, "height": 64}}"#,
        );
    }
    tmp
}

fn rule_set_with(class: &str, rule: RuleRef) -> LintRuleSet {
    let mut rule_set = LintRuleSet::new(
        "pipeline-test",
        ClassRegistry::with_engine_defaults(),
        NamingConventionTable::default(),
    );
    rule_set.set_rules_for_class(class, LintRuleList::new(vec![rule]));
    rule_set
}

#[test]
fn concurrency_eligible_assets_each_get_their_own_thread() {
    let tmp = texture_content(3);
    let probe = Arc::new(ThreadProbe::new(false));
    let rule_set = rule_set_with("Texture2D", probe.clone() as RuleRef);
    let index = FsAssetIndex::new(tmp.path());

    let results = rule_set
        .lint_paths(&index, vec!["/Game".to_string()], None)
        .expect("lint");

    assert_eq!(results.violations.len(), 3);

    let main_id = std::thread::current().id();
    let seen = probe.seen_threads();
    assert_eq!(seen.len(), 3);
    // No worker ran on the orchestrating thread, and no thread was shared:
    // one thread per eligible asset, not a pool.
    assert!(seen.iter().all(|&id| id != main_id));
    let unique: std::collections::HashSet<ThreadId> = seen.iter().copied().collect();
    assert_eq!(unique.len(), 3);
}

#[test]
fn exclusive_thread_rules_run_on_the_orchestrating_thread() {
    let tmp = texture_content(2);
    let probe = Arc::new(ThreadProbe::new(true));
    let rule_set = rule_set_with("Texture2D", probe.clone() as RuleRef);
    let index = FsAssetIndex::new(tmp.path());

    rule_set
        .lint_paths(&index, vec!["/Game".to_string()], None)
        .expect("lint");

    let main_id = std::thread::current().id();
    let seen = probe.seen_threads();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|&id| id == main_id));
}

#[test]
fn empty_path_list_defaults_to_game_root() {
    let tmp = texture_content(1);
    let probe = Arc::new(ThreadProbe::new(false));
    let rule_set = rule_set_with("Texture2D", probe as RuleRef);
    let index = FsAssetIndex::new(tmp.path());

    let results = rule_set.lint_paths(&index, vec![], None).expect("lint");

    assert_eq!(results.paths, vec!["/Game".to_string()]);
    assert_eq!(results.checked_assets.len(), 1);
}

#[test]
fn repeated_passes_yield_identical_counts() {
    let tmp = texture_content(4);
    let probe = Arc::new(ThreadProbe::new(false));
    let rule_set = rule_set_with("Texture2D", probe as RuleRef);
    let index = FsAssetIndex::new(tmp.path());

    let first = rule_set
        .lint_paths(&index, vec!["/Game".to_string()], None)
        .expect("lint");
    let second = rule_set
        .lint_paths(&index, vec!["/Game".to_string()], None)
        .expect("lint");

    assert_eq!(first.errors, second.errors);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.violations.len(), second.violations.len());
    assert_eq!(first.checked_assets, second.checked_assets);
}

#[test]
fn progress_fires_once_per_dispatch_plus_tally() {
    let tmp = texture_content(3);
    let probe = Arc::new(ThreadProbe::new(false));
    let rule_set = rule_set_with("Texture2D", probe as RuleRef);
    let index = FsAssetIndex::new(tmp.path());

    let mut events: Vec<LintProgress> = Vec::new();
    let mut callback = |progress: &LintProgress| events.push(progress.clone());

    rule_set
        .lint_paths(&index, vec!["/Game".to_string()], Some(&mut callback))
        .expect("lint");

    let dispatched = events
        .iter()
        .filter(|e| matches!(e, LintProgress::Dispatched { .. }))
        .count();
    assert_eq!(dispatched, 3);
    assert_eq!(events.last(), Some(&LintProgress::Tallying));
    assert_eq!(events.len(), 4);
}

#[test]
fn assets_without_configured_rules_are_exempt() {
    let tmp = TempDir::new().expect("tempdir");
    write_manifest(
        tmp.path(),
        "Meshes/SM_Rock.asset.json",
        r#"{"class": "StaticMesh"}"#,
    );

    let probe = Arc::new(ThreadProbe::new(false));
    let rule_set = rule_set_with("Texture2D", probe as RuleRef);
    let index = FsAssetIndex::new(tmp.path());

    let results = rule_set
        .lint_paths(&index, vec!["/Game".to_string()], None)
        .expect("lint");

    // Enumerated, but never evaluated and never counted as a failure.
    assert_eq!(results.checked_assets.len(), 1);
    assert!(results.violations.is_empty());
    assert_eq!(results.errors, 0);
}

/// Index that hands out descriptors verbatim, including broken ones.
struct StaticIndex {
    descriptors: Vec<AssetDescriptor>,
}

impl AssetIndex for StaticIndex {
    fn enumerate(&self, _paths: &[String]) -> Result<Vec<AssetDescriptor>, AssetIndexError> {
        Ok(self.descriptors.clone())
    }
}

#[test]
fn unloadable_assets_are_skipped_without_aborting_the_pass() {
    let tmp = texture_content(1);
    let good = FsAssetIndex::new(tmp.path())
        .enumerate(&["/Game".to_string()])
        .expect("enumerate")
        .remove(0);
    let broken = AssetDescriptor {
        object_path: "/Game/T_Gone".to_string(),
        name: "T_Gone".to_string(),
        class: "Texture2D".to_string(),
        source: tmp.path().join("T_Gone.asset.json"),
    };

    let probe = Arc::new(ThreadProbe::new(false));
    let rule_set = rule_set_with("Texture2D", probe as RuleRef);
    let index = StaticIndex {
        descriptors: vec![broken, good],
    };

    let results = rule_set
        .lint_paths(&index, vec!["/Game".to_string()], None)
        .expect("lint");

    // Both assets were enumerated; only the loadable one was evaluated.
    assert_eq!(results.checked_assets.len(), 2);
    assert_eq!(results.violations.len(), 1);
    assert_eq!(results.violations[0].violator.object_path, "/Game/Textures/T_Sample0");
}
