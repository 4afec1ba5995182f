//! Tool catalog
//!
//! The concrete docker and trivy tool entries: one parameter schema plus one
//! pure argv builder per operation. The catalog is mechanical by design —
//! binding, execution, and result translation are single-sourced in the
//! domain and application layers, so each entry only declares what its
//! wrapped CLI accepts and in which order tokens are emitted.

pub mod docker;
pub mod trivy;

use dockhand_domain::ToolRegistry;

/// Build the full registry of supported tools. Called once at startup; the
/// registry is read-only afterwards.
pub fn default_registry() -> ToolRegistry {
    ToolRegistry::new()
        .register(docker::inspect_entry())
        .register(docker::ps_entry())
        .register(docker::history_entry())
        .register(docker::diff_entry())
        .register(docker::run_entry())
        .register(docker::exec_entry())
        .register(docker::sbom_entry())
        .register(docker::image_list_entry())
        .register(docker::image_inspect_entry())
        .register(docker::image_history_entry())
        .register(docker::search_entry())
        .register(docker::pull_entry())
        .register(docker::commit_entry())
        .register(trivy::image_scan_entry())
}
