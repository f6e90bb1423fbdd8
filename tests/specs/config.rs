//! Access configuration wiring: the bypass knob travels from file to policy.

use campus_core::authz::AdminBypass;
use campus_core::config::AccessConfig;

#[test]
fn a_config_file_selects_the_bypass_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("access.toml");
    std::fs::write(&path, "admin_bypass = true\n").unwrap();

    let config = AccessConfig::load(&path).unwrap();
    assert_eq!(config.ownership_policy().admin_bypass, AdminBypass::Enabled);
}

#[test]
fn the_shipped_default_is_no_bypass() {
    let policy = AccessConfig::default().ownership_policy();
    assert_eq!(policy.admin_bypass, AdminBypass::Disabled);
}
