use super::*;

fn plugin(package: &str, app: &str, version: &str) -> PluginMetadata {
    PluginMetadata {
        package_name: package.to_string(),
        version: version.to_string(),
        entry_points: vec![app.to_string()],
    }
}

#[test]
fn test_rows_use_command_name_and_version() {
    let rows = rows(&[plugin("host-plugin1", "plugin1.exe", "1.0.0")]).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.as_str(), "plugin1");
    assert_eq!(rows[0].1, "1.0.0");
}

#[test]
fn test_table_has_header_and_rows() {
    let table = build_table(&[
        plugin("forge-plugin1", "plugin1.exe", "1.0.0"),
        plugin("forge-plugin2", "plugin2", "0.0.1"),
    ])
    .unwrap()
    .to_string();

    assert!(table.contains("plugin"));
    assert!(table.contains("version"));
    assert!(table.contains("plugin1"));
    assert!(table.contains("1.0.0"));
    assert!(table.contains("plugin2"));
    assert!(table.contains("0.0.1"));
    assert!(!table.contains(".exe"));
}

#[test]
fn test_missing_entry_point_fails_table() {
    let broken = PluginMetadata {
        package_name: "forge-broken".to_string(),
        version: "1".to_string(),
        entry_points: Vec::new(),
    };
    assert!(build_table(&[broken]).is_err());
}
