use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a Command against the offline sample collection.
///
/// `XDG_CONFIG_HOME` points into the returned directory so a user config file
/// cannot leak into the test.
fn ladle_cmd() -> (TempDir, Command) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let mut cmd = Command::cargo_bin("ladle").expect("Failed to find ladle binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path())
        .env_remove("LADLE_ENDPOINT")
        .args(["--no-color", "--offline"]);
    (temp_dir, cmd)
}

#[test]
fn test_cli_default_command_lists_collection() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("# Recipe Collection"))
        .stdout(predicate::str::contains("## Pancakes (ID: 1)"))
        .stdout(predicate::str::contains("## Pasta (ID: 3)"));
}

#[test]
fn test_cli_list_filters_locally() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["list", "--category", "breakfast", "--search", "PAN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Category: Breakfast"))
        .stdout(predicate::str::contains("## Pancakes"))
        .stdout(predicate::str::contains("Omelette").not())
        .stdout(predicate::str::contains("Pasta").not());
}

#[test]
fn test_cli_list_no_match() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["list", "--search", "lasagne"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_cli_categories() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Breakfast (`BREAKFAST`)\n- Dinner (`DINNER`)",
        ));
}

#[test]
fn test_cli_browse_category() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["browse", "dinner"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Dinner Recipes"))
        .stdout(predicate::str::contains("## Pasta"))
        .stdout(predicate::str::contains("Pancakes").not());
}

#[test]
fn test_cli_browse_rejects_unknown_category() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["browse", "brunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));
}

#[test]
fn test_cli_show_recipe() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Pancakes"))
        .stdout(predicate::str::contains("- Flour (2 cup)"))
        .stdout(predicate::str::contains(
            "1. Whisk the dry ingredients.\n2. Fold in buttermilk and egg.\n3. Cook on a hot griddle.",
        ));
}

#[test]
fn test_cli_show_not_found() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["show", "99"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Recipe not found (ID: 99)"))
        .stderr(predicate::str::contains("Recipe 99 not found"));
}

#[test]
fn test_cli_add_recipe_then_shows_collection() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args([
        "add",
        "--title",
        "Mint tea",
        "--category",
        "snack",
        "--servings",
        "2",
        "--ingredient",
        "1 handful fresh mint",
        "--ingredient",
        "500 ml water",
        "--step",
        "Boil the water.",
        "--step",
        "Steep the mint.",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Created recipe 'Mint tea' with ID: 4"))
    .stdout(predicate::str::contains("- Ingredients: 2 of 2 attached"))
    .stdout(predicate::str::contains("- Instructions: 2 of 2 attached"))
    .stdout(predicate::str::contains("# Recipe Collection"))
    .stdout(predicate::str::contains("## Mint tea (ID: 4)"));
}

#[test]
fn test_cli_add_concurrent_phases() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args([
        "add",
        "--title",
        "Toast",
        "--category",
        "breakfast",
        "--ingredient",
        "2 slices bread",
        "--step",
        "Toast it.",
        "--concurrent-phases",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("- Instructions: 1 of 1 attached"));
}

#[test]
fn test_cli_add_requires_category() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["add", "--title", "Nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create recipe"))
        .stderr(predicate::str::contains("category"));
}

#[test]
fn test_cli_add_rejects_bad_servings() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["add", "--title", "Soup", "--category", "lunch", "--servings", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("servings"));
}

#[test]
fn test_cli_delete_with_yes() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted recipe 'Pancakes' (ID: 1)"))
        .stdout(predicate::str::contains("## Omelette"))
        .stdout(predicate::str::contains("## Pancakes").not());
}

#[test]
fn test_cli_delete_declined_on_stdin() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled."))
        .stdout(predicate::str::contains("Success").not())
        .stderr(predicate::str::contains(
            "Are you sure you want to delete this recipe?",
        ));
}

#[test]
fn test_cli_delete_accepted_on_stdin() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["delete", "2"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted recipe 'Omelette' (ID: 2)"));
}

#[test]
fn test_cli_delete_missing_recipe() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["delete", "42", "--yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Recipe not found (ID: 42)"));
}

#[test]
fn test_cli_zero_timeout_rejected() {
    let (_temp_dir, mut cmd) = ladle_cmd();
    cmd.args(["--timeout", "0", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize client"));
}

#[test]
fn test_cli_invalid_config_file() {
    let (temp_dir, mut cmd) = ladle_cmd();
    let config_path = temp_dir.path().join("broken.json");
    std::fs::write(&config_path, "{ nope").expect("Failed to write config");

    cmd.arg("--config")
        .arg(&config_path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_cli_unreachable_server_reports_hint() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let mut cmd = Command::cargo_bin("ladle").expect("Failed to find ladle binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path())
        .args([
            "--no-color",
            "--timeout",
            "2",
            "--endpoint",
            "http://127.0.0.1:9/graphql",
            "list",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("# Error Loading Recipes"))
        .stdout(predicate::str::contains(
            "Please make sure the GraphQL server is running at http://127.0.0.1:9/graphql",
        ));
}
