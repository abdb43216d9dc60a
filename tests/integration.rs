// Integration testing drives the CLI as a subprocess against a scratch
// working directory.
use assert_cmd::Command;

fn mernforge(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mernforge").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn generates_the_default_tree() {
    let dir = tempfile::tempdir().unwrap();

    mernforge(&dir)
        .arg("blog")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Project structure generated successfully!",
        ));

    let root = dir.path().join("blog");
    assert!(root.join("client/src/App.jsx").is_file());
    assert!(root.join("server/src/server.js").is_file());
    assert!(root.join("shared/constants/appConstants.js").is_file());
    assert!(root.join("README.md").is_file());
    assert!(!root.join("client/tsconfig.json").exists());
    assert!(!root.join("docker-compose.yml").exists());
}

#[test]
fn typescript_flag_switches_the_client_sources() {
    let dir = tempfile::tempdir().unwrap();

    mernforge(&dir).arg("blog").arg("--typescript").assert().success();

    let root = dir.path().join("blog");
    assert!(root.join("client/src/App.tsx").is_file());
    assert!(!root.join("client/src/App.jsx").exists());
    assert!(root.join("client/tsconfig.json").is_file());
}

#[test]
fn redux_and_docker_flags_add_their_files() {
    let dir = tempfile::tempdir().unwrap();

    mernforge(&dir)
        .arg("blog")
        .arg("--redux")
        .arg("--docker")
        .assert()
        .success();

    let root = dir.path().join("blog");
    assert!(root.join("client/src/store/store.js").is_file());
    assert!(root.join("client/src/store/slices/authSlice.js").is_file());
    assert!(root.join("docker-compose.yml").is_file());
}

#[test]
fn missing_project_name_exits_one_without_writing() {
    let dir = tempfile::tempdir().unwrap();

    mernforge(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Please provide a project name"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn root_manifest_embeds_the_project_name() {
    let dir = tempfile::tempdir().unwrap();

    mernforge(&dir).arg("my-blog").assert().success();

    let manifest =
        std::fs::read_to_string(dir.path().join("my-blog/package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"my-blog\""));
}
