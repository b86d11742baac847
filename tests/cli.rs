use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn converts_stdin_with_defaults() {
    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.write_stdin(r#"{"user":{"name":"Ada"}}"#);

    cmd.assert().success().stdout(
        "interface User {\n  name: string;\n}\n\ninterface Root {\n  user: User;\n}\n",
    );
}

#[test]
fn flags_shape_the_output() {
    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.args(["--root-name", "Payload", "--type-alias", "--optional", "--export", "-"]);
    cmd.write_stdin(r#"{"id":1}"#);

    cmd.assert()
        .success()
        .stdout("export type Payload = {\n  id?: number;\n};\n");
}

#[test]
fn options_file_supplies_the_whole_record() {
    let dir = tempfile::tempdir().unwrap();
    let options = write_fixture(
        &dir,
        "options.json",
        r#"{"rootName":"Api","useInterface":true,"optionalProperties":false,"addExport":true}"#,
    );
    let input = write_fixture(&dir, "input.json", "[]");

    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.args(["--options", options.to_str().unwrap(), input.to_str().unwrap()]);

    cmd.assert().success().stdout("export type Api = unknown[];\n");
}

#[test]
fn incomplete_options_file_names_the_problem() {
    let dir = tempfile::tempdir().unwrap();
    let options = write_fixture(&dir, "options.json", r#"{"rootName":"Api"}"#);

    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.args(["--options", options.to_str().unwrap()]);
    cmd.write_stdin("{}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid options file"));
}

#[test]
fn schema_error_exits_nonzero() {
    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.write_stdin("123");

    cmd.assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Input must be a JSON object or array"));
}

#[test]
fn result_json_reports_failures_as_records() {
    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.arg("--result-json");
    cmd.write_stdin("null");

    cmd.assert().failure().stdout(
        "{\n  \"success\": false,\n  \"output\": \"\",\n  \"error\": \"Input must be a JSON object or array\"\n}\n",
    );
}

#[test]
fn ndjson_lines_convert_separately() {
    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.arg("--ndjson");
    cmd.write_stdin("[1,2]\n\n[\"a\",null]\n");

    cmd.assert()
        .success()
        .stdout("type Root = number[];\n\ntype Root = (string | null)[];\n");
}

#[test]
fn json_pointer_and_glob_inputs() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(&dir, "a.json", r#"{"data":{"a":1}}"#);
    write_fixture(&dir, "b.json", r#"{"data":[true]}"#);
    let pattern = format!("{}/*.json", dir.path().display());

    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.args(["--json-pointer", "/data", &pattern]);

    cmd.assert()
        .success()
        .stdout("interface Root {\n  a: number;\n}\n\ntype Root = boolean[];\n");
}

#[test]
fn jq_filter_fans_out() {
    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.args(["--jq-expr", ".pages[]"]);
    cmd.write_stdin(r#"{"pages":[{"n":1},["x"]]}"#);

    cmd.assert()
        .success()
        .stdout("interface Root {\n  n: number;\n}\n\ntype Root = string[];\n");
}

#[test]
fn writes_to_out_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("types.ts");

    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.args(["--out", out.to_str().unwrap()]);
    cmd.write_stdin(r#"{"ok":true}"#);

    cmd.assert().success().stdout("");
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "interface Root {\n  ok: boolean;\n}\n"
    );
}

#[test]
fn stdin_dash_mixes_with_paths_in_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "a.json", r#"{"fromFile":1}"#);

    let mut cmd = cargo_bin_cmd!("json-decl");
    cmd.args(["-", input.to_str().unwrap()]);
    cmd.write_stdin(r#"{"fromStdin":true}"#);

    cmd.assert().success().stdout(
        "interface Root {\n  fromStdin: boolean;\n}\n\ninterface Root {\n  fromFile: number;\n}\n",
    );
}
