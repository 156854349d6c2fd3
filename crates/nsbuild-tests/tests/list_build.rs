//! End-to-end list builds over a real source tree

use anyhow::Result;
use nsbuild_lib::build::{BuildError, BuildOptions, run_build};
use nsbuild_lib::deps::DependencyError;
use nsbuild_tests::{MockProcessProvider, TestEnvironment};

fn app_tree() -> Result<TestEnvironment> {
    let env = TestEnvironment::new()?;
    env.write_base("runtime/base.js")?;
    env.write_module("app/dom.js", &["app.dom"], &[], "")?;
    env.write_module("app/events.js", &["app.events"], &["app.dom"], "")?;
    env.write_module(
        "app/ui/button.js",
        &["app.ui.Button"],
        &["app.events", "app.dom"],
        "",
    )?;
    env.write_module(
        "app/main.js",
        &["app.main"],
        &["app.ui.Button", "app.events"],
        "",
    )?;
    Ok(env)
}

#[test]
fn builds_transitive_order_with_base_first() -> Result<()> {
    let env = app_tree()?;

    let out = run_build(&env.build_options(&["app.main"]), &MockProcessProvider::new())?;
    assert_eq!(
        out,
        env.listed(&[
            "runtime/base.js",
            "app/dom.js",
            "app/events.js",
            "app/ui/button.js",
            "app/main.js",
        ])
    );
    Ok(())
}

#[test]
fn requesting_a_leaf_returns_only_its_provider() -> Result<()> {
    let env = app_tree()?;

    let out = run_build(&env.build_options(&["app.dom"]), &MockProcessProvider::new())?;
    assert_eq!(out, env.listed(&["runtime/base.js", "app/dom.js"]));
    Ok(())
}

#[test]
fn repeated_builds_are_identical() -> Result<()> {
    let env = app_tree()?;
    let options = env.build_options(&["app.main", "app.dom"]);

    let first = run_build(&options, &MockProcessProvider::new())?;
    let second = run_build(&options, &MockProcessProvider::new())?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn inputs_are_resolved_before_namespaces() -> Result<()> {
    let env = app_tree()?;
    let options = BuildOptions {
        inputs: vec![env.src_path.join("app/events.js")],
        ..env.build_options(&["app.main"])
    };

    let out = run_build(&options, &MockProcessProvider::new())?;
    assert_eq!(
        out,
        env.listed(&[
            "runtime/base.js",
            "app/dom.js",
            "app/events.js",
            "app/ui/button.js",
            "app/main.js",
        ])
    );
    Ok(())
}

#[test]
fn explicit_files_join_the_scanned_set() -> Result<()> {
    let env = app_tree()?;
    let outside = TestEnvironment::new()?;
    let extra = outside.write_module("extra.js", &["extra"], &["app.dom"], "")?;

    let options = BuildOptions {
        files: vec![extra.clone()],
        ..env.build_options(&["extra"])
    };

    let out = run_build(&options, &MockProcessProvider::new())?;
    assert_eq!(
        out,
        format!(
            "{}{}\n",
            env.listed(&["runtime/base.js", "app/dom.js"]),
            extra.display()
        )
    );
    Ok(())
}

#[test]
fn hidden_directories_are_not_scanned() -> Result<()> {
    let env = app_tree()?;
    // would be a duplicate provide if scanned
    env.write_module(".cache/dom.js", &["app.dom"], &[], "")?;

    let out = run_build(&env.build_options(&["app.dom"]), &MockProcessProvider::new())?;
    assert_eq!(out, env.listed(&["runtime/base.js", "app/dom.js"]));
    Ok(())
}

#[test]
fn missing_provider_names_the_requirement_chain() -> Result<()> {
    let env = app_tree()?;
    env.write_module("app/broken.js", &["app.broken"], &["app.events", "app.gone"], "")?;

    let err = run_build(&env.build_options(&["app.broken"]), &MockProcessProvider::new())
        .unwrap_err();
    match &err {
        BuildError::Dependency(DependencyError::UnknownNamespace {
            namespace, chain, ..
        }) => {
            assert_eq!(namespace, "app.gone");
            assert_eq!(chain, &["app.broken"]);
        }
        other => panic!("expected UnknownNamespace, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn duplicate_provider_reports_both_files() -> Result<()> {
    let env = app_tree()?;
    env.write_module("vendor/dom.js", &["app.dom"], &[], "")?;

    let err =
        run_build(&env.build_options(&["app.dom"]), &MockProcessProvider::new()).unwrap_err();
    match &err {
        BuildError::Dependency(DependencyError::DuplicateProvide {
            namespace,
            first,
            second,
        }) => {
            assert_eq!(namespace, "app.dom");
            assert!(first.ends_with("dom.js"));
            assert!(second.contains("vendor"));
        }
        other => panic!("expected DuplicateProvide, got {:?}", other),
    }
    Ok(())
}
