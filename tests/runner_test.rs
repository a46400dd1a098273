use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use rebrand::cli::Args;
use rebrand::error::{Error, Result};
use rebrand::parser::Answers;
use rebrand::prompt::Prompter;
use rebrand::runner::run_from;
use tempfile::TempDir;

/// Feeds canned answers and confirmations instead of a terminal; running
/// out of either means the flow prompted where it should not have.
struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    confirmations: RefCell<VecDeque<bool>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str], confirmations: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
            confirmations: RefCell::new(confirmations.iter().copied().collect()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn read_text(&self, prompt: &str) -> Result<String> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::PromptError(format!("unexpected prompt: {}", prompt)))
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.confirmations
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::PromptError(format!("unexpected confirmation: {}", prompt)))
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A miniature template checkout with placeholders in every casing.
fn build_template(root: &Path) {
    write_file(
        &root.join("README.md"),
        "# My Project\nPackage: myproject\nImage: my-project-api\nClass: MyProjectConfig\nEnv: MY_PROJECT_MODE\n",
    );
    write_file(&root.join("backend/myproject/settings.py"), "APP_NAME = \"myproject\"\n");
    write_file(
        &root.join("backend/.env.example"),
        "BACKEND_PORT=8000\nCORS_ALLOWED_ORIGINS=http://localhost:5173\n# backend config\n",
    );
    write_file(
        &root.join("frontend/.env.example"),
        "VITE_PORT=5173\nVITE_API_URL=http://localhost:8000\n",
    );
    write_file(
        &root.join("e2e-tests/.env.example"),
        "BACKEND_PORT=8000\nFRONTEND_PORT=5173\nBACKEND_URL=http://localhost:8000\nFRONTEND_URL=http://localhost:5173\n",
    );
    write_file(&root.join("node_modules/pkg/index.js"), "myproject");
    write_file(&root.join("setup.py"), "print('myproject')");
}

#[test]
fn test_full_copy_run() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("template");
    let dst = temp_dir.path().join("demo-app");
    build_template(&src);

    let args = Args {
        name: Some("Demo App".to_string()),
        backend_port: Some("9000".to_string()),
        frontend_port: Some("3000".to_string()),
        dest: Some(dst.clone()),
        yes: true,
        skip_install: true,
        ..Default::default()
    };
    let prompt = ScriptedPrompter::new(&[], &[]);

    run_from(&src, &args, &Answers::default(), &prompt).unwrap();

    assert_eq!(
        fs::read_to_string(dst.join("README.md")).unwrap(),
        "# Demo App\nPackage: demo_app\nImage: demo-app-api\nClass: DemoAppConfig\nEnv: DEMO_APP_MODE\n"
    );
    assert_eq!(
        fs::read_to_string(dst.join("backend/demo_app/settings.py")).unwrap(),
        "APP_NAME = \"demo_app\"\n"
    );
    assert!(!dst.join("backend/myproject").exists());
    assert_eq!(
        fs::read_to_string(dst.join("backend/.env")).unwrap(),
        "BACKEND_PORT=9000\nCORS_ALLOWED_ORIGINS=http://localhost:3000\n# backend config\n"
    );
    assert_eq!(
        fs::read_to_string(dst.join("frontend/.env")).unwrap(),
        "VITE_PORT=3000\nVITE_API_URL=http://localhost:9000\n"
    );
    assert_eq!(
        fs::read_to_string(dst.join("e2e-tests/.env")).unwrap(),
        "BACKEND_PORT=9000\nFRONTEND_PORT=3000\nBACKEND_URL=http://localhost:9000\nFRONTEND_URL=http://localhost:3000\n"
    );
    assert!(!dst.join("node_modules").exists());
    assert!(!dst.join("setup.py").exists());

    // The source template is left exactly as it was.
    assert!(src.join("backend/myproject").is_dir());
    assert!(fs::read_to_string(src.join("README.md")).unwrap().contains("My Project"));
    assert!(!src.join("backend/.env").exists());
}

#[test]
fn test_declined_confirmation_mutates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("template");
    let dst = temp_dir.path().join("demo-app");
    build_template(&src);

    let args = Args {
        name: Some("Demo App".to_string()),
        backend_port: Some("9000".to_string()),
        frontend_port: Some("3000".to_string()),
        dest: Some(dst.clone()),
        skip_install: true,
        ..Default::default()
    };
    let prompt = ScriptedPrompter::new(&[], &[false]);

    run_from(&src, &args, &Answers::default(), &prompt).unwrap();

    assert!(!dst.exists());
    assert!(fs::read_to_string(src.join("README.md")).unwrap().contains("My Project"));
}

#[test]
fn test_in_place_run() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("checkout");
    build_template(&root);

    let args = Args {
        name: Some("Demo App".to_string()),
        backend_port: Some("".to_string()),
        frontend_port: Some("".to_string()),
        in_place: true,
        skip_install: true,
        ..Default::default()
    };
    // In-place mode asks for no destination and no confirmation.
    let prompt = ScriptedPrompter::new(&[], &[]);

    run_from(&root, &args, &Answers::default(), &prompt).unwrap();

    assert!(fs::read_to_string(root.join("README.md")).unwrap().contains("Demo App"));
    assert!(root.join("backend/demo_app").is_dir());
    assert!(!root.join("backend/myproject").exists());
    // Excluded entries survive an in-place rebrand untouched.
    assert_eq!(fs::read_to_string(root.join("setup.py")).unwrap(), "print('myproject')");
    assert_eq!(
        fs::read_to_string(root.join("node_modules/pkg/index.js")).unwrap(),
        "myproject"
    );
    assert_eq!(
        fs::read_to_string(root.join("backend/.env")).unwrap(),
        "BACKEND_PORT=8000\nCORS_ALLOWED_ORIGINS=http://localhost:5173\n# backend config\n"
    );
}

#[test]
fn test_defaults_for_canonical_name() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("template");
    let dst = temp_dir.path().join("my-project");
    build_template(&src);

    let args = Args { yes: true, skip_install: true, ..Default::default() };
    let answers = Answers {
        name: Some("My Project".to_string()),
        backend_port: None,
        frontend_port: None,
        dest: Some(dst.clone()),
    };
    // Empty port answers select the documented defaults.
    let prompt = ScriptedPrompter::new(&["", ""], &[]);

    run_from(&src, &args, &answers, &prompt).unwrap();

    assert_eq!(
        fs::read_to_string(dst.join("backend/.env")).unwrap(),
        "BACKEND_PORT=8000\nCORS_ALLOWED_ORIGINS=http://localhost:5173\n# backend config\n"
    );
    // The snake variant of "My Project" carries an underscore, so the
    // backend package is still renamed.
    assert!(dst.join("backend/my_project").is_dir());
    assert!(!dst.join("backend/myproject").exists());
    assert!(fs::read_to_string(dst.join("README.md")).unwrap().starts_with("# My Project"));
}

#[test]
fn test_missing_env_example_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("template");
    let dst = temp_dir.path().join("demo-app");
    build_template(&src);
    fs::remove_file(src.join("frontend/.env.example")).unwrap();

    let args = Args {
        name: Some("Demo App".to_string()),
        backend_port: Some("9000".to_string()),
        frontend_port: Some("3000".to_string()),
        dest: Some(dst.clone()),
        yes: true,
        skip_install: true,
        ..Default::default()
    };
    let prompt = ScriptedPrompter::new(&[], &[]);

    run_from(&src, &args, &Answers::default(), &prompt).unwrap();

    assert!(dst.join("backend/.env").is_file());
    assert!(!dst.join("frontend/.env").exists());
    assert!(dst.join("e2e-tests/.env").is_file());
}

#[test]
fn test_failed_install_hook_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("checkout");
    build_template(&root);

    // skip_install stays off and the root has no Makefile, so the hook
    // cannot succeed whether or not make is installed.
    let args = Args {
        name: Some("Demo App".to_string()),
        backend_port: Some("9000".to_string()),
        frontend_port: Some("3000".to_string()),
        in_place: true,
        ..Default::default()
    };
    let prompt = ScriptedPrompter::new(&[], &[]);

    run_from(&root, &args, &Answers::default(), &prompt).unwrap();

    // Mutations made before the hook ran are kept.
    assert!(fs::read_to_string(root.join("README.md")).unwrap().contains("Demo App"));
    assert!(root.join("backend/demo_app").is_dir());
    assert_eq!(
        fs::read_to_string(root.join("backend/.env")).unwrap(),
        "BACKEND_PORT=9000\nCORS_ALLOWED_ORIGINS=http://localhost:3000\n# backend config\n"
    );
}

#[test]
fn test_invalid_port_fails_before_any_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("template");
    let dst = temp_dir.path().join("demo-app");
    build_template(&src);

    let args = Args {
        name: Some("Demo App".to_string()),
        backend_port: Some("abc".to_string()),
        frontend_port: Some("3000".to_string()),
        dest: Some(dst.clone()),
        yes: true,
        skip_install: true,
        ..Default::default()
    };
    let prompt = ScriptedPrompter::new(&[], &[]);

    match run_from(&src, &args, &Answers::default(), &prompt) {
        Err(Error::InvalidPort(s)) => assert_eq!(s, "abc"),
        other => panic!("Expected InvalidPort, got {:?}", other),
    }
    assert!(!dst.exists());
}
