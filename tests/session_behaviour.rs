// tests/session_behaviour.rs

use std::error::Error;
use std::sync::{Arc, Mutex};

use dcclaunch::console::mock::MockConsole;
use dcclaunch::launch::{post_launch, LaunchOutcome, LaunchPlan, Session};
use dcclaunch::types::PauseBehaviour;
use dcclaunch_test_utils::fake_launcher::FakeLauncher;
use dcclaunch_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn sample_plan() -> LaunchPlan {
    LaunchPlan {
        tool: "review".to_string(),
        host: "standalone".to_string(),
        interpreter: "python".to_string(),
        interpreter_args: vec![],
        script_path: "tools/review/main.py".to_string(),
        env: vec![("HAL_PROJECT".to_string(), "hal_demo".to_string())],
    }
}

#[tokio::test]
async fn successful_launch_is_silent_and_returns_zero() -> TestResult {
    with_timeout(async {
        init_tracing();

        let launched = Arc::new(Mutex::new(Vec::new()));
        let backend = FakeLauncher::new(LaunchOutcome::Success, launched.clone());
        let console = MockConsole::new();

        let session = Session::new(backend, console.clone(), PauseBehaviour::Failure);
        let code = session.run(sample_plan()).await?;

        assert_eq!(code, 0);
        assert!(console.banners().is_empty());
        assert_eq!(console.ack_count(), 0);
        assert_eq!(launched.lock().unwrap().len(), 1);

        Ok(())
    })
    .await
}

#[tokio::test]
async fn failed_launch_shows_banner_and_waits() -> TestResult {
    with_timeout(async {
        init_tracing();

        let launched = Arc::new(Mutex::new(Vec::new()));
        let backend = FakeLauncher::new(LaunchOutcome::Failed(3), launched.clone());
        let console = MockConsole::new();

        let session = Session::new(backend, console.clone(), PauseBehaviour::Failure);
        let code = session.run(sample_plan()).await?;

        assert_eq!(code, 3);

        let banners = console.banners();
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].tool, "review");
        assert_eq!(banners[0].host, "standalone");
        assert_eq!(banners[0].script_path, "tools/review/main.py");
        assert_eq!(banners[0].exit_code, 3);

        assert_eq!(console.ack_count(), 1);

        Ok(())
    })
    .await
}

#[tokio::test]
async fn pause_never_keeps_banner_but_skips_ack() -> TestResult {
    with_timeout(async {
        init_tracing();

        let launched = Arc::new(Mutex::new(Vec::new()));
        let backend = FakeLauncher::new(LaunchOutcome::Failed(2), launched);
        let console = MockConsole::new();

        let session = Session::new(backend, console.clone(), PauseBehaviour::Never);
        let code = session.run(sample_plan()).await?;

        assert_eq!(code, 2);
        assert_eq!(console.banners().len(), 1);
        assert_eq!(console.ack_count(), 0);

        Ok(())
    })
    .await
}

#[tokio::test]
async fn pause_always_acks_even_on_success() -> TestResult {
    with_timeout(async {
        init_tracing();

        let launched = Arc::new(Mutex::new(Vec::new()));
        let backend = FakeLauncher::new(LaunchOutcome::Success, launched);
        let console = MockConsole::new();

        let session = Session::new(backend, console.clone(), PauseBehaviour::Always);
        let code = session.run(sample_plan()).await?;

        assert_eq!(code, 0);
        assert!(console.banners().is_empty());
        assert_eq!(console.ack_count(), 1);

        Ok(())
    })
    .await
}

#[tokio::test]
async fn backend_receives_the_exact_plan() -> TestResult {
    with_timeout(async {
        init_tracing();

        let launched = Arc::new(Mutex::new(Vec::new()));
        let backend = FakeLauncher::new(LaunchOutcome::Success, launched.clone());
        let console = MockConsole::new();

        let session = Session::new(backend, console, PauseBehaviour::Failure);
        session.run(sample_plan()).await?;

        let plans = launched.lock().unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0], sample_plan());

        Ok(())
    })
    .await
}

#[tokio::test]
async fn backend_errors_abort_without_banner_or_pause() -> TestResult {
    with_timeout(async {
        init_tracing();

        let backend = FakeLauncher::failing("interpreter not found");
        let console = MockConsole::new();

        let session = Session::new(backend, console.clone(), PauseBehaviour::Always);
        let err = session.run(sample_plan()).await.unwrap_err();

        assert!(err.to_string().contains("interpreter not found"));
        assert!(console.banners().is_empty());
        assert_eq!(console.ack_count(), 0);

        Ok(())
    })
    .await
}

#[test]
fn post_launch_success_is_silent_by_default() {
    let actions = post_launch(LaunchOutcome::Success, PauseBehaviour::Failure);
    assert!(!actions.show_banner);
    assert!(!actions.pause);
    assert_eq!(actions.exit_code, 0);
}

#[test]
fn post_launch_failure_propagates_exit_code() {
    let actions = post_launch(LaunchOutcome::Failed(42), PauseBehaviour::Failure);
    assert!(actions.show_banner);
    assert!(actions.pause);
    assert_eq!(actions.exit_code, 42);
}

#[test]
fn post_launch_never_disables_pause_only() {
    let actions = post_launch(LaunchOutcome::Failed(1), PauseBehaviour::Never);
    assert!(actions.show_banner);
    assert!(!actions.pause);
    assert_eq!(actions.exit_code, 1);
}

#[test]
fn post_launch_always_pauses_after_success() {
    let actions = post_launch(LaunchOutcome::Success, PauseBehaviour::Always);
    assert!(!actions.show_banner);
    assert!(actions.pause);
    assert_eq!(actions.exit_code, 0);
}

#[test]
fn post_launch_signal_death_passes_through() {
    let actions = post_launch(LaunchOutcome::Failed(-1), PauseBehaviour::Failure);
    assert!(actions.show_banner);
    assert_eq!(actions.exit_code, -1);
}
