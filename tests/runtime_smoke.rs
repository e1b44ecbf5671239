// End-to-end runtime smoke test (headless)
// - Starts tokentrackr::app::run in the background with TOKENTRACKR_TEST_HEADLESS=1
//   so no raw TTY setup happens.
// - Points the client at a closed local port so mount queries fail fast.
// - Asserts the task does not panic. If it finishes, it must return Ok(()).
// - If still running after the wait, aborts it and requires a clean cancel.

use std::time::Duration;

use tokentrackr::theme::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("TOKENTRACKR_TEST_HEADLESS", "1");
    }

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let settings = Settings {
        endpoint: format!("http://{addr}/graphql"),
        ..Settings::default()
    };

    let handle = tokio::spawn(async move { tokentrackr::app::run(settings).await });
    tokio::time::sleep(Duration::from_millis(200)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
