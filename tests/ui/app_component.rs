use super::fake_api::FakeApi;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use currencist::api::ApiError;
use currencist::config::Config;
use currencist::conversion::ConversionRequest;
use currencist::logger::Logger;
use currencist::ui::app_component::{AppComponent, AppState, Status};
use currencist::ui::core::{Action, AmountEdit, CurrencySlot, DialogType, EventType};
use std::sync::Arc;

const INR_BODY: &str = r#"{"amount":1.0,"base":"USD","date":"2023-10-10","rates":{"INR":83.47}}"#;

fn app_with(api: Arc<FakeApi>) -> AppComponent {
    AppComponent::new(api, &Config::default(), Logger::new())
}

async fn loaded_app(api: Arc<FakeApi>) -> AppComponent {
    let mut app = app_with(api);
    app.start();
    app.settle().await;
    app
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn set_amount(app: &mut AppComponent, text: &str) {
    app.dispatch(Action::EditAmount(AmountEdit::Clear));
    for c in text.chars() {
        app.dispatch(Action::EditAmount(AmountEdit::Insert(c)));
    }
}

fn dialog_message(app: &AppComponent) -> String {
    match app.dialog() {
        Some(DialogType::Error { message, .. }) | Some(DialogType::Warning { message, .. }) => message.clone(),
        other => panic!("expected an error or warning dialog, got {:?}", other),
    }
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.status, Status::Loading);
    assert!(state.currencies.is_empty());
    assert!(state.result_text.is_empty());
}

#[tokio::test]
async fn test_initial_state_before_load() {
    let api = Arc::new(FakeApi::new(&["USD", "INR"], INR_BODY));
    let app = app_with(api.clone());

    assert_eq!(app.state().status.to_string(), "Loading currencies...");
    assert_eq!(app.state().amount_input, "1");
    assert!(app.state().from.is_empty());
    assert!(app.state().to.is_empty());
    assert_eq!(api.currency_calls(), 0);
}

#[tokio::test]
async fn test_load_sets_sorted_codes_and_defaults() {
    let api = Arc::new(FakeApi::new(&["USD", "INR", "EUR"], INR_BODY));
    let app = loaded_app(api.clone()).await;

    assert_eq!(api.currency_calls(), 1);
    assert_eq!(app.state().currencies, vec!["EUR", "INR", "USD"]);
    assert_eq!(app.state().from, "USD");
    assert_eq!(app.state().to, "INR");
    assert_eq!(app.state().status.to_string(), "Ready");
    assert!(app.dialog().is_none());
}

#[tokio::test]
async fn test_load_falls_back_to_first_codes() {
    let api = Arc::new(FakeApi::new(&["GBP", "CHF", "AUD"], INR_BODY));
    let app = loaded_app(api).await;

    assert_eq!(app.state().from, "AUD");
    assert_eq!(app.state().to, "CHF");
}

#[tokio::test]
async fn test_load_runs_once() {
    let api = Arc::new(FakeApi::new(&["USD", "INR"], INR_BODY));
    let mut app = loaded_app(api.clone()).await;

    app.dispatch(Action::LoadCurrencies);
    app.settle().await;

    assert_eq!(api.currency_calls(), 1);
}

#[tokio::test]
async fn test_failed_load_leaves_selectors_empty() {
    let api = Arc::new(FakeApi::failing_currencies(ApiError::Network("connection refused".into())));
    let mut app = loaded_app(api.clone()).await;

    assert!(app.state().currencies.is_empty());
    assert!(app.state().from.is_empty());
    assert!(app.state().to.is_empty());
    assert_eq!(app.state().status.to_string(), "Failed to load currencies");
    assert_eq!(
        dialog_message(&app),
        "Could not load currencies list:\nNetwork error: connection refused"
    );

    // Conversion stays impossible
    app.dispatch(Action::HideDialog);
    app.dispatch(Action::Convert);
    app.settle().await;
    assert!(matches!(app.dialog(), Some(DialogType::Warning { .. })));
    assert_eq!(dialog_message(&app), "Please select both From and To currencies");
    assert!(api.conversions().is_empty());

    // Selectors cannot be moved onto anything either
    app.dispatch(Action::HideDialog);
    app.dispatch(Action::CycleCurrency {
        slot: CurrencySlot::From,
        forward: true,
    });
    assert!(app.state().from.is_empty());
}

#[tokio::test]
async fn test_reload_after_failure() {
    let api = Arc::new(FakeApi::failing_currencies(ApiError::Timeout));
    let mut app = loaded_app(api.clone()).await;
    assert_eq!(app.state().status, Status::LoadFailed);

    api.set_currencies(Ok(vec!["INR".to_string(), "USD".to_string()]));
    app.dispatch(Action::HideDialog);
    app.handle_event(ctrl('r'));
    app.settle().await;

    assert_eq!(api.currency_calls(), 2);
    assert_eq!(app.state().status, Status::Ready);
    assert_eq!(app.state().from, "USD");
    assert_eq!(app.state().to, "INR");
}

#[tokio::test]
async fn test_empty_currency_list_is_a_failure() {
    let api = Arc::new(FakeApi::new(&[], INR_BODY));
    let app = loaded_app(api).await;

    assert_eq!(app.state().status, Status::LoadFailed);
    assert!(matches!(app.dialog(), Some(DialogType::Error { .. })));
}

#[tokio::test]
async fn test_non_numeric_amount_issues_no_request() {
    let api = Arc::new(FakeApi::new(&["USD", "INR"], INR_BODY));
    let mut app = loaded_app(api.clone()).await;

    for input in ["abc", "", "1.2.3", "12abc", "--1", "NaN", "-5"] {
        set_amount(&mut app, input);
        app.dispatch(Action::Convert);
        assert_eq!(app.active_task_count(), 0, "input {:?} spawned a task", input);

        match app.dialog() {
            Some(DialogType::Error { title, message }) => {
                assert_eq!(title, "Invalid input");
                assert_eq!(message, "Please enter a numeric amount");
            }
            other => panic!("input {:?}: expected invalid input dialog, got {:?}", input, other),
        }
        assert_eq!(app.state().status, Status::Ready);
        app.dispatch(Action::HideDialog);
    }

    app.settle().await;
    assert!(api.conversions().is_empty());
}

#[tokio::test]
async fn test_valid_amount_issues_exactly_one_request() {
    let api = Arc::new(FakeApi::new(&["USD", "INR", "EUR"], INR_BODY));
    let mut app = loaded_app(api.clone()).await;

    set_amount(&mut app, "1");
    app.dispatch(Action::Convert);
    assert_eq!(app.state().status.to_string(), "Converting...");
    app.settle().await;

    assert_eq!(api.conversions(), vec![ConversionRequest::new(1.0, "USD", "INR")]);
    assert_eq!(app.state().result_text, "1.0000 USD = 83.4700 INR  (date: 2023-10-10)");
    assert_eq!(app.state().status, Status::Ready);
    assert!(app.dialog().is_none());
}

#[tokio::test]
async fn test_zero_amount_is_accepted() {
    let api = Arc::new(FakeApi::new(&["USD", "INR"], r#"{"date":"2023-10-10","rates":{"INR":0}}"#));
    let mut app = loaded_app(api.clone()).await;

    set_amount(&mut app, "0");
    app.dispatch(Action::Convert);
    app.settle().await;

    assert_eq!(api.conversions(), vec![ConversionRequest::new(0.0, "USD", "INR")]);
    assert_eq!(app.state().result_text, "0.0000 USD = 0.0000 INR  (date: 2023-10-10)");
}

#[tokio::test]
async fn test_missing_rate_is_a_conversion_error() {
    let api = Arc::new(FakeApi::new(
        &["USD", "INR"],
        r#"{"date":"2023-10-10","rates":{"EUR":0.91}}"#,
    ));
    let mut app = loaded_app(api).await;

    app.dispatch(Action::Convert);
    app.settle().await;

    match app.dialog() {
        Some(DialogType::Error { title, message }) => {
            assert_eq!(title, "Conversion Error");
            assert_eq!(
                message,
                "Could not convert currencies:\nConversion rate not returned by API"
            );
        }
        other => panic!("expected conversion error dialog, got {:?}", other),
    }
    assert!(app.state().result_text.is_empty());
    assert_eq!(app.state().status, Status::Ready);
}

#[tokio::test]
async fn test_failed_conversion_keeps_previous_result() {
    let api = Arc::new(FakeApi::new(&["USD", "INR"], INR_BODY));
    let mut app = loaded_app(api.clone()).await;

    app.dispatch(Action::Convert);
    app.settle().await;
    let first = app.state().result_text.clone();

    api.set_conversion(Err(ApiError::Status {
        status: 503,
        message: "Service Unavailable".to_string(),
    }));
    app.dispatch(Action::Convert);
    app.settle().await;

    assert_eq!(app.state().result_text, first);
    assert_eq!(
        dialog_message(&app),
        "Could not convert currencies:\nHTTP 503: Service Unavailable"
    );
    assert_eq!(api.conversions().len(), 2);
}

#[tokio::test]
async fn test_swap_is_its_own_inverse() {
    let api = Arc::new(FakeApi::new(&["USD", "INR", "EUR"], INR_BODY));
    let mut app = loaded_app(api).await;

    app.dispatch(Action::Swap);
    assert_eq!((app.state().from.as_str(), app.state().to.as_str()), ("INR", "USD"));

    app.dispatch(Action::Swap);
    assert_eq!((app.state().from.as_str(), app.state().to.as_str()), ("USD", "INR"));
}

#[tokio::test]
async fn test_swapped_selection_is_used_for_conversion() {
    let api = Arc::new(FakeApi::new(
        &["USD", "INR"],
        r#"{"date":"2023-10-10","rates":{"USD":0.012}}"#,
    ));
    let mut app = loaded_app(api.clone()).await;

    app.handle_event(ctrl('s'));
    set_amount(&mut app, "100");
    app.dispatch(Action::Convert);
    app.settle().await;

    assert_eq!(api.conversions(), vec![ConversionRequest::new(100.0, "INR", "USD")]);
    assert_eq!(app.state().result_text, "100.0000 INR = 0.0120 USD  (date: 2023-10-10)");
}

#[tokio::test]
async fn test_keyboard_flow() {
    let api = Arc::new(FakeApi::new(&["EUR", "INR", "USD"], r#"{"date":"2024-01-02","rates":{"EUR":22.5}}"#));
    let mut app = loaded_app(api.clone()).await;

    // Amount has focus: replace it with 25
    app.handle_event(key(KeyCode::Delete));
    app.handle_event(key(KeyCode::Char('2')));
    app.handle_event(key(KeyCode::Char('5')));
    assert_eq!(app.state().amount_input, "25");

    // Tab to "To" and jump to EUR
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Char('e')));
    assert_eq!(app.state().to, "EUR");

    app.handle_event(key(KeyCode::Enter));
    app.settle().await;

    assert_eq!(api.conversions(), vec![ConversionRequest::new(25.0, "USD", "EUR")]);
    assert_eq!(app.state().result_text, "25.0000 USD = 22.5000 EUR  (date: 2024-01-02)");
}

#[tokio::test]
async fn test_dialog_is_modal() {
    let api = Arc::new(FakeApi::new(&["USD", "INR"], INR_BODY));
    let mut app = loaded_app(api.clone()).await;

    set_amount(&mut app, "x");
    app.handle_event(key(KeyCode::Enter));
    assert!(app.dialog().is_some());

    // Enter closes the dialog instead of converting again
    set_amount(&mut app, "1");
    app.handle_event(key(KeyCode::Enter));
    app.settle().await;

    assert!(app.dialog().is_none());
    assert!(api.conversions().is_empty());
}

#[tokio::test]
async fn test_escape_quits() {
    let api = Arc::new(FakeApi::new(&["USD", "INR"], INR_BODY));
    let mut app = loaded_app(api).await;

    app.handle_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_configured_defaults_win_when_listed() {
    let api = Arc::new(FakeApi::new(&["EUR", "GBP", "INR", "USD"], INR_BODY));
    let mut config = Config::default();
    config.defaults.from = "gbp".to_string();
    config.defaults.to = "EUR".to_string();
    config.defaults.amount = "10".to_string();

    let mut app = AppComponent::new(api, &config, Logger::new());
    app.start();
    app.settle().await;

    assert_eq!(app.state().from, "GBP");
    assert_eq!(app.state().to, "EUR");
    assert_eq!(app.state().amount_input, "10");
}

#[tokio::test]
async fn test_background_results_are_logged() {
    let api = Arc::new(FakeApi::new(&["USD", "INR"], INR_BODY));
    let app = loaded_app(api).await;

    let logs = app.logger().get_logs();
    assert!(logs.iter().any(|line| line.contains("Loaded 2 currencies")));
}

#[tokio::test]
async fn test_logs_dialog_lists_running_tasks() {
    let api = Arc::new(FakeApi::new(&["USD", "INR"], INR_BODY));
    let mut app = loaded_app(api).await;

    app.dispatch(Action::Convert);
    assert_eq!(app.active_task_count(), 1);

    app.handle_event(ctrl('l'));
    assert_eq!(app.dialog(), Some(&DialogType::Logs));

    let logs = app.logger().get_logs();
    assert!(logs[0].contains("Running task #2: Convert 1 USD to INR"));

    app.settle().await;
}
