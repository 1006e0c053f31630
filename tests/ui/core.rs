use super::fake_api::FakeApi;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use currencist::api::ApiError;
use currencist::conversion::ConversionRequest;
use currencist::ui::core::{Action, EventHandler, EventType, FormField, TaskManager};
use std::sync::Arc;

#[test]
fn test_focus_order_round_trip() {
    let mut field = FormField::default();
    assert_eq!(field, FormField::Amount);

    let mut visited = Vec::new();
    for _ in 0..5 {
        visited.push(field);
        field = field.next();
    }
    assert_eq!(field, FormField::Amount);
    assert_eq!(
        visited,
        vec![
            FormField::Amount,
            FormField::From,
            FormField::To,
            FormField::ConvertButton,
            FormField::SwapButton,
        ]
    );

    for f in visited {
        assert_eq!(f.next().previous(), f);
    }
}

#[test]
fn test_key_release_is_ignored() {
    let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert!(matches!(EventHandler::translate(Event::Key(press)), EventType::Key(_)));

    let release = KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(matches!(EventHandler::translate(Event::Key(release)), EventType::Other));

    assert!(matches!(
        EventHandler::translate(Event::Resize(80, 24)),
        EventType::Resize(80, 24)
    ));
}

#[test]
fn test_event_handler_tick_rate() {
    let handler = EventHandler::new();
    assert!(handler.tick_rate().as_millis() > 0);
}

#[tokio::test]
async fn test_task_manager_reports_through_channel() {
    let api = Arc::new(FakeApi::new(&["USD", "EUR"], r#"{"date":"2024-05-01","rates":{"EUR":0.93}}"#));
    let (mut manager, mut rx) = TaskManager::new();

    let load_id = manager.spawn_currency_load(api.clone());
    let convert_id = manager.spawn_conversion(api.clone(), ConversionRequest::new(1.0, "USD", "EUR"));
    assert_ne!(load_id, convert_id);
    assert_eq!(manager.task_count(), 2);

    manager.join_all().await;
    assert_eq!(manager.task_count(), 0);

    let mut seen_load = false;
    let mut seen_conversion = false;
    while let Ok(action) = rx.try_recv() {
        match action {
            Action::CurrenciesLoaded { task_id, codes } => {
                assert_eq!(task_id, load_id);
                assert_eq!(codes, vec!["USD", "EUR"]);
                seen_load = true;
            }
            Action::ConversionCompleted { task_id, result } => {
                assert_eq!(task_id, convert_id);
                assert_eq!(result.to_string(), "1.0000 USD = 0.9300 EUR  (date: 2024-05-01)");
                seen_conversion = true;
            }
            other => panic!("unexpected action {:?}", other),
        }
    }
    assert!(seen_load && seen_conversion);
}

#[tokio::test]
async fn test_task_manager_reports_failures() {
    let api = Arc::new(FakeApi::failing_currencies(ApiError::Timeout));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_currency_load(api);
    manager.join_all().await;

    match rx.try_recv() {
        Ok(Action::CurrenciesFailed { error, .. }) => assert_eq!(error, "Request timed out"),
        other => panic!("expected CurrenciesFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cleanup_finished_tasks() {
    let api = Arc::new(FakeApi::new(&["USD"], "{}"));
    let (mut manager, _rx) = TaskManager::new();

    manager.spawn_currency_load(api);
    assert_eq!(manager.running_tasks().len(), 1);

    // Let the spawned task run to completion
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    let finished = manager.cleanup_finished_tasks();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].1, "Load currencies");
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_cancel_all_tasks_drops_pending_results() {
    let api = Arc::new(FakeApi::new(&["USD"], "{}"));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_currency_load(api.clone());
    manager.spawn_conversion(api.clone(), ConversionRequest::new(1.0, "USD", "INR"));
    assert_eq!(manager.task_count(), 2);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);

    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    assert!(rx.try_recv().is_err());
    assert_eq!(api.currency_calls(), 0);
    assert!(api.conversions().is_empty());
}
