//! Queueing helper from panel render code to the app shell's action drain.

use crate::controller::events::AppAction;

pub fn action_name(action: &AppAction) -> &'static str {
    match action {
        AppAction::Navigate(_) => "navigate",
        AppAction::SelectCase(_) => "select_case",
        AppAction::SelectPerspective { .. } => "select_perspective",
        AppAction::OpenExternal(_) => "open_external",
        AppAction::SetStatus(_) => "set_status",
    }
}

pub fn queue_action(queue: &mut Vec<AppAction>, action: AppAction) {
    tracing::debug!(action = action_name(&action), "queued ui action");
    queue.push(action);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::Route;

    #[test]
    fn queued_actions_preserve_order() {
        let mut queue = Vec::new();
        queue_action(&mut queue, AppAction::Navigate(Route::Cases));
        queue_action(&mut queue, AppAction::SetStatus("ok".to_string()));
        assert_eq!(
            queue,
            vec![
                AppAction::Navigate(Route::Cases),
                AppAction::SetStatus("ok".to_string()),
            ]
        );
    }
}
